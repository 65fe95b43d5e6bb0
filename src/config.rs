use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

/// Endpoint used when no config file and no override are present.
pub const DEFAULT_ENDPOINT: &str = "http://34.58.174.187:5000/upload";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Target URL for the multipart upload.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Fixed coordinates reported by the desktop location backend.
    #[serde(default)]
    pub position: Option<Coordinates>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            position: None,
        }
    }
}

impl Config {
    /// Load a config file, failing loudly on IO or parse errors.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("could not parse config file {}", path.display()))
    }

    /// Load from the per-user config directory, or fall back to
    /// defaults if the file is missing or unreadable.
    pub fn load_default() -> Self {
        let path = Self::default_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!(
                        "could not parse {}: {err}; using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fieldpost")
            .join("config.json")
    }
}
