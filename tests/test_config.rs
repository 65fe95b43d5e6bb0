//! Tests for the configuration layer.

use std::io::Write;

use fieldpost::config::{Config, DEFAULT_ENDPOINT};
use fieldpost::models::Coordinates;

#[test]
fn empty_config_falls_back_to_defaults() {
    let config: Config = serde_json::from_str("{}").expect("parse");
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.position, None);
}

#[test]
fn config_file_round_trips() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(
        br#"{
            "endpoint": "http://localhost:5000/upload",
            "position": { "latitude": 12.9, "longitude": 77.6 }
        }"#,
    )?;

    let config = Config::load(&path)?;
    assert_eq!(config.endpoint, "http://localhost:5000/upload");
    assert_eq!(
        config.position,
        Some(Coordinates {
            latitude: 12.9,
            longitude: 77.6
        })
    );
    Ok(())
}

#[test]
fn malformed_config_file_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json")?;

    assert!(Config::load(&path).is_err());
    Ok(())
}
