//! The device capability boundary: permissions and one-shot capture
//! or query calls. The submission flow only ever sees the outcome
//! types defined here, so backends can be swapped without touching it.

use thiserror::Error;

/// A device capability the application may be denied access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Gallery,
    Camera,
    Location,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Gallery => "Gallery",
            Capability::Camera => "Camera",
            Capability::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeviceError {
    #[error("{} access was denied", .0.label())]
    PermissionDenied(Capability),
    #[error("device capability unavailable: {0}")]
    Unavailable(String),
}

#[cfg(feature = "gui")]
pub mod desktop;
