use serde::{Deserialize, Serialize};

/// Which of the two screens is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Main,
}

/// Where a photo should be obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    Camera,
    Gallery,
}

/// A single position fix in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A fully assembled report, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Local path or `file://` URI of the attached photo.
    pub photo: String,
    pub description: String,
    pub position: Coordinates,
}
