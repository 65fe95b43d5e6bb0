pub mod config;
pub mod device;
pub mod flow;
pub mod models;
pub mod upload;

pub use config::Config;
pub use flow::{Action, Alert, Effect, FlowState};
pub use models::{Coordinates, Page, PhotoSource, Report};
pub use upload::{UploadOutcome, submit_report};

#[cfg(feature = "gui")]
pub mod gui;
