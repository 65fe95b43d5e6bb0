mod app;
mod message;
pub mod screens;
mod state;

pub use app::{FieldpostApp, run};
pub use message::Message;
pub use state::AppState;
