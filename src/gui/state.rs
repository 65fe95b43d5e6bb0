use crate::config::Config;
use crate::flow::FlowState;

/// State shared by every screen: the submission flow plus the handles
/// needed to run its effects.
#[derive(Debug)]
pub struct AppState {
    pub flow: FlowState,
    pub config: Config,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            flow: FlowState::default(),
            config,
            client: reqwest::Client::new(),
        }
    }
}
