use std::sync::Arc;

use batchline_core::{Config, RequestDispatcher};

/// Shared application state
pub struct AppState {
    config: Config,
    dispatcher: Arc<RequestDispatcher>,
}

impl AppState {
    pub fn new(config: Config, dispatcher: Arc<RequestDispatcher>) -> Self {
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dispatcher(&self) -> &RequestDispatcher {
        self.dispatcher.as_ref()
    }
}
