use std::sync::Arc;

use crate::config::Config;
use crate::services::{AnalysisClient, ResumeAnalyzer};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config, analyzer: Arc<dyn ResumeAnalyzer>) -> Self {
        Self {
            config: Arc::new(config),
            analyzer,
            sessions: SessionStore::new(),
        }
    }

    /// State wired to the real backend named in the configuration.
    pub fn from_config(config: Config) -> Self {
        let client = AnalysisClient::new(&config.backend_url);
        tracing::info!(endpoint = client.endpoint(), "Analysis backend configured");
        Self::new(config, Arc::new(client))
    }
}
