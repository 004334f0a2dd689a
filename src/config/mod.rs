use ::config::{Config as Settings, Environment};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

use crate::view::BannerCopy;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub backend_url: String,
    pub max_file_size_mb: usize,
    /// Idle sessions are evicted after this many minutes.
    pub session_ttl_minutes: u64,
    #[serde(default)]
    pub shortlist_threshold_percent: Option<u8>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_environment(Environment::default().try_parsing(true))
    }

    /// Builds the configuration from an explicit environment source, falling
    /// back to defaults for anything it does not set.
    pub fn from_environment(environment: Environment) -> Result<Self> {
        let config: Config = Settings::builder()
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 8080)?
            .set_default("backend_url", "http://localhost:8000")?
            .set_default("max_file_size_mb", 10)?
            .set_default("session_ttl_minutes", 30)?
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Failed to parse configuration")?;

        config.validate()?;

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must be greater than 0"));
        }
        if self.max_file_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }
        if self.session_ttl_minutes == 0 {
            return Err(anyhow::anyhow!("SESSION_TTL_MINUTES must be greater than 0"));
        }
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "BACKEND_URL must be an http(s) URL, got {:?}",
                self.backend_url
            ));
        }
        if let Some(threshold) = self.shortlist_threshold_percent {
            if threshold > 100 {
                return Err(anyhow::anyhow!(
                    "SHORTLIST_THRESHOLD_PERCENT must be between 0 and 100"
                ));
            }
        }
        Ok(())
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_minutes * 60)
    }

    pub fn banner_copy(&self) -> BannerCopy {
        BannerCopy {
            threshold_percent: self.shortlist_threshold_percent,
        }
    }
}
