//! The Graph API client handle.

use reqwest::Client;
use std::sync::Arc;

use crate::config::InstagramConfig;
use crate::error::InstagramError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the Instagram Graph API.
///
/// Holds one shared HTTP connection pool and the immutable credentials. Cloning is
/// cheap, so a single instance is built at startup and handed to every request handler.
#[derive(Debug, Clone)]
pub struct InstagramClient {
    pub(super) http: Client,
    pub(super) config: Arc<InstagramConfig>,
}

impl InstagramClient {
    /// Builds a client for the given credentials.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ig_autopost::{InstagramClient, InstagramConfig};
    ///
    /// let client = InstagramClient::new(InstagramConfig::from_env()).unwrap();
    /// ```
    pub fn new(config: InstagramConfig) -> Result<Self, InstagramError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(InstagramError::ClientBuild)?;

        Ok(InstagramClient {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &InstagramConfig {
        &self.config
    }

    /// Absolute Graph API URL for `path`.
    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }
}
