//! Configuration module for the ig-autopost service.
//!
//! This module contains the credential structure and environment variable handling
//! for the Instagram Graph API integration.

use log::{debug, info, warn};
use std::env;
use std::fmt;

/// Base URL of the Instagram Graph API version this service targets.
pub const GRAPH_API_BASE_URL: &str = "https://graph.facebook.com/v18.0";

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8000;

/// Environment variables that must be present for the Graph API calls to succeed.
pub const REQUIRED_VARS: [&str; 5] = [
    "IG_APP_ID",
    "IG_APP_SECRET",
    "IG_USER_ID",
    "IG_ACCESS_TOKEN",
    "IG_PAGE_ID",
];

/// Credentials for the Instagram Graph API.
///
/// Loaded once at startup and never mutated afterwards. Missing values are kept
/// as empty strings so the service can still start and report the problem per request.
#[derive(Clone, PartialEq, Eq)]
pub struct InstagramConfig {
    /// Facebook application id
    pub app_id: String,
    /// Facebook application secret
    pub app_secret: String,
    /// Instagram business account id that owns the media
    pub user_id: String,
    /// Long-lived access token sent with every Graph API call
    pub access_token: String,
    /// Facebook page linked to the Instagram account
    pub page_id: String,
    /// Graph API base URL, without trailing slash
    pub base_url: String,
}

impl InstagramConfig {
    /// Creates a new `InstagramConfig` by loading credentials from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `IG_APP_ID`, `IG_APP_SECRET`, `IG_USER_ID`, `IG_ACCESS_TOKEN`, `IG_PAGE_ID`
    ///
    /// Missing variables are logged as a single warning; loading never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ig_autopost::InstagramConfig;
    ///
    /// let config = InstagramConfig::from_env();
    /// for var in config.missing_variables() {
    ///     eprintln!("{} is not set", var);
    /// }
    /// ```
    pub fn from_env() -> Self {
        info!("Loading Instagram configuration from environment variables");

        let config = InstagramConfig {
            app_id: read_var("IG_APP_ID"),
            app_secret: read_var("IG_APP_SECRET"),
            user_id: read_var("IG_USER_ID"),
            access_token: read_var("IG_ACCESS_TOKEN"),
            page_id: read_var("IG_PAGE_ID"),
            base_url: GRAPH_API_BASE_URL.to_string(),
        };

        let missing = config.missing_variables();
        if missing.is_empty() {
            info!("Instagram configuration loaded successfully");
        } else {
            warn!("Missing environment variables: {}", missing.join(", "));
        }
        debug!("Access token (masked): {}", mask_secret(&config.access_token));

        config
    }

    /// Points the configuration at a different Graph API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the names of required variables whose value is empty.
    pub fn missing_variables(&self) -> Vec<&'static str> {
        let values = [
            &self.app_id,
            &self.app_secret,
            &self.user_id,
            &self.access_token,
            &self.page_id,
        ];

        REQUIRED_VARS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}

impl fmt::Debug for InstagramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstagramConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &mask_secret(&self.app_secret))
            .field("user_id", &self.user_id)
            .field("access_token", &mask_secret(&self.access_token))
            .field("page_id", &self.page_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn read_var(name: &str) -> String {
    match env::var(name) {
        Ok(value) => {
            debug!("Found {} environment variable with length: {}", name, value.len());
            value
        }
        Err(_) => String::new(),
    }
}

/// Masks a secret for logging, keeping at most the first and last four characters.
///
/// Values of eight characters or fewer are fully hidden.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        return "<empty>".to_string();
    }
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Gets the server port from environment variables or returns the default.
///
/// This function reads the `PORT` environment variable and parses it as a u16.
/// If the variable is not set the default 8000 is used; an unparseable value is
/// logged and also falls back to 8000.
///
/// # Example
///
/// ```rust
/// use ig_autopost::get_server_port;
///
/// // With no PORT set
/// let port = get_server_port(); // Returns 8000
/// ```
pub fn get_server_port() -> u16 {
    match env::var("PORT") {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("PORT '{}' is not a valid port number, using {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}
