//! Error types for the Instagram Graph API client.

/// Errors returned by [`crate::InstagramClient`].
#[derive(Debug, thiserror::Error)]
pub enum InstagramError {
    /// A Graph API call failed at the transport level, returned a non-2xx status,
    /// or answered with a body we could not use.
    #[error("Failed to {operation}: {message}")]
    UpstreamRequest {
        operation: &'static str,
        message: String,
    },

    #[error("Invalid scheduled_time '{value}': {reason}")]
    InvalidScheduledTime { value: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl InstagramError {
    pub(crate) fn upstream(operation: &'static str, message: impl Into<String>) -> Self {
        InstagramError::UpstreamRequest {
            operation,
            message: message.into(),
        }
    }
}
