//! Instagram Graph API integration module.
//!
//! This module contains the client used to create and publish media containers,
//! probe the access token, and read account details through the Graph API.

mod account;
mod api;
mod client;
mod media;
mod scheduling;
mod types;

// Re-export public API
pub use client::InstagramClient;
pub use scheduling::{parse_scheduled_time, scheduled_publish_timestamp};
pub use types::{MediaKind, PostResult, PostStatus, UserInfo};

// Crate-internal re-exports (used by tests)
#[allow(unused_imports)]
pub(crate) use api::sanitize_for_logging;
