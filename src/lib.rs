//! # ig-autopost Library
//!
//! A Rust web service library that schedules and publishes Instagram posts through the
//! Instagram Graph API. Posting follows the Graph API's two-phase model: a media
//! container is created from an image or video URL, then published immediately or left
//! for the provider to publish at a scheduled time.
//!
//! ## Features
//!
//! - HTTP server with endpoints for scheduling posts and inspecting the account
//! - Image and reel posting, immediate or scheduled
//! - Access token probe and account lookup
//! - Structured logging
//! - Health check endpoint
//!
//! ## Configuration
//!
//! - `IG_APP_ID`, `IG_APP_SECRET`, `IG_USER_ID`, `IG_ACCESS_TOKEN`, `IG_PAGE_ID`:
//!   Graph API credentials (missing values are warned about, not fatal)
//! - `PORT`: Server port (defaults to 8000)
//!
//! ## API Endpoints
//!
//! - `GET /`: Service descriptor
//! - `GET /health`: Returns service health status
//! - `POST /schedule`: Posts or schedules an image or reel
//! - `GET /account`: Returns the Instagram account info
//! - `GET /token`: Reports whether the access token is valid

pub mod config;
pub mod error;
pub mod handlers;
pub mod instagram;
pub mod routes;

// Re-export commonly used types and functions
pub use config::{get_server_port, InstagramConfig};
pub use error::InstagramError;
pub use handlers::{handle_health, handle_root, handle_schedule, PostRequest};
pub use instagram::{
    parse_scheduled_time, scheduled_publish_timestamp, InstagramClient, MediaKind, PostResult,
    PostStatus, UserInfo,
};
pub use routes::create_router;
