//! Router construction shared by the binary and the tests.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    handle_account, handle_health, handle_root, handle_schedule, handle_token,
};
use crate::instagram::InstagramClient;

/// Builds the HTTP application with all routes and middleware.
///
/// # Routes
///
/// - `GET /`: Service descriptor
/// - `GET /health`: Health check
/// - `POST /schedule`: Create and publish, or schedule, an Instagram post
/// - `GET /account`: Instagram account info
/// - `GET /token`: Access token validity
pub fn create_router(client: InstagramClient) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/schedule", post(handle_schedule))
        .route("/account", get(handle_account))
        .route("/token", get(handle_token))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(client)
}
