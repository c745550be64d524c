//! HTTP route handlers for the ig-autopost service.
//!
//! This module contains all the HTTP route handler functions that process
//! incoming requests and return appropriate responses.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::instagram::{InstagramClient, MediaKind, UserInfo};

/// Human-readable service name reported by `/` and `/health`.
pub const SERVICE_NAME: &str = "Instagram Auto Post";

/// Error response shared by all handlers: status code plus `{status, message, detail}` body.
pub type ErrorResponse = (StatusCode, Json<Value>);

/// Body of a `POST /schedule` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    pub caption: String,
    #[serde(default)]
    pub scheduled_time: Option<String>,
}

impl PostRequest {
    /// Resolves which workflow the request targets.
    ///
    /// Exactly one of `image_url` and `video_url` must be non-empty.
    pub fn media(&self) -> Result<(MediaKind, &str), &'static str> {
        let image = non_empty(&self.image_url);
        let video = non_empty(&self.video_url);

        match (image, video) {
            (Some(url), None) => Ok((MediaKind::Image, url)),
            (None, Some(url)) => Ok((MediaKind::Reel, url)),
            (None, None) => Err("Either image_url or video_url must be provided"),
            (Some(_), Some(_)) => Err("Only one of image_url or video_url may be provided"),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn error_response(status: StatusCode, message: &str, detail: impl Into<String>) -> ErrorResponse {
    let detail: String = detail.into();
    (
        status,
        Json(json!({"status": "error", "message": message, "detail": detail})),
    )
}

/// Handles GET requests to the root `/` endpoint.
///
/// Returns a small descriptor pointing at the other endpoints.
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "message": "Instagram Auto Post API",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
        "schedule": "/schedule",
    }))
}

/// Handles GET requests to the `/health` endpoint.
///
/// This endpoint provides a health check for the service. It's commonly used by load
/// balancers and monitoring systems to verify that the service is running and responsive.
/// It never calls the Graph API.
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "Instagram Auto Post",
///   "version": "0.1.0"
/// }
/// ```
pub async fn handle_health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handles POST requests to the `/schedule` endpoint.
///
/// Validates the body, then runs the image or reel workflow depending on which media
/// URL was supplied.
///
/// # Success Response
///
/// ```json
/// {
///   "status": "success",
///   "message": "Post scheduled successfully",
///   "post_id": "17895695668004550",
///   "scheduled_time": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Error Responses
///
/// - `400`: malformed JSON, missing `caption`, or not exactly one media URL
/// - `500`: any failure reported by the Instagram client
pub async fn handle_schedule(
    State(client): State<InstagramClient>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Result<Json<Value>, ErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected schedule request body: {}", rejection.body_text());
        error_response(
            StatusCode::BAD_REQUEST,
            "Invalid request body",
            rejection.body_text(),
        )
    })?;

    let (kind, media_url) = request.media().map_err(|reason| {
        warn!("Rejected schedule request: {}", reason);
        error_response(StatusCode::BAD_REQUEST, "Invalid request", reason)
    })?;

    match client
        .post_media(
            kind,
            media_url,
            &request.caption,
            request.scheduled_time.as_deref(),
        )
        .await
    {
        Ok(result) => {
            info!("Post {} accepted with status {:?}", result.id, result.status);
            Ok(Json(json!({
                "status": "success",
                "message": "Post scheduled successfully",
                "post_id": result.id,
                "scheduled_time": request.scheduled_time,
            })))
        }
        Err(e) => {
            error!("Failed to schedule post: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to schedule post",
                format!("Failed to schedule post: {}", e),
            ))
        }
    }
}

/// Handles GET requests to the `/account` endpoint.
///
/// Returns the Graph API view of the configured Instagram account.
pub async fn handle_account(
    State(client): State<InstagramClient>,
) -> Result<Json<UserInfo>, ErrorResponse> {
    match client.get_user_info().await {
        Ok(info) => Ok(Json(info)),
        Err(e) => {
            error!("Failed to load account info: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load account info",
                e.to_string(),
            ))
        }
    }
}

/// Handles GET requests to the `/token` endpoint.
///
/// Reports whether the configured access token is accepted by the Graph API.
/// `false` covers both rejected tokens and unreachable upstreams.
pub async fn handle_token(State(client): State<InstagramClient>) -> Json<Value> {
    let valid = client.validate_access_token().await;
    Json(json!({ "valid": valid }))
}
