//! Media posting for the Instagram Graph API.
//!
//! Posting is a two-phase workflow dictated by the Graph API: a media container is
//! created from the media URL and caption, then published by id. Scheduled posts stop
//! after the first phase and the provider publishes them at the requested time.

use chrono::Utc;
use log::{debug, error, info, warn};

use crate::error::InstagramError;

use super::api::{response_id, sanitize_for_logging, send_graph_request};
use super::client::InstagramClient;
use super::scheduling::parse_scheduled_time;
use super::types::{MediaKind, PostResult, PostStatus};

impl InstagramClient {
    /// Creates a media container and either publishes it or leaves it scheduled.
    ///
    /// # Parameters
    ///
    /// - `kind`: Image or reel; decides which URL field the container carries
    /// - `media_url`: Publicly reachable URL of the image or video
    /// - `caption`: Post caption
    /// - `scheduled_time`: Optional ISO-8601 publish time; empty strings are ignored
    ///
    /// # Returns
    ///
    /// - `Ok(PostResult)` with status `published` and the published media id, or with
    ///   status `scheduled` and the container id
    /// - `Err(InstagramError)` if the schedule time cannot be parsed or a Graph API call fails
    ///
    /// A failed publish leaves the already created container behind on the provider side.
    pub async fn post_media(
        &self,
        kind: MediaKind,
        media_url: &str,
        caption: &str,
        scheduled_time: Option<&str>,
    ) -> Result<PostResult, InstagramError> {
        let operation = kind.operation();
        info!(
            "Starting {} operation for media URL: {}",
            operation,
            sanitize_for_logging(media_url, 200)
        );

        let mut form = kind.container_fields(media_url);
        form.push(("caption", caption.to_string()));
        form.push(("access_token", self.config.access_token.clone()));

        let scheduled_time = scheduled_time.filter(|value| !value.trim().is_empty());
        if let Some(raw) = scheduled_time {
            let publish_at = parse_scheduled_time(raw).map_err(|e| {
                error!("Error during {}: {}", operation, e);
                e
            })?;

            if publish_at <= Utc::now() {
                warn!(
                    "Scheduled time {} is not in the future, forwarding it anyway",
                    publish_at.to_rfc3339()
                );
            }

            let timestamp = publish_at.timestamp();
            info!(
                "Scheduling container for publication at {} ({})",
                publish_at.to_rfc3339(),
                timestamp
            );
            form.push(("published", "false".to_string()));
            form.push(("scheduled_publish_time", timestamp.to_string()));
        }

        debug!(
            "Container payload fields: {}",
            form.iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let container_url = self.endpoint(&format!("{}/media", self.config.user_id));
        info!("Creating media container");
        let container = send_graph_request(self.http.post(&container_url).form(&form), operation)
            .await?;
        let container_id = response_id(&container, operation, "Container")?;
        info!("Created media container {}", container_id);

        if scheduled_time.is_some() {
            info!("Container {} left unpublished for scheduled publication", container_id);
            return Ok(PostResult {
                id: container_id,
                status: PostStatus::Scheduled,
            });
        }

        let publish_url = self.endpoint(&format!("{}/media_publish", self.config.user_id));
        let publish_form = [
            ("creation_id", container_id.as_str()),
            ("access_token", self.config.access_token.as_str()),
        ];
        info!("Publishing container {}", container_id);
        let published =
            send_graph_request(self.http.post(&publish_url).form(&publish_form), operation)
                .await?;
        let media_id = response_id(&published, operation, "Publish")?;
        info!("Published container {} as media {}", container_id, media_id);

        Ok(PostResult {
            id: media_id,
            status: PostStatus::Published,
        })
    }

    /// Posts an image, see [`InstagramClient::post_media`].
    pub async fn post_image(
        &self,
        image_url: &str,
        caption: &str,
        scheduled_time: Option<&str>,
    ) -> Result<PostResult, InstagramError> {
        self.post_media(MediaKind::Image, image_url, caption, scheduled_time)
            .await
    }

    /// Posts a video as a reel, see [`InstagramClient::post_media`].
    pub async fn post_reel(
        &self,
        video_url: &str,
        caption: &str,
        scheduled_time: Option<&str>,
    ) -> Result<PostResult, InstagramError> {
        self.post_media(MediaKind::Reel, video_url, caption, scheduled_time)
            .await
    }
}
