//! Data types shared by the Instagram client and the HTTP handlers.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads a Graph API object id.
///
/// Ids are documented as strings, but numeric ids are accepted as well.
pub(crate) fn graph_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn deserialize_graph_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    graph_id(&value).ok_or_else(|| de::Error::custom(format!("invalid id: {}", value)))
}

/// Kind of media a post carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A single image, published to the feed
    Image,
    /// A video, published as a reel
    Reel,
}

impl MediaKind {
    /// Operation label used in log lines and error messages.
    pub fn operation(self) -> &'static str {
        match self {
            MediaKind::Image => "post image",
            MediaKind::Reel => "post reel",
        }
    }

    /// Container-creation fields that depend on the media kind.
    pub(crate) fn container_fields(self, media_url: &str) -> Vec<(&'static str, String)> {
        match self {
            MediaKind::Image => vec![("image_url", media_url.to_string())],
            MediaKind::Reel => vec![
                ("media_type", "REELS".to_string()),
                ("video_url", media_url.to_string()),
            ],
        }
    }
}

/// Whether a post went live immediately or was left for the provider to publish later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Scheduled,
}

/// Outcome of a create/publish workflow.
///
/// For published posts `id` is the media id returned by `media_publish`;
/// for scheduled posts it is the container id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResult {
    pub id: String,
    pub status: PostStatus,
}

/// Account details returned by the Graph API user lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(deserialize_with = "deserialize_graph_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub media_count: Option<u64>,
}
