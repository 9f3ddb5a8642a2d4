use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;

/// Feed post stored in the `posts` collection.
///
/// Field names follow the camelCase layout of documents already written by
/// earlier deployments, so both sides keep reading each other's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,

    /// Author of the post.
    pub user_id: String,

    /// Title. Stored under the legacy field name `post`.
    #[serde(rename = "post")]
    pub title: String,

    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub likes: i64,

    /// Up to three images as data URIs. Empty when the post carries a video.
    #[serde(default)]
    pub image_base64_list: Vec<String>,

    pub video_base64: Option<String>,

    /// Creation time, stored as an RFC 3339 UTC string.
    pub date: DateTime<Utc>,
}

impl Entity for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> Option<&str> {
        self.post_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.post_id = Some(id);
    }
}
