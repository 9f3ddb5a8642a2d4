use serde::{Deserialize, Serialize};

use super::Entity;

/// Comment on a post, stored in the `comments` collection.
///
/// `post_id` is a plain reference; nothing checks it against `posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,

    pub post_id: String,

    pub commentor_id: String,

    pub comment: String,

    #[serde(default)]
    pub likes: i64,
}

impl Entity for Comment {
    const COLLECTION: &'static str = "comments";

    fn id(&self) -> Option<&str> {
        self.comment_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.comment_id = Some(id);
    }
}
