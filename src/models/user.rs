use serde::{Deserialize, Serialize};

use super::Entity;

/// User record stored in the `users` collection.
///
/// The stored document is `{ _id: <string>, name: <string>, email: <string> }`,
/// matching what earlier deployments wrote. No field is validated here;
/// format and uniqueness are the caller's and the store's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the persistence layer on insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub email: String,
}

impl Entity for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
