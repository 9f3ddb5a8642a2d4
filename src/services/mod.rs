pub mod user_service;
pub mod post_service;
pub mod comment_service;

pub use user_service::*;
pub use post_service::*;
pub use comment_service::*;

use mongodb::bson::oid::ObjectId;

use crate::models::Entity;

/// Returns the record's id, assigning a fresh ObjectId hex string first
/// when the record does not have one yet. Inserts call this so every
/// stored document carries a string `_id`.
pub(crate) fn ensure_id<E: Entity>(entity: &mut E) -> String {
    match entity.id() {
        Some(id) => id.to_string(),
        None => {
            let id = ObjectId::new().to_hex();
            entity.set_id(id.clone());
            id
        }
    }
}
