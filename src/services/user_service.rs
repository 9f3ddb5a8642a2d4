// ==================== USERS ====================
// Collection operations over `users`. No validation happens here; callers
// own anything beyond plain storage access.

use futures::stream::StreamExt;
use mongodb::bson::doc;

use crate::{database::MongoDB, models::User, utils::AppError};

use super::ensure_id;

/// Inserts a user, assigning a fresh id when the record has none, and
/// returns the stored record.
pub async fn insert_user(db: &MongoDB, mut user: User) -> Result<User, AppError> {
    let id = ensure_id(&mut user);
    db.collection::<User>().insert_one(&user).await?;
    log::debug!("Inserted user {}", id);
    Ok(user)
}

pub async fn get_user(db: &MongoDB, id: &str) -> Result<Option<User>, AppError> {
    let user = db.collection::<User>().find_one(doc! { "_id": id }).await?;
    Ok(user)
}

pub async fn list_users(db: &MongoDB) -> Result<Vec<User>, AppError> {
    let mut cursor = db.collection::<User>().find(doc! {}).await?;

    let mut users = Vec::new();
    while let Some(user) = cursor.next().await {
        users.push(user?);
    }
    Ok(users)
}

/// Replaces the stored record with the given one. Returns `false` when no
/// document with that id exists.
pub async fn update_user(db: &MongoDB, user: &User) -> Result<bool, AppError> {
    let id = user
        .id
        .as_deref()
        .ok_or_else(|| AppError::InvalidId("cannot update a user without an id".to_string()))?;

    let result = db
        .collection::<User>()
        .replace_one(doc! { "_id": id }, user)
        .await?;
    Ok(result.matched_count > 0)
}

pub async fn delete_user(db: &MongoDB, id: &str) -> Result<bool, AppError> {
    let result = db
        .collection::<User>()
        .delete_one(doc! { "_id": id })
        .await?;
    Ok(result.deleted_count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_user_crud_roundtrip() {
        dotenv::dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();

        let db = MongoDB::from_env().await.unwrap();

        let user = User {
            id: None,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
        };

        // Insert assigns a non-empty id.
        let stored = insert_user(&db, user).await.unwrap();
        let id = stored.id.clone().unwrap();
        assert!(!id.is_empty());

        let fetched = get_user(&db, &id).await.unwrap().unwrap();
        assert_eq!(fetched, stored);

        let mut updated = fetched.clone();
        updated.email = "ann@other.example".to_string();
        assert!(update_user(&db, &updated).await.unwrap());

        let fetched = get_user(&db, &id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "ann@other.example");

        assert!(delete_user(&db, &id).await.unwrap());
        assert!(get_user(&db, &id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_update_without_id_is_rejected() {
        dotenv::dotenv().ok();

        let db = MongoDB::from_env().await.unwrap();
        let user = User {
            id: None,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
        };

        let err = update_user(&db, &user).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidId(_)));
    }
}
