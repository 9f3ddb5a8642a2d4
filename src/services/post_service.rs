// ==================== POSTS ====================
// Collection operations over `posts`: CRUD plus the two feed queries the
// client relies on (newest-first listing, substring search) and the atomic
// like counter.

use futures::stream::StreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;

use crate::{database::MongoDB, models::Post, utils::AppError};

use super::ensure_id;

/// Inserts a post, assigning a fresh id when the record has none, and
/// returns the stored record.
pub async fn insert_post(db: &MongoDB, mut post: Post) -> Result<Post, AppError> {
    let id = ensure_id(&mut post);
    db.collection::<Post>().insert_one(&post).await?;
    log::debug!("Inserted post {}", id);
    Ok(post)
}

pub async fn get_post(db: &MongoDB, id: &str) -> Result<Option<Post>, AppError> {
    let post = db.collection::<Post>().find_one(doc! { "_id": id }).await?;
    Ok(post)
}

/// All posts, newest first.
pub async fn list_posts(db: &MongoDB) -> Result<Vec<Post>, AppError> {
    let mut cursor = db
        .collection::<Post>()
        .find(doc! {})
        .sort(doc! { "date": -1 })
        .await?;

    let mut posts = Vec::new();
    while let Some(post) = cursor.next().await {
        posts.push(post?);
    }
    Ok(posts)
}

/// Replaces the stored record with the given one. Returns `false` when no
/// document with that id exists.
pub async fn update_post(db: &MongoDB, post: &Post) -> Result<bool, AppError> {
    let id = post
        .post_id
        .as_deref()
        .ok_or_else(|| AppError::InvalidId("cannot update a post without an id".to_string()))?;

    let result = db
        .collection::<Post>()
        .replace_one(doc! { "_id": id }, post)
        .await?;
    Ok(result.matched_count > 0)
}

pub async fn delete_post(db: &MongoDB, id: &str) -> Result<bool, AppError> {
    let result = db
        .collection::<Post>()
        .delete_one(doc! { "_id": id })
        .await?;
    Ok(result.deleted_count > 0)
}

/// Atomically bumps the like counter and returns the updated post, or
/// `None` when the post no longer exists.
pub async fn like_post(db: &MongoDB, id: &str) -> Result<Option<Post>, AppError> {
    let post = db
        .collection::<Post>()
        .find_one_and_update(doc! { "_id": id }, doc! { "$inc": { "likes": 1 } })
        .return_document(ReturnDocument::After)
        .await?;
    Ok(post)
}

/// Case-insensitive substring match over title, description and tags.
pub async fn search_posts(db: &MongoDB, query: &str) -> Result<Vec<Post>, AppError> {
    let filter = doc! {
        "$or": [
            { "post": { "$regex": query, "$options": "i" } },
            { "description": { "$regex": query, "$options": "i" } },
            { "tags": { "$regex": query, "$options": "i" } },
        ]
    };

    let mut cursor = db
        .collection::<Post>()
        .find(filter)
        .sort(doc! { "date": -1 })
        .await?;

    let mut posts = Vec::new();
    while let Some(post) = cursor.next().await {
        posts.push(post?);
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_post(title: &str) -> Post {
        Post {
            post_id: None,
            user_id: "u1".to_string(),
            title: title.to_string(),
            description: "integration fixture".to_string(),
            tags: vec!["fixture".to_string()],
            likes: 0,
            image_base64_list: vec![],
            video_base64: None,
            date: Utc::now(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_post_crud_and_like() {
        dotenv::dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();

        let db = MongoDB::from_env().await.unwrap();

        let stored = insert_post(&db, sample_post("like target")).await.unwrap();
        let id = stored.post_id.clone().unwrap();
        assert!(!id.is_empty());

        let liked = like_post(&db, &id).await.unwrap().unwrap();
        assert_eq!(liked.likes, stored.likes + 1);

        let mut updated = liked.clone();
        updated.description = "edited".to_string();
        assert!(update_post(&db, &updated).await.unwrap());
        assert_eq!(get_post(&db, &id).await.unwrap().unwrap().description, "edited");

        assert!(delete_post(&db, &id).await.unwrap());
        assert!(like_post(&db, &id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_search_matches_title_case_insensitively() {
        dotenv::dotenv().ok();

        let db = MongoDB::from_env().await.unwrap();

        let stored = insert_post(&db, sample_post("Observability Deep Dive"))
            .await
            .unwrap();
        let id = stored.post_id.clone().unwrap();

        let hits = search_posts(&db, "observability").await.unwrap();
        assert!(hits.iter().any(|p| p.post_id.as_deref() == Some(id.as_str())));

        delete_post(&db, &id).await.unwrap();
    }
}
