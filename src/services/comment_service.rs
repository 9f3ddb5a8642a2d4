// ==================== COMMENTS ====================
// Collection operations over `comments`. Comments hang off a post by id
// only; removing a post is expected to call delete_comments_for_post.

use futures::stream::StreamExt;
use mongodb::bson::doc;

use crate::{database::MongoDB, models::Comment, utils::AppError};

use super::ensure_id;

/// Inserts a comment, assigning a fresh id when the record has none, and
/// returns the stored record.
pub async fn insert_comment(db: &MongoDB, mut comment: Comment) -> Result<Comment, AppError> {
    let id = ensure_id(&mut comment);
    db.collection::<Comment>().insert_one(&comment).await?;
    log::debug!("Inserted comment {} on post {}", id, comment.post_id);
    Ok(comment)
}

/// Comments of a single post, in insertion order.
pub async fn comments_for_post(db: &MongoDB, post_id: &str) -> Result<Vec<Comment>, AppError> {
    let mut cursor = db
        .collection::<Comment>()
        .find(doc! { "postId": post_id })
        .await?;

    let mut comments = Vec::new();
    while let Some(comment) = cursor.next().await {
        comments.push(comment?);
    }
    Ok(comments)
}

pub async fn delete_comment(db: &MongoDB, id: &str) -> Result<bool, AppError> {
    let result = db
        .collection::<Comment>()
        .delete_one(doc! { "_id": id })
        .await?;
    Ok(result.deleted_count > 0)
}

/// Removes every comment of the given post, returning how many went away.
pub async fn delete_comments_for_post(db: &MongoDB, post_id: &str) -> Result<u64, AppError> {
    let result = db
        .collection::<Comment>()
        .delete_many(doc! { "postId": post_id })
        .await?;
    Ok(result.deleted_count)
}
