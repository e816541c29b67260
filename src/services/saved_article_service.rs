use serde::Deserialize;

use crate::models::{SavedArticle, SavedArticleWithArticle};
use crate::storage::Storage;
use crate::utils::AppError;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveArticleRequest {
    pub article_id: i64,
}

/// All of the user's bookmarks, most recently saved first
pub async fn list_saved(storage: &dyn Storage, user_id: i64) -> Vec<SavedArticleWithArticle> {
    storage.get_saved_articles(user_id).await
}

/// Saves an article for the user. The existence and duplicate pre-checks
/// live here, not in the store.
pub async fn save(
    storage: &dyn Storage,
    user_id: i64,
    article_id: i64,
) -> Result<SavedArticle, AppError> {
    if storage.get_article(article_id).await.is_none() {
        return Err(AppError::NotFound("Article not found".to_string()));
    }
    if storage.is_article_saved(user_id, article_id).await {
        return Err(AppError::InvalidRequest("Article already saved".to_string()));
    }

    Ok(storage.save_article(user_id, article_id).await)
}

pub async fn unsave(storage: &dyn Storage, user_id: i64, article_id: i64) -> Result<(), AppError> {
    if storage.unsave_article(user_id, article_id).await {
        Ok(())
    } else {
        Err(AppError::NotFound("Saved article not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::InsertArticle;
    use crate::storage::MemStorage;

    async fn seeded_article(storage: &MemStorage) -> i64 {
        storage
            .create_article(InsertArticle {
                title: "Bookmarkable".to_string(),
                summary: "A summary".to_string(),
                content: None,
                source: "Newswire".to_string(),
                category: "business".to_string(),
                image_url: None,
                url: None,
                published_at: Utc::now(),
            })
            .await
            .id
    }

    #[tokio::test]
    async fn test_second_save_of_the_same_pair_fails() {
        let storage = MemStorage::new();
        let article_id = seeded_article(&storage).await;

        save(&storage, 1, article_id).await.unwrap();
        let err = save(&storage, 1, article_id).await.unwrap_err();
        assert_eq!(err, AppError::InvalidRequest("Article already saved".to_string()));

        // A different user may still save it
        assert!(save(&storage, 2, article_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_saving_a_missing_article_is_not_found() {
        let storage = MemStorage::new();
        let err = save(&storage, 1, 999).await.unwrap_err();
        assert_eq!(err, AppError::NotFound("Article not found".to_string()));
    }

    #[tokio::test]
    async fn test_unsave_round_trip() {
        let storage = MemStorage::new();
        let article_id = seeded_article(&storage).await;

        save(&storage, 1, article_id).await.unwrap();
        unsave(&storage, 1, article_id).await.unwrap();

        // Second unsave has nothing to remove
        let err = unsave(&storage, 1, article_id).await.unwrap_err();
        assert_eq!(err, AppError::NotFound("Saved article not found".to_string()));

        let listed = list_saved(&storage, 1).await;
        assert!(listed.is_empty());
    }
}
