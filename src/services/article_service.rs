use crate::models::{Article, ArticleWithState};
use crate::storage::Storage;
use crate::utils::AppError;

pub const DEFAULT_LIMIT: usize = 20;
pub const DEFAULT_OFFSET: usize = 0;

/// Listing dispatch: a search query wins over a category filter, and with
/// neither the newest articles are returned.
pub async fn list_articles(
    storage: &dyn Storage,
    category: Option<&str>,
    search: Option<&str>,
    limit: usize,
    offset: usize,
) -> Vec<Article> {
    if let Some(query) = search {
        storage.search_articles(query, limit, offset).await
    } else if let Some(category) = category {
        storage.get_articles_by_category(category, limit, offset).await
    } else {
        storage.get_articles(limit, offset).await
    }
}

/// Annotates each article with whether the viewer has saved it
pub async fn annotate_saved(
    storage: &dyn Storage,
    user_id: i64,
    articles: Vec<Article>,
) -> Vec<ArticleWithState> {
    let mut annotated = Vec::with_capacity(articles.len());
    for article in articles {
        let is_saved = storage.is_article_saved(user_id, article.id).await;
        annotated.push(ArticleWithState { article, is_saved });
    }
    annotated
}

/// Single-article fetch. Bumps the view counter as a side effect; the
/// returned record carries the pre-increment count, matching the list
/// endpoints until the next fetch.
pub async fn get_article(
    storage: &dyn Storage,
    viewer: Option<i64>,
    id: i64,
) -> Result<ArticleWithState, AppError> {
    let article = storage
        .get_article(id)
        .await
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

    storage.update_article_views(id).await;

    let is_saved = match viewer {
        Some(user_id) => storage.is_article_saved(user_id, id).await,
        None => false,
    };

    Ok(ArticleWithState { article, is_saved })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::InsertArticle;
    use crate::storage::MemStorage;

    fn insert_article(title: &str, category: &str, hours_ago: i64) -> InsertArticle {
        InsertArticle {
            title: title.to_string(),
            summary: format!("Summary for {}", title),
            content: None,
            source: "Newswire".to_string(),
            category: category.to_string(),
            image_url: None,
            url: None,
            published_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    #[tokio::test]
    async fn test_search_wins_over_category() {
        let storage = MemStorage::new();
        storage.create_article(insert_article("Quantum chips", "technology", 1)).await;
        storage.create_article(insert_article("Election recap", "politics", 2)).await;

        let hits = list_articles(&storage, Some("politics"), Some("quantum"), DEFAULT_LIMIT, 0).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Quantum chips");
    }

    #[tokio::test]
    async fn test_fetch_increments_views_once() {
        let storage = MemStorage::new();
        let created = storage.create_article(insert_article("Counted", "health", 1)).await;

        let first = get_article(&storage, None, created.id).await.unwrap();
        assert_eq!(first.article.views, 0); // pre-increment count
        assert!(!first.is_saved);

        let second = get_article(&storage, None, created.id).await.unwrap();
        assert_eq!(second.article.views, 1);

        assert_eq!(storage.get_article(created.id).await.unwrap().views, 2);
    }

    #[tokio::test]
    async fn test_missing_article_is_not_found() {
        let storage = MemStorage::new();
        let err = get_article(&storage, None, 404).await.unwrap_err();
        assert_eq!(err, AppError::NotFound("Article not found".to_string()));
    }

    #[tokio::test]
    async fn test_annotation_reflects_saved_state() {
        let storage = MemStorage::new();
        let article = storage.create_article(insert_article("Saved one", "sports", 1)).await;
        let other = storage.create_article(insert_article("Other", "sports", 2)).await;
        storage.save_article(1, article.id).await;

        let annotated = annotate_saved(&storage, 1, vec![article, other]).await;
        assert!(annotated[0].is_saved);
        assert!(!annotated[1].is_saved);
    }
}
