use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Article;

/// Bookmark joining a user and an article. At most one row exists per
/// (user_id, article_id) pair; the numeric id is a plain surrogate.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedArticle {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
    pub saved_at: DateTime<Utc>,
}

/// Saved row joined with its article, as returned by the saved list
#[derive(Debug, Serialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedArticleWithArticle {
    #[serde(flatten)]
    pub saved: SavedArticle,
    pub article: Article,
}
