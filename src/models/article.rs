use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories a stored article can carry. "trending" is a query-side
/// pseudo-category (all articles sorted by views), never stored.
pub const CATEGORIES: [&str; 6] = [
    "technology",
    "politics",
    "sports",
    "business",
    "health",
    "entertainment",
];

pub const TRENDING: &str = "trending";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub source: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub views: i64,
}

/// Fields required to create an article. Id and view counter are assigned
/// by the store (views always start at 0).
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InsertArticle {
    pub title: String,
    pub summary: String,
    pub content: Option<String>,
    pub source: String,
    pub category: String,
    pub image_url: Option<String>,
    pub url: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Article annotated with the caller's saved state
#[derive(Debug, Serialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWithState {
    #[serde(flatten)]
    pub article: Article,
    pub is_saved: bool,
}
