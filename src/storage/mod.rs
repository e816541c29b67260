use async_trait::async_trait;

use crate::models::{
    Article, InsertArticle, InsertUser, SavedArticle, SavedArticleWithArticle, UpdateUser, User,
};

pub mod memory;

pub use memory::MemStorage;

/// Data-access contract for users, articles and saved articles.
///
/// The trait is asynchronous so a database-backed implementation can
/// suspend for I/O; the in-memory one completes synchronously. Operations
/// signal absence through `Option`/`bool` rather than errors. Uniqueness
/// checks (email, username, duplicate save) belong to callers.
#[async_trait]
pub trait Storage: Send + Sync {
    // User operations
    async fn get_user(&self, id: i64) -> Option<User>;

    /// Linear scan, exact case-sensitive match
    async fn get_user_by_email(&self, email: &str) -> Option<User>;

    /// Linear scan, exact case-sensitive match
    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// Assigns the next sequential id, empty preferences and the current
    /// timestamp
    async fn create_user(&self, user: InsertUser) -> User;

    /// Shallow merge of the provided fields; `None` if the id is unknown
    async fn update_user(&self, id: i64, updates: UpdateUser) -> Option<User>;

    // Article operations

    /// Newest first (publication timestamp descending), paginated
    async fn get_articles(&self, limit: usize, offset: usize) -> Vec<Article>;

    /// Exact category match, newest first. The pseudo-category "trending"
    /// instead returns all articles sorted by view count descending.
    async fn get_articles_by_category(
        &self,
        category: &str,
        limit: usize,
        offset: usize,
    ) -> Vec<Article>;

    /// Case-insensitive substring match against title, summary and source,
    /// newest first
    async fn search_articles(&self, query: &str, limit: usize, offset: usize) -> Vec<Article>;

    async fn get_article(&self, id: i64) -> Option<Article>;

    /// Assigns the next sequential id; the view counter starts at 0
    async fn create_article(&self, article: InsertArticle) -> Article;

    /// Increments the view counter by exactly 1; silent no-op for unknown
    /// ids
    async fn update_article_views(&self, id: i64);

    // Saved articles operations

    /// All of the user's saved rows joined with their articles, most
    /// recently saved first. Rows whose article is gone are dropped.
    async fn get_saved_articles(&self, user_id: i64) -> Vec<SavedArticleWithArticle>;

    /// Stores under the (user_id, article_id) composite key, overwriting
    /// any prior row for that pair
    async fn save_article(&self, user_id: i64, article_id: i64) -> SavedArticle;

    /// Removes the composite-key row; reports whether anything was removed
    async fn unsave_article(&self, user_id: i64, article_id: i64) -> bool;

    async fn is_article_saved(&self, user_id: i64, article_id: i64) -> bool;
}
