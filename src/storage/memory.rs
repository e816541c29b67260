use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::models::{
    Article, InsertArticle, InsertUser, SavedArticle, SavedArticleWithArticle, UpdateUser, User,
    TRENDING,
};
use crate::storage::Storage;

/// Process-local, non-persistent store backing [`Storage`].
///
/// All three tables live behind a single lock: reads share it, every
/// mutation takes it exclusively, so each operation is atomic across the
/// actix workers. Secondary lookups (email, username) are linear scans.
pub struct MemStorage {
    inner: RwLock<Tables>,
}

struct Tables {
    users: HashMap<i64, User>,
    articles: HashMap<i64, Article>,
    saved_articles: HashMap<(i64, i64), SavedArticle>,
    next_user_id: i64,
    next_article_id: i64,
    next_saved_id: i64,
}

impl MemStorage {
    pub fn new() -> Self {
        MemStorage {
            inner: RwLock::new(Tables {
                users: HashMap::new(),
                articles: HashMap::new(),
                saved_articles: HashMap::new(),
                next_user_id: 1,
                next_article_id: 1,
                next_saved_id: 1,
            }),
        }
    }

    fn tables(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn tables_mut(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn article_count(&self) -> usize {
        self.tables().articles.len()
    }

    /// Seed-only insert that keeps a preset view count. `create_article`
    /// is the normal path and always starts views at 0.
    pub fn insert_article_with_views(&self, article: InsertArticle, views: i64) -> Article {
        let mut tables = self.tables_mut();
        let id = tables.next_article_id;
        tables.next_article_id += 1;

        let article = Article {
            id,
            title: article.title,
            summary: article.summary,
            content: article.content,
            source: article.source,
            category: article.category,
            image_url: article.image_url,
            url: article.url,
            published_at: article.published_at,
            views,
        };
        tables.articles.insert(id, article.clone());
        article
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest first. Map iteration order is unstable, so ties fall back to the
/// id to keep repeated calls identical.
fn by_published_desc(a: &Article, b: &Article) -> std::cmp::Ordering {
    b.published_at
        .cmp(&a.published_at)
        .then(b.id.cmp(&a.id))
}

fn by_views_desc(a: &Article, b: &Article) -> std::cmp::Ordering {
    b.views.cmp(&a.views).then(b.id.cmp(&a.id))
}

fn paginate(articles: Vec<Article>, limit: usize, offset: usize) -> Vec<Article> {
    articles.into_iter().skip(offset).take(limit).collect()
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i64) -> Option<User> {
        self.tables().users.get(&id).cloned()
    }

    async fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.tables()
            .users
            .values()
            .find(|user| user.email == email)
            .cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.tables()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    async fn create_user(&self, user: InsertUser) -> User {
        let mut tables = self.tables_mut();
        let id = tables.next_user_id;
        tables.next_user_id += 1;

        let user = User {
            id,
            username: user.username,
            email: user.email,
            password: user.password,
            name: user.name,
            preferences: Vec::new(),
            created_at: Utc::now(),
        };
        tables.users.insert(id, user.clone());
        user
    }

    async fn update_user(&self, id: i64, updates: UpdateUser) -> Option<User> {
        let mut tables = self.tables_mut();
        let user = tables.users.get_mut(&id)?;

        if let Some(name) = updates.name {
            user.name = name;
        }
        if let Some(email) = updates.email {
            user.email = email;
        }
        if let Some(preferences) = updates.preferences {
            user.preferences = preferences;
        }
        Some(user.clone())
    }

    async fn get_articles(&self, limit: usize, offset: usize) -> Vec<Article> {
        let mut articles: Vec<Article> = self.tables().articles.values().cloned().collect();
        articles.sort_by(by_published_desc);
        paginate(articles, limit, offset)
    }

    async fn get_articles_by_category(
        &self,
        category: &str,
        limit: usize,
        offset: usize,
    ) -> Vec<Article> {
        let trending = category == TRENDING;
        let mut articles: Vec<Article> = self
            .tables()
            .articles
            .values()
            .filter(|article| trending || article.category == category)
            .cloned()
            .collect();

        if trending {
            articles.sort_by(by_views_desc);
        } else {
            articles.sort_by(by_published_desc);
        }
        paginate(articles, limit, offset)
    }

    async fn search_articles(&self, query: &str, limit: usize, offset: usize) -> Vec<Article> {
        let term = query.to_lowercase();
        let mut articles: Vec<Article> = self
            .tables()
            .articles
            .values()
            .filter(|article| {
                article.title.to_lowercase().contains(&term)
                    || article.summary.to_lowercase().contains(&term)
                    || article.source.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();

        articles.sort_by(by_published_desc);
        paginate(articles, limit, offset)
    }

    async fn get_article(&self, id: i64) -> Option<Article> {
        self.tables().articles.get(&id).cloned()
    }

    async fn create_article(&self, article: InsertArticle) -> Article {
        self.insert_article_with_views(article, 0)
    }

    async fn update_article_views(&self, id: i64) {
        if let Some(article) = self.tables_mut().articles.get_mut(&id) {
            article.views += 1;
        }
    }

    async fn get_saved_articles(&self, user_id: i64) -> Vec<SavedArticleWithArticle> {
        let tables = self.tables();
        let mut saved: Vec<SavedArticleWithArticle> = tables
            .saved_articles
            .values()
            .filter(|row| row.user_id == user_id)
            .filter_map(|row| {
                tables.articles.get(&row.article_id).map(|article| {
                    SavedArticleWithArticle {
                        saved: row.clone(),
                        article: article.clone(),
                    }
                })
            })
            .collect();

        saved.sort_by(|a, b| {
            b.saved
                .saved_at
                .cmp(&a.saved.saved_at)
                .then(b.saved.id.cmp(&a.saved.id))
        });
        saved
    }

    async fn save_article(&self, user_id: i64, article_id: i64) -> SavedArticle {
        let mut tables = self.tables_mut();
        let id = tables.next_saved_id;
        tables.next_saved_id += 1;

        let row = SavedArticle {
            id,
            user_id,
            article_id,
            saved_at: Utc::now(),
        };
        // Composite key: a second save for the same pair overwrites, so the
        // pair never has two rows
        tables.saved_articles.insert((user_id, article_id), row.clone());
        row
    }

    async fn unsave_article(&self, user_id: i64, article_id: i64) -> bool {
        self.tables_mut()
            .saved_articles
            .remove(&(user_id, article_id))
            .is_some()
    }

    async fn is_article_saved(&self, user_id: i64, article_id: i64) -> bool {
        self.tables()
            .saved_articles
            .contains_key(&(user_id, article_id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};

    use super::*;

    fn insert_user(n: u32) -> InsertUser {
        InsertUser {
            username: format!("reader{}", n),
            email: format!("reader{}@example.com", n),
            password: "$2b$12$hash".to_string(),
            name: format!("Reader {}", n),
        }
    }

    fn insert_article(title: &str, category: &str, hours_ago: i64) -> InsertArticle {
        InsertArticle {
            title: title.to_string(),
            summary: format!("Summary for {}", title),
            content: Some("Full article content here...".to_string()),
            source: "Newswire".to_string(),
            category: category.to_string(),
            image_url: None,
            url: None,
            published_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    #[tokio::test]
    async fn test_user_ids_are_sequential_from_one() {
        let storage = MemStorage::new();
        let first = storage.create_user(insert_user(1)).await;
        let second = storage.create_user(insert_user(2)).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.preferences.is_empty());
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let storage = MemStorage::new();
        storage.create_user(insert_user(1)).await;

        assert!(storage.get_user_by_email("reader1@example.com").await.is_some());
        assert!(storage.get_user_by_email("Reader1@example.com").await.is_none());
        assert!(storage.get_user_by_username("reader1").await.is_some());
        assert!(storage.get_user_by_username("READER1").await.is_none());
    }

    #[tokio::test]
    async fn test_update_user_merges_shallowly() {
        let storage = MemStorage::new();
        let user = storage.create_user(insert_user(1)).await;

        let updated = storage
            .update_user(
                user.id,
                UpdateUser {
                    name: Some("Renamed".to_string()),
                    email: None,
                    preferences: Some(vec!["technology".to_string()]),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.email, user.email); // untouched
        assert_eq!(updated.preferences, vec!["technology".to_string()]);

        assert!(storage.update_user(999, UpdateUser::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let storage = MemStorage::new();
        let created = storage
            .create_article(insert_article("Quantum Leap", "technology", 1))
            .await;

        let fetched = storage.get_article(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.views, 0);
    }

    #[tokio::test]
    async fn test_articles_sorted_newest_first() {
        let storage = MemStorage::new();
        storage.create_article(insert_article("Old", "politics", 10)).await;
        storage.create_article(insert_article("New", "politics", 1)).await;
        storage.create_article(insert_article("Middle", "politics", 5)).await;

        let titles: Vec<String> = storage
            .get_articles(20, 0)
            .await
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["New", "Middle", "Old"]);
    }

    #[tokio::test]
    async fn test_pagination_applies_offset_then_limit() {
        let storage = MemStorage::new();
        for i in 0..5 {
            storage
                .create_article(insert_article(&format!("Article {}", i), "business", i))
                .await;
        }

        let page = storage.get_articles(2, 1).await;
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "Article 1");
        assert_eq!(page[1].title, "Article 2");
    }

    #[tokio::test]
    async fn test_category_filter_is_exact() {
        let storage = MemStorage::new();
        storage.create_article(insert_article("Tech", "technology", 1)).await;
        storage.create_article(insert_article("Sports", "sports", 2)).await;

        let tech = storage.get_articles_by_category("technology", 20, 0).await;
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].title, "Tech");

        assert!(storage.get_articles_by_category("Technology", 20, 0).await.is_empty());
    }

    #[tokio::test]
    async fn test_trending_sorts_by_views_and_is_deterministic() {
        let storage = MemStorage::new();
        let quiet = storage.create_article(insert_article("Quiet", "health", 1)).await;
        let popular = storage.create_article(insert_article("Popular", "sports", 2)).await;

        for _ in 0..5 {
            storage.update_article_views(popular.id).await;
        }
        storage.update_article_views(quiet.id).await;

        let first = storage.get_articles_by_category(TRENDING, 20, 0).await;
        assert_eq!(first[0].title, "Popular");
        assert_eq!(first[1].title, "Quiet");

        // Unchanged data yields the same order on every call
        let second = storage.get_articles_by_category(TRENDING, 20, 0).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_across_fields() {
        let storage = MemStorage::new();
        storage
            .create_article(insert_article("Breakthrough in quantum computing", "technology", 1))
            .await;
        let mut by_source = insert_article("Market report", "business", 2);
        by_source.source = "Quantum Daily".to_string();
        storage.create_article(by_source).await;

        let hits = storage.search_articles("QUANTUM", 20, 0).await;
        assert_eq!(hits.len(), 2);

        assert!(storage.search_articles("nonexistent", 20, 0).await.is_empty());
    }

    #[tokio::test]
    async fn test_view_updates_are_exact_and_ignore_unknown_ids() {
        let storage = MemStorage::new();
        let article = storage.create_article(insert_article("Counted", "health", 1)).await;

        storage.update_article_views(article.id).await;
        storage.update_article_views(article.id).await;
        storage.update_article_views(999).await; // no-op

        assert_eq!(storage.get_article(article.id).await.unwrap().views, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_view_increments_are_not_lost() {
        let storage = Arc::new(MemStorage::new());
        let article = storage.create_article(insert_article("Hot", "sports", 1)).await;

        let mut handles = Vec::new();
        for _ in 0..50 {
            let storage = Arc::clone(&storage);
            let id = article.id;
            handles.push(tokio::spawn(async move {
                storage.update_article_views(id).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(storage.get_article(article.id).await.unwrap().views, 50);
    }

    #[tokio::test]
    async fn test_save_overwrites_duplicate_pair() {
        let storage = MemStorage::new();
        let user = storage.create_user(insert_user(1)).await;
        let article = storage.create_article(insert_article("Bookmarked", "health", 1)).await;

        storage.save_article(user.id, article.id).await;
        storage.save_article(user.id, article.id).await;

        // One row for the pair regardless of how many saves happened
        let saved = storage.get_saved_articles(user.id).await;
        assert_eq!(saved.len(), 1);
        assert!(storage.is_article_saved(user.id, article.id).await);
    }

    #[tokio::test]
    async fn test_unsave_reports_whether_a_row_was_removed() {
        let storage = MemStorage::new();
        let user = storage.create_user(insert_user(1)).await;
        let article = storage.create_article(insert_article("Ephemeral", "politics", 1)).await;

        assert!(!storage.unsave_article(user.id, article.id).await);

        storage.save_article(user.id, article.id).await;
        assert!(storage.unsave_article(user.id, article.id).await);
        assert!(!storage.is_article_saved(user.id, article.id).await);
    }

    #[tokio::test]
    async fn test_saved_list_joins_articles_for_the_user_only() {
        let storage = MemStorage::new();
        let alice = storage.create_user(insert_user(1)).await;
        let bob = storage.create_user(insert_user(2)).await;
        let first = storage.create_article(insert_article("First", "business", 3)).await;
        let second = storage.create_article(insert_article("Second", "business", 2)).await;

        storage.save_article(alice.id, first.id).await;
        storage.save_article(alice.id, second.id).await;
        storage.save_article(bob.id, first.id).await;

        let saved = storage.get_saved_articles(alice.id).await;
        assert_eq!(saved.len(), 2);
        // Most recently saved first
        assert_eq!(saved[0].article.title, "Second");
        assert_eq!(saved[1].article.title, "First");
        assert!(saved.iter().all(|row| row.saved.user_id == alice.id));
    }
}
