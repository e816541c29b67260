use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::services::article_service::{self, DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::services::session::{self, SessionStore};
use crate::storage::Storage;

#[derive(Deserialize)]
pub struct ArticlesQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ArticlesQuery {
    // Non-numeric values fall back to the defaults instead of rejecting
    fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LIMIT)
    }

    fn offset(&self) -> usize {
        self.offset
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_OFFSET)
    }
}

#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "Articles",
    params(
        ("category" = Option<String>, Query, description = "Category filter, or \"trending\""),
        ("search" = Option<String>, Query, description = "Substring search over title, summary and source"),
        ("limit" = Option<String>, Query, description = "Page size, default 20"),
        ("offset" = Option<String>, Query, description = "Page start, default 0")
    ),
    responses(
        (status = 200, description = "Articles, annotated with isSaved when a session is presented")
    )
)]
pub async fn get_articles(
    storage: web::Data<dyn Storage>,
    sessions: web::Data<SessionStore>,
    req: HttpRequest,
    query: web::Query<ArticlesQuery>,
) -> HttpResponse {
    log::info!(
        "📰 GET /api/articles - category: {:?}, search: {:?}",
        query.category,
        query.search
    );

    let articles = article_service::list_articles(
        storage.get_ref(),
        query.category.as_deref(),
        query.search.as_deref(),
        query.limit(),
        query.offset(),
    )
    .await;

    // Annotate saved state only for authenticated callers
    match session::user_from_request(&req, &sessions) {
        Some(user_id) => {
            let annotated =
                article_service::annotate_saved(storage.get_ref(), user_id, articles).await;
            HttpResponse::Ok().json(serde_json::json!({ "articles": annotated }))
        }
        None => HttpResponse::Ok().json(serde_json::json!({ "articles": articles })),
    }
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = "Articles",
    params(
        ("id" = i64, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "The article, with its isSaved flag; the fetch counts one view"),
        (status = 404, description = "Article not found")
    )
)]
pub async fn get_article(
    storage: web::Data<dyn Storage>,
    sessions: web::Data<SessionStore>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("📰 GET /api/articles/{}", id);

    let viewer = session::user_from_request(&req, &sessions);
    match article_service::get_article(storage.get_ref(), viewer, id).await {
        Ok(article) => HttpResponse::Ok().json(serde_json::json!({ "article": article })),
        Err(e) => {
            log::warn!("⚠️ Article {} rejected: {}", id, e);
            e.error_response()
        }
    }
}
