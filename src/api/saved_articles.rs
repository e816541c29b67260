use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::api::current_user_id;
use crate::services::saved_article_service::{self, SaveArticleRequest};
use crate::storage::Storage;

#[utoipa::path(
    get,
    path = "/api/saved-articles",
    tag = "Saved",
    responses(
        (status = 200, description = "The caller's saved articles, each with its joined article"),
        (status = 401, description = "Not authenticated")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_saved_articles(
    storage: web::Data<dyn Storage>,
    req: HttpRequest,
) -> HttpResponse {
    log::info!("🔖 GET /api/saved-articles");

    let user_id = match current_user_id(&req) {
        Ok(user_id) => user_id,
        Err(e) => return e.error_response(),
    };

    let saved = saved_article_service::list_saved(storage.get_ref(), user_id).await;
    HttpResponse::Ok().json(serde_json::json!({ "savedArticles": saved }))
}

#[utoipa::path(
    post,
    path = "/api/saved-articles",
    tag = "Saved",
    request_body = SaveArticleRequest,
    responses(
        (status = 200, description = "The created bookmark"),
        (status = 400, description = "Article already saved"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Article not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn save_article(
    storage: web::Data<dyn Storage>,
    req: HttpRequest,
    request: web::Json<SaveArticleRequest>,
) -> HttpResponse {
    log::info!("🔖 POST /api/saved-articles - article: {}", request.article_id);

    let user_id = match current_user_id(&req) {
        Ok(user_id) => user_id,
        Err(e) => return e.error_response(),
    };

    match saved_article_service::save(storage.get_ref(), user_id, request.article_id).await {
        Ok(saved) => {
            log::info!("✅ Article {} saved by user {}", saved.article_id, user_id);
            HttpResponse::Ok().json(serde_json::json!({ "savedArticle": saved }))
        }
        Err(e) => {
            log::warn!("❌ Save failed for user {}: {}", user_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/saved-articles/{article_id}",
    tag = "Saved",
    params(
        ("article_id" = i64, Path, description = "Article id to unsave")
    ),
    responses(
        (status = 200, description = "Bookmark removed"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Not currently saved")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn unsave_article(
    storage: web::Data<dyn Storage>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> HttpResponse {
    let article_id = path.into_inner();
    log::info!("🗑️ DELETE /api/saved-articles/{}", article_id);

    let user_id = match current_user_id(&req) {
        Ok(user_id) => user_id,
        Err(e) => return e.error_response(),
    };

    match saved_article_service::unsave(storage.get_ref(), user_id, article_id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Article unsaved successfully"
        })),
        Err(e) => {
            log::warn!("❌ Unsave failed for user {}: {}", user_id, e);
            e.error_response()
        }
    }
}
