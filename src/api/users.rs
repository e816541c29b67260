use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::api::current_user_id;
use crate::models::UpdateUser;
use crate::services::user_service;
use crate::storage::Storage;

#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = "User",
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user"),
        (status = 400, description = "Invalid request or email already in use"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_profile(
    storage: web::Data<dyn Storage>,
    req: HttpRequest,
    request: web::Json<UpdateUser>,
) -> HttpResponse {
    log::info!("✏️ PUT /api/user/profile");

    let user_id = match current_user_id(&req) {
        Ok(user_id) => user_id,
        Err(e) => return e.error_response(),
    };

    match user_service::update_profile(storage.get_ref(), user_id, request.into_inner()).await {
        Ok(user) => {
            log::info!("✅ Profile updated: user {}", user_id);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "user": user
            }))
        }
        Err(e) => {
            log::warn!("❌ Profile update failed for user {}: {}", user_id, e);
            e.error_response()
        }
    }
}
