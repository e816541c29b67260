use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::services::auth_service::{self, AuthResponse, LoginRequest, RegisterRequest};
use crate::services::session::{self, SessionStore};
use crate::storage::Storage;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration successful", body = AuthResponse),
        (status = 400, description = "Invalid request or email/username already taken")
    )
)]
pub async fn register(
    storage: web::Data<dyn Storage>,
    sessions: web::Data<SessionStore>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    log::info!("📝 POST /api/auth/register - email: {}", request.email);

    match auth_service::register(storage.get_ref(), &sessions, &request).await {
        Ok(response) => {
            log::info!("✅ Registration successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Registration failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    storage: web::Data<dyn Storage>,
    sessions: web::Data<SessionStore>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /api/auth/login - email: {}", request.email);

    match auth_service::login(storage.get_ref(), &sessions, &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Session destroyed")
    )
)]
pub async fn logout(sessions: web::Data<SessionStore>, req: HttpRequest) -> HttpResponse {
    log::info!("👋 POST /api/auth/logout");

    if let Some(token) = session::bearer_token(&req) {
        sessions.destroy(token);
    }

    // Logout is best-effort teardown; succeeds even without a session
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Logged out successfully"
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current user"),
        (status = 401, description = "No session, or the user no longer exists")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    storage: web::Data<dyn Storage>,
    sessions: web::Data<SessionStore>,
    req: HttpRequest,
) -> HttpResponse {
    log::info!("👤 GET /api/auth/me");

    let token = session::bearer_token(&req);
    match auth_service::current_user(storage.get_ref(), &sessions, token).await {
        Ok(user) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "user": user
        })),
        Err(e) => {
            log::warn!("❌ Session rejected: {}", e);
            e.error_response()
        }
    }
}
