use utoipa::OpenApi;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "News Service API",
        version = "1.0.0",
        description = "API documentation for the news aggregation service. \n\n**Authentication:** Session endpoints require an opaque Bearer token obtained from register or login.\n\n**Features:**\n- Session-based authentication (register, login, logout)\n- Categorized article browsing, trending and search\n- Per-user saved articles\n- Health monitoring",
        contact(
            name = "News Service Team",
            email = "support@news-service.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::api::auth::register,
        crate::api::auth::login,
        crate::api::auth::logout,
        crate::api::auth::get_me,

        // User profile
        crate::api::users::update_profile,

        // Articles
        crate::api::articles::get_articles,
        crate::api::articles::get_article,

        // Saved articles
        crate::api::saved_articles::get_saved_articles,
        crate::api::saved_articles::save_article,
        crate::api::saved_articles::unsave_article,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::AuthResponse,

            // Entities
            crate::models::PublicUser,
            crate::models::UpdateUser,
            crate::models::Article,
            crate::models::ArticleWithState,
            crate::models::SavedArticle,
            crate::models::SavedArticleWithArticle,
            crate::services::saved_article_service::SaveArticleRequest,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and session management endpoints."),
        (name = "User", description = "Profile endpoints for the authenticated user."),
        (name = "Articles", description = "Article browsing: newest, by category, trending and search."),
        (name = "Saved", description = "The authenticated user's saved-articles list."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Enter your session token"))
                        .build()
                ),
            );
        }
    }
}
