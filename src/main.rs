mod api;
mod middleware;
mod models;
mod seeds;
mod services;
mod storage;
mod utils;

use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::services::session::SessionStore;
use crate::storage::{MemStorage, Storage};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3002".to_string());
    let seed_articles = env::var("SEED_ARTICLES")
        .map(|value| value != "false")
        .unwrap_or(true);

    log::info!("🚀 Starting News Service...");

    // In-memory storage: explicitly constructed here and injected below,
    // never reached through a global. Swapping in a database-backed
    // implementation of `Storage` is a construction-site change only.
    let mem_storage = Arc::new(MemStorage::new());

    // 🌱 Seed the launch article catalogue
    if seed_articles {
        seeds::articles_seed::seed_default_articles(&mem_storage);
    }

    log::info!(
        "✅ In-memory storage ready ({} articles)",
        mem_storage.article_count()
    );

    let storage: Arc<dyn Storage> = mem_storage;
    let storage_data: web::Data<dyn Storage> = web::Data::from(storage);
    let session_data = web::Data::new(SessionStore::new());

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000") // Frontend Web
            .allowed_origin("http://127.0.0.1:3000")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .supports_credentials()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(storage_data.clone())
            .app_data(session_data.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Auth endpoints (sessions are checked inside the handlers)
            .service(
                web::scope("/api/auth")
                    .route("/register", web::post().to(api::auth::register))
                    .route("/login", web::post().to(api::auth::login))
                    .route("/logout", web::post().to(api::auth::logout))
                    .route("/me", web::get().to(api::auth::get_me)),
            )
            // User profile - requires a session
            .service(
                web::scope("/api/user")
                    .wrap(middleware::SessionAuth)
                    .route("/profile", web::put().to(api::users::update_profile)),
            )
            // Articles - public, with optional session for isSaved flags
            .service(
                web::scope("/api/articles")
                    .route("", web::get().to(api::articles::get_articles))
                    .route("/{id}", web::get().to(api::articles::get_article)),
            )
            // Saved articles - requires a session
            .service(
                web::scope("/api/saved-articles")
                    .wrap(middleware::SessionAuth)
                    .route("", web::get().to(api::saved_articles::get_saved_articles))
                    .route("", web::post().to(api::saved_articles::save_article))
                    .route(
                        "/{article_id}",
                        web::delete().to(api::saved_articles::unsave_article),
                    ),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
