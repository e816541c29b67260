pub mod article_service;
pub mod auth_service;
pub mod saved_article_service;
pub mod session;
pub mod user_service;

pub use session::*;
