use actix_web::{HttpMessage, HttpRequest};

use crate::middleware::AuthenticatedUser;
use crate::utils::AppError;

pub mod articles;
pub mod auth;
pub mod health;
pub mod saved_articles;
pub mod swagger;
pub mod users;

/// Identity placed in the request extensions by the session middleware
pub(crate) fn current_user_id(req: &HttpRequest) -> Result<i64, AppError> {
    req.extensions()
        .get::<AuthenticatedUser>()
        .map(|user| user.0)
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))
}
