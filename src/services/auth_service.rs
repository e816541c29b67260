use bcrypt::{hash, verify, DEFAULT_COST};
use serde::{Deserialize, Serialize};

use crate::models::{InsertUser, PublicUser};
use crate::services::session::SessionStore;
use crate::storage::Storage;
use crate::utils::AppError;

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: PublicUser,
}

fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
    if request.username.trim().is_empty() {
        return Err(AppError::InvalidRequest("Username is required".to_string()));
    }
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(AppError::InvalidRequest("A valid email is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::InvalidRequest("Password is required".to_string()));
    }
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidRequest("Name is required".to_string()));
    }
    Ok(())
}

/// User registration: uniqueness pre-checks, bcrypt hash, create, session
pub async fn register(
    storage: &dyn Storage,
    sessions: &SessionStore,
    request: &RegisterRequest,
) -> Result<AuthResponse, AppError> {
    validate_registration(request)?;

    // Email is checked before username, so a duplicate of both reports the
    // email conflict
    if storage.get_user_by_email(&request.email).await.is_some() {
        return Err(AppError::InvalidRequest(
            "User already exists with this email".to_string(),
        ));
    }
    if storage.get_user_by_username(&request.username).await.is_some() {
        return Err(AppError::InvalidRequest("Username already taken".to_string()));
    }

    let hashed_password = hash(&request.password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

    let user = storage
        .create_user(InsertUser {
            username: request.username.clone(),
            email: request.email.clone(),
            password: hashed_password,
            name: request.name.clone(),
        })
        .await;

    let token = sessions.create(user.id);

    Ok(AuthResponse {
        success: true,
        token,
        user: user.into(),
    })
}

/// User login. Unknown email and wrong password are indistinguishable to
/// the caller.
pub async fn login(
    storage: &dyn Storage,
    sessions: &SessionStore,
    request: &LoginRequest,
) -> Result<AuthResponse, AppError> {
    let user = storage
        .get_user_by_email(&request.email)
        .await
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = verify(&request.password, &user.password)
        .map_err(|e| AppError::Internal(format!("Password verification error: {}", e)))?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid email or password".to_string()));
    }

    let token = sessions.create(user.id);

    Ok(AuthResponse {
        success: true,
        token,
        user: user.into(),
    })
}

/// Resolves the session to its user. A session whose user vanished is
/// destroyed on sight.
pub async fn current_user(
    storage: &dyn Storage,
    sessions: &SessionStore,
    token: Option<&str>,
) -> Result<PublicUser, AppError> {
    let token = token.ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;
    let user_id = sessions
        .get(token)
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

    match storage.get_user(user_id).await {
        Some(user) => Ok(user.into()),
        None => {
            sessions.destroy(token);
            Err(AppError::Unauthorized("User not found".to_string()))
        }
    }
}
