use crate::models::{PublicUser, UpdateUser};
use crate::storage::Storage;
use crate::utils::AppError;

/// Profile update: shallow merge of name/email/preferences.
///
/// Email uniqueness is re-checked here so a profile edit cannot break the
/// invariant registration enforces.
pub async fn update_profile(
    storage: &dyn Storage,
    user_id: i64,
    updates: UpdateUser,
) -> Result<PublicUser, AppError> {
    if let Some(email) = &updates.email {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AppError::InvalidRequest("A valid email is required".to_string()));
        }
        if let Some(existing) = storage.get_user_by_email(email).await {
            if existing.id != user_id {
                return Err(AppError::InvalidRequest("Email already in use".to_string()));
            }
        }
    }

    match storage.update_user(user_id, updates).await {
        Some(user) => Ok(user.into()),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}
