use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account as stored. `password` holds the bcrypt hash, never plaintext.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user. Preferences and timestamp are
/// assigned by the store.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Partial profile update. Omitted fields keep their current values.
#[derive(Debug, Deserialize, Clone, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub preferences: Option<Vec<String>>,
}

/// User as returned to clients. Carries no password field.
#[derive(Debug, Serialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub name: String,
    pub preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            preferences: user.preferences,
            created_at: user.created_at,
        }
    }
}
