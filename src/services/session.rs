use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use actix_web::HttpRequest;
use uuid::Uuid;

/// Server-held session state: opaque bearer token correlated to a user id.
///
/// Tokens are uuid-v4 strings with no embedded claims; everything the
/// server knows about a session lives in this map. Constructed once in
/// `main` and injected via `web::Data`, so tests get a fresh store each.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, i64>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Mints a new opaque token for the user
    pub fn create(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), user_id);
        token
    }

    pub fn get(&self, token: &str) -> Option<i64> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .copied()
    }

    /// Removes the session; reports whether one existed
    pub fn destroy(&self, token: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Bearer token from the Authorization header, if any
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let header = req.headers().get("Authorization")?;
    let header_str = header.to_str().ok()?;
    if header_str.starts_with("Bearer ") {
        Some(&header_str[7..])
    } else {
        None
    }
}

/// Resolves the caller's user id when a valid session is presented.
/// Optional-auth routes use this instead of the auth middleware.
pub fn user_from_request(req: &HttpRequest, sessions: &SessionStore) -> Option<i64> {
    bearer_token(req).and_then(|token| sessions.get(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_resolve_until_destroyed() {
        let sessions = SessionStore::new();
        let token = sessions.create(7);

        assert_eq!(sessions.get(&token), Some(7));
        assert!(sessions.destroy(&token));
        assert_eq!(sessions.get(&token), None);
        assert!(!sessions.destroy(&token));
    }

    #[test]
    fn test_tokens_are_opaque_and_distinct() {
        let sessions = SessionStore::new();
        let first = sessions.create(1);
        let second = sessions.create(1);

        assert_ne!(first, second);
        assert_eq!(sessions.get("not-a-token"), None);
    }
}
