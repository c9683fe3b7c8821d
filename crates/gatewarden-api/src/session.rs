use std::time::{Duration, Instant};

use axum::http::HeaderMap;
use dashmap::DashMap;
use gatewarden_core::Credentials;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "gatewarden_session";
pub(crate) const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// In-memory session store keyed by opaque cookie token.
///
/// Each session holds the router credentials so the agent can re-login on
/// every operation. Expired entries are dropped lazily on access.
pub struct SessionStore {
    sessions: DashMap<String, SessionEntry>,
    ttl: Duration,
}

struct SessionEntry {
    credentials: Credentials,
    expires_at: Instant,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Mint a new session and return its token.
    pub fn create(&self, credentials: Credentials) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            SessionEntry {
                credentials,
                expires_at: Instant::now() + self.ttl,
            },
        );
        token
    }

    /// Look up the credentials for a token, dropping the session if expired.
    pub fn credentials(&self, token: &str) -> Option<Credentials> {
        let entry = self.sessions.get(token)?;
        if entry.expires_at <= Instant::now() {
            drop(entry);
            self.sessions.remove(token);
            return None;
        }
        Some(entry.credentials.clone())
    }

    /// Update the stored router password after a successful credential
    /// change, so subsequent operations keep logging in.
    pub fn update_password(&self, token: &str, new_password: &str) {
        if let Some(mut entry) = self.sessions.get_mut(token) {
            entry.credentials.password = new_password.to_string();
        }
    }

    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the session token out of the request's Cookie header, if present.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Set-Cookie value establishing a session.
pub fn session_cookie(token: &str, ttl_secs: u64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_secs}")
}

/// Set-Cookie value clearing the session on logout.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    #[test]
    fn test_create_and_lookup() {
        let store = SessionStore::new();
        let token = store.create(Credentials::new("admin", "secret"));

        let creds = store.credentials(&token).unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_unknown_token() {
        let store = SessionStore::new();
        assert!(store.credentials("no-such-token").is_none());
    }

    #[test]
    fn test_expired_session_is_dropped() {
        let store = SessionStore::with_ttl(Duration::from_secs(0));
        let token = store.create(Credentials::new("admin", "secret"));

        assert!(store.credentials(&token).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_password() {
        let store = SessionStore::new();
        let token = store.create(Credentials::new("admin", "old"));

        store.update_password(&token, "new");
        assert_eq!(store.credentials(&token).unwrap().password, "new");
    }

    #[test]
    fn test_remove() {
        let store = SessionStore::new();
        let token = store.create(Credentials::new("admin", "secret"));

        assert!(store.remove(&token));
        assert!(!store.remove(&token));
        assert!(store.credentials(&token).is_none());
    }

    #[test]
    fn test_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            "other=1; gatewarden_session=abc-123; theme=dark".parse().unwrap(),
        );

        assert_eq!(token_from_headers(&headers), Some("abc-123".to_string()));
    }

    #[test]
    fn test_token_missing_from_headers() {
        let headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "other=1".parse().unwrap());
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = session_cookie("abc", 86400);
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
