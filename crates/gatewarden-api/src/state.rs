use std::sync::Arc;

use gatewarden_browser::RouterAgent;

use crate::{RateLimiter, SessionStore};

/// Shared state behind every handler: the one browser-backed agent, the
/// session store, and the request limiter.
pub struct AppState {
    pub agent: RouterAgent,
    pub sessions: SessionStore,
    pub limiter: Arc<RateLimiter>,
    /// Origins allowed by CORS. Empty means same-origin only.
    pub allowed_origins: Vec<String>,
}

impl AppState {
    pub fn new(agent: RouterAgent, allowed_origins: Vec<String>) -> Self {
        Self {
            agent,
            sessions: SessionStore::new(),
            limiter: Arc::new(RateLimiter::new()),
            allowed_origins,
        }
    }
}
