use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;

use crate::ApiError;

const DEFAULT_MAX_REQUESTS: u32 = 100;
const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Fixed-window request limiter keyed by client IP.
pub struct RateLimiter {
    windows: DashMap<IpAddr, Window>,
    max_requests: u32,
    window: Duration,
}

struct Window {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }

    pub fn with_limits(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window,
        }
    }

    /// Record one request from `ip`; returns whether it is allowed.
    ///
    /// Expired windows are dropped on every call, so the map never holds an
    /// entry for a client that went quiet for a full window.
    pub fn check(&self, ip: IpAddr) -> bool {
        let now = Instant::now();
        self.windows
            .retain(|_, window| now.duration_since(window.started) < self.window);

        let mut entry = self.windows.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });

        entry.count += 1;
        entry.count <= self.max_requests
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware enforcing the limiter.
///
/// The client address is absent when the router is driven without a real
/// socket (handler tests); those requests pass through unlimited.
pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());

    if let Some(ip) = client_ip {
        if !limiter.check(ip) {
            return ApiError::RateLimited.into_response();
        }
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit() {
        let limiter = RateLimiter::with_limits(3, Duration::from_secs(60));
        let ip: IpAddr = "10.0.0.1".parse().unwrap();

        assert!(limiter.check(ip));
        assert!(limiter.check(ip));
        assert!(limiter.check(ip));
        assert!(!limiter.check(ip));
    }

    #[test]
    fn test_ips_are_independent() {
        let limiter = RateLimiter::with_limits(1, Duration::from_secs(60));
        let a: IpAddr = "10.0.0.1".parse().unwrap();
        let b: IpAddr = "10.0.0.2".parse().unwrap();

        assert!(limiter.check(a));
        assert!(!limiter.check(a));
        assert!(limiter.check(b));
    }

    #[test]
    fn test_window_resets() {
        let limiter = RateLimiter::with_limits(1, Duration::from_secs(0));
        let ip: IpAddr = "10.0.0.1".parse().unwrap();

        assert!(limiter.check(ip));
        // Zero-length window: every call starts a fresh one
        assert!(limiter.check(ip));
    }

    #[test]
    fn test_expired_windows_are_dropped() {
        let limiter = RateLimiter::with_limits(1, Duration::from_secs(0));
        let a: IpAddr = "10.0.0.1".parse().unwrap();
        let b: IpAddr = "10.0.0.2".parse().unwrap();

        limiter.check(a);
        limiter.check(b);

        // The zero-length window expires a's entry before b's is recorded
        assert_eq!(limiter.windows.len(), 1);
        assert!(limiter.windows.contains_key(&b));
    }
}
