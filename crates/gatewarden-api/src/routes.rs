use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::ratelimit;
use crate::state::AppState;

/// Build the REST facade.
///
/// ```text
/// GET  /health                    - liveness
/// POST /api/login                 - authenticate against the router
/// POST /api/logout                - destroy the session
/// GET  /api/connected-devices     - scrape the device table
/// GET  /api/blocked-devices       - scrape the MAC filter list
/// POST /api/block-device          - add a MAC filter entry
/// POST /api/unblock-device        - remove a MAC filter entry
/// POST /api/change-wifi-password  - rotate the Wi-Fi password
/// POST /api/change-login-details  - rotate the admin password
/// POST /api/restart-device        - reboot the router
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/connected-devices", get(handlers::connected_devices))
        .route("/blocked-devices", get(handlers::blocked_devices))
        .route("/block-device", post(handlers::block_device))
        .route("/unblock-device", post(handlers::unblock_device))
        .route("/change-wifi-password", post(handlers::change_wifi_password))
        .route("/change-login-details", post(handlers::change_login_details))
        .route("/restart-device", post(handlers::restart_device))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(
            state.limiter.clone(),
            ratelimit::rate_limit,
        ))
        .layer(cors_layer(&state.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Credentialed CORS for the dashboard origins. With no configured origins
/// the layer allows nothing cross-origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin: {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
