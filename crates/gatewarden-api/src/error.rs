use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// API error types, each carrying its HTTP mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Too many requests")]
    RateLimited,

    #[error(transparent)]
    Agent(#[from] gatewarden_browser::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Agent(err) => match err {
                gatewarden_browser::Error::AuthFailed(_) => StatusCode::UNAUTHORIZED,
                gatewarden_browser::Error::Rejected(_) => StatusCode::BAD_REQUEST,
                gatewarden_browser::Error::DeviceNotFound(_) => StatusCode::NOT_FOUND,
                gatewarden_browser::Error::SelectorTimeout(_)
                | gatewarden_browser::Error::NavigationTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            ApiError::Validation("Username is required".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unauthenticated_maps_to_401() {
        assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_agent_auth_failure_maps_to_401() {
        let err = ApiError::Agent(gatewarden_browser::Error::AuthFailed("nope".to_string()));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_rejected_submit_maps_to_400() {
        let err = ApiError::Agent(gatewarden_browser::Error::Rejected(
            "Incorrect current password".to_string(),
        ));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_device_not_found_maps_to_404() {
        let err = ApiError::Agent(gatewarden_browser::Error::DeviceNotFound(
            "9C:B6:D0:F1:22:A1".to_string(),
        ));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_timeouts_map_to_504() {
        let err = ApiError::Agent(gatewarden_browser::Error::SelectorTimeout(
            "#devlist".to_string(),
        ));
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_browser_failure_maps_to_500() {
        let err = ApiError::Agent(gatewarden_browser::Error::Browser("boom".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
