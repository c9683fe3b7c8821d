//! Request handlers for the REST facade.
//!
//! Every protected handler authenticates the session cookie, then drives a
//! single agent operation and wraps the result in the dashboard's
//! `{ success, ... }` wire shape.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use gatewarden_core::{BlockedDevice, ConnectedDevice, Credentials, mac};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::session::{SESSION_TTL, clear_session_cookie, session_cookie, token_from_headers};
use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDeviceRequest {
    pub mac_address: String,
    pub device_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnblockDeviceRequest {
    pub mac_address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiPasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDetailsRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct DevicesResponse {
    pub success: bool,
    pub devices: Vec<ConnectedDevice>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedDevicesResponse {
    pub success: bool,
    pub blocked_devices: Vec<BlockedDevice>,
}

fn require(value: &str, name: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::Validation(format!("{name} is required")))
    } else {
        Ok(())
    }
}

fn require_mac(value: &str) -> Result<(), ApiError> {
    require(value, "MAC address")?;
    mac::validate(value).map_err(|e| ApiError::Validation(e.to_string()))
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<(String, Credentials), ApiError> {
    let token = token_from_headers(headers).ok_or(ApiError::Unauthenticated)?;
    let credentials = state
        .sessions
        .credentials(&token)
        .ok_or(ApiError::Unauthenticated)?;
    Ok((token, credentials))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require(&request.username, "Username")?;
    require(&request.password, "Password")?;

    tracing::info!(username = %request.username, "login attempt");

    let credentials = Credentials::new(request.username, request.password);
    state.agent.login(&credentials).await?;

    let token = state.sessions.create(credentials);
    let cookie = session_cookie(&token, SESSION_TTL.as_secs());

    Ok((
        [(header::SET_COOKIE, cookie)],
        StatusResponse::ok("Login successful"),
    ))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(token) = token_from_headers(&headers) {
        state.sessions.remove(&token);
    }

    Ok((
        [(header::SET_COOKIE, clear_session_cookie())],
        StatusResponse::ok("Logged out successfully"),
    ))
}

pub async fn connected_devices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DevicesResponse>, ApiError> {
    let (_, credentials) = authenticate(&state, &headers)?;

    let devices = state.agent.connected_devices(&credentials).await?;
    Ok(Json(DevicesResponse {
        success: true,
        devices,
    }))
}

pub async fn blocked_devices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<BlockedDevicesResponse>, ApiError> {
    let (_, credentials) = authenticate(&state, &headers)?;

    let blocked_devices = state.agent.blocked_devices(&credentials).await?;
    Ok(Json(BlockedDevicesResponse {
        success: true,
        blocked_devices,
    }))
}

pub async fn block_device(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<BlockDeviceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, credentials) = authenticate(&state, &headers)?;
    require_mac(&request.mac_address)?;
    require(&request.device_name, "Device name")?;

    state
        .agent
        .block_device(&credentials, &request.mac_address, &request.device_name)
        .await?;
    Ok(StatusResponse::ok("Device blocked successfully"))
}

pub async fn unblock_device(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<UnblockDeviceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, credentials) = authenticate(&state, &headers)?;
    require_mac(&request.mac_address)?;

    state
        .agent
        .unblock_device(&credentials, &request.mac_address)
        .await?;
    Ok(StatusResponse::ok("Device unblocked successfully"))
}

pub async fn change_wifi_password(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<WifiPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, credentials) = authenticate(&state, &headers)?;
    require(&request.current_password, "Current WiFi password")?;
    require(&request.new_password, "New WiFi password")?;

    state
        .agent
        .change_wifi_password(&credentials, &request.current_password, &request.new_password)
        .await?;
    Ok(StatusResponse::ok("WiFi password changed successfully"))
}

pub async fn change_login_details(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<LoginDetailsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (token, credentials) = authenticate(&state, &headers)?;
    require(&request.current_password, "Current password")?;
    require(&request.new_password, "New password")?;
    require(&request.confirm_password, "Confirm password")?;
    if request.new_password != request.confirm_password {
        return Err(ApiError::Validation("Passwords do not match".to_string()));
    }

    let outcome = state
        .agent
        .change_admin_password(
            &credentials,
            &request.current_password,
            &request.new_password,
            &request.confirm_password,
        )
        .await?;

    // Keep the session usable with the new router password.
    state.sessions.update_password(&token, &request.new_password);

    Ok(StatusResponse::ok(
        outcome
            .message
            .unwrap_or_else(|| "Login details changed successfully".to_string()),
    ))
}

pub async fn restart_device(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let (_, credentials) = authenticate(&state, &headers)?;

    state.agent.reboot(&credentials).await?;
    Ok(StatusResponse::ok("Device restart initiated"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("", "Username").is_err());
        assert!(require("   ", "Username").is_err());
        assert!(require("admin", "Username").is_ok());
    }

    #[test]
    fn test_require_mac() {
        assert!(require_mac("9C:B6:D0:F1:22:A1").is_ok());
        assert!(require_mac("").is_err());
        assert!(require_mac("not-a-mac").is_err());
    }

    #[test]
    fn test_request_wire_names() {
        let request: BlockDeviceRequest = serde_json::from_str(
            r#"{"macAddress": "9C:B6:D0:F1:22:A1", "deviceName": "tablet"}"#,
        )
        .unwrap();
        assert_eq!(request.mac_address, "9C:B6:D0:F1:22:A1");
        assert_eq!(request.device_name, "tablet");
    }

    #[test]
    fn test_blocked_response_wire_names() {
        let response = BlockedDevicesResponse {
            success: true,
            blocked_devices: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("blockedDevices").is_some());
    }
}
