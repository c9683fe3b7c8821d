use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timed out waiting for selector: {0}")]
    SelectorTimeout(String),

    #[error("Timed out navigating to {0}")]
    NavigationTimeout(String),

    #[error("Router login failed: {0}")]
    AuthFailed(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// The router processed the submit and refused it, e.g. a rejected
    /// password change. Carries the banner text the console rendered.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Core(#[from] gatewarden_core::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
