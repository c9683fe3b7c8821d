pub mod config;
pub mod device;
pub mod error;
pub mod mac;

pub use config::{AdminPage, Credentials, RouterConfig};
pub use device::{BlockedDevice, ConnectedDevice};
pub use error::{Error, Result};
