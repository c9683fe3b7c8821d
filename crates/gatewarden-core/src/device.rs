use serde::{Deserialize, Serialize};

use crate::mac;

/// One row of the router's connected-device table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedDevice {
    /// Device name as reported by the router (DHCP hostname or "N/A").
    pub device: String,
    pub mac: String,
    pub ip: String,
    /// Connection state, lowercased ("online", "offline").
    pub state: String,
    /// Connection duration, or "Not connected" when the router shows "--".
    pub connectivity: String,
}

impl ConnectedDevice {
    /// Build a device record from the raw cell text scraped out of one table
    /// row. The IP and MAC arrive combined in a single cell; state and
    /// connectivity are normalized the way the dashboard expects them.
    pub fn from_row(name: &str, ip_and_mac: &str, state: &str, connectivity: &str) -> Self {
        let (ip, mac) = mac::split_ip_mac(ip_and_mac);

        let name = name.trim();
        let state = state.trim();
        let connectivity = connectivity.trim();

        // Missing cells default to "N/A" before any normalization; only a
        // literal "--" cell means the router reported no connection time.
        Self {
            device: if name.is_empty() {
                "N/A".to_string()
            } else {
                name.to_string()
            },
            mac,
            ip,
            state: if state.is_empty() {
                "n/a".to_string()
            } else {
                state.to_lowercase()
            },
            connectivity: if connectivity == "--" {
                "Not connected".to_string()
            } else if connectivity.is_empty() {
                "N/A".to_string()
            } else {
                connectivity.to_string()
            },
        }
    }
}

/// One row of the router's wireless MAC filter table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedDevice {
    pub mac_address: String,
    pub device_name: String,
}
