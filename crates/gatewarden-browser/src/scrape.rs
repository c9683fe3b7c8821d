//! Typed views of what the page scripts return.
//!
//! The scripts in `pages` hand back plain JSON; these structs are the
//! deserialization targets plus the conversion into the wire types.

use gatewarden_core::{BlockedDevice, ConnectedDevice};
use serde::Deserialize;

/// Raw cell text of one connected-device row, exactly as scraped.
#[derive(Debug, Deserialize)]
pub struct RawDeviceRow {
    pub name: String,
    #[serde(rename = "ipAndMac")]
    pub ip_and_mac: String,
    pub state: String,
    pub connectivity: String,
}

impl RawDeviceRow {
    pub fn into_device(self) -> ConnectedDevice {
        ConnectedDevice::from_row(&self.name, &self.ip_and_mac, &self.state, &self.connectivity)
    }
}

/// Raw cell text of one MAC filter row.
#[derive(Debug, Deserialize)]
pub struct RawFilterRow {
    pub mac: String,
    pub name: String,
}

impl RawFilterRow {
    pub fn into_blocked(self) -> BlockedDevice {
        BlockedDevice {
            mac_address: self.mac,
            device_name: if self.name.is_empty() {
                "N/A".to_string()
            } else {
                self.name
            },
        }
    }
}

/// Outcome banner of a form submit on the account page.
#[derive(Debug, Deserialize)]
pub struct RawOutcome {
    pub success: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_row_deserializes_from_scrape_shape() {
        let json = r#"{
            "name": "my-laptop",
            "ipAndMac": "192.168.100.12 9C:B6:D0:F1:22:A1",
            "state": "Online",
            "connectivity": "3 hours"
        }"#;

        let row: RawDeviceRow = serde_json::from_str(json).unwrap();
        let device = row.into_device();

        assert_eq!(device.device, "my-laptop");
        assert_eq!(device.ip, "192.168.100.12");
        assert_eq!(device.mac, "9C:B6:D0:F1:22:A1");
        assert_eq!(device.state, "online");
    }

    #[test]
    fn test_filter_row_empty_name_becomes_placeholder() {
        let row = RawFilterRow {
            mac: "9C:B6:D0:F1:22:A1".to_string(),
            name: String::new(),
        };

        let blocked = row.into_blocked();
        assert_eq!(blocked.device_name, "N/A");
    }

    #[test]
    fn test_outcome_with_null_message() {
        let outcome: RawOutcome =
            serde_json::from_str(r#"{"success": false, "message": null}"#).unwrap();
        assert!(!outcome.success);
        assert!(outcome.message.is_none());
    }
}
