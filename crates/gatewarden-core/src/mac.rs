use regex::Regex;
use std::sync::OnceLock;

/// Pattern for a MAC address embedded anywhere in a text blob.
///
/// The router renders IP and MAC in a single table cell, so extraction has
/// to tolerate arbitrary surrounding text and whitespace.
const MAC_PATTERN: &str = r"([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}";

fn mac_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MAC_PATTERN).expect("MAC pattern is valid"))
}

fn full_mac_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("^{MAC_PATTERN}$")).expect("MAC pattern is valid")
    })
}

/// Extract the first MAC address found in a text blob, if any.
pub fn extract(text: &str) -> Option<String> {
    mac_regex().find(text).map(|m| m.as_str().to_string())
}

/// Check whether the input is exactly one well-formed MAC address.
///
/// Accepts both `:` and `-` separators, case-insensitive hex.
pub fn is_valid(input: &str) -> bool {
    full_mac_regex().is_match(input.trim())
}

/// Validate a user-supplied MAC address.
pub fn validate(input: &str) -> crate::Result<()> {
    if is_valid(input) {
        Ok(())
    } else {
        Err(crate::Error::InvalidMac(input.to_string()))
    }
}

/// Split the router's combined "IP + MAC" cell into its parts.
///
/// The cell text looks like `192.168.100.12 9C:B6:D0:F1:22:A1` (ordering and
/// whitespace vary by firmware). Either half may be missing; absent values
/// come back as `"N/A"`, matching what the dashboard renders.
pub fn split_ip_mac(cell: &str) -> (String, String) {
    let cell = cell.trim();
    match extract(cell) {
        Some(mac) => {
            let ip = cell.replace(&mac, "");
            let ip = ip.trim();
            let ip = if ip.is_empty() {
                "N/A".to_string()
            } else {
                ip.to_string()
            };
            (ip, mac)
        }
        None => {
            let ip = if cell.is_empty() {
                "N/A".to_string()
            } else {
                cell.to_string()
            };
            (ip, "N/A".to_string())
        }
    }
}
