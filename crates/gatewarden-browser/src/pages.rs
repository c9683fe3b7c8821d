//! Selectors and scripts for the router's admin pages.
//!
//! The firmware is an opaque HTML application; everything the agent touches
//! is pinned here by element id or CSS selector so a firmware change only
//! requires edits in one place.

/// Login form.
pub const LOGIN_USERNAME: &str = "#txt_Username";
pub const LOGIN_PASSWORD: &str = "#txt_Password";
pub const LOGIN_BUTTON: &str = "#loginbutton";

/// Connected-device table.
pub const DEVICE_TABLE: &str = "table#devlist";

/// Wireless MAC filter table and its form controls.
pub const MAC_FILTER_TABLE: &str = "#WMacfilterConfigList";
pub const MAC_FILTER_ADD_BUTTON: &str = "#AddButton";
pub const MAC_FILTER_MAC_INPUT: &str = "#SourceMacAddress";
pub const MAC_FILTER_NAME_INPUT: &str = "#HostName";
pub const MAC_FILTER_APPLY_BUTTON: &str = "#ApplyButton";
pub const MAC_FILTER_DELETE_BUTTON: &str = "#DeleteButton";

/// Wi-Fi settings page.
pub const WIFI_PASSWORD_FIELD: &str = "#pwd_2g_wifipwd";

/// Account management page.
pub const ADMIN_OLD_PASSWORD: &str = "#oldPassword";
pub const ADMIN_NEW_PASSWORD: &str = "#newPassword";
pub const ADMIN_CONFIRM_PASSWORD: &str = "#cfmPassword";
pub const ADMIN_APPLY_BUTTON: &str = "#MdyPwdApply";
pub const REBOOT_BUTTON: &str = "#btnReboot";

/// Quote a Rust string as a JavaScript string literal.
///
/// User-supplied values (MAC addresses, passwords) get embedded into page
/// scripts; JSON string encoding covers every escape JS needs.
pub fn js_str(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Collect the raw cell text of every connected-device row.
///
/// Rows with fewer than five columns are padding the firmware injects and
/// are dropped. IP and MAC arrive combined in one cell; splitting happens
/// on the Rust side.
pub fn scrape_device_rows_js() -> &'static str {
    r#"
    (function() {
        const pick = (col, sel) => {
            const el = col.querySelector(sel);
            return el ? el.textContent.trim() : '';
        };
        const rows = document.querySelectorAll('table#devlist tr.DevTableList');
        return Array.from(rows)
            .map((row) => {
                const cols = row.querySelectorAll('td');
                if (cols.length < 5) return null;
                return {
                    name: pick(cols[0], 'div[id^="divDevName_"]'),
                    ipAndMac: (pick(cols[2], 'div[id^="DivIpandMac_"]').split('\n')[0] || '').trim(),
                    state: pick(cols[3], 'div[id^="DivDevStatus_"]'),
                    connectivity: pick(cols[4], 'div[id^="DivConnectTime_"]'),
                };
            })
            .filter((row) => row !== null);
    })()
    "#
}

/// Collect MAC and name of every MAC filter row (header rows excluded).
pub fn scrape_filter_rows_js() -> &'static str {
    r#"
    (function() {
        const rows = document.querySelectorAll('#WMacfilterConfigList tr:not(.tableth)');
        return Array.from(rows)
            .map((row) => ({
                mac: (row.querySelector('td:nth-child(2)')?.textContent || '').trim(),
                name: (row.querySelector('td:nth-child(3)')?.textContent || '').trim(),
            }))
            .filter((row) => row.mac.length > 0);
    })()
    "#
}

/// Tick the checkbox of the filter row whose MAC cell matches.
/// Returns whether a matching row was found.
pub fn select_filter_row_js(mac: &str) -> String {
    format!(
        r#"
        (function() {{
            const rows = document.querySelectorAll('#WMacfilterConfigList tr:not(.tableth)');
            for (const row of rows) {{
                const cell = (row.querySelector('td:nth-child(2)')?.textContent || '').trim();
                if (cell === {mac}) {{
                    const box = row.querySelector("input[type='checkbox']");
                    if (box) {{ box.click(); return true; }}
                }}
            }}
            return false;
        }})()
        "#,
        mac = js_str(mac)
    )
}

/// Read the current 2.4 GHz Wi-Fi password out of its form field.
/// Returns null when the field is absent.
pub fn read_wifi_password_js() -> &'static str {
    r#"
    (function() {
        const field = document.getElementById('pwd_2g_wifipwd');
        return field ? field.value : null;
    })()
    "#
}

/// Write the new Wi-Fi password and submit through the page's own form
/// handler, passing along its CSRF token. Returns whether the page exposed
/// the expected `SubmitForm` entry point.
pub fn submit_wifi_password_js(new_password: &str) -> String {
    format!(
        r#"
        (function() {{
            const field = document.getElementById('pwd_2g_wifipwd');
            if (!field) return false;
            field.value = {pwd};
            field.dispatchEvent(new Event('change'));
            const token = document.getElementById('hwonttoken');
            if (token && typeof SubmitForm === 'function') {{
                SubmitForm(token.value);
                return true;
            }}
            return false;
        }})()
        "#,
        pwd = js_str(new_password)
    )
}

/// Read the outcome banner the account page renders after a submit.
pub fn read_outcome_js() -> &'static str {
    r#"
    (function() {
        const err = document.querySelector('.error-message');
        const ok = document.querySelector('.success-message');
        return {
            success: !!ok,
            message: ok ? ok.textContent.trim() : (err ? err.textContent.trim() : null),
        };
    })()
    "#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_str_escapes_quotes() {
        assert_eq!(js_str("plain"), r#""plain""#);
        assert_eq!(js_str(r#"a"b"#), r#""a\"b""#);
        assert_eq!(js_str("line\nbreak"), r#""line\nbreak""#);
    }

    #[test]
    fn test_select_filter_row_embeds_quoted_mac() {
        let js = select_filter_row_js("9C:B6:D0:F1:22:A1");
        assert!(js.contains(r#""9C:B6:D0:F1:22:A1""#));
    }

    #[test]
    fn test_submit_wifi_password_quotes_value() {
        // A password with quote characters must not break out of the literal
        let js = submit_wifi_password_js(r#"pa"ss'word"#);
        assert!(js.contains(r#""pa\"ss'word""#));
    }
}
