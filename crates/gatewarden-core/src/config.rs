use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Router admin credentials, held so the agent can re-login on every
/// operation (the router session lives and dies with each page).
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of debug logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Admin pages the agent drives, as firmware-fixed paths under the router host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPage {
    /// Login form, served at the root.
    Login,
    /// Landing page after a successful login.
    Index,
    /// Connected-device table (wifi devices view).
    DeviceList,
    /// Wireless MAC filter table.
    MacFilter,
    /// Simplified Wi-Fi configuration.
    WifiSettings,
    /// Account management (admin password, reboot).
    Account,
}

impl AdminPage {
    pub fn path(&self) -> &'static str {
        match self {
            AdminPage::Login => "/",
            AdminPage::Index => "/index.asp",
            AdminPage::DeviceList => "/html/bbsp/userdevinfo/userdevinfosmart.asp?type=wifidev",
            AdminPage::MacFilter => "/html/bbsp/wlanmacfilter/wlanmacfilter.asp",
            AdminPage::WifiSettings => "/html/amp/wlanbasic/simplewificfg.asp",
            AdminPage::Account => "/html/ssmp/accoutcfg/ontmngt.asp",
        }
    }
}

/// Connection settings for the router's admin console.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Router host or IP, e.g. "192.168.100.1".
    pub host: String,
    /// Explicit Chrome binary path; discovered when absent.
    pub chrome_path: Option<PathBuf>,
    /// Run Chrome headless. Disable for interactive debugging.
    pub headless: bool,
    /// Upper bound on page navigation and selector waits.
    pub nav_timeout: Duration,
}

impl RouterConfig {
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(Error::InvalidHost("host must not be empty".to_string()));
        }
        // The admin console is plain http; validate the host resolves to a URL.
        Url::parse(&format!("http://{host}/"))
            .map_err(|e| Error::InvalidHost(format!("{host}: {e}")))?;

        Ok(Self {
            host,
            chrome_path: None,
            headless: true,
            nav_timeout: Duration::from_secs(60),
        })
    }

    pub fn with_chrome_path(mut self, path: Option<PathBuf>) -> Self {
        self.chrome_path = path;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.host)
    }

    pub fn page_url(&self, page: AdminPage) -> String {
        match page {
            AdminPage::Login => self.base_url(),
            other => format!("http://{}{}", self.host, other.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_host() {
        let config = RouterConfig::new("192.168.100.1").unwrap();
        assert_eq!(config.base_url(), "http://192.168.100.1/");
        assert!(config.headless);
    }

    #[test]
    fn test_empty_host_rejected() {
        assert!(RouterConfig::new("").is_err());
        assert!(RouterConfig::new("   ").is_err());
    }

    #[test]
    fn test_page_urls() {
        let config = RouterConfig::new("192.168.100.1").unwrap();
        assert_eq!(
            config.page_url(AdminPage::Index),
            "http://192.168.100.1/index.asp"
        );
        assert_eq!(
            config.page_url(AdminPage::MacFilter),
            "http://192.168.100.1/html/bbsp/wlanmacfilter/wlanmacfilter.asp"
        );
        assert_eq!(config.page_url(AdminPage::Login), "http://192.168.100.1/");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("admin", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_device_list_keeps_query() {
        let config = RouterConfig::new("10.0.0.1").unwrap();
        assert!(
            config
                .page_url(AdminPage::DeviceList)
                .ends_with("userdevinfosmart.asp?type=wifidev")
        );
    }
}
