use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gatewarden_browser::RouterAgent;
use gatewarden_core::{Credentials, RouterConfig};

pub mod admin_password;
pub mod block;
pub mod blocked;
pub mod completion;
pub mod devices;
pub mod reboot;
pub mod serve;
pub mod unblock;
pub mod wifi_password;

/// Router connection flags shared by every command.
#[derive(Args, Debug, Clone)]
pub struct RouterOpts {
    /// Router host or IP address
    #[arg(long, env = "ROUTER_HOST", default_value = "192.168.100.1")]
    pub router_host: String,

    /// Chrome binary path (auto-detected when omitted)
    #[arg(long, env = "GATEWARDEN_CHROME_PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Run Chrome with a visible window for debugging
    #[arg(long)]
    pub headful: bool,
}

impl RouterOpts {
    pub fn to_config(&self) -> Result<RouterConfig> {
        let config = RouterConfig::new(&self.router_host)?
            .with_chrome_path(self.chrome_path.clone())
            .with_headless(!self.headful);
        Ok(config)
    }
}

/// Router admin credentials for one-shot commands.
#[derive(Args, Debug, Clone)]
pub struct CredentialOpts {
    /// Router admin username
    #[arg(short, long, env = "ROUTER_USERNAME")]
    pub username: String,

    /// Router admin password
    #[arg(short, long, env = "ROUTER_PASSWORD")]
    pub password: String,
}

impl CredentialOpts {
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

pub(crate) fn build_agent(router: &RouterOpts) -> Result<RouterAgent> {
    Ok(RouterAgent::new(router.to_config()?))
}
