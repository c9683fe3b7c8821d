use anyhow::{Result, bail};
use gatewarden_core::mac;

use crate::commands::{CredentialOpts, RouterOpts, build_agent, runtime};

pub fn execute(router: &RouterOpts, creds: &CredentialOpts, mac: &str, name: &str) -> Result<()> {
    if !mac::is_valid(mac) {
        bail!("invalid MAC address: {mac}");
    }
    if name.trim().is_empty() {
        bail!("device name must not be empty");
    }

    let runtime = runtime()?;
    let agent = build_agent(router)?;
    let credentials = creds.to_credentials();

    runtime.block_on(async {
        let result = agent.block_device(&credentials, mac, name).await;
        agent.shutdown().await;
        result
    })?;

    println!("Blocked {mac} ({name})");
    Ok(())
}
