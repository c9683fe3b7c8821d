use anyhow::{Result, bail};
use gatewarden_core::mac;

use crate::commands::{CredentialOpts, RouterOpts, build_agent, runtime};

pub fn execute(router: &RouterOpts, creds: &CredentialOpts, mac: &str) -> Result<()> {
    if !mac::is_valid(mac) {
        bail!("invalid MAC address: {mac}");
    }

    let runtime = runtime()?;
    let agent = build_agent(router)?;
    let credentials = creds.to_credentials();

    runtime.block_on(async {
        let result = agent.unblock_device(&credentials, mac).await;
        agent.shutdown().await;
        result
    })?;

    println!("Unblocked {mac}");
    Ok(())
}
