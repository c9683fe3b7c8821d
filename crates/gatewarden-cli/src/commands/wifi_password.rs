use anyhow::{Result, bail};

use crate::commands::{CredentialOpts, RouterOpts, build_agent, runtime};

pub fn execute(
    router: &RouterOpts,
    creds: &CredentialOpts,
    current: &str,
    new: &str,
) -> Result<()> {
    if current.is_empty() || new.is_empty() {
        bail!("current and new passwords must not be empty");
    }

    let runtime = runtime()?;
    let agent = build_agent(router)?;
    let credentials = creds.to_credentials();

    runtime.block_on(async {
        let result = agent.change_wifi_password(&credentials, current, new).await;
        agent.shutdown().await;
        result
    })?;

    println!("Wi-Fi password changed.");
    Ok(())
}
