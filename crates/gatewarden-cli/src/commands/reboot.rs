use anyhow::Result;

use crate::commands::{CredentialOpts, RouterOpts, build_agent, runtime};

pub fn execute(router: &RouterOpts, creds: &CredentialOpts) -> Result<()> {
    let runtime = runtime()?;
    let agent = build_agent(router)?;
    let credentials = creds.to_credentials();

    runtime.block_on(async {
        let result = agent.reboot(&credentials).await;
        agent.shutdown().await;
        result
    })?;

    println!("Router reboot initiated. The admin console will be unreachable for a minute or two.");
    Ok(())
}
