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

    let outcome = runtime.block_on(async {
        // The account form asks for the new password twice; the CLI takes
        // it once and confirms with the same value.
        let result = agent
            .change_admin_password(&credentials, current, new, new)
            .await;
        agent.shutdown().await;
        result
    })?;

    match outcome.message {
        Some(message) => println!("{message}"),
        None => println!("Admin password changed."),
    }
    Ok(())
}
