use anyhow::Result;

use crate::OutputFormat;
use crate::commands::{CredentialOpts, RouterOpts, build_agent, runtime};

pub fn execute(router: &RouterOpts, creds: &CredentialOpts, format: OutputFormat) -> Result<()> {
    let runtime = runtime()?;
    let agent = build_agent(router)?;
    let credentials = creds.to_credentials();

    let blocked = runtime.block_on(async {
        let result = agent.blocked_devices(&credentials).await;
        agent.shutdown().await;
        result
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&blocked)?),
        OutputFormat::Pretty => {
            if blocked.is_empty() {
                println!("MAC filter list is empty.");
                return Ok(());
            }
            println!("{:<18} NAME", "MAC");
            for device in &blocked {
                println!("{:<18} {}", device.mac_address, device.device_name);
            }
            println!("\n{} blocked device(s)", blocked.len());
        }
    }

    Ok(())
}
