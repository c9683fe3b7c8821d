use anyhow::Result;

use crate::OutputFormat;
use crate::commands::{CredentialOpts, RouterOpts, build_agent, runtime};

pub fn execute(router: &RouterOpts, creds: &CredentialOpts, format: OutputFormat) -> Result<()> {
    let runtime = runtime()?;
    let agent = build_agent(router)?;
    let credentials = creds.to_credentials();

    let devices = runtime.block_on(async {
        let result = agent.connected_devices(&credentials).await;
        agent.shutdown().await;
        result
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&devices)?),
        OutputFormat::Pretty => {
            if devices.is_empty() {
                println!("No connected devices.");
                return Ok(());
            }
            println!(
                "{:<24} {:<18} {:<16} {:<8} CONNECTED",
                "DEVICE", "MAC", "IP", "STATE"
            );
            for device in &devices {
                println!(
                    "{:<24} {:<18} {:<16} {:<8} {}",
                    device.device, device.mac, device.ip, device.state, device.connectivity
                );
            }
            println!("\n{} device(s)", devices.len());
        }
    }

    Ok(())
}
