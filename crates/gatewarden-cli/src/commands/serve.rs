use std::sync::Arc;

use anyhow::Result;
use gatewarden_api::{ApiServer, AppState, ServerConfig};

use crate::commands::{RouterOpts, build_agent, runtime};

pub fn execute(
    router: &RouterOpts,
    host: &str,
    port: u16,
    allowed_origins: Vec<String>,
) -> Result<()> {
    let runtime = runtime()?;
    let agent = build_agent(router)?;

    tracing::info!(
        router = %router.router_host,
        origins = allowed_origins.len(),
        "starting API server"
    );

    let state = Arc::new(AppState::new(agent, allowed_origins));
    let server = ApiServer::new(ServerConfig::new(host, port), state);

    runtime
        .block_on(server.run())
        .map_err(|e| anyhow::anyhow!("server error: {e}"))
}
