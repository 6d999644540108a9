use crate::calendar::SystemClock;
use crate::server::{AppState, run_server};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    let state = AppState::new(ctx.config, ctx.root, ctx.catalog, Arc::new(SystemClock))?;

    println!("Serving the garden API on http://{}", addr);

    tokio::runtime::Runtime::new()?.block_on(run_server(state, addr))?;
    Ok(())
}
