use clap::Parser;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use stables_mcp_server::StablesServer;
use stables_mcp_server::config::{Cli, init_tracing};
use stables_mcp_server::error::ServerError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let client = cli
        .build_client()
        .inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %cli.api_url,
        "starting stables-mcp-server on stdio"
    );

    let service = StablesServer::new(client)
        .serve(stdio())
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;
    service
        .waiting()
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;

    tracing::info!("stdio transport closed, shutting down");
    Ok(())
}
