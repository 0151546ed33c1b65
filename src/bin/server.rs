use std::sync::Arc;

use anyhow::Context;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use slack_mcp::core::config::AppConfig;
use slack_mcp::{SlackBot, SlackToolServer};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    slack_mcp::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {e}");
        e
    })?;
    let bot = Arc::new(SlackBot::new(&config).context("Failed to initialize Slack client")?);
    let server = SlackToolServer::new(bot, &config);

    info!(server = %config.server_name, "Starting MCP server on stdio");
    let service = server
        .serve(stdio())
        .await
        .context("Failed to start MCP server")?;
    let reason = service.waiting().await.context("MCP server task failed")?;

    info!(?reason, "MCP server shut down");
    Ok(())
}
