/// Slack MCP bridge - exposes a Slack workspace's channels to an agent host.
///
/// Two front-ends share one façade over the Slack Web API:
/// 1. `slack-diagnose`, which checks the bot token and lists reachable channels
/// 2. `slack-mcp`, a Model Context Protocol server (stdio) advertising tools to
///    fetch messages, post a message, build a summary and look up channel
///    metadata, plus a `summarize_and_post` prompt chaining them
///
/// # Architecture
///
/// The system uses:
/// - slack-morphism for Slack API interactions
/// - rmcp for the MCP server side
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use slack_mcp::core::config::AppConfig;
/// use slack_mcp::{SlackBot, features};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     slack_mcp::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let bot = SlackBot::new(&config)?;
///
///     let messages = features::fetch_messages(&bot, "general", 5).await?;
///     let summary = features::generate_summary(&messages);
///     features::post_summary(&bot, "general", &summary).await?;
///
///     let outcome = features::summarize_and_post(&bot, "general", 5).await;
///     println!("{outcome}");
///     Ok(())
/// }
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod features;
pub mod server;
pub mod slack;

pub use errors::SlackError;
pub use server::SlackToolServer;
pub use slack::SlackBot;

/// Configure structured JSON logging on stderr.
///
/// stdout belongs to the MCP stdio transport, so nothing may be logged there.
/// The level comes from `RUST_LOG`, defaulting to `info` (`debug` with the
/// `debug-logs` feature). Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// slack_mcp::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
