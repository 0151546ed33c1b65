//! Checks the bot token and prints what the bot can see.

use anyhow::Context;
use slack_mcp::SlackBot;
use slack_mcp::core::config::AppConfig;
use slack_mcp::features;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    slack_mcp::setup_logging();

    let config = AppConfig::from_env()?;
    let bot = SlackBot::new(&config).context("Failed to initialize Slack client")?;

    let identity = bot
        .platform()
        .auth_test()
        .await
        .context("auth.test failed")?;
    println!(
        "Authenticated as {} in team {}",
        identity.user_id, identity.team_id
    );
    println!("{}", serde_json::to_string_pretty(&identity.raw)?);

    let channels = features::list_channels(&bot)
        .await
        .context("conversations.list failed")?;
    println!("{}", serde_json::to_string_pretty(&channels)?);
    println!("{} channels visible", channels.len());
    println!("{}", features::render_channel_list(&channels));

    Ok(())
}
