use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::SlackError;

pub const DEFAULT_SERVER_NAME: &str = "slack-mcp-server";
pub const DEFAULT_CHANNEL: &str = "mcp";
pub const DEFAULT_MESSAGE_COUNT: u32 = 10;
pub const DEFAULT_CHANNEL_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub server_name: String,
    pub default_channel: String,
    pub default_message_count: u32,
    /// Zero disables the channel cache.
    pub channel_cache_ttl: Duration,
}

impl AppConfig {
    /// Load configuration from the process environment, reading a `.env`
    /// file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` when `SLACK_BOT_TOKEN` is missing or a
    /// numeric setting does not parse.
    pub fn from_env() -> Result<Self, SlackError> {
        // A missing .env file is normal in deployed environments.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SlackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slack_bot_token = lookup("SLACK_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| SlackError::ConfigError("SLACK_BOT_TOKEN is not set".to_string()))?;

        let ttl_secs = parse_or(
            &lookup,
            "SLACK_CHANNEL_CACHE_TTL_SECS",
            DEFAULT_CHANNEL_CACHE_TTL_SECS,
        )?;

        Ok(Self {
            slack_bot_token,
            server_name: lookup("MCP_SERVER_NAME").unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string()),
            default_channel: lookup("DEFAULT_CHANNEL").unwrap_or_else(|| DEFAULT_CHANNEL.to_string()),
            default_message_count: parse_or(&lookup, "DEFAULT_MESSAGE_COUNT", DEFAULT_MESSAGE_COUNT)?,
            channel_cache_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, SlackError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| SlackError::ConfigError(format!("{key}: {e}"))),
        None => Ok(default),
    }
}
