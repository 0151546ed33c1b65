use std::sync::Arc;

use tracing::{info, warn};

use super::client::SlackClient;
use super::platform::ChatPlatform;
use super::resolver::ChannelResolver;
use crate::core::config::AppConfig;
use crate::core::models::ChannelEntry;
use crate::errors::SlackError;

/// Common Slack functionality: the shared platform handle plus channel
/// resolution. Built once per process and borrowed by every operation.
pub struct SlackBot {
    platform: Arc<dyn ChatPlatform>,
    resolver: ChannelResolver,
}

impl SlackBot {
    /// Construct a `SlackBot` backed by the real Slack Web API.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack HTTP connector cannot be created.
    pub fn new(config: &AppConfig) -> Result<Self, SlackError> {
        let client = SlackClient::new(config.slack_bot_token.clone())?;
        Ok(Self::with_platform(Arc::new(client), config.channel_cache_ttl))
    }

    #[must_use]
    pub fn with_platform(platform: Arc<dyn ChatPlatform>, cache_ttl: std::time::Duration) -> Self {
        Self {
            platform,
            resolver: ChannelResolver::new(cache_ttl),
        }
    }

    #[must_use]
    pub fn platform(&self) -> &dyn ChatPlatform {
        self.platform.as_ref()
    }

    #[must_use]
    pub fn resolver(&self) -> &ChannelResolver {
        &self.resolver
    }

    /// Resolve a channel name or id to its canonical id.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::ChannelNotFound` when nothing in the listing
    /// matches, or the listing error itself.
    pub async fn resolve_channel(&self, token: &str) -> Result<String, SlackError> {
        match self.resolver.resolve(self.platform(), token).await {
            Ok(Some(id)) => Ok(id),
            Ok(None) => {
                warn!(channel = token, "Channel not found");
                Err(SlackError::ChannelNotFound(token.to_string()))
            }
            Err(e) => {
                warn!(channel = token, error = %e, "Channel lookup failed");
                Err(e)
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if listing channels fails.
    pub async fn list_channels(&self) -> Result<Vec<ChannelEntry>, SlackError> {
        let channels = self.resolver.channels(self.platform()).await?;
        info!(count = channels.len(), "Fetched channel listing");
        Ok(channels)
    }
}
