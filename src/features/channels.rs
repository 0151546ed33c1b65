use tracing::{error, info};

use crate::core::models::{ChannelDetails, ChannelEntry};
use crate::errors::SlackError;
use crate::slack::SlackBot;

/// Every public and private channel visible to the bot, in listing order.
///
/// # Errors
///
/// Returns an error if `conversations.list` fails.
pub async fn list_channels(bot: &SlackBot) -> Result<Vec<ChannelEntry>, SlackError> {
    bot.list_channels().await
}

/// Render the listing as `#name (ID: id)` lines.
#[must_use]
pub fn render_channel_list(channels: &[ChannelEntry]) -> String {
    channels
        .iter()
        .map(ChannelEntry::listing_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Look up a channel's name, member count and topic.
///
/// # Errors
///
/// `SlackError::ChannelNotFound` when the channel does not resolve; the
/// platform error otherwise.
pub async fn channel_info(bot: &SlackBot, channel: &str) -> Result<ChannelDetails, SlackError> {
    let channel_id = bot.resolve_channel(channel).await?;

    match bot.platform().channel_info(&channel_id).await {
        Ok(details) => {
            info!(channel, %channel_id, "Fetched channel info");
            Ok(details)
        }
        Err(e) => {
            error!(channel, %channel_id, error = %e, "Failed to fetch channel info");
            Err(e)
        }
    }
}
