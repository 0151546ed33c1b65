use tracing::{error, info};

use crate::errors::SlackError;
use crate::slack::SlackBot;

/// Fetch the texts of the last `count` messages in a channel, newest first.
///
/// `channel` may be a channel name or id. Messages without a text field are
/// skipped, so fewer than `count` texts can come back. A `count` of zero
/// still resolves the channel but never reads history.
///
/// # Errors
///
/// `SlackError::ChannelNotFound` when the channel does not resolve; the
/// platform error otherwise. Nothing is retried.
pub async fn fetch_messages(
    bot: &SlackBot,
    channel: &str,
    count: u32,
) -> Result<Vec<String>, SlackError> {
    let channel_id = bot.resolve_channel(channel).await?;

    if count == 0 {
        info!(channel, %channel_id, "Zero messages requested");
        return Ok(Vec::new());
    }

    match bot.platform().fetch_history(&channel_id, count).await {
        Ok(messages) => {
            info!(channel, %channel_id, count, fetched = messages.len(), "Fetched messages");
            Ok(messages)
        }
        Err(e) => {
            error!(channel, %channel_id, error = %e, "Failed to fetch messages");
            Err(e)
        }
    }
}
