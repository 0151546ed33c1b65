use tracing::{error, info};

use crate::errors::SlackError;
use crate::slack::SlackBot;

/// Text reported after a successful post.
pub const POST_SUCCESS: &str = "Message posted successfully";

/// Post `summary` as a new message in `channel`.
///
/// Every call is a real write; posting twice posts twice.
///
/// # Errors
///
/// `SlackError::ChannelNotFound` when the channel does not resolve, in which
/// case nothing is posted; the platform error otherwise.
pub async fn post_summary(bot: &SlackBot, channel: &str, summary: &str) -> Result<(), SlackError> {
    let channel_id = bot.resolve_channel(channel).await?;

    match bot.platform().post_message(&channel_id, summary).await {
        Ok(()) => {
            info!(channel, %channel_id, "Posted message");
            Ok(())
        }
        Err(e) => {
            error!(channel, %channel_id, error = %e, "Failed to post message");
            Err(e)
        }
    }
}
