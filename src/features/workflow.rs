//! The fetch → summarize → post chain behind the `summarize_and_post` prompt.

use std::fmt;

use tracing::{info, warn};

use super::{collect, deliver, summarize};
use crate::errors::SlackError;
use crate::slack::SlackBot;

/// How a workflow run ended.
#[derive(Debug)]
pub enum WorkflowOutcome {
    /// Fetching failed or returned nothing; no summary was posted.
    FetchFailed { reason: String },
    /// The summary was generated and a post was attempted. `post` carries
    /// the post's own result; a failed post still counts as completed.
    Completed {
        channel: String,
        summary: String,
        post: Result<(), SlackError>,
    },
}

impl WorkflowOutcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, WorkflowOutcome::Completed { .. })
    }
}

impl fmt::Display for WorkflowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowOutcome::FetchFailed { reason } => {
                write!(f, "Failed to fetch messages: {reason}")
            }
            WorkflowOutcome::Completed { channel, post, .. } => {
                let post_result = match post {
                    Ok(()) => deliver::POST_SUCCESS.to_string(),
                    Err(e) => e.notice(),
                };
                write!(
                    f,
                    "Summary generated and posted to #{channel}. Post result: {post_result}"
                )
            }
        }
    }
}

/// Fetch the last `count` messages from `channel`, summarize them and post
/// the summary back to the same channel.
///
/// Any fetch failure, or an empty fetch, stops the run before anything is
/// posted.
pub async fn summarize_and_post(bot: &SlackBot, channel: &str, count: u32) -> WorkflowOutcome {
    let messages = match collect::fetch_messages(bot, channel, count).await {
        Ok(messages) if messages.is_empty() => {
            warn!(channel, "No messages to summarize; skipping post");
            return WorkflowOutcome::FetchFailed {
                reason: "No messages found".to_string(),
            };
        }
        Ok(messages) => messages,
        Err(e) => {
            warn!(channel, error = %e, "Fetch failed; skipping post");
            return WorkflowOutcome::FetchFailed { reason: e.notice() };
        }
    };

    let summary = summarize::generate_summary(&messages);
    let post = deliver::post_summary(bot, channel, &summary).await;
    info!(channel, posted = post.is_ok(), "Workflow completed");

    WorkflowOutcome::Completed {
        channel: channel.to_string(),
        summary,
        post,
    }
}
