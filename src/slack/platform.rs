//! The remote chat platform as seen by the façade.
//!
//! `SlackClient` is the production implementation; tests substitute an
//! in-memory double.

use async_trait::async_trait;

use crate::core::models::{AuthIdentity, ChannelDetails, ChannelEntry};
use crate::errors::SlackError;

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// `auth.test` for the configured credential.
    async fn auth_test(&self) -> Result<AuthIdentity, SlackError>;

    /// Every public and private channel visible to the credential, in
    /// listing order.
    async fn list_channels(&self) -> Result<Vec<ChannelEntry>, SlackError>;

    /// Texts of the most recent `limit` messages, newest first. Messages
    /// without text are dropped.
    async fn fetch_history(&self, channel_id: &str, limit: u32) -> Result<Vec<String>, SlackError>;

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), SlackError>;

    async fn channel_info(&self, channel_id: &str) -> Result<ChannelDetails, SlackError>;
}
