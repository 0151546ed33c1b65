#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use slack_mcp::SlackBot;
use slack_mcp::SlackError;
use slack_mcp::core::models::{AuthIdentity, ChannelDetails, ChannelEntry};
use slack_mcp::slack::ChatPlatform;

/// In-memory stand-in for the Slack Web API that records every call.
#[derive(Default)]
pub struct MockPlatform {
    pub channels: Mutex<Vec<ChannelEntry>>,
    pub history: Mutex<HashMap<String, Vec<String>>>,
    pub details: Mutex<HashMap<String, ChannelDetails>>,
    /// Slack error code returned by `fetch_history` for any channel.
    pub history_error: Mutex<Option<String>>,
    /// Slack error code returned by `post_message`.
    pub post_error: Mutex<Option<String>>,
    /// Slack error code returned by `list_channels`.
    pub list_error: Mutex<Option<String>>,
    pub list_calls: AtomicUsize,
    pub history_calls: Mutex<Vec<(String, u32)>>,
    pub posts: Mutex<Vec<(String, String)>>,
}

impl MockPlatform {
    pub fn with_channels(channels: &[(&str, &str)]) -> Self {
        let mock = Self::default();
        *mock.channels.lock().unwrap() = channels
            .iter()
            .map(|(id, name)| ChannelEntry::new(*id, *name))
            .collect();
        mock
    }

    pub fn set_history(&self, channel_id: &str, texts: &[&str]) {
        self.history.lock().unwrap().insert(
            channel_id.to_string(),
            texts.iter().map(|t| (*t).to_string()).collect(),
        );
    }

    pub fn set_details(&self, details: ChannelDetails) {
        self.details
            .lock()
            .unwrap()
            .insert(details.id.clone(), details);
    }

    pub fn fail_history(&self, code: &str) {
        *self.history_error.lock().unwrap() = Some(code.to_string());
    }

    pub fn fail_post(&self, code: &str) {
        *self.post_error.lock().unwrap() = Some(code.to_string());
    }

    pub fn fail_list(&self, code: &str) {
        *self.list_error.lock().unwrap() = Some(code.to_string());
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn history_calls(&self) -> Vec<(String, u32)> {
        self.history_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn auth_test(&self) -> Result<AuthIdentity, SlackError> {
        Ok(AuthIdentity {
            user_id: "U0BOT".to_string(),
            team_id: "T0TEAM".to_string(),
            raw: serde_json::json!({"ok": true, "user_id": "U0BOT", "team_id": "T0TEAM"}),
        })
    }

    async fn list_channels(&self) -> Result<Vec<ChannelEntry>, SlackError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(code) = self.list_error.lock().unwrap().clone() {
            return Err(SlackError::ApiError(code));
        }
        Ok(self.channels.lock().unwrap().clone())
    }

    async fn fetch_history(&self, channel_id: &str, limit: u32) -> Result<Vec<String>, SlackError> {
        self.history_calls
            .lock()
            .unwrap()
            .push((channel_id.to_string(), limit));
        if let Some(code) = self.history_error.lock().unwrap().clone() {
            return Err(SlackError::ApiError(code));
        }
        let texts = self
            .history
            .lock()
            .unwrap()
            .get(channel_id)
            .cloned()
            .unwrap_or_default();
        Ok(texts
            .into_iter()
            .take(usize::try_from(limit).unwrap())
            .collect())
    }

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), SlackError> {
        if let Some(code) = self.post_error.lock().unwrap().clone() {
            return Err(SlackError::ApiError(code));
        }
        self.posts
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn channel_info(&self, channel_id: &str) -> Result<ChannelDetails, SlackError> {
        self.details
            .lock()
            .unwrap()
            .get(channel_id)
            .cloned()
            .ok_or_else(|| SlackError::ApiError("channel_not_found".to_string()))
    }
}

/// A bot over `mock` with caching disabled, so every resolution lists channels.
pub fn uncached_bot(mock: &Arc<MockPlatform>) -> SlackBot {
    SlackBot::with_platform(mock.clone(), Duration::ZERO)
}

pub fn cached_bot(mock: &Arc<MockPlatform>) -> SlackBot {
    SlackBot::with_platform(mock.clone(), Duration::from_secs(60))
}

/// The usual fixture: `#general` (C01) with three messages, `#random` (C02).
pub fn workspace() -> Arc<MockPlatform> {
    let mock = MockPlatform::with_channels(&[("C01", "general"), ("C02", "random")]);
    mock.set_history("C01", &["deploy finished", "tests are green", "lunch?"]);
    Arc::new(mock)
}
