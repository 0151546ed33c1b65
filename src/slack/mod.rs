//! All Slack-specific functionality

pub mod bot;
pub mod client;
pub mod platform;
pub mod resolver;

// Re-export main types for convenience
pub use bot::SlackBot;
pub use client::SlackClient;
pub use platform::ChatPlatform;
pub use resolver::ChannelResolver;
