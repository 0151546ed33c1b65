//! What the server advertises: tools, resources and the prompt, plus the
//! argument types their calls deserialize into.

use std::sync::Arc;

use rmcp::model::{
    AnnotateAble, ErrorData, JsonObject, Prompt, PromptArgument, RawResource, Resource,
    ResourceTemplate, Tool,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use crate::core::config::DEFAULT_MESSAGE_COUNT;

pub const TOOL_FETCH_MESSAGES: &str = "fetch_messages";
pub const TOOL_POST_SUMMARY: &str = "post_summary";
pub const TOOL_GENERATE_SUMMARY: &str = "generate_summary";
pub const TOOL_CHANNEL_INFO: &str = "get_channel_info";

pub const PROMPT_SUMMARIZE_AND_POST: &str = "summarize_and_post";

pub const CHANNELS_URI: &str = "slack://channels";
pub const CHANNEL_INFO_URI_TEMPLATE: &str = "slack://channel/{channel}/info";

const CHANNEL_INFO_URI_PREFIX: &str = "slack://channel/";
const CHANNEL_INFO_URI_SUFFIX: &str = "/info";

fn default_count() -> u32 {
    DEFAULT_MESSAGE_COUNT
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FetchMessagesArgs {
    /// Channel name (without `#`) or channel ID.
    pub channel: String,
    /// Number of recent messages to fetch.
    #[serde(default = "default_count", deserialize_with = "lenient_u32")]
    #[schemars(with = "u32")]
    pub count: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PostSummaryArgs {
    /// Channel name (without `#`) or channel ID.
    pub channel: String,
    /// Text to post.
    pub summary: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateSummaryArgs {
    /// Message texts, in the order they should appear.
    pub messages: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChannelInfoArgs {
    /// Channel name (without `#`) or channel ID.
    pub channel: String,
}

/// Prompt arguments arrive as strings; `count` is parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeAndPostArgs {
    pub channel: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub count: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    Text(String),
}

fn to_u32<E: serde::de::Error>(value: NumberOrString) -> Result<u32, E> {
    match value {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("expected a non-negative integer, got {s:?}"))),
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    to_u32(NumberOrString::deserialize(deserializer)?)
}

fn lenient_opt_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(to_u32)
        .transpose()
}

/// Deserialize call arguments, treating absent arguments as `{}`.
///
/// # Errors
///
/// Returns `invalid_params` when the arguments do not fit `T`.
pub fn parse_args<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, ErrorData> {
    serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| ErrorData::invalid_params(format!("Invalid arguments: {e}"), None))
}

fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

fn from_descriptor<T: DeserializeOwned>(value: Value) -> Result<T, ErrorData> {
    serde_json::from_value(value)
        .map_err(|e| ErrorData::internal_error(format!("Invalid descriptor: {e}"), None))
}

#[must_use]
pub fn tools() -> Vec<Tool> {
    vec![
        Tool::new(
            TOOL_FETCH_MESSAGES,
            "Fetch recent Slack messages from a channel.",
            input_schema::<FetchMessagesArgs>(),
        ),
        Tool::new(
            TOOL_POST_SUMMARY,
            "Post a summary back to the Slack channel.",
            input_schema::<PostSummaryArgs>(),
        ),
        Tool::new(
            TOOL_GENERATE_SUMMARY,
            "Generate a summary from a list of messages.",
            input_schema::<GenerateSummaryArgs>(),
        ),
        Tool::new(
            TOOL_CHANNEL_INFO,
            "Get the name, member count and topic of a Slack channel.",
            input_schema::<ChannelInfoArgs>(),
        ),
    ]
}

#[must_use]
pub fn resources() -> Vec<Resource> {
    let mut channels = RawResource::new(CHANNELS_URI, "channels");
    channels.description = Some("List all available Slack channels.".to_string());
    channels.mime_type = Some("text/plain".to_string());
    vec![channels.no_annotation()]
}

/// # Errors
///
/// Returns `internal_error` if a descriptor fails to build.
pub fn resource_templates() -> Result<Vec<ResourceTemplate>, ErrorData> {
    Ok(vec![from_descriptor(json!({
        "uriTemplate": CHANNEL_INFO_URI_TEMPLATE,
        "name": "channel_info",
        "description": "Get information about a specific Slack channel.",
        "mimeType": "text/plain",
    }))?])
}

/// # Errors
///
/// Returns `internal_error` if a descriptor fails to build.
pub fn prompts() -> Result<Vec<Prompt>, ErrorData> {
    let arguments: Vec<PromptArgument> = from_descriptor(json!([
        {
            "name": "channel",
            "description": "Channel name or ID to summarize (default: the configured channel).",
            "required": false,
        },
        {
            "name": "count",
            "description": "How many recent messages to include (default: the configured count).",
            "required": false,
        },
    ]))?;

    Ok(vec![Prompt::new(
        PROMPT_SUMMARIZE_AND_POST,
        Some("Summarize recent chat messages and post summary back to Slack."),
        Some(arguments),
    )])
}

/// Extract the channel token from a `slack://channel/{channel}/info` URI.
/// Percent-encoded tokens are decoded.
#[must_use]
pub fn channel_from_info_uri(uri: &str) -> Option<String> {
    let raw = uri
        .strip_prefix(CHANNEL_INFO_URI_PREFIX)?
        .strip_suffix(CHANNEL_INFO_URI_SUFFIX)?;
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    urlencoding::decode(raw).ok().map(|token| token.into_owned())
}
