//! MCP server exposing the façade to an agent host.
//!
//! Façade failures come back as typed `SlackError`s and are rendered to text
//! here: tool calls carry them as error results, resources and the prompt
//! carry them as their text body.

pub mod catalog;

use std::sync::Arc;

use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorData, GetPromptRequestParams,
    GetPromptResult, Implementation, ListPromptsResult, ListResourceTemplatesResult,
    ListResourcesResult, ListToolsResult, PaginatedRequestParams, PromptMessage,
    PromptMessageRole, ReadResourceRequestParams, ReadResourceResult, ResourceContents,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::SlackError;
use crate::features;
use crate::slack::SlackBot;
use catalog::{
    ChannelInfoArgs, FetchMessagesArgs, GenerateSummaryArgs, PostSummaryArgs,
    SummarizeAndPostArgs,
};

#[derive(Clone)]
pub struct SlackToolServer {
    bot: Arc<SlackBot>,
    name: String,
    default_channel: String,
    default_count: u32,
}

impl SlackToolServer {
    #[must_use]
    pub fn new(bot: Arc<SlackBot>, config: &AppConfig) -> Self {
        Self {
            bot,
            name: config.server_name.clone(),
            default_channel: config.default_channel.clone(),
            default_count: config.default_message_count,
        }
    }

    #[must_use]
    pub fn bot(&self) -> &SlackBot {
        &self.bot
    }

    /// Run one tool by name.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for an unknown tool or malformed arguments.
    /// Slack failures are not protocol errors; they come back as error
    /// results.
    pub async fn run_tool(
        &self,
        name: &str,
        arguments: Option<rmcp::model::JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        info!(tool = name, "Tool call");
        match name {
            catalog::TOOL_FETCH_MESSAGES => {
                let args: FetchMessagesArgs = catalog::parse_args(arguments)?;
                Ok(
                    match features::fetch_messages(&self.bot, &args.channel, args.count).await {
                        Ok(messages) => {
                            CallToolResult::success(messages.into_iter().map(Content::text).collect())
                        }
                        Err(e) => error_result(e.notice()),
                    },
                )
            }
            catalog::TOOL_POST_SUMMARY => {
                let args: PostSummaryArgs = catalog::parse_args(arguments)?;
                Ok(
                    match features::post_summary(&self.bot, &args.channel, &args.summary).await {
                        Ok(()) => text_result(features::deliver::POST_SUCCESS),
                        Err(e) => error_result(e.notice()),
                    },
                )
            }
            catalog::TOOL_GENERATE_SUMMARY => {
                let args: GenerateSummaryArgs = catalog::parse_args(arguments)?;
                Ok(text_result(features::generate_summary(&args.messages)))
            }
            catalog::TOOL_CHANNEL_INFO => {
                let args: ChannelInfoArgs = catalog::parse_args(arguments)?;
                Ok(match self.channel_info_text(&args.channel).await {
                    Ok(text) => text_result(text),
                    Err(text) => error_result(text),
                })
            }
            other => Err(ErrorData::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }

    /// Text body of a resource.
    ///
    /// # Errors
    ///
    /// Returns `resource_not_found` for URIs the server does not serve.
    pub async fn resource_text(&self, uri: &str) -> Result<String, ErrorData> {
        if uri == catalog::CHANNELS_URI {
            return Ok(match features::list_channels(&self.bot).await {
                Ok(channels) => features::render_channel_list(&channels),
                Err(e) => format!("Error fetching channels: {e}"),
            });
        }

        let channel = catalog::channel_from_info_uri(uri).ok_or_else(|| {
            ErrorData::resource_not_found(format!("Unknown resource: {uri}"), None)
        })?;
        Ok(self
            .channel_info_text(&channel)
            .await
            .unwrap_or_else(|text| text))
    }

    /// Run the `summarize_and_post` prompt. Missing arguments fall back to
    /// the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for an unknown prompt or malformed arguments.
    pub async fn run_prompt(
        &self,
        name: &str,
        arguments: Option<rmcp::model::JsonObject>,
    ) -> Result<String, ErrorData> {
        if name != catalog::PROMPT_SUMMARIZE_AND_POST {
            return Err(ErrorData::invalid_params(
                format!("Unknown prompt: {name}"),
                None,
            ));
        }

        let args: SummarizeAndPostArgs = catalog::parse_args(arguments)?;
        let channel = args.channel.unwrap_or_else(|| self.default_channel.clone());
        let count = args.count.unwrap_or(self.default_count);

        let outcome = features::summarize_and_post(&self.bot, &channel, count).await;
        Ok(outcome.to_string())
    }

    async fn channel_info_text(&self, channel: &str) -> Result<String, String> {
        match features::channel_info(&self.bot, channel).await {
            Ok(details) => Ok(details.render()),
            Err(e @ SlackError::ChannelNotFound(_)) => Err(e.to_string()),
            Err(e) => Err(format!("Error getting channel info: {e}")),
        }
    }
}

fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn error_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

impl ServerHandler for SlackToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.name.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Read, summarize and post Slack channel messages. Channels are named without \
                 the leading '#', or by ID."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(catalog::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.run_tool(&request.name, request.arguments).await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(catalog::resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(
            catalog::resource_templates()?,
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let text = self.resource_text(&request.uri).await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, request.uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(catalog::prompts()?))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        let text = self.run_prompt(&request.name, request.arguments).await?;
        Ok(GetPromptResult {
            description: Some("Summarize recent chat messages and post summary back to Slack.".to_string()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
