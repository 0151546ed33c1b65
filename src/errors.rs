use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Channel '{0}' not found")]
    ChannelNotFound(String),

    #[error("Slack API Error: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("{0}")]
    GeneralError(String),
}

impl SlackError {
    /// The platform-reported error code, if this failure came from Slack itself.
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            SlackError::ApiError(code) => Some(code),
            _ => None,
        }
    }

    /// Plain-text form reported to tool callers: not-found and platform
    /// errors verbatim, anything else prefixed with `Error: `.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            SlackError::ChannelNotFound(_) | SlackError::ApiError(_) => self.to_string(),
            other => format!("Error: {other}"),
        }
    }
}

impl From<SlackClientError> for SlackError {
    fn from(error: SlackClientError) -> Self {
        match error {
            SlackClientError::ApiError(api) => SlackError::ApiError(api.code),
            http @ (SlackClientError::HttpError(_) | SlackClientError::HttpProtocolError(_)) => {
                SlackError::HttpError(http.to_string())
            }
            other => SlackError::GeneralError(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for SlackError {
    fn from(error: anyhow::Error) -> Self {
        SlackError::GeneralError(error.to_string())
    }
}
