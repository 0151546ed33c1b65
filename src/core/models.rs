use serde::{Deserialize, Serialize};

/// One entry of the channel listing. Only `id` and `name` are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    pub id: String,
    pub name: String,
}

impl ChannelEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Line used by the `slack://channels` resource.
    #[must_use]
    pub fn listing_line(&self) -> String {
        format!("#{} (ID: {})", self.name, self.id)
    }
}

/// Metadata returned by `conversations.info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDetails {
    pub id: String,
    pub name: String,
    pub num_members: Option<u64>,
    pub topic: Option<String>,
}

impl ChannelDetails {
    #[must_use]
    pub fn render(&self) -> String {
        let members = self
            .num_members
            .map_or_else(|| "Unknown".to_string(), |n| n.to_string());
        let topic = self.topic.as_deref().unwrap_or("No topic");
        format!("Channel: #{}\nMembers: {members}\nTopic: {topic}", self.name)
    }
}

/// Result of `auth.test`, printed by the diagnostic binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub user_id: String,
    pub team_id: String,
    /// The full `auth.test` response body.
    pub raw: serde_json::Value,
}
