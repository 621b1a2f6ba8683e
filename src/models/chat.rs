use serde::{ Deserialize, Serialize };
use serde_json::Value as JsonValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayRequest {
    pub messages: Vec<Message>,
}

/// Failure body returned by the relay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayErrorBody {
    pub error: String,
}

impl RelayErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Serialize)]
pub struct UpstreamChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
}

/// What a client makes of a relay reply body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayReply {
    Content(String),
    Error(String),
    Empty,
}

impl RelayReply {
    /// The upstream shape is not ours, so this reads it loosely:
    /// `choices[0].message.content` wins, then a top-level `error` string.
    pub fn from_json(body: &JsonValue) -> Self {
        if let Some(content) = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
        {
            return RelayReply::Content(content.to_string());
        }
        match body.get("error") {
            Some(JsonValue::String(e)) => RelayReply::Error(e.clone()),
            Some(other) if !other.is_null() => RelayReply::Error(other.to_string()),
            _ => RelayReply::Empty,
        }
    }
}
