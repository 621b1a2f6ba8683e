use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("upstream returned a malformed body: {0}")]
    Malformed(String),

    #[error("invalid upstream configuration: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Invalid relay URL '{url}': {reason}")]
    InvalidUrl {
        url: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to read system prompt file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("System prompt file '{0}' is empty")]
    Empty(String),
}
