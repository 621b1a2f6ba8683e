pub mod openrouter;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::IgnoredAny;
use crate::error::UpstreamError;
use crate::models::chat::Message;

pub const DEFAULT_UPSTREAM_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "minimax/minimax-m2";
pub const DEFAULT_REFERER: &str = "https://amiralomari.xyz";
pub const DEFAULT_TITLE: &str = "Amir Assistant";

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub referer: String,
    pub title: String,
}

impl UpstreamConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// One chat-completion call against the upstream API.
///
/// Implementations hand back the upstream body byte for byte so the relay
/// can pass it through verbatim. The body is known to be JSON.
#[async_trait]
pub trait CompletionUpstream: Send + Sync {
    async fn complete(&self, messages: Vec<Message>) -> Result<Bytes, UpstreamError>;
}

/// Checks that `body` is one well-formed JSON value without keeping the parse.
pub fn ensure_json(body: Bytes) -> Result<Bytes, UpstreamError> {
    serde_json::from_slice::<IgnoredAny>(&body)
        .map_err(|e| UpstreamError::Malformed(e.to_string()))?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_json_keeps_bytes_untouched() {
        let raw = Bytes::from_static(b"{ \"n\": 1e5,\n  \"ok\" : true }");
        assert_eq!(ensure_json(raw.clone()).unwrap(), raw);
    }

    #[test]
    fn ensure_json_rejects_html_and_trailing_garbage() {
        assert!(matches!(
            ensure_json(Bytes::from_static(b"<html>gateway</html>")),
            Err(UpstreamError::Malformed(_))
        ));
        assert!(matches!(
            ensure_json(Bytes::from_static(b"{} extra")),
            Err(UpstreamError::Malformed(_))
        ));
    }
}
