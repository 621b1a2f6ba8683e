use log::debug;
use reqwest::Client as HttpClient;
use serde_json::Value as JsonValue;
use url::Url;

use crate::error::ClientError;
use crate::models::chat::{ Message, RelayReply, RelayRequest };

/// Posts a conversation to the relay's `/chat` endpoint.
#[derive(Clone)]
pub struct RelayClient {
    http: HttpClient,
    endpoint: Url,
}

impl RelayClient {
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ClientError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            http: HttpClient::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn send(&self, history: &[Message]) -> Result<RelayReply, ClientError> {
        let body = RelayRequest { messages: history.to_vec() };
        debug!("POST {} with {} messages", self.endpoint, body.messages.len());

        let resp = self.http
            .post(self.endpoint.clone())
            .json(&body)
            .send().await
            .map_err(ClientError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let json: JsonValue = resp.json().await.map_err(ClientError::Transport)?;
        Ok(RelayReply::from_json(&json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_endpoint() {
        let err = RelayClient::new("::nope").err().unwrap();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn status_error_reads_like_the_widget() {
        assert_eq!(ClientError::Status(502).to_string(), "Server error: 502");
    }
}
