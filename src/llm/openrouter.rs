use async_trait::async_trait;
use log::debug;
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE } };
use bytes::Bytes;
use url::Url;

use super::{ ensure_json, CompletionUpstream, UpstreamConfig };
use crate::error::UpstreamError;
use crate::models::chat::{ Message, UpstreamChatRequest };

const HTTP_REFERER: HeaderName = HeaderName::from_static("http-referer");
const X_TITLE: HeaderName = HeaderName::from_static("x-title");

pub struct OpenRouterClient {
    http: HttpClient,
    url: Url,
    model: String,
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, UpstreamError> {
    HeaderValue::from_str(value).map_err(|e|
        UpstreamError::Config(format!("Invalid {} header value: {}", name, e))
    )
}

impl OpenRouterClient {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        if config.api_key.trim().is_empty() {
            return Err(UpstreamError::Config("API key is required".to_string()));
        }
        let url = Url::parse(&config.base_url).map_err(|e|
            UpstreamError::Config(format!("Invalid upstream URL '{}': {}", config.base_url, e))
        )?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            header_value("Authorization", &format!("Bearer {}", config.api_key))?
        );
        headers.insert(HTTP_REFERER, header_value("HTTP-Referer", &config.referer)?);
        headers.insert(X_TITLE, header_value("X-Title", &config.title)?);

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(UpstreamError::Transport)?;

        Ok(Self {
            http,
            url,
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CompletionUpstream for OpenRouterClient {
    async fn complete(&self, messages: Vec<Message>) -> Result<Bytes, UpstreamError> {
        let req = UpstreamChatRequest {
            model: &self.model,
            messages,
        };
        debug!("Sending {} messages to {} (model {})", req.messages.len(), self.url, self.model);

        let resp = self.http
            .post(self.url.clone())
            .json(&req)
            .send().await
            .map_err(UpstreamError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let bytes = resp.bytes().await.map_err(UpstreamError::Transport)?;
        ensure_json(bytes)
    }
}
