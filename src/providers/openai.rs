use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client; // blocking keeps the whole flow synchronous
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use super::base::Provider;
use super::configs::OpenAiProviderConfig;
use crate::models::chat::{ChatRequest, ChatResponse};

/// Client for an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiProviderConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiProviderConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        )
    }

    fn post(&self, request: &ChatRequest) -> Result<Value> {
        let url = self.url();
        debug!(url = %url, model = request.model(), "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(request)
            .send()?;

        match response.status() {
            StatusCode::OK => Ok(response.json()?),
            status if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() >= 500 => {
                warn!(%status, "chat completion endpoint unavailable");
                Err(anyhow!("Server error: {}", status))
            }
            status => {
                let body = response.text().unwrap_or_default();
                warn!(%status, "chat completion request rejected");
                Err(anyhow!("Request failed: {}\nBody: {}", status, body))
            }
        }
    }
}

impl Provider for OpenAiProvider {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self.post(request)?;

        if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
            return Err(anyhow!("API error: {}", error));
        }

        let response: ChatResponse =
            serde_json::from_value(response).context("Response is not a chat completion")?;
        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = ?usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                total_tokens = ?usage.total(),
                "chat completion usage"
            );
        }
        Ok(response)
    }
}
