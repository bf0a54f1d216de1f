//! OpenRouter LLM Gateway implementation

use super::protocol::{ChatRequest, describe_error_body};
use crate::config::{ApiCredential, FileApiConfig};
use async_trait::async_trait;
use companion_application::{GatewayError, LlmGateway};
use companion_domain::{ApiReply, Message, Model};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("prompt-companion/", env!("CARGO_PKG_VERSION"));

/// LLM Gateway over an OpenAI-compatible `/chat/completions` endpoint
///
/// Holds one pooled `reqwest::Client`; both tracks of a turn share it.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    endpoint: String,
    credential: ApiCredential,
}

impl OpenRouterGateway {
    pub fn new(api: &FileApiConfig, credential: ApiCredential) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let endpoint = api.completions_url();
        info!(endpoint = %endpoint, "OpenRouterGateway initialized");

        Ok(Self {
            client,
            endpoint,
            credential,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn invoke(
        &self,
        model: &Model,
        messages: &[Message],
    ) -> Result<ApiReply, GatewayError> {
        let request = ChatRequest::new(model, messages);
        debug!(model = %model, messages = messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                message: describe_error_body(&body),
            });
        }

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");
        serde_json::from_str(&body).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}
