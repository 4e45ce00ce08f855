//! Groq completion provider.
//!
//! This module speaks the OpenAI-compatible chat-completions format served
//! by Groq. API reference: https://console.groq.com/docs/api-reference

use crate::client::{CompletionGateway, CompletionRequest, CompletionResponse, Usage};
use crate::types::GatewayConfig;
use careku_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Chat message in the OpenAI-compatible wire format.
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Groq API request format.
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Groq API response format.
#[derive(Debug, Deserialize)]
struct GroqResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<GroqChoice>,
    #[serde(default)]
    usage: Option<GroqUsage>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqMessage,
}

#[derive(Debug, Deserialize)]
struct GroqMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct GroqUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// Groq completion client.
pub struct GroqClient {
    /// Base URL for the OpenAI-compatible API
    base_url: String,

    /// Bearer credential
    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl GroqClient {
    /// Create a new Groq client from gateway configuration.
    ///
    /// Fails with a configuration error when no API key is set, before any
    /// network attempt.
    pub fn new(config: &GatewayConfig) -> AppResult<Self> {
        let api_key = config.require_api_key()?.to_string();

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        })
    }

    /// Convert a CompletionRequest to the Groq wire format.
    fn to_groq_request(&self, request: &CompletionRequest) -> GroqRequest {
        let mut messages = Vec::with_capacity(2);

        if let Some(ref system) = request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system.clone(),
            });
        }

        messages.push(ChatMessage {
            role: "user",
            content: request.prompt.clone(),
        });

        GroqRequest {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
        }
    }

    /// Convert a Groq response to a CompletionResponse.
    ///
    /// A response with no choices yields empty content; the answer packager
    /// substitutes the fallback text.
    fn convert_response(&self, response: GroqResponse) -> CompletionResponse {
        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        let usage = response
            .usage
            .map(|u| Usage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        CompletionResponse {
            content,
            model: response.model,
            usage,
        }
    }
}

#[async_trait::async_trait]
impl CompletionGateway for GroqClient {
    fn provider_name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse> {
        tracing::info!("Sending completion request to Groq");
        tracing::debug!("Model: {}, prompt length: {}", request.model, request.prompt.len());

        let groq_request = self.to_groq_request(request);
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&groq_request)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::gateway(status.as_u16(), &body));
        }

        let groq_response: GroqResponse = response
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to parse Groq response: {}", e)))?;

        tracing::info!("Received completion from Groq");

        Ok(self.convert_response(groq_response))
    }
}
