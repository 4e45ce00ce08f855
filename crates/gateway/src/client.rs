//! Completion gateway abstraction and request/response types.
//!
//! This module defines the contract the retrieval core depends on: one
//! awaited completion call per question, no retries, no streaming.

use careku_core::AppResult;
use serde::{Deserialize, Serialize};

/// Completion request sent to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The user-role prompt (instructions, context block, question)
    pub prompt: String,

    /// Model identifier (e.g., "llama-3.1-8b-instant")
    pub model: String,

    /// System-role instruction (assistant persona)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Create a new completion request with required fields.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            system: None,
            temperature: None,
        }
    }

    /// Set the system instruction.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the temperature for sampling.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Completion response returned by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated text. May be empty when the provider returned no
    /// choices; the caller substitutes a fallback answer in that case.
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Token usage statistics
    #[serde(default)]
    pub usage: Usage,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u32,

    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u32,

    /// Total tokens used
    #[serde(default)]
    pub total_tokens: u32,
}

impl Usage {
    /// Create usage stats from prompt and completion token counts.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Trait for completion gateways.
///
/// This trait abstracts the hosted chat-completion service behind the one
/// asynchronous operation in the answer round trip. Implementations must not
/// retry; failures propagate unchanged to the caller.
#[async_trait::async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Get the provider name (e.g., "groq").
    fn provider_name(&self) -> &str;

    /// Perform a single completion call.
    async fn complete(&self, request: &CompletionRequest) -> AppResult<CompletionResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = CompletionRequest::new("Pertanyaan: halo", "llama-3.1-8b-instant")
            .with_system("Kamu adalah asisten.")
            .with_temperature(0.4);

        assert_eq!(request.prompt, "Pertanyaan: halo");
        assert_eq!(request.model, "llama-3.1-8b-instant");
        assert_eq!(request.system.as_deref(), Some("Kamu adalah asisten."));
        assert_eq!(request.temperature, Some(0.4));
    }

    #[test]
    fn test_usage_totals() {
        let usage = Usage::new(120, 45);
        assert_eq!(usage.total_tokens, 165);
    }

    #[test]
    fn test_response_usage_defaults_when_absent() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"content":"jawab","model":"m"}"#).unwrap();
        assert_eq!(response.usage.total_tokens, 0);
    }
}
