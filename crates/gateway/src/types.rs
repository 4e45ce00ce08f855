//! Gateway configuration types.

use careku_core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use careku_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Configuration for the completion gateway.
///
/// Constructed once at startup and injected into both the gateway client and
/// the assistant; there is no hidden process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Bearer credential for the hosted service. `None` means the gateway is
    /// not configured; any answer attempt fails before a network call.
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    pub base_url: String,

    /// Model identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GatewayConfig {
    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Resolve the API key, failing with a configuration error when it is
    /// absent or blank.
    pub fn require_api_key(&self) -> AppResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(AppError::Config(
                "Gateway API key is not configured. Set GROQ_API_KEY or add apiKeyEnv to careku.yaml".to_string(),
            )),
        }
    }
}
