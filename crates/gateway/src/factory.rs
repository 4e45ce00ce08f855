//! Completion gateway factory.
//!
//! Creates the configured gateway client as a shared trait object. Today the
//! only hosted provider is Groq; the factory keeps the construction seam in
//! one place so callers depend on `CompletionGateway` alone.

use crate::client::CompletionGateway;
use crate::providers::GroqClient;
use crate::types::GatewayConfig;
use careku_core::AppResult;
use std::sync::Arc;

/// Create a completion gateway from configuration.
///
/// # Errors
/// Returns a configuration error when the required API key is missing.
pub fn create_gateway(config: &GatewayConfig) -> AppResult<Arc<dyn CompletionGateway>> {
    let client = GroqClient::new(config)?;
    Ok(Arc::new(client))
}
