//! Completion gateway crate for the Careku assistant.
//!
//! This crate provides the narrow contract between the retrieval core and a
//! hosted chat-completion service: a request/response pair, a trait for the
//! outbound call, and the Groq provider (OpenAI-compatible wire format).
//!
//! # Example
//! ```no_run
//! use careku_gateway::{CompletionGateway, CompletionRequest, GatewayConfig, providers::GroqClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::default().with_api_key("gsk-...");
//! let client = GroqClient::new(&config)?;
//! let request = CompletionRequest::new("Halo!", &config.model)
//!     .with_temperature(config.temperature);
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{CompletionGateway, CompletionRequest, CompletionResponse, Usage};
pub use factory::create_gateway;
pub use providers::GroqClient;
pub use types::GatewayConfig;
