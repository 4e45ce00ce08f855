//! Ask command handler.
//!
//! Runs the full answer round trip: retrieval, prompt composition, one
//! gateway call, and answer output with source attribution.

use careku_core::{config::AppConfig, AppError, AppResult};
use careku_gateway::GatewayConfig;
use careku_knowledge::HealthAssistant;
use clap::Args;
use std::path::PathBuf;

/// Ask a health question with retrieved context
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide source attribution in plain output
    #[arg(long)]
    pub no_sources: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let question = self
            .get_question()
            .ok_or_else(|| AppError::Config("No question provided".to_string()))?;

        let gateway_config = GatewayConfig {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        };

        let assistant = HealthAssistant::from_config(gateway_config)?;
        tracing::debug!("Assistant ready: {}", assistant.source_info());

        let bundle = assistant.ask(&question).await?;

        if self.json {
            let output = serde_json::json!({
                "answer": bundle.answer,
                "model": config.model,
                "sources": bundle.sources(),
                "usage": {
                    "promptTokens": bundle.usage.prompt_tokens,
                    "completionTokens": bundle.usage.completion_tokens,
                    "totalTokens": bundle.usage.total_tokens
                }
            });

            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            println!("{}", bundle.answer);

            if !self.no_sources && !bundle.used_docs.is_empty() {
                println!();
                println!("Sumber:");
                for doc in &bundle.used_docs {
                    println!("- {} ({})", doc.title, doc.id);
                }
            }

            tracing::debug!(
                "Token usage - Prompt: {}, Completion: {}, Total: {}",
                bundle.usage.prompt_tokens,
                bundle.usage.completion_tokens,
                bundle.usage.total_tokens
            );
        }

        Ok(())
    }

    /// Get the question text from argument or file.
    fn get_question(&self) -> Option<String> {
        self.question.clone().or_else(|| {
            self.file.as_ref().and_then(|path| {
                std::fs::read_to_string(path)
                    .map_err(|e| tracing::error!("Failed to read question file: {}", e))
                    .ok()
                    .map(|s| s.trim().to_string())
            })
        })
    }
}
