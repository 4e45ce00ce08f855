//! Search command handler.
//!
//! Runs retrieval only: ranks the built-in knowledge documents for a query
//! and prints the selection with scores, without calling the gateway.

use careku_core::{AppError, AppResult};
use careku_core::config::AppConfig;
use careku_knowledge::{KnowledgeBase, DEFAULT_TOP_K};
use clap::Args;

/// Inspect retrieval: rank knowledge documents for a query
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// The query to rank against
    pub query: String,

    /// Maximum number of documents to select
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(&self, _config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing search command");

        let base = KnowledgeBase::builtin();
        let selected = base.retrieve_scored(&self.query, self.top_k);

        if self.json {
            let output: Vec<serde_json::Value> = selected
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "id": entry.document.id,
                        "title": entry.document.title,
                        "score": entry.score,
                        "tags": entry.document.tags
                    })
                })
                .collect();

            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            for entry in &selected {
                println!(
                    "{:>3}  {} ({})",
                    entry.score, entry.document.title, entry.document.id
                );
            }
        }

        Ok(())
    }
}
