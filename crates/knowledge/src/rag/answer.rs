//! Answer orchestration.
//!
//! Runs the full round trip for one question: credential check, retrieval,
//! prompt composition, one gateway call, answer packaging. Everything except
//! the gateway call is synchronous pure computation over the in-memory base.

use crate::base::KnowledgeBase;
use crate::rag::prompt::{build_user_prompt, FALLBACK_ANSWER, SYSTEM_PROMPT};
use crate::retrieval::DEFAULT_TOP_K;
use crate::types::{AnswerBundle, KnowledgeDocument, ScoredDocument};
use careku_core::AppResult;
use careku_gateway::{
    create_gateway, CompletionGateway, CompletionRequest, GatewayConfig, Usage,
};
use std::sync::Arc;

/// The retrieval-augmented health assistant.
///
/// Holds the knowledge base, the completion gateway, and the gateway
/// configuration. Scoring and ranking are pure and stateless, so a shared
/// assistant can serve concurrent questions without locking.
pub struct HealthAssistant {
    knowledge: KnowledgeBase,
    gateway: Arc<dyn CompletionGateway>,
    config: GatewayConfig,
}

impl HealthAssistant {
    /// Create an assistant from its parts.
    pub fn new(
        knowledge: KnowledgeBase,
        gateway: Arc<dyn CompletionGateway>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            knowledge,
            gateway,
            config,
        }
    }

    /// Create an assistant over the built-in knowledge base with the
    /// configured hosted gateway.
    pub fn from_config(config: GatewayConfig) -> AppResult<Self> {
        let gateway = create_gateway(&config)?;
        Ok(Self::new(KnowledgeBase::builtin(), gateway, config))
    }

    /// The knowledge base searched at query time.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Human-readable description of the retrieval setup.
    pub fn source_info(&self) -> String {
        format!(
            "RAG lokal + {} via {}",
            self.config.model,
            self.gateway.provider_name()
        )
    }

    /// Retrieval only: scored context documents for a question, no gateway
    /// call.
    pub fn search(&self, question: &str, limit: usize) -> Vec<ScoredDocument<'_>> {
        self.knowledge.retrieve_scored(question, limit)
    }

    /// Answer a question with retrieved context.
    ///
    /// Fails with a configuration error before any network attempt when no
    /// API credential is configured. Gateway failures propagate unchanged;
    /// an empty-but-successful completion becomes the fixed fallback answer.
    pub async fn ask(&self, question: &str) -> AppResult<AnswerBundle> {
        self.config.require_api_key()?;

        let context = self.knowledge.retrieve(question, DEFAULT_TOP_K);
        tracing::info!("Answering with {} context documents", context.len());

        let request = CompletionRequest::new(
            build_user_prompt(question, &context),
            &self.config.model,
        )
        .with_system(SYSTEM_PROMPT)
        .with_temperature(self.config.temperature);

        let used_docs: Vec<KnowledgeDocument> = context.into_iter().cloned().collect();

        let response = self.gateway.complete(&request).await?;

        tracing::debug!(
            "Completion used {} tokens ({} prompt, {} completion)",
            response.usage.total_tokens,
            response.usage.prompt_tokens,
            response.usage.completion_tokens
        );

        Ok(package_answer(&response.content, used_docs, response.usage))
    }
}

/// Shape the final result: trim the generated text, substitute the fixed
/// fallback when it is empty, and bundle the documents used. Never fails.
fn package_answer(raw: &str, used_docs: Vec<KnowledgeDocument>, usage: Usage) -> AnswerBundle {
    let trimmed = raw.trim();
    let answer = if trimmed.is_empty() {
        FALLBACK_ANSWER.to_string()
    } else {
        trimmed.to_string()
    };

    AnswerBundle {
        answer,
        used_docs,
        usage,
    }
}
