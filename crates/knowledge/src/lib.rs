//! Knowledge base and lexical retrieval for the Careku assistant.
//!
//! Provides the compiled-in health-advice knowledge base, the lexical
//! retrieval engine (tokenize, score, rank, select), prompt composition,
//! and the answer orchestration around one completion-gateway call.

pub mod base;
pub mod rag;
pub mod retrieval;
pub mod types;

// Re-export commonly used types
pub use base::KnowledgeBase;
pub use rag::{HealthAssistant, FALLBACK_ANSWER, SYSTEM_PROMPT};
pub use retrieval::{score_document, tokenize, DEFAULT_TOP_K};
pub use types::{AnswerBundle, DocumentRef, KnowledgeDocument, ScoredDocument};
