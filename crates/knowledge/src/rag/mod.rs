//! Retrieval-augmented answering.
//!
//! Composes prompts from retrieved context and orchestrates the single
//! completion-gateway call per question.

pub mod answer;
pub mod prompt;

pub use answer::HealthAssistant;
pub use prompt::{FALLBACK_ANSWER, SYSTEM_PROMPT};
