//! Completion gateway providers.

pub mod groq;

pub use groq::GroqClient;
