//! Knowledge base and retrieval types.

use careku_gateway::Usage;
use serde::{Deserialize, Serialize};

/// A short health-advice document in the knowledge base.
///
/// Documents are immutable for the lifetime of the process: created once at
/// startup, never mutated. Declaration order inside the base is meaningful
/// (it breaks score ties and selects the fallback document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    /// Unique identifier (e.g., "pola-tidur")
    pub id: String,

    /// Short human-readable label
    pub title: String,

    /// Free-text advice body, one or a few sentences
    pub content: String,

    /// Lowercase topical keywords; order irrelevant
    pub tags: Vec<String>,
}

impl KnowledgeDocument {
    /// Create a document from string-like parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A document paired with its relevance score for one query.
///
/// Only lives during ranking and in retrieval inspection output.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDocument<'a> {
    /// The scored document
    pub document: &'a KnowledgeDocument,

    /// Non-negative relevance score
    pub score: u32,
}

/// User-facing attribution record for one document used in an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
    pub title: String,
}

impl From<&KnowledgeDocument> for DocumentRef {
    fn from(doc: &KnowledgeDocument) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
        }
    }
}

/// Final result of one answer round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerBundle {
    /// Generated answer, trimmed; the fixed fallback text when the gateway
    /// returned an empty completion
    pub answer: String,

    /// Context documents used for the answer, in retrieval order
    pub used_docs: Vec<KnowledgeDocument>,

    /// Token usage reported by the provider, zeroed when absent
    #[serde(default)]
    pub usage: Usage,
}

impl AnswerBundle {
    /// Attribution records for the documents used.
    pub fn sources(&self) -> Vec<DocumentRef> {
        self.used_docs.iter().map(DocumentRef::from).collect()
    }
}
