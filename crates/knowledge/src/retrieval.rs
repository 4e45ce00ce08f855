//! Lexical retrieval: tokenization, scoring, ranking, and selection.
//!
//! The base is small and rebuilt per query, so documents are scored directly
//! instead of through an inverted index or embeddings. Two passes make up a
//! score: exact token hits over the document surface, plus a coarser
//! tag-substring pass over the raw query. The passes overlap on purpose — a
//! tag that is also a surface token counts in both, biasing selection toward
//! tag-bearing documents.

use crate::base::KnowledgeBase;
use crate::types::{KnowledgeDocument, ScoredDocument};
use std::collections::HashSet;

/// Score added for each query token found in the document surface.
pub const TOKEN_HIT_WEIGHT: u32 = 2;

/// Score added for each tag contained in the raw lowercase query.
pub const TAG_MATCH_WEIGHT: u32 = 1;

/// Default number of context documents selected per query.
pub const DEFAULT_TOP_K: usize = 3;

/// Split free text into lowercase word tokens.
///
/// ASCII punctuation is treated as a separator; Unicode word characters pass
/// through untouched. Total over arbitrary input and idempotent: tokenizing
/// the space-joined output yields the same tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_alphanumeric() && c != '_' && !c.is_whitespace() {
                ' '
            } else {
                c
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Compute the relevance score of one document against one query.
///
/// Token-hit pass: each query token found anywhere in the tokenized
/// `title + content + tags` surface adds [`TOKEN_HIT_WEIGHT`], checked once
/// per query token regardless of how often the document contains it.
/// Tag-substring pass: each tag contained as a substring of the raw
/// lowercase query adds [`TAG_MATCH_WEIGHT`].
///
/// Pure function of its inputs; never fails, never negative.
pub fn score_document(query: &str, doc: &KnowledgeDocument) -> u32 {
    let surface = format!("{} {} {}", doc.title, doc.content, doc.tags.join(" "));
    let surface_tokens: HashSet<String> = tokenize(&surface).into_iter().collect();

    let hits = tokenize(query)
        .iter()
        .filter(|token| surface_tokens.contains(*token))
        .count() as u32
        * TOKEN_HIT_WEIGHT;

    let query_lower = query.to_lowercase();
    let partials = doc
        .tags
        .iter()
        .filter(|tag| query_lower.contains(tag.as_str()))
        .count() as u32
        * TAG_MATCH_WEIGHT;

    hits + partials
}

impl KnowledgeBase {
    /// Score every document against the query, ordered by descending score.
    ///
    /// The sort is stable, so equal scores keep declaration order. This is a
    /// hard requirement: when nothing matches, every document scores 0 and
    /// the first declared document must surface as the fallback.
    pub fn rank(&self, query: &str) -> Vec<ScoredDocument<'_>> {
        let mut scored: Vec<ScoredDocument<'_>> = self
            .documents()
            .iter()
            .map(|document| ScoredDocument {
                score: score_document(query, document),
                document,
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Select up to `limit` context documents for a query, with scores.
    ///
    /// Zero-score documents are dropped, except the top-ranked document is
    /// always kept so a non-empty base always yields at least one document.
    pub fn retrieve_scored(&self, query: &str, limit: usize) -> Vec<ScoredDocument<'_>> {
        let selected: Vec<ScoredDocument<'_>> = self
            .rank(query)
            .into_iter()
            .enumerate()
            .filter(|(rank, entry)| entry.score > 0 || *rank == 0)
            .map(|(_, entry)| entry)
            .take(limit)
            .collect();

        tracing::debug!(
            "Selected {} of {} documents for query ({} chars)",
            selected.len(),
            self.len(),
            query.len()
        );

        selected
    }

    /// Select up to `limit` context documents for a query.
    pub fn retrieve(&self, query: &str, limit: usize) -> Vec<&KnowledgeDocument> {
        self.retrieve_scored(query, limit)
            .into_iter()
            .map(|entry| entry.document)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, title: &str, content: &str, tags: &[&str]) -> KnowledgeDocument {
        KnowledgeDocument::new(id, title, content, tags)
    }

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Boleh makan coklat?!"),
            vec!["boleh", "makan", "coklat"]
        );
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("???").is_empty());
        assert!(tokenize("  .,;:!?()  ").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_unicode_words() {
        assert_eq!(tokenize("günaydın, café!"), vec!["günaydın", "café"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        assert_eq!(tokenize("tidur_7 jam 9x"), vec!["tidur_7", "jam", "9x"]);
    }

    #[test]
    fn test_tokenize_idempotent() {
        for input in ["Boleh makan coklat?", "", "???", "aku SUSAH tidur!!", "günaydın café 123"] {
            let once = tokenize(input);
            let twice = tokenize(&once.join(" "));
            assert_eq!(once, twice, "tokenize not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_tokenize_total_on_long_input() {
        let long = "kata-kata! ".repeat(10_000);
        let tokens = tokenize(&long);
        assert_eq!(tokens.len(), 20_000);
    }

    #[test]
    fn test_score_counts_token_hits_and_tag_substrings() {
        let d = doc("pola-tidur", "Pola tidur", "Tidur 7-9 jam.", &["tidur", "sleep"]);
        // "tidur" hits the surface (+2) and is a tag substring of the query (+1)
        assert_eq!(score_document("tidur", &d), 3);
        // "jam" only hits the surface
        assert_eq!(score_document("jam", &d), 2);
        // no match at all
        assert_eq!(score_document("zzzxxxqqq", &d), 0);
    }

    #[test]
    fn test_score_token_checked_once_per_query_token() {
        let d = doc("x", "Tidur tidur tidur", "tidur tidur", &[]);
        // Document-side repetitions do not multiply the score.
        assert_eq!(score_document("tidur", &d), 2);
    }

    #[test]
    fn test_score_tag_substring_of_phrase() {
        let d = doc("x", "Pola makan", "Pilih yang lembut.", &["makan"]);
        // "makanan" is not an exact surface token, but it contains the tag
        // "makan" as a substring, so only the coarse pass fires.
        assert_eq!(score_document("makanan", &d), 1);
    }

    #[test]
    fn test_score_monotonic_in_added_surface_token() {
        let d = doc(
            "pola-makan-lembut",
            "Pola makan lembut",
            "Prioritaskan makanan rendah lemak.",
            &["makan", "diet"],
        );
        let base = score_document("boleh coklat", &d);
        let extended = score_document("boleh coklat makan", &d);
        assert!(extended >= base);
        assert!(extended > base, "adding a matching token should raise the score");
    }

    #[test]
    fn test_score_empty_query_is_zero() {
        let d = doc("x", "Judul", "Isi dokumen.", &["tag"]);
        assert_eq!(score_document("", &d), 0);
    }

    fn test_base() -> KnowledgeBase {
        KnowledgeBase::builtin()
    }

    #[test]
    fn test_retrieve_never_empty_and_bounded() {
        let base = test_base();
        for query in ["", "zzzxxxqqq", "aku susah tidur", "???"] {
            let selected = base.retrieve(query, DEFAULT_TOP_K);
            assert!(!selected.is_empty(), "empty selection for {:?}", query);
            assert!(selected.len() <= DEFAULT_TOP_K);
        }
    }

    #[test]
    fn test_retrieve_fallback_is_first_declared_document() {
        let base = test_base();
        let selected = base.retrieve_scored("zzzxxxqqq", DEFAULT_TOP_K);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].score, 0);
        assert_eq!(selected[0].document.id, base.documents()[0].id);
    }

    #[test]
    fn test_rank_ties_keep_declaration_order() {
        let base = test_base();
        let ranked = base.rank("zzzxxxqqq");
        let ids: Vec<&str> = ranked.iter().map(|e| e.document.id.as_str()).collect();
        let declared: Vec<&str> = base.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, declared);
    }

    #[test]
    fn test_chocolate_query_prefers_diet_over_sleep() {
        let base = test_base();
        let ranked = base.rank("boleh makan coklat?");
        let pos = |id: &str| ranked.iter().position(|e| e.document.id == id).unwrap();
        assert!(
            pos("pola-makan-lembut") < pos("pola-tidur"),
            "diet document should outrank sleep document"
        );
    }

    #[test]
    fn test_sleep_query_selects_sleep_document() {
        let base = test_base();
        let selected = base.retrieve("aku susah tidur", DEFAULT_TOP_K);
        assert!(selected.iter().any(|d| d.id == "pola-tidur"));
    }

    #[test]
    fn test_retrieve_drops_zero_scores_when_matches_exist() {
        let base = test_base();
        let selected = base.retrieve_scored("aku susah tidur", DEFAULT_TOP_K);
        // The sleep document matched; anything else selected must have
        // scored as well.
        assert!(selected.iter().all(|e| e.score > 0));
    }

    #[test]
    fn test_retrieve_respects_smaller_limit() {
        let base = test_base();
        let selected = base.retrieve("minum air tidur makan nyeri olahraga", 2);
        assert_eq!(selected.len(), 2);
    }
}
