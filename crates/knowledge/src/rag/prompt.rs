//! Prompt composition for the answer round trip.
//!
//! Pure string assembly: no templating engine, no network. The instruction
//! text is fixed product copy in Indonesian, matching the assistant persona.

use crate::types::KnowledgeDocument;

/// System-role instruction describing the assistant persona.
pub const SYSTEM_PROMPT: &str = "Kamu adalah CAREKU AI, asisten kesehatan suportif. \
     Jawab ringkas, hindari klaim medis pasti, sarankan konsultasi profesional bila perlu.";

/// Answer shown when the gateway succeeds but returns an empty completion.
pub const FALLBACK_ANSWER: &str =
    "Maaf, aku belum bisa menemukan jawaban. Coba ulangi pertanyaanmu.";

/// Render context documents as a bullet list, one line per document.
pub fn render_context(docs: &[&KnowledgeDocument]) -> String {
    docs.iter()
        .map(|doc| format!("- {}: {}", doc.title, doc.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the user-role prompt: instructions, context block, question.
pub fn build_user_prompt(question: &str, docs: &[&KnowledgeDocument]) -> String {
    [
        "Gunakan konteks berikut untuk menjawab singkat dan jelas dalam bahasa Indonesia.",
        "Jika konteks tidak relevan, beritahu pengguna dan beri saran umum yang aman.",
        "Format jawaban maksimal 3 poin.",
        "",
        "Konteks:",
        &render_context(docs),
        "",
        &format!("Pertanyaan: {}", question),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<KnowledgeDocument> {
        vec![
            KnowledgeDocument::new("pola-tidur", "Pola tidur", "Tidur 7-9 jam.", &["tidur"]),
            KnowledgeDocument::new("hidrasi-harian", "Hidrasi harian", "Minum 6-8 gelas.", &["air"]),
        ]
    }

    #[test]
    fn test_render_context_bullet_lines() {
        let docs = docs();
        let refs: Vec<&KnowledgeDocument> = docs.iter().collect();
        let context = render_context(&refs);

        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "- Pola tidur: Tidur 7-9 jam.");
        assert_eq!(lines[1], "- Hidrasi harian: Minum 6-8 gelas.");
    }

    #[test]
    fn test_render_context_empty() {
        assert_eq!(render_context(&[]), "");
    }

    #[test]
    fn test_user_prompt_contains_context_and_question() {
        let docs = docs();
        let refs: Vec<&KnowledgeDocument> = docs.iter().collect();
        let prompt = build_user_prompt("aku susah tidur", &refs);

        assert!(prompt.starts_with("Gunakan konteks berikut"));
        assert!(prompt.contains("Konteks:\n- Pola tidur: Tidur 7-9 jam."));
        assert!(prompt.ends_with("Pertanyaan: aku susah tidur"));
    }

    #[test]
    fn test_user_prompt_preserves_document_order() {
        let docs = docs();
        let refs: Vec<&KnowledgeDocument> = docs.iter().collect();
        let prompt = build_user_prompt("halo", &refs);

        let tidur = prompt.find("Pola tidur").unwrap();
        let hidrasi = prompt.find("Hidrasi harian").unwrap();
        assert!(tidur < hidrasi);
    }
}
