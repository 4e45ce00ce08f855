//! The knowledge base: a fixed, ordered list of advice documents.

use careku_core::{AppError, AppResult};

use crate::types::KnowledgeDocument;

/// An immutable, ordered set of knowledge documents.
///
/// The base is read-only reference data: built once at startup, searched per
/// query, never indexed or persisted. Declaration order matters — ties rank
/// in declaration order and the first document is the fallback context.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    docs: Vec<KnowledgeDocument>,
}

impl KnowledgeBase {
    /// Create a knowledge base from caller-supplied documents, validating
    /// each record once at load time.
    pub fn new(docs: Vec<KnowledgeDocument>) -> AppResult<Self> {
        for doc in &docs {
            if doc.id.trim().is_empty() {
                return Err(AppError::Knowledge(
                    "Knowledge document has an empty id".to_string(),
                ));
            }
            if doc.title.trim().is_empty() || doc.content.trim().is_empty() {
                return Err(AppError::Knowledge(format!(
                    "Knowledge document '{}' has an empty title or content",
                    doc.id
                )));
            }
            if doc.tags.iter().any(|tag| *tag != tag.to_lowercase()) {
                return Err(AppError::Knowledge(format!(
                    "Knowledge document '{}' has a non-lowercase tag",
                    doc.id
                )));
            }
        }

        Ok(Self { docs })
    }

    /// The built-in health-advice base shipped with the assistant.
    pub fn builtin() -> Self {
        // Compiled-in records; they uphold the invariants new() checks.
        let docs = vec![
            KnowledgeDocument::new(
                "hidrasi-harian",
                "Hidrasi harian",
                "Minum 6-8 gelas air per hari, tambah 1-2 gelas saat banyak aktivitas fisik. \
                 Perhatikan urine berwarna pucat sebagai tanda cukup hidrasi.",
                &["minum", "air", "hidrasi", "dehidrasi"],
            ),
            KnowledgeDocument::new(
                "olahraga-ringkas",
                "Olahraga singkat",
                "Targetkan 20-30 menit aktivitas intensitas ringan-sedang (jalan cepat, \
                 peregangan dinamis). Jika nyeri, mulai dari 10 menit lalu tambah 5 menit tiap minggu.",
                &["olahraga", "gerak", "exercise", "latihan"],
            ),
            KnowledgeDocument::new(
                "pola-makan-lembut",
                "Pola makan lembut",
                "Prioritaskan makanan rendah lemak dan tidak pedas. Sup ayam, oatmeal, pisang, \
                 dan smoothie buah adalah opsi aman saat perut sensitif.",
                &["makan", "diet", "pedas", "lambung", "food"],
            ),
            KnowledgeDocument::new(
                "pola-tidur",
                "Pola tidur",
                "Tidur 7-9 jam, hindari layar 60 menit sebelum tidur, dan jaga jadwal tidur \
                 konsisten termasuk akhir pekan.",
                &["tidur", "sleep", "istirahat"],
            ),
            KnowledgeDocument::new(
                "catatan-nyeri",
                "Catatan nyeri",
                "Pantau lokasi, durasi, dan pemicu nyeri. Gunakan kompres hangat/dingin selama \
                 10-15 menit sesuai kenyamanan dan konsultasi bila nyeri memburuk.",
                &["nyeri", "pain", "cedera"],
            ),
        ];

        Self { docs }
    }

    /// All documents in declaration order.
    pub fn documents(&self) -> &[KnowledgeDocument] {
        &self.docs
    }

    /// Number of documents in the base.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the base holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_base_is_valid() {
        let builtin = KnowledgeBase::builtin();
        assert_eq!(builtin.len(), 5);
        assert!(KnowledgeBase::new(builtin.documents().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_declaration_order() {
        let base = KnowledgeBase::builtin();
        let ids: Vec<&str> = base.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "hidrasi-harian",
                "olahraga-ringkas",
                "pola-makan-lembut",
                "pola-tidur",
                "catatan-nyeri"
            ]
        );
    }

    #[test]
    fn test_new_rejects_empty_id() {
        let docs = vec![KnowledgeDocument::new("", "Judul", "Isi.", &[])];
        assert!(KnowledgeBase::new(docs).is_err());
    }

    #[test]
    fn test_new_rejects_blank_content() {
        let docs = vec![KnowledgeDocument::new("id", "Judul", "   ", &[])];
        assert!(KnowledgeBase::new(docs).is_err());
    }

    #[test]
    fn test_new_rejects_uppercase_tag() {
        let docs = vec![KnowledgeDocument::new("id", "Judul", "Isi.", &["Tidur"])];
        assert!(KnowledgeBase::new(docs).is_err());
    }

    #[test]
    fn test_new_accepts_empty_tags() {
        let docs = vec![KnowledgeDocument::new("id", "Judul", "Isi.", &[])];
        assert!(KnowledgeBase::new(docs).is_ok());
    }
}
