#[cfg(test)]
mod tests {
    use suggestive::Suggestive;
    use suggestive::backend::{
        IndexRequest, KvBackend, MemoryBackend, QueryOptions, SuggestBackend,
    };
    use suggestive::document::Document;
    use suggestive::storage::MemoryKvStore;

    fn menu() -> Vec<Document> {
        vec![
            Document::builder()
                .add_integer("id", 0)
                .add_text("field1", "Pascal programming language")
                .add_text("field2", "Python")
                .build(),
            Document::builder()
                .add_integer("id", 1)
                .add_text("field1", "Italian Paníni")
                .add_text("field2", "Pizza Italiana")
                .build(),
            Document::builder()
                .add_integer("id", 2)
                .add_text("field1", "Pacific Ocean")
                .add_text("field2", "Posseidon, The king")
                .build(),
            Document::builder()
                .add_integer("id", 3)
                .add_text("field1", "Kiwi")
                .add_text("field2", "Passion-Fruit")
                .build(),
            Document::builder()
                .add_integer("id", 4)
                .add_text("field1", "I love")
                .add_text("field2", "Paníni")
                .build(),
        ]
    }

    fn request() -> IndexRequest {
        IndexRequest::new(["field1", "field2"]).with_score_field("id")
    }

    fn assert_word_mode<B: SuggestBackend>(backend: &mut B) {
        backend.index(&menu(), &request()).unwrap();

        // Literal words keep original casing and accents; folded index
        // terms are never returned. "Paníni" appears in two documents but
        // only once in the result.
        let words = backend
            .query("pa", &QueryOptions::words())
            .unwrap()
            .into_words()
            .unwrap();
        assert_eq!(words, vec!["Pascal", "Paníni", "Pacific", "Passion-Fruit"]);
    }

    #[test]
    fn test_word_mode_memory() {
        assert_word_mode(&mut MemoryBackend::new());
    }

    #[test]
    fn test_word_mode_kv() {
        assert_word_mode(&mut KvBackend::new(MemoryKvStore::new()));
    }

    #[test]
    fn test_word_mode_through_the_facade() {
        let mut s = Suggestive::new("meh", MemoryBackend::new());
        s.index(&menu(), &request()).unwrap();

        let words = s
            .suggest("pa", &QueryOptions::words())
            .unwrap()
            .into_words()
            .unwrap();
        assert_eq!(words, vec!["Pascal", "Paníni", "Pacific", "Passion-Fruit"]);
    }

    #[test]
    fn test_word_mode_with_accented_prefix() {
        let mut s = Suggestive::new("meh", MemoryBackend::new());
        s.index(&menu(), &request()).unwrap();

        // The folded form "pani" resolves the postings, but the words are
        // compared against the prefix as typed, accents intact.
        let words = s
            .suggest("paní", &QueryOptions::words())
            .unwrap()
            .into_words()
            .unwrap();
        assert_eq!(words, vec!["Paníni"]);

        // Same through the kv backend.
        let mut s = Suggestive::new("meh", KvBackend::new(MemoryKvStore::new()));
        s.index(&menu(), &request()).unwrap();
        let words = s
            .suggest("PaNÍ", &QueryOptions::words())
            .unwrap()
            .into_words()
            .unwrap();
        assert_eq!(words, vec!["Paníni"]);
    }

    #[test]
    fn test_word_mode_literal_term_reaches_the_matcher() {
        let mut backend = MemoryBackend::new();
        backend.index(&menu(), &request()).unwrap();

        // Backend-level callers pass the folded term for the posting
        // lookup and the typed term for word extraction.
        let options = QueryOptions {
            literal_term: Some("paní".to_string()),
            ..QueryOptions::words()
        };
        let words = backend.query("pani", &options).unwrap().into_words().unwrap();
        assert_eq!(words, vec!["Paníni"]);
    }

    #[test]
    fn test_word_mode_respects_pagination_window() {
        let mut backend = MemoryBackend::new();
        backend.index(&menu(), &request()).unwrap();

        // Only the first two documents are in the window, so only their
        // words come back.
        let options = QueryOptions::words().with_window(0, Some(2));
        let words = backend
            .query("pa", &options)
            .unwrap()
            .into_words()
            .unwrap();
        assert_eq!(words, vec!["Pascal", "Paníni"]);
    }

    #[test]
    fn test_word_mode_empty_term_yields_empty_words() {
        let backend = MemoryBackend::new();
        let result = backend.query("pa", &QueryOptions::words()).unwrap();
        assert_eq!(result.into_words().unwrap(), Vec::<String>::new());
    }
}
