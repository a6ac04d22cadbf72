#[cfg(test)]
mod tests {
    use suggestive::backend::{
        IndexRequest, KvBackend, MemoryBackend, QueryOptions, SortDirection, SuggestBackend,
    };
    use suggestive::document::Document;
    use suggestive::storage::MemoryKvStore;

    fn person(id: i64, first: &str, last: &str, score: f64) -> Document {
        Document::builder()
            .add_integer("id", id)
            .add_text("first_name", first)
            .add_text("last_name", last)
            .add_float("score", score)
            .build()
    }

    fn request() -> IndexRequest {
        IndexRequest::new(["first_name", "last_name"])
    }

    /// Drive the same interleaved index/reindex/remove sequence on any
    /// backend.
    fn run_scenario<B: SuggestBackend>(backend: &mut B) {
        backend
            .index(
                &[
                    person(0, "Lincoln", "Clarete", 33.3),
                    person(1, "Mingwei", "Gu", 22.2),
                    person(2, "Livia", "C", 25.0),
                    person(3, "Lidia", "Lima", 11.0),
                ],
                &request(),
            )
            .unwrap();

        // Reindex 0 with corrected fields, drop 3, reindex 1 with a new
        // score.
        backend
            .index(&[person(0, "Lincoln", "Lins", 30.0)], &request())
            .unwrap();
        backend.remove("3").unwrap();
        backend
            .index(&[person(1, "Mingwei", "Gu", 40.0)], &request())
            .unwrap();
    }

    #[test]
    fn test_backends_agree_after_interleaved_mutations() {
        let mut memory = MemoryBackend::new();
        let mut kv = KvBackend::new(MemoryKvStore::new());
        run_scenario(&mut memory);
        run_scenario(&mut kv);

        let prefixes = [
            "l", "li", "lin", "lins", "lincoln", "liv", "lid", "lima", "m", "ming", "g", "gu",
            "c", "cla", "nothing",
        ];

        for prefix in prefixes {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                for words in [false, true] {
                    let options = QueryOptions {
                        direction,
                        words,
                        ..QueryOptions::default()
                    };
                    let from_memory = memory.query(prefix, &options).unwrap();
                    let from_kv = kv.query(prefix, &options).unwrap();
                    assert_eq!(
                        from_memory, from_kv,
                        "prefix='{prefix}' direction={direction:?} words={words}"
                    );
                }
            }
        }

        assert_eq!(memory.documents().unwrap(), kv.documents().unwrap());
    }

    #[test]
    fn test_scenario_end_state() {
        let mut backend = MemoryBackend::new();
        run_scenario(&mut backend);

        // Document 3 is gone, its terms with it.
        assert!(backend.query("lid", &QueryOptions::default()).unwrap().is_empty());
        assert!(backend.query("lima", &QueryOptions::default()).unwrap().is_empty());

        // Document 0's old last name no longer matches.
        assert!(backend.query("cla", &QueryOptions::default()).unwrap().is_empty());

        // Ascending by score: Livia (25.0), Lincoln (30.0).
        let result = backend
            .query("li", &QueryOptions::default())
            .unwrap()
            .into_documents()
            .unwrap();
        assert_eq!(
            result,
            vec![person(2, "Livia", "C", 25.0), person(0, "Lincoln", "Lins", 30.0)]
        );

        // Mingwei carries the new score.
        let result = backend
            .query("ming", &QueryOptions::default())
            .unwrap()
            .into_documents()
            .unwrap();
        assert_eq!(result, vec![person(1, "Mingwei", "Gu", 40.0)]);
    }
}
