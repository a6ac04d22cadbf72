//! Networked index backend over a key-value store.
//!
//! Document bodies live in one hash table as JSON strings, posting lists in
//! per-term sorted sets with score as the ordering key, and the removal
//! cache in per-document sets. All writes for one engine-level mutation are
//! queued into a single batch and submitted as one pipelined transmission.
//!
//! # Consistency
//!
//! Pipelining is a transport optimization, not atomicity. A crash mid-batch
//! can leave some documents of an `index` call fully reindexed and others
//! not, and within one document the remove-then-add sequence is visible to
//! concurrent readers as a brief window with neither old nor new postings.
//! Removal reads the cache and then submits its deletions in a second step;
//! a crash in between can orphan postings. Both gaps are inherited from the
//! wire protocol and deliberately not papered over here; removal is
//! idempotent and safe to retry, which is the supported mitigation.

use std::collections::HashMap;

use ahash::AHashMap;
use tracing::debug;

use crate::analysis::find_words;
use crate::backend::keys::KeySpace;
use crate::backend::{
    IndexRequest, QueryOptions, QueryResult, SortDirection, SuggestBackend, doc_identity,
    doc_terms,
};
use crate::document::Document;
use crate::error::{Result, SuggestiveError};
use crate::storage::{Command, KvStore};

/// Index backend over a networked hash/sorted-set store.
///
/// Unlike the in-process backend this one does not sort incoming batches:
/// the posting store orders members natively by score, so input order is
/// irrelevant.
#[derive(Debug)]
pub struct KvBackend<S: KvStore> {
    store: S,
    keys: KeySpace,
}

impl<S: KvStore> KvBackend<S> {
    /// Create a backend over a store, using the default namespace shared
    /// with existing deployments.
    pub fn new(store: S) -> Self {
        KvBackend {
            store,
            keys: KeySpace::default(),
        }
    }

    /// Create a backend with a custom key namespace.
    pub fn with_namespace<N: Into<String>>(store: S, namespace: N) -> Self {
        KvBackend {
            store,
            keys: KeySpace::new(namespace),
        }
    }

    /// The key space this backend writes under.
    pub fn keys(&self) -> &KeySpace {
        &self.keys
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Queue the removal of one document into `batch`.
    ///
    /// Reads the removal cache live; the queued commands drop every posting
    /// the cache names, the cache key and the body. Unknown ids queue only
    /// the two unconditional deletes, which the store treats as no-ops.
    fn queue_remove(&self, doc_id: &str, batch: &mut Vec<Command>) -> Result<()> {
        let terms = self.store.set_members(&self.keys.cache(doc_id))?;
        self.queue_remove_terms(doc_id, &terms, batch);
        Ok(())
    }

    /// Queue the removal of one document's postings under `terms`, its
    /// cache key and its body.
    fn queue_remove_terms(&self, doc_id: &str, terms: &[String], batch: &mut Vec<Command>) {
        for term in terms {
            batch.push(Command::SortedRemove {
                key: self.keys.term(term),
                member: doc_id.to_string(),
            });
        }
        batch.push(Command::Delete {
            key: self.keys.cache(doc_id),
        });
        batch.push(Command::HashDelete {
            key: self.keys.docs(),
            field: doc_id.to_string(),
        });
    }

    fn parse_body(&self, doc_id: &str, body: Option<String>) -> Result<Document> {
        let body = body.ok_or_else(|| {
            SuggestiveError::corrupt(format!("no stored body for document '{doc_id}'"))
        })?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl<S: KvStore> SuggestBackend for KvBackend<S> {
    fn index(&mut self, documents: &[Document], request: &IndexRequest) -> Result<usize> {
        let mut batch = Vec::new();
        // Terms queued for an id earlier in this same call. The live cache
        // read cannot see them (nothing applies until submit), so a later
        // occurrence of the same id must drop them explicitly or the first
        // occurrence's postings would survive the reindex.
        let mut queued_terms: AHashMap<String, Vec<String>> = AHashMap::new();
        let mut count = 0;

        for doc in documents {
            let (doc_id, score) = doc_identity(doc, request)?;
            let mut stale = self.store.set_members(&self.keys.cache(&doc_id))?;
            if let Some(earlier) = queued_terms.remove(&doc_id) {
                for term in earlier {
                    if !stale.contains(&term) {
                        stale.push(term);
                    }
                }
            }
            self.queue_remove_terms(&doc_id, &stale, &mut batch);

            batch.push(Command::HashSet {
                key: self.keys.docs(),
                field: doc_id.clone(),
                value: serde_json::to_string(doc)?,
            });

            let terms = doc_terms(doc, &doc_id, request)?;
            batch.push(Command::SetReplace {
                key: self.keys.cache(&doc_id),
                members: terms.clone(),
            });
            for term in &terms {
                batch.push(Command::SortedAdd {
                    key: self.keys.term(term),
                    member: doc_id.clone(),
                    score,
                });
            }
            queued_terms.insert(doc_id, terms);
            count += 1;
        }

        self.store.submit(&batch)?;
        debug!(count, commands = batch.len(), "indexed batch into kv backend");
        Ok(count)
    }

    fn remove(&mut self, doc_id: &str) -> Result<()> {
        let mut batch = Vec::new();
        self.queue_remove(doc_id, &mut batch)?;
        self.store.submit(&batch)?;
        debug!(doc_id, "removed document from kv backend");
        Ok(())
    }

    fn query(&self, term: &str, options: &QueryOptions) -> Result<QueryResult> {
        let term = term.to_lowercase();

        // Pagination is pushed down to the posting read; only the windowed
        // ids ever reach the document store.
        let reverse = options.direction == SortDirection::Descending;
        let ids = self.store.sorted_range(
            &self.keys.term(&term),
            options.offset,
            options.limit,
            reverse,
        )?;

        if ids.is_empty() {
            return Ok(if options.words {
                QueryResult::Words(Vec::new())
            } else {
                QueryResult::Documents(Vec::new())
            });
        }

        let bodies = self.store.hash_get_many(&self.keys.docs(), &ids)?;

        if options.words {
            let literal = options.literal_term.as_deref().unwrap_or(&term);
            let mut words = Vec::new();
            for (doc_id, body) in ids.iter().zip(bodies) {
                let doc = self.parse_body(doc_id, body)?;
                for word in find_words(&doc, literal) {
                    if !words.contains(&word) {
                        words.push(word);
                    }
                }
            }
            Ok(QueryResult::Words(words))
        } else {
            let mut docs = Vec::with_capacity(ids.len());
            for (doc_id, body) in ids.iter().zip(bodies) {
                docs.push(self.parse_body(doc_id, body)?);
            }
            Ok(QueryResult::Documents(docs))
        }
    }

    fn documents(&self) -> Result<HashMap<String, Document>> {
        let mut result = HashMap::new();
        for (doc_id, body) in self.store.hash_get_all(&self.keys.docs())? {
            let doc = self.parse_body(&doc_id, Some(body))?;
            result.insert(doc_id, doc);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    fn backend() -> KvBackend<MemoryKvStore> {
        KvBackend::new(MemoryKvStore::new())
    }

    fn named(id: i64, name: &str) -> Document {
        Document::builder().add_integer("id", id).add_text("name", name).build()
    }

    #[test]
    fn test_index_writes_the_wire_key_layout() {
        let mut backend = backend();
        backend
            .index(
                &[named(0, "Lincoln")],
                &IndexRequest::new(["name"]).with_score_field("id"),
            )
            .unwrap();

        let store = backend.store();
        assert!(store.contains_key("suggestive:d"));
        assert!(store.contains_key("suggestive:dt:0"));
        for term in ["l", "li", "lin", "linc", "linco", "lincol", "lincoln"] {
            assert!(store.contains_key(&format!("suggestive:d:{term}")));
        }
    }

    #[test]
    fn test_removal_cache_holds_expanded_terms() {
        let mut backend = backend();
        backend
            .index(
                &[named(0, "Lincoln")],
                &IndexRequest::new(["name"]).with_score_field("id"),
            )
            .unwrap();

        let mut terms = backend.store().set_members("suggestive:dt:0").unwrap();
        terms.sort();
        assert_eq!(
            terms,
            vec!["l", "li", "lin", "linc", "linco", "lincol", "lincoln"]
        );
    }

    #[test]
    fn test_remove_deletes_postings_cache_and_body() {
        let mut backend = backend();
        backend
            .index(
                &[named(0, "Lincoln")],
                &IndexRequest::new(["name"]).with_score_field("id"),
            )
            .unwrap();
        backend.remove("0").unwrap();

        let store = backend.store();
        assert_eq!(store.key_count(), 0);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut backend = backend();
        backend.remove("never-indexed").unwrap();
        assert_eq!(backend.store().key_count(), 0);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut backend = backend();
        backend
            .index(
                &[named(0, "Lincoln")],
                &IndexRequest::new(["name"]).with_score_field("id"),
            )
            .unwrap();
        backend.remove("0").unwrap();
        backend.remove("0").unwrap();
        assert_eq!(backend.store().key_count(), 0);
    }

    #[test]
    fn test_corrupt_body_is_fatal_for_the_read() {
        let mut backend = backend();
        backend
            .index(
                &[named(0, "Lincoln")],
                &IndexRequest::new(["name"]).with_score_field("id"),
            )
            .unwrap();

        // Clobber the stored body with something unparsable.
        backend
            .store()
            .submit(&[Command::HashSet {
                key: "suggestive:d".to_string(),
                field: "0".to_string(),
                value: "{not json".to_string(),
            }])
            .unwrap();

        assert!(matches!(
            backend.query("li", &QueryOptions::default()),
            Err(SuggestiveError::CorruptDocument(_))
        ));
    }

    #[test]
    fn test_query_empty_term_skips_the_document_store() {
        let backend = backend();
        let result = backend.query("li", &QueryOptions::default()).unwrap();
        assert!(result.is_empty());
    }
}
