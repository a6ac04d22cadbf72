//! In-process index backend backed by plain maps.

use std::collections::HashMap;

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::analysis::find_words;
use crate::backend::{
    IndexRequest, QueryOptions, QueryResult, SortDirection, SuggestBackend, doc_identity,
    doc_terms,
};
use crate::document::Document;
use crate::error::{Result, SuggestiveError};

/// An in-process backend owning its document map, posting map and removal
/// cache.
///
/// No process-wide state: the index lives exactly as long as this value.
/// Posting lists are plain ordered vectors; ascending score order comes from
/// sorting each `index` batch by score before appending, so a plain append
/// lands postings in the right place.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    /// Document bodies by id.
    documents: AHashMap<String, Document>,
    /// Posting lists by term, ascending score order.
    postings: AHashMap<String, Vec<String>>,
    /// Removal cache: terms each document currently contributes.
    doc_terms: AHashMap<String, AHashSet<String>>,
}

impl MemoryBackend {
    /// Create a new empty backend.
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of live terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether a term currently has postings.
    pub fn has_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }
}

impl SuggestBackend for MemoryBackend {
    fn index(&mut self, documents: &[Document], request: &IndexRequest) -> Result<usize> {
        // The batch is sorted ascending by score up front so that posting
        // appends land in ascending order. Identity extraction happens here
        // too; an unsortable batch fails before touching the index.
        let mut batch: Vec<(String, f64, &Document)> = documents
            .iter()
            .map(|doc| {
                let (doc_id, score) = doc_identity(doc, request)?;
                Ok((doc_id, score, doc))
            })
            .collect::<Result<_>>()?;
        batch.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut count = 0;
        for (doc_id, _, doc) in batch {
            // Unconditional remove first: reindexing the same id must never
            // leave postings from the old field values.
            self.remove(&doc_id)?;

            let terms = doc_terms(doc, &doc_id, request)?;
            self.documents.insert(doc_id.clone(), doc.clone());
            self.doc_terms
                .insert(doc_id.clone(), terms.iter().cloned().collect());
            for term in terms {
                self.postings.entry(term).or_default().push(doc_id.clone());
            }
            count += 1;
        }

        debug!(count, "indexed batch into memory backend");
        Ok(count)
    }

    fn remove(&mut self, doc_id: &str) -> Result<()> {
        if let Some(terms) = self.doc_terms.remove(doc_id) {
            for term in terms {
                if let Some(ids) = self.postings.get_mut(&term) {
                    ids.retain(|id| id != doc_id);
                    if ids.is_empty() {
                        self.postings.remove(&term);
                    }
                }
            }
            debug!(doc_id, "removed document from memory backend");
        }
        self.documents.remove(doc_id);
        Ok(())
    }

    fn query(&self, term: &str, options: &QueryOptions) -> Result<QueryResult> {
        let term = term.to_lowercase();

        let ids = match self.postings.get(&term) {
            Some(ids) => ids,
            None => {
                return Ok(if options.words {
                    QueryResult::Words(Vec::new())
                } else {
                    QueryResult::Documents(Vec::new())
                });
            }
        };

        // Direction first, then the window: offset counts from whichever
        // end iteration starts at.
        let limit = options.limit.unwrap_or(usize::MAX);
        let window: Vec<&String> = match options.direction {
            SortDirection::Ascending => {
                ids.iter().skip(options.offset).take(limit).collect()
            }
            SortDirection::Descending => {
                ids.iter().rev().skip(options.offset).take(limit).collect()
            }
        };

        let mut docs = Vec::with_capacity(window.len());
        for doc_id in window {
            let doc = self.documents.get(doc_id).ok_or_else(|| {
                SuggestiveError::corrupt(format!(
                    "posting for term '{term}' references missing document '{doc_id}'"
                ))
            })?;
            docs.push(doc);
        }

        if options.words {
            let literal = options.literal_term.as_deref().unwrap_or(&term);
            let mut words = Vec::new();
            for doc in docs {
                for word in find_words(doc, literal) {
                    if !words.contains(&word) {
                        words.push(word);
                    }
                }
            }
            Ok(QueryResult::Words(words))
        } else {
            Ok(QueryResult::Documents(docs.into_iter().cloned().collect()))
        }
    }

    fn documents(&self) -> Result<HashMap<String, Document>> {
        Ok(self
            .documents
            .iter()
            .map(|(id, doc)| (id.clone(), doc.clone()))
            .collect())
    }
}
