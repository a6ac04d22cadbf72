//! The Suggestive facade: one collection name bound to one backend.

use std::collections::HashMap;

use tracing::debug;

use crate::analysis::fold;
use crate::backend::{IndexRequest, QueryOptions, QueryResult, SuggestBackend};
use crate::document::Document;
use crate::error::Result;

/// The public entry point of the engine.
///
/// A `Suggestive` value binds a logical collection name to one backend
/// chosen at construction and dispatched statically. It adds exactly one
/// behavior of its own: incoming query terms go through the same accent
/// folding the term expander applied at index time, so `suggest("Líncóln")`
/// and `suggest("lincoln")` hit the same index keys.
///
/// # Examples
///
/// ```
/// use suggestive::Suggestive;
/// use suggestive::backend::{IndexRequest, MemoryBackend, QueryOptions};
/// use suggestive::document::Document;
///
/// let mut names = Suggestive::new("names", MemoryBackend::new());
/// let doc = Document::builder()
///     .add_integer("id", 0)
///     .add_text("name", "Lincoln")
///     .build();
/// names
///     .index(&[doc], &IndexRequest::new(["name"]).with_score_field("id"))
///     .unwrap();
///
/// let hits = names.suggest("Lin", &QueryOptions::default()).unwrap();
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug)]
pub struct Suggestive<B: SuggestBackend> {
    name: String,
    backend: B,
}

impl<B: SuggestBackend> Suggestive<B> {
    /// Bind a collection name to a backend.
    pub fn new<S: Into<String>>(name: S, backend: B) -> Self {
        Suggestive {
            name: name.into(),
            backend,
        }
    }

    /// The collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Index a batch of documents. Returns the number processed.
    pub fn index(&mut self, documents: &[Document], request: &IndexRequest) -> Result<usize> {
        debug!(collection = %self.name, docs = documents.len(), "indexing batch");
        self.backend.index(documents, request)
    }

    /// Remove one document by id. Unknown ids are a no-op.
    pub fn remove(&mut self, doc_id: &str) -> Result<()> {
        self.backend.remove(doc_id)
    }

    /// Suggest completions for a typed prefix.
    ///
    /// The term is accent-folded and lowercased with the index's own
    /// folding function before it reaches the backend. The term as typed
    /// is carried alongside so word-mode extraction can compare it against
    /// document words as written.
    pub fn suggest(&self, term: &str, options: &QueryOptions) -> Result<QueryResult> {
        let folded = fold(term);
        if options.words {
            let options = QueryOptions {
                literal_term: Some(term.to_string()),
                ..options.clone()
            };
            self.backend.query(&folded, &options)
        } else {
            self.backend.query(&folded, options)
        }
    }

    /// Dump the whole document store as `id -> document`.
    pub fn documents(&self) -> Result<HashMap<String, Document>> {
        self.backend.documents()
    }
}
