//! Index backends.
//!
//! A backend owns the three structures behind a collection: the document
//! store (id to body), the term index (prefix term to score-ordered posting
//! list) and the removal cache (id to the terms that document contributed).
//! Two implementations exist, an in-process one backed by plain maps and a
//! networked one backed by a [`crate::storage::KvStore`]; both expose the
//! same [`SuggestBackend`] trait and must behave identically from the
//! caller's point of view.

pub mod keys;
pub mod kv;
pub mod memory;

pub use keys::KeySpace;
pub use kv::KvBackend;
pub use memory::MemoryBackend;

use std::collections::HashMap;

use ahash::AHashSet;

use crate::analysis::expand;
use crate::document::Document;
use crate::error::{Result, SuggestiveError};

/// Configuration for one `index` call.
///
/// A single indexed field is simply a one-element `fields` list.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRequest {
    /// Field holding the document identifier.
    pub id_field: String,

    /// Ordered list of text fields to expand into prefix terms.
    pub fields: Vec<String>,

    /// Field holding the numeric score that orders posting lists.
    pub score_field: String,

    /// Minimum prefix length emitted by term expansion.
    pub min_chars: usize,
}

impl IndexRequest {
    /// Create a request indexing the given fields with default identifier
    /// field (`"id"`), score field (`"score"`) and minimum prefix length.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IndexRequest {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Use a different score field.
    pub fn with_score_field<S: Into<String>>(mut self, name: S) -> Self {
        self.score_field = name.into();
        self
    }

    /// Use a different minimum prefix length.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }
}

impl Default for IndexRequest {
    fn default() -> Self {
        IndexRequest {
            id_field: "id".to_string(),
            fields: Vec::new(),
            score_field: "score".to_string(),
            min_chars: 1,
        }
    }
}

/// Direction of the score ordering for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending score, the index's native order.
    #[default]
    Ascending,
    /// The exact reverse of ascending order. Not a re-sort by another key.
    Descending,
}

/// Options for one query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOptions {
    /// Ordering direction, applied before the window.
    pub direction: SortDirection,

    /// Return literal matching words instead of document bodies.
    pub words: bool,

    /// Number of postings to skip, counted from whichever end `direction`
    /// starts at.
    pub offset: usize,

    /// Maximum number of postings to return; `None` is unbounded.
    pub limit: Option<usize>,

    /// The term as the caller originally typed it, before accent folding.
    ///
    /// Word-mode prefix comparison happens on document words as written,
    /// so a folded term can never match an accented range. The facade
    /// fills this in; `None` falls back to the queried (folded) term.
    pub literal_term: Option<String>,
}

impl QueryOptions {
    /// Descending-order options.
    pub fn descending() -> Self {
        QueryOptions {
            direction: SortDirection::Descending,
            ..Default::default()
        }
    }

    /// Word-mode options.
    pub fn words() -> Self {
        QueryOptions {
            words: true,
            ..Default::default()
        }
    }

    /// Set a pagination window.
    pub fn with_window(mut self, offset: usize, limit: Option<usize>) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }
}

/// The outcome of a query: document bodies, or literal words in word mode.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// Matching documents, ordered per the query direction.
    Documents(Vec<Document>),
    /// Matching literal words, first-seen order, deduplicated across the
    /// returned documents.
    Words(Vec<String>),
}

impl QueryResult {
    /// The documents, if this is a document result.
    pub fn into_documents(self) -> Option<Vec<Document>> {
        match self {
            QueryResult::Documents(docs) => Some(docs),
            QueryResult::Words(_) => None,
        }
    }

    /// The words, if this is a word result.
    pub fn into_words(self) -> Option<Vec<String>> {
        match self {
            QueryResult::Words(words) => Some(words),
            QueryResult::Documents(_) => None,
        }
    }

    /// Number of items in the result.
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Documents(docs) => docs.len(),
            QueryResult::Words(words) => words.len(),
        }
    }

    /// Check whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for index backend implementations.
///
/// The facade holds one implementation chosen at construction; dispatch is
/// static through this trait, there is no runtime capability probing.
pub trait SuggestBackend {
    /// Index a batch of documents, replacing any previous version of each
    /// identifier. Returns the number of documents processed.
    ///
    /// A document missing the identifier field, the score field or any
    /// declared indexed field fails the call; documents already processed
    /// earlier in the batch stay indexed.
    fn index(&mut self, documents: &[Document], request: &IndexRequest) -> Result<usize>;

    /// Remove one document and every posting that references it. Removing
    /// an identifier that was never indexed is a no-op.
    fn remove(&mut self, doc_id: &str) -> Result<()>;

    /// Resolve a prefix term to documents or words. The term is matched
    /// case-insensitively; accent folding is the facade's job and has
    /// already happened by the time a query reaches a backend.
    fn query(&self, term: &str, options: &QueryOptions) -> Result<QueryResult>;

    /// Dump the whole document store as `id -> document`.
    fn documents(&self) -> Result<HashMap<String, Document>>;
}

/// Extract a document's identifier and score per the request.
pub(crate) fn doc_identity(doc: &Document, request: &IndexRequest) -> Result<(String, f64)> {
    let doc_id = doc
        .get_field(&request.id_field)
        .and_then(|v| v.as_key())
        .ok_or_else(|| SuggestiveError::missing_field(&request.id_field, "?"))?;

    let score_value = doc
        .get_field(&request.score_field)
        .ok_or_else(|| SuggestiveError::missing_field(&request.score_field, doc_id.clone()))?;
    let score = score_value
        .as_f64()
        .ok_or_else(|| SuggestiveError::invalid_score(&request.score_field, doc_id.clone()))?;

    Ok((doc_id, score))
}

/// Expand every indexed field of a document into the union of its terms.
///
/// First-seen order across fields; a term the document contributes through
/// two fields appears once, so posting lists never hold a duplicate id.
pub(crate) fn doc_terms(
    doc: &Document,
    doc_id: &str,
    request: &IndexRequest,
) -> Result<Vec<String>> {
    let mut seen = AHashSet::new();
    let mut terms = Vec::new();

    for field in &request.fields {
        let value = doc
            .get_field(field)
            .ok_or_else(|| SuggestiveError::missing_field(field, doc_id))?;
        let text = value.as_text().unwrap_or_default();
        for term in expand(text, request.min_chars) {
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }
    }

    Ok(terms)
}
