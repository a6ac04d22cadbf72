//! Wire key naming for the networked backend.

/// Builds the store keys for one collection namespace.
///
/// The layout is interop-critical: existing deployments already hold data
/// under these exact keys, so the format must be preserved bit for bit.
///
/// - `<ns>:d` — hash table of document bodies, keyed by document id
/// - `<ns>:d:<term>` — sorted set of ids posting for a term
/// - `<ns>:dt:<id>` — set of terms a document currently contributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    namespace: String,
}

/// Namespace literal shared with existing deployments.
pub const DEFAULT_NAMESPACE: &str = "suggestive";

impl KeySpace {
    /// Create a key space for a namespace.
    pub fn new<S: Into<String>>(namespace: S) -> Self {
        KeySpace {
            namespace: namespace.into(),
        }
    }

    /// The namespace this key space serves.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key of the document-body hash table.
    pub fn docs(&self) -> String {
        format!("{}:d", self.namespace)
    }

    /// Key of a term's posting sorted set.
    pub fn term(&self, term: &str) -> String {
        format!("{}:d:{}", self.namespace, term)
    }

    /// Key of a document's removal-cache set.
    pub fn cache(&self, doc_id: &str) -> String {
        format!("{}:dt:{}", self.namespace, doc_id)
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        KeySpace::new(DEFAULT_NAMESPACE)
    }
}
