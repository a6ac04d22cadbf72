//! Storage abstraction for the networked backend.
//!
//! The engine never talks to a server directly. It speaks to a [`KvStore`],
//! a narrow capability trait covering exactly the operations the index
//! needs: a hash table for document bodies, sorted sets for posting lists,
//! plain sets for the removal cache, and batched submission of writes.
//! Connection management, pipelining transport, timeouts and retries all
//! live behind this trait in the network client, not in the engine.

pub mod memory;

pub use memory::MemoryKvStore;

use crate::error::Result;

/// A single write operation, queued into a batch.
///
/// One engine-level mutation (an `index` call, a `remove` call) submits one
/// batch. Batching is a transport optimization, not a transaction: a store
/// may apply a prefix of the batch and then fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set one field of a hash table.
    HashSet {
        key: String,
        field: String,
        value: String,
    },
    /// Delete one field of a hash table.
    HashDelete { key: String, field: String },
    /// Upsert a member of a sorted set, keyed by member with score as the
    /// ordering key.
    SortedAdd {
        key: String,
        member: String,
        score: f64,
    },
    /// Remove a member from a sorted set.
    SortedRemove { key: String, member: String },
    /// Replace the entire contents of a plain set.
    SetReplace { key: String, members: Vec<String> },
    /// Delete a key outright, whatever its type.
    Delete { key: String },
}

/// Capability trait for the key-value store behind the networked backend.
///
/// Reads are individual calls; writes go through [`KvStore::submit`] as one
/// pipelined batch. Members of a sorted set sharing a score are ordered by
/// the store's native member tie-break, which callers must treat as
/// unspecified.
pub trait KvStore: Send + Sync + std::fmt::Debug {
    /// Read every field/value pair of a hash table. Missing key reads as
    /// empty.
    fn hash_get_all(&self, key: &str) -> Result<Vec<(String, String)>>;

    /// Read the named fields of a hash table, in order. Absent fields come
    /// back as `None`.
    fn hash_get_many(&self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>>;

    /// Read a window of a sorted set, ascending by score, or descending
    /// when `reverse` is set. The window is applied after direction:
    /// `offset` skips from whichever end iteration starts at, `count`
    /// limits the result, `None` meaning unbounded. Missing key reads as
    /// empty.
    fn sorted_range(
        &self,
        key: &str,
        offset: usize,
        count: Option<usize>,
        reverse: bool,
    ) -> Result<Vec<String>>;

    /// Read all members of a plain set. Missing key reads as empty.
    fn set_members(&self, key: &str) -> Result<Vec<String>>;

    /// Apply a batch of writes in one pipelined transmission.
    fn submit(&self, batch: &[Command]) -> Result<()>;
}
