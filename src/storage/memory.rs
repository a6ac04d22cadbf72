//! In-memory key-value store implementation for testing and embedding.

use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;

use crate::error::{Result, SuggestiveError};
use crate::storage::{Command, KvStore};

/// One keyed structure in the store.
#[derive(Debug, Clone)]
enum Entry {
    Hash(AHashMap<String, String>),
    /// Kept sorted by (score, member); member breaks score ties, which is
    /// the same tie-break a redis sorted set uses.
    Sorted(Vec<(String, f64)>),
    Set(AHashSet<String>),
}

impl Entry {
    fn type_name(&self) -> &'static str {
        match self {
            Entry::Hash(_) => "hash",
            Entry::Sorted(_) => "sorted set",
            Entry::Set(_) => "set",
        }
    }
}

/// An in-memory [`KvStore`] implementation.
///
/// Useful for tests and for running the networked backend's logic without a
/// server. Semantics mirror the real store: keys spring into existence on
/// first write, empty structures disappear from the keyspace, and operating
/// on a key with the wrong structure type is an error.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<AHashMap<String, Entry>>,
}

impl MemoryKvStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        MemoryKvStore {
            entries: RwLock::new(AHashMap::new()),
        }
    }

    /// Check whether a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Get the number of live keys.
    pub fn key_count(&self) -> usize {
        self.entries.read().len()
    }

    fn wrong_type(key: &str, found: &Entry, wanted: &str) -> SuggestiveError {
        SuggestiveError::storage(format!(
            "key '{key}' holds a {}, expected a {wanted}",
            found.type_name()
        ))
    }

    fn apply(entries: &mut AHashMap<String, Entry>, command: &Command) -> Result<()> {
        match command {
            Command::HashSet { key, field, value } => {
                let entry = entries
                    .entry(key.clone())
                    .or_insert_with(|| Entry::Hash(AHashMap::new()));
                match entry {
                    Entry::Hash(map) => {
                        map.insert(field.clone(), value.clone());
                        Ok(())
                    }
                    other => Err(Self::wrong_type(key, other, "hash")),
                }
            }
            Command::HashDelete { key, field } => {
                let mut now_empty = false;
                if let Some(entry) = entries.get_mut(key) {
                    match entry {
                        Entry::Hash(map) => {
                            map.remove(field);
                            now_empty = map.is_empty();
                        }
                        other => return Err(Self::wrong_type(key, other, "hash")),
                    }
                }
                if now_empty {
                    entries.remove(key);
                }
                Ok(())
            }
            Command::SortedAdd { key, member, score } => {
                let entry = entries
                    .entry(key.clone())
                    .or_insert_with(|| Entry::Sorted(Vec::new()));
                match entry {
                    Entry::Sorted(members) => {
                        members.retain(|(m, _)| m != member);
                        let position = members
                            .partition_point(|(m, s)| match s.total_cmp(score) {
                                std::cmp::Ordering::Equal => m.as_str() < member.as_str(),
                                ordering => ordering == std::cmp::Ordering::Less,
                            });
                        members.insert(position, (member.clone(), *score));
                        Ok(())
                    }
                    other => Err(Self::wrong_type(key, other, "sorted set")),
                }
            }
            Command::SortedRemove { key, member } => {
                let mut now_empty = false;
                if let Some(entry) = entries.get_mut(key) {
                    match entry {
                        Entry::Sorted(members) => {
                            members.retain(|(m, _)| m != member);
                            now_empty = members.is_empty();
                        }
                        other => return Err(Self::wrong_type(key, other, "sorted set")),
                    }
                }
                if now_empty {
                    entries.remove(key);
                }
                Ok(())
            }
            Command::SetReplace { key, members } => {
                if members.is_empty() {
                    entries.remove(key);
                } else {
                    entries.insert(
                        key.clone(),
                        Entry::Set(members.iter().cloned().collect()),
                    );
                }
                Ok(())
            }
            Command::Delete { key } => {
                entries.remove(key);
                Ok(())
            }
        }
    }
}

impl KvStore for MemoryKvStore {
    fn hash_get_all(&self, key: &str) -> Result<Vec<(String, String)>> {
        let entries = self.entries.read();
        match entries.get(key) {
            None => Ok(Vec::new()),
            Some(Entry::Hash(map)) => {
                Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
            Some(other) => Err(Self::wrong_type(key, other, "hash")),
        }
    }

    fn hash_get_many(&self, key: &str, fields: &[String]) -> Result<Vec<Option<String>>> {
        let entries = self.entries.read();
        match entries.get(key) {
            None => Ok(vec![None; fields.len()]),
            Some(Entry::Hash(map)) => {
                Ok(fields.iter().map(|f| map.get(f).cloned()).collect())
            }
            Some(other) => Err(Self::wrong_type(key, other, "hash")),
        }
    }

    fn sorted_range(
        &self,
        key: &str,
        offset: usize,
        count: Option<usize>,
        reverse: bool,
    ) -> Result<Vec<String>> {
        let entries = self.entries.read();
        let members = match entries.get(key) {
            None => return Ok(Vec::new()),
            Some(Entry::Sorted(members)) => members,
            Some(other) => return Err(Self::wrong_type(key, other, "sorted set")),
        };

        let limit = count.unwrap_or(usize::MAX);
        let window = |iter: &mut dyn Iterator<Item = &(String, f64)>| {
            iter.skip(offset)
                .take(limit)
                .map(|(m, _)| m.clone())
                .collect()
        };

        if reverse {
            Ok(window(&mut members.iter().rev()))
        } else {
            Ok(window(&mut members.iter()))
        }
    }

    fn set_members(&self, key: &str) -> Result<Vec<String>> {
        let entries = self.entries.read();
        match entries.get(key) {
            None => Ok(Vec::new()),
            Some(Entry::Set(members)) => Ok(members.iter().cloned().collect()),
            Some(other) => Err(Self::wrong_type(key, other, "set")),
        }
    }

    fn submit(&self, batch: &[Command]) -> Result<()> {
        let mut entries = self.entries.write();
        for command in batch {
            Self::apply(&mut entries, command)?;
        }
        Ok(())
    }
}
