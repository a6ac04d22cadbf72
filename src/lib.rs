//! # Suggestive
//!
//! A prefix-autocomplete indexing engine for Rust.
//!
//! ## Features
//!
//! - Prefix term expansion with accent folding
//! - Score-ordered posting lists with pushed-down pagination
//! - Incremental reindexing that never leaks stale postings
//! - Literal word suggestions preserving original casing
//! - Pluggable storage backends (in-process or networked key-value)

pub mod analysis;
pub mod backend;
pub mod document;
pub mod error;
pub mod storage;
pub mod suggest;

pub use suggest::Suggestive;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
