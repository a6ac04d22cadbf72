//! Text analysis module for Suggestive.
//!
//! This module provides the text transformations behind the index: accent
//! folding, prefix term expansion, and literal word extraction.

pub mod expand;
pub mod normalize;
pub mod words;

// Re-export commonly used functions
pub use expand::{expand, expand_default};
pub use normalize::fold;
pub use words::find_words;
