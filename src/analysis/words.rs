//! Word matching: literal completions extracted from document bodies.
//!
//! The term expander stores folded, lowercase prefixes; those make good
//! index keys but poor suggestions to show a human. This module walks the
//! original document text instead and pulls out the actual words that start
//! with a prefix, casing and accents intact.

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::Document;

lazy_static! {
    /// Word-boundary tokens: Unicode word characters plus hyphen, so
    /// "Passion-Fruit" stays one word.
    static ref WORD_PATTERN: Regex = Regex::new(r"[\w-]+").unwrap();
}

/// Find every word in `doc`'s text fields whose lowercase form starts with
/// the lowercase form of `prefix`.
///
/// Non-text fields are skipped. Matching is case-insensitive but NOT
/// accent-folding: the comparison happens on the words as written, so an
/// accented letter inside the prefix range blocks the match. Output keeps
/// original casing and accents, deduplicated in first-seen order. Fields are
/// scanned in lexicographic name order to keep the output deterministic.
pub fn find_words(doc: &Document, prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    let mut words = Vec::new();

    let mut names: Vec<&str> = doc.field_names();
    names.sort_unstable();

    for name in names {
        let Some(text) = doc.get_field(name).and_then(|v| v.as_text()) else {
            continue;
        };
        for token in WORD_PATTERN.find_iter(text) {
            let word = token.as_str();
            if word.to_lowercase().starts_with(&prefix) && !words.iter().any(|w| w == word) {
                words.push(word.to_string());
            }
        }
    }

    words
}
