//! Accent folding and case normalization.
//!
//! Index terms and incoming query prefixes must pass through the exact same
//! folding function, otherwise prefix matching silently breaks for accented
//! input: a document indexed under `lincoln` would never match a query typed
//! as `Líncóln`. [`fold`] is that single function; the term expander applies
//! it to field values and the facade applies it to query terms.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold text to its canonical lowercase, accent-free form.
///
/// Decomposes to NFD, drops combining marks, and lowercases. Deterministic:
/// equal inputs always yield equal outputs.
///
/// # Examples
///
/// ```
/// use suggestive::analysis::normalize::fold;
///
/// assert_eq!(fold("Líncóln"), "lincoln");
/// assert_eq!(fold("Fafá de Belém"), "fafa de belem");
/// ```
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
