//! Term expansion: prefix generation for index keys.

use ahash::AHashSet;

use crate::analysis::normalize::fold;

/// Expand a text field into the ordered, deduplicated sequence of prefix
/// terms that index it.
///
/// The text is folded to lowercase accent-free form, split on whitespace,
/// and every word contributes each of its prefixes from `min_chars`
/// characters up to the full word. A term already emitted for an earlier
/// word in the same call is not repeated, so the output order is first-seen.
///
/// Words shorter than `min_chars` contribute nothing; empty text yields an
/// empty sequence.
///
/// # Examples
///
/// ```
/// use suggestive::analysis::expand::expand;
///
/// assert_eq!(
///     expand("Lincoln", 1),
///     vec!["l", "li", "lin", "linc", "linco", "lincol", "lincoln"]
/// );
/// ```
pub fn expand(text: &str, min_chars: usize) -> Vec<String> {
    let folded = fold(text);
    let mut seen = AHashSet::new();
    let mut terms = Vec::new();

    // An empty string is not a usable index key, so a zero minimum still
    // starts at one character.
    let min_chars = min_chars.max(1);

    for word in folded.split_whitespace() {
        let char_count = word.chars().count();
        for len in min_chars..=char_count {
            // Prefixes are taken on char boundaries, never byte offsets.
            let end = word
                .char_indices()
                .nth(len)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            let term = &word[..end];
            if seen.insert(term.to_string()) {
                terms.push(term.to_string());
            }
        }
    }

    terms
}

/// Expand with the default minimum prefix length of one character.
pub fn expand_default(text: &str) -> Vec<String> {
    expand(text, 1)
}
