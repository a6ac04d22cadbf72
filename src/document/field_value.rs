//! Field value types for documents.
//!
//! This module defines the [`FieldValue`] enum which represents all possible
//! types of values that can be stored in document fields. The set of types is
//! deliberately limited to the scalars that survive a round trip through the
//! JSON interchange format used by the networked backend.
//!
//! # Supported Types
//!
//! - **Text** - String data, the only type indexed for prefix terms
//! - **Integer** - 64-bit signed integers
//! - **Float** - 64-bit floating-point numbers
//! - **Boolean** - true/false values
//! - **Null** - Explicit null values
//!
//! # Serialization
//!
//! The enum is `#[serde(untagged)]` so a document serializes to a flat JSON
//! object with plain scalar values, matching the wire format of existing
//! deployments. Integers and floats stay distinct across a round trip: `25`
//! deserializes back to [`FieldValue::Integer`], never `25.0`.
//!
//! # Examples
//!
//! ```
//! use suggestive::document::field_value::FieldValue;
//!
//! let text_value = FieldValue::Text("hello".to_string());
//! assert_eq!(text_value.as_text(), Some("hello"));
//!
//! let int_value = FieldValue::Integer(42);
//! assert_eq!(int_value.as_f64(), Some(42.0));
//! assert_eq!(int_value.as_key(), Some("42".to_string()));
//! ```

use serde::{Deserialize, Serialize};

/// Represents a value for a field in a document.
///
/// Documents are schema-less; any field may carry any of these types. The
/// engine itself only interprets three roles: the identifier field (via
/// [`FieldValue::as_key`]), the score field (via [`FieldValue::as_f64`]) and
/// text fields selected for indexing (via [`FieldValue::as_text`]).
///
/// # Examples
///
/// ```
/// use suggestive::document::field_value::FieldValue;
///
/// let name = FieldValue::Text("Rust Programming".to_string());
/// let year = FieldValue::Integer(2024);
/// let price = FieldValue::Float(39.99);
/// let active = FieldValue::Boolean(true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
}

impl FieldValue {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a score value. Integers widen to f64; everything else is
    /// not a valid score.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Convert to boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Canonical string form used as a document identifier.
    ///
    /// Identifiers become map keys, hash fields and sorted-set members, so
    /// every scalar is flattened to its textual form. `Null` has no key.
    pub fn as_key(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Null => None,
        }
    }
}
