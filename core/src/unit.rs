//! `LexicalUnit`: one or more symbols matched as a single vocabulary key.
//!
//! Units are stored as UTF-8 but every length and offset exposed here counts
//! Unicode scalar values. Tangut lives above the BMP, so a byte or UTF-16
//! length would be wrong for every symbol.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An ordered, non-empty sequence of Unicode scalar values.
///
/// Ordering is lexicographic over the scalar sequence; for UTF-8 this is the
/// same as byte ordering, so the derived `Ord` on the inner string is exact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LexicalUnit(String);

impl LexicalUnit {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in scalar values.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the symbols of this unit.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl Borrow<str> for LexicalUnit {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LexicalUnit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LexicalUnit {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LexicalUnit {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for LexicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
