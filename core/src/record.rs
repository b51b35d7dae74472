//! Raw vocabulary records and the normalizer that validates them.
//!
//! Sources arrive as untyped field maps. `normalize` turns each one into a
//! tagged [`Record`] at the ingestion boundary so the extractor and builder
//! never check field presence again.

use crate::utils;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stored in place of a blank atomic `Phonetics` field.
pub const MISSING_PHONETICS: &str = "<?MISSING_PHONETICS?>";
/// Stored when a compound's proposed-unit field carries no phonetic group.
pub const COMPOUND_PHONETICS_NA: &str = "<?COMPOUND_PHONETICS_N/A?>";
/// Meaning placeholder used by the vocabulary lists for "unknown".
pub const PLACEHOLDER_MEANING: &str = "?";

/// Field names of atomic records.
pub mod atomic_fields {
    pub const SYMBOL: &str = "Character";
    pub const MEANING: &str = "Meaning";
    pub const KEYWORD: &str = "Keyword";
    pub const PHONETICS: &str = "Phonetics";
    pub const CROSS_SCRIPT: &str = "Chinese";
}

/// Field names of compound records.
pub mod compound_fields {
    pub const MODERN_CONCEPT: &str = "Modern Concept";
    pub const PROPOSED_UNIT: &str = "Proposed Tangut";
    pub const LITERAL_MEANING: &str = "Literal Meaning";
}

/// One record as read from a source: field name -> text.
///
/// Absent fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, String>);

impl RawRecord {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style field setter, mostly for tests and fixtures.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    /// Field text, or `""` when the field is absent.
    pub fn field(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Which schema a source follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Atomic,
    Compound,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Atomic => f.write_str("atomic"),
            SourceKind::Compound => f.write_str("compound"),
        }
    }
}

/// A single-symbol vocabulary entry with trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicRecord {
    pub symbol: String,
    pub meaning: String,
    pub keyword: String,
    /// Never empty: blank source values become [`MISSING_PHONETICS`].
    pub phonetics: String,
    pub cross_script: String,
}

/// A multi-symbol entry synthesized from a modern concept.
///
/// The two composite fields are kept verbatim (trimmed); splitting them is
/// the extractor's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRecord {
    pub modern_concept: String,
    pub proposed_unit: String,
    pub literal_meaning: String,
}

/// A validated record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Atomic(AtomicRecord),
    Compound(CompoundRecord),
}

impl Record {
    pub fn kind(&self) -> SourceKind {
        match self {
            Record::Atomic(_) => SourceKind::Atomic,
            Record::Compound(_) => SourceKind::Compound,
        }
    }
}

/// Why a raw record was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("missing '{}' field", atomic_fields::SYMBOL)]
    MissingSymbol,
    #[error("missing '{}' field", compound_fields::PROPOSED_UNIT)]
    MissingCompoundUnit,
}

/// Validate one raw record against its schema.
///
/// Returns `Err(SkipReason)` when the identifying field (the symbol for
/// atomic records, the proposed unit for compound records) is blank. Callers
/// log the skip and keep going.
pub fn normalize(raw: &RawRecord, kind: SourceKind) -> Result<Record, SkipReason> {
    match kind {
        SourceKind::Atomic => {
            let symbol = utils::normalize(raw.field(atomic_fields::SYMBOL));
            if symbol.is_empty() {
                return Err(SkipReason::MissingSymbol);
            }
            let mut phonetics = utils::normalize(raw.field(atomic_fields::PHONETICS));
            if phonetics.is_empty() {
                phonetics = MISSING_PHONETICS.to_string();
            }
            Ok(Record::Atomic(AtomicRecord {
                symbol,
                meaning: utils::normalize(raw.field(atomic_fields::MEANING)),
                keyword: utils::normalize(raw.field(atomic_fields::KEYWORD)),
                phonetics,
                cross_script: utils::normalize(raw.field(atomic_fields::CROSS_SCRIPT)),
            }))
        }
        SourceKind::Compound => {
            let proposed_unit = utils::normalize(raw.field(compound_fields::PROPOSED_UNIT));
            if proposed_unit.is_empty() {
                return Err(SkipReason::MissingCompoundUnit);
            }
            Ok(Record::Compound(CompoundRecord {
                modern_concept: utils::normalize(raw.field(compound_fields::MODERN_CONCEPT)),
                proposed_unit,
                literal_meaning: utils::normalize(raw.field(compound_fields::LITERAL_MEANING)),
            }))
        }
    }
}

/// True for a phrase that may be stored as a meaning or word-index source.
pub fn is_usable_phrase(phrase: &str) -> bool {
    !phrase.is_empty() && phrase != PLACEHOLDER_MEANING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atomic(symbol: &str, meaning: &str, phonetics: &str) -> RawRecord {
        RawRecord::new()
            .with(atomic_fields::SYMBOL, symbol)
            .with(atomic_fields::MEANING, meaning)
            .with(atomic_fields::PHONETICS, phonetics)
    }

    #[test]
    fn atomic_fields_are_trimmed() {
        let raw = atomic("  𘞗 ", " seed  ", " sjwɨ1 ").with(atomic_fields::KEYWORD, " grain ");
        let rec = normalize(&raw, SourceKind::Atomic).unwrap();
        match rec {
            Record::Atomic(a) => {
                assert_eq!(a.symbol, "𘞗");
                assert_eq!(a.meaning, "seed");
                assert_eq!(a.keyword, "grain");
                assert_eq!(a.phonetics, "sjwɨ1");
                assert_eq!(a.cross_script, "");
            }
            other => panic!("expected atomic record, got {:?}", other),
        }
    }

    #[test]
    fn blank_phonetics_become_sentinel() {
        let rec = normalize(&atomic("𘞗", "seed", "   "), SourceKind::Atomic).unwrap();
        let Record::Atomic(a) = rec else {
            panic!("expected atomic record");
        };
        assert_eq!(a.phonetics, MISSING_PHONETICS);
    }

    #[test]
    fn blank_symbol_is_skipped() {
        let err = normalize(&atomic("  ", "seed", "x"), SourceKind::Atomic).unwrap_err();
        assert_eq!(err, SkipReason::MissingSymbol);
        let err = normalize(&RawRecord::new(), SourceKind::Atomic).unwrap_err();
        assert_eq!(err, SkipReason::MissingSymbol);
    }

    #[test]
    fn compound_requires_proposed_unit() {
        let raw = RawRecord::new()
            .with(compound_fields::MODERN_CONCEPT, "watershed")
            .with(compound_fields::LITERAL_MEANING, "seed river");
        assert_eq!(
            normalize(&raw, SourceKind::Compound).unwrap_err(),
            SkipReason::MissingCompoundUnit
        );

        let raw = raw.with(compound_fields::PROPOSED_UNIT, " 𘞗𘟇 (p1) ");
        let Record::Compound(c) = normalize(&raw, SourceKind::Compound).unwrap() else {
            panic!("expected compound record");
        };
        assert_eq!(c.proposed_unit, "𘞗𘟇 (p1)");
        assert_eq!(c.literal_meaning, "seed river");
    }

    #[test]
    fn placeholder_meaning_is_not_usable() {
        assert!(!is_usable_phrase("?"));
        assert!(!is_usable_phrase(""));
        assert!(is_usable_phrase("seed"));
    }
}
