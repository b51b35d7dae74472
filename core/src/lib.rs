//! libtangut-core
//!
//! Lexical dictionary engine for translating between Tangut, English and
//! Chinese by pure substitution. No grammar, no context: vocabulary records
//! are merged into lookup indexes and input text is segmented against them,
//! longest match first, so compounds win over their constituent symbols.
//!
//! Pipeline: raw records -> `record::normalize` -> `extract::extract` ->
//! `Lexicon` (builder) -> `segment` / word lookup -> `candidate::rank`.
//!
//! Public API:
//! - `RawRecord`, `Record`, `SourceKind` - vocabulary records
//! - `Lexicon` - the four immutable indexes, built once per process
//! - `Translator` - the four lookup directions over a shared `Lexicon`
//! - `segment` - generic longest-match segmentation over any `SpanIndex`
//! - `TranslationCandidate`, `CandidateSet` - ranked lookup results
//! - `Config` - source paths and output options (TOML)
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod error;
pub use error::{LexError, Result};

pub mod unit;
pub use unit::LexicalUnit;

pub mod record;
pub use record::{AtomicRecord, CompoundRecord, RawRecord, Record, SkipReason, SourceKind};
pub use record::{COMPOUND_PHONETICS_NA, MISSING_PHONETICS};

pub mod extract;
pub use extract::{split_modern_concept, split_proposed_unit, ConceptParts, Extracted};

pub mod lexicon;
pub use lexicon::{CrossScriptIndex, KeyedIndex, Lexicon, SymbolEntry, SymbolIndex, WordIndex};

pub mod builder;
pub use builder::{BuildOptions, BuildStats};

pub mod segment;
pub use segment::{Span, SpanIndex};

pub mod candidate;
pub use candidate::{rank, CandidateSet, TranslationCandidate};
pub use candidate::{UNKNOWN_UNIT, UNKNOWN_WORD_PHONETICS};

pub mod engine;
pub use engine::{
    CrossScriptSpan, CrossScriptTranslation, SymbolSpan, SymbolTranslation, Translator,
    UnitTranslation, UNKNOWN_EQUIVALENT, UNKNOWN_SYMBOL_PHONETICS,
};

pub mod source;
pub use source::{load_records, load_sources, Sources};

/// Runtime configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// JSON array of single-symbol records.
    pub atomic_vocab: PathBuf,
    /// JSON array of compound records.
    pub compound_vocab: PathBuf,

    /// Show every ranked candidate per word instead of only the primary one.
    pub list_all_candidates: bool,

    /// Warn once per symbol whose phonetics are missing from the source.
    pub warn_missing_phonetics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            atomic_vocab: PathBuf::from("data/tangut_learning_data.txt"),
            compound_vocab: PathBuf::from("data/tangut_compounds.json"),
            list_all_candidates: true,
            warn_missing_phonetics: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LexError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| LexError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder options derived from this config.
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            warn_missing_phonetics: self.warn_missing_phonetics,
        }
    }
}

/// Utility helpers.
pub mod utils {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static NON_WORD_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid non-word regex"));

    /// Trim a record field. The text itself is kept scalar-for-scalar:
    /// symbol and Chinese keys must match input copied from the source.
    pub fn normalize(s: &str) -> String {
        s.trim().to_string()
    }

    /// Normalize an English word or phrase into a word-index key: drop every
    /// character that is neither a word character nor whitespace, lowercase,
    /// then compose (NFC). Index keys and lookup input both go through here,
    /// so `cafe\u{301}` and `café` meet on the same key.
    ///
    /// # Example
    /// ```
    /// use libtangut_core::utils::normalize_word_key;
    ///
    /// assert_eq!(normalize_word_key("Sky-River!"), "skyriver");
    /// assert_eq!(normalize_word_key("the Moon's light"), "the moons light");
    /// ```
    pub fn normalize_word_key(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        NON_WORD_RE
            .replace_all(s, "")
            .to_lowercase()
            .nfc()
            .collect()
    }
}
