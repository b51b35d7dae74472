// core/src/engine.rs
//
// Translator: the four lookup directions over a shared, immutable Lexicon.
// Segmentation handles the symbol-keyed and Chinese-keyed directions; the
// English direction is a per-token word-index lookup. Every result is a plain
// value handed to the renderer, with misses represented as unknown entries.

use crate::candidate::{CandidateSet, TranslationCandidate};
use crate::lexicon::Lexicon;
use crate::record::MISSING_PHONETICS;
use crate::segment::segment;
use crate::utils;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Phonetics reported for a symbol with no index entry.
pub const UNKNOWN_SYMBOL_PHONETICS: &str = "<?>";
/// Equivalent reported for a symbol with no Chinese mapping.
pub const UNKNOWN_EQUIVALENT: &str = "<?>";

/// One segment of a symbol -> English translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSpan {
    pub text: String,
    pub start: usize,
    pub matched: bool,
    pub phonetics: String,
    pub meanings: Vec<String>,
}

/// Symbol -> English result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTranslation {
    pub spans: Vec<SymbolSpan>,
    /// Sorted union of the meanings of all matched spans.
    pub combined_meanings: Vec<String>,
    /// Space-joined phonetics of every span.
    pub combined_phonetics: String,
}

/// One segment of a symbol -> Chinese translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossScriptSpan {
    pub text: String,
    pub start: usize,
    pub matched: bool,
    pub equivalent: String,
}

/// Symbol -> Chinese result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossScriptTranslation {
    pub spans: Vec<CrossScriptSpan>,
    pub combined: String,
}

/// English or Chinese -> symbol result: ranked candidates per token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitTranslation {
    pub tokens: Vec<CandidateSet>,
    /// Concatenated primary units.
    pub combined_units: String,
    /// Space-joined primary phonetics.
    pub combined_phonetics: String,
}

impl UnitTranslation {
    fn from_tokens(tokens: Vec<CandidateSet>) -> Self {
        let combined_units = tokens
            .iter()
            .map(|t| t.primary().unit.as_str())
            .collect::<String>();
        let combined_phonetics = tokens
            .iter()
            .map(|t| t.primary().phonetics.as_str())
            .collect::<Vec<&str>>()
            .join(" ");
        Self {
            tokens,
            combined_units,
            combined_phonetics,
        }
    }
}

/// Read-only translator over a shared lexicon.
///
/// Cloning is cheap and clones share the same indexes.
#[derive(Debug, Clone)]
pub struct Translator {
    lexicon: Arc<Lexicon>,
}

impl Translator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Symbols -> English, longest match first.
    pub fn translate_symbols(&self, text: &str) -> SymbolTranslation {
        let spans: Vec<SymbolSpan> = segment(text, self.lexicon.symbols())
            .into_iter()
            .map(|span| match span.value {
                Some(entry) => SymbolSpan {
                    text: span.text.to_string(),
                    start: span.start,
                    matched: true,
                    phonetics: entry.phonetics.clone(),
                    meanings: entry.meanings.clone(),
                },
                None => SymbolSpan {
                    text: span.text.to_string(),
                    start: span.start,
                    matched: false,
                    phonetics: UNKNOWN_SYMBOL_PHONETICS.to_string(),
                    meanings: Vec::new(),
                },
            })
            .collect();

        let combined_meanings: BTreeSet<&String> =
            spans.iter().flat_map(|s| s.meanings.iter()).collect();
        let combined_meanings = combined_meanings.into_iter().cloned().collect();
        let combined_phonetics = spans
            .iter()
            .map(|s| s.phonetics.as_str())
            .collect::<Vec<&str>>()
            .join(" ");

        SymbolTranslation {
            spans,
            combined_meanings,
            combined_phonetics,
        }
    }

    /// English -> symbols, one ranked candidate set per input word.
    pub fn translate_words(&self, text: &str) -> UnitTranslation {
        let normalized = utils::normalize_word_key(text);
        let tokens = normalized
            .split_whitespace()
            .map(|word| CandidateSet::ranked(word, self.lexicon.word_candidates(word)))
            .collect();
        UnitTranslation::from_tokens(tokens)
    }

    /// Ranked candidates for a whole phrase, normalized the same way the
    /// word index keys are.
    pub fn lookup_word(&self, phrase: &str) -> CandidateSet {
        let key = utils::normalize_word_key(phrase);
        CandidateSet::ranked(key.as_str(), self.lexicon.word_candidates(&key))
    }

    /// Symbols -> Chinese, longest match first.
    pub fn translate_to_cross_script(&self, text: &str) -> CrossScriptTranslation {
        let spans: Vec<CrossScriptSpan> = segment(text, self.lexicon.cross_script().forward())
            .into_iter()
            .map(|span| CrossScriptSpan {
                text: span.text.to_string(),
                start: span.start,
                matched: span.is_match(),
                equivalent: span
                    .value
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_EQUIVALENT.to_string()),
            })
            .collect();
        let combined = spans.iter().map(|s| s.equivalent.as_str()).collect();
        CrossScriptTranslation { spans, combined }
    }

    /// Chinese -> symbols. Input is segmented against the Chinese keys of the
    /// reverse index; unmatched whitespace is dropped, any other unmatched
    /// scalar becomes an unknown token.
    pub fn translate_from_cross_script(&self, text: &str) -> UnitTranslation {
        let lexicon = &self.lexicon;
        let tokens = segment(text, lexicon.cross_script().reverse())
            .into_iter()
            .filter(|span| span.is_match() || !span.text.chars().all(char::is_whitespace))
            .map(|span| match span.value {
                Some(units) => {
                    let candidates: Vec<TranslationCandidate> = units
                        .iter()
                        .map(|unit| {
                            let phonetics = lexicon
                                .symbol(unit.as_str())
                                .map(|e| e.phonetics.as_str())
                                .unwrap_or(MISSING_PHONETICS);
                            TranslationCandidate::new(unit.clone(), phonetics, span.text)
                        })
                        .collect();
                    CandidateSet::ranked(span.text, &candidates)
                }
                None => CandidateSet::unknown(span.text),
            })
            .collect();
        UnitTranslation::from_tokens(tokens)
    }
}
