//! Translation candidates and the deterministic ranker.
//!
//! This module provides:
//! - `TranslationCandidate`: one unit offered for a looked-up key
//! - `rank`: the fixed `(unit, phonetics)` ordering
//! - `CandidateSet`: the ranked candidates for one key plus its primary pick

use crate::LexicalUnit;
use serde::{Deserialize, Serialize};

/// Unit shown in place of an unknown word's translation.
pub const UNKNOWN_UNIT: &str = "<?>";
/// Phonetics shown in place of an unknown word's pronunciation.
pub const UNKNOWN_WORD_PHONETICS: &str = "<?ph?>";

/// A unit offered as the translation of a word-index or cross-script key.
///
/// Equality and hashing cover the full `(unit, phonetics, original_meaning)`
/// triple; that triple is the dedup key in the word index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationCandidate {
    pub unit: LexicalUnit,
    pub phonetics: String,
    pub original_meaning: String,
}

impl TranslationCandidate {
    pub fn new<U, P, M>(unit: U, phonetics: P, original_meaning: M) -> Self
    where
        U: Into<LexicalUnit>,
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            unit: unit.into(),
            phonetics: phonetics.into(),
            original_meaning: original_meaning.into(),
        }
    }

    /// The placeholder returned for a key with no index entry.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_UNIT, UNKNOWN_WORD_PHONETICS, "")
    }
}

/// Sort candidates by `(unit, phonetics)` ascending.
///
/// The sort is stable, so candidates equal on both fields keep their
/// insertion order.
pub fn rank(candidates: &[TranslationCandidate]) -> Vec<TranslationCandidate> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| {
        a.unit
            .cmp(&b.unit)
            .then_with(|| a.phonetics.cmp(&b.phonetics))
    });
    ranked
}

/// Ranked candidates for one lookup key.
///
/// Never empty: an unknown key holds exactly one [`TranslationCandidate::unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateSet {
    pub key: String,
    pub known: bool,
    candidates: Vec<TranslationCandidate>,
}

impl CandidateSet {
    /// Rank `candidates` for `key`; an empty slice yields the unknown set.
    pub fn ranked<K: Into<String>>(key: K, candidates: &[TranslationCandidate]) -> Self {
        if candidates.is_empty() {
            return Self::unknown(key);
        }
        Self {
            key: key.into(),
            known: true,
            candidates: rank(candidates),
        }
    }

    pub fn unknown<K: Into<String>>(key: K) -> Self {
        Self {
            key: key.into(),
            known: false,
            candidates: vec![TranslationCandidate::unknown()],
        }
    }

    /// All candidates, best first.
    pub fn candidates(&self) -> &[TranslationCandidate] {
        &self.candidates
    }

    /// The candidate used for combined rendering: the first after ranking.
    pub fn primary(&self) -> &TranslationCandidate {
        // Constructors guarantee at least one element.
        &self.candidates[0]
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
