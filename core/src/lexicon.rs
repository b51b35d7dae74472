//! The four lookup indexes and the `Lexicon` that owns them.
//!
//! All indexes share one representation, [`KeyedIndex`]: a hash map plus the
//! longest key length seen (in scalar values), which is what the
//! segmentation engine needs to bound its probes.
//!
//! Indexes are filled only by the builder (`crate::builder`). Everything
//! public here is read-only, so a built `Lexicon` can be shared freely,
//! typically behind an `Arc`.

use crate::builder::BuildStats;
use crate::candidate::TranslationCandidate;
use crate::segment::SpanIndex;
use crate::LexicalUnit;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::Hash;

/// Value stored per symbol key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub phonetics: String,
    /// Insertion-ordered, distinct, never contains `"?"` or blanks.
    pub meanings: Vec<String>,
}

impl SymbolEntry {
    pub fn new<P: Into<String>>(phonetics: P, meanings: Vec<String>) -> Self {
        Self {
            phonetics: phonetics.into(),
            meanings,
        }
    }
}

/// Hash map keyed by text, tracking the maximum key length in scalars.
#[derive(Debug, Clone)]
pub struct KeyedIndex<K, V> {
    map: AHashMap<K, V>,
    max_key_len: usize,
}

impl<K, V> Default for KeyedIndex<K, V> {
    fn default() -> Self {
        Self {
            map: AHashMap::new(),
            max_key_len: 0,
        }
    }
}

impl<K, V> KeyedIndex<K, V>
where
    K: Borrow<str> + Hash + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Longest key, in scalar values. Zero for an empty index.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries sorted by key, for stable dumps and reports.
    pub fn sorted_entries(&self) -> Vec<(&K, &V)>
    where
        K: Ord,
    {
        let mut entries: Vec<(&K, &V)> = self.map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Insert or replace the value for `key`.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        let len = key.borrow().chars().count();
        self.max_key_len = self.max_key_len.max(len);
        self.map.insert(key, value);
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.map.get_mut(key)
    }

    /// Mutable access to the value for `key`, inserting `V::default()` first.
    pub(crate) fn entry_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let len = key.borrow().chars().count();
        self.max_key_len = self.max_key_len.max(len);
        self.map.entry(key).or_default()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.map.values_mut()
    }
}

impl<K, V> SpanIndex for KeyedIndex<K, V>
where
    K: Borrow<str> + Hash + Eq,
{
    type Value = V;

    fn lookup(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn max_key_len(&self) -> usize {
        self.max_key_len
    }
}

/// Symbol (or compound) -> phonetics and meanings.
pub type SymbolIndex = KeyedIndex<LexicalUnit, SymbolEntry>;

/// Normalized English word or phrase -> translation candidates.
pub type WordIndex = KeyedIndex<String, Vec<TranslationCandidate>>;

/// Symbol (or compound) -> Chinese equivalent.
pub type CrossScriptForward = KeyedIndex<LexicalUnit, String>;

/// Chinese equivalent -> sorted, distinct units.
pub type CrossScriptReverse = KeyedIndex<String, Vec<LexicalUnit>>;

/// Both directions of the Chinese mapping.
#[derive(Debug, Clone, Default)]
pub struct CrossScriptIndex {
    pub(crate) forward: CrossScriptForward,
    pub(crate) reverse: CrossScriptReverse,
}

impl CrossScriptIndex {
    pub fn forward(&self) -> &CrossScriptForward {
        &self.forward
    }

    pub fn reverse(&self) -> &CrossScriptReverse {
        &self.reverse
    }

    /// Chinese equivalent of a unit.
    pub fn equivalent(&self, unit: &str) -> Option<&str> {
        self.forward.get(unit).map(String::as_str)
    }

    /// Units sharing a Chinese equivalent, sorted.
    pub fn units_for(&self, equivalent: &str) -> &[LexicalUnit] {
        self.reverse.get(equivalent).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The complete, immutable set of indexes built from all sources.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub(crate) symbols: SymbolIndex,
    pub(crate) words: WordIndex,
    pub(crate) cross_script: CrossScriptIndex,
    pub(crate) stats: BuildStats,
}

impl Lexicon {
    pub fn symbols(&self) -> &SymbolIndex {
        &self.symbols
    }

    pub fn words(&self) -> &WordIndex {
        &self.words
    }

    pub fn cross_script(&self) -> &CrossScriptIndex {
        &self.cross_script
    }

    /// Counters gathered while building.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Entry for an exact symbol or compound key.
    pub fn symbol(&self, unit: &str) -> Option<&SymbolEntry> {
        self.symbols.get(unit)
    }

    /// Unranked candidates for an already-normalized word key.
    pub fn word_candidates(&self, key: &str) -> &[TranslationCandidate] {
        self.words.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}
