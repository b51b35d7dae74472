//! Dictionary builder: folds validated records into a [`Lexicon`].
//!
//! Merge rules per index:
//!
//! - symbols: a new key is inserted as-is. A repeated *atomic* key keeps its
//!   phonetics unless they are the missing sentinel and the newcomer has real
//!   ones (upgrade), and appends any new meanings. A *compound* key always
//!   replaces the stored entry outright, even over an atomic symbol.
//! - words: every usable phrase, and every word of its normalized form, gets
//!   a candidate appended; lists are deduplicated by the full triple at the
//!   end, first occurrence wins.
//! - cross-script: forward is last-write-wins; reverse collects every unit
//!   and is sorted and deduplicated at the end.
//!
//! Atomic records are always folded before compound records.

use crate::candidate::TranslationCandidate;
use crate::extract::{extract, Extracted};
use crate::lexicon::{CrossScriptIndex, Lexicon, SymbolEntry, SymbolIndex, WordIndex};
use crate::lexicon::{CrossScriptForward, CrossScriptReverse};
use crate::record::{self, is_usable_phrase, RawRecord, Record, SourceKind, MISSING_PHONETICS};
use crate::{utils, LexicalUnit};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Counters reported after a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Atomic records accepted.
    pub atomic_records: usize,
    /// Compound records accepted.
    pub compound_records: usize,
    /// Records dropped for a missing identifying field.
    pub skipped_records: usize,
    /// Accepted atomic records whose phonetics were blank.
    pub missing_phonetics: usize,
    /// Keys in the symbol index.
    pub symbols: usize,
    /// Keys in the word index.
    pub words: usize,
    /// Keys in the forward cross-script index.
    pub cross_script: usize,
}

/// Builder options.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Log a warning the first time each symbol is seen without phonetics.
    pub warn_missing_phonetics: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            warn_missing_phonetics: true,
        }
    }
}

impl Lexicon {
    /// Validate and fold raw atomic and compound records.
    ///
    /// Records with a blank identifying field are logged and skipped.
    pub fn build(atomic: &[RawRecord], compound: &[RawRecord]) -> Lexicon {
        Self::build_with(atomic, compound, BuildOptions::default())
    }

    pub fn build_with(
        atomic: &[RawRecord],
        compound: &[RawRecord],
        options: BuildOptions,
    ) -> Lexicon {
        let mut skipped = 0;
        let sources = [(SourceKind::Atomic, atomic), (SourceKind::Compound, compound)];
        let mut records = Vec::with_capacity(atomic.len() + compound.len());

        for (kind, raws) in sources {
            for (index, raw) in raws.iter().enumerate() {
                match record::normalize(raw, kind) {
                    Ok(rec) => records.push(rec),
                    Err(reason) => {
                        skipped += 1;
                        warn!(%kind, index, %reason, "skipping vocabulary record");
                    }
                }
            }
            debug!(%kind, count = raws.len(), "normalized source records");
        }

        let mut lexicon = Self::from_records_with(records, options);
        lexicon.stats.skipped_records = skipped;
        log_summary(&lexicon.stats);
        lexicon
    }

    /// Fold already-validated records with default options.
    pub fn from_records<I: IntoIterator<Item = Record>>(records: I) -> Lexicon {
        Self::from_records_with(records, BuildOptions::default())
    }

    /// Fold already-validated records.
    ///
    /// Atomic records are folded before compound records regardless of the
    /// order they arrive in; order within each kind is preserved.
    pub fn from_records_with<I: IntoIterator<Item = Record>>(
        records: I,
        options: BuildOptions,
    ) -> Lexicon {
        let (atomic, compound): (Vec<Record>, Vec<Record>) = records
            .into_iter()
            .partition(|r| r.kind() == SourceKind::Atomic);

        let mut acc = Accumulator::new(options);
        for rec in atomic.iter().chain(compound.iter()) {
            acc.add(extract(rec));
        }
        acc.finish()
    }
}

fn log_summary(stats: &BuildStats) {
    info!(
        atomic = stats.atomic_records,
        compound = stats.compound_records,
        skipped = stats.skipped_records,
        missing_phonetics = stats.missing_phonetics,
        symbols = stats.symbols,
        words = stats.words,
        cross_script = stats.cross_script,
        "built lexicon"
    );
}

/// Build-time state. Never escapes `from_records_with`.
struct Accumulator {
    options: BuildOptions,
    symbols: SymbolIndex,
    words: WordIndex,
    forward: CrossScriptForward,
    reverse: CrossScriptReverse,
    warned: AHashSet<LexicalUnit>,
    stats: BuildStats,
}

impl Accumulator {
    fn new(options: BuildOptions) -> Self {
        Self {
            options,
            symbols: SymbolIndex::new(),
            words: WordIndex::new(),
            forward: CrossScriptForward::new(),
            reverse: CrossScriptReverse::new(),
            warned: AHashSet::new(),
            stats: BuildStats::default(),
        }
    }

    fn add(&mut self, ex: Extracted) {
        match ex.kind {
            SourceKind::Atomic => {
                self.stats.atomic_records += 1;
                self.note_missing_phonetics(&ex);
                self.merge_atomic_symbol(&ex);
            }
            SourceKind::Compound => {
                self.stats.compound_records += 1;
                self.symbols.insert(
                    ex.unit.clone(),
                    SymbolEntry::new(ex.phonetics.clone(), ex.meanings.clone()),
                );
            }
        }
        self.add_words(&ex);
        self.add_cross_script(&ex);
    }

    fn note_missing_phonetics(&mut self, ex: &Extracted) {
        if ex.phonetics != MISSING_PHONETICS {
            return;
        }
        self.stats.missing_phonetics += 1;
        if self.warned.insert(ex.unit.clone()) && self.options.warn_missing_phonetics {
            warn!(
                symbol = %ex.unit,
                placeholder = MISSING_PHONETICS,
                "symbol has no phonetics"
            );
        }
    }

    fn merge_atomic_symbol(&mut self, ex: &Extracted) {
        let Some(entry) = self.symbols.get_mut(ex.unit.as_str()) else {
            self.symbols.insert(
                ex.unit.clone(),
                SymbolEntry::new(ex.phonetics.clone(), ex.meanings.clone()),
            );
            return;
        };

        if entry.phonetics == MISSING_PHONETICS && ex.phonetics != MISSING_PHONETICS {
            entry.phonetics = ex.phonetics.clone();
        }
        for meaning in &ex.meanings {
            if !entry.meanings.contains(meaning) {
                entry.meanings.push(meaning.clone());
            }
        }
    }

    fn add_words(&mut self, ex: &Extracted) {
        for phrase in ex.phrases.iter().filter(|p| is_usable_phrase(p)) {
            let key = utils::normalize_word_key(phrase);
            if key.is_empty() {
                continue;
            }
            let words: Vec<String> = key.split_whitespace().map(str::to_string).collect();
            self.push_word(key, ex);
            for word in words {
                self.push_word(word, ex);
            }
        }
    }

    fn push_word(&mut self, key: String, ex: &Extracted) {
        self.words
            .entry_or_default(key)
            .push(TranslationCandidate::new(
                ex.unit.clone(),
                ex.phonetics.clone(),
                ex.original_meaning.clone(),
            ));
    }

    fn add_cross_script(&mut self, ex: &Extracted) {
        let Some(equivalent) = &ex.cross_script else {
            return;
        };
        self.forward.insert(ex.unit.clone(), equivalent.clone());
        self.reverse
            .entry_or_default(equivalent.clone())
            .push(ex.unit.clone());
    }

    fn finish(mut self) -> Lexicon {
        for candidates in self.words.values_mut() {
            let mut seen = AHashSet::with_capacity(candidates.len());
            candidates.retain(|c| seen.insert(c.clone()));
        }
        for units in self.reverse.values_mut() {
            units.sort();
            units.dedup();
        }

        self.stats.symbols = self.symbols.len();
        self.stats.words = self.words.len();
        self.stats.cross_script = self.forward.len();

        Lexicon {
            symbols: self.symbols,
            words: self.words,
            cross_script: CrossScriptIndex {
                forward: self.forward,
                reverse: self.reverse,
            },
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{atomic_fields as af, compound_fields as cf};

    fn atomic(symbol: &str, meaning: &str, keyword: &str, phonetics: &str) -> RawRecord {
        RawRecord::new()
            .with(af::SYMBOL, symbol)
            .with(af::MEANING, meaning)
            .with(af::KEYWORD, keyword)
            .with(af::PHONETICS, phonetics)
    }

    fn compound(proposed: &str, concept: &str, literal: &str) -> RawRecord {
        RawRecord::new()
            .with(cf::PROPOSED_UNIT, proposed)
            .with(cf::MODERN_CONCEPT, concept)
            .with(cf::LITERAL_MEANING, literal)
    }

    #[test]
    fn phonetics_upgrade_and_meaning_union() {
        let lx = Lexicon::build(
            &[
                atomic("𘞗", "seed", "", ""),
                atomic("𘞗", "grain", "", "xyz1"),
            ],
            &[],
        );
        let entry = lx.symbol("𘞗").unwrap();
        assert_eq!(entry.phonetics, "xyz1");
        assert_eq!(entry.meanings, vec!["seed".to_string(), "grain".to_string()]);
        assert_eq!(lx.stats().missing_phonetics, 1);
    }

    #[test]
    fn real_phonetics_are_not_overwritten_by_later_atomic() {
        let lx = Lexicon::build(
            &[atomic("𘞗", "seed", "", "abc"), atomic("𘞗", "seed", "", "xyz")],
            &[],
        );
        assert_eq!(lx.symbol("𘞗").unwrap().phonetics, "abc");
    }

    #[test]
    fn compound_fully_replaces_atomic_entry() {
        let lx = Lexicon::build(
            &[atomic("𘞗", "seed", "grain", "sjwɨ1")],
            &[compound("𘞗 (p9)", "种子 (kernel)", "kernel")],
        );
        let entry = lx.symbol("𘞗").unwrap();
        assert_eq!(entry.phonetics, "p9");
        assert_eq!(entry.meanings, vec!["kernel".to_string()]);
    }

    #[test]
    fn compound_replacement_ignores_upgrade_rule() {
        let lx = Lexicon::build(
            &[atomic("𘞗", "seed", "", "sjwɨ1")],
            &[compound("𘞗", "kernel", "kernel")],
        );
        let entry = lx.symbol("𘞗").unwrap();
        assert_eq!(entry.phonetics, record::COMPOUND_PHONETICS_NA);
    }

    #[test]
    fn placeholder_meanings_are_excluded() {
        let lx = Lexicon::build(&[atomic("𘞗", "?", "seed", "a")], &[]);
        assert_eq!(lx.symbol("𘞗").unwrap().meanings, vec!["seed".to_string()]);
        assert!(lx.word_candidates("?").is_empty());
    }

    #[test]
    fn word_index_holds_phrase_and_each_word() {
        let lx = Lexicon::build(&[atomic("𘞼", "Sky-River!", "", "a")], &[]);
        assert_eq!(lx.word_candidates("skyriver").len(), 1);

        let lx = Lexicon::build(&[atomic("𘞼", "sky river", "", "a")], &[]);
        assert_eq!(lx.word_candidates("sky river").len(), 1);
        assert_eq!(lx.word_candidates("sky").len(), 1);
        assert_eq!(lx.word_candidates("river").len(), 1);
        assert_eq!(lx.word_candidates("river")[0].original_meaning, "sky river");
    }

    #[test]
    fn identical_triples_are_stored_once() {
        let lx = Lexicon::build(
            &[
                atomic("𘞗", "seed", "seed", "a"),
                atomic("𘞗", "seed", "", "a"),
            ],
            &[],
        );
        assert_eq!(lx.word_candidates("seed").len(), 1);
    }

    #[test]
    fn distinct_triples_keep_insertion_order() {
        let lx = Lexicon::build(
            &[atomic("𘟇", "seed", "", "b"), atomic("𘞗", "seed", "", "a")],
            &[],
        );
        let cands = lx.word_candidates("seed");
        assert_eq!(cands.len(), 2);
        assert_eq!(cands[0].unit.as_str(), "𘟇");
        assert_eq!(cands[1].unit.as_str(), "𘞗");
    }

    #[test]
    fn cross_script_forward_last_write_wins_and_reverse_sorted() {
        let lx = Lexicon::build(
            &[
                atomic("𘟇", "river", "", "a").with(af::CROSS_SCRIPT, "河"),
                atomic("𘞗", "stream", "", "b").with(af::CROSS_SCRIPT, "河"),
                atomic("𘞗", "stream", "", "b").with(af::CROSS_SCRIPT, "溪"),
            ],
            &[compound("𘞗𘟇 (p1)", "流域 (watershed)", "seed river")],
        );
        let cross = lx.cross_script();
        assert_eq!(cross.equivalent("𘞗"), Some("溪"));
        assert_eq!(cross.equivalent("𘞗𘟇"), Some("流域"));
        let units: Vec<&str> = cross.units_for("河").iter().map(|u| u.as_str()).collect();
        assert_eq!(units, vec!["𘞗", "𘟇"]);
        assert_eq!(cross.units_for("流域").len(), 1);
    }

    #[test]
    fn skipped_records_are_counted() {
        let lx = Lexicon::build(
            &[atomic("", "seed", "", "a"), atomic("𘞗", "seed", "", "a")],
            &[compound("", "kernel", "kernel")],
        );
        let stats = lx.stats();
        assert_eq!(stats.skipped_records, 2);
        assert_eq!(stats.atomic_records, 1);
        assert_eq!(stats.compound_records, 0);
        assert_eq!(stats.symbols, 1);
    }

    #[test]
    fn compound_records_arriving_first_are_folded_last() {
        let records = vec![
            record::normalize(&compound("𘞗 (p9)", "kernel", "kernel"), SourceKind::Compound)
                .unwrap(),
            record::normalize(&atomic("𘞗", "seed", "", "a"), SourceKind::Atomic).unwrap(),
        ];
        let lx = Lexicon::from_records(records);
        assert_eq!(lx.symbol("𘞗").unwrap().phonetics, "p9");
    }
}
