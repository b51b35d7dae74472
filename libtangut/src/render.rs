//! Plain-text reports.
//!
//! Each report lists the per-span or per-word details first, then a
//! "Combined" block built from the primary candidates.

use crate::{Direction, Translation};
use libtangut_core::{
    BuildStats, CandidateSet, CrossScriptTranslation, SymbolTranslation, UnitTranslation,
};
use std::fmt::Write;

const RULE: &str = "---------------------------------------------------";
const COMBINED_RULE: &str = "-------------------------------";

/// Rendering switches.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// List every ranked candidate, not just the primary one.
    pub list_all_candidates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_all_candidates: true,
        }
    }
}

impl From<&libtangut_core::Config> for RenderOptions {
    fn from(cfg: &libtangut_core::Config) -> Self {
        Self {
            list_all_candidates: cfg.list_all_candidates,
        }
    }
}

/// Render any translation result.
pub fn render(direction: Direction, translation: &Translation, opts: RenderOptions) -> String {
    match translation {
        Translation::Meanings(t) => render_meanings(direction, t),
        Translation::Units(t) => render_units(direction, t, opts),
        Translation::Equivalents(t) => render_equivalents(direction, t),
    }
}

fn header(out: &mut String, direction: Direction) {
    let _ = writeln!(out, "--- Word-by-Word Translation ({}) ---", direction.label());
}

fn footer(out: &mut String) {
    let _ = writeln!(out, "{RULE}\n");
    let _ = writeln!(out, "--- Combined Phrase Details ---");
}

pub fn render_meanings(direction: Direction, t: &SymbolTranslation) -> String {
    let mut out = String::new();
    header(&mut out, direction);
    for span in &t.spans {
        if !span.matched {
            let _ = writeln!(out, "'{}': UNKNOWN CHARACTER", span.text);
        } else if span.meanings.is_empty() {
            let _ = writeln!(out, "'{}' ({}): No meaning found", span.text, span.phonetics);
        } else {
            let _ = writeln!(
                out,
                "'{}' ({}): {}",
                span.text,
                span.phonetics,
                span.meanings.join(", ")
            );
        }
    }
    footer(&mut out);
    let _ = writeln!(out, "Combined Meanings: {}", t.combined_meanings.join(", "));
    let _ = writeln!(out, "Combined Pronunciation: {}", t.combined_phonetics);
    let _ = writeln!(out, "{COMBINED_RULE}");
    out
}

fn render_candidate_set(set: &CandidateSet, opts: RenderOptions) -> String {
    if !set.known {
        return format!("'{}': UNKNOWN WORD", set.key);
    }
    let shown = if opts.list_all_candidates {
        set.candidates()
    } else {
        &set.candidates()[..1]
    };
    let options: Vec<String> = shown
        .iter()
        .map(|c| {
            format!(
                "'{}' ({}) [from: '{}']",
                c.unit, c.phonetics, c.original_meaning
            )
        })
        .collect();
    format!("'{}': {}", set.key, options.join("; "))
}

pub fn render_units(direction: Direction, t: &UnitTranslation, opts: RenderOptions) -> String {
    let mut out = String::new();
    header(&mut out, direction);
    for set in &t.tokens {
        let _ = writeln!(out, "{}", render_candidate_set(set, opts));
    }
    footer(&mut out);
    let _ = writeln!(out, "Combined Tangut Phrase: {}", t.combined_units);
    let _ = writeln!(out, "Combined Pronunciation: {}", t.combined_phonetics);
    let _ = writeln!(out, "{COMBINED_RULE}");
    out
}

pub fn render_equivalents(direction: Direction, t: &CrossScriptTranslation) -> String {
    let mut out = String::new();
    header(&mut out, direction);
    for span in &t.spans {
        if span.matched {
            let _ = writeln!(out, "'{}': {}", span.text, span.equivalent);
        } else {
            let _ = writeln!(out, "'{}': UNKNOWN CHARACTER", span.text);
        }
    }
    footer(&mut out);
    let _ = writeln!(out, "Combined Chinese Phrase: {}", t.combined);
    let _ = writeln!(out, "{COMBINED_RULE}");
    out
}

/// One-paragraph load summary.
pub fn render_stats(stats: &BuildStats) -> String {
    let mut out = String::new();
    let loaded = stats.atomic_records + stats.compound_records;
    let _ = write!(
        out,
        "Summary: Loaded {} entries ({} atomic, {} compound, {} skipped).",
        loaded, stats.atomic_records, stats.compound_records, stats.skipped_records
    );
    if stats.missing_phonetics > 0 {
        let _ = write!(
            out,
            " {} entries had missing phonetics.",
            stats.missing_phonetics
        );
    } else {
        let _ = write!(out, " No missing phonetics warnings.");
    }
    let _ = write!(
        out,
        "\nIndexes: {} symbols, {} English keys, {} Chinese mappings.",
        stats.symbols, stats.words, stats.cross_script
    );
    out
}
