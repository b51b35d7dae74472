//! Candidate extraction: pulls the unit, phonetics, phrase sources and
//! cross-script equivalent out of a normalized record.
//!
//! Atomic records map field-for-field. Compound records carry two composite
//! fields that need splitting:
//!
//! - proposed unit: `<symbols>` optionally followed by ` (<phonetics>)`
//! - modern concept: an optional Chinese prefix and an English phrase, the
//!   latter either parenthesized or bare
//!
//! Both splitters are pure functions so every fallback branch can be tested
//! on its own.

use crate::record::{is_usable_phrase, AtomicRecord, CompoundRecord, Record, SourceKind};
use crate::record::COMPOUND_PHONETICS_NA;
use crate::LexicalUnit;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tangut main block, components and supplement.
const TANGUT_CLASS: &str = r"[\x{17000}-\x{187FF}\x{18800}-\x{18AFF}\x{18D00}-\x{18D7F}]";
/// CJK unified ideographs (base, ext. A, ext. B) and compatibility ideographs.
const HAN_CLASS: &str = r"[\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}\x{20000}-\x{2A6DF}]";

static PROPOSED_UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({TANGUT_CLASS}+)(?: \(([^)]*)\))?")).expect("valid proposed-unit regex")
});
static HAN_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{HAN_CLASS}+")).expect("valid han regex"));
static PAREN_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]*)\)").expect("valid paren regex"));

/// Split a compound's proposed-unit field into `(unit, phonetics)`.
///
/// A field that does not start with a Tangut symbol is kept whole as the
/// unit, so nothing is dropped.
pub fn split_proposed_unit(field: &str) -> (LexicalUnit, String) {
    let field = field.trim();
    let Some(caps) = PROPOSED_UNIT_RE.captures(field) else {
        return (LexicalUnit::new(field), COMPOUND_PHONETICS_NA.to_string());
    };

    let unit = LexicalUnit::new(&caps[1]);
    let phonetics = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|p| !p.is_empty())
        .unwrap_or(COMPOUND_PHONETICS_NA);
    (unit, phonetics.to_string())
}

/// The two language parts of a modern-concept field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptParts {
    pub cross_script: Option<String>,
    pub english: Option<String>,
}

/// Split a modern-concept field into its Chinese and English parts.
///
/// Guards run in this order:
/// 1. a leading Han run is the Chinese part;
/// 2. the first parenthesized group anywhere is the English part;
/// 3. with neither, the whole field is English;
/// 4. with a Han prefix but no group, the remainder is English unless it
///    opens with another Han run.
pub fn split_modern_concept(field: &str) -> ConceptParts {
    let field = field.trim();
    if field.is_empty() {
        return ConceptParts::default();
    }

    let han_prefix = HAN_PREFIX_RE.find(field);
    let cross_script = han_prefix.map(|m| m.as_str().to_string());

    if let Some(caps) = PAREN_GROUP_RE.captures(field) {
        let english = non_empty(caps[1].trim());
        return ConceptParts {
            cross_script,
            english,
        };
    }

    let Some(prefix) = han_prefix else {
        return ConceptParts {
            cross_script: None,
            english: Some(field.to_string()),
        };
    };

    let remainder = field[prefix.end()..].trim();
    let english = if HAN_PREFIX_RE.is_match(remainder) {
        None
    } else {
        non_empty(remainder)
    };
    ConceptParts {
        cross_script,
        english,
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Everything the builder needs from one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub kind: SourceKind,
    pub unit: LexicalUnit,
    pub phonetics: String,
    /// Meaning set contribution: distinct, non-placeholder, in order.
    pub meanings: Vec<String>,
    /// Word-index phrase sources (meaning-like first, then keyword/concept).
    /// May contain blanks; the builder filters them.
    pub phrases: Vec<String>,
    /// Context attached to every word-index candidate from this record.
    pub original_meaning: String,
    pub cross_script: Option<String>,
}

/// Extract builder input from a normalized record.
pub fn extract(record: &Record) -> Extracted {
    match record {
        Record::Atomic(a) => extract_atomic(a),
        Record::Compound(c) => extract_compound(c),
    }
}

fn extract_atomic(rec: &AtomicRecord) -> Extracted {
    let mut meanings: Vec<String> = Vec::new();
    for phrase in [&rec.meaning, &rec.keyword] {
        if is_usable_phrase(phrase) && !meanings.contains(phrase) {
            meanings.push(phrase.clone());
        }
    }

    Extracted {
        kind: SourceKind::Atomic,
        unit: LexicalUnit::new(rec.symbol.as_str()),
        phonetics: rec.phonetics.clone(),
        meanings,
        phrases: vec![rec.meaning.clone(), rec.keyword.clone()],
        original_meaning: rec.meaning.clone(),
        cross_script: non_empty(&rec.cross_script),
    }
}

fn extract_compound(rec: &CompoundRecord) -> Extracted {
    let (unit, phonetics) = split_proposed_unit(&rec.proposed_unit);
    let concept = split_modern_concept(&rec.modern_concept);

    let meanings = if is_usable_phrase(&rec.literal_meaning) {
        vec![rec.literal_meaning.clone()]
    } else {
        Vec::new()
    };

    Extracted {
        kind: SourceKind::Compound,
        unit,
        phonetics,
        meanings,
        phrases: vec![
            rec.literal_meaning.clone(),
            concept.english.unwrap_or_default(),
        ],
        original_meaning: rec.literal_meaning.clone(),
        cross_script: concept.cross_script,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposed_unit_with_phonetics() {
        let (unit, ph) = split_proposed_unit("𘞗𘟇 (sjwɨ1 ljɨ2)");
        assert_eq!(unit.as_str(), "𘞗𘟇");
        assert_eq!(ph, "sjwɨ1 ljɨ2");
    }

    #[test]
    fn proposed_unit_without_phonetics() {
        let (unit, ph) = split_proposed_unit("𘞗𘟇");
        assert_eq!(unit.as_str(), "𘞗𘟇");
        assert_eq!(ph, COMPOUND_PHONETICS_NA);
    }

    #[test]
    fn proposed_unit_group_needs_single_space() {
        let (unit, ph) = split_proposed_unit("𘞗𘟇(p1)");
        assert_eq!(unit.as_str(), "𘞗𘟇");
        assert_eq!(ph, COMPOUND_PHONETICS_NA);

        let (unit, ph) = split_proposed_unit("𘞗𘟇  (p1)");
        assert_eq!(unit.as_str(), "𘞗𘟇");
        assert_eq!(ph, COMPOUND_PHONETICS_NA);
    }

    #[test]
    fn proposed_unit_empty_group_uses_sentinel() {
        let (_, ph) = split_proposed_unit("𘞗𘟇 ( )");
        assert_eq!(ph, COMPOUND_PHONETICS_NA);
    }

    #[test]
    fn proposed_unit_non_tangut_falls_back_to_whole_field() {
        let (unit, ph) = split_proposed_unit("XY (p1)");
        assert_eq!(unit.as_str(), "XY (p1)");
        assert_eq!(ph, COMPOUND_PHONETICS_NA);
    }

    #[test]
    fn concept_han_prefix_and_parenthesized_english() {
        let parts = split_modern_concept("流域 (watershed)");
        assert_eq!(parts.cross_script.as_deref(), Some("流域"));
        assert_eq!(parts.english.as_deref(), Some("watershed"));
    }

    #[test]
    fn concept_parenthesized_group_anywhere() {
        let parts = split_modern_concept("watershed (流域)");
        assert_eq!(parts.cross_script, None);
        assert_eq!(parts.english.as_deref(), Some("流域"));
    }

    #[test]
    fn concept_bare_english() {
        let parts = split_modern_concept("river basin");
        assert_eq!(parts.cross_script, None);
        assert_eq!(parts.english.as_deref(), Some("river basin"));
    }

    #[test]
    fn concept_han_prefix_with_bare_english_remainder() {
        let parts = split_modern_concept("电脑 computer");
        assert_eq!(parts.cross_script.as_deref(), Some("电脑"));
        assert_eq!(parts.english.as_deref(), Some("computer"));
    }

    #[test]
    fn concept_han_prefix_followed_by_more_han() {
        let parts = split_modern_concept("电脑 计算机");
        assert_eq!(parts.cross_script.as_deref(), Some("电脑"));
        assert_eq!(parts.english, None);
    }

    #[test]
    fn concept_han_only() {
        let parts = split_modern_concept("电脑");
        assert_eq!(parts.cross_script.as_deref(), Some("电脑"));
        assert_eq!(parts.english, None);
    }

    #[test]
    fn proposed_unit_stops_at_first_non_tangut_scalar() {
        // Only the leading Tangut run is the unit; the rest, group included,
        // is ignored.
        let (unit, ph) = split_proposed_unit("𘞗𘟇abc (p1)");
        assert_eq!(unit.as_str(), "𘞗𘟇");
        assert_eq!(ph, COMPOUND_PHONETICS_NA);
    }

    #[test]
    fn concept_prefix_accepts_compatibility_ideographs() {
        let parts = split_modern_concept("\u{F900}\u{4E00} (cart)");
        assert_eq!(parts.cross_script.as_deref(), Some("\u{F900}\u{4E00}"));
        assert_eq!(parts.english.as_deref(), Some("cart"));
    }

    #[test]
    fn compound_extraction_feeds_all_targets() {
        let rec = Record::Compound(CompoundRecord {
            modern_concept: "流域 (watershed)".into(),
            proposed_unit: "𘞗𘟇 (p1)".into(),
            literal_meaning: "seed river".into(),
        });
        let ex = extract(&rec);
        assert_eq!(ex.kind, SourceKind::Compound);
        assert_eq!(ex.unit.as_str(), "𘞗𘟇");
        assert_eq!(ex.phonetics, "p1");
        assert_eq!(ex.meanings, vec!["seed river".to_string()]);
        assert_eq!(ex.phrases, vec!["seed river".to_string(), "watershed".to_string()]);
        assert_eq!(ex.original_meaning, "seed river");
        assert_eq!(ex.cross_script.as_deref(), Some("流域"));
    }

    #[test]
    fn atomic_extraction_dedups_meanings() {
        let rec = Record::Atomic(AtomicRecord {
            symbol: "𘞗".into(),
            meaning: "seed".into(),
            keyword: "seed".into(),
            phonetics: "sjwɨ1".into(),
            cross_script: String::new(),
        });
        let ex = extract(&rec);
        assert_eq!(ex.meanings, vec!["seed".to_string()]);
        assert_eq!(ex.cross_script, None);
    }
}
