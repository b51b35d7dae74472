//! Longest-match segmentation properties over a built lexicon.
//!
//! Checks totality (spans tile the input), longest-match preference and the
//! single-scalar unknown fallback, across a spread of mixed inputs.

use libtangut_core::record::{atomic_fields as af, compound_fields as cf};
use libtangut_core::segment::segment;
use libtangut_core::{Lexicon, RawRecord, Translator};

fn lexicon() -> Lexicon {
    let atomic: Vec<RawRecord> = [("𘞗", "seed"), ("𘟇", "river"), ("𘞼", "sky"), ("𘝯", "water")]
        .iter()
        .map(|(sym, meaning)| {
            RawRecord::new()
                .with(af::SYMBOL, *sym)
                .with(af::MEANING, *meaning)
                .with(af::PHONETICS, "ph")
        })
        .collect();
    let compound: Vec<RawRecord> = [
        ("𘞗𘟇 (p1)", "seed river"),
        ("𘞼𘟇𘝯 (p2)", "sky river water"),
        ("𘞼𘟇 (p3)", "sky river"),
    ]
    .iter()
    .map(|(proposed, literal)| {
        RawRecord::new()
            .with(cf::PROPOSED_UNIT, *proposed)
            .with(cf::LITERAL_MEANING, *literal)
    })
    .collect();
    Lexicon::build(&atomic, &compound)
}

const INPUTS: &[&str] = &[
    "𘞗𘟇",
    "𘞼𘟇𘝯𘞗",
    "𘞼𘟇𘞗𘟇",
    "a𘞗b𘟇c",
    "𘝯𘝯𘝯",
    "𘞼 𘟇",
    "plain ascii",
    "𘞼𘟇𘝯𘞼𘟇",
];

#[test]
fn spans_are_contiguous_and_cover_input() {
    let lx = lexicon();
    for input in INPUTS {
        let spans = segment(input, lx.symbols());
        let joined: String = spans.iter().map(|s| s.text).collect();
        assert_eq!(&joined, input);

        let mut next = 0;
        for span in &spans {
            assert_eq!(span.start, next, "gap or overlap in {input:?}");
            assert_eq!(span.len, span.text.chars().count());
            next = span.end();
        }
        assert_eq!(next, input.chars().count());
    }
}

#[test]
fn longest_key_is_preferred_at_each_position() {
    let lx = lexicon();
    let spans = segment("𘞼𘟇𘝯𘞗", lx.symbols());
    let texts: Vec<&str> = spans.iter().map(|s| s.text).collect();
    assert_eq!(texts, vec!["𘞼𘟇𘝯", "𘞗"]);

    let spans = segment("𘞼𘟇𘞗𘟇", lx.symbols());
    let texts: Vec<&str> = spans.iter().map(|s| s.text).collect();
    assert_eq!(texts, vec!["𘞼𘟇", "𘞗𘟇"]);
}

#[test]
fn no_matched_span_could_have_been_longer() {
    let lx = lexicon();
    let max = lx.symbols().max_key_len();
    for input in INPUTS {
        let chars: Vec<char> = input.chars().collect();
        for span in segment(input, lx.symbols()) {
            let upper = (span.start + max).min(chars.len());
            for end in (span.end() + 1)..=upper {
                let longer: String = chars[span.start..end].iter().collect();
                assert!(
                    !lx.symbols().contains_key(&longer),
                    "{longer:?} was available at {} in {input:?}",
                    span.start
                );
            }
        }
    }
}

#[test]
fn unknown_scalars_advance_by_exactly_one() {
    let lx = lexicon();
    let spans = segment("a𘞗b", lx.symbols());
    assert_eq!(spans.len(), 3);
    assert!(!spans[0].is_match());
    assert_eq!((spans[0].start, spans[0].len), (0, 1));
    assert!(spans[1].is_match());
    assert!(!spans[2].is_match());
    assert_eq!((spans[2].start, spans[2].len), (2, 1));
}

#[test]
fn translator_reports_unknown_markers_for_unmatched_spans() {
    let t = Translator::new(lexicon()).translate_symbols("x𘞗𘟇");
    assert_eq!(t.spans.len(), 2);
    assert!(!t.spans[0].matched);
    assert_eq!(t.spans[0].phonetics, libtangut_core::UNKNOWN_SYMBOL_PHONETICS);
    assert!(t.spans[0].meanings.is_empty());
    assert_eq!(t.spans[1].meanings, vec!["seed river".to_string()]);
}
