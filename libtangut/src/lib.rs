//! libtangut
//!
//! Word-by-word translator front end over `libtangut-core`: picks a lookup
//! direction, runs it, and renders the structured result as a plain-text
//! report (or JSON). It understands no grammar; results are theoretical,
//! symbol-by-symbol substitutions.
//!
//! Public API exported here:
//! - `Direction` - the four translation directions
//! - `translate` - run one direction against a `Translator`
//! - `render` - text reports for each result shape

pub mod render;

use libtangut_core::{CrossScriptTranslation, SymbolTranslation, Translator, UnitTranslation};
use serde::Serialize;

// Convenience re-exports for callers that only depend on this crate.
pub use libtangut_core::{BuildStats, Config, Lexicon};
pub use render::RenderOptions;

/// Lookup direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    /// Tangut symbols to English meanings
    TangutToEnglish,
    /// English words to Tangut symbols
    EnglishToTangut,
    /// Tangut symbols to Chinese equivalents
    TangutToChinese,
    /// Chinese text to Tangut symbols
    ChineseToTangut,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::TangutToEnglish,
        Direction::EnglishToTangut,
        Direction::TangutToChinese,
        Direction::ChineseToTangut,
    ];

    /// Heading label, e.g. `Tangut -> English`.
    pub fn label(self) -> &'static str {
        match self {
            Direction::TangutToEnglish => "Tangut -> English",
            Direction::EnglishToTangut => "English -> Tangut",
            Direction::TangutToChinese => "Tangut -> Chinese",
            Direction::ChineseToTangut => "Chinese -> Tangut",
        }
    }

    /// Input prompt shown by the interactive loop.
    pub fn prompt(self) -> &'static str {
        match self {
            Direction::TangutToEnglish | Direction::TangutToChinese => {
                "Enter Tangut characters (e.g., 𘞗𘟇𘞼): "
            }
            Direction::EnglishToTangut => "Enter English text (e.g., sky river): ",
            Direction::ChineseToTangut => "Enter Chinese text (e.g., 流域): ",
        }
    }
}

/// The structured result of one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Translation {
    Meanings(SymbolTranslation),
    Units(UnitTranslation),
    Equivalents(CrossScriptTranslation),
}

/// Run `direction` over `text`.
pub fn translate(translator: &Translator, direction: Direction, text: &str) -> Translation {
    match direction {
        Direction::TangutToEnglish => Translation::Meanings(translator.translate_symbols(text)),
        Direction::EnglishToTangut => Translation::Units(translator.translate_words(text)),
        Direction::TangutToChinese => {
            Translation::Equivalents(translator.translate_to_cross_script(text))
        }
        Direction::ChineseToTangut => {
            Translation::Units(translator.translate_from_cross_script(text))
        }
    }
}
