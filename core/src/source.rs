//! Loading raw vocabulary records from JSON sources.
//!
//! Each source is a JSON array of flat objects. Values are read as text:
//! strings verbatim, `null` as empty, other scalars and nested values as
//! their JSON rendering. Any failure here is fatal for the whole build.

use crate::error::{LexError, Result};
use crate::record::RawRecord;
use crate::{Config, Lexicon};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Raw records of both sources, in file order.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub atomic: Vec<RawRecord>,
    pub compound: Vec<RawRecord>,
}

/// Read one source file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LexError::SourceIo {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&bytes).map_err(|source| LexError::SourceFormat {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = records.len(), "loaded vocabulary source");
    Ok(records)
}

/// Parse a JSON array of records from memory.
pub fn parse_records(bytes: &[u8]) -> std::result::Result<Vec<RawRecord>, serde_json::Error> {
    let objects: Vec<BTreeMap<String, Value>> = serde_json::from_slice(bytes)?;
    Ok(objects
        .into_iter()
        .map(|fields| {
            fields
                .into_iter()
                .map(|(name, value)| (name, value_text(value)))
                .collect()
        })
        .collect())
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Load the atomic then the compound source named in `config`.
///
/// Returns no partial result: if either source fails, so does the call.
pub fn load_sources(config: &Config) -> Result<Sources> {
    let atomic = load_records(&config.atomic_vocab)?;
    let compound = load_records(&config.compound_vocab)?;
    Ok(Sources { atomic, compound })
}

impl Lexicon {
    /// Load both sources and build the lexicon.
    pub fn load(config: &Config) -> Result<Lexicon> {
        let sources = load_sources(config)?;
        Ok(Lexicon::build_with(
            &sources.atomic,
            &sources.compound,
            config.build_options(),
        ))
    }
}
