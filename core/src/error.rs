//! Error types for libtangut-core.
//!
//! Only source loading and configuration can fail. A record with a missing
//! identifying field is reported through [`SkipReason`](crate::record::SkipReason)
//! and dropped; a key that is absent from an index is an explicit "unknown"
//! value, never an error.

use std::path::PathBuf;

/// Result type used throughout the crate.
pub type Result<T, E = LexError> = std::result::Result<T, E>;

/// Fatal errors. Any of these aborts index construction entirely.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// A vocabulary source could not be opened or read.
    #[error("failed to read vocabulary source '{}': {source}", path.display())]
    SourceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A vocabulary source is not a JSON array of records.
    #[error("malformed vocabulary source '{}': {source}", path.display())]
    SourceFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration file could not be read or written.
    #[error("failed to access config '{}': {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML for [`Config`](crate::Config).
    #[error("invalid config: {0}")]
    ConfigFormat(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
