//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur when loading or saving the configuration resource.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The resource is missing, unreadable, or the path is invalid.
    #[error("configuration resource {} unavailable: {source}", path.display())]
    ResourceUnavailable {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The resource was read but its values line could not be parsed.
    #[error("malformed configuration data: {0}")]
    MalformedData(#[from] ParseError),

    /// Failed to write the resource to disk.
    #[error("failed to write configuration: {0}")]
    WriteError(#[source] std::io::Error),
}

impl ConfigError {
    /// Whether the resource could not be opened or read.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, Self::ResourceUnavailable { .. })
    }

    /// Whether the resource was readable but its contents were rejected.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedData(_))
    }
}

/// Errors produced while parsing the comma-separated values line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The resource ended before the values line.
    #[error("missing values line")]
    MissingValues,

    /// The line did not split into the expected number of tokens.
    #[error("expected {expected} values, found {found}")]
    TokenCount {
        /// Number of fields in the schema.
        expected: usize,
        /// Number of comma-separated tokens in the line.
        found: usize,
    },

    /// A token is not a number of the kind its position requires.
    #[error("invalid number {token:?}")]
    InvalidNumber {
        /// The offending token, verbatim.
        token: String,
    },
}
