//! Error types for the analysis core.
//!
//! Absence of data is never an error here: a text element without a match,
//! a relationship whose container is gone and a slide without findings are
//! all normal outcomes. Only a document the analyzer cannot use at all
//! fails the unit.

use std::fmt;

use thiserror::Error;

/// Which side of a slide pair a document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// The template document relationships are extracted from.
    Input,
    /// The generated document the detectors run on.
    Output,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// Error type for a single pair analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The snapshot holds no document element, so there is nothing to
    /// measure.
    #[error("{role} document has no document element")]
    EmptyDocument {
        /// Which document was unusable.
        role: DocumentRole,
    },
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON of the expected shape.
    #[error("invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the detectors cannot use.
    #[error("invalid configuration value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
