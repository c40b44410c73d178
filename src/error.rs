//! Error types for greedy-rules
//!
//! Only genuine failures live here. A table or class that cannot be separated
//! is not an error: it surfaces as an absent rule table in the induction report.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// greedy-rules errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Decision column '{0}' is not present in the table")]
    MissingDecisionColumn(String),

    #[error("Row {row} has no value for attribute '{attribute}'")]
    MissingValue { row: usize, attribute: String },

    #[error("Row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Column '{0}' appears more than once")]
    DuplicateColumn(String),

    #[error("Duplicate table label '{0}'")]
    DuplicateLabel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error describes malformed input data, as opposed to an
    /// environment or configuration failure.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            Error::MissingDecisionColumn(_)
                | Error::MissingValue { .. }
                | Error::RaggedRow { .. }
                | Error::DuplicateColumn(_)
        )
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
