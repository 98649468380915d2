use thiserror::Error;

use crate::model::GoId;

/// The main error type for gostyle operations.
#[derive(Debug, Error)]
pub enum GoStyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GO ID {0} already exists")]
    DuplicateId(GoId),

    #[error("GO ID {0} not found")]
    NotFound(GoId),

    #[error("Please enter valid GO ID data")]
    EmptyInput,

    #[error("Failed to write TSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    #[error("Error reading data on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("Missing columns in input: {}", .missing.join(", "))]
    Schema { missing: Vec<&'static str> },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("No GO IDs selected")]
    NoSelection,

    #[error("Failed to serialize selection as JSON: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl GoStyleError {
    pub(crate) fn invalid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GoStyleError::InvalidValue {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
