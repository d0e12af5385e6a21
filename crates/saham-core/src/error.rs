//! Error types for workbench operations

use thiserror::Error;

/// Result type alias for workbench operations
pub type Result<T> = std::result::Result<T, WorkbenchError>;

/// Workbench specific errors
#[derive(Debug, Error)]
pub enum WorkbenchError {
    /// Local input failed a required-field or precondition check
    #[error("Invalid input: {field} {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    /// An external analysis call failed. The message is deliberately
    /// generic toward the caller; the underlying kind is preserved as the
    /// source and logged at the gateway.
    #[error("Analysis failed. Verify your inputs and try again.")]
    Analysis(#[source] AnalysisFailure),

    /// Archive snapshot malformed; nothing was merged
    #[error("Import failed: {0}")]
    Import(String),

    /// Consistency selection precondition violated
    #[error("Invalid selection: {0}")]
    Selection(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persisted blob could not be read or written
    #[error("Store error: {0}")]
    Store(String),
}

/// Internal kind of an external-call failure
///
/// Transport and schema failures surface identically to the caller but are
/// kept apart here so a later revision can retry transport failures without
/// ever retrying schema failures.
#[derive(Debug, Error)]
pub enum AnalysisFailure {
    /// The inference service call itself failed
    #[error("transport: {0}")]
    Transport(#[from] saham_llm::InferenceError),

    /// The response body did not parse as JSON
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The parsed response violated the schema contract
    #[error("schema violation: {0}")]
    Schema(String),
}

impl WorkbenchError {
    /// Shorthand for a required-field validation error
    pub(crate) fn required(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "is required",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_message_is_generic() {
        let err = WorkbenchError::Analysis(AnalysisFailure::Schema(
            "missing required key `prediction`".to_string(),
        ));
        assert_eq!(err.to_string(), "Analysis failed. Verify your inputs and try again.");
    }

    #[test]
    fn test_analysis_error_preserves_kind_as_source() {
        use std::error::Error;

        let err = WorkbenchError::Analysis(AnalysisFailure::Schema("bad enum".to_string()));
        let source = err.source().expect("source must be preserved");
        assert!(source.to_string().contains("schema violation"));
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = WorkbenchError::required("ticker");
        assert!(err.to_string().contains("ticker"));
    }
}
