use thiserror::Error;

/// Errors raised while turning an extracted record into a validated
/// [`PatientRecord`](crate::PatientRecord).
///
/// Every variant carries the JSON field path of the offending value so the
/// caller can render it to an operator without re-deriving it. None of
/// these are recoverable inside a triage call; defaulting a missing value
/// could mask a true finding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriageError {
    #[error("missing required field: {path}")]
    MissingField { path: String },
    #[error("invalid value for {path}: {value}")]
    InvalidValue { path: String, value: String },
    #[error("unknown polyp type at {path}: {value}")]
    UnknownPolypType { path: String, value: String },
}

impl TriageError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        TriageError::MissingField { path: path.into() }
    }

    pub(crate) fn invalid(path: impl Into<String>, value: impl ToString) -> Self {
        TriageError::InvalidValue {
            path: path.into(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;
