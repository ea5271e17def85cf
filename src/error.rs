//! Error types for the rules core
//!
//! Every error is reported synchronously to the caller. Nothing here is worth
//! retrying: all operations are pure computations over static tables or
//! caller-supplied values.

use std::fmt;

/// Which catalog table a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Event,
    Format,
    RoundKind,
    SoftCutoffKind,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Event => write!(f, "event"),
            CodeKind::Format => write!(f, "format"),
            CodeKind::RoundKind => write!(f, "round kind"),
            CodeKind::SoftCutoffKind => write!(f, "soft cutoff kind"),
        }
    }
}

/// Rules-core error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("Invalid encoded result value: {0}")]
    InvalidEncodedValue(i64),

    #[error("Unknown {kind} code: {code:?}")]
    UnknownCode { kind: CodeKind, code: String },

    #[error("Round kind {0:?} is not supported for scheduling")]
    UnsupportedRoundKind(char),

    #[error("Catalog consistency violation: {0}")]
    CatalogConsistencyViolation(String),
}

impl RulesError {
    pub(crate) fn unknown(kind: CodeKind, code: impl Into<String>) -> Self {
        RulesError::UnknownCode {
            kind,
            code: code.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEncodedValue(_) => "INVALID_ENCODED_VALUE",
            Self::UnknownCode { .. } => "UNKNOWN_CODE",
            Self::UnsupportedRoundKind(_) => "UNSUPPORTED_ROUND_KIND",
            Self::CatalogConsistencyViolation(_) => "CATALOG_CONSISTENCY_VIOLATION",
        }
    }
}

/// Result type alias using RulesError
pub type RulesResult<T> = Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            RulesError::InvalidEncodedValue(-3).error_code(),
            "INVALID_ENCODED_VALUE"
        );
        assert_eq!(
            RulesError::unknown(CodeKind::Event, "999").error_code(),
            "UNKNOWN_CODE"
        );
        assert_eq!(
            RulesError::UnsupportedRoundKind('b').error_code(),
            "UNSUPPORTED_ROUND_KIND"
        );
    }

    #[test]
    fn test_unknown_code_message() {
        let err = RulesError::unknown(CodeKind::Format, "x");
        assert_eq!(err.to_string(), "Unknown format code: \"x\"");
    }
}
