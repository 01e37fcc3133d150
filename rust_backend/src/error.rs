//! Error types for sun and moon calculations.

/// Result type for calculator operations
pub type SunCalcResult<T> = Result<T, SunCalcError>;

/// Error type for calculator operations
///
/// Rise/set times that do not exist (polar day or night) are not errors:
/// they come back as `None` so a batch with some such rows still completes.
#[derive(Debug, thiserror::Error)]
pub enum SunCalcError {
    #[error("Unsupported input type: {0}")]
    UnsupportedInputType(String),

    #[error("Shape mismatch: `{field}` has {found} rows, expected {expected}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl SunCalcError {
    pub(crate) fn unsupported(what: impl std::fmt::Display) -> Self {
        SunCalcError::UnsupportedInputType(what.to_string())
    }
}
