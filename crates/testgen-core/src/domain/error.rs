//! Domain-level error taxonomy for TestGen.
//!
//! The classifier and selector are total over their declared input domain.
//! Unknown summary ids, unmatched predicates and missing component names all
//! have defined fallbacks, so the only failure is a malformed request.

/// TestGen domain errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestGenError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TestGenError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

/// Result type for TestGen domain operations.
pub type Result<T> = std::result::Result<T, TestGenError>;
