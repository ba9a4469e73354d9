// ============================================================================
// Numeric Errors
// Error types for strict decimal parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while turning text into an exact decimal amount.
///
/// The lenient mask parser ([`Amount::parse`](super::Amount::parse)) folds
/// every one of these into "absent"; the strict `FromStr` impl reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a syntactically valid decimal
    InvalidInput,
    /// Mantissa does not fit the 96-bit decimal representation
    Overflow,
    /// More fraction digits than the decimal type can carry
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds decimal range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: too many fraction digits for decimal scale"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
