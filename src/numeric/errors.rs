// ============================================================================
// Conversion Errors
// Error types for number-to-text conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while converting a number to words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Decimal fraction outside [0, 99]
    FractionOutOfRange(u8),
    /// Decimal amount is negative or cannot be decomposed into
    /// an integer part plus a two-digit fraction
    InvalidAmount(String),
    /// Number exceeds the maximum convertible magnitude (strict mode only)
    Overflow(u64),
    /// A lexical rule was invoked outside its declared input domain.
    /// Indicates a defect in the grouping engine, never expected from
    /// correct use.
    LexicalDomain { value: u16, lower: u16, upper: u16 },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::FractionOutOfRange(fraction) => {
                write!(f, "decimal fraction [{}] is out of bounds [0, 99]", fraction)
            },
            ConversionError::InvalidAmount(amount) => {
                write!(f, "amount [{}] must be a non-negative decimal value", amount)
            },
            ConversionError::Overflow(number) => write!(
                f,
                "number [{}] is greater than the maximum value allowed for conversion",
                number
            ),
            ConversionError::LexicalDomain { value, lower, upper } => {
                write!(f, "number [{}] is out of bounds [{}, {}]", value, lower, upper)
            },
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
