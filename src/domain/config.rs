// ============================================================================
// Converter Configuration
// Language selection and conversion behavior
// ============================================================================

use crate::numeric::{ConversionError, ConversionResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Language Selection
// ============================================================================

/// Identifies a shipped language rule set.
///
/// New languages plug in by implementing the `Language` trait directly; this
/// tag only covers the rule sets the crate ships with, for configuration and
/// factory use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LanguageTag {
    English,
    Spanish,
}

// ============================================================================
// Overflow Policy
// ============================================================================

/// What to do when the number exceeds the maximum convertible magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Raise `ConversionError::Overflow`
    Strict,
    /// Emit the raw decimal numeral unconverted
    #[default]
    Lenient,
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for creating a converter through the factory.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Language rule set used to spell the number
    pub language: LanguageTag,

    /// Behavior when the number exceeds the maximum convertible value
    pub overflow_policy: OverflowPolicy,

    /// Optional decimal fraction in [0, 99], appended as a language-specific
    /// "n/100" clause
    pub fraction: Option<u8>,
}

impl ConverterConfig {
    /// Create a new configuration with the default lenient overflow policy
    /// and no decimal fraction.
    pub fn new(language: LanguageTag) -> Self {
        Self {
            language,
            overflow_policy: OverflowPolicy::default(),
            fraction: None,
        }
    }

    /// English rule set preset
    pub fn english() -> Self {
        Self::new(LanguageTag::English)
    }

    /// Spanish rule set preset
    pub fn spanish() -> Self {
        Self::new(LanguageTag::Spanish)
    }

    /// Builder method: fail on overflow instead of emitting the raw numeral
    pub fn strict(mut self) -> Self {
        self.overflow_policy = OverflowPolicy::Strict;
        self
    }

    /// Builder method: emit the raw numeral on overflow (default)
    pub fn lenient(mut self) -> Self {
        self.overflow_policy = OverflowPolicy::Lenient;
        self
    }

    /// Builder method: set the decimal fraction
    pub fn with_fraction(mut self, fraction: u8) -> Self {
        self.fraction = Some(fraction);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConversionResult<()> {
        if let Some(fraction) = self.fraction {
            if fraction > 99 {
                return Err(ConversionError::FractionOutOfRange(fraction));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ConverterConfig::english();
        assert_eq!(config.language, LanguageTag::English);
        assert_eq!(config.overflow_policy, OverflowPolicy::Lenient);
        assert_eq!(config.fraction, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ConverterConfig::spanish().strict().with_fraction(45);
        assert_eq!(config.language, LanguageTag::Spanish);
        assert_eq!(config.overflow_policy, OverflowPolicy::Strict);
        assert_eq!(config.fraction, Some(45));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_large_fraction() {
        let config = ConverterConfig::english().with_fraction(100);
        assert_eq!(
            config.validate(),
            Err(ConversionError::FractionOutOfRange(100))
        );
    }
}
