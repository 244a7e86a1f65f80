// ============================================================================
// Converter Factory
// Creates converters with proper configuration
// ============================================================================

use crate::domain::{ConverterConfig, LanguageTag, OverflowPolicy};
use crate::engine::{Converter, English, Spanish};
use crate::interfaces::{ConversionHook, Language};
use crate::numeric::ConversionResult;
use rust_decimal::Decimal;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the language rule set for a shipped language tag
pub fn create_language(tag: LanguageTag) -> Box<dyn Language> {
    match tag {
        LanguageTag::English => Box::new(English),
        LanguageTag::Spanish => Box::new(Spanish),
    }
}

/// Creates a converter from configuration
///
/// # Arguments
/// * `number` - The number to convert
/// * `config` - Converter configuration
/// * `hook` - Hook invoked around every conversion step
///
/// # Example
/// ```
/// use num2text::prelude::*;
/// use num2text::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = ConverterConfig::spanish().with_fraction(45);
/// let converter = create_from_config(1_000, config, Arc::new(NoOpHook)).unwrap();
/// assert_eq!(converter.to_text().unwrap(), "un mil con 45/100");
/// ```
pub fn create_from_config(
    number: u64,
    config: ConverterConfig,
    hook: Arc<dyn ConversionHook>,
) -> ConversionResult<Converter> {
    // Validate configuration first
    config.validate()?;

    let language = create_language(config.language);

    let converter = match config.fraction {
        Some(fraction) => Converter::with_fraction(number, fraction, language, hook)?,
        None => Converter::new(number, language, hook),
    };

    Ok(converter.with_overflow_policy(config.overflow_policy))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Number input accepted by the builder: a plain integer, or a decimal
/// amount decomposed at build time.
enum NumberInput {
    Integer(u64),
    Amount(Decimal),
}

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use num2text::prelude::*;
/// use num2text::engine::factory::ConverterBuilder;
/// use std::sync::Arc;
///
/// let converter = ConverterBuilder::new(34_899)
///     .spanish()
///     .strict()
///     .build(Arc::new(NoOpHook))
///     .unwrap();
/// assert_eq!(
///     converter.to_text().unwrap(),
///     "treinta y cuatro mil ochocientos noventa y nueve"
/// );
/// ```
pub struct ConverterBuilder {
    input: NumberInput,
    config: ConverterConfig,
}

impl ConverterBuilder {
    /// Create a new builder for an integer number (English, lenient)
    pub fn new(number: u64) -> Self {
        Self {
            input: NumberInput::Integer(number),
            config: ConverterConfig::english(),
        }
    }

    /// Create a new builder for a decimal amount. The amount is decomposed
    /// into integer part and two-digit fraction when `build` runs.
    pub fn from_amount(amount: Decimal) -> Self {
        Self {
            input: NumberInput::Amount(amount),
            config: ConverterConfig::english(),
        }
    }

    // ========================================================================
    // Language Configuration
    // ========================================================================

    /// Spell in English (default)
    pub fn english(mut self) -> Self {
        self.config.language = LanguageTag::English;
        self
    }

    /// Spell in Spanish
    pub fn spanish(mut self) -> Self {
        self.config.language = LanguageTag::Spanish;
        self
    }

    /// Spell in the given shipped language
    pub fn language(mut self, tag: LanguageTag) -> Self {
        self.config.language = tag;
        self
    }

    // ========================================================================
    // Conversion Behavior
    // ========================================================================

    /// Fail on overflow instead of emitting the raw numeral
    pub fn strict(mut self) -> Self {
        self.config.overflow_policy = OverflowPolicy::Strict;
        self
    }

    /// Emit the raw numeral on overflow (default)
    pub fn lenient(mut self) -> Self {
        self.config.overflow_policy = OverflowPolicy::Lenient;
        self
    }

    /// Append a two-digit decimal fraction clause
    pub fn with_fraction(mut self, fraction: u8) -> Self {
        self.config.fraction = Some(fraction);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, hook: Arc<dyn ConversionHook>) -> ConversionResult<Converter> {
        match self.input {
            NumberInput::Integer(number) => create_from_config(number, self.config, hook),
            NumberInput::Amount(amount) => {
                self.config.validate()?;
                let language = create_language(self.config.language);
                let converter = Converter::from_decimal(amount, language, hook)?;
                Ok(converter.with_overflow_policy(self.config.overflow_policy))
            },
        }
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpHook;
    use crate::numeric::ConversionError;

    #[test]
    fn test_create_from_config() {
        let config = ConverterConfig::english();
        let converter = create_from_config(21_001, config, Arc::new(NoOpHook)).unwrap();
        assert_eq!(converter.to_text().unwrap(), "twenty-one thousand one");
        assert_eq!(converter.language_name(), "English");
    }

    #[test]
    fn test_create_from_config_rejects_bad_fraction() {
        let config = ConverterConfig::english().with_fraction(255);
        let result = create_from_config(1, config, Arc::new(NoOpHook));
        assert_eq!(result.err(), Some(ConversionError::FractionOutOfRange(255)));
    }

    #[test]
    fn test_builder_defaults_to_english_lenient() {
        let builder = ConverterBuilder::new(7);
        assert_eq!(builder.get_config().language, LanguageTag::English);
        assert_eq!(builder.get_config().overflow_policy, OverflowPolicy::Lenient);

        let converter = builder.build(Arc::new(NoOpHook)).unwrap();
        assert_eq!(converter.to_text().unwrap(), "seven");
    }

    #[test]
    fn test_builder_spanish_with_fraction() {
        let converter = ConverterBuilder::new(1_000)
            .spanish()
            .with_fraction(75)
            .build(Arc::new(NoOpHook))
            .unwrap();
        assert_eq!(converter.to_text().unwrap(), "un mil con 75/100");
    }

    #[test]
    fn test_builder_strict_policy_is_applied() {
        let converter = ConverterBuilder::new(u64::MAX)
            .strict()
            .build(Arc::new(NoOpHook))
            .unwrap();
        assert!(matches!(
            converter.to_text(),
            Err(ConversionError::Overflow(_))
        ));
    }

    #[test]
    fn test_builder_from_amount() {
        let converter = ConverterBuilder::from_amount(Decimal::new(8_750_033, 2))
            .spanish()
            .build(Arc::new(NoOpHook))
            .unwrap();
        assert_eq!(
            converter.to_text().unwrap(),
            "ochenta y siete mil quinientos con 33/100"
        );
    }
}
