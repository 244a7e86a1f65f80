// ============================================================================
// Converter
// Core grouping-engine and output-assembly logic
// ============================================================================

use crate::domain::{Group, GroupClass, OutputBuffer, OverflowPolicy};
use crate::interfaces::{
    ConversionEvent, ConversionHook, ConversionKind, Language, NoOpHook, Phase,
};
use crate::numeric::{ConversionError, ConversionResult, Decomposition, MAX_CONVERTIBLE};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;
use std::sync::Arc;

/// Number-to-text converter with a pluggable language rule set.
///
/// A converter is immutable once constructed: the number, optional decimal
/// fraction, language and hook are fixed for its lifetime, and every
/// `to_text` call allocates its own iteration state. Shared references may
/// therefore convert concurrently from independent threads.
///
/// # Example
/// ```
/// use num2text::prelude::*;
/// use std::sync::Arc;
///
/// let converter = Converter::new(4_525, Box::new(English), Arc::new(NoOpHook));
/// assert_eq!(
///     converter.to_text().unwrap(),
///     "four thousand five hundred twenty-five"
/// );
/// ```
pub struct Converter {
    /// Number to convert
    number: u64,

    /// Optional decimal fraction in [0, 99]
    fraction: Option<u8>,

    /// Pluggable language rule set
    language: Box<dyn Language>,

    /// Hook invoked around every conversion step
    hook: Arc<dyn ConversionHook>,

    /// Default behavior when the number exceeds the maximum
    overflow_policy: OverflowPolicy,
}

impl Converter {
    /// Create a converter for an integer number, with the default lenient
    /// overflow policy and no decimal fraction.
    pub fn new(number: u64, language: Box<dyn Language>, hook: Arc<dyn ConversionHook>) -> Self {
        Self {
            number,
            fraction: None,
            language,
            hook,
            overflow_policy: OverflowPolicy::Lenient,
        }
    }

    /// Create a converter with a two-digit decimal fraction.
    ///
    /// # Errors
    /// Returns `FractionOutOfRange` if `fraction` is above 99.
    pub fn with_fraction(
        number: u64,
        fraction: u8,
        language: Box<dyn Language>,
        hook: Arc<dyn ConversionHook>,
    ) -> ConversionResult<Self> {
        if fraction > 99 {
            return Err(ConversionError::FractionOutOfRange(fraction));
        }
        let mut converter = Self::new(number, language, hook);
        converter.fraction = Some(fraction);
        Ok(converter)
    }

    /// Create a converter from a decimal amount.
    ///
    /// The integer part is taken by truncation; the fraction comes from the
    /// amount rounded half-up to two decimal places, so `45871.9444` spells
    /// the words for 45,871 followed by "94/100".
    ///
    /// # Errors
    /// Returns `InvalidAmount` for negative amounts or amounts whose integer
    /// part does not fit the conversion domain type.
    pub fn from_decimal(
        amount: Decimal,
        language: Box<dyn Language>,
        hook: Arc<dyn ConversionHook>,
    ) -> ConversionResult<Self> {
        if amount.is_sign_negative() {
            return Err(ConversionError::InvalidAmount(amount.to_string()));
        }
        let number = amount
            .trunc()
            .to_u64()
            .ok_or_else(|| ConversionError::InvalidAmount(amount.to_string()))?;
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fraction = (rounded.fract() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u8()
            .ok_or_else(|| ConversionError::InvalidAmount(amount.to_string()))?;
        Self::with_fraction(number, fraction, language, hook)
    }

    /// Set the overflow policy applied by [`to_text`](Self::to_text).
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// The number being converted
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The decimal fraction, if one was supplied
    pub fn fraction(&self) -> Option<u8> {
        self.fraction
    }

    /// The name of the configured language rule set
    pub fn language_name(&self) -> &str {
        self.language.name()
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert the number to text using the configured overflow policy,
    /// appending the decimal-fraction clause if a fraction was supplied.
    pub fn to_text(&self) -> ConversionResult<String> {
        self.to_text_with_policy(self.overflow_policy)
    }

    /// Convert the number to text with an explicit overflow policy.
    pub fn to_text_with_policy(&self, policy: OverflowPolicy) -> ConversionResult<String> {
        let words = self.spell(policy)?;
        match self.fraction {
            Some(fraction) => Ok(format!("{} {}", words, self.language.fraction_clause(fraction))),
            None => Ok(words),
        }
    }

    /// Convert the number to text and hand the result to a post-processor.
    ///
    /// The post-processor receives the assembled words and the raw fraction
    /// value and returns the final output verbatim; the automatic fraction
    /// clause is suppressed, so rendering the fraction becomes the
    /// post-processor's responsibility.
    pub fn to_text_formatted<F>(&self, formatter: F) -> ConversionResult<String>
    where
        F: FnOnce(&str, Option<u8>) -> String,
    {
        let words = self.spell(self.overflow_policy)?;
        Ok(formatter(&words, self.fraction))
    }

    /// Spell the integer part: walk the base-1000 groups from the most
    /// significant down and join the per-group outputs with single spaces.
    fn spell(&self, policy: OverflowPolicy) -> ConversionResult<String> {
        if self.number > MAX_CONVERTIBLE {
            return match policy {
                OverflowPolicy::Strict => Err(ConversionError::Overflow(self.number)),
                OverflowPolicy::Lenient => {
                    tracing::debug!(
                        number = self.number,
                        "number exceeds the maximum convertible value, emitting raw numeral"
                    );
                    Ok(self.number.to_string())
                },
            };
        }

        let mut parts: SmallVec<[String; 5]> = SmallVec::new();
        for group in Decomposition::new(self.number) {
            let text = self.resolve_group(&group)?;
            if !text.is_empty() {
                parts.push(text);
            }
        }
        Ok(parts.join(" "))
    }

    /// Convert a single group: fire the hook around the group words and
    /// around the magnitude word, in a fixed order regardless of language.
    fn resolve_group(&self, group: &Group) -> ConversionResult<String> {
        let event = ConversionEvent::from(group);
        let mut output = OutputBuffer::new();

        let kind = match group.class() {
            GroupClass::Unit => ConversionKind::Unit,
            GroupClass::Ten => ConversionKind::Ten,
            GroupClass::Hundred => ConversionKind::Hundred,
        };

        self.hook.on_conversion(Phase::Before, kind, &event, &mut output);
        let words = match group.class() {
            GroupClass::Unit => self
                .language
                .unit(group.value, group.modulus, group.index)?
                .to_string(),
            GroupClass::Ten => self.language.ten(group.value, group.modulus, group.index)?,
            GroupClass::Hundred => self.language.hundred(group.value, group.modulus, group.index)?,
        };
        output.append(words);
        self.hook.on_conversion(Phase::After, kind, &event, &mut output);

        self.hook
            .on_conversion(Phase::Before, ConversionKind::Magnitude, &event, &mut output);
        if let Some(word) = self.language.magnitude(group.value, group.modulus, group.index) {
            output.append(format!(" {}", word));
        }
        self.hook
            .on_conversion(Phase::After, ConversionKind::Magnitude, &event, &mut output);

        tracing::trace!(
            value = group.value,
            index = group.index,
            language = self.language.name(),
            "resolved group"
        );
        Ok(output.finish())
    }
}

/// Convenience constructor equivalent to supplying [`NoOpHook`].
impl Converter {
    pub fn without_hook(number: u64, language: Box<dyn Language>) -> Self {
        Self::new(number, language, Arc::new(NoOpHook))
    }
}
