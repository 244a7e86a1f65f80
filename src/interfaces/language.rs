// ============================================================================
// Language Interface
// Defines the lexical-table contract for pluggable language rule sets
// ============================================================================

use crate::numeric::ConversionResult;

/// Strategy pattern interface for per-language lexical rules.
/// Implementations: English, Spanish; new languages plug in by composition.
///
/// Every method receives the same contextual parameters:
/// - `value` - the group value being spelled (1 to 3 digits)
/// - `modulus` - remainder of the number being converted after removing this
///   group and everything above it, so agreement and contraction rules can
///   depend on what follows
/// - `index` - the magnitude index of the group (0, 3, 6, 9 or 12)
///
/// All methods are deterministic and side-effect-free. The three spelling
/// methods are total over their declared domains and return
/// `ConversionError::LexicalDomain` outside them.
pub trait Language: Send + Sync {
    /// Spell a single-digit value (0-9).
    fn unit(&self, value: u16, modulus: u64, index: u8) -> ConversionResult<&'static str>;

    /// Spell a two-digit value (10-99).
    fn ten(&self, value: u16, modulus: u64, index: u8) -> ConversionResult<String>;

    /// Spell a three-digit value (100-999).
    fn hundred(&self, value: u16, modulus: u64, index: u8) -> ConversionResult<String>;

    /// The magnitude word for a group, if any.
    ///
    /// Returns `None` for index 0 (no magnitude tier) and for indices outside
    /// {3, 6, 9, 12}. The group value and modulus drive number agreement
    /// (singular vs. plural) and contraction rules.
    fn magnitude(&self, value: u16, modulus: u64, index: u8) -> Option<&'static str>;

    /// The decimal-fraction clause appended after the spelled words,
    /// e.g. "with 45/100" or "con 45/100".
    fn fraction_clause(&self, fraction: u8) -> String;

    /// Get the language name for logging
    fn name(&self) -> &str;
}
