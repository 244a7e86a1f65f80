// ============================================================================
// num2text Library
// Number-to-natural-language conversion with pluggable language rules
// ============================================================================

//! # num2text
//!
//! Converts non-negative integers (optionally with a two-digit decimal
//! fraction) into spelled-out words, in English or Spanish out of the box.
//!
//! ## Features
//!
//! - **Pluggable language rule sets** via the `Language` trait (strategy
//!   pattern, selected by composition)
//! - **Base-1000 grouping engine**: at most five groups, integer arithmetic
//!   only, zero groups skipped
//! - **Conversion hooks** that inject text before/after each group and each
//!   magnitude word without touching core control flow
//! - **Strict or lenient overflow handling** for values beyond
//!   999,999,999,999,999
//!
//! ## Example
//!
//! ```rust
//! use num2text::prelude::*;
//! use std::sync::Arc;
//!
//! // Spell an integer in English
//! let converter = Converter::new(33_977, Box::new(English), Arc::new(NoOpHook));
//! assert_eq!(
//!     converter.to_text().unwrap(),
//!     "thirty-three thousand nine hundred seventy-seven"
//! );
//!
//! // Spell a decimal amount in Spanish through the builder
//! let converter = ConverterBuilder::new(5_000_000_000)
//!     .spanish()
//!     .build(Arc::new(NoOpHook))
//!     .unwrap();
//! assert_eq!(converter.to_text().unwrap(), "cinco mil millones");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConverterConfig, Group, GroupClass, LanguageTag, OutputBuffer, OverflowPolicy,
    };
    pub use crate::engine::{
        create_from_config, create_language, Converter, ConverterBuilder, English, Spanish,
    };
    pub use crate::interfaces::{
        ConversionEvent, ConversionHook, ConversionKind, Language, LoggingHook, NoOpHook, Phase,
    };
    pub use crate::numeric::{ConversionError, ConversionResult, MAX_CONVERTIBLE};
}
