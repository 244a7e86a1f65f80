// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod hook;
mod language;

pub use hook::{ConversionEvent, ConversionHook, ConversionKind, LoggingHook, NoOpHook, Phase};
pub use language::Language;
