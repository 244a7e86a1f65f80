// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod buffer;
pub mod config;
pub mod group;

pub use buffer::OutputBuffer;
pub use config::{ConverterConfig, LanguageTag, OverflowPolicy};
pub use group::{is_hundred, is_ten, is_unit, Group, GroupClass};
