// ============================================================================
// Engine Module
// Contains the core conversion business logic
// ============================================================================

mod converter;
mod english;
mod spanish;

pub mod factory;

pub use converter::Converter;
pub use english::English;
pub use factory::{create_from_config, create_language, ConverterBuilder};
pub use spanish::Spanish;
