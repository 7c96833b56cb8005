//! models module
pub mod model_definition;

/// Re-exports
pub use model_definition::{Doc, Entity, EntityLabel, PosTag, ProcessedText, Token};
