//! preprocessing module
//!
//! - [`BasicPreprocessing`]: tokens, sentences, stop words, stems, lemmas
//! - [`AdvancedPreprocessing`]: part-of-speech tags and named entities
pub mod advanced_preprocessing;
pub mod basic_preprocessing;

/// Re-exports
pub use advanced_preprocessing::{AdvancedPreprocessing, BINARY_ENTITY_LABEL};
pub use basic_preprocessing::BasicPreprocessing;
