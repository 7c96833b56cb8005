//! English rule based model
//!
//! Segmentation, tagging, lemmatization and entity recognition built from word lists
//! and hand written rules. Needs no downloaded data; a JSON user lexicon can extend it.

mod entities;
pub mod lexicon;
pub mod rule_model;
mod tagger;
mod tokenizer;

/// Re-exports
pub use lexicon::{Lexicon, WordEntry};
pub use rule_model::EnglishRuleModel;
