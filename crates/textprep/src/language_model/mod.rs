//! Language model module
//!
//! A language model turns raw text into a [`Doc`]: tokens with lemma and part of speech,
//! sentence boundaries and named entities. Everything in `preprocessing` is a thin view
//! over this one call.
//!
//! - [`EnglishRuleModel`]: lexicon + rules, no external data
//! - [`VibratoModel`]: Japanese morphological analysis with a vibrato-rkyv dictionary
//! - [`ModelManager`]: loads the configured model once and hands out `Arc` handles

use std::collections::HashSet;

use crate::config::Language;
use crate::models::Doc;

pub mod english;
pub mod model_manager;
pub mod vibrato_model;

/// Re-exports
pub use english::{EnglishRuleModel, Lexicon};
pub use model_manager::ModelManager;
pub use vibrato_model::VibratoModel;

/// Common interface of all language models.
///
/// Implementations are immutable after construction and shared across threads
/// through `Arc<dyn LanguageModel>`.
pub trait LanguageModel: Send + Sync {
  /// Short model name for logs, e.g. `"en_rules"`.
  fn name(&self) -> &str;

  /// Language handled by this model.
  fn language(&self) -> Language;

  /// Analyses `text`.
  ///
  /// Token offsets are byte offsets into `text`; whitespace never becomes a token.
  fn analyze(&self, text: &str) -> Doc;

  /// Default stop-word list of the language.
  fn stop_words(&self) -> &HashSet<String>;
}
