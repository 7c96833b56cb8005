//! Advanced preprocessing
//!
//! Part-of-speech tagging and named entity recognition.

use std::sync::Arc;

use crate::errors::TextprepResult;
use crate::language_model::LanguageModel;
use crate::models::PosTag;
use crate::preprocessing::BasicPreprocessing;

/// Label given to every entity by binary NER
pub const BINARY_ENTITY_LABEL: &str = "NE";

/// Advanced preprocessing stage
///
/// Owns a [`BasicPreprocessing`] and analyses text through it,
/// so both stages share the same model handle and input limit.
#[derive(Debug, Clone)]
pub struct AdvancedPreprocessing {
  basic: BasicPreprocessing,
}

impl AdvancedPreprocessing {
  /// Creates the stage on top of an existing basic stage.
  pub fn new(basic: BasicPreprocessing) -> Self {
    Self { basic }
  }

  /// Creates the stage (and its basic stage) from a model handle.
  pub fn from_model(model: Arc<dyn LanguageModel>) -> Self {
    Self::new(BasicPreprocessing::new(model))
  }

  /// The underlying basic stage
  pub fn basic(&self) -> &BasicPreprocessing {
    &self.basic
  }

  /// `(token text, part of speech)` for every token, in order.
  pub fn pos_tagging(&self, text: &str) -> TextprepResult<Vec<(String, PosTag)>> {
    let doc = self.basic.analyze(text)?;
    Ok(doc.tokens.into_iter().map(|t| (t.text, t.pos)).collect())
  }

  /// `(entity text, label)` for every entity, in order.
  ///
  /// With `binary == true` every label is [`BINARY_ENTITY_LABEL`].
  pub fn named_entity_recognizer(&self, text: &str, binary: bool) -> TextprepResult<Vec<(String, String)>> {
    let doc = self.basic.analyze(text)?;
    Ok(
      doc
        .entities
        .into_iter()
        .map(|e| {
          let label = if binary { BINARY_ENTITY_LABEL.to_string() } else { e.label.to_string() };
          (e.text, label)
        })
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::{AnalysisError, TextprepError};
  use crate::language_model::EnglishRuleModel;

  fn english() -> AdvancedPreprocessing {
    AdvancedPreprocessing::from_model(Arc::new(EnglishRuleModel::new()))
  }

  #[test]
  fn pos_tagging_returns_one_pair_per_token() {
    let stage = english();
    let text = "The quick dog barked loudly.";
    let tags = stage.pos_tagging(text).unwrap();
    let tokens = stage.basic().tokenize_words(text).unwrap();

    assert_eq!(tags.len(), tokens.len());
    assert_eq!(tags[0], ("The".to_string(), PosTag::Det));
    assert_eq!(tags.last().unwrap(), &(".".to_string(), PosTag::Punct));
  }

  #[test]
  fn named_entities_carry_labels() {
    let entities = english()
      .named_entity_recognizer("Mr. Smith paid $20 in Paris.", false)
      .unwrap();

    assert!(entities.contains(&("Smith".to_string(), "PERSON".to_string())));
    assert!(entities.contains(&("$20".to_string(), "MONEY".to_string())));
    assert!(entities.contains(&("Paris".to_string(), "GPE".to_string())));
  }

  #[test]
  fn binary_ner_labels_everything_ne() {
    let entities = english()
      .named_entity_recognizer("Mr. Smith paid $20 in Paris.", true)
      .unwrap();

    assert!(!entities.is_empty());
    assert!(entities.iter().all(|(_, label)| label == BINARY_ENTITY_LABEL));
  }

  #[test]
  fn empty_text_has_no_tags_or_entities() {
    let stage = english();
    assert!(stage.pos_tagging("").unwrap().is_empty());
    assert!(stage.named_entity_recognizer("", false).unwrap().is_empty());
  }

  #[test]
  fn limit_of_the_basic_stage_applies() {
    let stage = AdvancedPreprocessing::new(english().basic().clone().with_max_text_bytes(4));
    let err = stage.pos_tagging("longer than four").unwrap_err();
    assert!(matches!(err, TextprepError::Analysis(AnalysisError::TextTooLong { .. })));
  }
}
