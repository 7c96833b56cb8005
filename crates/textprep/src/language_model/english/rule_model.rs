//! English language model

use std::collections::HashSet;

use stop_words::{LANGUAGE, get};
use tracing::debug;

use super::entities::recognize;
use super::lexicon::Lexicon;
use super::tagger::tag_tokens;
use super::tokenizer::{segment, split_sentences};
use crate::config::Language;
use crate::language_model::LanguageModel;
use crate::models::Doc;

/// Rule based English model
///
/// - Immutable after construction
/// - `Send + Sync`; share it as `Arc<dyn LanguageModel>`
#[derive(Debug, Clone)]
pub struct EnglishRuleModel {
  lexicon: Lexicon,
  stop_words: HashSet<String>,
}

impl EnglishRuleModel {
  /// Model with the built-in tables only
  pub fn new() -> Self {
    Self::with_lexicon(Lexicon::new())
  }

  /// Model extended with a user lexicon
  pub fn with_lexicon(lexicon: Lexicon) -> Self {
    let stop_words = get(LANGUAGE::English).iter().map(|w| w.to_string()).collect();
    Self { lexicon, stop_words }
  }

  /// The user lexicon
  pub fn lexicon(&self) -> &Lexicon {
    &self.lexicon
  }
}

impl Default for EnglishRuleModel {
  fn default() -> Self {
    Self::new()
  }
}

impl LanguageModel for EnglishRuleModel {
  fn name(&self) -> &str {
    "en_rules"
  }

  fn language(&self) -> Language {
    Language::En
  }

  fn analyze(&self, text: &str) -> Doc {
    let spans = segment(text);
    let sentences = split_sentences(text, &spans);
    let tokens = tag_tokens(text, &spans, &sentences, &self.lexicon);
    let doc = Doc::new(text, tokens, sentences);
    let entities = recognize(&doc, &self.lexicon);

    debug!(
      text_bytes = text.len(),
      tokens = doc.tokens.len(),
      sentences = doc.sentences.len(),
      entities = entities.len(),
      "English analysis completed"
    );

    doc.with_entities(entities)
  }

  fn stop_words(&self) -> &HashSet<String> {
    &self.stop_words
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::PosTag;

  #[test]
  fn analyze_produces_consistent_document() {
    let text = "Rust is fast. It's also safe!";
    let doc = EnglishRuleModel::new().analyze(text);

    assert_eq!(doc.text, text);
    assert_eq!(doc.sentences.len(), 2);
    for token in &doc.tokens {
      assert_eq!(&text[token.start..token.end], token.text);
    }
    let starts: Vec<&str> = doc.tokens.iter().filter(|t| t.is_sent_start).map(|t| t.text.as_str()).collect();
    assert_eq!(starts, vec!["Rust", "It"]);
  }

  #[test]
  fn empty_text_gives_empty_document() {
    let doc = EnglishRuleModel::new().analyze("");
    assert!(doc.is_empty());
    assert!(doc.sentences.is_empty());
    assert!(doc.entities.is_empty());

    let doc = EnglishRuleModel::new().analyze("   \n\t ");
    assert!(doc.is_empty());
  }

  #[test]
  fn sentences_cover_every_token_once() {
    let doc = EnglishRuleModel::new().analyze("One. Two three? Four!\n\nFive six");
    let covered: usize = doc.sentences.iter().map(|s| s.len()).sum();
    assert_eq!(covered, doc.tokens.len());
    for pair in doc.sentences.windows(2) {
      assert_eq!(pair[0].end, pair[1].start);
    }
  }

  #[test]
  fn stop_words_contain_common_function_words() {
    let model = EnglishRuleModel::new();
    for word in ["the", "and", "is", "of"] {
      assert!(model.stop_words().contains(word), "missing {word}");
    }
    assert!(!model.stop_words().contains("rust"));
  }

  #[test]
  fn name_and_language() {
    let model = EnglishRuleModel::default();
    assert_eq!(model.name(), "en_rules");
    assert_eq!(model.language(), Language::En);
  }

  #[test]
  fn lexicon_words_are_used() {
    let mut lexicon = Lexicon::new();
    lexicon.insert_word("serde", PosTag::Propn, None);
    let doc = EnglishRuleModel::with_lexicon(lexicon).analyze("we love serde");
    assert_eq!(doc.tokens[2].pos, PosTag::Propn);
  }
}
