//! Basic preprocessing
//!
//! Tokenization, sentence splitting, stop-word removal, stemming and lemmatization,
//! all derived from one model call per input text.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rust_stemmers::Stemmer;
use tracing::{debug, warn};

use crate::cleaning::BasicCleaning;
use crate::config::{DEFAULT_MAX_TEXT_BYTES, StopWordConfig, TextprepConfig};
use crate::errors::{AnalysisError, TextprepResult};
use crate::language_model::LanguageModel;
use crate::models::{Doc, Token};

/// Basic preprocessing stage
///
/// Holds a shared handle to the loaded language model.
/// Construction never loads anything; pass the `Arc` obtained from `ModelManager::load`.
#[derive(Clone)]
pub struct BasicPreprocessing {
  cleaning: BasicCleaning,
  model: Arc<dyn LanguageModel>,
  stop_words: HashSet<String>,
  case_insensitive: bool,
  /// `None` for languages without a Snowball algorithm
  stemmer: Option<Arc<Stemmer>>,
  max_text_bytes: usize,
}

impl BasicPreprocessing {
  /// Creates the stage with the model's default stop words and limits.
  pub fn new(model: Arc<dyn LanguageModel>) -> Self {
    let stop_words = model.stop_words().clone();
    let stemmer = model.language().stemmer_algorithm().map(|algorithm| Arc::new(Stemmer::create(algorithm)));

    Self {
      cleaning: BasicCleaning::new(),
      model,
      stop_words,
      case_insensitive: false,
      stemmer,
      max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
    }
  }

  /// Creates the stage with the `[stop_words]` and `[limits]` sections applied.
  pub fn from_config(model: Arc<dyn LanguageModel>, config: &TextprepConfig) -> Self {
    Self::new(model)
      .with_stop_word_config(&config.stop_words)
      .with_max_text_bytes(config.max_text_bytes())
  }

  /// Applies extra/kept stop words and the case sensitivity switch.
  #[must_use]
  pub fn with_stop_word_config(mut self, config: &StopWordConfig) -> Self {
    self.case_insensitive = config.case_insensitive;
    self.stop_words.extend(config.extra.iter().cloned());
    for word in &config.keep {
      self.stop_words.remove(word);
    }
    if self.case_insensitive {
      self.stop_words = self.stop_words.iter().map(|w| w.to_lowercase()).collect();
    }
    self
  }

  /// Overrides the input limit in bytes.
  #[must_use]
  pub fn with_max_text_bytes(mut self, max_text_bytes: usize) -> Self {
    self.max_text_bytes = max_text_bytes;
    self
  }

  /// The cleaning stage
  pub fn cleaning(&self) -> &BasicCleaning {
    &self.cleaning
  }

  /// The shared model handle
  pub fn model(&self) -> &Arc<dyn LanguageModel> {
    &self.model
  }

  /// Input limit in bytes
  pub fn max_text_bytes(&self) -> usize {
    self.max_text_bytes
  }

  /// Whether `word` is a stop word under the current settings.
  pub fn is_stop_word(&self, word: &str) -> bool {
    if self.case_insensitive {
      self.stop_words.contains(&word.to_lowercase())
    } else {
      self.stop_words.contains(word)
    }
  }

  /// Stem of a single token.
  ///
  /// The token is lower-cased first; without a stemmer the lemma is returned.
  pub fn stem_token(&self, token: &Token) -> String {
    match &self.stemmer {
      Some(stemmer) => stemmer.stem(&token.text.to_lowercase()).into_owned(),
      None => token.lemma.clone(),
    }
  }

  /// Runs the model on `text`.
  ///
  /// # Errors
  /// `AnalysisError::TextTooLong` when `text` exceeds the configured limit.
  pub fn analyze(&self, text: &str) -> TextprepResult<Doc> {
    if text.len() > self.max_text_bytes {
      warn!(
        text_bytes = text.len(),
        max_text_bytes = self.max_text_bytes,
        "Input rejected: text too long"
      );
      return Err(
        AnalysisError::TextTooLong {
          actual: text.len(),
          max: self.max_text_bytes,
        }
        .into(),
      );
    }

    if text.is_empty() {
      return Ok(Doc::default());
    }

    let doc = self.model.analyze(text);
    debug!(model = self.model.name(), tokens = doc.len(), "Text analyzed");
    Ok(doc)
  }

  /// Token surfaces, in order.
  pub fn tokenize_words(&self, text: &str) -> TextprepResult<Vec<String>> {
    let doc = self.analyze(text)?;
    Ok(doc.tokens.into_iter().map(|t| t.text).collect())
  }

  /// Sentence texts, in order.
  pub fn tokenize_sentence(&self, text: &str) -> TextprepResult<Vec<String>> {
    let doc = self.analyze(text)?;
    Ok(doc.sentence_texts().map(str::to_string).collect())
  }

  /// Token surfaces that are not stop words.
  pub fn stop_word_removal(&self, text: &str) -> TextprepResult<Vec<String>> {
    let doc = self.analyze(text)?;
    Ok(doc.tokens.into_iter().filter(|t| !self.is_stop_word(&t.text)).map(|t| t.text).collect())
  }

  /// One stem per token.
  pub fn stemming(&self, text: &str) -> TextprepResult<Vec<String>> {
    let doc = self.analyze(text)?;
    Ok(doc.tokens.iter().map(|t| self.stem_token(t)).collect())
  }

  /// One lemma per token.
  pub fn lemmatization(&self, text: &str) -> TextprepResult<Vec<String>> {
    let doc = self.analyze(text)?;
    Ok(doc.tokens.into_iter().map(|t| t.lemma).collect())
  }
}

impl fmt::Debug for BasicPreprocessing {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BasicPreprocessing")
      .field("model", &self.model.name())
      .field("stop_words", &self.stop_words.len())
      .field("case_insensitive", &self.case_insensitive)
      .field("stemmer", &self.stemmer.is_some())
      .field("max_text_bytes", &self.max_text_bytes)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::TextprepError;
  use crate::language_model::EnglishRuleModel;

  fn english() -> BasicPreprocessing {
    BasicPreprocessing::new(Arc::new(EnglishRuleModel::new()))
  }

  #[test]
  fn tokenize_words_keeps_order() {
    let tokens = english().tokenize_words("Hello, world!").unwrap();
    assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
  }

  #[test]
  fn tokenize_words_never_yields_whitespace() {
    let tokens = english().tokenize_words("  spaced \t out\n\nwords ").unwrap();
    assert_eq!(tokens, vec!["spaced", "out", "words"]);
  }

  #[test]
  fn tokenize_sentence_splits_on_terminal_punctuation() {
    let sentences = english().tokenize_sentence("Hello world. How are you? Fine!").unwrap();
    assert_eq!(sentences, vec!["Hello world.", "How are you?", "Fine!"]);
  }

  #[test]
  fn empty_input_yields_empty_output() {
    let stage = english();
    assert!(stage.tokenize_words("").unwrap().is_empty());
    assert!(stage.tokenize_sentence("").unwrap().is_empty());
    assert!(stage.stemming("").unwrap().is_empty());
  }

  #[test]
  fn stop_word_removal_drops_stop_words() {
    let stage = english();
    let filtered = stage.stop_word_removal("this is a machine for the learning").unwrap();
    assert_eq!(filtered, vec!["machine", "learning"]);
    assert!(filtered.iter().all(|w| !stage.is_stop_word(w)));
  }

  #[test]
  fn stop_word_matching_is_case_sensitive_by_default() {
    let filtered = english().stop_word_removal("The machine").unwrap();
    assert_eq!(filtered, vec!["The", "machine"]);
  }

  #[test]
  fn stop_word_config_is_applied() {
    let config = StopWordConfig {
      case_insensitive: true,
      extra: vec!["Machine".to_string()],
      keep: vec!["not".to_string()],
    };
    let stage = english().with_stop_word_config(&config);

    let filtered = stage.stop_word_removal("The machine is not learning").unwrap();
    assert_eq!(filtered, vec!["not", "learning"]);
    assert!(stage.is_stop_word("MACHINE"));
  }

  #[test]
  fn stemming_lower_cases_and_stems() {
    assert_eq!(english().stemming("running cats").unwrap(), vec!["run", "cat"]);
    assert_eq!(english().stemming("Running").unwrap(), vec!["run"]);
  }

  #[test]
  fn stemming_follows_porter2_rules() {
    // Porter2 keeps the "gener" prefix intact and strips "-ly" after a valid ending
    assert_eq!(english().stemming("generously fairly").unwrap(), vec!["generous", "fair"]);
  }

  #[test]
  fn lemmatization_returns_one_lemma_per_token() {
    let lemmas = english().lemmatization("The children were running").unwrap();
    assert_eq!(lemmas, vec!["the", "child", "be", "run"]);
  }

  #[test]
  fn oversized_text_is_rejected() {
    let stage = english().with_max_text_bytes(8);
    let err = stage.tokenize_words("too long for the limit").unwrap_err();
    assert!(matches!(
      err,
      TextprepError::Analysis(AnalysisError::TextTooLong { actual: 22, max: 8 })
    ));
    assert!(stage.tokenize_words("short").is_ok());
  }

  #[test]
  fn from_config_applies_sections() {
    let mut config = TextprepConfig::default();
    config.limits.max_text_bytes = 16;
    config.stop_words.extra = vec!["rust".to_string()];

    let stage = BasicPreprocessing::from_config(Arc::new(EnglishRuleModel::new()), &config);
    assert_eq!(stage.max_text_bytes(), 16);
    assert!(stage.is_stop_word("rust"));
  }
}
