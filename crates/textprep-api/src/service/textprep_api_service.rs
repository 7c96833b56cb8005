//! Text Preprocessing Service

use std::time::Instant;

use textprep::service::TextprepService;

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{AnalyzeRequest, AnalyzeResponse, CleanRequest, CleanResponse, EntityDto, TokenDto};

/// Common interface for the preprocessing service
///
/// This trait allows swapping production implementation (`TextprepApiServiceFull`) with
/// test stubs/mocks.
pub trait TextprepApiService: Send + Sync {
  /// Cleans the text
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, etc.)
  fn clean(&self, request: CleanRequest) -> Result<CleanResponse>;

  /// Analyses the text
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, etc.)
  /// - Internal error
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;
}

/// Rejects empty and oversized input
fn validate_text(text: &str) -> Result<()> {
  let text_bytes = text.len();
  if text_bytes == 0 {
    return Err(ApiError::invalid_input("Text is empty"));
  }

  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
  }

  Ok(())
}

/// Preprocessing Service
///
/// Wraps a [`TextprepService`] whose model is loaded once at startup.
#[derive(Debug)]
pub struct TextprepApiServiceFull {
  inner: TextprepService,
}

impl TextprepApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (language, dictionary preset, lexicon)
  ///
  /// # Errors
  /// Returns an error if the model cannot be loaded
  pub fn new(config: &Config) -> Result<Self> {
    let inner = TextprepService::init(&config.to_textprep_config())?;
    Ok(Self { inner })
  }

  /// Cleans the text with the request options, or the server defaults
  ///
  /// # Errors
  /// - If text is empty
  /// - If text exceeds maximum length
  pub fn clean(&self, request: CleanRequest) -> Result<CleanResponse> {
    validate_text(&request.text)?;

    let start = Instant::now();

    let options = request.options.unwrap_or(*self.inner.cleaning_options());
    let text = self.inner.cleaning().clean(&request.text, &options);

    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(CleanResponse { text, elapsed_ms })
  }

  /// Analyses the text (returns all tokens)
  ///
  /// # Errors
  /// - If text is empty
  /// - If text exceeds maximum length
  pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    validate_text(&request.text)?;

    // Start measuring processing time
    let start = Instant::now();

    let basic = self.inner.basic();
    let doc = basic.analyze(&request.text)?;

    let tokens = doc
      .tokens
      .iter()
      .map(|token| TokenDto::from_token(token, basic.stem_token(token), basic.is_stop_word(&token.text)))
      .collect();
    let sentences = doc.sentence_texts().map(str::to_string).collect();
    let entities = doc.entities.iter().map(EntityDto::from).collect();

    // End measuring processing time
    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(AnalyzeResponse {
      tokens,
      sentences,
      entities,
      elapsed_ms,
    })
  }
}

/// Production implementation of trait `TextprepApiService`
impl TextprepApiService for TextprepApiServiceFull {
  fn clean(&self, request: CleanRequest) -> Result<CleanResponse> {
    // Note: Writing `self.clean(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    TextprepApiServiceFull::clean(self, request)
  }

  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    TextprepApiServiceFull::analyze(self, request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use textprep::config::{CleaningOptions, DictionaryPreset, Language};

  fn create_test_config(language: Language) -> Config {
    Config {
      bind_addr: "127.0.0.1:5541".to_string(),
      language,
      preset: DictionaryPreset::Ipadic,
      lexicon_path: None,
    }
  }

  fn create_english_service() -> TextprepApiServiceFull {
    TextprepApiServiceFull::new(&create_test_config(Language::En)).expect("Failed to build English service")
  }

  #[test]
  fn analyze_returns_tokens_sentences_and_entities() {
    let service = create_english_service();
    let response = service
      .analyze(AnalyzeRequest {
        text: "The cats sleep in Paris. They are happy.".to_string(),
      })
      .unwrap();

    assert_eq!(response.sentences, vec!["The cats sleep in Paris.", "They are happy."]);

    let cats = &response.tokens[1];
    assert_eq!(cats.text, "cats");
    assert_eq!(cats.lemma, "cat");
    assert_eq!(cats.stem, "cat");
    assert_eq!(cats.pos, "NOUN");
    assert_eq!((cats.start_byte, cats.end_byte), (4, 8));
    assert!(response.tokens[3].is_stop);
    assert!(!cats.is_stop);

    assert!(response.entities.iter().any(|e| e.text == "Paris" && e.label == "GPE"));
  }

  #[test]
  fn clean_uses_request_options() {
    let service = create_english_service();
    let options = CleaningOptions {
      lower_case: true,
      remove_punctuation: true,
      ..CleaningOptions::default()
    };
    let response = service
      .clean(CleanRequest {
        text: "<b>Hello</b>, World!".to_string(),
        options: Some(options),
      })
      .unwrap();

    assert_eq!(response.text, "hello world");
  }

  #[test]
  fn clean_falls_back_to_server_options() {
    let service = create_english_service();
    let response = service
      .clean(CleanRequest {
        text: "<b>Hi</b> 🚀 https://example.com".to_string(),
        options: None,
      })
      .unwrap();

    assert_eq!(response.text, "Hi :rocket: ");
  }

  #[test]
  fn test_empty_text_error() {
    let service = create_english_service();
    let result = service.analyze(AnalyzeRequest { text: "".to_string() });
    assert_eq!(result.unwrap_err().code(), "invalid_input");

    let result = service.clean(CleanRequest {
      text: "".to_string(),
      options: None,
    });
    assert_eq!(result.unwrap_err().code(), "invalid_input");
  }

  #[test]
  fn test_text_too_long_error() {
    let service = create_english_service();
    let long_text = "a".repeat(MAX_TEXT_LENGTH + 1);
    let result = service.analyze(AnalyzeRequest { text: long_text });
    assert_eq!(result.unwrap_err().code(), "text_too_long");
  }

  #[test]
  fn missing_lexicon_is_a_config_error() {
    let mut config = create_test_config(Language::En);
    config.lexicon_path = Some(std::path::PathBuf::from("/nonexistent/lexicon.json"));

    let err = TextprepApiServiceFull::new(&config).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  // Dictionary-dependent tests are opt-in with with_dict_tests feature
  #[test]
  #[cfg_attr(not(feature = "with_dict_tests"), ignore)]
  fn test_japanese_service_creation() {
    let service = TextprepApiServiceFull::new(&create_test_config(Language::Ja))
      .expect("Failed to load dictionary: check test environment");
    let response = service
      .analyze(AnalyzeRequest {
        text: "東京は日本の首都です。".to_string(),
      })
      .unwrap();
    assert!(!response.tokens.is_empty());
    assert_eq!(response.tokens[0].text, "東京");
  }
}
