//! crates/textprep/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow: Load config -> Build service -> Clean -> Analyze ->
//! Verify every preprocessing output.

use std::fs;

use tempfile::TempDir;

use textprep::config::{Language, TextprepConfig};
use textprep::errors::{ConfigError, ModelError, TextprepError};
use textprep::models::PosTag;
use textprep::service::TextprepService;

/// Writes `json` as a config file and builds a service from it.
fn service_from_json(temp_dir: &TempDir, json: &str) -> TextprepService {
  let path = temp_dir.path().join("textprep.json");
  fs::write(&path, json).expect("failed to write config");

  let config = TextprepConfig::from_path(&path).expect("failed to read config");
  TextprepService::init(&config).expect("failed to build service")
}

#[test]
fn full_pipeline_on_html_input() {
  let service = TextprepService::init(&TextprepConfig::for_language(Language::En)).unwrap();

  let input = "<div>Apple hired 3 engineers in London last week. See www.apple.com 🚀</div>";
  let result = service.process(input).unwrap();

  assert!(!result.cleaned_text.contains("<div>"));
  assert!(!result.cleaned_text.contains("www.apple.com"));
  assert!(result.cleaned_text.contains(":rocket:"));

  // Offsets of every token slice back into the cleaned text
  let doc = service.basic().analyze(&result.cleaned_text).unwrap();
  for token in &doc.tokens {
    assert_eq!(&result.cleaned_text[token.start..token.end], token.text);
    assert!(!token.text.chars().any(char::is_whitespace));
  }

  // Joined sentences cover all tokens in order
  let joined = result.sentences.join(" ");
  let mut rest = joined.as_str();
  for token in &result.tokens {
    let at = rest.find(token.as_str()).expect("token missing from sentences");
    rest = &rest[at + token.len()..];
  }

  assert!(result.entities.contains(&("London".to_string(), "GPE".to_string())));
  assert!(result.entities.contains(&("3".to_string(), "CARDINAL".to_string())));
  assert!(result.entities.contains(&("last week".to_string(), "DATE".to_string())));
}

#[test]
fn config_file_drives_cleaning_and_stop_words() {
  let temp_dir = TempDir::new().unwrap();
  let service = service_from_json(
    &temp_dir,
    r#"{
      "cleaning": { "lower_case": true, "remove_punctuation": true },
      "stop_words": { "extra": ["machines"] }
    }"#,
  );

  let result = service.process("The Machines are learning!").unwrap();

  assert_eq!(result.cleaned_text, "the machines are learning");
  assert_eq!(result.filtered_tokens, vec!["learning"]);
  assert_eq!(result.stems, vec!["the", "machin", "are", "learn"]);
}

#[test]
fn user_lexicon_is_loaded_through_config() {
  let temp_dir = TempDir::new().unwrap();
  let lexicon = temp_dir.path().join("lexicon.json");
  fs::write(
    &lexicon,
    r#"{
      "words": { "tokio": { "pos": "PROPN" } },
      "entities": { "Tokio Labs": "ORG" }
    }"#,
  )
  .unwrap();

  let json = format!(r#"{{ "model": {{ "lexicon_path": {:?} }} }}"#, lexicon.display().to_string());
  let service = service_from_json(&temp_dir, &json);

  let tags = service.advanced().pos_tagging("we use tokio").unwrap();
  assert_eq!(tags[2], ("tokio".to_string(), PosTag::Propn));

  let entities = service.advanced().named_entity_recognizer("She joined Tokio Labs.", false).unwrap();
  assert_eq!(entities, vec![("Tokio Labs".to_string(), "ORG".to_string())]);
}

#[test]
fn broken_lexicon_fails_initialization() {
  let temp_dir = TempDir::new().unwrap();
  let lexicon = temp_dir.path().join("lexicon.json");
  fs::write(&lexicon, "{ not json").unwrap();

  let mut config = TextprepConfig::for_language(Language::En);
  config.model.lexicon_path = Some(lexicon);

  let err = TextprepService::init(&config).unwrap_err();
  assert!(matches!(err, TextprepError::Model(ModelError::LexiconParse { .. })));
}

#[test]
fn missing_dictionary_fails_validation() {
  let temp_dir = TempDir::new().unwrap();
  let mut config = TextprepConfig::for_language(Language::Ja);
  config.model.dictionary_path = Some(temp_dir.path().join("system.dic"));

  let err = TextprepService::init(&config).unwrap_err();
  assert!(matches!(err, TextprepError::Config(ConfigError::InvalidDictionaryPath { .. })));
}
