//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use textprep::config::{DictionaryPreset, Language, ModelConfig, TextprepConfig};

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_LANGUAGE, DEFAULT_PRESET_DICT, MAX_TEXT_LENGTH};
use crate::errors::ApiError;

/// Environment variable names
const ENV_BASE_URL: &str = "TEXTPREP_API_BASE_URL";
const ENV_LANGUAGE: &str = "TEXTPREP_LANGUAGE";
const ENV_PRESET_DICT: &str = "TEXTPREP_PRESET_DICT";
const ENV_LEXICON_PATH: &str = "TEXTPREP_LEXICON_PATH";

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Model language
  pub language: Language,
  /// Dictionary preset to use (Japanese only)
  pub preset: DictionaryPreset,
  /// User lexicon for the English model
  pub lexicon_path: Option<PathBuf>,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` (environment variable name -> value)
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let language_str = lookup(ENV_LANGUAGE).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let language = Language::from_str(&language_str).map_err(ApiError::config)?;

    let preset_dict_str = lookup(ENV_PRESET_DICT).unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string());
    let preset = DictionaryPreset::from_str(&preset_dict_str).map_err(ApiError::config)?;

    let lexicon_path = lookup(ENV_LEXICON_PATH).filter(|s| !s.is_empty()).map(PathBuf::from);

    Ok(Self {
      bind_addr,
      language,
      preset,
      lexicon_path,
    })
  }

  /// Library configuration for this server
  ///
  /// The input limit is [`MAX_TEXT_LENGTH`]; every other section keeps its default.
  #[must_use]
  pub fn to_textprep_config(&self) -> TextprepConfig {
    let mut config = TextprepConfig {
      model: ModelConfig {
        language: self.language,
        preset: self.preset,
        lexicon_path: self.lexicon_path.clone(),
        ..ModelConfig::default()
      },
      ..TextprepConfig::default()
    };
    config.limits.max_text_bytes = MAX_TEXT_LENGTH;
    config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn config_defaults() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.language, Language::En);
    assert_eq!(config.preset, DictionaryPreset::Ipadic);
    assert!(config.lexicon_path.is_none());
  }

  #[test]
  fn config_reads_every_variable() {
    let config = Config::from_lookup(lookup_from(&[
      (ENV_BASE_URL, "0.0.0.0:8080"),
      (ENV_LANGUAGE, "ja"),
      (ENV_PRESET_DICT, "UNIDIC-CWJ"),
      (ENV_LEXICON_PATH, "/tmp/lexicon.json"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.language, Language::Ja);
    assert_eq!(config.preset, DictionaryPreset::UnidicCwj);
    assert_eq!(config.lexicon_path, Some(PathBuf::from("/tmp/lexicon.json")));
  }

  #[test]
  fn config_rejects_unknown_language() {
    let err = Config::from_lookup(lookup_from(&[(ENV_LANGUAGE, "fr")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn config_rejects_unknown_preset() {
    let err = Config::from_lookup(lookup_from(&[(ENV_PRESET_DICT, "invalid")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn empty_lexicon_path_is_ignored() {
    let config = Config::from_lookup(lookup_from(&[(ENV_LEXICON_PATH, "")])).unwrap();
    assert!(config.lexicon_path.is_none());
  }

  #[test]
  fn textprep_config_uses_api_limit() {
    let config = Config::from_lookup(lookup_from(&[(ENV_LANGUAGE, "ja")])).unwrap();
    let textprep_config = config.to_textprep_config();

    assert_eq!(textprep_config.language(), Language::Ja);
    assert_eq!(textprep_config.max_text_bytes(), MAX_TEXT_LENGTH);
    assert!(textprep_config.validate().is_ok());
  }
}
