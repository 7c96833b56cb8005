// crates/textprep/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Supported language types.
///
/// Each language is served by its own model:
/// - English: `EnglishRuleModel` (lexicon + rules, no external data required)
/// - Japanese: `VibratoModel` (morphological analysis with a vibrato dictionary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  /// English (EnglishRuleModel)
  En,
  /// Japanese (VibratoModel)
  Ja,
}

impl Language {
  /// Returns the language code.
  ///
  /// # Examples
  /// - `Language::En` → `"en"`
  /// - `Language::Ja` → `"ja"`
  pub fn code(&self) -> &'static str {
    match self {
      Language::En => "en",
      Language::Ja => "ja",
    }
  }

  /// Returns the Snowball stemming algorithm for this language, if rust-stemmers has one.
  pub fn stemmer_algorithm(&self) -> Option<rust_stemmers::Algorithm> {
    match self {
      Language::En => Some(rust_stemmers::Algorithm::English),
      Language::Ja => None,
    }
  }
}

impl std::fmt::Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Language {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "en" | "english" => Ok(Self::En),
      "ja" | "japanese" => Ok(Self::Ja),
      _ => Err(format!("Unknown language: {}. Valid values: en, ja", s)),
    }
  }
}

/// Top-level configuration for textprep.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextprepConfig {
  /// [model] section
  #[serde(default)]
  pub model: ModelConfig,
  /// [cleaning] section
  #[serde(default)]
  pub cleaning: CleaningOptions,
  /// [stop_words] section
  #[serde(default)]
  pub stop_words: StopWordConfig,
  /// [limits] section
  #[serde(default)]
  pub limits: LimitsConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [model] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
  /// Language of the model to load
  #[serde(default = "default_language")]
  pub language: Language,
  /// Preset dictionary for Japanese: "ipadic" | "unidic-cwj" | "unidic-csj"
  #[serde(default = "default_preset")]
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// `None` lets `ModelManager` pick the OS cache directory.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
  /// Local vibrato dictionary file (takes precedence over `preset`)
  #[serde(default)]
  pub dictionary_path: Option<PathBuf>,
  /// User lexicon (JSON) merged into the English model
  #[serde(default)]
  pub lexicon_path: Option<PathBuf>,
}

impl Default for ModelConfig {
  fn default() -> Self {
    Self {
      language: default_language(),
      preset: default_preset(),
      cache_dir: None,
      dictionary_path: None,
      lexicon_path: None,
    }
  }
}

fn default_language() -> Language {
  Language::En
}

fn default_preset() -> DictionaryPreset {
  DictionaryPreset::Ipadic
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` from vibrato-rkyv does not implement `Deserialize`,
/// and the orphan rule forbids adding it here, so the config file uses this enum
/// and converts it with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl DictionaryPreset {
  /// Index of the lemma (dictionary form) in the comma separated feature string.
  ///
  /// IPADIC: `品詞,細分類1,細分類2,細分類3,活用型,活用形,原形,読み,発音`
  /// UniDic: `品詞,細分類1,細分類2,細分類3,活用型,活用形,語彙素読み,語彙素,...`
  pub fn lemma_field_index(&self) -> usize {
    match self {
      DictionaryPreset::Ipadic => 6,
      DictionaryPreset::UnidicCwj | DictionaryPreset::UnidicCsj => 7,
    }
  }
}

impl FromStr for DictionaryPreset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
        s
      )),
    }
  }
}

/// [cleaning] section configuration.
///
/// Selects the `BasicCleaning` steps applied by `BasicCleaning::clean`
/// and by the service pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
  /// Strip `<...>` tags
  pub remove_html: bool,
  /// Strip `http(s)://` and `www.` URLs
  pub remove_url: bool,
  /// Process emoji
  pub remove_emoji: bool,
  /// Replace emoji with `:name:` instead of deleting them
  pub replace_emoji_with_meaning: bool,
  /// Strip ASCII punctuation
  pub remove_punctuation: bool,
  /// Lower-case the result
  pub lower_case: bool,
}

impl Default for CleaningOptions {
  fn default() -> Self {
    Self {
      remove_html: true,
      remove_url: true,
      remove_emoji: true,
      replace_emoji_with_meaning: true,
      remove_punctuation: false,
      lower_case: false,
    }
  }
}

/// [stop_words] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StopWordConfig {
  /// Lower-case tokens before the stop-word lookup
  pub case_insensitive: bool,
  /// Additional stop words
  pub extra: Vec<String>,
  /// Words removed from the stop-word list
  pub keep: Vec<String>,
}

/// [limits] section configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
  /// Largest accepted input, in bytes
  pub max_text_bytes: usize,
}

/// Default input limit (1MB)
pub const DEFAULT_MAX_TEXT_BYTES: usize = 1_000_000;

impl Default for LimitsConfig {
  fn default() -> Self {
    Self {
      max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Returns the level as an `EnvFilter` directive.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Loading =====

impl TextprepConfig {
  /// Builds a configuration for `language` with every other section at its default.
  pub fn for_language(language: Language) -> Self {
    Self {
      model: ModelConfig {
        language,
        ..ModelConfig::default()
      },
      ..Self::default()
    }
  }

  /// Parses a configuration from a JSON string.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(Arc::new(e)))
  }

  /// Reads and parses a JSON configuration file.
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_json_str(&json)
  }
}

// ===== Accessor Methods =====

impl TextprepConfig {
  /// Returns the model language.
  pub fn language(&self) -> Language {
    self.model.language
  }

  /// Returns the preset dictionary type to pass to vibrato-rkyv.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.model.preset.into()
  }

  /// Returns the configured dictionary cache directory.
  ///
  /// `None` if unspecified; `ModelManager` then uses the OS cache directory.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.model.cache_dir.as_deref()
  }

  /// Returns the configured user lexicon path.
  pub fn lexicon_path(&self) -> Option<&Path> {
    self.model.lexicon_path.as_deref()
  }

  /// Returns the input limit in bytes.
  pub fn max_text_bytes(&self) -> usize {
    self.limits.max_text_bytes
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `limits.max_text_bytes` is within allowable range (1B - 100MB)
  /// - `model.lexicon_path` is only used with English and points to a file
  /// - `model.dictionary_path` points to a file
  /// - `model.cache_dir` exists or can be created
  ///
  /// # Errors
  /// Returns the first failing check as a `ConfigError`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    const MIN_TEXT_BYTES: usize = 1;
    const MAX_TEXT_BYTES: usize = 100_000_000; // 100MB
    let max_text_bytes = self.limits.max_text_bytes;
    if !(MIN_TEXT_BYTES..=MAX_TEXT_BYTES).contains(&max_text_bytes) {
      return Err(ConfigError::InvalidMaxTextBytes {
        min: MIN_TEXT_BYTES,
        max: MAX_TEXT_BYTES,
        actual: max_text_bytes,
      });
    }

    if let Some(lexicon_path) = &self.model.lexicon_path {
      if self.model.language != Language::En {
        return Err(ConfigError::LexiconNotSupported {
          language: self.model.language,
        });
      }
      if !lexicon_path.is_file() {
        return Err(ConfigError::InvalidLexiconPath {
          path: lexicon_path.clone(),
        });
      }
    }

    if let Some(dictionary_path) = &self.model.dictionary_path
      && !dictionary_path.is_file()
    {
      return Err(ConfigError::InvalidDictionaryPath {
        path: dictionary_path.clone(),
      });
    }

    if let Some(cache_dir) = &self.model.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::CacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// ===== Convert DictionaryPreset (config file) -> PresetDictionaryKind (vibrato-rkyv) =====

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
