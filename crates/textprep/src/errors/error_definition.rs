//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::config::Language;

/// Errors related to the configuration (`TextprepConfig`)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// limits.max_text_bytes is outside the accepted range
  #[error("limits.max_text_bytes must be between {min} and {max} bytes: actual={actual}")]
  InvalidMaxTextBytes {
    /// Smallest accepted value
    min: usize,
    /// Largest accepted value
    max: usize,
    /// Configured value
    actual: usize,
  },

  /// model.lexicon_path is set for a language that has no lexicon support
  #[error("model.lexicon_path is only supported for English, not for {language}")]
  LexiconNotSupported {
    /// Configured language
    language: Language,
  },

  /// model.lexicon_path does not point to a file
  #[error("model.lexicon_path is not a file: path={path:?}")]
  InvalidLexiconPath {
    /// Offending path
    path: PathBuf,
  },

  /// model.dictionary_path does not point to a file
  #[error("model.dictionary_path is not a file: path={path:?}")]
  InvalidDictionaryPath {
    /// Offending path
    path: PathBuf,
  },

  /// model.cache_dir exists but is not a directory
  #[error("model.cache_dir is not a directory: path={path:?}")]
  InvalidCacheDir {
    /// Offending path
    path: PathBuf,
  },

  /// model.cache_dir could not be created
  #[error("failed to create model.cache_dir: path={path:?}, error={source}")]
  CacheDirCreationFailed {
    /// Path we tried to create
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Configuration file could not be read
  #[error("failed to read config file: path={path:?}, error={source}")]
  ReadFailed {
    /// Config file path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Configuration JSON could not be parsed
  #[error("failed to parse config: {0}")]
  Parse(Arc<serde_json::Error>),

  /// The tracing subscriber could not be installed
  #[error("failed to initialise logging: {reason}")]
  LoggingInit {
    /// Reason reported by tracing-subscriber
    reason: String,
  },
}

/// Errors raised while loading a language model
///
/// English models may be extended with a JSON lexicon;
/// Japanese models need a vibrato dictionary (preset or local file).
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ModelError {
  /// Lexicon file not found
  #[error("lexicon not found: {0}")]
  LexiconNotFound(PathBuf),

  /// Lexicon file could not be read
  #[error("failed to read lexicon {path:?}: {source}")]
  LexiconRead {
    /// Lexicon path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Lexicon JSON is malformed
  #[error("failed to parse lexicon {path:?}: {source}")]
  LexiconParse {
    /// Lexicon path
    path: PathBuf,
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// Lexicon entry refers to an unknown POS tag
  #[error("unknown part-of-speech tag in lexicon entry '{word}': {tag}")]
  UnknownPosTag {
    /// Lexicon word
    word: String,
    /// Unrecognised tag
    tag: String,
  },

  /// Lexicon entry refers to an unknown entity label
  #[error("unknown entity label in lexicon entry '{phrase}': {label}")]
  UnknownEntityLabel {
    /// Gazetteer phrase
    phrase: String,
    /// Unrecognised label
    label: String,
  },

  /// OS cache directory could not be determined
  #[error("dictionary cache directory not found")]
  CacheDirNotFound,

  /// Dictionary cache directory could not be created
  #[error("failed to create dictionary cache directory: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// Local dictionary file not found
  #[error("dictionary not found: {0}")]
  DictionaryNotFound(String),

  /// Neither a dictionary path nor a preset was given
  #[error("invalid dictionary path or preset: path={0:?}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(Option<PathBuf>, Option<PresetDictionaryKind>),

  /// vibrato-rkyv failed to load the dictionary
  #[error("vibrato-rkyv dictionary load error: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv failed to download a preset dictionary
  #[error("vibrato-rkyv preset dictionary download failed: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// Errors raised while analysing a piece of text
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalysisError {
  /// Model failure
  #[error("model error: {0}")]
  Model(#[from] ModelError),

  /// Input text exceeds the configured limit
  #[error("input text is too long: {actual} bytes (max {max} bytes)")]
  TextTooLong {
    /// Input length in bytes
    actual: usize,
    /// Configured limit in bytes
    max: usize,
  },

  /// Input text is invalid
  #[error("invalid input text: {reason}")]
  InvalidInput {
    /// Reason
    reason: String,
  },
}

/// Unified error
/// Public APIs of this crate return this error.
/// Use as `TextprepResult<T>` = `Result<T, TextprepError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TextprepError {
  /// Model errors
  #[error(transparent)]
  Model(#[from] ModelError),

  /// Analysis errors
  #[error(transparent)]
  Analysis(#[from] AnalysisError),

  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard result alias for the textprep crate
pub type TextprepResult<T> = Result<T, TextprepError>;
