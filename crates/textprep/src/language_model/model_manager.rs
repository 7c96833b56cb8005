//! Model Management Module
//!
//! Builds the configured language model once and shares it through `Arc`.
//! English needs no external data (optionally a JSON user lexicon).
//! Japanese needs a vibrato-rkyv dictionary: preset dictionaries are downloaded
//! into the cache directory on the first run and loaded from there afterwards;
//! a local dictionary file can be loaded directly instead.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::{LoadMode, PresetDictionaryKind};

use crate::config::{DictionaryPreset, Language, ModelConfig};
use crate::errors::ModelError;
use crate::language_model::{EnglishRuleModel, LanguageModel, Lexicon, VibratoModel};

/// Where the model comes from
#[derive(Debug, Clone)]
enum ModelSource {
  /// Rule based English model, optionally with a user lexicon
  English { lexicon_path: Option<PathBuf> },
  /// vibrato model from a preset (downloaded) or a local dictionary file
  Vibrato {
    preset: DictionaryPreset,
    dictionary_path: Option<PathBuf>,
  },
}

/// Language model manager
pub struct ModelManager {
  /// Dictionary cache directory (Japanese presets only)
  cache_dir: PathBuf,

  source: ModelSource,

  /// Cache of the loaded model (initialized only once at the first load)
  /// ModelError implements Clone so it can hold Result
  model: OnceLock<Result<Arc<dyn LanguageModel>, ModelError>>,
}

impl ModelManager {
  /// Manager for the built-in English model
  pub fn english() -> Self {
    Self {
      cache_dir: PathBuf::new(),
      source: ModelSource::English { lexicon_path: None },
      model: OnceLock::new(),
    }
  }

  /// Manager for the English model extended with a user lexicon
  pub fn english_with_lexicon<P: AsRef<Path>>(path: P) -> Self {
    Self {
      cache_dir: PathBuf::new(),
      source: ModelSource::English {
        lexicon_path: Some(path.as_ref().to_path_buf()),
      },
      model: OnceLock::new(),
    }
  }

  /// Manager for a Japanese model using a preset dictionary
  ///
  /// The dictionary is cached under the OS cache directory (see [`default_cache_dir`]).
  pub fn japanese_with_preset(preset: DictionaryPreset) -> Result<Self, ModelError> {
    let cache_dir = default_cache_dir()?;

    Ok(Self {
      cache_dir,
      source: ModelSource::Vibrato {
        preset,
        dictionary_path: None,
      },
      model: OnceLock::new(),
    })
  }

  /// Manager for a Japanese model using a local dictionary file
  ///
  /// `preset` describes the feature layout of the dictionary (IPADIC or UniDic).
  pub fn japanese_from_local_path<P: AsRef<Path>>(path: P, preset: DictionaryPreset) -> Result<Self, ModelError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(ModelError::DictionaryNotFound(path.display().to_string()));
    }

    // The dictionary's own directory doubles as cache directory
    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      source: ModelSource::Vibrato {
        preset,
        dictionary_path: Some(path),
      },
      model: OnceLock::new(),
    })
  }

  /// Manager described by the `[model]` configuration section
  pub fn from_config(config: &ModelConfig) -> Result<Self, ModelError> {
    match config.language {
      Language::En => Ok(match &config.lexicon_path {
        Some(path) => Self::english_with_lexicon(path),
        None => Self::english(),
      }),
      Language::Ja => {
        let manager = match &config.dictionary_path {
          Some(path) => Self::japanese_from_local_path(path, config.preset)?,
          None => Self::japanese_with_preset(config.preset)?,
        };
        Ok(match &config.cache_dir {
          Some(dir) if config.dictionary_path.is_none() => manager.with_cache_dir(dir),
          _ => manager,
        })
      }
    }
  }

  /// Overrides the dictionary cache directory
  #[must_use]
  pub fn with_cache_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
    self.cache_dir = dir.as_ref().to_path_buf();
    self
  }

  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Language of the managed model
  pub fn language(&self) -> Language {
    match self.source {
      ModelSource::English { .. } => Language::En,
      ModelSource::Vibrato { .. } => Language::Ja,
    }
  }

  /// Whether `load` has already run (successfully or not)
  pub fn is_loaded(&self) -> bool {
    self.model.get().is_some()
  }

  /// Load model
  /// - Builds the model on the first call
  /// - Returns a clone of the same `Arc` from the second call onwards
  /// - If the first call fails, the error is cached and returned every time
  pub fn load(&self) -> Result<Arc<dyn LanguageModel>, ModelError> {
    self.model.get_or_init(|| self.load_inner()).clone()
  }

  fn load_inner(&self) -> Result<Arc<dyn LanguageModel>, ModelError> {
    let model: Arc<dyn LanguageModel> = match &self.source {
      ModelSource::English { lexicon_path } => {
        let lexicon = match lexicon_path {
          Some(path) => Lexicon::from_path(path)?,
          None => Lexicon::new(),
        };
        Arc::new(EnglishRuleModel::with_lexicon(lexicon))
      }
      ModelSource::Vibrato {
        preset,
        dictionary_path,
      } => {
        let dictionary = match dictionary_path {
          Some(path) => Self::load_from_local_path(path)?,
          None => self.load_from_preset((*preset).into())?,
        };
        Arc::new(VibratoModel::from_shared_dictionary(Arc::new(dictionary), *preset))
      }
    };

    info!(model = model.name(), language = %model.language(), "Language model loaded");
    Ok(model)
  }

  /// Loads a dictionary from a local dictionary file
  fn load_from_local_path(path: &Path) -> Result<Dictionary, ModelError> {
    Dictionary::from_path(path, LoadMode::TrustCache).map_err(|e| ModelError::VibratoLoad(Arc::new(e)))
  }

  /// Downloads the preset on the first run, loads it from the cache afterwards
  fn load_from_preset(&self, preset_kind: PresetDictionaryKind) -> Result<Dictionary, ModelError> {
    std::fs::create_dir_all(&self.cache_dir).map_err(|e| ModelError::CacheDirCreationFailed(Arc::new(e)))?;

    // One subdirectory per dictionary
    let dict_dir = self.cache_dir.join(preset_kind.name());

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| ModelError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Returns the default dictionary cache directory according to the OS
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/textprep/dict`                      |
/// | macOS   | `~/Library/Caches/textprep/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\textprep\dict` |
pub fn default_cache_dir() -> Result<PathBuf, ModelError> {
  let base = dirs::cache_dir().ok_or(ModelError::CacheDirNotFound)?;

  Ok(base.join("textprep").join("dict"))
}

/// `dyn LanguageModel` has no `Debug`; show the source and whether the model is loaded.
impl fmt::Debug for ModelManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ModelManager")
      .field("cache_dir", &self.cache_dir)
      .field("source", &self.source)
      .field("model_initialized", &self.is_loaded())
      .finish()
  }
}
