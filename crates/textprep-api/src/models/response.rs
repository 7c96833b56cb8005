//! Response Model Definition

use serde::Serialize;
use textprep::models::{Entity, Token};

/// Cleaning Response
#[derive(Debug, Serialize)]
pub struct CleanResponse {
  /// Cleaned text
  pub text: String,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Analysis Response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  /// Token sequence of analysis result
  pub tokens: Vec<TokenDto>,
  /// Sentence texts
  pub sentences: Vec<String>,
  /// Named entities
  pub entities: Vec<EntityDto>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Token Information (DTO)
///
/// Converted from a textprep [`Token`] for API response.
#[derive(Debug, Clone, Serialize)]
pub struct TokenDto {
  /// Surface form (string appearing in original text)
  pub text: String,
  /// Dictionary form
  pub lemma: String,
  /// Snowball stem (the lemma for languages without a stemmer)
  pub stem: String,
  /// Universal part of speech, e.g. "NOUN"
  pub pos: String,
  /// Fine-grained tag (Penn Treebank tag or dictionary feature)
  pub tag: String,
  /// Start byte position
  pub start_byte: usize,
  /// End byte position
  pub end_byte: usize,
  /// Whether the token is a stop word
  pub is_stop: bool,
}

impl TokenDto {
  /// Convert from a textprep token
  ///
  /// # Arguments
  /// * `token` - Analysed token
  /// * `stem` - Stem of the token
  /// * `is_stop` - Whether the token is a stop word
  #[must_use]
  pub fn from_token(token: &Token, stem: String, is_stop: bool) -> Self {
    Self {
      text: token.text.clone(),
      lemma: token.lemma.clone(),
      stem,
      pos: token.pos.to_string(),
      tag: token.tag.clone(),
      start_byte: token.start,
      end_byte: token.end,
      is_stop,
    }
  }
}

/// Named Entity Information (DTO)
#[derive(Debug, Clone, Serialize)]
pub struct EntityDto {
  /// Entity text
  pub text: String,
  /// Entity label, e.g. "GPE"
  pub label: String,
  /// Start byte position
  pub start_byte: usize,
  /// End byte position
  pub end_byte: usize,
}

impl From<&Entity> for EntityDto {
  fn from(entity: &Entity) -> Self {
    Self {
      text: entity.text.clone(),
      label: entity.label.to_string(),
      start_byte: entity.start,
      end_byte: entity.end,
    }
  }
}
