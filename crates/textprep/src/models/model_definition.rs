//! Data Model Definition
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Universal part-of-speech tag.
///
/// Same coarse tag set as the Universal Dependencies project; serialised in upper case (`"NOUN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
  /// adjective
  Adj,
  /// adposition
  Adp,
  /// adverb
  Adv,
  /// auxiliary
  Aux,
  /// coordinating conjunction
  Cconj,
  /// determiner
  Det,
  /// interjection
  Intj,
  /// noun
  Noun,
  /// numeral
  Num,
  /// particle
  Part,
  /// pronoun
  Pron,
  /// proper noun
  Propn,
  /// punctuation
  Punct,
  /// subordinating conjunction
  Sconj,
  /// symbol
  Sym,
  /// verb
  Verb,
  /// other
  X,
  /// whitespace
  Space,
}

impl PosTag {
  /// All tags, in declaration order.
  pub const ALL: [PosTag; 18] = [
    PosTag::Adj,
    PosTag::Adp,
    PosTag::Adv,
    PosTag::Aux,
    PosTag::Cconj,
    PosTag::Det,
    PosTag::Intj,
    PosTag::Noun,
    PosTag::Num,
    PosTag::Part,
    PosTag::Pron,
    PosTag::Propn,
    PosTag::Punct,
    PosTag::Sconj,
    PosTag::Sym,
    PosTag::Verb,
    PosTag::X,
    PosTag::Space,
  ];

  /// Returns the tag label, e.g. `"PROPN"`.
  pub fn as_str(&self) -> &'static str {
    match self {
      PosTag::Adj => "ADJ",
      PosTag::Adp => "ADP",
      PosTag::Adv => "ADV",
      PosTag::Aux => "AUX",
      PosTag::Cconj => "CCONJ",
      PosTag::Det => "DET",
      PosTag::Intj => "INTJ",
      PosTag::Noun => "NOUN",
      PosTag::Num => "NUM",
      PosTag::Part => "PART",
      PosTag::Pron => "PRON",
      PosTag::Propn => "PROPN",
      PosTag::Punct => "PUNCT",
      PosTag::Sconj => "SCONJ",
      PosTag::Sym => "SYM",
      PosTag::Verb => "VERB",
      PosTag::X => "X",
      PosTag::Space => "SPACE",
    }
  }

  /// Whether the tag belongs to an open word class (content word).
  pub fn is_content(&self) -> bool {
    matches!(
      self,
      PosTag::Adj | PosTag::Adv | PosTag::Noun | PosTag::Propn | PosTag::Verb
    )
  }
}

impl fmt::Display for PosTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PosTag {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let upper = s.to_uppercase();
    PosTag::ALL
      .into_iter()
      .find(|tag| tag.as_str() == upper)
      .ok_or_else(|| format!("Unknown POS tag: {}", s))
  }
}

/// Named entity label (OntoNotes 5 label set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
  /// People, including fictional
  Person,
  /// Nationalities, religious or political groups
  Norp,
  /// Buildings, airports, highways, bridges
  Fac,
  /// Companies, agencies, institutions
  Org,
  /// Countries, cities, states
  Gpe,
  /// Non-GPE locations, mountain ranges, bodies of water
  Loc,
  /// Objects, vehicles, foods (not services)
  Product,
  /// Named events
  Event,
  /// Titles of books, songs
  WorkOfArt,
  /// Named documents made into laws
  Law,
  /// Any named language
  Language,
  /// Absolute or relative dates or periods
  Date,
  /// Times smaller than a day
  Time,
  /// Percentage
  Percent,
  /// Monetary values
  Money,
  /// Measurements
  Quantity,
  /// "first", "second"
  Ordinal,
  /// Numerals that do not fall under another type
  Cardinal,
}

impl EntityLabel {
  /// All labels, in declaration order.
  pub const ALL: [EntityLabel; 18] = [
    EntityLabel::Person,
    EntityLabel::Norp,
    EntityLabel::Fac,
    EntityLabel::Org,
    EntityLabel::Gpe,
    EntityLabel::Loc,
    EntityLabel::Product,
    EntityLabel::Event,
    EntityLabel::WorkOfArt,
    EntityLabel::Law,
    EntityLabel::Language,
    EntityLabel::Date,
    EntityLabel::Time,
    EntityLabel::Percent,
    EntityLabel::Money,
    EntityLabel::Quantity,
    EntityLabel::Ordinal,
    EntityLabel::Cardinal,
  ];

  /// Returns the label, e.g. `"WORK_OF_ART"`.
  pub fn as_str(&self) -> &'static str {
    match self {
      EntityLabel::Person => "PERSON",
      EntityLabel::Norp => "NORP",
      EntityLabel::Fac => "FAC",
      EntityLabel::Org => "ORG",
      EntityLabel::Gpe => "GPE",
      EntityLabel::Loc => "LOC",
      EntityLabel::Product => "PRODUCT",
      EntityLabel::Event => "EVENT",
      EntityLabel::WorkOfArt => "WORK_OF_ART",
      EntityLabel::Law => "LAW",
      EntityLabel::Language => "LANGUAGE",
      EntityLabel::Date => "DATE",
      EntityLabel::Time => "TIME",
      EntityLabel::Percent => "PERCENT",
      EntityLabel::Money => "MONEY",
      EntityLabel::Quantity => "QUANTITY",
      EntityLabel::Ordinal => "ORDINAL",
      EntityLabel::Cardinal => "CARDINAL",
    }
  }
}

impl fmt::Display for EntityLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for EntityLabel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let upper = s.to_uppercase();
    EntityLabel::ALL
      .into_iter()
      .find(|label| label.as_str() == upper)
      .ok_or_else(|| format!("Unknown entity label: {}", s))
  }
}

/// A token produced by a language model.
///
/// `start..end` is a byte range into the analysed text (`&text[start..end] == self.text`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
  /// Surface form
  pub text: String,
  /// Dictionary form
  pub lemma: String,
  /// Coarse part of speech
  pub pos: PosTag,
  /// Model specific fine-grained tag (e.g. the dictionary feature string)
  pub tag: String,
  /// Start byte offset
  pub start: usize,
  /// End byte offset
  pub end: usize,
  /// Whether this token starts a sentence
  pub is_sent_start: bool,
}

impl Token {
  /// Creates a token whose lemma is its surface form and whose tag mirrors `pos`.
  pub fn new(text: impl Into<String>, pos: PosTag, start: usize, end: usize) -> Self {
    let text = text.into();
    Self {
      lemma: text.clone(),
      text,
      pos,
      tag: pos.as_str().to_string(),
      start,
      end,
      is_sent_start: false,
    }
  }

  /// Builder that sets the lemma
  #[must_use]
  pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
    self.lemma = lemma.into();
    self
  }

  /// Builder that sets the fine-grained tag
  #[must_use]
  pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
    self.tag = tag.into();
    self
  }

  /// Byte range of the token
  pub fn span(&self) -> Range<usize> {
    self.start..self.end
  }
}

/// A named entity: a span of tokens with a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
  /// Entity text (slice of the analysed text)
  pub text: String,
  /// Entity label
  pub label: EntityLabel,
  /// Index of the first token
  pub token_start: usize,
  /// Index one past the last token
  pub token_end: usize,
  /// Start byte offset
  pub start: usize,
  /// End byte offset
  pub end: usize,
}

/// Result of analysing one text with a language model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
  /// Analysed text
  pub text: String,
  /// Tokens, in order
  pub tokens: Vec<Token>,
  /// Sentences as token index ranges
  pub sentences: Vec<Range<usize>>,
  /// Named entities, in order, non-overlapping
  pub entities: Vec<Entity>,
}

impl Doc {
  /// Builds a document from tokens and sentence ranges, marking sentence starts.
  pub fn new(text: impl Into<String>, mut tokens: Vec<Token>, sentences: Vec<Range<usize>>) -> Self {
    for sentence in &sentences {
      if let Some(token) = tokens.get_mut(sentence.start) {
        token.is_sent_start = true;
      }
    }
    Self {
      text: text.into(),
      tokens,
      sentences,
      entities: Vec::new(),
    }
  }

  /// Builder that sets the entities
  #[must_use]
  pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
    self.entities = entities;
    self
  }

  /// Number of tokens
  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  /// Whether the document has no tokens
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  /// Text covered by the token range `range` (from the first token's start to the last token's end).
  pub fn span_text(&self, range: Range<usize>) -> &str {
    match (self.tokens.get(range.start), range.end.checked_sub(1).and_then(|i| self.tokens.get(i))) {
      (Some(first), Some(last)) if range.start < range.end => &self.text[first.start..last.end],
      _ => "",
    }
  }

  /// Builds an entity over the token range `range`.
  ///
  /// Returns `None` for an empty or out-of-bounds range.
  pub fn entity(&self, range: Range<usize>, label: EntityLabel) -> Option<Entity> {
    if range.start >= range.end || range.end > self.tokens.len() {
      return None;
    }
    let start = self.tokens[range.start].start;
    let end = self.tokens[range.end - 1].end;
    Some(Entity {
      text: self.text[start..end].to_string(),
      label,
      token_start: range.start,
      token_end: range.end,
      start,
      end,
    })
  }

  /// Sentence texts, in order
  pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
    self.sentences.iter().map(|range| self.span_text(range.clone()))
  }
}

/// Output of the full pipeline for one text (see `TextprepService::process`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedText {
  /// Text after `BasicCleaning`
  pub cleaned_text: String,
  /// Token surfaces
  pub tokens: Vec<String>,
  /// Sentence texts
  pub sentences: Vec<String>,
  /// Tokens without stop words
  pub filtered_tokens: Vec<String>,
  /// One stem per token
  pub stems: Vec<String>,
  /// One lemma per token
  pub lemmas: Vec<String>,
  /// `(token, part of speech)` pairs
  pub pos_tags: Vec<(String, PosTag)>,
  /// `(entity text, label)` pairs
  pub entities: Vec<(String, String)>,
}
