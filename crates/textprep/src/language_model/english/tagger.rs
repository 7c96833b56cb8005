//! Part-of-speech tagging and lemmatization
//!
//! Two passes per sentence:
//! 1. lexical: every token gets a reading from the user lexicon, the closed-class
//!    lists, the open-class lexicons (with inflection stripping) or suffix heuristics
//! 2. context: ambiguous readings are resolved from their neighbours
//!
//! Lemmas are derived from the final part of speech.

use std::ops::Range;

use super::lexicon::{self, Lexicon};
use crate::models::{PosTag, Token};

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];
const MODALS: &[&str] = &[
  "will", "would", "shall", "should", "can", "could", "may", "might", "must", "'ll", "'d", "ca",
  "wo", "ought",
];
const LIGHT_AUXILIARIES: &[&str] = &[
  "have", "has", "had", "having", "'ve", "do", "does", "did", "doing",
];
const WH_WORDS: &[&str] = &["what", "which", "whose"];

/// Lexical reading of a token before context is applied
#[derive(Debug, Clone, Copy)]
struct Reading {
  pos: PosTag,
  /// not revisited by the context pass
  fixed: bool,
  verb: bool,
  noun: bool,
  adj: bool,
}

impl Reading {
  fn fixed(pos: PosTag) -> Self {
    Self { pos, fixed: true, verb: false, noun: false, adj: false }
  }

  fn open(pos: PosTag) -> Self {
    Self {
      pos,
      fixed: false,
      verb: pos == PosTag::Verb,
      noun: pos == PosTag::Noun,
      adj: pos == PosTag::Adj,
    }
  }

  fn with_verb(mut self) -> Self {
    self.verb = true;
    self
  }

  fn with_noun(mut self) -> Self {
    self.noun = true;
    self
  }

  fn with_adj(mut self) -> Self {
    self.adj = true;
    self
  }

  fn may_be_verb(&self) -> bool {
    self.pos == PosTag::Verb || self.verb
  }
}

/// Tags and lemmatizes the tokens at `spans`.
pub(crate) fn tag_tokens(
  text: &str,
  spans: &[Range<usize>],
  sentences: &[Range<usize>],
  user: &Lexicon,
) -> Vec<Token> {
  let words: Vec<&str> = spans.iter().map(|r| &text[r.clone()]).collect();
  let lowers: Vec<String> = words.iter().map(|w| normalize(w)).collect();

  let mut sent_start = vec![false; spans.len()];
  for sentence in sentences {
    if let Some(flag) = sent_start.get_mut(sentence.start) {
      *flag = true;
    }
  }

  let readings: Vec<Reading> = words
    .iter()
    .zip(&lowers)
    .zip(&sent_start)
    .map(|((word, lower), start)| lexical_reading(word, lower, *start, user))
    .collect();

  let mut tags: Vec<PosTag> = readings.iter().map(|r| r.pos).collect();
  for sentence in sentences {
    for index in sentence.clone() {
      if !readings[index].fixed {
        tags[index] = contextual_pos(index, sentence, &lowers, &readings, &tags, spans);
      }
    }
  }

  words
    .iter()
    .enumerate()
    .map(|(index, word)| {
      let pos = tags[index];
      let lower = &lowers[index];
      let user_lemma = user.word(word).and_then(|entry| entry.lemma.clone());
      let lemma = user_lemma.unwrap_or_else(|| lemmatize(word, lower, pos));
      let prev = index.checked_sub(1).map(|i| lowers[i].as_str());
      let fine = penn_tag(word, lower, &lemma, pos, prev);
      Token::new(*word, pos, spans[index].start, spans[index].end)
        .with_lemma(lemma)
        .with_tag(fine)
    })
    .collect()
}

/// Lower case with typographic apostrophes folded
fn normalize(word: &str) -> String {
  word.to_lowercase().replace('’', "'")
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexical pass
// ─────────────────────────────────────────────────────────────────────────────

fn lexical_reading(word: &str, lower: &str, sent_start: bool, user: &Lexicon) -> Reading {
  if let Some(entry) = user.word(word) {
    return Reading::fixed(entry.pos);
  }
  if is_url_or_email(word) {
    return Reading::fixed(PosTag::X);
  }
  if !word.chars().any(char::is_alphanumeric) {
    if let Some(pos) = lexicon::closed_class(lower) {
      return Reading::open(pos);
    }
    let pos = if word.chars().all(is_punctuation_char) { PosTag::Punct } else { PosTag::Sym };
    return Reading::fixed(pos);
  }
  if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
    return Reading::fixed(numeric_pos(word, lower));
  }

  let letters = word.chars().filter(|c| c.is_alphabetic()).count();
  let all_caps = letters > 1 && word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase());
  if all_caps && !word.contains('.') {
    return match lexicon::closed_class(lower) {
      Some(PosTag::Intj) => Reading::fixed(PosTag::Intj),
      _ => Reading::fixed(PosTag::Propn),
    };
  }

  if let Some(pos) = lexicon::closed_class(lower) {
    return Reading::open(pos);
  }

  let capitalized = word.chars().next().is_some_and(char::is_uppercase);
  if capitalized && !sent_start {
    return Reading::fixed(PosTag::Propn);
  }
  if let Some(reading) = known_reading(lower) {
    return reading;
  }
  if capitalized {
    return Reading::fixed(PosTag::Propn);
  }
  suffix_reading(lower)
}

fn is_url_or_email(word: &str) -> bool {
  word.contains("://")
    || word.starts_with("www.")
    || (word.contains('@') && word.contains('.') && word.chars().any(char::is_alphanumeric))
}

fn is_punctuation_char(c: char) -> bool {
  (c.is_ascii_punctuation() && !matches!(c, '$' | '%' | '+' | '=' | '<' | '>' | '#' | '^' | '~' | '|' | '/' | '\\' | '`' | '@'))
    || matches!(c, '—' | '–' | '…' | '“' | '”' | '‘' | '’' | '«' | '»' | '¿' | '¡' | '·')
}

fn numeric_pos(word: &str, lower: &str) -> PosTag {
  let digits_end = lower.find(|c: char| !c.is_ascii_digit()).unwrap_or(lower.len());
  let suffix = &lower[digits_end..];
  if suffix.is_empty() || suffix.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '/' | ':' | '-')) {
    return PosTag::Num;
  }
  if matches!(suffix, "st" | "nd" | "rd" | "th") {
    return PosTag::Adj;
  }
  if word.chars().any(char::is_uppercase) { PosTag::Propn } else { PosTag::Noun }
}

/// Reading of a word found in the lexicons, directly or after stripping an inflection
fn known_reading(lower: &str) -> Option<Reading> {
  if let Some((_, pos)) = lexicon::irregular(lower) {
    return Some(Reading::open(pos));
  }

  if let Some(reading) = lexicon_reading(lower) {
    return Some(reading);
  }

  if let Some(base) = lower.strip_suffix("ing").filter(|b| b.len() >= 2) {
    if verb_base(base, "ing").is_some() {
      return Some(Reading::open(PosTag::Verb).with_noun().with_adj());
    }
  }
  if let Some(base) = lower.strip_suffix("ed").filter(|b| b.len() >= 2) {
    if verb_base(base, "ed").is_some() {
      return Some(Reading::open(PosTag::Verb).with_adj());
    }
  }
  if lower.ends_with('s') && !lower.ends_with("ss") {
    let noun = noun_singular(lower).filter(|s| lexicon::is_noun(s)).is_some();
    let verb = verb_third_person_base(lower).filter(|s| lexicon::is_verb(s)).is_some();
    match (noun, verb) {
      (true, true) => return Some(Reading::open(PosTag::Noun).with_verb()),
      (true, false) => return Some(Reading::open(PosTag::Noun)),
      (false, true) => return Some(Reading::open(PosTag::Verb).with_noun()),
      (false, false) => {}
    }
  }
  if adjective_base(lower).is_some() {
    return Some(Reading::open(PosTag::Adj));
  }
  if let Some(base) = lower.strip_suffix("ly") {
    if lexicon::is_adjective(base) || base.strip_suffix('i').is_some_and(|b| lexicon::is_adjective(&format!("{b}y"))) {
      return Some(Reading::fixed(PosTag::Adv));
    }
  }
  None
}

/// Reading of a base form listed in the open-class lexicons
fn lexicon_reading(lower: &str) -> Option<Reading> {
  let noun = lexicon::is_noun(lower);
  let verb = lexicon::is_verb(lower);
  let adj = lexicon::is_adjective(lower);
  let pos = if noun {
    PosTag::Noun
  } else if adj {
    PosTag::Adj
  } else if verb {
    PosTag::Verb
  } else {
    return None;
  };
  let mut reading = Reading::open(pos);
  reading.noun = noun;
  reading.verb = verb;
  reading.adj = adj;
  Some(reading)
}

/// Suffix heuristics for words found in no lexicon
fn suffix_reading(lower: &str) -> Reading {
  const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ism", "ist", "ance", "ence", "hood", "dom",
    "ure", "age", "ery", "er", "or",
  ];
  const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "al", "ic", "less", "ish", "ary", "ant", "ent",
  ];
  const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate"];

  if lower.len() > 4 && lower.ends_with("ly") {
    return Reading::fixed(PosTag::Adv);
  }
  if lower.len() > 4 && lower.ends_with("ing") {
    return Reading::open(PosTag::Verb).with_noun().with_adj();
  }
  if lower.len() > 3 && lower.ends_with("ed") {
    return Reading::open(PosTag::Verb).with_adj();
  }
  if NOUN_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s)) {
    return Reading::open(PosTag::Noun);
  }
  if ADJ_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s)) {
    return Reading::open(PosTag::Adj);
  }
  if VERB_SUFFIXES.iter().any(|s| lower.len() > s.len() + 2 && lower.ends_with(s)) {
    return Reading::open(PosTag::Verb);
  }
  if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
    return Reading::open(PosTag::Noun).with_verb();
  }
  Reading::open(PosTag::Noun)
}

// ─────────────────────────────────────────────────────────────────────────────
// Context pass
// ─────────────────────────────────────────────────────────────────────────────

fn contextual_pos(
  index: usize,
  sentence: &Range<usize>,
  lowers: &[String],
  readings: &[Reading],
  tags: &[PosTag],
  spans: &[Range<usize>],
) -> PosTag {
  let reading = readings[index];
  let lower = lowers[index].as_str();
  let prev = (index > sentence.start).then(|| index - 1);
  let next = (index + 1 < sentence.end).then_some(index + 1);

  let prev_tag = prev.map(|i| tags[i]);
  let prev_lower = prev.map(|i| lowers[i].as_str());
  let next_reading = next.map(|i| readings[i]);
  let next_lower = next.map(|i| lowers[i].as_str());

  match lower {
    "to" => {
      let infinitive = next_reading.is_some_and(|r| {
        r.may_be_verb() && r.pos != PosTag::Det && !matches!(r.pos, PosTag::Propn | PosTag::Pron | PosTag::Num)
      });
      return if infinitive { PosTag::Part } else { PosTag::Adp };
    }
    "that" => {
      return match (prev_tag, next_reading.map(|r| r.pos)) {
        (_, Some(PosTag::Noun | PosTag::Adj)) => PosTag::Det,
        (Some(PosTag::Verb | PosTag::Adj | PosTag::Adv), Some(PosTag::Pron | PosTag::Det | PosTag::Propn)) => PosTag::Sconj,
        _ => PosTag::Pron,
      };
    }
    "'s" => {
      let after_pronoun = prev_tag == Some(PosTag::Pron)
        || matches!(prev_lower, Some("there" | "here" | "what" | "who" | "where" | "how" | "that"));
      let verbal_next = next_reading.is_some_and(|r| {
        matches!(r.pos, PosTag::Det | PosTag::Adv | PosTag::Adj | PosTag::Part)
          || (r.pos == PosTag::Verb && next_lower.is_some_and(|w| w.ends_with("ing")))
      });
      return if after_pronoun || verbal_next { PosTag::Aux } else { PosTag::Part };
    }
    "'" => {
      let possessive = prev.is_some_and(|i| spans[i].end == spans[index].start && lowers[i].ends_with('s'));
      return if possessive { PosTag::Part } else { PosTag::Punct };
    }
    "like" => {
      let verbal = matches!(prev_tag, Some(PosTag::Aux | PosTag::Part))
        || prev_lower.is_some_and(|w| SUBJECT_PRONOUNS.contains(&w) || w == "not" || w == "n't")
        || prev_tag == Some(PosTag::Propn) && next_reading.is_some_and(|r| r.pos != PosTag::Punct);
      return if verbal { PosTag::Verb } else { PosTag::Adp };
    }
    "there" => {
      let existential = next_reading.is_some_and(|r| r.pos == PosTag::Aux) || next_lower == Some("'s");
      return if existential { PosTag::Pron } else { PosTag::Adv };
    }
    "no" => {
      let determiner = next_reading.is_some_and(|r| matches!(r.pos, PosTag::Noun | PosTag::Adj | PosTag::Num | PosTag::Adv));
      return if determiner { PosTag::Det } else { PosTag::Intj };
    }
    _ => {}
  }

  if WH_WORDS.contains(&lower) {
    let determiner = next_reading.is_some_and(|r| matches!(r.pos, PosTag::Noun | PosTag::Adj));
    return if determiner { PosTag::Det } else { PosTag::Pron };
  }

  if LIGHT_AUXILIARIES.contains(&lower) {
    return if verb_follows(index, sentence, lowers, readings) { PosTag::Aux } else { PosTag::Verb };
  }

  let after_verb_trigger = prev_tag == Some(PosTag::Aux)
    || prev_lower.is_some_and(|w| w == "to" || w == "not" || w == "n't" || MODALS.contains(&w))
    || prev_lower.is_some_and(|w| SUBJECT_PRONOUNS.contains(&w)) && prev_tag == Some(PosTag::Pron);
  let after_nominal_trigger = matches!(prev_tag, Some(PosTag::Det | PosTag::Adj | PosTag::Num | PosTag::Adp))
    || prev_lower.is_some_and(|w| POSSESSIVES.contains(&w))
    || prev_lower == Some("'s") && prev_tag == Some(PosTag::Part);
  let next_is_nominal = next_reading.is_some_and(|r| matches!(r.pos, PosTag::Noun | PosTag::Propn) || r.noun);

  // participles and gerunds
  if reading.pos == PosTag::Verb && (lower.ends_with("ing") || lower.ends_with("ed")) && after_nominal_trigger && prev_tag != Some(PosTag::Adp) {
    return if next_is_nominal && next_reading.is_some_and(|r| r.pos != PosTag::Verb) {
      PosTag::Adj
    } else if lower.ends_with("ing") {
      PosTag::Noun
    } else {
      PosTag::Adj
    };
  }

  if reading.may_be_verb() && (reading.noun || reading.adj) {
    if after_verb_trigger && !(reading.adj && prev_tag == Some(PosTag::Aux) && !prev_lower.is_some_and(|w| MODALS.contains(&w))) {
      return PosTag::Verb;
    }
    if after_nominal_trigger {
      return if reading.adj && next_is_nominal { PosTag::Adj } else if reading.noun { PosTag::Noun } else { PosTag::Adj };
    }
    if prev.is_none() {
      let imperative = next_reading.is_some_and(|r| matches!(r.pos, PosTag::Det | PosTag::Pron | PosTag::Adp | PosTag::Num | PosTag::Propn));
      if imperative {
        return PosTag::Verb;
      }
    }
    if matches!(prev_tag, Some(PosTag::Noun | PosTag::Propn | PosTag::Pron)) && lower.ends_with('s') && reading.noun {
      return PosTag::Verb;
    }
    if matches!(prev_tag, Some(PosTag::Noun | PosTag::Propn)) && reading.pos == PosTag::Verb {
      return PosTag::Verb;
    }
  }

  if reading.adj && reading.noun && reading.pos != PosTag::Verb {
    if next_is_nominal {
      return PosTag::Adj;
    }
    if prev_tag == Some(PosTag::Aux) || prev_tag == Some(PosTag::Adv) {
      return PosTag::Adj;
    }
  }

  reading.pos
}

/// Whether a verb follows a light auxiliary, skipping adverbs, negation and a subject
fn verb_follows(index: usize, sentence: &Range<usize>, lowers: &[String], readings: &[Reading]) -> bool {
  let mut skipped_subject = false;
  for j in index + 1..sentence.end {
    let reading = readings[j];
    let lower = lowers[j].as_str();
    if matches!(lower, "not" | "n't") || reading.pos == PosTag::Adv {
      continue;
    }
    if !skipped_subject && matches!(reading.pos, PosTag::Pron | PosTag::Propn) {
      skipped_subject = true;
      continue;
    }
    if lower == "like" {
      return true;
    }
    if reading.pos == PosTag::Aux && lower == "been" {
      return true;
    }
    return reading.pos == PosTag::Verb
      || (reading.verb && !matches!(reading.pos, PosTag::Noun | PosTag::Adj) && !reading.noun)
      || (reading.verb && skipped_subject);
  }
  false
}

// ─────────────────────────────────────────────────────────────────────────────
// Lemmatization
// ─────────────────────────────────────────────────────────────────────────────

/// Dictionary form of `word` given its part of speech.
pub(crate) fn lemmatize(word: &str, lower: &str, pos: PosTag) -> String {
  match pos {
    PosTag::Propn | PosTag::Num | PosTag::Punct | PosTag::Sym | PosTag::X | PosTag::Space => {
      return word.to_string();
    }
    PosTag::Pron => {
      return lexicon::pronoun_lemma(lower).map_or_else(|| lower.to_string(), str::to_string);
    }
    _ => {}
  }

  if lower == "'s" {
    return if pos == PosTag::Aux { "be".to_string() } else { "'s".to_string() };
  }

  if let Some((lemma, irregular_pos)) = lexicon::irregular(lower) {
    let compatible = match irregular_pos {
      PosTag::Verb | PosTag::Aux => matches!(pos, PosTag::Verb | PosTag::Aux),
      other => other == pos,
    };
    if compatible {
      return lemma.to_string();
    }
  }

  match pos {
    PosTag::Noun => noun_singular(lower).unwrap_or_else(|| lower.to_string()),
    PosTag::Verb | PosTag::Aux => verb_lemma(lower),
    PosTag::Adj => adjective_base(lower).unwrap_or_else(|| lower.to_string()),
    _ => lower.to_string(),
  }
}

/// Singular form of a plural noun, `None` when `lower` does not look plural
fn noun_singular(lower: &str) -> Option<String> {
  if lower.len() <= 3 || !lower.ends_with('s') || lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
    return None;
  }
  if let Some(stem) = lower.strip_suffix("ies") {
    return Some(format!("{stem}y"));
  }
  if let Some(stem) = lower.strip_suffix("es") {
    if ["ch", "sh", "x", "z", "ss"].iter().any(|s| stem.ends_with(s)) {
      return Some(stem.to_string());
    }
    if stem.ends_with('s') && !lexicon::is_noun(&lower[..lower.len() - 1]) {
      return Some(stem.to_string());
    }
  }
  Some(lower[..lower.len() - 1].to_string())
}

/// Base of a third-person singular verb
fn verb_third_person_base(lower: &str) -> Option<String> {
  if lower.len() <= 2 || !lower.ends_with('s') || lower.ends_with("ss") {
    return None;
  }
  if let Some(stem) = lower.strip_suffix("ies") {
    return Some(format!("{stem}y"));
  }
  if let Some(stem) = lower.strip_suffix("es") {
    if ["ch", "sh", "x", "z", "ss", "o"].iter().any(|s| stem.ends_with(s)) {
      return Some(stem.to_string());
    }
  }
  Some(lower[..lower.len() - 1].to_string())
}

/// Base of an `-ing` / `-ed` form found in the verb lexicon
fn verb_base(stem: &str, suffix: &str) -> Option<String> {
  let mut candidates = vec![stem.to_string(), format!("{stem}e")];
  if let Some(undoubled) = undouble(stem) {
    candidates.insert(1, undoubled);
  }
  if suffix == "ed" {
    if let Some(y_stem) = stem.strip_suffix('i') {
      candidates.insert(0, format!("{y_stem}y"));
    }
  }
  candidates.into_iter().find(|c| lexicon::is_verb(c))
}

/// `runn` → `run`
fn undouble(stem: &str) -> Option<String> {
  let bytes = stem.as_bytes();
  let n = bytes.len();
  if n >= 3 && bytes[n - 1] == bytes[n - 2] && !matches!(bytes[n - 1], b'l' | b's' | b'z' | b'f' | b'e' | b'o') && bytes[n - 1].is_ascii_alphabetic() {
    Some(stem[..n - 1].to_string())
  } else {
    None
  }
}

fn verb_lemma(lower: &str) -> String {
  for suffix in ["ing", "ed"] {
    if let Some(stem) = lower.strip_suffix(suffix).filter(|s| s.len() >= 2) {
      if let Some(base) = verb_base(stem, suffix) {
        return base;
      }
      if let Some(undoubled) = undouble(stem) {
        return undoubled;
      }
      if suffix == "ed" {
        if let Some(y_stem) = stem.strip_suffix('i') {
          return format!("{y_stem}y");
        }
      }
      // e-restoration for stems that cannot end a word
      if stem.ends_with(['v', 'z', 'c']) || stem.ends_with("us") || stem.ends_with("at") && stem.len() > 4 {
        return format!("{stem}e");
      }
      return stem.to_string();
    }
  }
  verb_third_person_base(lower).unwrap_or_else(|| lower.to_string())
}

/// Positive form of a comparative or superlative found in the adjective lexicon
fn adjective_base(lower: &str) -> Option<String> {
  for suffix in ["est", "er"] {
    let Some(stem) = lower.strip_suffix(suffix).filter(|s| s.len() >= 2) else {
      continue;
    };
    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    if let Some(undoubled) = undouble(stem) {
      candidates.push(undoubled);
    }
    if let Some(y_stem) = stem.strip_suffix('i') {
      candidates.push(format!("{y_stem}y"));
    }
    if let Some(found) = candidates.into_iter().find(|c| lexicon::is_adjective(c)) {
      return Some(found);
    }
  }
  None
}

// ─────────────────────────────────────────────────────────────────────────────
// Fine-grained tags
// ─────────────────────────────────────────────────────────────────────────────

/// Penn Treebank tag derived from the coarse tag, the form and the lemma
fn penn_tag(word: &str, lower: &str, lemma: &str, pos: PosTag, prev: Option<&str>) -> String {
  let tag = match pos {
    PosTag::Noun => {
      if lemma != lower { "NNS" } else { "NN" }
    }
    PosTag::Propn => {
      if word.len() > 3 && word.ends_with('s') && word.chars().next().is_some_and(char::is_uppercase) && !word.ends_with("ss") && lexicon::is_noun(&lower[..lower.len() - 1]) {
        "NNPS"
      } else {
        "NNP"
      }
    }
    PosTag::Verb | PosTag::Aux => {
      if MODALS.contains(&lower) {
        "MD"
      } else if lower.ends_with("ing") {
        "VBG"
      } else if matches!(lower, "is" | "'s" | "has" | "does") || (lemma != lower && lower.ends_with('s')) {
        "VBZ"
      } else if matches!(lower, "am" | "are" | "'m" | "'re") {
        "VBP"
      } else if lemma != lower || matches!(lower, "was" | "were") {
        if prev.is_some_and(|p| lexicon::irregular(p).is_some_and(|(l, _)| l == "have" || l == "be") || matches!(p, "have" | "be")) {
          "VBN"
        } else {
          "VBD"
        }
      } else if prev.is_some_and(|p| p == "to" || MODALS.contains(&p) || matches!(p, "do" | "does" | "did" | "n't" | "not")) {
        "VB"
      } else {
        "VBP"
      }
    }
    PosTag::Adj => {
      if lemma != lower && lower.ends_with("est") {
        "JJS"
      } else if lemma != lower && lower.ends_with("er") {
        "JJR"
      } else {
        "JJ"
      }
    }
    PosTag::Adv => {
      if matches!(lower, "how" | "when" | "where" | "why") { "WRB" } else { "RB" }
    }
    PosTag::Pron => {
      if POSSESSIVES.contains(&lower) {
        "PRP$"
      } else if matches!(lower, "who" | "whom" | "what" | "which") {
        "WP"
      } else if lower == "there" {
        "EX"
      } else {
        "PRP"
      }
    }
    PosTag::Det => {
      if WH_WORDS.contains(&lower) { "WDT" } else { "DT" }
    }
    PosTag::Adp => "IN",
    PosTag::Sconj => "IN",
    PosTag::Cconj => "CC",
    PosTag::Part => match lower {
      "'s" | "'" => "POS",
      "not" | "n't" => "RB",
      "to" | "na" | "ta" => "TO",
      _ => "RP",
    },
    PosTag::Num => "CD",
    PosTag::Intj => "UH",
    PosTag::Punct => match word {
      "," => ",",
      "." | "!" | "?" | "..." | "…" => ".",
      ":" | ";" | "-" | "--" | "—" | "–" => ":",
      "(" | "[" | "{" => "-LRB-",
      ")" | "]" | "}" => "-RRB-",
      "\"" | "“" | "”" | "'" | "‘" | "’" => "''",
      _ => "NFP",
    },
    PosTag::Sym => {
      if lexicon::is_currency_symbol(word) { "$" } else { "SYM" }
    }
    PosTag::X => "ADD",
    PosTag::Space => "_SP",
  };
  tag.to_string()
}

#[cfg(test)]
mod tests {
  use super::super::tokenizer::{segment, split_sentences};
  use super::*;

  fn tagged(text: &str) -> Vec<Token> {
    let spans = segment(text);
    let sentences = split_sentences(text, &spans);
    tag_tokens(text, &spans, &sentences, &Lexicon::new())
  }

  fn pos_of(text: &str) -> Vec<(String, PosTag)> {
    tagged(text).into_iter().map(|t| (t.text, t.pos)).collect()
  }

  fn pos(tokens: &[(String, PosTag)], word: &str) -> PosTag {
    tokens
      .iter()
      .find(|(w, _)| w == word)
      .map(|(_, p)| *p)
      .unwrap_or_else(|| panic!("token {word} not found in {tokens:?}"))
  }

  fn lemma_of(text: &str, word: &str) -> String {
    tagged(text)
      .into_iter()
      .find(|t| t.text == word)
      .map(|t| t.lemma)
      .unwrap_or_else(|| panic!("token {word} not found"))
  }

  #[test]
  fn tags_a_simple_sentence() {
    let tokens = pos_of("The quick brown fox jumps over the lazy dog.");
    assert_eq!(pos(&tokens, "The"), PosTag::Det);
    assert_eq!(pos(&tokens, "quick"), PosTag::Adj);
    assert_eq!(pos(&tokens, "fox"), PosTag::Noun);
    assert_eq!(pos(&tokens, "jumps"), PosTag::Verb);
    assert_eq!(pos(&tokens, "over"), PosTag::Adp);
    assert_eq!(pos(&tokens, "lazy"), PosTag::Adj);
    assert_eq!(pos(&tokens, "dog"), PosTag::Noun);
    assert_eq!(pos(&tokens, "."), PosTag::Punct);
  }

  #[test]
  fn tags_proper_nouns_and_numbers() {
    let tokens = pos_of("Yesterday Alice paid $30 to Bob in Paris.");
    assert_eq!(pos(&tokens, "Alice"), PosTag::Propn);
    assert_eq!(pos(&tokens, "Bob"), PosTag::Propn);
    assert_eq!(pos(&tokens, "Paris"), PosTag::Propn);
    assert_eq!(pos(&tokens, "$"), PosTag::Sym);
    assert_eq!(pos(&tokens, "30"), PosTag::Num);
    assert_eq!(pos(&tokens, "paid"), PosTag::Verb);
  }

  #[test]
  fn to_before_verb_is_particle() {
    let tokens = pos_of("I want to build it and go to Tokyo.");
    let tos: Vec<PosTag> = tokens.iter().filter(|(w, _)| w == "to").map(|(_, p)| *p).collect();
    assert_eq!(tos, vec![PosTag::Part, PosTag::Adp]);
    assert_eq!(pos(&tokens, "build"), PosTag::Verb);
  }

  #[test]
  fn auxiliaries_and_negation() {
    let tokens = pos_of("She does not like rain but he has finished.");
    assert_eq!(pos(&tokens, "does"), PosTag::Aux);
    assert_eq!(pos(&tokens, "not"), PosTag::Part);
    assert_eq!(pos(&tokens, "like"), PosTag::Verb);
    assert_eq!(pos(&tokens, "has"), PosTag::Aux);
    assert_eq!(pos(&tokens, "finished"), PosTag::Verb);
  }

  #[test]
  fn have_without_verb_is_main_verb() {
    let tokens = pos_of("They have a car.");
    assert_eq!(pos(&tokens, "have"), PosTag::Verb);
  }

  #[test]
  fn noun_verb_ambiguity_uses_context() {
    let tokens = pos_of("The work is done. We work hard.");
    let works: Vec<PosTag> = tokens.iter().filter(|(w, _)| w == "work").map(|(_, p)| *p).collect();
    assert_eq!(works, vec![PosTag::Noun, PosTag::Verb]);
  }

  #[test]
  fn urls_and_emoji_are_not_words() {
    let tokens = pos_of("Visit https://example.com now 🚀");
    assert_eq!(pos(&tokens, "https://example.com"), PosTag::X);
    assert_eq!(pos(&tokens, "🚀"), PosTag::Sym);
  }

  #[test]
  fn every_token_gets_a_tag() {
    let tokens = tagged("Whatever happens, zxqv frobnicates the blorp quickly!");
    assert_eq!(tokens.len(), 9);
    for token in &tokens {
      assert!(!token.tag.is_empty());
      assert!(!token.lemma.is_empty());
    }
  }

  #[test]
  fn lemmatizes_verbs() {
    assert_eq!(lemma_of("He was running fast.", "running"), "run");
    assert_eq!(lemma_of("She went home.", "went"), "go");
    assert_eq!(lemma_of("They studied hard.", "studied"), "study");
    assert_eq!(lemma_of("It was making noise.", "making"), "make");
    assert_eq!(lemma_of("He watches films.", "watches"), "watch");
    assert_eq!(lemma_of("The cat is here.", "is"), "be");
  }

  #[test]
  fn lemmatizes_nouns_and_adjectives() {
    assert_eq!(lemma_of("The children played.", "children"), "child");
    assert_eq!(lemma_of("Two boxes fell.", "boxes"), "box");
    assert_eq!(lemma_of("Many cities grew.", "cities"), "city");
    assert_eq!(lemma_of("A bigger house.", "bigger"), "big");
    assert_eq!(lemma_of("The best idea.", "best"), "good");
  }

  #[test]
  fn lemmatizes_pronouns_and_contractions() {
    assert_eq!(lemma_of("Give me that.", "me"), "I");
    assert_eq!(lemma_of("I saw them.", "them"), "they");
    assert_eq!(lemma_of("I don't know.", "n't"), "not");
    assert_eq!(lemma_of("We'll see.", "'ll"), "will");
  }

  #[test]
  fn proper_nouns_keep_their_form() {
    assert_eq!(lemma_of("We met Alice.", "Alice"), "Alice");
  }

  #[test]
  fn user_lexicon_overrides_rules() {
    let text = "tokio crates rock";
    let spans = segment(text);
    let sentences = split_sentences(text, &spans);
    let mut user = Lexicon::new();
    user.insert_word("tokio", PosTag::Propn, None);
    user.insert_word("rock", PosTag::Verb, Some("rock".to_string()));
    let tokens = tag_tokens(text, &spans, &sentences, &user);
    assert_eq!(tokens[0].pos, PosTag::Propn);
    assert_eq!(tokens[0].lemma, "tokio");
    assert_eq!(tokens[2].pos, PosTag::Verb);
  }

  #[test]
  fn penn_tags_follow_inflection() {
    let tokens = tagged("The dogs barked.");
    assert_eq!(tokens[1].tag, "NNS");
    assert_eq!(tokens[0].tag, "DT");
    assert_eq!(tokens[3].tag, ".");
  }
}
