//! Rule based named entity recognition
//!
//! Runs three passes over each sentence; tokens claimed by an earlier pass are skipped later:
//! 1. user lexicon phrases and the built-in gazetteer (longest match)
//! 2. numeric and temporal expressions (money, percent, time, date, quantity, ordinal, cardinal)
//! 3. runs of proper nouns (person, organisation, place)

use std::ops::Range;

use tracing::trace;

use super::lexicon::{self, Lexicon};
use crate::models::{Doc, Entity, EntityLabel, PosTag, Token};

/// Prepositions after which a lone unknown name is read as a place
const LOCATIVE_PREPOSITIONS: &[&str] = &["in", "from", "near"];

/// Words inside a multi-word name: "Bank of America", "Procter & Gamble"
const NAME_CONNECTORS: &[&str] = &["of", "&"];

/// Finds the named entities of an analysed document.
pub(crate) fn recognize(doc: &Doc, user: &Lexicon) -> Vec<Entity> {
  let tokens = &doc.tokens;
  let mut taken = vec![false; tokens.len()];
  let mut found: Vec<(Range<usize>, EntityLabel)> = Vec::new();

  for sentence in &doc.sentences {
    phrase_pass(tokens, sentence, user, &mut taken, &mut found);
    numeric_pass(tokens, sentence, &mut taken, &mut found);
    proper_noun_pass(tokens, sentence, &mut taken, &mut found);
  }

  found.sort_by_key(|(range, _)| range.start);
  trace!(entities = found.len(), "Entity recognition completed");
  found
    .into_iter()
    .filter_map(|(range, label)| doc.entity(range, label))
    .collect()
}

fn claim(range: Range<usize>, label: EntityLabel, taken: &mut [bool], found: &mut Vec<(Range<usize>, EntityLabel)>) {
  for flag in &mut taken[range.clone()] {
    *flag = true;
  }
  found.push((range, label));
}

fn is_free(taken: &[bool], range: &Range<usize>) -> bool {
  !taken[range.clone()].iter().any(|t| *t)
}

// ─── pass 1: phrases ───

fn phrase_pass(
  tokens: &[Token],
  sentence: &Range<usize>,
  user: &Lexicon,
  taken: &mut [bool],
  found: &mut Vec<(Range<usize>, EntityLabel)>,
) {
  let max_len = user.max_entity_tokens().max(*lexicon::GAZETTEER_MAX_TOKENS);
  let mut i = sentence.start;

  while i < sentence.end {
    let longest = (sentence.end - i).min(max_len);
    let matched = (1..=longest).rev().find_map(|len| {
      let words: Vec<&str> = tokens[i..i + len].iter().map(|t| t.text.as_str()).collect();
      user
        .entity(&words)
        .or_else(|| lexicon::gazetteer(&words))
        .map(|label| (len, label))
    });

    match matched {
      Some((len, label)) if is_free(taken, &(i..i + len)) => {
        claim(i..i + len, label, taken, found);
        i += len;
      }
      _ => i += 1,
    }
  }
}

// ─── pass 2: numbers, dates and times ───

fn numeric_pass(
  tokens: &[Token],
  sentence: &Range<usize>,
  taken: &mut [bool],
  found: &mut Vec<(Range<usize>, EntityLabel)>,
) {
  let mut i = sentence.start;
  while i < sentence.end {
    if taken[i] {
      i += 1;
      continue;
    }
    match numeric_entity(tokens, i, sentence.end) {
      Some((len, label)) if is_free(taken, &(i..i + len)) => {
        claim(i..i + len, label, taken, found);
        i += len;
      }
      _ => i += 1,
    }
  }
}

/// Length and label of the numeric or temporal expression starting at `i`
fn numeric_entity(tokens: &[Token], i: usize, end: usize) -> Option<(usize, EntityLabel)> {
  let text = |k: usize| (k < end).then(|| tokens[k].text.as_str()).unwrap_or("");
  let lower = |k: usize| text(k).to_lowercase();
  let is_num = |k: usize| k < end && tokens[k].pos == PosTag::Num;

  let word = text(i);
  let word_lower = lower(i);

  if lexicon::is_currency_symbol(word) && is_num(i + 1) {
    return Some((1 + number_run(tokens, i + 1, end), EntityLabel::Money));
  }
  if lexicon::is_relative_date(&word_lower) {
    return Some((1, EntityLabel::Date));
  }
  if lexicon::is_time_word(&word_lower) {
    return Some((1, EntityLabel::Time));
  }
  if lexicon::is_weekday(word) {
    return Some((1, EntityLabel::Date));
  }
  if lexicon::is_month(word) {
    // "May" alone is far more often the modal verb
    if word == "May" && !is_num(i + 1) {
      return None;
    }
    let mut len = 1;
    if is_num(i + 1) && is_day(text(i + 1)) {
      len += 1;
      if text(i + 2) == "," && is_year(text(i + 3)) {
        len += 2;
      } else if is_year(text(i + 2)) {
        len += 1;
      }
    } else if is_year(text(i + 1)) {
      len += 1;
    }
    return Some((len, EntityLabel::Date));
  }
  if matches!(word_lower.as_str(), "last" | "next" | "this" | "past") {
    let following = text(i + 1);
    if lexicon::is_date_unit(&following.to_lowercase()) || lexicon::is_weekday(following) || lexicon::is_month(following) {
      return Some((2, EntityLabel::Date));
    }
    return None;
  }

  if is_num(i) {
    let run = number_run(tokens, i, end);
    let after = i + run;
    let after_text = text(after);
    let after_lower = lower(after);

    if after_text == "%" || after_lower == "percent" {
      return Some((run + 1, EntityLabel::Percent));
    }
    if lexicon::is_currency_word(after_text) || lexicon::is_currency_word(&after_lower) {
      return Some((run + 1, EntityLabel::Money));
    }
    if is_clock(word) {
      let len = if lexicon::is_meridiem(after_text) { run + 1 } else { run };
      return Some((len, EntityLabel::Time));
    }
    if lexicon::is_meridiem(after_text) || lexicon::is_time_unit(&after_lower) {
      return Some((run + 1, EntityLabel::Time));
    }
    if lexicon::is_date_unit(&after_lower) {
      let ago = usize::from(lower(after + 1) == "ago");
      return Some((run + 1 + ago, EntityLabel::Date));
    }
    if run == 1 && is_day(word) && lexicon::is_month(after_text) {
      let year = usize::from(is_year(text(after + 1)));
      return Some((2 + year, EntityLabel::Date));
    }
    if run == 1 && is_year(word) {
      return Some((1, EntityLabel::Date));
    }
    if lexicon::is_quantity_unit(after_text) {
      return Some((run + 1, EntityLabel::Quantity));
    }
    return Some((run, EntityLabel::Cardinal));
  }

  if is_decade(word) {
    return Some((1, EntityLabel::Date));
  }
  if is_ordinal_digits(&word_lower) || (lexicon::is_ordinal_word(&word_lower) && word_lower != "last") {
    return Some((1, EntityLabel::Ordinal));
  }
  None
}

/// Number of consecutive numeral tokens from `i` ("two hundred", "1.5 billion")
fn number_run(tokens: &[Token], i: usize, end: usize) -> usize {
  let mut k = i;
  while k < end && tokens[k].pos == PosTag::Num {
    k += 1;
  }
  (k - i).max(1)
}

fn is_year(word: &str) -> bool {
  word.len() == 4
    && word.chars().all(|c| c.is_ascii_digit())
    && word.parse::<u32>().is_ok_and(|y| (1500..=2100).contains(&y))
}

fn is_day(word: &str) -> bool {
  word.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d))
}

fn is_decade(word: &str) -> bool {
  word.strip_suffix('s').is_some_and(|d| d.len() == 4 && d.ends_with('0') && d.chars().all(|c| c.is_ascii_digit()))
}

fn is_clock(word: &str) -> bool {
  word.split_once(':').is_some_and(|(h, m)| {
    h.parse::<u32>().is_ok_and(|h| h < 24) && m.len() == 2 && m.parse::<u32>().is_ok_and(|m| m < 60)
  })
}

fn is_ordinal_digits(lower: &str) -> bool {
  let digits_end = lower.find(|c: char| !c.is_ascii_digit()).unwrap_or(lower.len());
  digits_end > 0 && matches!(&lower[digits_end..], "st" | "nd" | "rd" | "th")
}

// ─── pass 3: proper noun runs ───

fn proper_noun_pass(
  tokens: &[Token],
  sentence: &Range<usize>,
  taken: &mut [bool],
  found: &mut Vec<(Range<usize>, EntityLabel)>,
) {
  let mut i = sentence.start;
  while i < sentence.end {
    if taken[i] || tokens[i].pos != PosTag::Propn {
      i += 1;
      continue;
    }

    let mut j = i + 1;
    while j < sentence.end && !taken[j] {
      if tokens[j].pos == PosTag::Propn {
        j += 1;
      } else if NAME_CONNECTORS.contains(&tokens[j].text.as_str())
        && j + 1 < sentence.end
        && !taken[j + 1]
        && tokens[j + 1].pos == PosTag::Propn
      {
        j += 2;
      } else {
        break;
      }
    }

    if let Some((range, label)) = classify_name(tokens, sentence, i..j) {
      claim(range, label, taken, found);
    }
    i = j;
  }
}

fn classify_name(tokens: &[Token], sentence: &Range<usize>, run: Range<usize>) -> Option<(Range<usize>, EntityLabel)> {
  let words: Vec<&str> = tokens[run.clone()].iter().map(|t| t.text.as_str()).collect();
  let first = words[0];
  let last = words[words.len() - 1];

  if lexicon::is_honorific(first) {
    return (run.len() > 1).then(|| (run.start + 1..run.end, EntityLabel::Person));
  }
  if run.start > sentence.start && lexicon::is_honorific(&tokens[run.start - 1].text) {
    return Some((run, EntityLabel::Person));
  }
  if lexicon::is_org_suffix(last) && run.len() > 1 {
    return Some((run, EntityLabel::Org));
  }

  if run.len() == 1 {
    if is_acronym(first) {
      return Some((run, EntityLabel::Org));
    }
    if lexicon::is_first_name(first) {
      return Some((run, EntityLabel::Person));
    }
    // a lone capitalised word opening a sentence is too weak a signal
    if run.start == sentence.start {
      return None;
    }
    let after_locative = LOCATIVE_PREPOSITIONS.contains(&tokens[run.start - 1].text.to_lowercase().as_str());
    let label = if after_locative { EntityLabel::Gpe } else { EntityLabel::Org };
    return Some((run, label));
  }

  if lexicon::is_first_name(first) {
    return Some((run, EntityLabel::Person));
  }
  if words.iter().any(|w| NAME_CONNECTORS.contains(w)) {
    return Some((run, EntityLabel::Org));
  }
  if words.iter().all(|w| is_name_part(w)) {
    return Some((run, EntityLabel::Person));
  }
  Some((run, EntityLabel::Org))
}

/// `NASA`, `IBM`
fn is_acronym(word: &str) -> bool {
  word.chars().count() >= 2 && word.chars().all(|c| c.is_ascii_uppercase() || c == '&')
}

/// Titlecase word or an initial (`F.`)
fn is_name_part(word: &str) -> bool {
  let mut chars = word.chars();
  let Some(first) = chars.next() else {
    return false;
  };
  let rest: String = chars.collect();
  first.is_uppercase()
    && (rest == "." || (!rest.is_empty() && rest.chars().all(|c| c.is_lowercase() || c == '-' || c == '\'')))
}
