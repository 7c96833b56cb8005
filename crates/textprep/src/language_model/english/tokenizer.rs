//! English word segmentation and sentence splitting
//!
//! Segmentation starts from Unicode word boundaries (UAX #29) and then
//! - keeps URLs and e-mail addresses whole
//! - splits clitics (`don't` → `do` `n't`, `John's` → `John` `'s`)
//! - re-attaches the period of abbreviations (`Mr.`, `U.S.`, `e.g.`)
//! - joins runs like `...`, `?!` and clock times `10:30`
//!
//! All ranges are byte ranges into the input. Whitespace is never a token.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::lexicon;

/// URLs and e-mail addresses
static PROTECTED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?:https?://|www\.)\S+|[\w.+-]+@[\w-]+(?:\.[\w-]+)+")
    .expect("protected span pattern should be valid")
});

/// Dotted initialisms without their last period (`U.S`, `e.g`, `a.m`)
static INITIALISM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?:[A-Za-z]\.)+[A-Za-z]$").expect("initialism pattern should be valid")
});

/// Clitics split off the end of a word, longest first.
const CLITIC_SUFFIXES: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Words split in two without an apostrophe: (word, length of the first part in chars)
const FUSED_WORDS: &[(&str, usize)] = &[("cannot", 3), ("gonna", 3), ("wanna", 3), ("gotta", 3)];

/// Closing quotes and brackets that stay with the preceding sentence
const CLOSING_MARKS: &[&str] = &["\"", "'", ")", "]", "}", "”", "’", "»"];

/// Splits `text` into token byte ranges.
pub(crate) fn segment(text: &str) -> Vec<Range<usize>> {
  let mut raw = Vec::new();
  let mut cursor = 0;

  for found in PROTECTED_PATTERN.find_iter(text) {
    let end = found.start() + trim_trailing_punctuation(found.as_str());
    if end <= found.start() {
      continue;
    }
    segment_words(text, cursor..found.start(), &mut raw);
    raw.push(found.start()..end);
    cursor = end;
  }
  segment_words(text, cursor..text.len(), &mut raw);

  merge_segments(text, raw)
}

/// Byte length of a protected match once sentence punctuation is trimmed off its end
fn trim_trailing_punctuation(matched: &str) -> usize {
  matched
    .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']' | '}' | '"' | '\''))
    .len()
}

/// Word boundaries of `text[range]`, whitespace dropped and clitics split
fn segment_words(text: &str, range: Range<usize>, out: &mut Vec<Range<usize>>) {
  if range.is_empty() {
    return;
  }
  for (offset, word) in text[range.clone()].split_word_bound_indices() {
    if word.chars().all(char::is_whitespace) {
      continue;
    }
    let start = range.start + offset;
    split_clitics(word, start, out);
  }
}

fn split_clitics(word: &str, start: usize, out: &mut Vec<Range<usize>>) {
  let end = start + word.len();
  let normalized = word.to_lowercase().replace('’', "'");

  for (fused, head_chars) in FUSED_WORDS {
    if normalized == *fused {
      let split = byte_index_of_char(word, *head_chars);
      out.push(start..start + split);
      out.push(start + split..end);
      return;
    }
  }

  for suffix in CLITIC_SUFFIXES {
    let suffix_chars = suffix.chars().count();
    if normalized.ends_with(suffix) && normalized.chars().count() > suffix_chars {
      let split = byte_index_of_char(word, word.chars().count() - suffix_chars);
      let head = &word[..split];
      // `n't` needs a verb before it; the other clitics need a word
      if head.chars().all(|c| c.is_alphanumeric()) {
        out.push(start..start + split);
        out.push(start + split..end);
        return;
      }
    }
  }

  out.push(start..end);
}

/// Byte index of the `n`-th char of `word` (or its length)
fn byte_index_of_char(word: &str, n: usize) -> usize {
  word.char_indices().nth(n).map_or(word.len(), |(i, _)| i)
}

/// Joins abbreviation periods, punctuation runs and clock times.
fn merge_segments(text: &str, raw: Vec<Range<usize>>) -> Vec<Range<usize>> {
  let mut merged: Vec<Range<usize>> = Vec::with_capacity(raw.len());

  for (index, current) in raw.iter().enumerate() {
    let Some(previous) = merged.last_mut() else {
      merged.push(current.clone());
      continue;
    };
    let adjacent = previous.end == current.start;
    let prev_text = &text[previous.clone()];
    let cur_text = &text[current.clone()];

    let next_text = raw.get(index + 1).map(|r| &text[r.clone()]);
    if adjacent && cur_text == "." && is_abbreviation_head(prev_text, next_text) {
      previous.end = current.end;
      continue;
    }
    if adjacent && is_punctuation_run(prev_text) && is_punctuation_run(cur_text) && same_run(prev_text, cur_text) {
      previous.end = current.end;
      continue;
    }
    if adjacent && is_clock_prefix(prev_text) && cur_text.chars().all(|c| c.is_ascii_digit()) && cur_text.len() == 2 {
      previous.end = current.end;
      continue;
    }
    if adjacent && cur_text == ":" && prev_text.chars().all(|c| c.is_ascii_digit()) && prev_text.len() <= 2 {
      // only keep the colon if minutes follow
      let minutes_follow = raw.get(index + 1).is_some_and(|next| {
        next.start == current.end && text[next.clone()].len() == 2 && text[next.clone()].chars().all(|c| c.is_ascii_digit())
      });
      if minutes_follow {
        previous.end = current.end;
        continue;
      }
    }

    merged.push(current.clone());
  }

  merged
}

/// Whether `word` followed by `.` forms one token
fn is_abbreviation_head(word: &str, next: Option<&str>) -> bool {
  if lexicon::is_abbreviation(word) || INITIALISM_PATTERN.is_match(word) {
    return true;
  }
  // Middle initials: "John F. Kennedy"
  let mut chars = word.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) if c.is_ascii_uppercase() && c != 'I' => {
      next.is_some_and(|n| n.chars().next().is_some_and(char::is_uppercase))
    }
    _ => false,
  }
}

/// `.`, `!`, `?` or `-` repeated
fn is_punctuation_run(s: &str) -> bool {
  !s.is_empty() && s.chars().all(|c| matches!(c, '.' | '!' | '?' | '-'))
}

/// Dashes only join dashes; `.!?` join each other
fn same_run(a: &str, b: &str) -> bool {
  a.contains('-') == b.contains('-')
}

/// `10:` or `9:`
fn is_clock_prefix(s: &str) -> bool {
  s.strip_suffix(':')
    .is_some_and(|h| !h.is_empty() && h.len() <= 2 && h.chars().all(|c| c.is_ascii_digit()))
}

/// Whether a token ends a sentence by itself
fn is_terminal(token: &str) -> bool {
  token == "…" || (!token.is_empty() && token.chars().all(|c| matches!(c, '.' | '!' | '?')))
}

/// Groups token ranges into sentences (token index ranges).
///
/// A sentence ends after terminal punctuation together with any closing quotes
/// or brackets that follow it, or before a blank line.
pub(crate) fn split_sentences(text: &str, tokens: &[Range<usize>]) -> Vec<Range<usize>> {
  let mut sentences = Vec::new();
  let mut start = 0;
  let mut index = 0;

  while index < tokens.len() {
    // blank line between the previous token and this one
    if index > start {
      let gap = &text[tokens[index - 1].end..tokens[index].start];
      if gap.matches('\n').count() >= 2 {
        sentences.push(start..index);
        start = index;
      }
    }

    let token = &text[tokens[index].clone()];
    let next = tokens.get(index + 1).map(|r| &text[r.clone()]);
    let ends_sentence = is_terminal(token)
      || (lexicon::is_sentence_final_abbreviation(token)
        && next.is_some_and(|n| n.chars().next().is_some_and(char::is_uppercase)));

    index += 1;
    if ends_sentence {
      while index < tokens.len()
        && tokens[index].start == tokens[index - 1].end
        && CLOSING_MARKS.contains(&&text[tokens[index].clone()])
      {
        index += 1;
      }
      sentences.push(start..index);
      start = index;
    }
  }

  if start < tokens.len() {
    sentences.push(start..tokens.len());
  }
  sentences
}
