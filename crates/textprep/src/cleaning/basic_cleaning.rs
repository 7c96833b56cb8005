//! Basic cleaning transforms
//!
//! Stateless string transforms applied before tokenization:
//! case folding, tag/URL stripping, emoji substitution and punctuation removal.
//! None of them can fail.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::CleaningOptions;

/// Non-greedy tag pattern; `.` does not cross newlines, so a tag never spans lines.
static HTML_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"<.*?>").expect("HTML pattern should be valid"));

static URL_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("URL pattern should be valid"));

/// Variation selector-16 (emoji presentation)
const VS16: char = '\u{FE0F}';

/// Basic text cleaning
///
/// - Stateless (zero sized)
/// - `Clone + Copy + Send + Sync`
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicCleaning;

impl BasicCleaning {
  /// Creates a new cleaner
  pub fn new() -> Self {
    Self
  }

  /// Converts the text to lower case (Unicode aware).
  pub fn lower_casing(&self, text: &str) -> String {
    text.to_lowercase()
  }

  /// Removes every `<...>` tag from the text.
  pub fn remove_html(&self, text: &str) -> String {
    HTML_PATTERN.replace_all(text, "").into_owned()
  }

  /// Removes `http://`, `https://` and `www.` URLs from the text.
  pub fn remove_url(&self, text: &str) -> String {
    URL_PATTERN.replace_all(text, "").into_owned()
  }

  /// Replaces emoji with their names (`🚀` → `:rocket:`) or deletes them.
  ///
  /// Works on extended grapheme clusters so that skin tone modifiers,
  /// ZWJ sequences and flags are handled as one emoji.
  pub fn remove_emoji(&self, text: &str, replace_with_meaning: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut replaced = 0usize;

    for grapheme in text.graphemes(true) {
      match lookup_emoji(grapheme) {
        Some(emoji) => {
          replaced += 1;
          if replace_with_meaning {
            out.push(':');
            out.push_str(&emoji_alias(emoji.name()));
            out.push(':');
          }
        }
        None => out.push_str(grapheme),
      }
    }

    trace!(replaced, replace_with_meaning, "Emoji processed");
    out
  }

  /// Removes every ASCII punctuation character (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
  pub fn remove_punctuation(&self, text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
  }

  /// Applies the steps enabled in `options`.
  ///
  /// Order: html → url → emoji → punctuation → lower case.
  /// URLs are removed before punctuation so that the URL pattern still sees `://`.
  pub fn clean(&self, text: &str, options: &CleaningOptions) -> String {
    let mut current = Cow::Borrowed(text);

    if options.remove_html {
      current = Cow::Owned(self.remove_html(&current));
    }
    if options.remove_url {
      current = Cow::Owned(self.remove_url(&current));
    }
    if options.remove_emoji {
      current = Cow::Owned(self.remove_emoji(&current, options.replace_emoji_with_meaning));
    }
    if options.remove_punctuation {
      current = Cow::Owned(self.remove_punctuation(&current));
    }
    if options.lower_case {
      current = Cow::Owned(self.lower_casing(&current));
    }

    current.into_owned()
  }
}

/// Looks up a grapheme in the emoji table, retrying without VS16 for text-style sequences.
fn lookup_emoji(grapheme: &str) -> Option<&'static emojis::Emoji> {
  // Plain ASCII never is an emoji on its own (digits, '#' and '*' only form keycaps)
  if grapheme.is_ascii() {
    return None;
  }
  emojis::get(grapheme).or_else(|| {
    if grapheme.contains(VS16) {
      let stripped: String = grapheme.chars().filter(|&c| c != VS16).collect();
      emojis::get(&stripped)
    } else {
      None
    }
  })
}

/// Turns a CLDR emoji name into an alias: `"thumbs up: medium skin tone"` → `"thumbs_up_medium_skin_tone"`.
///
/// Flags are named by their region alone: `"flag: Japan"` → `"Japan"`.
fn emoji_alias(name: &str) -> String {
  let name = name.strip_prefix("flag: ").unwrap_or(name);
  let mut alias = String::with_capacity(name.len());
  for c in name.chars() {
    match c {
      ' ' | '-' => {
        if !alias.ends_with('_') {
          alias.push('_');
        }
      }
      ':' | ',' | '.' | '"' | '\'' | '“' | '”' | '’' | '!' | '(' | ')' => {}
      _ => alias.push(c),
    }
  }
  alias.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cleaner() -> BasicCleaning {
    BasicCleaning::new()
  }

  // ─── lower_casing ───

  #[test]
  fn lower_casing_converts_to_lower_case() {
    assert_eq!(cleaner().lower_casing("Hello WORLD"), "hello world");
  }

  #[test]
  fn lower_casing_is_idempotent() {
    let once = cleaner().lower_casing("ÀÉÎ Straße MIXED case");
    let twice = cleaner().lower_casing(&once);
    assert_eq!(once, twice);
  }

  // ─── remove_html ───

  #[test]
  fn remove_html_strips_tags() {
    let text = "<p>Hello <b>world</b></p><br/>";
    assert_eq!(cleaner().remove_html(text), "Hello world");
  }

  #[test]
  fn remove_html_without_tags_is_identity() {
    let text = "no tags here, only 3 < 4";
    assert_eq!(cleaner().remove_html(text), text);
  }

  #[test]
  fn remove_html_is_non_greedy() {
    assert_eq!(cleaner().remove_html("<a>keep</a>"), "keep");
  }

  // ─── remove_url ───

  #[test]
  fn remove_url_strips_http_and_https() {
    let text = "see https://example.com/a?b=c and http://foo.org now";
    assert_eq!(cleaner().remove_url(text), "see  and  now");
  }

  #[test]
  fn remove_url_strips_www() {
    assert_eq!(cleaner().remove_url("visit www.rust-lang.org today"), "visit  today");
  }

  #[test]
  fn remove_url_leaves_plain_text() {
    let text = "no links, just www and http words";
    assert_eq!(cleaner().remove_url(text), text);
  }

  // ─── remove_emoji ───

  #[test]
  fn remove_emoji_replaces_with_name() {
    assert_eq!(cleaner().remove_emoji("Launch 🚀", true), "Launch :rocket:");
  }

  #[test]
  fn remove_emoji_names_flags_by_region() {
    assert_eq!(cleaner().remove_emoji("Go \u{1F1EF}\u{1F1F5}!", true), "Go :Japan:!");
  }

  #[test]
  fn remove_emoji_deletes_when_not_replacing() {
    assert_eq!(cleaner().remove_emoji("Launch 🚀!", false), "Launch !");
  }

  #[test]
  fn remove_emoji_keeps_plain_text_and_digits() {
    let text = "Price: 100 # items * 2 — café";
    assert_eq!(cleaner().remove_emoji(text, true), text);
  }

  #[test]
  fn emoji_alias_normalizes_cldr_names() {
    assert_eq!(emoji_alias("thumbs up: medium skin tone"), "thumbs_up_medium_skin_tone");
    assert_eq!(emoji_alias("flag: United States"), "United_States");
    assert_eq!(emoji_alias("face with open mouth"), "face_with_open_mouth");
  }

  // ─── remove_punctuation ───

  #[test]
  fn remove_punctuation_deletes_ascii_punctuation() {
    assert_eq!(cleaner().remove_punctuation("Hello, world! (yes)"), "Hello world yes");
  }

  #[test]
  fn remove_punctuation_output_has_no_punctuation() {
    let text = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~ mixed, text; here."##;
    let out = cleaner().remove_punctuation(text);
    assert!(!out.chars().any(|c| c.is_ascii_punctuation()), "got: {out}");
    assert_eq!(out, " mixed text here");
  }

  // ─── clean ───

  #[test]
  fn clean_applies_steps_in_order() {
    let options = CleaningOptions {
      remove_html: true,
      remove_url: true,
      remove_emoji: true,
      replace_emoji_with_meaning: false,
      remove_punctuation: true,
      lower_case: true,
    };
    let text = "<b>Great</b> news 🚀! Read https://example.com/x now.";
    assert_eq!(cleaner().clean(text, &options), "great news  read  now");
  }

  #[test]
  fn clean_with_nothing_enabled_is_identity() {
    let options = CleaningOptions {
      remove_html: false,
      remove_url: false,
      remove_emoji: false,
      replace_emoji_with_meaning: false,
      remove_punctuation: false,
      lower_case: false,
    };
    let text = "<i>Untouched</i> 🚀 https://x.y";
    assert_eq!(cleaner().clean(text, &options), text);
  }
}
