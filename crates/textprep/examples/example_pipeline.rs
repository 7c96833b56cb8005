//! textprep crate example
//!
//! Runs every stage of the pipeline on a few English texts.
//! Pass `ja` as the first argument to use the Japanese model
//! (the IPADIC preset is downloaded into the OS cache directory on the first run).

use textprep::cleaning::BasicCleaning;
use textprep::config::{Language, TextprepConfig};
use textprep::logging::init_tracing;
use textprep::service::TextprepService;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Shows each cleaning transform on its own.
fn show_cleaning(text: &str) {
  let cleaner = BasicCleaning::new();

  println!("\n===== Cleaning =====");
  println!("input              : {text}");
  println!("lower_casing       : {}", cleaner.lower_casing(text));
  println!("remove_html        : {}", cleaner.remove_html(text));
  println!("remove_url         : {}", cleaner.remove_url(text));
  println!("remove_emoji(true) : {}", cleaner.remove_emoji(text, true));
  println!("remove_emoji(false): {}", cleaner.remove_emoji(text, false));
  println!("remove_punctuation : {}", cleaner.remove_punctuation(text));
}

/// Runs the whole pipeline on `text` and prints every output.
fn show_pipeline(service: &TextprepService, text: &str) -> AppResult<()> {
  let result = service.process(text)?;

  println!("\n===== Pipeline =====");
  println!("input          : {text}");
  println!("cleaned        : {}", result.cleaned_text);
  println!("tokens         : {:?}", result.tokens);
  println!("sentences      : {:?}", result.sentences);
  println!("without stops  : {:?}", result.filtered_tokens);
  println!("stems          : {:?}", result.stems);
  println!("lemmas         : {:?}", result.lemmas);
  for (token, pos) in &result.pos_tags {
    println!("  {token:<16} {pos}");
  }
  println!("entities       : {:?}", result.entities);
  println!(
    "binary entities: {:?}",
    service.advanced().named_entity_recognizer(&result.cleaned_text, true)?
  );

  Ok(())
}

fn main() -> AppResult<()> {
  let language = match std::env::args().nth(1) {
    Some(arg) => arg.parse::<Language>()?,
    None => Language::En,
  };

  let config = TextprepConfig::for_language(language);
  init_tracing(&config.logging)?;

  let service = TextprepService::init(&config)?;

  let texts: &[&str] = match language {
    Language::En => &[
      "<p>Dr. Jane Goodall visited Paris on March 3, 2024 🚀</p> Read more at https://example.com!",
      "Apple's revenue grew 12% to $95 billion last quarter. The children weren't running.",
    ],
    Language::Ja => &["東京タワーは東京の観光名所です。京都には金閣寺があります。"],
  };

  show_cleaning(texts[0]);
  for text in texts {
    show_pipeline(&service, text)?;
  }

  Ok(())
}
