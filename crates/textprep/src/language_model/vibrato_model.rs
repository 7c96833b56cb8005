//! Japanese language model using vibrato-rkyv

use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use crate::config::{DictionaryPreset, Language};
use crate::language_model::LanguageModel;
use crate::models::{Doc, Entity, EntityLabel, PosTag, Token};

/// Sentence final marks
const SENTENCE_ENDS: &[&str] = &["。", "！", "？", "!", "?", "．"];

/// Closing brackets that stay with the preceding sentence
const CLOSING_BRACKETS: &[&str] = &["」", "』", "）", ")", "】", "〕", "］"];

/// Common Japanese function words
const JAPANESE_STOP_WORDS: &[&str] = &[
  "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
  "する", "から", "な", "こと", "として", "い", "や", "など", "なっ", "ない", "この", "ため",
  "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる", "へ", "か",
  "だ", "これ", "によって", "により", "おり", "です", "ます", "でし", "まし", "それ", "あの",
];

/// Morphological analysis model for Japanese
///
/// - Holds a vibrato tokenizer built from a shared dictionary
/// - A new worker is created per `analyze` call, so the model is `Send + Sync`
pub struct VibratoModel {
  inner: VibratoImpl,
  preset: DictionaryPreset,
  stop_words: HashSet<String>,
}

impl VibratoModel {
  /// Builds the model from a shared dictionary (`ModelManager` hands these out).
  ///
  /// `preset` tells which feature layout the dictionary uses (IPADIC or UniDic).
  pub fn from_shared_dictionary(dict: Arc<Dictionary>, preset: DictionaryPreset) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
      preset,
      stop_words: JAPANESE_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
    }
  }

  /// Feature layout of the dictionary
  pub fn preset(&self) -> DictionaryPreset {
    self.preset
  }
}

impl LanguageModel for VibratoModel {
  fn name(&self) -> &str {
    match self.preset {
      DictionaryPreset::Ipadic => "ja_vibrato_ipadic",
      DictionaryPreset::UnidicCwj => "ja_vibrato_unidic_cwj",
      DictionaryPreset::UnidicCsj => "ja_vibrato_unidic_csj",
    }
  }

  fn language(&self) -> Language {
    Language::Ja
  }

  fn analyze(&self, text: &str) -> Doc {
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    let mut morphemes = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
      // whitespace only matters for sentence splitting, which reads the gaps
      if token.surface().trim().is_empty() {
        continue;
      }
      // Offsets are bytes, never chars
      morphemes.push((token.range_byte(), token.feature().to_string()));
    }

    let doc = assemble(text, &morphemes, self.preset.lemma_field_index());

    debug!(
      text_bytes = text.len(),
      morphemes = worker.num_tokens(),
      tokens = doc.tokens.len(),
      sentences = doc.sentences.len(),
      entities = doc.entities.len(),
      "Japanese analysis completed"
    );
    doc
  }

  fn stop_words(&self) -> &HashSet<String> {
    &self.stop_words
  }
}

/// Builds a document from `(byte range, feature)` pairs.
fn assemble(text: &str, morphemes: &[(Range<usize>, String)], lemma_index: usize) -> Doc {
  let tokens: Vec<Token> = morphemes
    .iter()
    .map(|(range, feature)| {
      let surface = &text[range.clone()];
      let lemma = feature
        .split(',')
        .nth(lemma_index)
        .filter(|field| !field.is_empty() && *field != "*")
        .unwrap_or(surface);
      Token::new(surface, upos_from_feature(feature), range.start, range.end)
        .with_lemma(lemma)
        .with_tag(feature.as_str())
    })
    .collect();

  let sentences = split_sentences(text, &tokens);
  let doc = Doc::new(text, tokens, sentences);
  let entities = entities(&doc);
  doc.with_entities(entities)
}

/// Maps a dictionary feature string (IPADIC or UniDic) to a universal POS tag.
pub fn upos_from_feature(feature: &str) -> PosTag {
  let mut fields = feature.split(',');
  let pos1 = fields.next().unwrap_or("");
  let pos2 = fields.next().unwrap_or("");

  match pos1 {
    "名詞" => match pos2 {
      "固有名詞" => PosTag::Propn,
      "代名詞" => PosTag::Pron,
      "数" | "数詞" => PosTag::Num,
      "形容動詞語幹" => PosTag::Adj,
      _ => PosTag::Noun,
    },
    "動詞" => {
      if pos2 == "非自立" || (pos2 == "非自立可能" && feature.contains("補助")) {
        PosTag::Aux
      } else {
        PosTag::Verb
      }
    }
    "形容詞" | "形状詞" => PosTag::Adj,
    "連体詞" => PosTag::Det,
    "副詞" => PosTag::Adv,
    "接続詞" => PosTag::Cconj,
    "感動詞" | "フィラー" => PosTag::Intj,
    "助詞" => match pos2 {
      "接続助詞" => PosTag::Sconj,
      "終助詞" | "副助詞" | "係助詞" => PosTag::Part,
      _ => PosTag::Adp,
    },
    "助動詞" => PosTag::Aux,
    "記号" | "補助記号" => match pos2 {
      "句点" | "読点" | "括弧開" | "括弧閉" => PosTag::Punct,
      "空白" => PosTag::Space,
      _ => PosTag::Sym,
    },
    "接頭詞" | "接頭辞" => PosTag::Noun,
    "接尾辞" => match pos2 {
      "名詞的" => PosTag::Noun,
      "形容詞的" | "形状詞的" => PosTag::Adj,
      "動詞的" => PosTag::Verb,
      _ => PosTag::Part,
    },
    "空白" => PosTag::Space,
    "代名詞" => PosTag::Pron,
    _ => PosTag::X,
  }
}

/// Sentence ranges: after a sentence final mark (plus closing brackets) or before a blank line.
fn split_sentences(text: &str, tokens: &[Token]) -> Vec<Range<usize>> {
  let mut sentences = Vec::new();
  let mut start = 0;
  let mut index = 0;

  while index < tokens.len() {
    if index > start && text[tokens[index - 1].end..tokens[index].start].matches('\n').count() >= 2 {
      sentences.push(start..index);
      start = index;
    }

    let is_end = SENTENCE_ENDS.contains(&tokens[index].text.as_str());
    index += 1;
    if is_end {
      while index < tokens.len() && CLOSING_BRACKETS.contains(&tokens[index].text.as_str()) {
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

/// Entity label of a single token, from its proper noun sub-category
fn token_label(feature: &str) -> Option<EntityLabel> {
  let fields: Vec<&str> = feature.split(',').take(3).collect();
  match fields.as_slice() {
    ["名詞", "固有名詞", "人名", ..] => Some(EntityLabel::Person),
    ["名詞", "固有名詞", "地域" | "地名", ..] => Some(EntityLabel::Gpe),
    ["名詞", "固有名詞", "組織", ..] => Some(EntityLabel::Org),
    ["名詞", "数" | "数詞", ..] => Some(EntityLabel::Cardinal),
    _ => None,
  }
}

/// Consecutive tokens with the same label form one entity; entities stay inside a sentence.
fn entities(doc: &Doc) -> Vec<Entity> {
  let mut found = Vec::new();
  for sentence in &doc.sentences {
    let mut index = sentence.start;
    while index < sentence.end {
      let Some(label) = token_label(&doc.tokens[index].tag) else {
        index += 1;
        continue;
      };
      let mut end = index + 1;
      while end < sentence.end && token_label(&doc.tokens[end].tag) == Some(label) {
        end += 1;
      }
      found.extend(doc.entity(index..end, label));
      index = end;
    }
  }
  found
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Builds `(range, feature)` pairs for consecutive surfaces
  fn morphemes(text: &str, parts: &[(&str, &str)]) -> Vec<(Range<usize>, String)> {
    let mut cursor = 0;
    parts
      .iter()
      .map(|(surface, feature)| {
        let start = cursor + text[cursor..].find(surface).unwrap();
        cursor = start + surface.len();
        (start..cursor, feature.to_string())
      })
      .collect()
  }

  #[test]
  fn maps_ipadic_features_to_upos() {
    assert_eq!(upos_from_feature("名詞,一般,*,*,*,*,猫,ネコ,ネコ"), PosTag::Noun);
    assert_eq!(upos_from_feature("名詞,固有名詞,地域,国,*,*,日本,ニッポン,ニッポン"), PosTag::Propn);
    assert_eq!(upos_from_feature("名詞,代名詞,一般,*,*,*,私,ワタシ,ワタシ"), PosTag::Pron);
    assert_eq!(upos_from_feature("名詞,数,*,*,*,*,三,サン,サン"), PosTag::Num);
    assert_eq!(upos_from_feature("動詞,自立,*,*,五段・ラ行,連用形,走る,ハシリ,ハシリ"), PosTag::Verb);
    assert_eq!(upos_from_feature("動詞,非自立,*,*,一段,連用形,いる,イ,イ"), PosTag::Aux);
    assert_eq!(upos_from_feature("助詞,格助詞,一般,*,*,*,が,ガ,ガ"), PosTag::Adp);
    assert_eq!(upos_from_feature("助詞,係助詞,*,*,*,*,は,ハ,ワ"), PosTag::Part);
    assert_eq!(upos_from_feature("助詞,接続助詞,*,*,*,*,て,テ,テ"), PosTag::Sconj);
    assert_eq!(upos_from_feature("助動詞,*,*,*,特殊・マス,基本形,ます,マス,マス"), PosTag::Aux);
    assert_eq!(upos_from_feature("記号,句点,*,*,*,*,。,。,。"), PosTag::Punct);
    assert_eq!(upos_from_feature("記号,一般,*,*,*,*,★,,"), PosTag::Sym);
    assert_eq!(upos_from_feature("連体詞,*,*,*,*,*,この,コノ,コノ"), PosTag::Det);
    assert_eq!(upos_from_feature("未知語"), PosTag::X);
  }

  #[test]
  fn maps_unidic_features_to_upos() {
    assert_eq!(upos_from_feature("形状詞,一般,*,*,*,*,シズカ,静か,静か"), PosTag::Adj);
    assert_eq!(upos_from_feature("補助記号,句点,*,*,*,*,,。,。"), PosTag::Punct);
    assert_eq!(upos_from_feature("接尾辞,名詞的,一般,*,*,*,ジ,寺,寺"), PosTag::Noun);
    assert_eq!(upos_from_feature("名詞,数詞,*,*,*,*,サン,三,三"), PosTag::Num);
  }

  #[test]
  fn assemble_uses_lemma_field_and_falls_back_to_surface() {
    let text = "走った";
    let parts = morphemes(text, &[
      ("走っ", "動詞,自立,*,*,五段・ラ行,連用タ接続,走る,ハシッ,ハシッ"),
      ("た", "助動詞,*,*,*,特殊・タ,基本形,*,タ,タ"),
    ]);
    let doc = assemble(text, &parts, DictionaryPreset::Ipadic.lemma_field_index());
    assert_eq!(doc.tokens[0].lemma, "走る");
    assert_eq!(doc.tokens[1].lemma, "た");
    assert_eq!(doc.tokens[0].pos, PosTag::Verb);
    assert!(doc.tokens[0].tag.starts_with("動詞"));
  }

  #[test]
  fn splits_sentences_after_marks_and_brackets() {
    let text = "「はい。」と言った。次へ";
    let parts = morphemes(text, &[
      ("「", "記号,括弧開,*,*,*,*,「,「,「"),
      ("はい", "感動詞,*,*,*,*,*,はい,ハイ,ハイ"),
      ("。", "記号,句点,*,*,*,*,。,。,。"),
      ("」", "記号,括弧閉,*,*,*,*,」,」,」"),
      ("と", "助詞,格助詞,引用,*,*,*,と,ト,ト"),
      ("言っ", "動詞,自立,*,*,五段・ワ行促音便,連用タ接続,言う,イッ,イッ"),
      ("た", "助動詞,*,*,*,特殊・タ,基本形,た,タ,タ"),
      ("。", "記号,句点,*,*,*,*,。,。,。"),
      ("次", "名詞,一般,*,*,*,*,次,ツギ,ツギ"),
      ("へ", "助詞,格助詞,一般,*,*,*,へ,ヘ,エ"),
    ]);
    let doc = assemble(text, &parts, 6);
    let sentences: Vec<&str> = doc.sentence_texts().collect();
    assert_eq!(sentences, vec!["「はい。」", "と言った。", "次へ"]);
  }

  #[test]
  fn merges_proper_noun_runs_into_entities() {
    let text = "山田太郎は東京で3人に会った";
    let parts = morphemes(text, &[
      ("山田", "名詞,固有名詞,人名,姓,*,*,山田,ヤマダ,ヤマダ"),
      ("太郎", "名詞,固有名詞,人名,名,*,*,太郎,タロウ,タロー"),
      ("は", "助詞,係助詞,*,*,*,*,は,ハ,ワ"),
      ("東京", "名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー"),
      ("で", "助詞,格助詞,一般,*,*,*,で,デ,デ"),
      ("3", "名詞,数,*,*,*,*,*"),
      ("人", "名詞,接尾,助数詞,*,*,*,人,ニン,ニン"),
      ("に", "助詞,格助詞,一般,*,*,*,に,ニ,ニ"),
      ("会っ", "動詞,自立,*,*,五段・ワ行促音便,連用タ接続,会う,アッ,アッ"),
      ("た", "助動詞,*,*,*,特殊・タ,基本形,た,タ,タ"),
    ]);
    let doc = assemble(text, &parts, 6);
    let found: Vec<(&str, EntityLabel)> = doc.entities.iter().map(|e| (e.text.as_str(), e.label)).collect();
    assert_eq!(
      found,
      vec![("山田太郎", EntityLabel::Person), ("東京", EntityLabel::Gpe), ("3", EntityLabel::Cardinal)]
    );
  }

  #[test]
  fn empty_input_gives_empty_document() {
    let doc = assemble("", &[], 6);
    assert!(doc.is_empty());
    assert!(doc.sentences.is_empty());
  }
}
