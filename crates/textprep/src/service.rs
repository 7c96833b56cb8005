// crates/textprep/src/service.rs

//! TextprepService: textprep クレートの統合ファサード。
//!
//! - モデル管理 (ModelManager)
//! - クリーニング (BasicCleaning)
//! - 基本前処理 (BasicPreprocessing)
//! - 高度な前処理 (AdvancedPreprocessing)
//!
//! API サーバーなどの外部からは、この構造体だけを意識すればよい。

use tracing::{debug, info};

use crate::cleaning::BasicCleaning;
use crate::config::{CleaningOptions, Language, TextprepConfig};
use crate::errors::TextprepResult;
use crate::language_model::ModelManager;
use crate::models::ProcessedText;
use crate::preprocessing::{AdvancedPreprocessing, BasicPreprocessing};

/// textprep クレートの統合ファサード。
///
/// 1 つのモデルハンドルを全ステージで共有する。
/// 構築後は不変なので `Arc<TextprepService>` としてスレッド間で共有できる。
#[derive(Debug)]
pub struct TextprepService {
  /// モデルマネージャ（ロード済みモデルのキャッシュを保持）
  model_manager: ModelManager,

  /// クリーニング設定
  cleaning_options: CleaningOptions,

  /// 高度な前処理（内部に BasicPreprocessing を保持）
  advanced: AdvancedPreprocessing,
}

impl TextprepService {
  /// 初期化（設定検証 + モデルロード + 各ステージ構築）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. ModelManager を構築してモデルをロード
  /// 3. BasicPreprocessing / AdvancedPreprocessing を構築
  ///
  /// # エラー
  /// - 設定が不正（max_text_bytes が範囲外、パスが存在しない等）
  /// - レキシコン / 辞書のロード失敗
  pub fn init(config: &TextprepConfig) -> TextprepResult<Self> {
    // 設定の妥当性を検証（ConfigError は #[from] で TextprepError に自動変換）
    config.validate()?;

    let model_manager = ModelManager::from_config(&config.model)?;
    let model = model_manager.load()?;

    let basic = BasicPreprocessing::from_config(model, config);
    let advanced = AdvancedPreprocessing::new(basic);

    info!(
      language = %config.language(),
      model = advanced.basic().model().name(),
      max_text_bytes = config.max_text_bytes(),
      "TextprepService initialized"
    );

    Ok(Self {
      model_manager,
      cleaning_options: config.cleaning,
      advanced,
    })
  }

  /// テキストをクリーニングし、全ての前処理結果をまとめて返す。
  ///
  /// モデルの解析はクリーニング後のテキストに対して 1 回だけ行う。
  ///
  /// # エラー
  /// - クリーニング後のテキストが max_text_bytes を超える
  pub fn process(&self, text: &str) -> TextprepResult<ProcessedText> {
    let basic = self.advanced.basic();
    let cleaned_text = self.clean(text);
    let doc = basic.analyze(&cleaned_text)?;

    let sentences = doc.sentence_texts().map(str::to_string).collect();
    let tokens = doc.tokens.iter().map(|t| t.text.clone()).collect();
    let filtered_tokens = doc
      .tokens
      .iter()
      .filter(|t| !basic.is_stop_word(&t.text))
      .map(|t| t.text.clone())
      .collect();
    let stems = doc.tokens.iter().map(|t| basic.stem_token(t)).collect();
    let lemmas = doc.tokens.iter().map(|t| t.lemma.clone()).collect();
    let pos_tags = doc.tokens.iter().map(|t| (t.text.clone(), t.pos)).collect();
    let entities = doc.entities.iter().map(|e| (e.text.clone(), e.label.to_string())).collect();

    debug!(
      input_bytes = text.len(),
      cleaned_bytes = cleaned_text.len(),
      tokens = doc.len(),
      entities = doc.entities.len(),
      "Text processed"
    );

    Ok(ProcessedText {
      cleaned_text,
      tokens,
      sentences,
      filtered_tokens,
      stems,
      lemmas,
      pos_tags,
      entities,
    })
  }

  /// 設定されたクリーニング手順だけを適用する。
  pub fn clean(&self, text: &str) -> String {
    self.cleaning().clean(text, &self.cleaning_options)
  }

  // ===== アクセサ =====

  /// モデルの言語を返す。
  pub fn language(&self) -> Language {
    self.model_manager.language()
  }

  /// クリーニング設定を返す。
  pub fn cleaning_options(&self) -> &CleaningOptions {
    &self.cleaning_options
  }

  /// クリーニングステージへの参照を返す。
  pub fn cleaning(&self) -> &BasicCleaning {
    self.advanced.basic().cleaning()
  }

  /// 基本前処理ステージへの参照を返す。
  pub fn basic(&self) -> &BasicPreprocessing {
    self.advanced.basic()
  }

  /// 高度な前処理ステージへの参照を返す。
  pub fn advanced(&self) -> &AdvancedPreprocessing {
    &self.advanced
  }

  /// 内部の ModelManager への参照を返す。
  pub fn model_manager(&self) -> &ModelManager {
    &self.model_manager
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::{AnalysisError, ConfigError, TextprepError};
  use crate::models::PosTag;

  // ─── テスト用ヘルパー関数 ───────────────────────────────────────────────────

  /// 英語の TextprepService を作成
  ///
  /// 英語モデルは外部データ不要なので一時ディレクトリも不要
  fn create_english_service() -> TextprepService {
    TextprepService::init(&TextprepConfig::for_language(Language::En)).expect("TextprepService 初期化失敗")
  }

  // ─── 初期化テスト ──────────────────────────────────────────────────────────

  #[test]
  fn service_initializes_with_english() {
    let service = create_english_service();

    assert_eq!(service.language(), Language::En);
    assert!(service.model_manager().is_loaded());
    assert_eq!(service.basic().model().name(), "en_rules");
  }

  #[test]
  fn service_init_rejects_invalid_config() {
    let mut config = TextprepConfig::for_language(Language::En);
    config.limits.max_text_bytes = 0;

    let err = TextprepService::init(&config).unwrap_err();
    assert!(matches!(err, TextprepError::Config(ConfigError::InvalidMaxTextBytes { .. })));
  }

  // ─── process テスト ────────────────────────────────────────────────────────

  #[test]
  fn process_cleans_before_analysis() {
    let service = create_english_service();

    let result = service
      .process("<p>Visit https://example.com now</p> The cats were running.")
      .unwrap();

    // タグと URL は除去される
    assert!(!result.cleaned_text.contains("<p>"));
    assert!(!result.cleaned_text.contains("example.com"));
    assert!(result.tokens.contains(&"cats".to_string()));
    assert!(!result.tokens.iter().any(|t| t.contains('<')));
  }

  #[test]
  fn process_outputs_are_aligned_with_tokens() {
    let service = create_english_service();

    let result = service.process("The cats were running. Dogs bark!").unwrap();

    assert_eq!(result.sentences, vec!["The cats were running.", "Dogs bark!"]);
    assert_eq!(result.stems.len(), result.tokens.len());
    assert_eq!(result.lemmas.len(), result.tokens.len());
    assert_eq!(result.pos_tags.len(), result.tokens.len());
    assert_eq!(result.stems[1], "cat");
    assert_eq!(result.lemmas[3], "run");
    assert_eq!(result.pos_tags[0], ("The".to_string(), PosTag::Det));
    assert!(!result.filtered_tokens.contains(&"were".to_string()));
  }

  #[test]
  fn process_reports_entities_with_labels() {
    let service = create_english_service();

    let result = service.process("Google opened an office in New York.").unwrap();

    assert!(result.entities.contains(&("Google".to_string(), "ORG".to_string())));
    assert!(result.entities.contains(&("New York".to_string(), "GPE".to_string())));
  }

  #[test]
  fn process_empty_text() {
    let service = create_english_service();

    let result = service.process("").unwrap();
    assert_eq!(result, ProcessedText::default());
  }

  #[test]
  fn process_rejects_text_over_limit() {
    let mut config = TextprepConfig::for_language(Language::En);
    config.limits.max_text_bytes = 10;
    let service = TextprepService::init(&config).unwrap();

    let err = service.process("this text is longer than ten bytes").unwrap_err();
    assert!(matches!(err, TextprepError::Analysis(AnalysisError::TextTooLong { max: 10, .. })));
  }

  // ─── アクセサテスト ────────────────────────────────────────────────────────

  #[test]
  fn clean_uses_configured_options() {
    let mut config = TextprepConfig::for_language(Language::En);
    config.cleaning.lower_case = true;
    config.cleaning.remove_punctuation = true;
    let service = TextprepService::init(&config).unwrap();

    assert_eq!(service.clean("Hello, World!"), "hello world");
    assert!(service.cleaning_options().lower_case);
  }
}
