//! リクエストモデル定義

use serde::Deserialize;
use textprep::config::CleaningOptions;

/// クリーニングリクエスト
#[derive(Debug, Deserialize)]
pub struct CleanRequest {
  /// クリーニング対象のテキスト
  pub text: String,
  /// クリーニング手順（省略時はサーバーの設定を使用）
  #[serde(default)]
  pub options: Option<CleaningOptions>,
}

/// 解析リクエスト
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
  /// 解析対象のテキスト
  pub text: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_analyze_request() {
    let json = r#"{"text": "Hello world"}"#;
    let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "Hello world");
  }

  #[test]
  fn deserialize_clean_request_without_options() {
    let json = r#"{"text": ""}"#;
    let req: CleanRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.text, "");
    assert!(req.options.is_none());
  }

  #[test]
  fn deserialize_clean_request_with_partial_options() {
    let json = r#"{"text": "<b>Hi</b>", "options": {"lower_case": true}}"#;
    let req: CleanRequest = serde_json::from_str(json).unwrap();
    let options = req.options.unwrap();
    assert!(options.lower_case);
    // 指定されていない項目はデフォルト値
    assert!(options.remove_html);
  }
}
