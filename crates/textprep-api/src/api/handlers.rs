//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, CleanRequest, CleanResponse};

use super::state::AppState;

/// POST /clean エンドポイント
///
/// テキストのクリーニングを実行する。
///
/// # Request Body
/// ```json
/// { "text": "<p>クリーニング対象</p>", "options": { "lower_case": true } }
/// ```
///
/// # Response
/// - 200 OK: クリーニング成功
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
pub async fn post_clean(
  State(state): State<AppState>,
  Json(request): Json<CleanRequest>,
) -> Result<Json<CleanResponse>, ApiError> {
  debug!(text_len = request.text.len(), "クリーニングリクエストを受信");

  let service = state.service.clone();

  let response = tokio::task::spawn_blocking(move || service.clean(request)).await.map_err(|e| {
    error!(error = %e, "spawn_blocking エラー");
    ApiError::internal("処理の実行に失敗しました")
  })??;

  info!(
    text_len = response.text.len(),
    elapsed_ms = response.elapsed_ms,
    "クリーニング完了"
  );

  Ok(Json(response))
}

/// POST /analyze エンドポイント
///
/// トークン化・見出し語化・語幹抽出・品詞タグ付け・文分割・固有表現抽出を実行する。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 500 Internal Server Error: 内部エラー
pub async fn post_analyze(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  debug!(text_len = request.text.len(), "解析リクエストを受信");

  // CPUバウンドな処理を spawn_blocking で実行
  // 解析は重い処理のため、非同期ランタイムをブロックしないよう分離
  let service = state.service.clone();

  let response = tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
    error!(error = %e, "spawn_blocking エラー");
    ApiError::internal("処理の実行に失敗しました")
  })??;

  info!(
    token_count = response.tokens.len(),
    entity_count = response.entities.len(),
    elapsed_ms = response.elapsed_ms,
    "解析完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
