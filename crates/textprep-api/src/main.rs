//! textprep-api サーバーエントリーポイント

use std::sync::Arc;

use textprep::config::LoggingConfig;
use textprep::logging::init_tracing;

use textprep_api::ApiError;
use textprep_api::api::AppState;
use textprep_api::api::run_server;
use textprep_api::config::Config;
use textprep_api::service::TextprepApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG が未設定なら info）
  init_tracing(&LoggingConfig::default()).map_err(|e| ApiError::config(e.to_string()))?;

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(language = %config.language, preset = ?config.preset, "設定を読み込みました");

  // サービスの初期化（モデルのロードを含む）
  let service = Arc::new(TextprepApiServiceFull::new(&config)?);
  tracing::info!("前処理サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
