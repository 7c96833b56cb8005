//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_analyze, post_clean};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/clean", post(post_clean))
    .route("/analyze", post(post_analyze))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::body::Body;
  use axum::http::{Request, StatusCode};
  use textprep::config::{DictionaryPreset, Language};
  use tower::ServiceExt;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{AnalyzeRequest, AnalyzeResponse, CleanRequest, CleanResponse};
  use crate::service::TextprepApiService;

  /// テスト用のダミー実装（モデルを一切触らない）
  #[derive(Clone)]
  struct DummyService;

  impl TextprepApiService for DummyService {
    fn clean(&self, request: CleanRequest) -> ApiResult<CleanResponse> {
      Ok(CleanResponse {
        text: request.text,
        elapsed_ms: 0,
      })
    }

    fn analyze(&self, _request: AnalyzeRequest) -> ApiResult<AnalyzeResponse> {
      Ok(AnalyzeResponse {
        tokens: Vec::new(),
        sentences: Vec::new(),
        entities: Vec::new(),
        elapsed_ms: 0,
      })
    }
  }

  fn create_test_state() -> AppState {
    let config = Config {
      bind_addr: "127.0.0.1:5541".to_string(),
      language: Language::En,
      preset: DictionaryPreset::Ipadic,
      lexicon_path: None,
    };

    // スタブを注入（モデルロード不要）
    let service = Arc::new(DummyService) as Arc<dyn TextprepApiService>;
    AppState::new(config, service)
  }

  #[tokio::test]
  async fn router_serves_health() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn router_rejects_unknown_route() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(Request::builder().uri("/unknown").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }
}
