//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::TextprepApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Preprocessing Service
  ///
  /// - Production: `Arc::new(TextprepApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubTextprepApiService)`
  pub service: Arc<dyn TextprepApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn TextprepApiService>) -> Self {
    Self { config, service }
  }
}
