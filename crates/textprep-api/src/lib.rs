//! textprep-api crate
//!
//! Web server providing text cleaning and NLP preprocessing as HTTP API.
//!
//! ## Endpoints
//! - `POST /clean` - Text cleaning
//! - `POST /analyze` - Tokens, lemmas, stems, POS tags, sentences and entities
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Dr. Jane Goodall visited Paris last week."}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse, CleanRequest, CleanResponse, EntityDto, TokenDto};
pub use service::{TextprepApiService, TextprepApiServiceFull};
