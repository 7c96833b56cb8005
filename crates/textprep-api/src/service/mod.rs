//! service module
mod textprep_api_service;

pub use textprep_api_service::{TextprepApiService, TextprepApiServiceFull};
