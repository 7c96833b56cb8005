//! モデルモジュール

mod request;
mod response;

pub use request::{AnalyzeRequest, CleanRequest};
pub use response::{AnalyzeResponse, CleanResponse, EntityDto, TokenDto};
