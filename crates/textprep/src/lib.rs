//! textprep テキスト前処理ライブラリー
//!
//! テキストのクリーニングと NLP 前処理（トークン化・文分割・ストップワード除去・
//! ステミング・見出し語化・品詞タグ付け・固有表現抽出）を行う。
//! 英語はルールベースモデル、日本語は vibrato-rkyv による形態素解析を用いる。

/// クリーニングモジュール - HTML/URL/絵文字/句読点の除去等の文字列変換
pub mod cleaning;

/// 設定モジュール - TextprepConfig, Language等の設定構造体を定義
pub mod config;

/// エラーモジュール - TextprepError, TextprepResult等のエラー型を定義
pub mod errors;

/// 言語モデルモジュール - LanguageModel トレイトと英語/日本語モデル、ModelManager
pub mod language_model;

/// ロギングモジュール - tracing-subscriber の初期化
pub mod logging;

/// データモデルモジュール - Token, Doc, Entity等のデータ構造を定義
pub mod models;

/// 前処理モジュール - BasicPreprocessing, AdvancedPreprocessing
pub mod preprocessing;

/// サービスモジュール - TextprepService等の上位レベルAPIを提供
pub mod service;

/// 再エクスポート
pub use cleaning::BasicCleaning;
pub use config::{CleaningOptions, Language, TextprepConfig};
pub use errors::{TextprepError, TextprepResult};
pub use language_model::{LanguageModel, ModelManager};
pub use models::{Doc, Entity, EntityLabel, PosTag, ProcessedText, Token};
pub use preprocessing::{AdvancedPreprocessing, BasicPreprocessing};
pub use service::TextprepService;
