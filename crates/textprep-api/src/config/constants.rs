//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 1MB までのテキストを許可する。
/// Axum のリクエストボディ上限（2MB）より小さくし、サービス層で `text_too_long` を返す。
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";

/// デフォルトの言語
///
/// 英語モデルは外部データ不要のため、辞書ダウンロードなしで起動できる。
pub const DEFAULT_LANGUAGE: &str = "en";

/// デフォルトの辞書プリセット名（日本語のみ使用）
///
/// IPADIC は最も小さいプリセット辞書。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";
