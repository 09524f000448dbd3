//! エラー型定義
//!
//! 画面にはDisplayの文字列をそのまま表示する（種別による分岐はしない）

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("timeout of {millis}ms exceeded")]
    Timeout { millis: u64 },

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// 非2xxレスポンスからエラーを組み立てる
    ///
    /// FastAPIの `{"detail": "..."}` があればメッセージに付与する
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));

        let message = match detail {
            Some(detail) if !detail.is_empty() => {
                format!("Request failed with status code {}: {}", status, detail)
            }
            _ => format!("Request failed with status code {}", status),
        };

        Error::Status { status, message }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
