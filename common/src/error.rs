//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// セクション単位の失敗（そのセクションのみスキップされる）
    #[error("Section error [{section}]: {reason}")]
    Section { section: String, reason: String },

    #[error("Layout error: {0}")]
    Layout(String),

    /// 取得データの形が想定外
    #[error("Payload error: {0}")]
    Payload(String),
}

impl Error {
    pub fn section(section: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Section {
            section: section.into(),
            reason: reason.into(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
