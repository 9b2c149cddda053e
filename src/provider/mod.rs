//! ワーカーデータの取得元
//!
//! Webhook・JSONファイル・スプレッドシートのいずれかからレコードを取得する。
//! 呼び出し側は `WorkerProvider` だけを見る。

pub mod file;
pub mod spreadsheet;
pub mod webhook;

use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;
use garoo_admin_common::WorkerRecord;
use std::path::Path;
use std::time::Duration;

pub use file::JsonFileProvider;
pub use spreadsheet::SpreadsheetProvider;
pub use webhook::WebhookProvider;

/// スプレッドシートとして読む拡張子
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// ワーカー一覧の取得元
#[async_trait]
pub trait WorkerProvider: Send + Sync {
    /// 取得を実行し、レコード一覧を丸ごと返す
    async fn trigger(&self) -> Result<Vec<WorkerRecord>>;

    /// ログ・表示用の説明
    fn describe(&self) -> String;
}

/// `--source` 指定（URL / ファイル）から取得元を選ぶ。省略時は設定のWebhook
pub fn from_source(source: Option<&str>, config: &Config) -> Result<Box<dyn WorkerProvider>> {
    let timeout = Duration::from_secs(config.timeout_seconds);

    let source = match source {
        Some(s) => s.trim(),
        None => return Ok(Box::new(WebhookProvider::new(config.webhook_url()?, timeout)?)),
    };

    if source.starts_with("http://") || source.starts_with("https://") {
        return Ok(Box::new(WebhookProvider::new(source.to_string(), timeout)?));
    }

    let path = Path::new(source);
    let is_spreadsheet = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| SPREADSHEET_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false);

    if is_spreadsheet {
        Ok(Box::new(SpreadsheetProvider::new(path)))
    } else {
        Ok(Box::new(JsonFileProvider::new(path)))
    }
}
