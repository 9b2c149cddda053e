use crate::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 保存済みURLより優先される環境変数
pub const WEBHOOK_URL_ENV: &str = "GAROO_WEBHOOK_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub webhook_url: Option<String>,
    pub timeout_seconds: u64,
    /// `fetch` の保存先・他コマンドの読み込み元
    pub data_file: PathBuf,
    /// PDF出力先
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_seconds: 60,
            data_file: PathBuf::from("workers.json"),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AdminError::Config("No se encontró el directorio personal".into()))?;
        Ok(home.join(".config").join("garoo-admin").join("config.json"))
    }

    /// 有効なWebhook URL（環境変数を優先）
    pub fn webhook_url(&self) -> Result<String> {
        let from_env = std::env::var(WEBHOOK_URL_ENV).ok();
        Self::pick_webhook_url(from_env, self.webhook_url.as_deref())
    }

    fn pick_webhook_url(from_env: Option<String>, stored: Option<&str>) -> Result<String> {
        from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| stored.filter(|url| !url.trim().is_empty()).map(str::to_string))
            .ok_or(AdminError::MissingWebhookUrl)
    }

    pub fn set_webhook_url(&mut self, url: String) -> Result<()> {
        self.webhook_url = Some(url);
        self.save()
    }
}
