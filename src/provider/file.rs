use super::WorkerProvider;
use crate::error::Result;
use async_trait::async_trait;
use garoo_admin_common::{parse_payload, WorkerRecord};
use std::path::{Path, PathBuf};

/// ローカルのJSONファイル（Webhook応答と同じ形）から読む
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl WorkerProvider for JsonFileProvider {
    async fn trigger(&self) -> Result<Vec<WorkerRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let payload: serde_json::Value = serde_json::from_str(&content)?;
        let records = parse_payload(payload)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "records read from file");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("archivo {}", self.path.display())
    }
}
