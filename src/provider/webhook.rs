//! 自動化Webhookの呼び出し

use super::WorkerProvider;
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use garoo_admin_common::{parse_payload, WorkerRecord};
use reqwest::Client;
use std::time::Duration;

/// エラー本文はこの文字数で切る
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Webhook にPOSTしてレコード一覧を受け取る
#[derive(Debug, Clone)]
pub struct WebhookProvider {
    url: String,
    client: Client,
}

impl WebhookProvider {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl WorkerProvider for WebhookProvider {
    async fn trigger(&self) -> Result<Vec<WorkerRecord>> {
        tracing::info!(url = %self.url, "triggering webhook");

        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AdminError::WebhookStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        // 空応答は0件扱い
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let payload: serde_json::Value = serde_json::from_str(&body)?;
        let records = parse_payload(payload)?;
        tracing::info!(count = records.len(), "webhook returned records");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("webhook {}", self.url)
    }
}
