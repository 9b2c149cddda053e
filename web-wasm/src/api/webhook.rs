//! 自動化Webhook呼び出し（ブラウザ fetch）

use garoo_admin_common::{parse_payload, FetchError, WorkerRecord};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ビルド時に埋め込むWebhook URL
pub const WEBHOOK_URL: Option<&str> = option_env!("GAROO_WEBHOOK_URL");

/// JsValue → 表示用メッセージ
fn js_message(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

async fn post_webhook(url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str("{}"));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?.as_string().unwrap_or_default();
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "El webhook respondió {}: {}",
            resp.status(),
            text
        )));
    }
    Ok(text)
}

/// Webhook を呼び出してレコード一覧を取得
pub async fn trigger_webhook() -> Result<Vec<WorkerRecord>, FetchError> {
    let url = WEBHOOK_URL.ok_or_else(|| FetchError::new("GAROO_WEBHOOK_URL no está configurada"))?;

    let body = post_webhook(url)
        .await
        .map_err(|e| FetchError::new(js_message(e)))?;
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let payload: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| FetchError::new(e.to_string()))?;
    parse_payload(payload).map_err(|e| FetchError::new(e.to_string()))
}
