//! 複数キー候補からのフィールド解決
//!
//! 候補キーを先頭から順に見て、最初に「存在する」値を採用する。

use crate::fields;
use crate::types::{FieldValue, WorkerRecord};

/// リンクとして使えない場合の表示
pub const NOT_AVAILABLE: &str = "No disponible";

/// 候補キーの順で最初に存在する値を返す
pub fn resolve<'a>(record: &'a WorkerRecord, candidate_keys: &[&str]) -> Option<&'a FieldValue> {
    candidate_keys
        .iter()
        .filter_map(|key| record.get(key))
        .find(|value| value.is_truthy())
}

/// 文字列として解決（表示用）
pub fn resolve_text(record: &WorkerRecord, candidate_keys: &[&str]) -> Option<String> {
    resolve(record, candidate_keys).map(|v| v.to_string())
}

/// URLとして使える文字列か（`http` または `www.` で始まる）
pub fn is_link(value: &str) -> bool {
    value.starts_with("http") || value.starts_with("www.")
}

/// リンク値を解決。使えない場合は "No disponible"
pub fn resolve_link(record: &WorkerRecord, candidate_keys: &[&str]) -> String {
    match resolve(record, candidate_keys).and_then(FieldValue::as_text) {
        Some(url) if is_link(url) => url.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn resolve_cv(record: &WorkerRecord) -> String {
    resolve_link(record, fields::CV_KEYS)
}

pub fn resolve_portfolio(record: &WorkerRecord) -> String {
    resolve_link(record, fields::PORTFOLIO_KEYS)
}

pub fn resolve_position(record: &WorkerRecord) -> Option<String> {
    resolve_text(record, fields::POSITION_KEYS)
}
