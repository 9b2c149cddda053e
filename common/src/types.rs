//! ワーカーレコードの型定義
//!
//! Webhookが返すレコードはキー名がスペイン語の表示名で、
//! 値の型も揃っていない。そのため固定の構造体ではなく
//! 「キー → FieldValue」の順序付きマップとして保持する。

use crate::fields;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// レコードの1フィールドの値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// スプレッドシート読み込み等で日付型として得られた値
    Date(NaiveDate),
    /// 配列・オブジェクトなど表セルに描画できない値
    Other(Value),
}

impl FieldValue {
    /// 値が「存在する」か（null・空文字・0・NaN・false は存在しない扱い）
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Date(_) => true,
            FieldValue::Other(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 表セルに描画できない構造化値か
    pub fn is_structured(&self) -> bool {
        matches!(self, FieldValue::Other(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Date(d) => write!(f, "{}/{}/{}", d.day(), d.month(), d.year()),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => FieldValue::Number(f),
                None => FieldValue::Other(Value::Number(n)),
            },
            Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Other(other),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Number(n) => {
                // 整数値は "5000.0" ではなく "5000" として書き出す
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    Value::from(n as i64)
                } else {
                    serde_json::Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
                }
            }
            FieldValue::Text(s) => Value::String(s),
            FieldValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            FieldValue::Other(v) => v,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

/// ワーカー1件分のレコード（キーの出現順を保持）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct WorkerRecord {
    fields: Vec<(String, FieldValue)>,
}

impl WorkerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// ビルダー形式でフィールドを追加
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// 同じキーがあれば上書き、なければ末尾に追加
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// 文字列フィールドのみ取得
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `id` フィールド（存在する場合）
    pub fn id(&self) -> Option<String> {
        self.get(fields::ID).filter(|v| v.is_truthy()).map(|v| v.to_string())
    }
}

/// 取得データ内でレコード配列を探すキー
pub const PAYLOAD_ARRAY_KEYS: &[&str] = &["data", "workers", "items"];

/// 取得データ（配列、または配列を `data`/`workers`/`items` に持つオブジェクト）を展開
///
/// オブジェクト以外の要素は読み飛ばす。
pub fn parse_payload(payload: Value) -> crate::Result<Vec<WorkerRecord>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let found = PAYLOAD_ARRAY_KEYS
                .iter()
                .find_map(|key| match map.remove(*key) {
                    Some(Value::Array(items)) => Some(items),
                    _ => None,
                });
            match found {
                Some(items) => items,
                // 単一レコードとして扱う
                None if !map.is_empty() => vec![Value::Object(map)],
                None => Vec::new(),
            }
        }
        Value::Null => Vec::new(),
        other => {
            return Err(crate::Error::Payload(format!(
                "se esperaba una lista de registros, se recibió: {}",
                other
            )))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(WorkerRecord::from(map)),
            other => tracing::warn!(index = i, value = %other, "non-object entry ignored"),
        }
    }
    Ok(records)
}

impl From<Map<String, Value>> for WorkerRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(k, v)| (k, FieldValue::from(v))).collect(),
        }
    }
}

impl From<WorkerRecord> for Map<String, Value> {
    fn from(record: WorkerRecord) -> Self {
        record
            .fields
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!FieldValue::Null.is_truthy());
        assert!(!FieldValue::Text(String::new()).is_truthy());
        assert!(!FieldValue::Number(0.0).is_truthy());
        assert!(!FieldValue::Number(f64::NAN).is_truthy());
        assert!(!FieldValue::Bool(false).is_truthy());
        assert!(FieldValue::Text("x".into()).is_truthy());
        assert!(FieldValue::Number(44197.0).is_truthy());
    }

    #[test]
    fn test_record_deserialize_keeps_order() {
        let json = r#"{
            "Nombre Completo": "Ana López",
            "Pretencion Salarial": 5000,
            "Cv": null,
            "Habilidades": ["Excel", "SAP"]
        }"#;

        let record: WorkerRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Nombre Completo", "Pretencion Salarial", "Cv", "Habilidades"]);
        assert_eq!(record.text("Nombre Completo"), Some("Ana López"));
        assert_eq!(record.get("Pretencion Salarial"), Some(&FieldValue::Number(5000.0)));
        assert_eq!(record.get("Cv"), Some(&FieldValue::Null));
        assert!(record.get("Habilidades").map(FieldValue::is_structured).unwrap_or(false));
    }

    #[test]
    fn test_record_serialize_integers_without_fraction() {
        let record = WorkerRecord::new()
            .with("Pretencion Salarial", 5000i64)
            .with("Fecha Nacimiento", NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());

        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"Pretencion Salarial":5000,"Fecha Nacimiento":"1990-03-15"}"#);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = WorkerRecord::new().with("Email", "a@x.com");
        record.insert("Email", "b@x.com");
        assert_eq!(record.len(), 1);
        assert_eq!(record.text("Email"), Some("b@x.com"));
    }

    #[test]
    fn test_id_fallback() {
        assert_eq!(WorkerRecord::new().id(), None);
        assert_eq!(WorkerRecord::new().with("id", 7i64).id(), Some("7".to_string()));
        assert_eq!(WorkerRecord::new().with(fields::ID, "").id(), None);
    }

    #[test]
    fn test_parse_payload_shapes() {
        let array = serde_json::json!([{"Nombre Completo": "Ana"}, {"Nombre Completo": "Beto"}]);
        assert_eq!(parse_payload(array).unwrap().len(), 2);

        let wrapped = serde_json::json!({"data": [{"Nombre Completo": "Ana"}]});
        assert_eq!(parse_payload(wrapped).unwrap()[0].text("Nombre Completo"), Some("Ana"));

        let workers = serde_json::json!({"ok": true, "workers": [{"id": 1}, 3, {"id": 2}]});
        assert_eq!(parse_payload(workers).unwrap().len(), 2);

        let single = serde_json::json!({"Nombre Completo": "Solo"});
        assert_eq!(parse_payload(single).unwrap().len(), 1);

        assert!(parse_payload(Value::Null).unwrap().is_empty());
        assert!(matches!(
            parse_payload(serde_json::json!("texto")),
            Err(crate::Error::Payload(_))
        ));
    }
}
