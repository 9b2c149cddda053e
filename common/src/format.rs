//! 日付・期間・金額の表示フォーマット
//!
//! いずれの関数も失敗せず、表示できない入力には "N/A" を返す。
//!
//! スプレッドシートのシリアル値は `(n - 25569) * 86400` 秒（Unix基準）として
//! 解釈する。1900年うるう年問題の補正は行わない（既存出力との互換優先）。

use crate::types::FieldValue;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;
use serde_json::Value;

/// 値がない場合の表示
pub const NA: &str = "N/A";

/// 1970-01-01 のシリアル値
pub const SERIAL_EPOCH_OFFSET: f64 = 25569.0;
const SECONDS_PER_DAY: f64 = 86400.0;
/// 表現可能な日時の上限（ミリ秒、±1億日）
const MAX_TIME_MS: f64 = 8.64e15;

lazy_static::lazy_static! {
    /// 既に "月/年" 形式の期間
    static ref PERIOD_RE: Regex = Regex::new(r"\d{1,2}/\d{4}").unwrap();
    static ref YEAR_ONLY_RE: Regex = Regex::new(r"^\d{4}$").unwrap();
}

/// シリアル値 → 日時（UTC）
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let millis = ((serial - SERIAL_EPOCH_OFFSET) * SECONDS_PER_DAY * 1000.0).trunc();
    if !millis.is_finite() || millis.abs() > MAX_TIME_MS {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
}

/// es-GT 短縮日付形式: `d/m/yyyy`
pub fn format_es_gt(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// es-GT 日時形式: `d/m/yyyy, HH:MM:SS`
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    format!(
        "{}, {:02}:{:02}:{:02}",
        format_es_gt(dt.date()),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

/// 文字列から日付を読み取る
fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }

    // スラッシュ区切りは米国式（月/日/年）として解釈される
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return Some(d);
        }
    }

    if YEAR_ONLY_RE.is_match(text) {
        return text.parse().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
    }

    None
}

/// 日付表示
///
/// - 文字列: 日付として読めれば es-GT 形式、読めなければそのまま
/// - 数値: シリアル値として es-GT 形式
/// - 日付: es-GT 形式
/// - それ以外: "N/A"
pub fn format_date(value: Option<&FieldValue>) -> String {
    let Some(value) = value.filter(|v| v.is_truthy()) else {
        return NA.to_string();
    };

    match value {
        FieldValue::Text(text) => match parse_date_text(text) {
            Some(date) => format_es_gt(date),
            None => text.clone(),
        },
        FieldValue::Number(serial) => serial_to_datetime(*serial)
            .map(|dt| format_es_gt(dt.date()))
            .unwrap_or_else(|| NA.to_string()),
        FieldValue::Date(date) => format_es_gt(*date),
        _ => NA.to_string(),
    }
}

/// 期間表示（`月/年`）
pub fn format_period(value: Option<&FieldValue>) -> String {
    let Some(value) = value.filter(|v| v.is_truthy()) else {
        return NA.to_string();
    };

    match value {
        FieldValue::Text(text) if PERIOD_RE.is_match(text) => text.clone(),
        FieldValue::Date(date) => format!("{}/{}", date.month(), date.year()),
        FieldValue::Number(serial) => serial_to_datetime(*serial)
            .map(|dt| format!("{}/{}", dt.month(), dt.year()))
            .unwrap_or_else(|| NA.to_string()),
        FieldValue::Other(Value::Array(items)) => {
            join_scalars(items).unwrap_or_else(|| NA.to_string())
        }
        other => other.to_string(),
    }
}

/// スカラーの配列を ", " で連結する。空要素は除き、入れ子があれば None
pub fn join_scalars(items: &[Value]) -> Option<String> {
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) if !s.is_empty() => parts.push(s.clone()),
            Value::Number(n) => parts.push(n.to_string()),
            Value::Bool(b) => parts.push(b.to_string()),
            Value::String(_) | Value::Null => {}
            Value::Array(_) | Value::Object(_) => return None,
        }
    }
    Some(parts.join(", "))
}

/// 職歴の年月表示。月・年のどちらかが欠ければ "N/A"
pub fn format_experience_date(month: Option<&FieldValue>, year: Option<&FieldValue>) -> String {
    match (month.filter(|v| v.is_truthy()), year.filter(|v| v.is_truthy())) {
        (Some(month), Some(year)) => format!("{}/{}", month, year),
        _ => NA.to_string(),
    }
}

/// 3桁区切り（小数は最大3桁）
pub fn group_thousands(n: f64) -> String {
    let rounded = (n * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();

    let formatted = format!("{:.3}", abs);
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// 給与表示（ケツァル）: `Q5,000`
pub fn format_currency(value: Option<&FieldValue>) -> String {
    match value.filter(|v| v.is_truthy()) {
        Some(FieldValue::Number(n)) => format!("Q{}", group_thousands(*n)),
        Some(other) => format!("Q{}", other),
        None => NA.to_string(),
    }
}

/// 詳細表示用の汎用フォーマット
pub fn format_display(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => NA.to_string(),
        FieldValue::Text(s) if s.is_empty() => NA.to_string(),
        FieldValue::Bool(true) => "Sí".to_string(),
        FieldValue::Bool(false) => "No".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_empty_inputs_are_na() {
        for value in [None, Some(&FieldValue::Null), Some(&text(""))] {
            assert_eq!(format_date(value), NA);
            assert_eq!(format_period(value), NA);
        }
        assert_eq!(format_experience_date(None, None), NA);
        assert_eq!(format_experience_date(Some(&FieldValue::Null), Some(&text(""))), NA);
    }

    #[test]
    fn test_format_date_serial_matches_date() {
        let serial = format_date(Some(&FieldValue::Number(44197.0)));
        let date = format_date(Some(&FieldValue::Date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())));
        assert_eq!(serial, "1/1/2021");
        assert_eq!(serial, date);
    }

    #[test]
    fn test_format_date_strings() {
        assert_eq!(format_date(Some(&text("1990-03-15"))), "15/3/1990");
        assert_eq!(format_date(Some(&text("1990-03-15T10:00:00Z"))), "15/3/1990");
        assert_eq!(format_date(Some(&text("03/04/1990"))), "4/3/1990");
        // 日付として読めない文字列はそのまま
        assert_eq!(format_date(Some(&text("15/03/1990"))), "15/03/1990");
        assert_eq!(format_date(Some(&text("desconocida"))), "desconocida");
    }

    #[test]
    fn test_format_date_other_types() {
        assert_eq!(format_date(Some(&FieldValue::Bool(true))), NA);
        assert_eq!(format_date(Some(&FieldValue::Number(f64::INFINITY))), NA);
        assert_eq!(format_date(Some(&FieldValue::Number(1e12))), NA);
    }

    #[test]
    fn test_format_period_passthrough() {
        assert_eq!(format_period(Some(&text("3/2019"))), "3/2019");
        assert_eq!(format_period(Some(&text("11/2020"))), "11/2020");
    }

    #[test]
    fn test_format_period_conversions() {
        assert_eq!(format_period(Some(&FieldValue::Number(44197.0))), "1/2021");
        let date = NaiveDate::from_ymd_opt(2018, 6, 30).unwrap();
        assert_eq!(format_period(Some(&FieldValue::Date(date))), "6/2018");
        assert_eq!(format_period(Some(&text("2015"))), "2015");
        assert_eq!(format_period(Some(&FieldValue::Number(0.0))), NA);
    }

    #[test]
    fn test_format_period_list_joins_scalars() {
        let list = FieldValue::Other(serde_json::json!(["1/2010", "", null, 2014]));
        assert_eq!(format_period(Some(&list)), "1/2010, 2014");

        let nested = FieldValue::Other(serde_json::json!([["1/2010"]]));
        assert_eq!(format_period(Some(&nested)), NA);
        assert_eq!(join_scalars(&[serde_json::json!({"a": 1})]), None);
    }

    #[test]
    fn test_serial_epoch_offset_preserved() {
        // 25569 は 1970-01-01
        let dt = serial_to_datetime(25569.0).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        // 1900年2月の補正はしない
        let dt = serial_to_datetime(60.0).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1900, 2, 28).unwrap());
    }

    #[test]
    fn test_format_experience_date() {
        let month = FieldValue::Text("Marzo".into());
        let year = FieldValue::Number(2019.0);
        assert_eq!(format_experience_date(Some(&month), Some(&year)), "Marzo/2019");
        assert_eq!(format_experience_date(Some(&month), None), NA);
        assert_eq!(format_experience_date(None, Some(&year)), NA);
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(Some(&FieldValue::Number(5000.0))), "Q5,000");
        assert_eq!(format_currency(Some(&FieldValue::Number(1234567.5))), "Q1,234,567.5");
        assert_eq!(format_currency(Some(&text("4500"))), "Q4500");
        assert_eq!(format_currency(None), NA);
        assert_eq!(format_currency(Some(&FieldValue::Number(0.0))), NA);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.5), "0.5");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(-12345.678), "-12,345.678");
    }

    #[test]
    fn test_format_timestamp() {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();
        assert_eq!(format_timestamp(dt), "19/10/2026, 09:05:03");
    }
}
