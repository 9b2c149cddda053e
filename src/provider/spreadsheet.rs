//! スプレッドシート（先頭シート）からの読み込み
//!
//! 1行目をフィールド名とし、2行目以降を1レコードずつ読む。
//! 日付セルはシリアル値（数値）のまま渡し、表示時に変換する。

use super::WorkerProvider;
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use calamine::{open_workbook_auto, Data, Reader};
use garoo_admin_common::{FieldValue, WorkerRecord};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SpreadsheetProvider {
    path: PathBuf,
}

impl SpreadsheetProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl WorkerProvider for SpreadsheetProvider {
    async fn trigger(&self) -> Result<Vec<WorkerRecord>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_workbook(&path))
            .await
            .map_err(|e| AdminError::Spreadsheet(e.to_string()))?
    }

    fn describe(&self) -> String {
        format!("hoja de cálculo {}", self.path.display())
    }
}

/// 先頭シートを読み込む
pub fn read_workbook(path: &Path) -> Result<Vec<WorkerRecord>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AdminError::Spreadsheet(format!("{} no tiene hojas", path.display())))??;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| c.to_string().trim().to_string()).collect(),
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let mut record = WorkerRecord::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            record.insert(header.clone(), cell_value(cell));
        }
        records.push(record);
    }

    tracing::debug!(path = %path.display(), count = records.len(), "records read from spreadsheet");
    Ok(records)
}

/// セル → FieldValue
fn cell_value(cell: &Data) -> FieldValue {
    match cell {
        Data::Empty => FieldValue::Null,
        Data::String(s) => FieldValue::Text(s.clone()),
        Data::Float(f) => FieldValue::Number(*f),
        Data::Int(i) => FieldValue::Number(*i as f64),
        Data::Bool(b) => FieldValue::Bool(*b),
        Data::DateTime(dt) => FieldValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => FieldValue::Text(s.clone()),
        Data::Error(e) => {
            tracing::warn!(error = ?e, "spreadsheet cell error treated as empty");
            FieldValue::Null
        }
    }
}
