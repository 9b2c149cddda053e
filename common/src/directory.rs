//! ワーカー一覧ページの状態
//!
//! 取得済みレコード・検索語・詳細モーダル・取得中フラグ・エラーを保持する。
//! 取得処理自体は外部プロバイダが担い、ここでは結果の反映だけを行う。

use crate::fields;
use crate::format::{format_currency, format_display, NA};
use crate::resolve::resolve_position;
use crate::search::{filter_indices, filter_workers};
use crate::types::WorkerRecord;
use serde::{Deserialize, Serialize};

/// プロバイダが返すエラー（表示用メッセージのみ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// 一覧テーブルの1行
///
/// 行の同一性は検索で変わらない `record_index`（元リスト上の位置）で表す。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkerRow {
    /// `id` があればそれ、なければ元リスト上の位置
    pub key: String,
    /// 元リスト上のインデックス（0始まり）
    pub record_index: usize,
    /// 絞り込み後の表示番号（1始まり）
    pub number: usize,
    pub full_name: String,
    pub position: String,
    pub nationality: String,
    pub availability: String,
    pub salary: String,
    pub education: String,
}

impl WorkerRow {
    /// `record_index` は元リスト上の位置、`row` は絞り込み後の位置
    pub fn from_record(record_index: usize, row: usize, record: &WorkerRecord) -> Self {
        let text_or = |key: &str, fallback: &str| {
            record
                .get(key)
                .filter(|v| v.is_truthy())
                .map(|v| v.to_string())
                .unwrap_or_else(|| fallback.to_string())
        };

        let mut education = text_or(fields::EDUCATION_TITLE, NA);
        if let Some(institution) = record
            .get(fields::EDUCATION_INSTITUTION)
            .filter(|v| v.is_truthy())
        {
            education.push_str(&format!(" ({})", institution));
        }

        Self {
            key: record.id().unwrap_or_else(|| record_index.to_string()),
            record_index,
            number: row + 1,
            full_name: text_or(fields::FULL_NAME, NA),
            position: resolve_position(record).unwrap_or_else(|| NA.to_string()),
            nationality: text_or(fields::NATIONALITY, NA),
            availability: text_or(fields::AVAILABILITY, "No especificada"),
            salary: format_currency(record.get(fields::SALARY_EXPECTATION)),
            education,
        }
    }
}

/// 詳細表示用の (キー, 表示値) 一覧（レコードのキー順）
pub fn detail_entries(record: &WorkerRecord) -> Vec<(String, String)> {
    record
        .iter()
        .map(|(key, value)| (key.to_string(), format_display(value)))
        .collect()
}

/// 件数表示: "3 registros encontrados" / "1 registro encontrado"
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 registro encontrado".to_string()
    } else {
        format!("{} registros encontrados", count)
    }
}

/// ワーカー一覧ページの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerDirectory {
    records: Vec<WorkerRecord>,
    search_term: String,
    selected: Option<WorkerRecord>,
    show_modal: bool,
    loading: bool,
    error: Option<FetchError>,
}

impl WorkerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<WorkerRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[WorkerRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// 取得開始。取得中なら false を返して何もしない
    pub fn begin_fetch(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// 取得結果を反映。成功時は一覧を丸ごと置き換え、失敗時は既存データを残す
    pub fn finish_fetch(&mut self, result: Result<Vec<WorkerRecord>, FetchError>) {
        self.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "worker list replaced");
                self.records = records;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "worker fetch failed; keeping previous data");
                self.error = Some(err);
            }
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// 現在の検索語で絞り込んだレコード
    pub fn filtered(&self) -> Vec<&WorkerRecord> {
        filter_workers(&self.records, &self.search_term)
    }

    pub fn rows(&self) -> Vec<WorkerRow> {
        filter_indices(&self.records, &self.search_term)
            .into_iter()
            .enumerate()
            .map(|(row, i)| WorkerRow::from_record(i, row, &self.records[i]))
            .collect()
    }

    /// 元リスト上のインデックスでレコードを引く
    pub fn record(&self, record_index: usize) -> Option<&WorkerRecord> {
        self.records.get(record_index)
    }

    pub fn result_count_label(&self) -> String {
        result_count_label(filter_indices(&self.records, &self.search_term).len())
    }

    /// 絞り込み後の行番号（0始まり）で詳細を開く
    pub fn view_details(&mut self, row: usize) -> bool {
        let record = self.filtered().get(row).map(|r| (*r).clone());
        match record {
            Some(record) => {
                self.select(record);
                true
            }
            None => false,
        }
    }

    /// 元リスト上のインデックスで詳細を開く（一覧の行から使う）
    pub fn view_record(&mut self, record_index: usize) -> bool {
        match self.records.get(record_index).cloned() {
            Some(record) => {
                self.select(record);
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, record: WorkerRecord) {
        self.selected = Some(record);
        self.show_modal = true;
    }

    pub fn selected(&self) -> Option<&WorkerRecord> {
        self.selected.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.show_modal
    }

    pub fn close_details(&mut self) {
        self.show_modal = false;
        self.selected = None;
    }

    /// 行番号（1始まり）・id・氏名（大文字小文字無視）でレコードを探す
    pub fn find(&self, selector: &str) -> Option<&WorkerRecord> {
        let selector = selector.trim();
        let filtered = self.filtered();

        if let Ok(number) = selector.parse::<usize>() {
            if let Some(record) = number.checked_sub(1).and_then(|i| filtered.get(i).copied()) {
                return Some(record);
            }
        }

        if let Some(record) = filtered
            .iter()
            .copied()
            .find(|r| r.id().as_deref() == Some(selector))
        {
            return Some(record);
        }

        let wanted = selector.to_lowercase();
        filtered
            .into_iter()
            .find(|r| r.text(fields::FULL_NAME).map(str::to_lowercase).as_deref() == Some(wanted.as_str()))
    }

    /// 「サーバー応答」タブ用の生JSON
    pub fn raw_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    fn worker(name: &str) -> WorkerRecord {
        WorkerRecord::new().with(fields::FULL_NAME, name)
    }

    #[test]
    fn test_fetch_replaces_list() {
        let mut dir = WorkerDirectory::with_records(vec![worker("Antiguo")]);
        assert!(dir.begin_fetch());
        dir.finish_fetch(Ok(vec![worker("Nuevo 1"), worker("Nuevo 2")]));

        assert!(!dir.is_loading());
        assert_eq!(dir.records().len(), 2);
        assert_eq!(dir.records()[0].text(fields::FULL_NAME), Some("Nuevo 1"));
    }

    #[test]
    fn test_fetch_error_keeps_data() {
        let mut dir = WorkerDirectory::with_records(vec![worker("Ana")]);
        assert!(dir.begin_fetch());
        dir.finish_fetch(Err(FetchError::new("Webhook respondió 500")));

        assert_eq!(dir.records().len(), 1);
        assert_eq!(dir.error().map(|e| e.message.as_str()), Some("Webhook respondió 500"));
        assert!(!dir.is_loading());
    }

    #[test]
    fn test_second_trigger_rejected_while_loading() {
        let mut dir = WorkerDirectory::new();
        assert!(dir.begin_fetch());
        assert!(!dir.begin_fetch());
        dir.finish_fetch(Ok(vec![]));
        assert!(dir.begin_fetch());
    }

    #[test]
    fn test_rows_and_fallbacks() {
        let record = WorkerRecord::new()
            .with(fields::FULL_NAME, "Ana López")
            .with(fields::EXPERIENCE_POSITION, "Contadora")
            .with(fields::SALARY_EXPECTATION, 6500i64)
            .with(fields::EDUCATION_TITLE, "Licenciatura")
            .with(fields::EDUCATION_INSTITUTION, "USAC");
        let dir = WorkerDirectory::with_records(vec![record, WorkerRecord::new().with("id", "w-9")]);

        let rows = dir.rows();
        assert_eq!(rows[0].key, "0");
        assert_eq!(rows[0].record_index, 0);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].position, "Contadora");
        assert_eq!(rows[0].salary, "Q6,500");
        assert_eq!(rows[0].education, "Licenciatura (USAC)");
        assert_eq!(rows[0].availability, "No especificada");

        assert_eq!(rows[1].key, "w-9");
        assert_eq!(rows[1].full_name, NA);
        assert_eq!(rows[1].salary, NA);
    }

    #[test]
    fn test_view_details_uses_filtered_rows() {
        let mut dir = WorkerDirectory::with_records(vec![worker("Ana"), worker("Beto")]);
        dir.set_search_term("beto");

        assert!(dir.view_details(0));
        assert_eq!(dir.selected().and_then(|r| r.text(fields::FULL_NAME)), Some("Beto"));
        assert!(dir.is_modal_open());

        dir.close_details();
        assert!(dir.selected().is_none());
        assert!(!dir.is_modal_open());
        assert!(!dir.view_details(5));
    }

    #[test]
    fn test_row_identity_follows_record_across_filters() {
        let mut dir = WorkerDirectory::with_records(vec![
            worker("Ana"),
            worker("Beto"),
            worker("Carla").with("id", "c-3"),
        ]);
        let all = dir.rows();
        assert_eq!(all[1].key, "1");
        assert_eq!(all[2].key, "c-3");

        dir.set_search_term("beto");
        let rows = dir.rows();
        assert_eq!(rows.len(), 1);
        // 表示番号は詰まるが、キーと元インデックスは変わらない
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].key, "1");
        assert_eq!(rows[0].record_index, 1);
        assert_ne!(rows[0], all[0]);
        assert_eq!(
            dir.record(rows[0].record_index).and_then(|r| r.text(fields::FULL_NAME)),
            Some("Beto")
        );

        // 絞り込み中でも行のインデックスで正しいレコードが開く
        dir.set_search_term("carla");
        let row = dir.rows().remove(0);
        dir.clear_search();
        assert!(dir.view_record(row.record_index));
        assert_eq!(dir.selected().and_then(|r| r.text(fields::FULL_NAME)), Some("Carla"));
        assert!(!dir.view_record(9));
    }

    #[test]
    fn test_count_label() {
        assert_eq!(result_count_label(1), "1 registro encontrado");
        assert_eq!(result_count_label(0), "0 registros encontrados");
        let mut dir = WorkerDirectory::with_records(vec![worker("Ana"), worker("Beto")]);
        assert_eq!(dir.result_count_label(), "2 registros encontrados");
        dir.set_search_term("ana");
        assert_eq!(dir.result_count_label(), "1 registro encontrado");
        dir.clear_search();
        assert_eq!(dir.search_term(), "");
    }

    #[test]
    fn test_find_selectors() {
        let dir = WorkerDirectory::with_records(vec![
            worker("Ana López").with("id", "a1"),
            worker("Beto Ruiz"),
        ]);
        assert_eq!(dir.find("2").and_then(|r| r.text(fields::FULL_NAME)), Some("Beto Ruiz"));
        assert_eq!(dir.find("a1").and_then(|r| r.text(fields::FULL_NAME)), Some("Ana López"));
        assert_eq!(dir.find("ana lópez").and_then(|r| r.id()), Some("a1".to_string()));
        assert!(dir.find("0").is_none());
        assert!(dir.find("nadie").is_none());
    }

    #[test]
    fn test_detail_entries() {
        let record = WorkerRecord::new()
            .with(fields::FULL_NAME, "Ana")
            .with(fields::PHONE, FieldValue::Null)
            .with("Licencia", true);
        let entries = detail_entries(&record);
        assert_eq!(entries[0], ("Nombre Completo".to_string(), "Ana".to_string()));
        assert_eq!(entries[1].1, NA);
        assert_eq!(entries[2].1, "Sí");
    }
}
