//! ワーカー検索フィルタ
//!
//! 検索語を小文字化し、固定の検索対象フィールドのいずれかに
//! 部分一致すればヒットとする。元のリストは変更しない。

use crate::fields::SEARCH_FIELDS;
use crate::types::WorkerRecord;

/// レコードが検索語にヒットするか（空の検索語は常にヒット）
pub fn matches(record: &WorkerRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    SEARCH_FIELDS.iter().any(|field| {
        record
            .text(field)
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

/// ヒットしたレコードの元リスト上のインデックス
pub fn filter_indices(records: &[WorkerRecord], term: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, term))
        .map(|(i, _)| i)
        .collect()
}

/// ヒットしたレコード（元の順序を保持）
pub fn filter_workers<'a>(records: &'a [WorkerRecord], term: &str) -> Vec<&'a WorkerRecord> {
    records.iter().filter(|r| matches(r, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    fn sample() -> Vec<WorkerRecord> {
        vec![
            WorkerRecord::new()
                .with(fields::FULL_NAME, "Ana López")
                .with(fields::NATIONALITY, "Guatemala"),
            WorkerRecord::new()
                .with(fields::FULL_NAME, "Carlos Pérez")
                .with(fields::NATIONALITY, "El Salvador"),
            WorkerRecord::new()
                .with(fields::FULL_NAME, "María Ruiz")
                .with(fields::EDUCATION_INSTITUTION, "Universidad de San Carlos"),
        ]
    }

    #[test]
    fn test_single_match_any_case() {
        let records = sample();
        for term in ["guatemala", "GUATEMALA", "GuAtEmAlA"] {
            let hits = filter_workers(&records, term);
            assert_eq!(hits.len(), 1, "term: {}", term);
            assert_eq!(hits[0].text(fields::FULL_NAME), Some("Ana López"));
        }
    }

    #[test]
    fn test_empty_term_returns_all() {
        let records = sample();
        assert_eq!(filter_workers(&records, "").len(), 3);
        assert_eq!(filter_indices(&records, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_multiple_fields_and_substrings() {
        let records = sample();
        // "carlos" は氏名と学校名の両方にヒット
        assert_eq!(filter_indices(&records, "carlos"), vec![1, 2]);
        assert!(filter_indices(&records, "honduras").is_empty());
    }

    #[test]
    fn test_non_search_fields_ignored() {
        let record = WorkerRecord::new()
            .with(fields::EMAIL, "guatemala@example.com")
            .with(fields::NATIONALITY, 502i64);
        assert!(!matches(&record, "guatemala"));
        assert!(!matches(&record, "502"));
    }

    #[test]
    fn test_filter_is_non_destructive() {
        let records = sample();
        let before = records.clone();
        let _ = filter_workers(&records, "ana");
        assert_eq!(records, before);
    }
}
