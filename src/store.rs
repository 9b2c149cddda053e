//! ローカルのデータファイル

use crate::error::{AdminError, Result};
use garoo_admin_common::{parse_payload, WorkerRecord};
use std::path::Path;

/// データファイルを読む。ファイルがなければ `fetch` を促すエラー
pub fn load_workers(path: &Path) -> Result<Vec<WorkerRecord>> {
    if !path.exists() {
        return Err(AdminError::NoWorkers(format!(
            "{} no existe; ejecute `garoo-admin fetch` primero",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_payload(serde_json::from_str(&content)?)?)
}

/// 既存データ（なければ空）
pub fn load_existing(path: &Path) -> Result<Vec<WorkerRecord>> {
    if path.exists() {
        load_workers(path)
    } else {
        Ok(Vec::new())
    }
}

/// 一覧を丸ごと書き換える
pub fn save_workers(path: &Path, records: &[WorkerRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
