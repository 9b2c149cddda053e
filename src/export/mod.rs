pub mod pdf;

use crate::error::Result;
use chrono::NaiveDateTime;
use garoo_admin_common::export::pdf_core::plan_resume;
use garoo_admin_common::resume::{build_resume, SkippedSection};
use garoo_admin_common::{ResumeLayout, WorkerRecord};
use std::path::{Path, PathBuf};

/// 1件分の出力結果
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub pages: usize,
    /// 出力されなかったセクション
    pub skipped: Vec<SkippedSection>,
}

/// ワーカー1件の履歴書PDFを `output_dir` に書き出す
pub fn export_worker(
    record: &WorkerRecord,
    output_dir: &Path,
    generated_at: NaiveDateTime,
) -> Result<ExportReport> {
    let document = build_resume(record, generated_at);
    let plan = plan_resume(&document, &ResumeLayout::a4());

    for skipped in &plan.skipped {
        tracing::warn!(section = %skipped.title, reason = %skipped.reason, "section omitted from PDF");
    }

    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(&plan.file_name);
    pdf::write_pdf(&plan, &path)?;
    tracing::info!(path = %path.display(), pages = plan.pages.len(), "resume written");

    Ok(ExportReport {
        path,
        pages: plan.pages.len(),
        skipped: plan.skipped,
    })
}
