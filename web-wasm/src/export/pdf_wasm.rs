//! PDF生成（WASM版）
//!
//! 共通ロジックで描画計画まで作り、描画と保存はJavaScript側に任せる。

use crate::export::js_bindings::{plan_to_js, save_planned_pdf_js};
use chrono::NaiveDate;
use garoo_admin_common::export::pdf_core::plan_resume;
use garoo_admin_common::resume::{build_resume, SkippedSection};
use garoo_admin_common::{ResumeLayout, WorkerRecord};

/// ブラウザの現在時刻（ローカル）
fn local_now() -> Option<chrono::NaiveDateTime> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )?
    .and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// 履歴書PDFを生成してダウンロードさせる。スキップしたセクションを返す
pub fn export_worker_pdf(record: &WorkerRecord) -> Result<Vec<SkippedSection>, String> {
    let now = local_now().ok_or_else(|| "fecha actual no disponible".to_string())?;
    let document = build_resume(record, now);
    let plan = plan_resume(&document, &ResumeLayout::a4());

    let value = plan_to_js(&plan)?;
    save_planned_pdf_js(value).map_err(|e| format!("PDF generation failed: {:?}", e))?;

    Ok(plan.skipped)
}
