//! JavaScript Bridge バインディング
//!
//! 描画計画（DrawOp列）を jsPDF で描いてダウンロードさせる。

use garoo_admin_common::DocumentPlan;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/pdf-bridge.js")]
extern "C" {
    /// 描画計画からPDFを作って保存する
    ///
    /// # Arguments
    /// * `plan` - `DocumentPlan` を変換したJSオブジェクト
    #[wasm_bindgen(js_name = "savePlannedPdf", catch)]
    pub fn save_planned_pdf_js(plan: JsValue) -> Result<(), JsValue>;
}

/// DocumentPlan → JSオブジェクト
pub fn plan_to_js(plan: &DocumentPlan) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(plan).map_err(|e| format!("serialización fallida: {}", e))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use garoo_admin_common::export::pdf_core::plan_resume;
    use garoo_admin_common::resume::build_resume;
    use garoo_admin_common::{ResumeLayout, WorkerRecord};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_plan_converts_to_object() {
        let record = WorkerRecord::new().with("Nombre Completo", "Ana");
        let now = chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let plan = plan_resume(&build_resume(&record, now), &ResumeLayout::a4());

        let value = plan_to_js(&plan).expect("変換失敗");
        let file_name = js_sys::Reflect::get(&value, &JsValue::from_str("fileName")).unwrap();
        assert_eq!(file_name.as_string().as_deref(), Some("CV_Ana.pdf"));
    }
}
