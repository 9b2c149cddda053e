//! ワーカー履歴書ドキュメントの組み立て
//!
//! レコードから「セクション → (ラベル, 値) の行」の構造を作る。
//! 描画（PDF）はこの構造を受け取って行う。
//!
//! - 空の値の行は落とす。ただし CV / Portafolio は常に表示（空なら "No disponible"）
//! - 表示行が0件のセクションはヘッダーごと出さない
//! - セクション構築に失敗した場合はログを出してそのセクションだけスキップ

use crate::error::{Error, Result};
use crate::fields;
use crate::format::{
    format_currency, format_date, format_experience_date, format_period, format_timestamp,
    join_scalars, NA,
};
use crate::resolve::{is_link, resolve_cv, resolve_portfolio, resolve_position, NOT_AVAILABLE};
use crate::types::{FieldValue, WorkerRecord};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

pub const DOCUMENT_TITLE: &str = "Información del Trabajador";

/// エクスポート失敗時にユーザーへ出すメッセージ
pub const EXPORT_ERROR_MESSAGE: &str =
    "Ocurrió un error al generar el PDF. Por favor, inténtalo de nuevo.";

const DEFAULT_FILE_STEM: &str = "trabajador";

/// 行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RowKind {
    Plain,
    /// CV / Portafolio（常に表示、URLならリンク描画）
    Link,
}

/// 表の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeRow {
    pub label: String,
    pub value: String,
    pub kind: RowKind,
}

impl ResumeRow {
    /// リンクとして描画するURL
    pub fn url(&self) -> Option<&str> {
        match self.kind {
            RowKind::Link if self.value != NOT_AVAILABLE && is_link(&self.value) => {
                Some(&self.value)
            }
            _ => None,
        }
    }
}

/// 表示されるセクション（空でないことが保証される）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeSection {
    pub title: String,
    pub rows: Vec<ResumeRow>,
}

/// 描画されなかったセクション
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSection {
    pub title: String,
    pub reason: String,
}

/// 履歴書ドキュメント
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeDocument {
    pub title: String,
    pub generated_at: String,
    pub sections: Vec<ResumeSection>,
    pub skipped: Vec<SkippedSection>,
    pub file_name: String,
}

impl ResumeDocument {
    pub fn section(&self, title: &str) -> Option<&ResumeSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// セクションの候補行を集めるビルダー
struct SectionBuilder<'a> {
    record: &'a WorkerRecord,
    title: &'static str,
    rows: Vec<(&'static str, Option<String>, RowKind)>,
}

impl<'a> SectionBuilder<'a> {
    fn new(record: &'a WorkerRecord, title: &'static str) -> Self {
        Self {
            record,
            title,
            rows: Vec::new(),
        }
    }

    /// レコードのフィールドをそのまま表示
    fn field(mut self, label: &'static str, key: &str) -> Result<Self> {
        let value = match self.record.get(key) {
            Some(value) => cell_text(value).map_err(|reason| {
                Error::section(self.title, format!("'{}': {}", key, reason))
            })?,
            None => None,
        };
        self.rows.push((label, value, RowKind::Plain));
        Ok(self)
    }

    /// 整形済みの値を表示
    fn value(mut self, label: &'static str, value: Option<String>) -> Self {
        self.rows.push((label, value, RowKind::Plain));
        self
    }

    fn link(mut self, label: &'static str, url: String) -> Self {
        self.rows.push((label, Some(url), RowKind::Link));
        self
    }

    /// 空行を落とし、表示行がなければ None
    fn finish(self) -> Option<ResumeSection> {
        let rows: Vec<ResumeRow> = self
            .rows
            .into_iter()
            .filter_map(|(label, value, kind)| match kind {
                RowKind::Link => Some(ResumeRow {
                    label: label.to_string(),
                    value: value
                        .filter(|v| !v.is_empty())
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    kind,
                }),
                RowKind::Plain => value.filter(|v| !v.is_empty()).map(|value| ResumeRow {
                    label: label.to_string(),
                    value,
                    kind,
                }),
            })
            .collect();

        if rows.is_empty() {
            None
        } else {
            Some(ResumeSection {
                title: self.title.to_string(),
                rows,
            })
        }
    }
}

/// 生のフィールド値をセル文字列に変換
///
/// - null・空文字 → None（行を落とす）
/// - 0・false → "N/A"
/// - スカラー値の配列 → ", " 区切り
/// - オブジェクトや入れ子の配列 → Err
fn cell_text(value: &FieldValue) -> std::result::Result<Option<String>, String> {
    match value {
        FieldValue::Null => Ok(None),
        FieldValue::Text(s) if s.is_empty() => Ok(None),
        FieldValue::Other(Value::Array(items)) => join_scalars(items)
            .map(Some)
            .ok_or_else(|| "lista con valores anidados".to_string()),
        FieldValue::Other(_) => Err("valor estructurado no representable".to_string()),
        other if !other.is_truthy() => Ok(Some(NA.to_string())),
        other => Ok(Some(other.to_string())),
    }
}

fn personal_section(record: &WorkerRecord) -> Result<Option<ResumeSection>> {
    Ok(SectionBuilder::new(record, "Datos Personales")
        .field("Nombre Completo", fields::FULL_NAME)?
        .value("Puesto", resolve_position(record))
        .field("Nacionalidad", fields::NATIONALITY)?
        .field("Estado Civil", fields::MARITAL_STATUS)?
        .value("Fecha Nacimiento", Some(format_date(record.get(fields::BIRTH_DATE))))
        .field("Teléfono", fields::PHONE)?
        .field("Email", fields::EMAIL)?
        .field("Dirección", fields::ADDRESS)?
        .field("Disponibilidad", fields::AVAILABILITY)?
        .value(
            "Pretención Salarial",
            Some(format_currency(record.get(fields::SALARY_EXPECTATION))),
        )
        .field("LinkedIn", fields::LINKEDIN)?
        .field("Behance", fields::BEHANCE)?
        .link("CV", resolve_cv(record))
        .link("Portafolio", resolve_portfolio(record))
        .finish())
}

fn education_section(record: &WorkerRecord) -> Result<Option<ResumeSection>> {
    let period = format!(
        "{} - {}",
        format_period(record.get(fields::EDUCATION_START)),
        format_period(record.get(fields::EDUCATION_END))
    );
    Ok(SectionBuilder::new(record, "Educación")
        .field("Título", fields::EDUCATION_TITLE)?
        .field("Institución", fields::EDUCATION_INSTITUTION)?
        .field("Nivel Educativo", fields::EDUCATION_LEVEL)?
        .value("Período", Some(period))
        .finish())
}

fn experience_section(record: &WorkerRecord) -> Result<Option<ResumeSection>> {
    let period = format!(
        "{} - {}",
        format_experience_date(
            record.get(fields::EXPERIENCE_START_MONTH),
            record.get(fields::EXPERIENCE_START_YEAR)
        ),
        format_experience_date(
            record.get(fields::EXPERIENCE_END_MONTH),
            record.get(fields::EXPERIENCE_END_YEAR)
        )
    );
    Ok(SectionBuilder::new(record, "Experiencia Laboral")
        .field("Empresa", fields::EXPERIENCE_COMPANY)?
        .field("Puesto", fields::EXPERIENCE_POSITION)?
        .value("Período", Some(period))
        .value(
            "Salario Final",
            Some(format_currency(record.get(fields::EXPERIENCE_FINAL_SALARY))),
        )
        .field("Jefe Inmediato", fields::EXPERIENCE_SUPERVISOR)?
        .field("Motivo de Retiro", fields::EXPERIENCE_LEAVE_REASON)?
        .field("Desempeño", fields::EXPERIENCE_PERFORMANCE)?
        .finish())
}

fn references_section(record: &WorkerRecord) -> Result<Option<ResumeSection>> {
    if !is_present(record, fields::REFERENCE_NAME) {
        return Ok(None);
    }
    Ok(SectionBuilder::new(record, "Referencias")
        .field("Nombre", fields::REFERENCE_NAME)?
        .field("Puesto", fields::REFERENCE_POSITION)?
        .field("Empresa", fields::REFERENCE_COMPANY)?
        .field("Teléfono", fields::REFERENCE_PHONE)?
        .field("Email", fields::REFERENCE_EMAIL)?
        .finish())
}

fn skills_section(record: &WorkerRecord) -> Result<Option<ResumeSection>> {
    if !is_present(record, fields::SKILLS) {
        return Ok(None);
    }
    Ok(SectionBuilder::new(record, "Habilidades")
        .field("Habilidades", fields::SKILLS)?
        .finish())
}

fn is_present(record: &WorkerRecord, key: &str) -> bool {
    record.get(key).map(FieldValue::is_truthy).unwrap_or(false)
}

type SectionFn = fn(&WorkerRecord) -> Result<Option<ResumeSection>>;

/// セクションの出力順
const SECTIONS: &[(&str, SectionFn)] = &[
    ("Datos Personales", personal_section),
    ("Educación", education_section),
    ("Experiencia Laboral", experience_section),
    ("Referencias", references_section),
    ("Habilidades", skills_section),
];

/// 履歴書ドキュメントを組み立てる
pub fn build_resume(record: &WorkerRecord, generated_at: NaiveDateTime) -> ResumeDocument {
    let mut sections = Vec::new();
    let mut skipped = Vec::new();

    for (title, build) in SECTIONS {
        match build(record) {
            Ok(Some(section)) => sections.push(section),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(section = %title, error = %e, "section skipped");
                skipped.push(SkippedSection {
                    title: title.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    ResumeDocument {
        title: DOCUMENT_TITLE.to_string(),
        generated_at: format!("Generado el: {}", format_timestamp(generated_at)),
        sections,
        skipped,
        file_name: export_file_name(record),
    }
}

/// 出力ファイル名: `CV_<氏名の英数字以外を _ に置換>.pdf`
pub fn export_file_name(record: &WorkerRecord) -> String {
    let name = record
        .get(fields::FULL_NAME)
        .filter(|v| v.is_truthy())
        .map(|v| v.to_string())
        .unwrap_or_else(|| DEFAULT_FILE_STEM.to_string());
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("CV_{}.pdf", sanitized)
}
