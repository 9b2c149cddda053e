//! フィールドキー定義
//!
//! Webhookレコードのキー名（スペイン語の表示名）を一箇所に集約する。
//! 同じ論理フィールドが複数のキーで届くものは候補リストとして定義し、
//! 先頭から順に解決する。

pub const ID: &str = "id";

// 個人情報
pub const FULL_NAME: &str = "Nombre Completo";
pub const REQUESTED_POSITION: &str = "Puesto Solicitud";
pub const NATIONALITY: &str = "Nacionalidad";
pub const MARITAL_STATUS: &str = "Estado Civil";
pub const BIRTH_DATE: &str = "Fecha Nacimiento";
pub const PHONE: &str = "Telefono";
pub const EMAIL: &str = "Email";
pub const ADDRESS: &str = "Direccion";
pub const AVAILABILITY: &str = "Disponibilidad Laboral";
pub const SALARY_EXPECTATION: &str = "Pretencion Salarial";
pub const LINKEDIN: &str = "Linkedin";
pub const BEHANCE: &str = "Behance";

// 学歴
pub const EDUCATION_TITLE: &str = "Educacion Titulo";
pub const EDUCATION_INSTITUTION: &str = "Educacion Institucion";
pub const EDUCATION_LEVEL: &str = "Educacion Nivel Educativo";
pub const EDUCATION_START: &str = "Educacion Periodo Inicio";
pub const EDUCATION_END: &str = "Educacion Periodo Fin";

// 職歴
pub const EXPERIENCE_COMPANY: &str = "Experiencia Nombre Empresa";
pub const EXPERIENCE_POSITION: &str = "Experiencia Puesto";
pub const EXPERIENCE_START_MONTH: &str = "Experiencia Fecha Ingreso Mes";
pub const EXPERIENCE_START_YEAR: &str = "Experiencia Fecha Ingreso Ano";
pub const EXPERIENCE_END_MONTH: &str = "Experiencia Fecha Egreso Mes";
pub const EXPERIENCE_END_YEAR: &str = "Experiencia Fecha Egreso Ano";
pub const EXPERIENCE_FINAL_SALARY: &str = "Experiencia Salario Final";
pub const EXPERIENCE_SUPERVISOR: &str = "Experiencia Jefe Inmediato";
pub const EXPERIENCE_LEAVE_REASON: &str = "Experiencia Motivo Retiro";
pub const EXPERIENCE_PERFORMANCE: &str = "Experiencia Desempeno";

// 推薦者
pub const REFERENCE_NAME: &str = "Referencia Nombre";
pub const REFERENCE_POSITION: &str = "Referencia Puesto";
pub const REFERENCE_COMPANY: &str = "Referencia Empresa";
pub const REFERENCE_PHONE: &str = "Referencia Telefono";
pub const REFERENCE_EMAIL: &str = "Referencia Email";

pub const SKILLS: &str = "Habilidades";

/// 希望職種: 応募職種 → 直近の職歴の職種
pub const POSITION_KEYS: &[&str] = &[REQUESTED_POSITION, EXPERIENCE_POSITION];

/// 履歴書URL（過去のフォームごとにキーが異なる）
pub const CV_KEYS: &[&str] = &["Cv", "CV", "cvUrl"];

/// ポートフォリオURL
pub const PORTFOLIO_KEYS: &[&str] = &["File Of Work", "Portafolio", "portfolioUrl"];

/// 検索対象フィールド
pub const SEARCH_FIELDS: &[&str] = &[
    FULL_NAME,
    REQUESTED_POSITION,
    EXPERIENCE_POSITION,
    NATIONALITY,
    AVAILABILITY,
    EDUCATION_TITLE,
    EDUCATION_INSTITUTION,
];
