use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("No hay URL de webhook configurada. Use `garoo-admin config --set-webhook-url URL` o la variable GAROO_WEBHOOK_URL")]
    MissingWebhookUrl,

    #[error("Error al llamar al webhook: {0}")]
    Webhook(String),

    #[error("El webhook respondió {status}: {body}")]
    WebhookStatus { status: u16, body: String },

    #[error("Respuesta con formato inesperado: {0}")]
    InvalidPayload(String),

    #[error("Error al analizar JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error al generar el PDF: {0}")]
    PdfGeneration(String),

    #[error("Error al leer la hoja de cálculo: {0}")]
    Spreadsheet(String),

    #[error("Trabajador no encontrado: {0}")]
    WorkerNotFound(String),

    #[error("No hay trabajadores cargados: {0}")]
    NoWorkers(String),

    #[error("Error de entrada interactiva: {0}")]
    Prompt(String),
}

impl From<reqwest::Error> for AdminError {
    fn from(e: reqwest::Error) -> Self {
        AdminError::Webhook(e.to_string())
    }
}

impl From<calamine::Error> for AdminError {
    fn from(e: calamine::Error) -> Self {
        AdminError::Spreadsheet(e.to_string())
    }
}

impl From<dialoguer::Error> for AdminError {
    fn from(e: dialoguer::Error) -> Self {
        AdminError::Prompt(e.to_string())
    }
}

impl From<garoo_admin_common::Error> for AdminError {
    fn from(e: garoo_admin_common::Error) -> Self {
        match e {
            garoo_admin_common::Error::Io(e) => AdminError::Io(e),
            garoo_admin_common::Error::Json(e) => AdminError::JsonParse(e),
            garoo_admin_common::Error::Payload(msg) => AdminError::InvalidPayload(msg),
            other => AdminError::PdfGeneration(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
