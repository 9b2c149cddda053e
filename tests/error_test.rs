//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use garoo_admin::error::AdminError;
use garoo_admin::store;
use tempfile::tempdir;

/// データファイルがない場合
#[test]
fn test_load_missing_data_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = store::load_workers(&dir.path().join("workers.json"));

    let err = result.unwrap_err();
    assert!(matches!(err, AdminError::NoWorkers(_)));
    assert!(format!("{}", err).contains("garoo-admin fetch"));
}

/// 壊れたデータファイル
#[test]
fn test_load_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("workers.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let result = store::load_workers(&path);
    assert!(matches!(result, Err(AdminError::JsonParse(_))));
}

/// 配列でも既知のキーでもないデータ
#[test]
fn test_load_unexpected_payload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("workers.json");
    std::fs::write(&path, "42").unwrap();

    let result = store::load_workers(&path);
    assert!(matches!(result, Err(AdminError::InvalidPayload(_))));
}

/// AdminErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AdminError::Config("prueba".to_string()),
        AdminError::Webhook("timeout".to_string()),
        AdminError::WebhookStatus { status: 500, body: "boom".to_string() },
        AdminError::InvalidPayload("42".to_string()),
        AdminError::PdfGeneration("fuente".to_string()),
        AdminError::Spreadsheet("hoja".to_string()),
        AdminError::WorkerNotFound("7".to_string()),
        AdminError::NoWorkers("vacío".to_string()),
        AdminError::Prompt("tty".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// Webhook URL未設定エラーのメッセージ確認
#[test]
fn test_missing_webhook_url_message() {
    let display = format!("{}", AdminError::MissingWebhookUrl);

    assert!(display.contains("garoo-admin config --set-webhook-url"));
    assert!(display.contains("GAROO_WEBHOOK_URL"));
}

#[test]
fn test_webhook_status_message() {
    let err = AdminError::WebhookStatus { status: 404, body: "not found".to_string() };
    assert_eq!(format!("{}", err), "El webhook respondió 404: not found");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AdminError = io_err.into();

    assert!(matches!(err, AdminError::Io(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let err: AdminError = garoo_admin_common::Error::Payload("texto".to_string()).into();
    assert!(matches!(err, AdminError::InvalidPayload(_)));

    let err: AdminError = garoo_admin_common::Error::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "no existe",
    ))
    .into();
    assert!(matches!(err, AdminError::Io(_)));

    let err: AdminError = garoo_admin_common::Error::Layout("fila".to_string()).into();
    assert!(matches!(err, AdminError::PdfGeneration(_)));
}
