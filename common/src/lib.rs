//! Garoo Admin Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod fields;
pub mod resolve;
pub mod format;
pub mod search;
pub mod gallery;
pub mod directory;
pub mod resume;
pub mod layout;
pub mod error;
pub mod export;

pub use types::{parse_payload, FieldValue, WorkerRecord};
pub use layout::ResumeLayout;
pub use error::{Error, Result};
pub use gallery::{GalleryState, ImageRecord};
pub use directory::{FetchError, WorkerDirectory, WorkerRow};
pub use resume::{build_resume, ResumeDocument, EXPORT_ERROR_MESSAGE};
pub use export::pdf_core::{plan_resume, DocumentPlan, DrawOp};
