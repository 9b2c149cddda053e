//! 対話式ブラウズ
//!
//! 検索 → 選択 → 詳細 / PDF出力 を繰り返す。

use crate::error::Result;
use crate::export::export_worker;
use crate::view::{render_detail, render_table};
use dialoguer::{Input, Select};
use garoo_admin_common::{WorkerDirectory, WorkerRecord, EXPORT_ERROR_MESSAGE};
use std::path::Path;

/// 選択後の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Details,
    ExportPdf,
    Back,
}

impl BrowseAction {
    pub const ALL: [BrowseAction; 3] = [BrowseAction::Details, BrowseAction::ExportPdf, BrowseAction::Back];

    pub fn label(&self) -> &'static str {
        match self {
            BrowseAction::Details => "Ver detalles",
            BrowseAction::ExportPdf => "Exportar PDF",
            BrowseAction::Back => "Volver",
        }
    }
}

/// 入力された検索語を解釈。`q` で終了
pub fn parse_search_input(input: &str) -> Option<String> {
    match input.trim() {
        "q" | "Q" => None,
        term => Some(term.to_string()),
    }
}

pub fn run_browse(dir: &mut WorkerDirectory, output_dir: &Path) -> Result<()> {
    println!("Búsqueda: [Enter] todos  [q] salir\n");

    loop {
        let input: String = Input::new()
            .with_prompt("Buscar")
            .with_initial_text(dir.search_term().to_string())
            .allow_empty(true)
            .interact_text()?;

        let term = match parse_search_input(&input) {
            Some(term) => term,
            None => break,
        };
        dir.set_search_term(term);

        let rows = dir.rows();
        println!("{}\n", dir.result_count_label());
        if rows.is_empty() {
            continue;
        }
        println!("{}\n", render_table(&rows));

        let mut items: Vec<String> = rows
            .iter()
            .map(|r| format!("{}. {}", r.number, r.full_name))
            .collect();
        items.push("← Nueva búsqueda".to_string());

        let choice = Select::new()
            .with_prompt("Trabajador")
            .items(&items)
            .default(0)
            .interact()?;
        if !dir.view_details(choice) {
            continue;
        }

        worker_menu(dir, output_dir)?;
        dir.close_details();
    }

    Ok(())
}

fn worker_menu(dir: &WorkerDirectory, output_dir: &Path) -> Result<()> {
    let record = match dir.selected() {
        Some(r) => r.clone(),
        None => return Ok(()),
    };
    let labels: Vec<&str> = BrowseAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        let index = Select::new()
            .with_prompt(record.text("Nombre Completo").unwrap_or("Trabajador"))
            .items(&labels)
            .default(0)
            .interact()?;

        match BrowseAction::ALL[index] {
            BrowseAction::Details => println!("\n{}\n", render_detail(&record)),
            BrowseAction::ExportPdf => export_one(&record, output_dir),
            BrowseAction::Back => return Ok(()),
        }
    }
}

/// 失敗しても対話は続ける
fn export_one(record: &WorkerRecord, output_dir: &Path) {
    let now = chrono::Local::now().naive_local();
    match export_worker(record, output_dir, now) {
        Ok(report) => {
            println!("✔ PDF: {}", report.path.display());
            for s in &report.skipped {
                println!("  ⚠ Sección omitida: {} ({})", s.title, s.reason);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            eprintln!("{}", EXPORT_ERROR_MESSAGE);
        }
    }
}
