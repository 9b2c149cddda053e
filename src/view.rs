//! ターミナル表示

use garoo_admin_common::directory::{detail_entries, WorkerRow};
use garoo_admin_common::{GalleryState, WorkerRecord};

const TABLE_HEADERS: [&str; 7] = [
    "#",
    "Nombre Completo",
    "Puesto",
    "Nacionalidad",
    "Disponibilidad",
    "Pretención Salarial",
    "Educación",
];

/// 列幅の上限（文字数）
const MAX_COLUMN_CHARS: usize = 32;

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(max.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// 一覧テーブル
pub fn render_table(rows: &[WorkerRow]) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|r| {
            [
                r.number.to_string(),
                r.full_name.clone(),
                r.position.clone(),
                r.nationality.clone(),
                r.availability.clone(),
                r.salary.clone(),
                r.education.clone(),
            ]
            .map(|c| truncate(&c, MAX_COLUMN_CHARS))
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cols: Vec<String>| -> String {
        cols.iter()
            .zip(widths.iter())
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(cells.len() + 2);
    out.push(line(TABLE_HEADERS.iter().map(|h| h.to_string()).collect()));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in cells {
        out.push(line(row.to_vec()));
    }
    out.join("\n")
}

/// 詳細表示（レコードのキー順）
pub fn render_detail(record: &WorkerRecord) -> String {
    let entries = detail_entries(record);
    let width = entries
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0);
    entries
        .iter()
        .map(|(k, v)| format!("{}: {}", pad(k, width), v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// ギャラリーのカード一覧と選択中の画像
pub fn render_gallery(state: &GalleryState) -> String {
    let mut out: Vec<String> = state
        .images()
        .iter()
        .enumerate()
        .map(|(i, img)| format!("  {}) {}", i + 1, img.title))
        .collect();

    if let (true, Some(image)) = (state.is_modal_open(), state.selected()) {
        out.push(String::new());
        out.push(format!("[{}]", image.title));
        out.push(image.url.clone());
    }
    out.join("\n")
}
