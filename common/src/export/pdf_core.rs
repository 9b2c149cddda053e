//! PDF export core utilities shared by CLI/WASM.
//!
//! 履歴書ドキュメントをページごとの描画命令（DrawOp）に展開する。
//! 座標は mm・上端原点。CLI（printpdf）とWASM（jsPDFブリッジ）は
//! この命令列をそのまま描画するだけにする。

use crate::error::{Error, Result};
use crate::layout::{
    line_height_mm, text_width_mm, wrap_text, ResumeLayout, Rgb, COLOR_BODY, COLOR_GRID,
    COLOR_HEAD_FILL, COLOR_HEAD_TEXT, COLOR_LINK, COLOR_MUTED, COLOR_TITLE,
};
use crate::resume::{ResumeDocument, ResumeRow, ResumeSection, SkippedSection};
use serde::Serialize;

/// 描画命令（mm、上端原点。テキストの y はベースライン）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        bold: bool,
        text: String,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Option<Rgb>,
        stroke: Option<Rgb>,
    },
    /// 下線付きのクリック可能なテキスト
    Link {
        x: f32,
        y: f32,
        size: f32,
        width: f32,
        color: Rgb,
        text: String,
        url: String,
    },
}

/// 1ページ分の描画命令
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PagePlan {
    pub ops: Vec<DrawOp>,
}

/// ドキュメント全体の描画計画
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPlan {
    pub title: String,
    pub file_name: String,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub pages: Vec<PagePlan>,
    /// 組み立て・配置に失敗して出力されなかったセクション
    pub skipped: Vec<SkippedSection>,
}

/// 1セクション分の配置結果（確定前）
struct SectionPlacement {
    /// 先頭は現在のページ、以降は新しいページ
    pages: Vec<Vec<DrawOp>>,
    end_y: f32,
}

/// 後から描画するリンク
struct PendingLink {
    page: usize,
    op: DrawOp,
}

/// ページ計画を組み立てる
pub struct PagePlanner<'a> {
    layout: &'a ResumeLayout,
    pages: Vec<PagePlan>,
    y: f32,
}

impl<'a> PagePlanner<'a> {
    pub fn new(layout: &'a ResumeLayout) -> Self {
        Self {
            layout,
            pages: vec![PagePlan::default()],
            y: layout.margin_top_mm,
        }
    }

    /// 現在のカーソル位置（mm）
    pub fn cursor(&self) -> f32 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// タイトルと生成日時
    pub fn header(&mut self, title: &str, generated_at: &str) {
        let l = self.layout;
        let y = self.y;
        self.current_page().ops.push(DrawOp::Text {
            x: l.margin_x_mm,
            y,
            size: l.title_size_pt,
            color: COLOR_TITLE,
            bold: false,
            text: title.to_string(),
        });
        let meta_y = y + l.title_advance_mm;
        self.current_page().ops.push(DrawOp::Text {
            x: l.margin_x_mm,
            y: meta_y,
            size: l.meta_size_pt,
            color: COLOR_MUTED,
            bold: false,
            text: generated_at.to_string(),
        });
        self.y = meta_y + l.meta_advance_mm;
    }

    /// セクションを配置。失敗した場合は何も確定しない
    pub fn section(&mut self, section: &ResumeSection) -> Result<()> {
        let placement = self.place_section(section)?;
        let mut new_pages = placement.pages.into_iter();
        if let Some(first) = new_pages.next() {
            self.current_page().ops.extend(first);
        }
        for ops in new_pages {
            self.pages.push(PagePlan { ops });
        }
        self.y = placement.end_y;
        Ok(())
    }

    pub fn finish(self) -> Vec<PagePlan> {
        self.pages
    }

    fn current_page(&mut self) -> &mut PagePlan {
        if self.pages.is_empty() {
            self.pages.push(PagePlan::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn place_section(&self, section: &ResumeSection) -> Result<SectionPlacement> {
        let l = self.layout;
        let mut pages: Vec<Vec<DrawOp>> = vec![Vec::new()];
        let mut y = self.y;

        if y > l.page_break_threshold_mm {
            pages.push(Vec::new());
            y = l.margin_top_mm;
        }

        push_op(&mut pages, DrawOp::Text {
            x: l.margin_x_mm,
            y,
            size: l.section_title_size_pt,
            color: COLOR_MUTED,
            bold: false,
            text: section.title.clone(),
        });
        y += l.section_title_advance_mm;

        if y + l.head_row_height_mm() > l.content_bottom_mm() {
            pages.push(Vec::new());
            y = l.margin_top_mm;
        }
        y = self.table_head(&mut pages, y);

        let mut links: Vec<PendingLink> = Vec::new();
        for row in &section.rows {
            let label_lines = wrap_text(&row.label, l.label_text_width_mm(), l.body_size_pt, true);
            let value_lines = wrap_text(&row.value, l.value_text_width_mm(), l.body_size_pt, false);
            let line_count = label_lines.len().max(value_lines.len());
            let height = (line_count as f32 * line_height_mm(l.body_size_pt) + l.cell_padding_mm * 2.0)
                .max(l.min_cell_height_mm);

            if height > l.max_row_height_mm() {
                return Err(Error::Layout(format!(
                    "'{}' no cabe en una página ({:.0}mm)",
                    row.label, height
                )));
            }

            // 収まらない行は次ページへ（ヘッダーを再描画）
            if y + height > l.content_bottom_mm() {
                pages.push(Vec::new());
                y = self.table_head(&mut pages, l.margin_top_mm);
            }

            self.body_row(&mut pages, &mut links, row, &label_lines, &value_lines, y, height);
            y += height;
        }

        // リンクは表本体の描画後に重ねる
        for link in links {
            pages[link.page].push(link.op);
        }

        Ok(SectionPlacement {
            pages,
            end_y: y + l.section_gap_mm,
        })
    }

    /// 「Campo | Valor」ヘッダー行。戻り値は次の行のy
    fn table_head(&self, pages: &mut Vec<Vec<DrawOp>>, y: f32) -> f32 {
        let l = self.layout;
        let h = l.head_row_height_mm();
        let baseline = y + l.cell_padding_mm + line_height_mm(l.head_size_pt) * 0.8;

        push_op(pages, DrawOp::Rect {
            x: l.margin_x_mm,
            y,
            w: l.label_column_mm + l.value_column_mm,
            h,
            fill: Some(COLOR_HEAD_FILL),
            stroke: Some(COLOR_GRID),
        });
        for (x, text) in [
            (l.margin_x_mm, "Campo"),
            (l.value_column_x_mm(), "Valor"),
        ] {
            push_op(pages, DrawOp::Text {
                x: x + l.cell_padding_mm,
                y: baseline,
                size: l.head_size_pt,
                color: COLOR_HEAD_TEXT,
                bold: true,
                text: text.to_string(),
            });
        }
        y + h
    }

    #[allow(clippy::too_many_arguments)]
    fn body_row(
        &self,
        pages: &mut Vec<Vec<DrawOp>>,
        links: &mut Vec<PendingLink>,
        row: &ResumeRow,
        label_lines: &[String],
        value_lines: &[String],
        y: f32,
        height: f32,
    ) {
        let l = self.layout;
        let line_h = line_height_mm(l.body_size_pt);
        let first_baseline = y + l.cell_padding_mm + line_h * 0.8;
        let value_x = l.value_column_x_mm() + l.cell_padding_mm;

        for (x, w) in [
            (l.margin_x_mm, l.label_column_mm),
            (l.value_column_x_mm(), l.value_column_mm),
        ] {
            push_op(pages, DrawOp::Rect {
                x,
                y,
                w,
                h: height,
                fill: None,
                stroke: Some(COLOR_GRID),
            });
        }

        for (i, line) in label_lines.iter().enumerate() {
            push_op(pages, text_op(l.margin_x_mm + l.cell_padding_mm, first_baseline + i as f32 * line_h, l.body_size_pt, COLOR_BODY, true, line));
        }

        match row.url() {
            Some(url) => {
                let page = pages.len() - 1;
                for (i, line) in value_lines.iter().enumerate() {
                    links.push(PendingLink {
                        page,
                        op: DrawOp::Link {
                            x: value_x,
                            y: first_baseline + i as f32 * line_h,
                            size: l.body_size_pt,
                            width: text_width_mm(line, l.body_size_pt, false),
                            color: COLOR_LINK,
                            text: line.clone(),
                            url: url.to_string(),
                        },
                    });
                }
            }
            None => {
                for (i, line) in value_lines.iter().enumerate() {
                    push_op(pages, text_op(value_x, first_baseline + i as f32 * line_h, l.body_size_pt, COLOR_BODY, false, line));
                }
            }
        }
    }
}

fn push_op(pages: &mut Vec<Vec<DrawOp>>, op: DrawOp) {
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    let last = pages.len() - 1;
    pages[last].push(op);
}

fn text_op(x: f32, y: f32, size: f32, color: Rgb, bold: bool, text: &str) -> DrawOp {
    DrawOp::Text {
        x,
        y,
        size,
        color,
        bold,
        text: text.to_string(),
    }
}

/// 履歴書ドキュメントの描画計画を作る
///
/// 配置に失敗したセクションはログを出してスキップし、`skipped` に記録する。
pub fn plan_resume(doc: &ResumeDocument, layout: &ResumeLayout) -> DocumentPlan {
    let mut planner = PagePlanner::new(layout);
    planner.header(&doc.title, &doc.generated_at);

    let mut skipped = doc.skipped.clone();
    for section in &doc.sections {
        if let Err(e) = planner.section(section) {
            tracing::warn!(section = %section.title, error = %e, "section layout failed; skipped");
            skipped.push(SkippedSection {
                title: section.title.clone(),
                reason: e.to_string(),
            });
        }
    }

    DocumentPlan {
        title: doc.title.clone(),
        file_name: doc.file_name.clone(),
        page_width_mm: layout.page_width_mm,
        page_height_mm: layout.page_height_mm,
        pages: planner.finish(),
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::RowKind;

    fn section(title: &str, rows: usize) -> ResumeSection {
        ResumeSection {
            title: title.to_string(),
            rows: (0..rows)
                .map(|i| ResumeRow {
                    label: format!("Campo {}", i),
                    value: format!("Valor {}", i),
                    kind: RowKind::Plain,
                })
                .collect(),
        }
    }

    fn doc(sections: Vec<ResumeSection>) -> ResumeDocument {
        ResumeDocument {
            title: "Información del Trabajador".to_string(),
            generated_at: "Generado el: 1/1/2026, 00:00:00".to_string(),
            sections,
            skipped: vec![],
            file_name: "CV_trabajador.pdf".to_string(),
        }
    }

    fn texts(page: &PagePlan) -> Vec<&str> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_header_and_single_section() {
        let layout = ResumeLayout::a4();
        let plan = plan_resume(&doc(vec![section("Datos Personales", 3)]), &layout);

        assert_eq!(plan.pages.len(), 1);
        let texts = texts(&plan.pages[0]);
        assert_eq!(texts[0], "Información del Trabajador");
        assert!(texts.contains(&"Datos Personales"));
        assert!(texts.contains(&"Campo"));
        assert!(texts.contains(&"Valor 2"));
    }

    #[test]
    fn test_header_positions_and_cursor() {
        let layout = ResumeLayout::a4();
        let mut planner = PagePlanner::new(&layout);
        planner.header("Título", "Generado");
        assert_eq!(planner.cursor(), 50.0);

        let pages = planner.finish();
        let ys: Vec<(f32, &str)> = pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, text, .. } => Some((*y, text.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![(20.0, "Título"), (35.0, "Generado")]);
    }

    #[test]
    fn test_cursor_past_threshold_starts_new_page() {
        let layout = ResumeLayout::a4();
        let mut planner = PagePlanner::new(&layout);
        planner.header("t", "g");
        // 1行10mmなので 20行で閾値を超える
        planner.section(&section("Uno", 20)).unwrap();
        assert!(planner.cursor() > layout.page_break_threshold_mm);
        assert_eq!(planner.page_count(), 1);

        planner.section(&section("Dos", 1)).unwrap();
        let pages = planner.finish();
        assert_eq!(pages.len(), 2);
        // 2ページ目の先頭がセクション見出し
        match &pages[1].ops[0] {
            DrawOp::Text { text, y, .. } => {
                assert_eq!(text, "Dos");
                assert!((*y - layout.margin_top_mm).abs() < 0.01);
            }
            other => panic!("unexpected op: {:?}", other),
        }
    }

    #[test]
    fn test_rows_overflow_repeat_head() {
        let layout = ResumeLayout::a4();
        let plan = plan_resume(&doc(vec![section("Largo", 40)]), &layout);

        assert!(plan.pages.len() >= 2);
        assert!(texts(&plan.pages[1]).contains(&"Campo"));
        // 全行がいずれかのページに描画されている
        let all: Vec<&str> = plan.pages.iter().flat_map(texts).collect();
        assert!(all.contains(&"Valor 0"));
        assert!(all.contains(&"Valor 39"));
    }

    #[test]
    fn test_links_drawn_after_body() {
        let layout = ResumeLayout::a4();
        let mut s = section("Datos Personales", 1);
        s.rows.push(ResumeRow {
            label: "CV".to_string(),
            value: "https://drive.example/cv.pdf".to_string(),
            kind: RowKind::Link,
        });
        s.rows.push(ResumeRow {
            label: "Portafolio".to_string(),
            value: "No disponible".to_string(),
            kind: RowKind::Link,
        });
        let plan = plan_resume(&doc(vec![s]), &layout);
        let ops = &plan.pages[0].ops;

        let link_pos = ops
            .iter()
            .position(|op| matches!(op, DrawOp::Link { .. }))
            .expect("link op");
        // リンクはすべての表要素の後
        assert!(ops[link_pos..].iter().all(|op| matches!(op, DrawOp::Link { .. })));
        assert_eq!(ops.iter().filter(|op| matches!(op, DrawOp::Link { .. })).count(), 1);
        assert!(texts(&plan.pages[0]).contains(&"No disponible"));
        assert!(!texts(&plan.pages[0]).contains(&"https://drive.example/cv.pdf"));
    }

    #[test]
    fn test_oversized_row_skips_section_only() {
        let layout = ResumeLayout::a4();
        let huge = ResumeSection {
            title: "Habilidades".to_string(),
            rows: vec![ResumeRow {
                label: "Habilidades".to_string(),
                value: "palabra ".repeat(4000),
                kind: RowKind::Plain,
            }],
        };
        let plan = plan_resume(&doc(vec![section("Datos Personales", 2), huge]), &layout);

        assert_eq!(plan.skipped.len(), 1);
        assert_eq!(plan.skipped[0].title, "Habilidades");
        let all: Vec<&str> = plan.pages.iter().flat_map(texts).collect();
        assert!(all.contains(&"Datos Personales"));
        assert!(!all.contains(&"Habilidades"));
        assert_eq!(plan.pages.len(), 1);
    }

    #[test]
    fn test_plan_serializes_for_bridge() {
        let layout = ResumeLayout::a4();
        let plan = plan_resume(&doc(vec![section("Educación", 1)]), &layout);
        let json = serde_json::to_string(&plan).expect("シリアライズ失敗");
        assert!(json.contains("\"op\":\"text\""));
        assert!(json.contains("\"op\":\"rect\""));
        assert!(json.contains("\"pageWidthMm\""));
        assert!(json.contains("\"fileName\":\"CV_trabajador.pdf\""));
    }
}
