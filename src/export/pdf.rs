//! printpdf による描画
//!
//! `DocumentPlan`（mm・上端原点）を PDF座標（下端原点）に変換して描く。
//! 組み込みの Helvetica を使うのでフォント埋め込みは不要。

use crate::error::{AdminError, Result};
use garoo_admin_common::export::pdf_core::{DocumentPlan, DrawOp};
use garoo_admin_common::layout::Rgb as PlanRgb;
use printpdf::path::PaintMode;
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// リンク下線の位置（ベースラインからの下げ幅、mm）
const UNDERLINE_OFFSET_MM: f32 = 0.6;
const GRID_THICKNESS_PT: f32 = 0.3;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn color(rgb: PlanRgb) -> Color {
    Color::Rgb(Rgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        None,
    ))
}

/// 描画計画をPDFバイト列にする
pub fn render_pdf(plan: &DocumentPlan) -> Result<Vec<u8>> {
    let width = Mm(plan.page_width_mm);
    let height = Mm(plan.page_height_mm);
    let (doc, page1, layer1) = PdfDocument::new(plan.title.as_str(), width, height, "Layer 1");

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AdminError::PdfGeneration(format!("error al agregar fuente: {:?}", e)))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AdminError::PdfGeneration(format!("error al agregar fuente: {:?}", e)))?,
    };

    for (i, page) in plan.pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (p, l) = doc.add_page(width, height, format!("Página {}", i + 1));
            doc.get_page(p).get_layer(l)
        };

        for op in &page.ops {
            draw_op(&layer, &fonts, op, plan.page_height_mm);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| AdminError::PdfGeneration(format!("error al guardar el PDF: {:?}", e)))
}

/// PDFファイルに書き出す
pub fn write_pdf(plan: &DocumentPlan, output_path: &Path) -> Result<()> {
    let bytes = render_pdf(plan)?;
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    std::io::Write::write_all(&mut writer, &bytes)?;
    std::io::Write::flush(&mut writer)?;
    Ok(())
}

fn draw_op(layer: &PdfLayerReference, fonts: &Fonts, op: &DrawOp, page_h: f32) {
    match op {
        DrawOp::Text { x, y, size, color: c, bold, text } => {
            let font = if *bold { &fonts.bold } else { &fonts.regular };
            layer.set_fill_color(color(*c));
            layer.use_text(text.as_str(), *size, Mm(*x), Mm(page_h - *y), font);
        }
        DrawOp::Rect { x, y, w, h, fill, stroke } => {
            let mode = match (fill, stroke) {
                (Some(_), Some(_)) => PaintMode::FillStroke,
                (Some(_), None) => PaintMode::Fill,
                _ => PaintMode::Stroke,
            };
            if let Some(f) = fill {
                layer.set_fill_color(color(*f));
            }
            if let Some(s) = stroke {
                layer.set_outline_color(color(*s));
                layer.set_outline_thickness(GRID_THICKNESS_PT);
            }
            let rect = Rect::new(Mm(*x), Mm(page_h - (*y + *h)), Mm(*x + *w), Mm(page_h - *y))
                .with_mode(mode);
            layer.add_rect(rect);
        }
        DrawOp::Link { x, y, size, width, color: c, text, url } => {
            layer.set_fill_color(color(*c));
            layer.use_text(text.as_str(), *size, Mm(*x), Mm(page_h - *y), &fonts.regular);

            // 下線
            let underline_y = page_h - *y - UNDERLINE_OFFSET_MM;
            layer.set_outline_color(color(*c));
            layer.set_outline_thickness(GRID_THICKNESS_PT);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x), Mm(underline_y)), false),
                    (Point::new(Mm(*x + *width), Mm(underline_y)), false),
                ],
                is_closed: false,
            });

            // クリック領域は文字の高さ分
            let text_h = garoo_admin_common::layout::pt_to_mm(*size);
            let area = Rect::new(
                Mm(*x),
                Mm(underline_y),
                Mm(*x + *width),
                Mm(page_h - *y + text_h),
            );
            layer.add_link_annotation(LinkAnnotation::new(
                area,
                None,
                None,
                Actions::uri(url.clone()),
                None,
            ));
        }
    }
}
