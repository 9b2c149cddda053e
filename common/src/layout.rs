//! レイアウト設定モジュール
//!
//! mm基準・上端原点（y は上から下へ増える）で定義する。
//! PDF座標（下端原点、pt）への変換は描画側で行う。

// ============================================
// mm基準レイアウト（Source of Truth）
// ============================================

/// A4サイズ（mm）
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// 左右余白（mm）
pub const MARGIN_X_MM: f32 = 14.0;
/// 改ページ後の開始位置・上余白（mm）
pub const MARGIN_TOP_MM: f32 = 20.0;
/// 表の下余白（mm）
pub const MARGIN_BOTTOM_MM: f32 = 14.0;

/// セクション開始時にこれを超えていたら改ページ（mm）
pub const PAGE_BREAK_THRESHOLD_MM: f32 = 250.0;

/// 表の列幅（mm）: ラベル列は固定、値列は残り
pub const LABEL_COLUMN_MM: f32 = 70.0;
pub const TABLE_WIDTH_MM: f32 = A4_WIDTH_MM - MARGIN_X_MM * 2.0; // 182mm
pub const VALUE_COLUMN_MM: f32 = TABLE_WIDTH_MM - LABEL_COLUMN_MM; // 112mm

// ============================================
// 変換係数
// ============================================

/// mm → pt変換 (1mm = 72/25.4 pt ≈ 2.835pt)
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// 行送り（フォントサイズ比）
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Helvetica の平均文字幅（em比）。組み込みフォントは字幅情報がないので概算
pub const AVG_CHAR_WIDTH_EM: f32 = 0.5;
pub const AVG_CHAR_WIDTH_EM_BOLD: f32 = 0.55;

/// RGB色
pub type Rgb = [u8; 3];

pub const COLOR_TITLE: Rgb = [33, 37, 41];
pub const COLOR_MUTED: Rgb = [100, 100, 100];
pub const COLOR_BODY: Rgb = [33, 37, 41];
pub const COLOR_HEAD_FILL: Rgb = [52, 58, 64];
pub const COLOR_HEAD_TEXT: Rgb = [255, 255, 255];
pub const COLOR_GRID: Rgb = [200, 200, 200];
pub const COLOR_LINK: Rgb = [0, 0, 255];

// ============================================
// レイアウト設定構造体
// ============================================

/// 履歴書PDFのレイアウト設定
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_x_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,
    pub page_break_threshold_mm: f32,

    /// タイトル（pt）と次要素までの送り（mm）
    pub title_size_pt: f32,
    pub title_advance_mm: f32,
    /// 「Generado el」行
    pub meta_size_pt: f32,
    pub meta_advance_mm: f32,
    /// セクション見出し
    pub section_title_size_pt: f32,
    pub section_title_advance_mm: f32,
    /// 表の後の余白
    pub section_gap_mm: f32,

    pub head_size_pt: f32,
    pub body_size_pt: f32,
    pub cell_padding_mm: f32,
    pub min_cell_height_mm: f32,
    pub label_column_mm: f32,
    pub value_column_mm: f32,
}

impl Default for ResumeLayout {
    fn default() -> Self {
        Self::a4()
    }
}

impl ResumeLayout {
    /// A4縦
    pub fn a4() -> Self {
        Self {
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            margin_x_mm: MARGIN_X_MM,
            margin_top_mm: MARGIN_TOP_MM,
            margin_bottom_mm: MARGIN_BOTTOM_MM,
            page_break_threshold_mm: PAGE_BREAK_THRESHOLD_MM,
            title_size_pt: 20.0,
            title_advance_mm: 15.0,
            meta_size_pt: 10.0,
            meta_advance_mm: 15.0,
            section_title_size_pt: 12.0,
            section_title_advance_mm: 8.0,
            section_gap_mm: 10.0,
            head_size_pt: 10.0,
            body_size_pt: 9.0,
            cell_padding_mm: 3.0,
            min_cell_height_mm: 10.0,
            label_column_mm: LABEL_COLUMN_MM,
            value_column_mm: VALUE_COLUMN_MM,
        }
    }

    /// 表の下端（mm、上から）
    pub fn content_bottom_mm(&self) -> f32 {
        self.page_height_mm - self.margin_bottom_mm
    }

    /// 1ページに収まる最大の行高さ（mm）
    pub fn max_row_height_mm(&self) -> f32 {
        self.content_bottom_mm() - self.margin_top_mm - self.head_row_height_mm()
    }

    /// 表ヘッダー行の高さ（mm）
    pub fn head_row_height_mm(&self) -> f32 {
        (line_height_mm(self.head_size_pt) + self.cell_padding_mm * 2.0).max(self.min_cell_height_mm)
    }

    pub fn value_column_x_mm(&self) -> f32 {
        self.margin_x_mm + self.label_column_mm
    }

    /// セル内テキストの折り返し幅（mm）
    pub fn label_text_width_mm(&self) -> f32 {
        self.label_column_mm - self.cell_padding_mm * 2.0
    }

    pub fn value_text_width_mm(&self) -> f32 {
        self.value_column_mm - self.cell_padding_mm * 2.0
    }
}

// ============================================
// ヘルパー関数
// ============================================

/// mm → pt 変換
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// pt → mm 変換
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / MM_TO_PT
}

/// フォントサイズ（pt）から行送り（mm）
#[inline]
pub fn line_height_mm(size_pt: f32) -> f32 {
    pt_to_mm(size_pt * LINE_HEIGHT_FACTOR)
}

/// テキスト幅の概算（mm）
pub fn text_width_mm(text: &str, size_pt: f32, bold: bool) -> f32 {
    let em = if bold { AVG_CHAR_WIDTH_EM_BOLD } else { AVG_CHAR_WIDTH_EM };
    pt_to_mm(text.chars().count() as f32 * size_pt * em)
}

/// 指定幅に収まるよう折り返す（長い単語は文字単位で分割）
pub fn wrap_text(text: &str, max_width_mm: f32, size_pt: f32, bold: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if text_width_mm(&candidate, size_pt, bold) <= max_width_mm {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            // 単語単体でも収まらない場合は文字単位で詰める
            for ch in word.chars() {
                current.push(ch);
                if text_width_mm(&current, size_pt, bold) > max_width_mm && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                }
            }
        }
        lines.push(current);
    }

    // 末尾の空行は不要（ただし全体が空なら1行残す）
    while lines.len() > 1 && lines.last().map(|l| l.is_empty()).unwrap_or(false) {
        lines.pop();
    }
    lines
}
