//! Grid geometry for label sheets
//!
//! Coordinates are PDF points with the origin at the bottom-left corner of
//! the page. Cells are filled row-major: left to right, then top to bottom.

use crate::constants::{
    BORDER_INSET_PT, COLUMNS_PER_PAGE, FONT_SIZE_PT, LABELS_PER_PAGE, MAX_LINE_SPACING_PT,
    PAGE_HEIGHT_PT, PAGE_WIDTH_PT, ROWS_PER_PAGE, TEXT_INSET_PT, TEXT_VERTICAL_PADDING_PT,
};
use crate::types::LabelText;

/// Where a label lands in the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub page: usize,
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    /// Grid slot of the label at flat index `index`
    pub fn for_index(index: usize) -> Self {
        let cell = index % LABELS_PER_PAGE;
        Self {
            page: index / LABELS_PER_PAGE,
            row: cell / COLUMNS_PER_PAGE,
            column: cell % COLUMNS_PER_PAGE,
        }
    }

    /// Whether the label at `index` opens a new page
    pub fn starts_new_page(index: usize) -> bool {
        index > 0 && index % LABELS_PER_PAGE == 0
    }

    /// Cell number within the page
    pub fn cell(&self) -> usize {
        self.row * COLUMNS_PER_PAGE + self.column
    }

    pub fn bounds(&self) -> Rect {
        let width = PAGE_WIDTH_PT / COLUMNS_PER_PAGE as f32;
        let height = PAGE_HEIGHT_PT / ROWS_PER_PAGE as f32;
        Rect {
            x: self.column as f32 * width,
            y: PAGE_HEIGHT_PT - (self.row + 1) as f32 * height,
            width,
            height,
        }
    }
}

/// Axis-aligned rectangle, `(x, y)` being its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn inset(&self, by: f32) -> Rect {
        Rect {
            x: self.x + by,
            y: self.y + by,
            width: self.width - 2.0 * by,
            height: self.height - 2.0 * by,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// One line of label text with its baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
    pub font_size: f32,
    pub bold: bool,
}

/// A fully laid out label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub index: usize,
    pub position: GridPosition,
    pub cell: Rect,
    pub border: Rect,
    pub lines: Vec<PositionedLine>,
}

/// Pages needed for `label_count` labels
pub fn page_count(label_count: usize) -> usize {
    label_count.div_ceil(LABELS_PER_PAGE)
}

/// Distance between baselines for a block of `line_count` lines
pub fn line_spacing(cell_height: f32, line_count: usize) -> f32 {
    if line_count == 0 {
        return 0.0;
    }
    let available = cell_height - TEXT_VERTICAL_PADDING_PT;
    (available / line_count as f32).min(MAX_LINE_SPACING_PT)
}

/// Place label text in its cell, centred vertically; the first line is bold
pub fn place_label(index: usize, label: &LabelText) -> LabelPlacement {
    let position = GridPosition::for_index(index);
    let cell = position.bounds();

    let spacing = line_spacing(cell.height, label.line_count());
    let block_height = spacing * label.line_count() as f32;
    let first_baseline = cell.y + (cell.height + block_height) / 2.0 - 1.0;

    let lines = label
        .lines
        .iter()
        .enumerate()
        .map(|(i, text)| PositionedLine {
            text: text.clone(),
            x: cell.x + TEXT_INSET_PT,
            baseline: first_baseline - i as f32 * spacing,
            font_size: FONT_SIZE_PT,
            bold: i == 0,
        })
        .collect();

    LabelPlacement {
        index,
        position,
        cell,
        border: cell.inset(BORDER_INSET_PT),
        lines,
    }
}
