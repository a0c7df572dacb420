/// Label sheet constants

/// Labels per row of a page
pub const COLUMNS_PER_PAGE: usize = 2;

/// Label rows per page
pub const ROWS_PER_PAGE: usize = 8;

/// Cells on one page, filled row-major
pub const LABELS_PER_PAGE: usize = COLUMNS_PER_PAGE * ROWS_PER_PAGE;

/// A4 in PDF points
pub const PAGE_WIDTH_PT: f32 = 595.2756;
pub const PAGE_HEIGHT_PT: f32 = 841.8898;

/// Gap between a cell edge and its printed border
pub const BORDER_INSET_PT: f32 = 5.0;
pub const BORDER_LINE_WIDTH_PT: f32 = 0.3;
pub const BORDER_GRAY: f32 = 0.2;

/// Left padding of text inside a cell
pub const TEXT_INSET_PT: f32 = 10.0;

/// Vertical room reserved around the text block
pub const TEXT_VERTICAL_PADDING_PT: f32 = 12.0;
pub const MAX_LINE_SPACING_PT: f32 = 12.0;
pub const FONT_SIZE_PT: f32 = 9.5;

/// Hard cap on printed lines per label
pub const MAX_LABEL_LINES: usize = 6;

/// Address lines longer than this are split at a comma
pub const DEFAULT_MAX_ADDRESS_LINE_LENGTH: usize = 30;

/// Rows shown when previewing an uploaded table
pub const TABLE_PREVIEW_ROWS: usize = 10;

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "sisenco_labels.pdf";
pub const DEFAULT_PAPER_ID_PREFIX: &str = "P - ";
pub const DOCUMENT_TITLE: &str = "Sisenco Labels";
