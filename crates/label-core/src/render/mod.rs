//! Label sheet rendering
//!
//! Layout is computed in `grid` without touching any output format; a
//! [`LabelSink`] receives the placed labels and page breaks.

pub mod grid;
pub mod pdf;
pub mod win_ansi;

pub use grid::{GridPosition, LabelPlacement, PositionedLine, Rect};
pub use pdf::{PdfLabelSink, PdfOutput};

use crate::error::{LabelError, Result};
use crate::services::LabelComposer;
use crate::types::{LabelDocument, Record};

/// Output target for a label run
///
/// A sink starts with its first page open. `start_page` closes the current
/// page and opens the next one.
pub trait LabelSink {
    type Output;

    fn start_page(&mut self) -> Result<()>;

    fn draw_label(&mut self, placement: &LabelPlacement) -> Result<()>;

    fn finish(self) -> Result<Self::Output>;
}

/// Lay out `records` in grid order and draw them into `sink`
pub fn render_labels<S: LabelSink>(
    records: &[Record],
    composer: &LabelComposer,
    mut sink: S,
) -> Result<S::Output> {
    log::info!(
        "Rendering {} labels ({}) on {} pages",
        records.len(),
        composer.product_type(),
        grid::page_count(records.len())
    );

    for (index, record) in records.iter().enumerate() {
        if GridPosition::starts_new_page(index) {
            sink.start_page()?;
        }

        let label = composer.compose(record);
        let placement = grid::place_label(index, &label);
        log::debug!(
            "Label {} -> page {}, row {}, column {} ({} lines)",
            index + 1,
            placement.position.page + 1,
            placement.position.row,
            placement.position.column,
            label.line_count()
        );
        sink.draw_label(&placement)?;
    }

    sink.finish()
}

/// Render `records` into a named, in-memory PDF document
pub fn render_document(
    records: &[Record],
    composer: &LabelComposer,
    file_name: &str,
) -> Result<LabelDocument> {
    if records.is_empty() {
        return Err(LabelError::Validation("No records to render".to_string()));
    }

    let output = render_labels(records, composer, PdfLabelSink::new())?;
    Ok(LabelDocument {
        file_name: file_name.to_string(),
        bytes: output.bytes,
        page_count: output.page_count,
        label_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use label_types::{ColumnSchema, ProductType};

    /// Records every call so tests can check pagination
    #[derive(Default)]
    struct RecordingSink {
        page: usize,
        page_breaks: Vec<usize>,
        drawn: Vec<(usize, LabelPlacement)>,
    }

    impl LabelSink for RecordingSink {
        type Output = Self;

        fn start_page(&mut self) -> Result<()> {
            self.page += 1;
            self.page_breaks.push(self.drawn.len());
            Ok(())
        }

        fn draw_label(&mut self, placement: &LabelPlacement) -> Result<()> {
            self.drawn.push((self.page, placement.clone()));
            Ok(())
        }

        fn finish(self) -> Result<Self> {
            Ok(self)
        }
    }

    fn records(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| {
                let id = i.to_string();
                let name = format!("Student {}", i);
                [id.as_str(), "", name.as_str(), "Kandy"].into_iter().collect()
            })
            .collect()
    }

    #[test]
    fn test_seventeen_records_use_two_pages() {
        let composer = LabelComposer::new(ProductType::Theory, ColumnSchema::THEORY);
        let sink = render_labels(&records(17), &composer, RecordingSink::default()).unwrap();

        assert_eq!(sink.page + 1, 2);
        assert_eq!(sink.page_breaks, vec![16]);

        let (page, last) = &sink.drawn[16];
        assert_eq!(*page, 1);
        assert_eq!(last.position, GridPosition { page: 1, row: 0, column: 0 });
        assert_eq!(last.lines[0].text, "Student 17");
    }

    #[test]
    fn test_breaks_only_at_nonzero_multiples_of_sixteen() {
        let composer = LabelComposer::new(ProductType::Theory, ColumnSchema::THEORY);
        let sink = render_labels(&records(48), &composer, RecordingSink::default()).unwrap();
        assert_eq!(sink.page_breaks, vec![16, 32]);

        let sink = render_labels(&records(16), &composer, RecordingSink::default()).unwrap();
        assert!(sink.page_breaks.is_empty());
    }

    #[test]
    fn test_render_document_counts_pages() {
        let composer = LabelComposer::new(ProductType::Paper, ColumnSchema::PAPER);
        let document = render_document(&records(33), &composer, "sheet.pdf").unwrap();

        assert!(document.is_pdf());
        assert_eq!(document.file_name, "sheet.pdf");
        assert_eq!(document.page_count, 3);
        assert_eq!(document.label_count, 33);
    }

    #[test]
    fn test_render_document_needs_records() {
        let composer = LabelComposer::new(ProductType::Paper, ColumnSchema::PAPER);
        let err = render_document(&[], &composer, "sheet.pdf").unwrap_err();
        assert!(matches!(err, LabelError::Validation(_)));
    }

    #[test]
    fn test_no_records_draw_nothing() {
        let composer = LabelComposer::new(ProductType::Paper, ColumnSchema::PAPER);
        let sink = render_labels(&[], &composer, RecordingSink::default()).unwrap();
        assert!(sink.drawn.is_empty());
        assert!(sink.page_breaks.is_empty());
    }
}
