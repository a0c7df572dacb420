//! PDF output for label sheets

use super::grid::{LabelPlacement, PositionedLine, Rect};
use super::{win_ansi, LabelSink};
use crate::constants::{
    BORDER_GRAY, BORDER_LINE_WIDTH_PT, DOCUMENT_TITLE, PAGE_HEIGHT_PT, PAGE_WIDTH_PT,
};
use crate::error::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

/// Resource names of the two standard fonts
const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Rendered PDF held in memory
#[derive(Debug, Clone)]
pub struct PdfOutput {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Builds the document object graph page by page and writes it on `finish`
pub struct PdfLabelSink {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    operations: Vec<Operation>,
}

impl PdfLabelSink {
    pub fn new() -> Self {
        Self::with_title(DOCUMENT_TITLE)
    }

    pub fn with_title(title: &str) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let regular_id = document.add_object(standard_font("Helvetica"));
        let bold_id = document.add_object(standard_font("Helvetica-Bold"));
        let resources_id = document.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
        });

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = document.add_object(dictionary! {
            "Title" => Object::string_literal(title),
        });
        document.trailer.set("Root", catalog_id);
        document.trailer.set("Info", info_id);

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            operations: Vec::new(),
        }
    }

    fn close_page(&mut self) -> Result<()> {
        let content = Content {
            operations: std::mem::take(&mut self.operations),
        };
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), content.encode()?));

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH_PT.into(), PAGE_HEIGHT_PT.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn draw_border(&mut self, border: &Rect) {
        self.operations.extend([
            Operation::new("w", vec![BORDER_LINE_WIDTH_PT.into()]),
            Operation::new("G", vec![BORDER_GRAY.into()]),
            Operation::new(
                "re",
                vec![
                    border.x.into(),
                    border.y.into(),
                    border.width.into(),
                    border.height.into(),
                ],
            ),
            Operation::new("S", vec![]),
        ]);
    }

    fn draw_lines(&mut self, lines: &[PositionedLine]) {
        for line in lines {
            if !win_ansi::is_encodable(&line.text) {
                log::warn!(
                    "Label text {:?} has characters the standard fonts cannot print; they appear as '?'",
                    line.text
                );
            }

            let font = if line.bold { BOLD_FONT } else { REGULAR_FONT };
            self.operations.extend([
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![font.into(), line.font_size.into()]),
                Operation::new("g", vec![0.into()]),
                Operation::new("Td", vec![line.x.into(), line.baseline.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        win_ansi::encode(&line.text),
                        StringFormat::Hexadecimal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ]);
        }
    }
}

impl Default for PdfLabelSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelSink for PdfLabelSink {
    type Output = PdfOutput;

    fn start_page(&mut self) -> Result<()> {
        self.close_page()
    }

    fn draw_label(&mut self, placement: &LabelPlacement) -> Result<()> {
        self.draw_border(&placement.border);
        self.draw_lines(&placement.lines);
        Ok(())
    }

    fn finish(mut self) -> Result<PdfOutput> {
        self.close_page()?;
        let page_count = self.page_ids.len();

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count as i64,
            }),
        );
        self.document.compress();

        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes).map_err(lopdf::Error::from)?;

        log::info!("Assembled PDF: {} pages, {} bytes", page_count, bytes.len());
        Ok(PdfOutput { bytes, page_count })
    }
}

fn standard_font(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}
