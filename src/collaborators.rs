//! The document engines the stamping pipeline relies on.
//!
//! Converting a spreadsheet to PDF is left to an external engine behind
//! [`SpreadsheetConverter`]. Loading PDF and writing the result have built-in
//! implementations: [`PdfLoader`] and [`JsonWriter`].

use crate::config::LicenseConfig;
use crate::document::{Block, FlowDocument, Margins, PageSetup, Paragraph, Section};
use crate::page_style::PageStyle;
use crate::pdf_object::PdfObjectDeref;
use crate::Error;
use lopdf::{Document, ObjectId};
use std::io::Write;

/// Page trees deeper than this are treated as broken.
const MAX_PAGE_TREE_DEPTH: usize = 32;

pub trait SpreadsheetConverter {
    /// Called once before the first conversion.
    fn apply_license(&mut self, _license: &LicenseConfig) {}

    /// Convert spreadsheet bytes to PDF bytes.
    fn convert(&self, spreadsheet: &[u8], style: &PageStyle) -> Result<Vec<u8>, Error>;
}

pub trait DocumentLoader {
    /// Called once before the first document is loaded.
    fn apply_license(&mut self, _license: &LicenseConfig) {}

    fn load(&self, pdf: &[u8]) -> Result<FlowDocument, Error>;
}

pub trait DocumentWriter {
    /// Called once before the first document is written.
    fn apply_license(&mut self, _license: &LicenseConfig) {}

    /// File extension of the written format, without the dot.
    fn extension(&self) -> &'static str;

    fn write(&self, document: &FlowDocument, writer: &mut dyn Write) -> Result<(), Error>;
}

/// Loads a PDF as a flow document: one section per page.
#[derive(Debug, Clone, Default)]
pub struct PdfLoader {
    margins: Margins,
    /// Used for pages without a `MediaBox`.
    fallback_size: Option<(f32, f32)>,
}

impl PdfLoader {
    pub fn new(margins: Margins) -> Self {
        PdfLoader {
            margins,
            fallback_size: None,
        }
    }

    /// Use the margins and page size the PDF was rendered with.
    pub fn from_page_style(style: &PageStyle) -> Self {
        let orientation = style.fixed_orientation().unwrap_or_default();
        PdfLoader {
            margins: style.margins(),
            fallback_size: style.page_size.dimensions(orientation),
        }
    }

    fn page_size(&self, raw_doc: &Document, page_id: ObjectId) -> Result<(f32, f32), Error> {
        match Self::media_box_size(raw_doc, page_id)? {
            Some(size) => Ok(size),
            None => self.fallback_size.ok_or_else(|| {
                Error::Other(format!(
                    "Page ({},{}) does not have a MediaBox.",
                    page_id.0, page_id.1
                ))
            }),
        }
    }

    /// Page size from the `MediaBox`, which may be inherited from a parent
    /// in the page tree.
    fn media_box_size(raw_doc: &Document, page_id: ObjectId) -> Result<Option<(f32, f32)>, Error> {
        let mut node_id = Some(page_id);
        for _ in 0..MAX_PAGE_TREE_DEPTH {
            let Some(id) = node_id else {
                break;
            };
            let node = raw_doc.get_object(id)?.as_dict()?;
            if let Ok(media_box) = node.get(b"MediaBox") {
                let media_box = media_box.deref(raw_doc)?.as_array()?;
                if media_box.len() >= 4 {
                    let x1 = media_box[0].as_number()?;
                    let y1 = media_box[1].as_number()?;
                    let x2 = media_box[2].as_number()?;
                    let y2 = media_box[3].as_number()?;
                    return Ok(Some(((x2 - x1).abs(), (y2 - y1).abs())));
                }
            }
            node_id = node.get(b"Parent").and_then(|parent| parent.as_reference()).ok();
        }
        Ok(None)
    }
}

impl DocumentLoader for PdfLoader {
    fn load(&self, pdf: &[u8]) -> Result<FlowDocument, Error> {
        let raw_document = Document::load_mem(pdf)?;
        let pages = raw_document.get_pages();
        if pages.is_empty() {
            log::warn!("PDF does not contain any pages.");
        }

        let mut document = FlowDocument::new();
        for (page_number, page_id) in pages {
            let (width, height) = self.page_size(&raw_document, page_id)?;
            let mut section = Section::from_page_setup(PageSetup::new(width, height, self.margins));
            // Text is a nice to have, pages we can not read stay empty.
            let text = match raw_document.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("Could not extract text of page {}. Err: {}", page_number, err);
                    String::new()
                }
            };
            for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
                section.push_block(Block::Paragraph(Paragraph::from_text(line)));
            }
            log::debug!(
                "Loaded page {} ({}x{}) with {} paragraph(s).",
                page_number,
                width,
                height,
                section.blocks().len()
            );
            document.push_section(section);
        }
        Ok(document)
    }
}

/// Writes the flow document as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    pub pretty: bool,
}

impl DocumentWriter for JsonWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, document: &FlowDocument, writer: &mut dyn Write) -> Result<(), Error> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, document)?;
        } else {
            serde_json::to_writer(&mut *writer, document)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Small PDF with one page per entry in `texts`. The `MediaBox` lives on
    /// the page tree root so pages have to inherit it.
    pub(crate) fn sample_pdf(width: i64, height: i64, texts: &[&str]) -> Vec<u8> {
        build_pdf(Some((width, height)), texts)
    }

    fn build_pdf(media_box: Option<(i64, i64)>, texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let mut kids = Vec::new();
        for text in texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 400.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }
        let count = kids.len() as i64;
        let mut pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
        };
        if let Some((width, height)) = media_box {
            let media_box: Vec<Object> = vec![0.into(), 0.into(), width.into(), height.into()];
            pages.set("MediaBox", media_box);
        }
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn one_section_per_page() {
        let pdf = sample_pdf(842, 595, &["Hello", "World"]);
        let document = PdfLoader::new(Margins::uniform_mm(10.0)).load(&pdf).unwrap();

        assert_eq!(document.section_count(), 2);
        let setup = &document.sections()[0].page_setup;
        assert_eq!(setup.page_width, 842.0);
        assert_eq!(setup.page_height, 595.0);
        assert_eq!(setup.orientation, crate::Orientation::Landscape);
        assert_eq!(setup.margins, Margins::uniform_mm(10.0));
    }

    #[test]
    fn page_text_becomes_paragraphs() {
        let pdf = sample_pdf(595, 842, &["Hello"]);
        let document = PdfLoader::default().load(&pdf).unwrap();
        let text: String = document.sections()[0]
            .blocks()
            .iter()
            .filter_map(Block::as_paragraph)
            .map(Paragraph::text)
            .collect();
        assert!(text.contains("Hello"), "got `{}`", text);
    }

    #[test]
    fn missing_media_box_uses_page_style() {
        let pdf = build_pdf(None, &["Hello"]);
        let style = PageStyle {
            page_size: crate::PageSize::A4,
            orientation: crate::PageOrientation::Landscape,
            ..PageStyle::default()
        };
        let document = PdfLoader::from_page_style(&style).load(&pdf).unwrap();
        let setup = &document.sections()[0].page_setup;
        assert_eq!((setup.page_width, setup.page_height), (842.0, 595.0));
        assert_eq!(setup.orientation, crate::Orientation::Landscape);
    }

    #[test]
    fn missing_media_box_without_fixed_size_fails() {
        let pdf = build_pdf(None, &["Hello"]);
        let result = PdfLoader::from_page_style(&PageStyle::default()).load(&pdf);
        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[test]
    fn garbage_is_not_a_pdf() {
        let result = PdfLoader::default().load(b"certainly not a pdf");
        assert!(matches!(result, Err(Error::LoPdfError(_))));
    }

    #[test]
    fn json_writer_writes_document() {
        let mut document = FlowDocument::new();
        document.push_section(Section::from_page_setup(PageSetup::default()));
        let mut out = Vec::new();
        JsonWriter { pretty: false }.write(&document, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["sections"][0]["text_columns"], 1);
    }
}
