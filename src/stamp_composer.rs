use crate::document::{Block, BreakKind, FlowDocument, Paragraph, Section};
use crate::signature_record::SignatureRecord;
use crate::table::{Color, Table};
use serde::{Deserialize, Serialize};

/// Visual variant of the stamp table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StampLayout {
    /// Outer bordered box holding a narrower two column table.
    #[default]
    Framed,
    /// A single full width two column table without a frame.
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StampStyle {
    /// Used for text and borders.
    pub color: Color,
    pub font_name: String,
    /// Size of the text in the cells, in points.
    pub font_size: f32,
    /// Width of the border lines, in pixels.
    pub border_width: f32,
}

impl Default for StampStyle {
    fn default() -> Self {
        StampStyle {
            color: Color::BLUE,
            font_name: "Arial".to_owned(),
            font_size: 12.0,
            border_width: 1.0,
        }
    }
}

/// Adds signature stamps to a document in a section of their own.
#[derive(Debug, Clone, Default)]
pub struct StampComposer {
    pub(crate) layout: StampLayout,
    pub(crate) style: StampStyle,
}

impl StampComposer {
    pub fn new(layout: StampLayout) -> Self {
        StampComposer {
            layout,
            style: StampStyle::default(),
        }
    }

    pub fn with_style(mut self, style: StampStyle) -> Self {
        self.style = style;
        self
    }

    pub fn layout(&self) -> StampLayout {
        self.layout
    }

    pub fn style(&self) -> &StampStyle {
        &self.style
    }

    /// Append one section to `document` holding a stamp for every record.
    ///
    /// The new section copies the page setup of the last section in the
    /// document. The first stamp starts on a new page, every next one is
    /// separated by an empty line.
    ///
    /// Returns `false` and leaves the document untouched when there are no
    /// records or the document has no sections.
    pub fn append_signature_stamps(
        &self,
        document: &mut FlowDocument,
        records: &[SignatureRecord],
    ) -> bool {
        if records.is_empty() {
            log::debug!("No signatures to stamp.");
            return false;
        }
        let page_setup = match document.last_section() {
            Some(anchor) => anchor.page_setup.clone(),
            None => {
                log::warn!("Document does not contain any sections, stamps are not added.");
                return false;
            }
        };

        let mut section = Section::from_page_setup(page_setup);
        // The stamps must never end up on a cover page or in a column.
        section.text_columns = 1;
        section.title_page = false;

        for (index, record) in records.iter().enumerate() {
            let break_kind = if index == 0 {
                BreakKind::Page
            } else {
                BreakKind::Line
            };
            section.push_block(Block::Paragraph(Paragraph::with_break(break_kind)));
            section.push_block(Block::Table(self.build_table(record)));
            log::debug!(
                "Added {:?} stamp for `{}`.",
                self.layout,
                record.employee_full_name()
            );
        }

        document.push_section(section);
        log::info!(
            "Inserted {} signature stamp(s) in section {}.",
            records.len(),
            document.section_count()
        );
        true
    }

    /// Build the stamp table for a single record.
    pub fn build_table(&self, record: &SignatureRecord) -> Table {
        match self.layout {
            StampLayout::Framed => self.build_framed_table(record),
            StampLayout::Flat => self.build_flat_table(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Margins, PageSetup};

    fn record() -> SignatureRecord {
        SignatureRecord::from_parts("Org", "Name", "1", "period", "", "")
    }

    fn document() -> FlowDocument {
        let mut document = FlowDocument::new();
        let mut anchor = Section::from_page_setup(PageSetup::new(842.0, 595.0, Margins::uniform_mm(10.0)));
        anchor.text_columns = 2;
        anchor.title_page = true;
        anchor.push_block(Block::Paragraph(Paragraph::from_text("content")));
        document.push_section(anchor);
        document
    }

    #[test]
    fn empty_records_leave_document_alone() {
        let mut document = document();
        let before = document.clone();
        assert!(!StampComposer::default().append_signature_stamps(&mut document, &[]));
        assert_eq!(document, before);
    }

    #[test]
    fn document_without_sections_is_left_alone() {
        let mut document = FlowDocument::new();
        assert!(!StampComposer::default().append_signature_stamps(&mut document, &[record()]));
        assert_eq!(document.section_count(), 0);
    }

    #[test]
    fn new_section_copies_page_setup() {
        let mut document = document();
        let anchor_setup = document.sections()[0].page_setup.clone();
        assert!(StampComposer::new(StampLayout::Flat).append_signature_stamps(&mut document, &[record()]));

        assert_eq!(document.section_count(), 2);
        let section = &document.sections()[1];
        assert_eq!(section.page_setup, anchor_setup);
        assert_eq!(section.text_columns, 1);
        assert!(!section.title_page);
        // Anchor section is not touched.
        assert_eq!(document.sections()[0].blocks().len(), 1);
        assert_eq!(document.sections()[0].text_columns, 2);
    }

    #[test]
    fn first_stamp_starts_on_new_page() {
        let mut document = document();
        StampComposer::default().append_signature_stamps(&mut document, &[record(), record(), record()]);

        let blocks = document.sections()[1].blocks();
        assert_eq!(blocks.len(), 6);
        let breaks: Vec<_> = blocks
            .iter()
            .filter_map(Block::as_paragraph)
            .map(|paragraph| paragraph.break_kind())
            .collect();
        assert_eq!(
            breaks,
            vec![Some(BreakKind::Page), Some(BreakKind::Line), Some(BreakKind::Line)]
        );
        assert_eq!(document.sections()[1].tables().count(), 3);
    }

    #[test]
    fn stamps_go_after_last_section() {
        let mut document = document();
        let mut second = Section::from_page_setup(PageSetup::default());
        second.push_block(Block::Paragraph(Paragraph::from_text("more")));
        document.push_section(second);

        StampComposer::default().append_signature_stamps(&mut document, &[record()]);
        assert_eq!(document.section_count(), 3);
        assert_eq!(document.sections()[2].page_setup, PageSetup::default());
    }
}
