//! The flow document the stamps are composed into.
//!
//! Structure of a document:
//! - Sections (page-flow regions, each with its own page setup)
//!   - Blocks (paragraphs and tables)
//!     - Inlines (text runs and breaks)
//!
//! Sections and blocks are only ever appended.

use crate::table::{Color, Table};
use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Orientation implied by a page size.
    pub fn from_size(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub fn uniform_mm(mm: f32) -> Self {
        let points = mm * POINTS_PER_MM;
        Margins {
            left: points,
            top: points,
            right: points,
            bottom: points,
        }
    }
}

/// Page geometry of a section. Cloned as a whole when a new section has to
/// look like an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Width in points.
    pub page_width: f32,
    /// Height in points.
    pub page_height: f32,
    pub orientation: Orientation,
    pub margins: Margins,
}

impl PageSetup {
    pub fn new(page_width: f32, page_height: f32, margins: Margins) -> Self {
        PageSetup {
            page_width,
            page_height,
            orientation: Orientation::from_size(page_width, page_height),
            margins,
        }
    }
}

impl Default for PageSetup {
    // A4 portrait
    fn default() -> Self {
        PageSetup::new(595.0, 842.0, Margins::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterFormat {
    pub font_name: String,
    /// Size in points.
    pub size: f32,
    pub color: Color,
}

impl Default for CharacterFormat {
    fn default() -> Self {
        CharacterFormat {
            font_name: "Arial".to_owned(),
            size: 11.0,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    pub alignment: HorizontalAlignment,
    pub keep_lines_together: bool,
    pub keep_with_next: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub format: CharacterFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    Line,
    /// Forces the following content onto a new page.
    Page,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Run(Run),
    Break(BreakKind),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub inlines: Vec<Inline>,
    pub format: ParagraphFormat,
}

impl Paragraph {
    pub fn new(format: ParagraphFormat) -> Self {
        Paragraph {
            inlines: Vec::new(),
            format,
        }
    }

    /// Paragraph with a single run in the default character format.
    pub fn from_text(text: &str) -> Self {
        Paragraph::default().with_run(text, CharacterFormat::default())
    }

    /// Paragraph holding nothing but a break.
    pub fn with_break(kind: BreakKind) -> Self {
        Paragraph {
            inlines: vec![Inline::Break(kind)],
            format: ParagraphFormat::default(),
        }
    }

    pub fn with_run(mut self, text: &str, format: CharacterFormat) -> Self {
        self.inlines.push(Inline::Run(Run {
            text: text.to_owned(),
            format,
        }));
        self
    }

    /// Concatenated text of all runs; breaks are skipped.
    pub fn text(&self) -> String {
        self.inlines
            .iter()
            .filter_map(|inline| match inline {
                Inline::Run(run) => Some(run.text.as_str()),
                Inline::Break(_) => None,
            })
            .collect()
    }

    /// The first break in this paragraph, if any.
    pub fn break_kind(&self) -> Option<BreakKind> {
        self.inlines.iter().find_map(|inline| match inline {
            Inline::Break(kind) => Some(*kind),
            Inline::Run(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl Block {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(paragraph) => Some(paragraph),
            Block::Table(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub page_setup: PageSetup,
    /// Number of text columns on the page.
    pub text_columns: u32,
    /// First page of the section is treated as a cover page.
    pub title_page: bool,
    blocks: Vec<Block>,
}

impl Section {
    /// Single column, non title page section.
    pub fn from_page_setup(page_setup: PageSetup) -> Self {
        Section {
            page_setup,
            text_columns: 1,
            title_page: false,
            blocks: Vec::new(),
        }
    }

    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(Block::as_table)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    sections: Vec<Section>,
}

impl FlowDocument {
    pub fn new() -> Self {
        FlowDocument::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn last_section(&self) -> Option<&Section> {
        self.sections.last()
    }

    /// Sections can only be added at the end of the document.
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_follows_page_size() {
        assert_eq!(Orientation::from_size(842.0, 595.0), Orientation::Landscape);
        assert_eq!(Orientation::from_size(595.0, 842.0), Orientation::Portrait);
        assert_eq!(Orientation::from_size(600.0, 600.0), Orientation::Portrait);
    }

    #[test]
    fn uniform_margins_convert_mm_to_points() {
        let margins = Margins::uniform_mm(25.4);
        assert!((margins.left - 72.0).abs() < 0.001);
        assert_eq!(margins.left, margins.bottom);
        assert_eq!(Margins::uniform_mm(0.0), Margins::default());
    }

    #[test]
    fn paragraph_text_ignores_breaks() {
        let mut paragraph = Paragraph::with_break(BreakKind::Line);
        paragraph = paragraph.with_run("abc", CharacterFormat::default());
        assert_eq!(paragraph.text(), "abc");
        assert_eq!(paragraph.break_kind(), Some(BreakKind::Line));
        assert_eq!(Paragraph::from_text("x").break_kind(), None);
    }

    #[test]
    fn new_section_is_single_column() {
        let section = Section::from_page_setup(PageSetup::default());
        assert_eq!(section.text_columns, 1);
        assert!(!section.title_page);
        assert!(section.blocks().is_empty());
    }

    #[test]
    fn document_round_trips_through_json() {
        let mut document = FlowDocument::new();
        let mut section = Section::from_page_setup(PageSetup::default());
        section.push_block(Block::Paragraph(Paragraph::from_text("hello")));
        document.push_section(section);

        let json = serde_json::to_string(&document).unwrap();
        let loaded: FlowDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, document);
    }
}
