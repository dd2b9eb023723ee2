//! Add signature stamps to documents converted from spreadsheets.
//!
//! A stamp is a blue table telling who signed the document, with which
//! certificate and when. Stamps are added to a [`FlowDocument`] by a
//! [`StampComposer`], in a new section after the existing content.
//!
//! ```
//! use signature_stamp::{
//!     FlowDocument, PageSetup, Section, SignatureRecord, StampComposer, StampLayout,
//! };
//!
//! let mut document = FlowDocument::new();
//! document.push_section(Section::from_page_setup(PageSetup::default()));
//!
//! let record = SignatureRecord::from_parts(
//!     "Org",
//!     "Семенович Семен Горбунков",
//!     "123",
//!     "01.01.2024 00:00:00 - 01.01.2025 00:00:00 GMT +3",
//!     "",
//!     "",
//! );
//! let composer = StampComposer::new(StampLayout::Flat);
//! assert!(composer.append_signature_stamps(&mut document, &[record]));
//! assert_eq!(document.section_count(), 2);
//! ```

mod collaborators;
mod config;
mod document;
mod error;
mod page_style;
mod pdf_object;
mod pipeline;
mod signature_record;
mod stamp_composer;
mod stamp_row;
mod stamp_table;
mod table;

pub use collaborators::{
    DocumentLoader, DocumentWriter, JsonWriter, PdfLoader, SpreadsheetConverter,
};
pub use config::{LicenseConfig, PipelineConfig};
pub use document::{
    Block, BreakKind, CharacterFormat, FlowDocument, HorizontalAlignment, Inline, Margins,
    Orientation, PageSetup, Paragraph, ParagraphFormat, Run, Section, POINTS_PER_MM,
};
pub use error::Error;
pub use lopdf;
pub use page_style::{PageOrientation, PageSize, PageStyle, ScaleMode};
pub use pipeline::StampPipeline;
pub use signature_record::{CertificateInfo, SignatureRecord, STAMP_DATE_FORMAT, STAMP_TIME_ZONE};
pub use stamp_composer::{StampComposer, StampLayout, StampStyle};
pub use stamp_row::{flat_edges, framed_edges, stamp_rows, StampRow, StampRowKind};
pub use table::{
    Border, BorderSides, BorderStyle, Borders, CellFormat, Color, Padding, Table, TableCell,
    TableFormat, TableRow, TableWidth, VerticalAlignment,
};
