use pretty_assertions::assert_eq;
use signature_stamp::{
    Block, BorderSides, BreakKind, FlowDocument, Margins, PageSetup, Paragraph, Section,
    SignatureRecord, StampComposer, StampLayout, Table,
};

fn record(signing_time: &str, timestamp: &str) -> SignatureRecord {
    SignatureRecord::from_parts(
        "ООО \"Ромашка\"",
        "Семенович Семен Горбунков",
        "123",
        "01.01.2024 00:00:00 - 01.01.2025 00:00:00 GMT +3",
        signing_time,
        timestamp,
    )
}

fn one_section_document() -> FlowDocument {
    let mut document = FlowDocument::new();
    let mut section = Section::from_page_setup(PageSetup::new(612.0, 792.0, Margins::uniform_mm(0.0)));
    section.push_block(Block::Paragraph(Paragraph::from_text("Sheet1")));
    document.push_section(section);
    document
}

/// Table with the label/value rows, looking through the frame if there is one.
fn rows_table(table: &Table) -> &Table {
    table.rows[0].cells[0]
        .blocks
        .first()
        .and_then(Block::as_table)
        .unwrap_or(table)
}

fn stamp_tables(document: &FlowDocument) -> Vec<&Table> {
    document.sections()[1].tables().map(rows_table).collect()
}

#[test]
fn stamps_without_times_have_three_rows() {
    for layout in [StampLayout::Framed, StampLayout::Flat] {
        let mut document = one_section_document();
        StampComposer::new(layout).append_signature_stamps(&mut document, &[record("", "")]);

        assert_eq!(document.section_count(), 2);
        let tables = stamp_tables(&document);
        assert_eq!(tables.len(), 1);
        let labels: Vec<String> = tables[0].rows.iter().map(|row| row.label_text()).collect();
        assert_eq!(
            labels,
            vec![
                "Signed with electronic signature",
                "Certificate serial number",
                "Certificate validity period",
            ]
        );
    }
}

#[test]
fn signing_time_adds_fourth_row() {
    for layout in [StampLayout::Framed, StampLayout::Flat] {
        let mut document = one_section_document();
        StampComposer::new(layout)
            .append_signature_stamps(&mut document, &[record("05.03.2024 14:00:00 GMT +3", "")]);

        let table = stamp_tables(&document)[0];
        assert_eq!(table.row_count(), 4);
        let borders = &table.rows[3].cells[1].format.borders;
        assert!(borders.has(BorderSides::TOP));
        assert_eq!(borders.has(BorderSides::BOTTOM), layout == StampLayout::Flat);
    }
}

#[test]
fn several_signers_share_one_section() {
    let mut document = one_section_document();
    let records = [record("", ""), record("t", "t"), record("t", "")];
    StampComposer::new(StampLayout::Framed).append_signature_stamps(&mut document, &records);

    assert_eq!(document.section_count(), 2);
    let rows: Vec<usize> = stamp_tables(&document)
        .iter()
        .map(|table| table.row_count())
        .collect();
    assert_eq!(rows, vec![3, 5, 4]);

    let section = &document.sections()[1];
    assert_eq!(section.page_setup, document.sections()[0].page_setup);
    let first_break = section.blocks()[0].as_paragraph().and_then(Paragraph::break_kind);
    assert_eq!(first_break, Some(BreakKind::Page));
}

#[test]
fn nothing_to_do_is_not_an_error() {
    let composer = StampComposer::default();

    let mut document = one_section_document();
    assert!(!composer.append_signature_stamps(&mut document, &[]));
    assert_eq!(document.section_count(), 1);

    let mut empty = FlowDocument::new();
    assert!(!composer.append_signature_stamps(&mut empty, &[record("", "")]));
    assert_eq!(empty, FlowDocument::new());
}
