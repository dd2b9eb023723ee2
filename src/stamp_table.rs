use crate::document::{Block, CharacterFormat, HorizontalAlignment, Paragraph, ParagraphFormat};
use crate::signature_record::SignatureRecord;
use crate::stamp_row::{flat_edges, framed_edges, stamp_rows, StampRow};
use crate::table::{
    Border, BorderSides, Borders, CellFormat, Padding, Table, TableCell, TableFormat, TableRow,
    TableWidth, VerticalAlignment,
};
use crate::StampComposer;

/// Vertical padding of the framed layout cells, in points.
const FRAMED_CELL_PADDING: f32 = 2.0;
/// Width of the framed inner table relative to the frame.
const FRAMED_INNER_WIDTH: f32 = 90.0;

impl StampComposer {
    pub(crate) fn build_framed_table(&self, record: &SignatureRecord) -> Table {
        let rows = stamp_rows(record);
        let mut inner = Table::new(
            TableFormat {
                preferred_width: TableWidth::Percent(FRAMED_INNER_WIDTH),
                borders: Borders::none(),
                alignment: HorizontalAlignment::Center,
            },
            Self::half_columns(),
        );
        for (index, row) in rows.iter().enumerate() {
            let borders = self.borders_on(framed_edges(&rows, index));
            let format = CellFormat {
                preferred_width: TableWidth::Percent(50.0),
                borders,
                padding: Padding::vertical(FRAMED_CELL_PADDING),
                vertical_alignment: VerticalAlignment::Center,
            };
            inner.push_row(self.text_row(row, format.clone(), format));
        }

        let mut frame = Table::new(
            TableFormat {
                preferred_width: TableWidth::Percent(100.0),
                borders: self.borders_on(BorderSides::OUTSIDE),
                alignment: HorizontalAlignment::Center,
            },
            vec![TableWidth::Percent(100.0)],
        );
        let frame_cell = TableCell::new(CellFormat {
            preferred_width: TableWidth::Percent(100.0),
            vertical_alignment: VerticalAlignment::Center,
            ..CellFormat::default()
        })
        .with_block(Block::Table(inner));
        frame.push_row(TableRow::new(vec![frame_cell]));
        frame
    }

    pub(crate) fn build_flat_table(&self, record: &SignatureRecord) -> Table {
        let rows = stamp_rows(record);
        let mut table = Table::new(
            TableFormat {
                preferred_width: TableWidth::Percent(100.0),
                borders: Borders::none(),
                alignment: HorizontalAlignment::Left,
            },
            Self::half_columns(),
        );
        // Left emphasized padding
        let padding = Padding::new(8.0, 2.0, 2.0, 2.0);
        for (index, row) in rows.iter().enumerate() {
            let edges = flat_edges(&rows, index);
            // Outer vertical edges and the divider between label and value
            // are always drawn.
            let label_format = CellFormat {
                preferred_width: TableWidth::Percent(50.0),
                borders: self.borders_on(edges | BorderSides::LEFT | BorderSides::RIGHT),
                padding,
                vertical_alignment: VerticalAlignment::Center,
            };
            let value_format = CellFormat {
                borders: self.borders_on(edges | BorderSides::RIGHT),
                ..label_format.clone()
            };
            table.push_row(self.text_row(row, label_format, value_format));
        }
        table
    }

    fn half_columns() -> Vec<TableWidth> {
        vec![TableWidth::Percent(50.0), TableWidth::Percent(50.0)]
    }

    fn borders_on(&self, sides: BorderSides) -> Borders {
        Borders::none().with(
            sides,
            Border::single(self.style.color, self.style.border_width),
        )
    }

    fn text_row(
        &self,
        row: &StampRow,
        label_format: CellFormat,
        value_format: CellFormat,
    ) -> TableRow {
        TableRow::new(vec![
            TableCell::new(label_format).with_block(self.text_block(row.label())),
            TableCell::new(value_format).with_block(self.text_block(row.value)),
        ])
    }

    fn text_block(&self, text: &str) -> Block {
        let paragraph_format = ParagraphFormat {
            alignment: HorizontalAlignment::Left,
            keep_lines_together: true,
            keep_with_next: true,
        };
        let character_format = CharacterFormat {
            font_name: self.style.font_name.clone(),
            size: self.style.font_size,
            color: self.style.color,
        };
        Block::Paragraph(Paragraph::new(paragraph_format).with_run(text, character_format))
    }
}
