//! Tables of the flow document.
//!
//! A table is a list of rows, each row a list of cells and each cell again a
//! list of blocks. That makes nested tables possible: a cell can hold a
//! [`Block::Table`](crate::Block::Table).

use crate::document::{Block, HorizontalAlignment};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

bitflags! {
    /// Selects the edges of a cell or table a border applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BorderSides: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const OUTSIDE = Self::TOP.bits() | Self::BOTTOM.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderStyle {
    Single,
    Dashed,
    Dotted,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub style: BorderStyle,
    pub color: Color,
    /// Line width in pixels.
    pub width: f32,
}

impl Border {
    pub fn single(color: Color, width: f32) -> Self {
        Border {
            style: BorderStyle::Single,
            color,
            width,
        }
    }
}

/// One optional border per edge. `None` means the edge is not drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub top: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
    pub right: Option<Border>,
}

impl Borders {
    pub fn none() -> Self {
        Borders::default()
    }

    /// Set `border` on every edge in `sides`. Other edges are left alone.
    pub fn set(&mut self, sides: BorderSides, border: Border) {
        for (side, slot) in self.slots_mut() {
            if sides.contains(side) {
                *slot = Some(border);
            }
        }
    }

    /// Builder flavour of [`Borders::set`].
    pub fn with(mut self, sides: BorderSides, border: Border) -> Self {
        self.set(sides, border);
        self
    }

    /// The edges that currently carry a border.
    pub fn sides(&self) -> BorderSides {
        let mut sides = BorderSides::empty();
        for (side, slot) in [
            (BorderSides::TOP, &self.top),
            (BorderSides::BOTTOM, &self.bottom),
            (BorderSides::LEFT, &self.left),
            (BorderSides::RIGHT, &self.right),
        ] {
            if slot.is_some() {
                sides |= side;
            }
        }
        sides
    }

    /// True when every edge in `sides` carries a border.
    pub fn has(&self, sides: BorderSides) -> bool {
        self.sides().contains(sides)
    }

    fn slots_mut(&mut self) -> [(BorderSides, &mut Option<Border>); 4] {
        [
            (BorderSides::TOP, &mut self.top),
            (BorderSides::BOTTOM, &mut self.bottom),
            (BorderSides::LEFT, &mut self.left),
            (BorderSides::RIGHT, &mut self.right),
        ]
    }
}

/// Inner spacing of a cell, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Padding {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn vertical(amount: f32) -> Self {
        Padding::new(0.0, amount, 0.0, amount)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum TableWidth {
    #[default]
    Auto,
    /// Percentage of the available width.
    Percent(f32),
    Point(f32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableFormat {
    pub preferred_width: TableWidth,
    pub borders: Borders,
    pub alignment: HorizontalAlignment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellFormat {
    pub preferred_width: TableWidth,
    pub borders: Borders,
    pub padding: Padding,
    pub vertical_alignment: VerticalAlignment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub format: CellFormat,
    pub blocks: Vec<Block>,
}

impl TableCell {
    pub fn new(format: CellFormat) -> Self {
        TableCell {
            format,
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Plain text of all paragraphs directly inside this cell.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(paragraph) => Some(paragraph.text()),
                Block::Table(_) => None,
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        TableRow { cells }
    }

    /// Text of the first cell. For two column tables this is the row label.
    pub fn label_text(&self) -> String {
        self.cells.first().map(TableCell::text).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub format: TableFormat,
    /// Preferred width per column.
    pub columns: Vec<TableWidth>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(format: TableFormat, columns: Vec<TableWidth>) -> Self {
        Table {
            format,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
