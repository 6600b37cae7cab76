//! Table substructures

use super::attr::Attr;
use super::blocks::{Block, Caption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    AlignLeft,
    AlignRight,
    AlignCenter,
    #[default]
    AlignDefault,
}

impl Alignment {
    /// CSS `text-align` value, `None` for the default alignment.
    pub fn css(self) -> Option<&'static str> {
        match self {
            Alignment::AlignLeft => Some("left"),
            Alignment::AlignRight => Some("right"),
            Alignment::AlignCenter => Some("center"),
            Alignment::AlignDefault => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColWidth {
    /// Fraction of the table width
    ColWidth(f64),
    #[default]
    ColWidthDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColSpec {
    pub alignment: Alignment,
    pub width: ColWidth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub attr: Attr,
    pub alignment: Alignment,
    pub row_span: u32,
    pub col_span: u32,
    pub blocks: Vec<Block>,
}

impl Cell {
    pub fn new(blocks: Vec<Block>) -> Self {
        Cell {
            attr: Attr::default(),
            alignment: Alignment::AlignDefault,
            row_span: 1,
            col_span: 1,
            blocks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub attr: Attr,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableHead {
    pub attr: Attr,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableBody {
    pub attr: Attr,
    /// Leading cells of each body row that act as row headers
    pub row_head_columns: u32,
    pub head: Vec<Row>,
    pub body: Vec<Row>,
}

impl TableBody {
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableFoot {
    pub attr: Attr,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub attr: Attr,
    pub caption: Caption,
    pub col_specs: Vec<ColSpec>,
    pub head: TableHead,
    pub bodies: Vec<TableBody>,
    pub foot: TableFoot,
}
