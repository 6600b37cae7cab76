//! Block (paragraph-level) nodes

use super::attr::Attr;
use super::inlines::{Format, Inline};
use super::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNumberStyle {
    DefaultStyle,
    Example,
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListNumberDelim {
    DefaultDelim,
    Period,
    OneParen,
    TwoParens,
}

/// `(start, style, delimiter)` of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAttributes {
    pub start: i64,
    pub style: ListNumberStyle,
    pub delim: ListNumberDelim,
}

impl Default for ListAttributes {
    fn default() -> Self {
        ListAttributes {
            start: 1,
            style: ListNumberStyle::DefaultStyle,
            delim: ListNumberDelim::DefaultDelim,
        }
    }
}

/// Table or figure caption: optional short form plus the full blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Caption {
    pub short: Option<Vec<Inline>>,
    pub blocks: Vec<Block>,
}

impl Caption {
    pub fn is_empty(&self) -> bool {
        self.short.as_ref().map_or(true, |s| s.is_empty()) && self.blocks.is_empty()
    }
}

/// One term and its definitions.
pub type DefinitionItem = (Vec<Inline>, Vec<Vec<Block>>);

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Plain(Vec<Inline>),
    Para(Vec<Inline>),
    LineBlock(Vec<Vec<Inline>>),
    CodeBlock(Attr, String),
    RawBlock(Format, String),
    BlockQuote(Vec<Block>),
    OrderedList(ListAttributes, Vec<Vec<Block>>),
    BulletList(Vec<Vec<Block>>),
    DefinitionList(Vec<DefinitionItem>),
    Header(u32, Attr, Vec<Inline>),
    HorizontalRule,
    Table(Box<Table>),
    Figure(Attr, Caption, Vec<Block>),
    Div(Attr, Vec<Block>),
}

impl Block {
    /// Discriminant tag as it appears in pandoc JSON.
    pub fn tag(&self) -> &'static str {
        match self {
            Block::Plain(_) => "Plain",
            Block::Para(_) => "Para",
            Block::LineBlock(_) => "LineBlock",
            Block::CodeBlock(..) => "CodeBlock",
            Block::RawBlock(..) => "RawBlock",
            Block::BlockQuote(_) => "BlockQuote",
            Block::OrderedList(..) => "OrderedList",
            Block::BulletList(_) => "BulletList",
            Block::DefinitionList(_) => "DefinitionList",
            Block::Header(..) => "Header",
            Block::HorizontalRule => "HorizontalRule",
            Block::Table(_) => "Table",
            Block::Figure(..) => "Figure",
            Block::Div(..) => "Div",
        }
    }
}
