//! Pandoc JSON -> typed tree
//!
//! Every node is checked against the exact positional shape pandoc-types 1.23
//! writes. Nothing is defaulted or skipped: an unexpected tag, payload length
//! or element type is a [`SchemaError`].

use super::payload::{self, bounded, boolean, fields, integer, list, node, number, string};
use crate::ast::{
    Alignment, Attr, Block, Caption, Cell, Citation, CitationMode, ColSpec, ColWidth,
    DefinitionItem, Document, Format, Inline, ListAttributes, ListNumberDelim, ListNumberStyle,
    MathType, Meta, MetaValue, QuoteType, Row, Table, TableBody, TableFoot, TableHead, Target,
};
use crate::error::SchemaError;
use serde_json::Value;
use std::sync::Arc;

/// Decode a whole `{"pandoc-api-version", "meta", "blocks"}` object.
pub fn decode_document(value: &Value) -> Result<Document, SchemaError> {
    let object = value.as_object().ok_or_else(|| SchemaError::Type {
        node: "Pandoc".into(),
        expected: "object",
        found: payload::json_type(value),
    })?;

    let api_version = match object.get("pandoc-api-version") {
        Some(version) => decode_api_version(version)?,
        None => (0, 0, 0),
    };
    let meta = match object.get("meta") {
        Some(meta) => decode_meta(meta)?,
        None => Meta::new(),
    };
    let blocks = match object.get("blocks") {
        Some(blocks) => decode_blocks(blocks, "Pandoc")?,
        None => Vec::new(),
    };

    Ok(Document {
        api_version,
        meta,
        blocks: Arc::new(blocks),
    })
}

fn decode_api_version(value: &Value) -> Result<(u32, u32, u32), SchemaError> {
    let parts = list(value, "pandoc-api-version", |v| {
        bounded(v, "pandoc-api-version", "version part", 0)
    })?;
    let part = |i: usize| parts.get(i).copied().unwrap_or(0);
    Ok((part(0), part(1), part(2)))
}

pub fn decode_meta(value: &Value) -> Result<Meta, SchemaError> {
    let object = value.as_object().ok_or_else(|| SchemaError::Type {
        node: "Meta".into(),
        expected: "object",
        found: payload::json_type(value),
    })?;
    object
        .iter()
        .map(|(key, value)| Ok((key.clone(), decode_meta_value(value)?)))
        .collect()
}

pub fn decode_meta_value(value: &Value) -> Result<MetaValue, SchemaError> {
    let meta = node(value, "MetaValue")?;
    let payload = meta.payload()?;
    Ok(match meta.tag {
        "MetaMap" => MetaValue::MetaMap(decode_meta(payload)?),
        "MetaList" => MetaValue::MetaList(list(payload, meta.tag, decode_meta_value)?),
        "MetaBool" => MetaValue::MetaBool(boolean(payload, meta.tag)?),
        "MetaString" => MetaValue::MetaString(string(payload, meta.tag)?),
        "MetaInlines" => MetaValue::MetaInlines(decode_inlines(payload, meta.tag)?),
        "MetaBlocks" => MetaValue::MetaBlocks(decode_blocks(payload, meta.tag)?),
        other => {
            return Err(SchemaError::UnknownTag {
                kind: "MetaValue",
                tag: other.to_string(),
            })
        }
    })
}

pub fn decode_block(value: &Value) -> Result<Block, SchemaError> {
    let block = node(value, "Block")?;
    let tag = block.tag;
    Ok(match tag {
        "Plain" => Block::Plain(decode_inlines(block.payload()?, tag)?),
        "Para" => Block::Para(decode_inlines(block.payload()?, tag)?),
        "LineBlock" => Block::LineBlock(list(block.payload()?, tag, |line| {
            decode_inlines(line, tag)
        })?),
        "CodeBlock" => {
            let [attr, text] = block.fields()?;
            Block::CodeBlock(decode_attr(attr)?, string(text, tag)?)
        }
        "RawBlock" => {
            let [format, text] = block.fields()?;
            Block::RawBlock(Format(string(format, tag)?), string(text, tag)?)
        }
        "BlockQuote" => Block::BlockQuote(decode_blocks(block.payload()?, tag)?),
        "OrderedList" => {
            let [attrs, items] = block.fields()?;
            Block::OrderedList(decode_list_attributes(attrs)?, decode_items(items, tag)?)
        }
        "BulletList" => Block::BulletList(decode_items(block.payload()?, tag)?),
        "DefinitionList" => {
            Block::DefinitionList(list(block.payload()?, tag, decode_definition_item)?)
        }
        "Header" => {
            let [level, attr, inlines] = block.fields()?;
            Block::Header(
                bounded(level, tag, "level", 1)?,
                decode_attr(attr)?,
                decode_inlines(inlines, tag)?,
            )
        }
        "HorizontalRule" => {
            block.expect_empty()?;
            Block::HorizontalRule
        }
        "Table" => Block::Table(Box::new(decode_table(block.payload()?)?)),
        "Figure" => {
            let [attr, caption, blocks] = block.fields()?;
            Block::Figure(
                decode_attr(attr)?,
                decode_caption(caption)?,
                decode_blocks(blocks, tag)?,
            )
        }
        "Div" => {
            let [attr, blocks] = block.fields()?;
            Block::Div(decode_attr(attr)?, decode_blocks(blocks, tag)?)
        }
        other => {
            return Err(SchemaError::UnknownTag {
                kind: "Block",
                tag: other.to_string(),
            })
        }
    })
}

pub fn decode_inline(value: &Value) -> Result<Inline, SchemaError> {
    let inline = node(value, "Inline")?;
    let tag = inline.tag;
    let children = || -> Result<Vec<Inline>, SchemaError> { decode_inlines(inline.payload()?, tag) };
    Ok(match tag {
        "Str" => Inline::Str(string(inline.payload()?, tag)?),
        "Emph" => Inline::Emph(children()?),
        "Underline" => Inline::Underline(children()?),
        "Strong" => Inline::Strong(children()?),
        "Strikeout" => Inline::Strikeout(children()?),
        "Superscript" => Inline::Superscript(children()?),
        "Subscript" => Inline::Subscript(children()?),
        "SmallCaps" => Inline::SmallCaps(children()?),
        "Quoted" => {
            let [kind, inlines] = inline.fields()?;
            Inline::Quoted(decode_quote_type(kind)?, decode_inlines(inlines, tag)?)
        }
        "Cite" => {
            let [citations, inlines] = inline.fields()?;
            Inline::Cite(
                list(citations, tag, decode_citation)?,
                decode_inlines(inlines, tag)?,
            )
        }
        "Code" => {
            let [attr, text] = inline.fields()?;
            Inline::Code(decode_attr(attr)?, string(text, tag)?)
        }
        "Space" => {
            inline.expect_empty()?;
            Inline::Space
        }
        "SoftBreak" => {
            inline.expect_empty()?;
            Inline::SoftBreak
        }
        "LineBreak" => {
            inline.expect_empty()?;
            Inline::LineBreak
        }
        "Math" => {
            let [kind, text] = inline.fields()?;
            Inline::Math(decode_math_type(kind)?, string(text, tag)?)
        }
        "RawInline" => {
            let [format, text] = inline.fields()?;
            Inline::RawInline(Format(string(format, tag)?), string(text, tag)?)
        }
        "Link" | "Image" => {
            let [attr, inlines, target] = inline.fields()?;
            let attr = decode_attr(attr)?;
            let inlines = decode_inlines(inlines, tag)?;
            let target = decode_target(target)?;
            if tag == "Link" {
                Inline::Link(attr, inlines, target)
            } else {
                Inline::Image(attr, inlines, target)
            }
        }
        "Note" => Inline::Note(decode_blocks(inline.payload()?, tag)?),
        "Span" => {
            let [attr, inlines] = inline.fields()?;
            Inline::Span(decode_attr(attr)?, decode_inlines(inlines, tag)?)
        }
        other => {
            return Err(SchemaError::UnknownTag {
                kind: "Inline",
                tag: other.to_string(),
            })
        }
    })
}

fn decode_blocks(value: &Value, owner: &str) -> Result<Vec<Block>, SchemaError> {
    list(value, owner, decode_block)
}

fn decode_inlines(value: &Value, owner: &str) -> Result<Vec<Inline>, SchemaError> {
    list(value, owner, decode_inline)
}

fn decode_items(value: &Value, owner: &str) -> Result<Vec<Vec<Block>>, SchemaError> {
    list(value, owner, |item| decode_blocks(item, owner))
}

pub fn decode_attr(value: &Value) -> Result<Attr, SchemaError> {
    let [identifier, classes, pairs] = fields(value, "Attr")?;
    Ok(Attr {
        identifier: string(identifier, "Attr")?,
        classes: list(classes, "Attr", |class| string(class, "Attr"))?,
        pairs: list(pairs, "Attr", |pair| {
            let [key, value] = fields(pair, "Attr")?;
            Ok((string(key, "Attr")?, string(value, "Attr")?))
        })?,
    })
}

pub fn decode_target(value: &Value) -> Result<Target, SchemaError> {
    let [url, title] = fields(value, "Target")?;
    Ok(Target::new(string(url, "Target")?, string(title, "Target")?))
}

fn decode_caption(value: &Value) -> Result<Caption, SchemaError> {
    let [short, blocks] = fields(value, "Caption")?;
    let short = match short {
        Value::Null => None,
        short => Some(decode_inlines(short, "Caption")?),
    };
    Ok(Caption {
        short,
        blocks: decode_blocks(blocks, "Caption")?,
    })
}

fn decode_definition_item(value: &Value) -> Result<DefinitionItem, SchemaError> {
    let [term, definitions] = fields(value, "DefinitionList")?;
    Ok((
        decode_inlines(term, "DefinitionList")?,
        decode_items(definitions, "DefinitionList")?,
    ))
}

/// Decode a payload-free enum node such as `{"t": "AlignLeft"}`.
fn enum_tag<'a>(value: &'a Value, kind: &'static str) -> Result<&'a str, SchemaError> {
    let tagged = node(value, kind)?;
    tagged.expect_empty()?;
    Ok(tagged.tag)
}

fn unknown(kind: &'static str, tag: &str) -> SchemaError {
    SchemaError::UnknownTag {
        kind,
        tag: tag.to_string(),
    }
}

fn decode_list_attributes(value: &Value) -> Result<ListAttributes, SchemaError> {
    let [start, style, delim] = fields(value, "ListAttributes")?;
    let style = match enum_tag(style, "ListNumberStyle")? {
        "DefaultStyle" => ListNumberStyle::DefaultStyle,
        "Example" => ListNumberStyle::Example,
        "Decimal" => ListNumberStyle::Decimal,
        "LowerRoman" => ListNumberStyle::LowerRoman,
        "UpperRoman" => ListNumberStyle::UpperRoman,
        "LowerAlpha" => ListNumberStyle::LowerAlpha,
        "UpperAlpha" => ListNumberStyle::UpperAlpha,
        other => return Err(unknown("ListNumberStyle", other)),
    };
    let delim = match enum_tag(delim, "ListNumberDelim")? {
        "DefaultDelim" => ListNumberDelim::DefaultDelim,
        "Period" => ListNumberDelim::Period,
        "OneParen" => ListNumberDelim::OneParen,
        "TwoParens" => ListNumberDelim::TwoParens,
        other => return Err(unknown("ListNumberDelim", other)),
    };
    Ok(ListAttributes {
        start: integer(start, "ListAttributes")?,
        style,
        delim,
    })
}

fn decode_quote_type(value: &Value) -> Result<QuoteType, SchemaError> {
    match enum_tag(value, "QuoteType")? {
        "SingleQuote" => Ok(QuoteType::SingleQuote),
        "DoubleQuote" => Ok(QuoteType::DoubleQuote),
        other => Err(unknown("QuoteType", other)),
    }
}

fn decode_math_type(value: &Value) -> Result<MathType, SchemaError> {
    match enum_tag(value, "MathType")? {
        "DisplayMath" => Ok(MathType::DisplayMath),
        "InlineMath" => Ok(MathType::InlineMath),
        other => Err(unknown("MathType", other)),
    }
}

fn decode_alignment(value: &Value) -> Result<Alignment, SchemaError> {
    match enum_tag(value, "Alignment")? {
        "AlignLeft" => Ok(Alignment::AlignLeft),
        "AlignRight" => Ok(Alignment::AlignRight),
        "AlignCenter" => Ok(Alignment::AlignCenter),
        "AlignDefault" => Ok(Alignment::AlignDefault),
        other => Err(unknown("Alignment", other)),
    }
}

fn decode_citation(value: &Value) -> Result<Citation, SchemaError> {
    const NODE: &str = "Citation";
    let object = value.as_object().ok_or_else(|| SchemaError::Type {
        node: NODE.into(),
        expected: "object",
        found: payload::json_type(value),
    })?;
    let field = |name: &'static str| {
        object.get(name).ok_or(SchemaError::MissingField {
            node: NODE.into(),
            field: name,
        })
    };
    let mode = match enum_tag(field("citationMode")?, "CitationMode")? {
        "AuthorInText" => CitationMode::AuthorInText,
        "SuppressAuthor" => CitationMode::SuppressAuthor,
        "NormalCitation" => CitationMode::NormalCitation,
        other => return Err(unknown("CitationMode", other)),
    };
    Ok(Citation {
        id: string(field("citationId")?, NODE)?,
        prefix: decode_inlines(field("citationPrefix")?, NODE)?,
        suffix: decode_inlines(field("citationSuffix")?, NODE)?,
        mode,
        note_num: integer(field("citationNoteNum")?, NODE)?,
        hash: integer(field("citationHash")?, NODE)?,
    })
}

fn decode_table(value: &Value) -> Result<Table, SchemaError> {
    let [attr, caption, col_specs, head, bodies, foot] = fields(value, "Table")?;
    Ok(Table {
        attr: decode_attr(attr)?,
        caption: decode_caption(caption)?,
        col_specs: list(col_specs, "Table", decode_col_spec)?,
        head: decode_table_head(head)?,
        bodies: list(bodies, "Table", decode_table_body)?,
        foot: decode_table_foot(foot)?,
    })
}

fn decode_col_spec(value: &Value) -> Result<ColSpec, SchemaError> {
    let [alignment, width] = fields(value, "ColSpec")?;
    let width_node = node(width, "ColWidth")?;
    let width = match width_node.tag {
        "ColWidth" => ColWidth::ColWidth(number(width_node.payload()?, "ColWidth")?),
        "ColWidthDefault" => {
            width_node.expect_empty()?;
            ColWidth::ColWidthDefault
        }
        other => return Err(unknown("ColWidth", other)),
    };
    Ok(ColSpec {
        alignment: decode_alignment(alignment)?,
        width,
    })
}

fn decode_rows(value: &Value, owner: &str) -> Result<Vec<Row>, SchemaError> {
    list(value, owner, decode_row)
}

fn decode_table_head(value: &Value) -> Result<TableHead, SchemaError> {
    let [attr, rows] = fields(value, "TableHead")?;
    Ok(TableHead {
        attr: decode_attr(attr)?,
        rows: decode_rows(rows, "TableHead")?,
    })
}

fn decode_table_body(value: &Value) -> Result<TableBody, SchemaError> {
    let [attr, row_head_columns, head, body] = fields(value, "TableBody")?;
    Ok(TableBody {
        attr: decode_attr(attr)?,
        row_head_columns: bounded(row_head_columns, "TableBody", "row head columns", 0)?,
        head: decode_rows(head, "TableBody")?,
        body: decode_rows(body, "TableBody")?,
    })
}

fn decode_table_foot(value: &Value) -> Result<TableFoot, SchemaError> {
    let [attr, rows] = fields(value, "TableFoot")?;
    Ok(TableFoot {
        attr: decode_attr(attr)?,
        rows: decode_rows(rows, "TableFoot")?,
    })
}

fn decode_row(value: &Value) -> Result<Row, SchemaError> {
    let [attr, cells] = fields(value, "Row")?;
    Ok(Row {
        attr: decode_attr(attr)?,
        cells: list(cells, "Row", decode_cell)?,
    })
}

fn decode_cell(value: &Value) -> Result<Cell, SchemaError> {
    let [attr, alignment, row_span, col_span, blocks] = fields(value, "Cell")?;
    Ok(Cell {
        attr: decode_attr(attr)?,
        alignment: decode_alignment(alignment)?,
        row_span: bounded(row_span, "Cell", "row span", 1)?,
        col_span: bounded(col_span, "Cell", "col span", 1)?,
        blocks: decode_blocks(blocks, "Cell")?,
    })
}
