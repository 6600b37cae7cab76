//! HTML tables
//!
//! Tables are always written as HTML: MediaWiki tables carry spans,
//! multi-paragraph cells and captions that pipe tables cannot hold.
//!
//!     <table>
//!     <caption markdown="1">...</caption>
//!     <thead>  head rows, all cells <th>
//!     <tbody>  one per non-empty body: its header rows, then its body rows
//!     <tfoot>  foot rows
//!
//! Wrappers with no rows are left out. Cell alignment (falling back to the
//! column's alignment) becomes a `text-align` style, spans above one become
//! `rowspan`/`colspan`, and the first `row_head_columns` cells of each body row
//! are written as `<th>`. Attributes on any table part are not supported.

use super::serializer::{require_empty_attr, MarkdownRenderer};
use crate::ast::{Alignment, Cell, ColSpec, Row, Table};
use crate::common::tags::{tag_quote, Tag};
use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Header,
    Data,
}

impl CellKind {
    fn tag_name(self) -> &'static str {
        match self {
            CellKind::Header => "th",
            CellKind::Data => "td",
        }
    }
}

impl<'a> MarkdownRenderer<'a> {
    pub(super) fn render_table(&mut self, table: &'a Table) -> Result<(), FormatError> {
        require_empty_attr(&table.attr, "Table")?;
        require_empty_attr(&table.head.attr, "TableHead")?;
        require_empty_attr(&table.foot.attr, "TableFoot")?;
        for body in &table.bodies {
            require_empty_attr(&body.attr, "TableBody")?;
        }

        let specs = table.col_specs.as_slice();
        tag_quote(self, &Tag::new("table").without_markdown(), |r| {
            let caption = &table.caption;
            if !caption.blocks.is_empty() {
                r.quote_blocks(Tag::new("caption"), &caption.blocks)?;
            } else if let Some(short) = caption.short.as_deref().filter(|s| !s.is_empty()) {
                tag_quote(r, &Tag::new("caption").inline(), |r| r.render_inlines(short))?;
                r.output.push('\n');
            }

            if !table.head.rows.is_empty() {
                tag_quote(r, &Tag::new("thead").without_markdown(), |r| {
                    r.render_rows(&table.head.rows, specs, u32::MAX)
                })?;
            }
            for body in table.bodies.iter().filter(|body| !body.is_empty()) {
                tag_quote(r, &Tag::new("tbody").without_markdown(), |r| {
                    r.render_rows(&body.head, specs, u32::MAX)?;
                    r.render_rows(&body.body, specs, body.row_head_columns)
                })?;
            }
            if !table.foot.rows.is_empty() {
                tag_quote(r, &Tag::new("tfoot").without_markdown(), |r| {
                    r.render_rows(&table.foot.rows, specs, 0)
                })?;
            }
            Ok(())
        })
    }

    /// Rows whose first `header_columns` cells are `<th>`.
    fn render_rows(
        &mut self,
        rows: &'a [Row],
        specs: &[ColSpec],
        header_columns: u32,
    ) -> Result<(), FormatError> {
        for row in rows {
            require_empty_attr(&row.attr, "Row")?;
            tag_quote(self, &Tag::new("tr").without_markdown(), |r| {
                let mut column = 0usize;
                for (i, cell) in row.cells.iter().enumerate() {
                    let kind = if (i as u64) < u64::from(header_columns) {
                        CellKind::Header
                    } else {
                        CellKind::Data
                    };
                    let fallback = specs.get(column).map_or(Alignment::AlignDefault, |s| s.alignment);
                    r.render_cell(cell, kind, fallback)?;
                    column += cell.col_span as usize;
                }
                Ok::<(), FormatError>(())
            })?;
        }
        Ok(())
    }

    fn render_cell(
        &mut self,
        cell: &'a Cell,
        kind: CellKind,
        column_alignment: Alignment,
    ) -> Result<(), FormatError> {
        require_empty_attr(&cell.attr, "Cell")?;
        let mut tag = Tag::new(kind.tag_name());
        let alignment = match cell.alignment {
            Alignment::AlignDefault => column_alignment,
            explicit => explicit,
        };
        if let Some(align) = alignment.css() {
            tag = tag.with_attr("style", format!("text-align: {align};"));
        }
        if cell.row_span > 1 {
            tag = tag.with_attr("rowspan", cell.row_span.to_string());
        }
        if cell.col_span > 1 {
            tag = tag.with_attr("colspan", cell.col_span.to_string());
        }
        self.quote_blocks(tag, &cell.blocks)
    }
}
