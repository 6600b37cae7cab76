//! HTML table rendering

use crate::common::{para, plain, render_blocks, render_fixture, render_with, load_fixture};
use mwfilter_babel::ast::{
    Alignment, Attr, Block, Caption, Cell, ColSpec, Row, Table, TableBody, TableFoot,
};
use mwfilter_babel::{render, FormatError, RenderOptions};

fn row(cells: Vec<Cell>) -> Row {
    Row {
        attr: Attr::default(),
        cells,
    }
}

fn body(rows: Vec<Row>) -> TableBody {
    TableBody {
        body: rows,
        ..TableBody::default()
    }
}

fn table(table: Table) -> Block {
    Block::Table(Box::new(table))
}

#[test]
fn table_fixture() {
    let expected = "<table>\n\
        <caption markdown=\"1\">C</caption>\n\
        <thead>\n\
        <tr>\n\
        <th markdown=\"1\">H1</th>\n\
        <th markdown=\"1\">H2</th>\n\
        </tr>\n\
        </thead>\n\
        <tbody>\n\
        <tr>\n\
        <td markdown=\"1\">RH</td>\n\
        <td markdown=\"1\">RD</td>\n\
        </tr>\n\
        </tbody>\n\
        </table>\n";
    assert_eq!(render_fixture("table.json"), expected);
}

#[test]
fn empty_sections_are_left_out() {
    let out = render_blocks(vec![table(Table {
        bodies: vec![TableBody::default(), body(vec![row(vec![Cell::new(vec![plain("x")])])])],
        ..Table::default()
    })]);
    assert_eq!(
        out,
        "<table>\n<tbody>\n<tr>\n<td markdown=\"1\">x</td>\n</tr>\n</tbody>\n</table>\n"
    );
}

#[test]
fn alignment_and_spans() {
    let mut wide = Cell::new(vec![plain("wide")]);
    wide.col_span = 2;
    let mut tall = Cell::new(vec![plain("tall")]);
    tall.row_span = 3;
    tall.alignment = Alignment::AlignRight;

    let out = render_blocks(vec![table(Table {
        col_specs: vec![
            ColSpec {
                alignment: Alignment::AlignCenter,
                ..ColSpec::default()
            },
            ColSpec::default(),
            ColSpec {
                alignment: Alignment::AlignLeft,
                ..ColSpec::default()
            },
        ],
        bodies: vec![body(vec![row(vec![wide, tall])])],
        ..Table::default()
    })]);
    assert_eq!(
        out,
        "<table>\n<tbody>\n<tr>\n\
         <td markdown=\"1\" style=\"text-align: center;\" colspan=\"2\">wide</td>\n\
         <td markdown=\"1\" style=\"text-align: right;\" rowspan=\"3\">tall</td>\n\
         </tr>\n</tbody>\n</table>\n"
    );
}

#[test]
fn row_head_columns_become_th() {
    let out = render_blocks(vec![table(Table {
        bodies: vec![TableBody {
            row_head_columns: 1,
            ..body(vec![row(vec![
                Cell::new(vec![plain("k")]),
                Cell::new(vec![plain("v")]),
            ])])
        }],
        foot: TableFoot {
            attr: Attr::default(),
            rows: vec![row(vec![Cell::new(vec![plain("f")])])],
        },
        ..Table::default()
    })]);
    assert_eq!(
        out,
        "<table>\n<tbody>\n<tr>\n<th markdown=\"1\">k</th>\n<td markdown=\"1\">v</td>\n</tr>\n</tbody>\n\
         <tfoot>\n<tr>\n<td markdown=\"1\">f</td>\n</tr>\n</tfoot>\n</table>\n"
    );
}

#[test]
fn multi_paragraph_cells_are_block_style() {
    let out = render_blocks(vec![table(Table {
        bodies: vec![body(vec![row(vec![Cell::new(vec![para("a"), para("b")])])])],
        ..Table::default()
    })]);
    assert_eq!(
        out,
        "<table>\n<tbody>\n<tr>\n<td markdown=\"1\">\na\n\nb\n</td>\n</tr>\n</tbody>\n</table>\n"
    );
}

#[test]
fn table_part_attributes_are_unsupported() {
    let with_table_attr = table(Table {
        attr: Attr::new("t"),
        ..Table::default()
    });
    let mut cell = Cell::new(vec![plain("x")]);
    cell.attr = Attr::default().with_class("c");
    let with_cell_attr = table(Table {
        bodies: vec![body(vec![row(vec![cell])])],
        ..Table::default()
    });

    for block in [with_table_attr, with_cell_attr] {
        let result = render_with(vec![block], &RenderOptions::default());
        assert!(matches!(result, Err(FormatError::UnsupportedFeature(_))));
    }
}

#[test]
fn short_caption_is_used_without_long_caption() {
    let out = render_blocks(vec![table(Table {
        caption: Caption {
            short: Some(crate::common::words("Short one")),
            blocks: vec![],
        },
        ..Table::default()
    })]);
    assert_eq!(
        out,
        "<table>\n<caption markdown=\"1\">Short one</caption>\n</table>\n"
    );
}

#[test]
fn figure_fixture() {
    assert_eq!(
        render_fixture("figure.json"),
        "<figure markdown=\"1\">\n\
         <img src=\"A.png\" title=\"A.png\">\n\
         <figcaption markdown=\"1\">A.png</figcaption>\n\
         </figure>\n"
    );

    let options = RenderOptions {
        skip_attachments: true,
        ..RenderOptions::default()
    };
    let out = render(&load_fixture("figure.json"), None, &options).unwrap();
    assert_eq!(
        out,
        "<figure markdown=\"1\">\n<figcaption markdown=\"1\">A.png</figcaption>\n</figure>\n"
    );
}
