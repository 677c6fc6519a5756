//! Compact human-readable notation.
//!
//! `T`/`F` for booleans, decimal numbers, quoted strings, `{a, b}` for sets,
//! `{k -> v}` for tables, `[a, b]` for vectors and `(a, nil)` for records.
//! `Debug` uses the same layout with every value prefixed by its kind, e.g.
//! `Vector[Integer(1), Count(1)]`, so kinds that display alike stay apart.
//!
//! ```
//! use broker_data::{Data, Record};
//!
//! let row = Record::new(vec![Some(Data::from("x")), None, Some(Data::from(true))]);
//! assert_eq!(Data::from(row).to_string(), r#"("x", nil, T)"#);
//! ```

use std::fmt::{self, Write};

use crate::data::Data;
use crate::record::Record;
use crate::walk::{Children, Node};

#[derive(Clone, Copy)]
enum Style {
    Plain,
    Tagged,
}

struct Frame<'a> {
    children: Children<'a>,
    close: char,
    table: bool,
    emitted: usize,
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_data(f, self, Style::Plain)
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_data(f, self, Style::Tagged)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, self, Style::Plain)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Record")?;
        write_record(f, self, Style::Tagged)
    }
}

fn write_data(f: &mut fmt::Formatter<'_>, data: &Data, style: Style) -> fmt::Result {
    let mut stack = Vec::new();
    open(f, Node::Present(data), &mut stack, style)?;
    drain(f, stack, style)
}

fn write_record(f: &mut fmt::Formatter<'_>, record: &Record, style: Style) -> fmt::Result {
    f.write_char('(')?;
    let frame = Frame {
        children: Children::Record(record.field_slice().iter()),
        close: ')',
        table: false,
        emitted: 0,
    };
    drain(f, vec![frame], style)
}

fn drain<'a>(f: &mut fmt::Formatter<'_>, mut stack: Vec<Frame<'a>>, style: Style) -> fmt::Result {
    while let Some(frame) = stack.last_mut() {
        match frame.children.next() {
            Some(node) => {
                if frame.emitted > 0 {
                    let sep = if frame.table && frame.emitted % 2 == 1 { " -> " } else { ", " };
                    f.write_str(sep)?;
                }
                frame.emitted += 1;
                open(f, node, &mut stack, style)?;
            }
            None => {
                f.write_char(frame.close)?;
                stack.pop();
            }
        }
    }
    Ok(())
}

fn open<'a>(
    f: &mut fmt::Formatter<'_>,
    node: Node<'a>,
    stack: &mut Vec<Frame<'a>>,
    style: Style,
) -> fmt::Result {
    let data = match node {
        Node::Absent => return f.write_str("nil"),
        Node::Present(data) => data,
    };
    if let Style::Tagged = style {
        match data {
            Data::Boolean(b) => return write!(f, "Boolean({b})"),
            Data::Integer(n) => return write!(f, "Integer({n})"),
            Data::Count(n) => return write!(f, "Count({n})"),
            Data::Real(x) => return write!(f, "Real({x:?})"),
            Data::String(s) => return write!(f, "String({s:?})"),
            Data::Set(_) => f.write_str("Set")?,
            Data::Table(_) => f.write_str("Table")?,
            Data::Vector(_) => f.write_str("Vector")?,
            Data::Record(_) => f.write_str("Record")?,
        }
    }
    let (opening, closing) = match data {
        Data::Boolean(b) => return f.write_str(if *b { "T" } else { "F" }),
        Data::Integer(n) => return write!(f, "{n}"),
        Data::Count(n) => return write!(f, "{n}"),
        Data::Real(x) => return write!(f, "{x:?}"),
        Data::String(s) => return write!(f, "{s:?}"),
        Data::Set(_) | Data::Table(_) => ('{', '}'),
        Data::Vector(_) => ('[', ']'),
        Data::Record(_) => ('(', ')'),
    };
    f.write_char(opening)?;
    if let Some(children) = Children::of(data) {
        stack.push(Frame {
            children,
            close: closing,
            table: matches!(data, Data::Table(_)),
            emitted: 0,
        });
    }
    Ok(())
}
