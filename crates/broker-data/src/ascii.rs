//! Tab-separated ASCII rendering for log rows.
//!
//! A [`Record`] renders as one line with fields joined by
//! [`AsciiFormat::separator`]. Absent fields render as the `unset_field`
//! placeholder, empty strings and empty containers as `empty_field`, and
//! container elements are joined by `set_separator`. Text that would be
//! ambiguous in the output is escaped as `\xHH`: any occurrence of the
//! separator, and the first character of a string that equals the unset
//! placeholder.
//!
//! ```
//! use broker_data::{AsciiFormat, Data, Record, Vector};
//!
//! let row = Record::new(vec![
//!     Some(Data::from("GET")),
//!     None,
//!     Some(Data::from(vec![Data::from(80u16), Data::from(443u16)] as Vector)),
//! ]);
//! assert_eq!(AsciiFormat::default().render_row(&row), "GET\t-\t80,443");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::Data;
use crate::record::Record;
use crate::walk::{Children, Node};

/// Separators and placeholders for ASCII rendering.
///
/// Deserializes from a partial JSON object; missing keys keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsciiFormat {
    /// Between the fields of a row.
    pub separator: String,
    /// Between the elements of a container.
    pub set_separator: String,
    /// Stands in for empty strings and empty containers.
    pub empty_field: String,
    /// Stands in for absent fields.
    pub unset_field: String,
}

impl Default for AsciiFormat {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
            set_separator: ",".to_string(),
            empty_field: "(empty)".to_string(),
            unset_field: "-".to_string(),
        }
    }
}

struct Frame<'a> {
    children: Children<'a>,
    table: bool,
    emitted: usize,
}

impl AsciiFormat {
    /// Render a single value.
    pub fn render(&self, data: &Data) -> String {
        let mut out = String::new();
        self.render_node(&mut out, Node::Present(data));
        out
    }

    /// Render a record as one row: fields joined by `separator`.
    pub fn render_row(&self, record: &Record) -> String {
        let mut out = String::new();
        for (i, field) in record.fields().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            self.render_node(&mut out, Node::from(field));
        }
        out
    }

    fn render_node<'a>(&self, out: &mut String, root: Node<'a>) {
        let mut stack: Vec<Frame<'a>> = Vec::new();
        self.open(out, root, &mut stack);
        while let Some(frame) = stack.last_mut() {
            match frame.children.next() {
                Some(node) => {
                    if frame.emitted > 0 {
                        if frame.table && frame.emitted % 2 == 1 {
                            out.push('=');
                        } else {
                            out.push_str(&self.set_separator);
                        }
                    }
                    frame.emitted += 1;
                    self.open(out, node, &mut stack);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    fn open<'a>(&self, out: &mut String, node: Node<'a>, stack: &mut Vec<Frame<'a>>) {
        let data = match node {
            Node::Absent => {
                out.push_str(&self.unset_field);
                return;
            }
            Node::Present(data) => data,
        };
        let empty = match data {
            Data::Boolean(b) => {
                out.push(if *b { 'T' } else { 'F' });
                return;
            }
            Data::Integer(n) => {
                out.push_str(&n.to_string());
                return;
            }
            Data::Count(n) => {
                out.push_str(&n.to_string());
                return;
            }
            Data::Real(x) => {
                out.push_str(&format!("{x:.6}"));
                return;
            }
            Data::String(s) => {
                self.push_text(out, s);
                return;
            }
            Data::Set(s) => s.is_empty(),
            Data::Table(t) => t.is_empty(),
            Data::Vector(v) => v.is_empty(),
            Data::Record(r) => r.is_empty(),
        };
        if empty {
            out.push_str(&self.empty_field);
            return;
        }
        if let Some(children) = Children::of(data) {
            stack.push(Frame {
                children,
                table: matches!(data, Data::Table(_)),
                emitted: 0,
            });
        }
    }

    fn push_text(&self, out: &mut String, text: &str) {
        if text.is_empty() {
            out.push_str(&self.empty_field);
            return;
        }
        let mut rest = text;
        if text == self.unset_field {
            debug!(text, "escaping string that collides with the unset placeholder");
            let mut chars = text.chars();
            if let Some(first) = chars.next() {
                push_hex(out, first.encode_utf8(&mut [0; 4]));
            }
            rest = chars.as_str();
        }
        if self.separator.is_empty() || !rest.contains(self.separator.as_str()) {
            out.push_str(rest);
            return;
        }
        let mut escaped = String::new();
        push_hex(&mut escaped, &self.separator);
        out.push_str(&rest.replace(self.separator.as_str(), &escaped));
    }
}

fn push_hex(out: &mut String, text: &str) {
    for byte in text.bytes() {
        out.push_str(&format!("\\x{byte:02x}"));
    }
}
