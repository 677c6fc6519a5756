//! Flattened, borrow-only traversal of compound values.
//!
//! Ordering, hashing and rendering all walk value trees with an explicit
//! stack of [`Children`] iterators instead of recursing, so nesting depth
//! is bounded by heap, not by the call stack.

use std::collections::{btree_map, btree_set};
use std::slice;

use crate::data::Data;
use crate::record::Field;

/// One position in a flattened compound: a value or an absent record field.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Node<'a> {
    Present(&'a Data),
    Absent,
}

impl<'a> From<&'a Field> for Node<'a> {
    fn from(field: &'a Field) -> Self {
        match field {
            Some(data) => Node::Present(data),
            None => Node::Absent,
        }
    }
}

/// The direct children of one compound value, in canonical order.
///
/// Table entries are flattened into `key, value, key, value, ...`; since
/// every entry contributes exactly two nodes, lexicographic comparison of
/// the flattened sequences equals lexicographic comparison of the pairs.
#[derive(Debug)]
pub(crate) enum Children<'a> {
    Set(btree_set::Iter<'a, Data>),
    Table {
        entries: btree_map::Iter<'a, Data, Data>,
        value: Option<&'a Data>,
    },
    Vector(slice::Iter<'a, Data>),
    Record(slice::Iter<'a, Field>),
}

impl<'a> Children<'a> {
    /// Children of `data`, or `None` for scalar kinds.
    pub(crate) fn of(data: &'a Data) -> Option<Self> {
        match data {
            Data::Set(s) => Some(Children::Set(s.iter())),
            Data::Table(t) => Some(Children::Table {
                entries: t.iter(),
                value: None,
            }),
            Data::Vector(v) => Some(Children::Vector(v.iter())),
            Data::Record(r) => Some(Children::Record(r.field_slice().iter())),
            _ => None,
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        match self {
            Children::Set(it) => it.next().map(Node::Present),
            Children::Vector(it) => it.next().map(Node::Present),
            Children::Record(it) => it.next().map(Node::from),
            Children::Table { entries, value } => {
                if let Some(v) = value.take() {
                    return Some(Node::Present(v));
                }
                let (k, v) = entries.next()?;
                *value = Some(v);
                Some(Node::Present(k))
            }
        }
    }
}
