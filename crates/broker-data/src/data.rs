//! The value core: a tagged union over exactly nine kinds.
//!
//! A [`Data`] owns its whole tree. Cloning deep-copies it, and the
//! compound kinds are canonical ordered containers keyed by the value order
//! defined in [`crate::ordering`], so two sets or tables built in different
//! insertion orders are indistinguishable.
//!
//! ```
//! use broker_data::{Data, Tag, Vector};
//!
//! let v = Data::from(vec![Data::from(1), Data::from("two")] as Vector);
//! assert_eq!(v.tag(), Tag::Vector);
//! assert_eq!(v.as_vector().unwrap()[1].as_str(), Some("two"));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::mem;

use crate::error::{DataError, Result};
use crate::record::{Field, Record};
use crate::tag::Tag;
use crate::walk::{Children, Node};

/// Ordered collection of unique values.
pub type Set = BTreeSet<Data>;

/// Ordered mapping with unique keys.
pub type Table = BTreeMap<Data, Data>;

/// Ordered, possibly repeating sequence.
pub type Vector = Vec<Data>;

/// A value holding exactly one of the nine canonical alternatives.
///
/// Equality, ordering and hashing are implemented in [`crate::ordering`] and
/// [`crate::hashing`] without recursing on the call stack. Cloning, dropping
/// and `Debug`/`Display` formatting are iterative too, so arbitrarily deep
/// trees are safe to handle.
pub enum Data {
    Boolean(bool),
    Integer(i64),
    Count(u64),
    Real(f64),
    String(String),
    Set(Set),
    Table(Table),
    Vector(Vector),
    Record(Record),
}

impl Default for Data {
    fn default() -> Self {
        Data::Boolean(false)
    }
}

impl Data {
    /// The kind of the active alternative.
    pub fn tag(&self) -> Tag {
        match self {
            Data::Boolean(_) => Tag::Boolean,
            Data::Integer(_) => Tag::Integer,
            Data::Count(_) => Tag::Count,
            Data::Real(_) => Tag::Real,
            Data::String(_) => Tag::String,
            Data::Set(_) => Tag::Set,
            Data::Table(_) => Tag::Table,
            Data::Vector(_) => Tag::Vector,
            Data::Record(_) => Tag::Record,
        }
    }

    /// The payload of a `boolean`. `None` for any other kind.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Data::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The payload of an `integer`. `None` for any other kind.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Data::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The payload of a `count`. `None` for any other kind.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Data::Count(n) => Some(*n),
            _ => None,
        }
    }

    /// The payload of a `real`. `None` for any other kind.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Data::Real(x) => Some(*x),
            _ => None,
        }
    }

    /// The text of a `string`. `None` for any other kind.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Data::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements of a `set`. `None` for any other kind.
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Data::Set(s) => Some(s),
            _ => None,
        }
    }

    /// The entries of a `table`. `None` for any other kind.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Data::Table(t) => Some(t),
            _ => None,
        }
    }

    /// The elements of a `vector`. `None` for any other kind.
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Data::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// The fields of a `record`. `None` for any other kind.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Data::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Mutable text of a `string`. `None` for any other kind.
    pub fn as_string_mut(&mut self) -> Option<&mut String> {
        match self {
            Data::String(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable elements of a `set`. `None` for any other kind.
    pub fn as_set_mut(&mut self) -> Option<&mut Set> {
        match self {
            Data::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable entries of a `table`. `None` for any other kind.
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Data::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Mutable elements of a `vector`. `None` for any other kind.
    pub fn as_vector_mut(&mut self) -> Option<&mut Vector> {
        match self {
            Data::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Mutable fields of a `record`. `None` for any other kind.
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Data::Record(r) => Some(r),
            _ => None,
        }
    }

    /// True for a compound value that still owns children.
    fn has_children(&self) -> bool {
        match self {
            Data::Set(s) => !s.is_empty(),
            Data::Table(t) => !t.is_empty(),
            Data::Vector(v) => !v.is_empty(),
            Data::Record(r) => r.fields().any(Option::is_some),
            _ => false,
        }
    }
}

/// A compound being rebuilt by [`Data::clone`]: the source's children still
/// to copy, and the copies made so far.
struct CloneFrame<'a> {
    source: &'a Data,
    children: Children<'a>,
    copied: Vec<Field>,
}

enum Opened<'a> {
    Scalar(Data),
    Compound(CloneFrame<'a>),
}

impl<'a> CloneFrame<'a> {
    /// Open a frame for a compound, or copy a scalar directly.
    fn open(data: &'a Data) -> Opened<'a> {
        let scalar = match data {
            Data::Boolean(b) => Data::Boolean(*b),
            Data::Integer(n) => Data::Integer(*n),
            Data::Count(n) => Data::Count(*n),
            Data::Real(x) => Data::Real(*x),
            Data::String(s) => Data::String(s.clone()),
            _ => match Children::of(data) {
                Some(children) => {
                    return Opened::Compound(Self {
                        source: data,
                        children,
                        copied: Vec::new(),
                    });
                }
                None => Data::default(),
            },
        };
        Opened::Scalar(scalar)
    }

    /// Assemble the copied children into a value of the source's kind.
    fn finish(self) -> Data {
        match self.source {
            Data::Set(_) => Data::Set(self.copied.into_iter().flatten().collect()),
            Data::Table(_) => {
                let mut table = Table::new();
                let mut flat = self.copied.into_iter().flatten();
                while let (Some(k), Some(v)) = (flat.next(), flat.next()) {
                    table.insert(k, v);
                }
                Data::Table(table)
            }
            Data::Record(_) => Data::Record(Record::new(self.copied)),
            _ => Data::Vector(self.copied.into_iter().flatten().collect()),
        }
    }
}

// Post-order rebuild: each finished compound is handed to its parent's
// frame, so the call stack stays flat whatever the nesting depth.
impl Clone for Data {
    fn clone(&self) -> Self {
        let mut stack = match CloneFrame::open(self) {
            Opened::Compound(frame) => vec![frame],
            Opened::Scalar(scalar) => return scalar,
        };
        let mut root = None;
        while let Some(frame) = stack.last_mut() {
            match frame.children.next() {
                Some(Node::Absent) => frame.copied.push(None),
                Some(Node::Present(child)) => match CloneFrame::open(child) {
                    Opened::Compound(child_frame) => stack.push(child_frame),
                    Opened::Scalar(scalar) => frame.copied.push(Some(scalar)),
                },
                None => {
                    let Some(done) = stack.pop() else { break };
                    let copy = done.finish();
                    match stack.last_mut() {
                        Some(parent) => parent.copied.push(Some(copy)),
                        None => root = Some(copy),
                    }
                }
            }
        }
        root.unwrap_or_default()
    }
}

// Children are detached onto a work list before they are dropped, so each
// nested value is dropped with no children of its own.
impl Drop for Data {
    fn drop(&mut self) {
        if !self.has_children() {
            return;
        }
        let mut pending = vec![mem::take(self)];
        while let Some(mut data) = pending.pop() {
            match &mut data {
                Data::Set(s) => pending.extend(mem::take(s)),
                Data::Table(t) => {
                    for (k, v) in mem::take(t) {
                        pending.push(k);
                        pending.push(v);
                    }
                }
                Data::Vector(v) => pending.append(v),
                Data::Record(r) => pending.extend(r.take_fields().into_iter().flatten()),
                _ => {}
            }
        }
    }
}

macro_rules! try_from_data {
    ($native:ty, $variant:ident, $tag:ident) => {
        impl TryFrom<Data> for $native {
            type Error = DataError;

            fn try_from(mut data: Data) -> Result<Self> {
                match &mut data {
                    Data::$variant(x) => Ok(mem::take(x)),
                    other => Err(DataError::TypeMismatch {
                        expected: Tag::$tag,
                        found: other.tag(),
                    }),
                }
            }
        }
    };
}

try_from_data!(bool, Boolean, Boolean);
try_from_data!(i64, Integer, Integer);
try_from_data!(u64, Count, Count);
try_from_data!(f64, Real, Real);
try_from_data!(String, String, String);
try_from_data!(Set, Set, Set);
try_from_data!(Table, Table, Table);
try_from_data!(Vector, Vector, Vector);
try_from_data!(Record, Record, Record);
