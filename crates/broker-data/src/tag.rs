//! The closed list of value kinds.
//!
//! The declaration order of [`Tag`] is load-bearing: it is the primary key
//! when two values of different kinds are compared, so every `integer`
//! sorts before every `count` regardless of magnitude.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Discriminator of a [`crate::Data`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Tag {
    Boolean,
    Integer,
    Count,
    Real,
    String,
    Set,
    Table,
    Vector,
    Record,
}

impl Tag {
    /// All tags in their canonical order.
    pub const ALL: [Tag; 9] = [
        Tag::Boolean,
        Tag::Integer,
        Tag::Count,
        Tag::Real,
        Tag::String,
        Tag::Set,
        Tag::Table,
        Tag::Vector,
        Tag::Record,
    ];

    /// Lowercase kind name, as used in `Display` and serde.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Boolean => "boolean",
            Tag::Integer => "integer",
            Tag::Count => "count",
            Tag::Real => "real",
            Tag::String => "string",
            Tag::Set => "set",
            Tag::Table => "table",
            Tag::Vector => "vector",
            Tag::Record => "record",
        }
    }

    /// True for the kinds that own nested values.
    pub fn is_compound(self) -> bool {
        matches!(self, Tag::Set | Tag::Table | Tag::Vector | Tag::Record)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| DataError::UnknownTag(s.to_string()))
    }
}
