//! # broker-data
//!
//! The canonical in-memory form of structured messages exchanged over a
//! publish/subscribe broker: a closed, recursive value type with structural
//! equality, a total order and a consistent hash.
//!
//! ## Quick start
//!
//! ```rust
//! use broker_data::{Data, Record, Set, Tag};
//!
//! // Native values map onto exactly one kind.
//! assert_eq!(Data::new(-5).tag(), Tag::Integer);
//! assert_eq!(Data::new(5u64).tag(), Tag::Count);
//!
//! // Kind settles cross-kind comparisons before magnitude.
//! assert!(Data::new(100i64) < Data::new(1u64));
//!
//! // Values are set members and map keys.
//! let ports: Set = [443u16, 80, 443].into_iter().map(Data::from).collect();
//! assert_eq!(ports.len(), 2);
//!
//! // Records hold optional fields; misses look the same either way.
//! let row = Record::new(vec![Some(Data::new(1)), None]);
//! assert_eq!(row.get(1), None);
//! assert_eq!(row.get(2), None);
//! ```
//!
//! ## Modules
//!
//! - [`tag`] — the nine kinds and their fixed order
//! - [`data`] — the `Data` value core and its container aliases
//! - [`record`] — fixed-arity rows of optional fields
//! - [`ordering`] — the total order (`compare`, `Ord for Data`)
//! - [`hashing`] — `Hash for Data` consistent with equality
//! - [`convert`] — construction from native types (`Data::new`, `From`)
//! - [`ascii`] — tab-separated log-row rendering
//! - [`json`] — bridge to and from `serde_json::Value`
//! - [`error`] — error types for conversions

pub mod ascii;
pub mod convert;
pub mod data;
mod display;
pub mod error;
pub mod hashing;
pub mod json;
pub mod ordering;
pub mod record;
pub mod tag;
mod walk;

pub use ascii::AsciiFormat;
pub use convert::IntoData;
pub use data::{Data, Set, Table, Vector};
pub use error::DataError;
pub use ordering::{compare, compare_records};
pub use record::{Field, Record};
pub use tag::Tag;
