//! Construction from native values.
//!
//! Every supported native type maps onto exactly one alternative:
//!
//! | native                                  | kind      |
//! |-----------------------------------------|-----------|
//! | `f32`, `f64`                            | `real`    |
//! | `bool`                                  | `boolean` |
//! | `u8`, `u16`, `u32`, `u64`, `usize`      | `count`   |
//! | `i8`, `i16`, `i32`, `i64`, `isize`      | `integer` |
//! | `&str`, `String`, `&String`, `Box<str>`, `Cow<str>` | `string` |
//! | `Set`, `Table`, `Vector`, `Record`      | itself    |
//!
//! [`Data::new`] is the generic entry point. It is bounded by the sealed
//! [`IntoData`] trait, so anything else, including `Data` itself, is a
//! compile error rather than a runtime failure:
//!
//! ```compile_fail
//! use broker_data::Data;
//! let d = Data::new(Data::new(1u8));
//! ```
//!
//! ```compile_fail
//! use broker_data::Data;
//! let d = Data::new(1u128);
//! ```

use std::borrow::Cow;

use crate::data::{Data, Set, Table, Vector};
use crate::record::Record;

mod sealed {
    pub trait Sealed {}
}

/// Native types accepted by [`Data::new`].
///
/// Sealed: the set of implementors is closed.
pub trait IntoData: sealed::Sealed + Into<Data> {}

impl Data {
    /// Build a value from a native scalar or container.
    ///
    /// ```
    /// use broker_data::{Data, Tag};
    ///
    /// assert_eq!(Data::new(true).tag(), Tag::Boolean);
    /// assert_eq!(Data::new(-5).as_integer(), Some(-5));
    /// assert_eq!(Data::new(5u32).as_count(), Some(5));
    /// assert_eq!(Data::new(3.14).tag(), Tag::Real);
    /// assert_eq!(Data::new("hi").as_str(), Some("hi"));
    /// ```
    pub fn new<T: IntoData>(value: T) -> Self {
        value.into()
    }
}

macro_rules! into_data {
    ($variant:ident: $($native:ty => |$x:ident| $conv:expr),+ $(,)?) => {
        $(
            impl From<$native> for Data {
                fn from($x: $native) -> Self {
                    Data::$variant($conv)
                }
            }

            impl sealed::Sealed for $native {}
            impl IntoData for $native {}
        )+
    };
}

into_data!(Real:
    f32 => |x| f64::from(x),
    f64 => |x| x,
);

into_data!(Boolean:
    bool => |x| x,
);

into_data!(Count:
    u8 => |x| u64::from(x),
    u16 => |x| u64::from(x),
    u32 => |x| u64::from(x),
    u64 => |x| x,
    usize => |x| x as u64,
);

into_data!(Integer:
    i8 => |x| i64::from(x),
    i16 => |x| i64::from(x),
    i32 => |x| i64::from(x),
    i64 => |x| x,
    isize => |x| x as i64,
);

into_data!(String:
    String => |x| x,
    &str => |x| x.to_owned(),
    &String => |x| x.clone(),
    Box<str> => |x| x.into_string(),
    Cow<'_, str> => |x| x.into_owned(),
);

into_data!(Set: Set => |x| x);
into_data!(Table: Table => |x| x);
into_data!(Vector: Vector => |x| x);
into_data!(Record: Record => |x| x);
