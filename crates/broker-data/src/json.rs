//! Bridge between [`Data`] and `serde_json::Value`.
//!
//! The mapping is lossy in both directions, since JSON has one number type
//! and no sets, records or non-string keys:
//!
//! - **To JSON**: sets and vectors become arrays; tables become objects
//!   when every key is a string and arrays of `[key, value]` pairs
//!   otherwise; records become arrays with `null` for absent fields. Reals
//!   must be finite.
//! - **From JSON**: negative integers become `integer`, non-negative ones
//!   `count`, other numbers `real`; arrays become vectors and objects
//!   become string-keyed tables. `null` is rejected.
//!
//! Conversion is depth-limited to [`MAX_DEPTH`], matching the recursion
//! limit serde_json applies when parsing.
//!
//! ```
//! use broker_data::{json, Data};
//!
//! let data = json::parse_json(r#"{"port":443,"delta":-1}"#).unwrap();
//! let table = data.as_table().unwrap();
//! assert_eq!(table[&Data::from("port")], Data::from(443u64));
//! assert_eq!(table[&Data::from("delta")], Data::from(-1i64));
//! ```

use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::data::{Data, Table};
use crate::error::{DataError, Result};

/// Deepest nesting converted in either direction.
pub const MAX_DEPTH: usize = 128;

/// Convert a value into a JSON document.
pub fn to_json(data: &Data) -> Result<Value> {
    to_json_at(data, 0)
}

/// Convert a JSON document into a value.
pub fn from_json(value: &Value) -> Result<Data> {
    from_json_at(value, 0)
}

/// Parse a JSON string into a value.
pub fn parse_json(json: &str) -> Result<Data> {
    let value: Value = serde_json::from_str(json)?;
    from_json(&value)
}

/// Render a value as a compact JSON string.
pub fn to_json_string(data: &Data) -> Result<String> {
    Ok(serde_json::to_string(&to_json(data)?)?)
}

fn to_json_at(data: &Data, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(DataError::DepthLimit(MAX_DEPTH));
    }
    let value = match data {
        Data::Boolean(b) => Value::Bool(*b),
        Data::Integer(n) => Value::Number(Number::from(*n)),
        Data::Count(n) => Value::Number(Number::from(*n)),
        Data::Real(x) => Value::Number(Number::from_f64(*x).ok_or(DataError::NonFiniteReal(*x))?),
        Data::String(s) => Value::String(s.clone()),
        Data::Set(s) => array_of(s.iter(), depth)?,
        Data::Vector(v) => array_of(v.iter(), depth)?,
        Data::Table(t) => table_to_json(t, depth)?,
        Data::Record(r) => Value::Array(
            r.fields()
                .map(|field| match field {
                    Some(d) => to_json_at(d, depth + 1),
                    None => Ok(Value::Null),
                })
                .collect::<Result<_>>()?,
        ),
    };
    Ok(value)
}

fn array_of<'a>(items: impl Iterator<Item = &'a Data>, depth: usize) -> Result<Value> {
    Ok(Value::Array(
        items
            .map(|d| to_json_at(d, depth + 1))
            .collect::<Result<_>>()?,
    ))
}

fn table_to_json(table: &Table, depth: usize) -> Result<Value> {
    if table.keys().all(|k| k.as_str().is_some()) {
        let mut map = Map::new();
        for (k, v) in table {
            if let Data::String(key) = k {
                map.insert(key.clone(), to_json_at(v, depth + 1)?);
            }
        }
        return Ok(Value::Object(map));
    }

    trace!(entries = table.len(), "table has non-string keys, encoding as pair list");
    let pairs = table
        .iter()
        .map(|(k, v)| -> Result<Value> {
            Ok(Value::Array(vec![
                to_json_at(k, depth + 1)?,
                to_json_at(v, depth + 1)?,
            ]))
        })
        .collect::<Result<_>>()?;
    Ok(Value::Array(pairs))
}

fn from_json_at(value: &Value, depth: usize) -> Result<Data> {
    if depth > MAX_DEPTH {
        return Err(DataError::DepthLimit(MAX_DEPTH));
    }
    let data = match value {
        Value::Null => return Err(DataError::NullValue),
        Value::Bool(b) => Data::Boolean(*b),
        Value::Number(n) => number_to_data(n),
        Value::String(s) => Data::String(s.clone()),
        Value::Array(items) => Data::Vector(
            items
                .iter()
                .map(|v| from_json_at(v, depth + 1))
                .collect::<Result<_>>()?,
        ),
        Value::Object(map) => {
            let mut table = Table::new();
            for (k, v) in map {
                table.insert(Data::String(k.clone()), from_json_at(v, depth + 1)?);
            }
            Data::Table(table)
        }
    };
    Ok(data)
}

fn number_to_data(n: &Number) -> Data {
    if let Some(count) = n.as_u64() {
        Data::Count(count)
    } else if let Some(integer) = n.as_i64() {
        Data::Integer(integer)
    } else {
        // Only non-finite values are missing here, and serde_json never
        // produces those.
        Data::Real(n.as_f64().unwrap_or(f64::NAN))
    }
}
