//! Fixed-arity rows of optional values.
//!
//! A [`Record`] models one message schema: its size is fixed by the fields
//! it is built from, and each column is either present or absent. Lookups
//! report a miss the same way whether the column is absent or the index is
//! past the end.
//!
//! ```
//! use broker_data::{Data, Record};
//!
//! let row = Record::new(vec![Some(Data::from(1)), None]);
//! assert_eq!(row.size(), 2);
//! assert_eq!(row.get(0), Some(&Data::from(1)));
//! assert_eq!(row.get(1), None);
//! assert_eq!(row.get(2), None);
//! ```

use std::mem;

use crate::data::Data;

/// One optional slot within a record.
pub type Field = Option<Data>;

/// A fixed-length, positionally indexed sequence of optional values.
#[derive(Clone, Default)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Build a record whose fields are all present.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Data>,
    {
        values.into_iter().map(|v| Some(v.into())).collect()
    }

    /// Number of fields, present or not.
    pub fn size(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The value at `index`, or `None` if the field is absent or out of range.
    pub fn get(&self, index: usize) -> Option<&Data> {
        self.fields.get(index).and_then(Option::as_ref)
    }

    /// Mutable counterpart of [`Record::get`], with the same miss semantics.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Data> {
        self.fields.get_mut(index).and_then(Option::as_mut)
    }

    /// Replace the field at `index` and return the previous one.
    ///
    /// An out-of-range index leaves the record unchanged and returns `None`;
    /// records never grow.
    pub fn set(&mut self, index: usize, field: Field) -> Field {
        let slot = self.fields.get_mut(index)?;
        mem::replace(slot, field)
    }

    /// Iterate over the fields in positional order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.iter()
    }

    pub(crate) fn field_slice(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn take_fields(&mut self) -> Vec<Field> {
        mem::take(&mut self.fields)
    }
}

impl From<Vec<Field>> for Record {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}

impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
