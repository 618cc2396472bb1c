//! A single row of text fields.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One row: an ordered sequence of text fields.
///
/// Field counts are not fixed; records in the same table may be ragged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields in this record.
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`, or [`ModelError::FieldOutOfRange`].
    pub fn field(&self, index: usize) -> Result<&str> {
        self.get(index).ok_or(ModelError::FieldOutOfRange {
            index,
            len: self.fields.len(),
        })
    }

    /// Field at `index` if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Appends a field.
    pub fn push(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    /// Iterates the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Panics with the [`ModelError::FieldOutOfRange`] message when out of range.
impl Index<usize> for Record {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        match self.fields.get(index) {
            Some(field) => field,
            None => panic!(
                "{}",
                ModelError::FieldOutOfRange {
                    index,
                    len: self.fields.len(),
                }
            ),
        }
    }
}
