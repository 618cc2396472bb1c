//! The whole parsed document.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::record::Record;

/// An ordered sequence of records, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of fields in the record at `record`.
    pub fn num_fields(&self, record: usize) -> Result<usize> {
        self.record(record).map(Record::num_fields)
    }

    /// Record at `index`, or [`ModelError::RecordOutOfRange`].
    pub fn record(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or(ModelError::RecordOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Field at (`record`, `field`).
    ///
    /// Fails with whichever index is out of range, record index first.
    pub fn field(&self, record: usize, field: usize) -> Result<&str> {
        self.record(record)?.field(field)
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Appends a record at the end.
    pub fn push(&mut self, record: impl Into<Record>) {
        self.records.push(record.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Copies the table out as nested vectors of strings.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|record| record.fields().to_vec())
            .collect()
    }

    /// Widest record's field count (0 for an empty table).
    pub fn max_fields(&self) -> usize {
        self.records
            .iter()
            .map(Record::num_fields)
            .max()
            .unwrap_or(0)
    }

    /// Returns true if every record has the same number of fields.
    ///
    /// An empty table is uniform.
    pub fn is_uniform(&self) -> bool {
        let mut widths = self.records.iter().map(Record::num_fields);
        match widths.next() {
            Some(first) => widths.all(|width| width == first),
            None => true,
        }
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl From<Vec<Vec<String>>> for Table {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self {
            records: rows.into_iter().map(Record::from).collect(),
        }
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Panics with the [`ModelError::RecordOutOfRange`] message when out of range.
impl Index<usize> for Table {
    type Output = Record;

    fn index(&self, index: usize) -> &Self::Output {
        match self.records.get(index) {
            Some(record) => record,
            None => panic!(
                "{}",
                ModelError::RecordOutOfRange {
                    index,
                    len: self.records.len(),
                }
            ),
        }
    }
}
