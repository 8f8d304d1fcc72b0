//! Sortable record type

use std::fmt;

/// A single record read from the input file
///
/// The record carries one integer sorting key. It has no identity beyond its
/// value, so it is `Copy` and compares by that key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Record {
    sorting_field: i32,
}

impl Record {
    pub const fn new(sorting_field: i32) -> Self {
        Self { sorting_field }
    }

    /// The key the algorithms sort by
    #[inline]
    pub const fn key(&self) -> i32 {
        self.sorting_field
    }
}

impl From<i32> for Record {
    fn from(sorting_field: i32) -> Self {
        Self::new(sorting_field)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sorting_field)
    }
}

/// Wrap plain integers into records
pub fn records_from<I: IntoIterator<Item = i32>>(values: I) -> Vec<Record> {
    values.into_iter().map(Record::new).collect()
}

/// Extract the sorting keys of a record slice
pub fn keys(records: &[Record]) -> Vec<i32> {
    records.iter().map(Record::key).collect()
}
