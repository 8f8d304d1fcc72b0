//! Classic sorting algorithms over integers read from a text file
//!
//! This crate reads whitespace-separated integers from the first N bytes of a
//! `.txt` file, sorts them with bubble, quick, shell or slow sort in either
//! direction, times the sort and writes the result back out.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;
pub mod record;
pub mod ingest;

// Sorting strategies
pub mod bubble_sort;
pub mod quick_sort;
pub mod shell_sort;
pub mod slow_sort;

pub mod args;
pub mod driver;

// Re-export commonly used types
pub use error::{SortError, SortResult};
pub use config::{SortAlgorithm, SortConfig, SortOrder};
pub use driver::{SortDriver, SortReport};
pub use record::Record;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// An in-place sorting strategy
pub trait Sorter {
    /// Short lowercase name used in diagnostics
    fn name(&self) -> &'static str;

    /// Sort `records` in place in the requested order
    fn sort(&self, records: &mut [Record], order: SortOrder);
}

/// Run one sort described by `config`, reporting progress to stdout
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    SortDriver::new(config.clone()).run(&mut out)?;
    Ok(EXIT_SUCCESS)
}
