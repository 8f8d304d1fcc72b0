//! Input validation and integer ingestion
//!
//! The input file is memory-mapped and only the first `byte_limit` bytes are
//! scanned. Integers are read the way a formatted stream extraction reads
//! them: skip whitespace, take an optional sign and a run of digits, and stop
//! quietly at the first position where that fails.

use crate::error::{SortContext, SortError, SortResult};
use crate::record::Record;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Check that `file_path` ends in `.<expected>` (case-sensitive)
pub fn check_file_format(file_path: &str, expected: &str) -> SortResult<()> {
    match file_path.rfind('.') {
        Some(pos) if &file_path[pos + 1..] == expected => Ok(()),
        _ => Err(SortError::invalid_format(file_path, expected)),
    }
}

/// Read the records found in the first `byte_limit` bytes of `path`
pub fn read_records(path: &Path, byte_limit: usize) -> SortResult<Vec<Record>> {
    let name = path.to_string_lossy();
    let file = File::open(path).with_file_context(&name)?;
    let file_len = file.metadata().with_file_context(&name)?.len();

    if file_len == 0 || byte_limit == 0 {
        debug!(file = %name, file_len, byte_limit, "nothing to scan");
        return Ok(Vec::new());
    }

    // SAFETY: the mapping is read-only and dropped before this function
    // returns; the file is not modified by this process while mapped.
    let mmap = unsafe { Mmap::map(&file) }.with_file_context(&name)?;

    let end = byte_limit.min(mmap.len());
    let records = parse_records(&mmap[..end]);

    debug!(
        file = %name,
        file_len,
        scanned = end,
        records = records.len(),
        "input scanned"
    );
    Ok(records)
}

/// Parse integers from `data` until no more can be read
///
/// A digit run ending at the end of `data` is taken as is, even when the
/// file continues it past the byte limit.
pub fn parse_records(data: &[u8]) -> Vec<Record> {
    let mut records = Vec::new();
    let mut pos = 0;

    while let Some((value, end)) = scan_int(data, pos) {
        records.push(Record::new(value));
        pos = end;
    }

    records
}

/// Whitespace as classified by C `isspace` in the default locale
#[inline]
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Scan one integer starting at `start`; returns the value and end offset
fn scan_int(data: &[u8], start: usize) -> Option<(i32, usize)> {
    let mut pos = start;
    while pos < data.len() && is_space(data[pos]) {
        pos += 1;
    }

    let negative = match data.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits_start = pos;
    let mut magnitude: Option<i64> = Some(0);
    while let Some(&b) = data.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        magnitude = magnitude
            .and_then(|m| m.checked_mul(10))
            .and_then(|m| m.checked_add(i64::from(b - b'0')));
        pos += 1;
    }

    if pos == digits_start {
        return None;
    }

    // Out-of-range literals end the scan like any other unreadable token
    let magnitude = magnitude?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok().map(|v| (v, pos))
}
