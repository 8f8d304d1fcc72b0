//! Slow sort: the "multiply and surrender" counterpart of merge sort
//!
//! Sorts both halves recursively, moves the larger of the two half maxima to
//! the end, then sorts everything except the last element again. The running
//! time is not polynomial; keep inputs to a few hundred records.

use crate::config::SortOrder;
use crate::record::Record;
use crate::Sorter;

/// Inputs above this length log a warning before slow sort starts
pub const SLOW_SORT_WARN_LEN: usize = 256;

pub struct SlowSort;

impl Sorter for SlowSort {
    fn name(&self) -> &'static str {
        "slow"
    }

    fn sort(&self, records: &mut [Record], order: SortOrder) {
        if records.len() > SLOW_SORT_WARN_LEN {
            tracing::warn!(
                len = records.len(),
                "slow sort has super-polynomial running time on this input"
            );
        }
        slow_sort(records, order);
    }
}

fn slow_sort(records: &mut [Record], order: SortOrder) {
    let len = records.len();
    if len <= 1 {
        return;
    }

    let high = len - 1;
    let mid = high / 2;
    slow_sort(&mut records[..=mid], order);
    slow_sort(&mut records[mid + 1..], order);

    if order.out_of_order(records[mid], records[high]) {
        records.swap(mid, high);
    }

    slow_sort(&mut records[..high], order);
}
