//! Quick sort with a last-element pivot and Lomuto partitioning

use crate::config::SortOrder;
use crate::record::Record;
use crate::Sorter;

/// In-place quick sort
///
/// O(n log n) on average, O(n²) on input that is already sorted in either
/// direction since the pivot is always the last record.
pub struct QuickSort;

impl Sorter for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn sort(&self, records: &mut [Record], order: SortOrder) {
        quick_sort(records, order);
    }
}

/// Recurse into the smaller partition, loop on the larger one
fn quick_sort(mut records: &mut [Record], order: SortOrder) {
    while records.len() > 1 {
        let pivot_idx = partition(records, order);
        let (left, right) = records.split_at_mut(pivot_idx);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, order);
            records = right;
        } else {
            quick_sort(right, order);
            records = left;
        }
    }
}

/// Lomuto partition; returns the final pivot position
fn partition(records: &mut [Record], order: SortOrder) -> usize {
    let high = records.len() - 1;
    let pivot = records[high];
    let mut store = 0;

    for j in 0..high {
        if order.precedes(records[j], pivot) {
            records.swap(store, j);
            store += 1;
        }
    }

    records.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{keys, records_from};

    #[test]
    fn test_quick_sort_example() {
        let mut records = records_from([5, 3, 1, 4, 2]);
        QuickSort.sort(&mut records, SortOrder::Ascending);
        assert_eq!(keys(&records), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_quick_sort_descending() {
        let mut records = records_from([5, 3, 1, 4, 2, 3]);
        QuickSort.sort(&mut records, SortOrder::Descending);
        assert_eq!(keys(&records), vec![5, 4, 3, 3, 2, 1]);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut records = records_from([7, 2, 9, 1, 5]);
        let pivot_idx = partition(&mut records, SortOrder::Ascending);
        assert_eq!(pivot_idx, 2);
        assert_eq!(records[pivot_idx].key(), 5);
        assert!(records[..pivot_idx].iter().all(|r| r.key() < 5));
        assert!(records[pivot_idx + 1..].iter().all(|r| r.key() >= 5));
    }

    #[test]
    fn test_quick_sort_worst_case_input() {
        // Sorted input is the O(n²) case; depth must stay bounded regardless
        let mut records = records_from(0..5_000);
        QuickSort.sort(&mut records, SortOrder::Descending);
        assert_eq!(records.first().map(Record::key), Some(4_999));
        assert_eq!(records.last().map(Record::key), Some(0));
        assert!(SortOrder::Descending.is_sorted(&records));
    }
}
