//! Bubble sort: repeated adjacent-pair exchange

use crate::config::SortOrder;
use crate::record::Record;
use crate::Sorter;

/// Classic O(n²) bubble sort
///
/// Runs exactly `n - 1` passes; pass `i` walks the first `n - i` records and
/// swaps every adjacent pair that is out of order, so the largest (or
/// smallest, when descending) remaining record settles at the end.
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn sort(&self, records: &mut [Record], order: SortOrder) {
        let n = records.len();
        if n <= 1 {
            return;
        }

        for i in 0..n - 1 {
            for j in 0..n - i - 1 {
                if order.out_of_order(records[j], records[j + 1]) {
                    records.swap(j, j + 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{keys, records_from};

    #[test]
    fn test_bubble_sort_ascending() {
        let mut records = records_from([5, 2, 8, 1, 9, 3, 7, 4, 6]);
        BubbleSort.sort(&mut records, SortOrder::Ascending);
        assert_eq!(keys(&records), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_bubble_sort_descending_with_duplicates() {
        let mut records = records_from([3, -1, 3, 0, -7, 3]);
        BubbleSort.sort(&mut records, SortOrder::Descending);
        assert_eq!(keys(&records), vec![3, 3, 3, 0, -1, -7]);
    }

    #[test]
    fn test_bubble_sort_trivial_inputs() {
        let mut empty: Vec<Record> = Vec::new();
        BubbleSort.sort(&mut empty, SortOrder::Ascending);
        assert!(empty.is_empty());

        let mut single = records_from([42]);
        BubbleSort.sort(&mut single, SortOrder::Descending);
        assert_eq!(keys(&single), vec![42]);
    }
}
