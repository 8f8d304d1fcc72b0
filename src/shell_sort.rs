//! Shell sort with the halving gap sequence n/2, n/4, ..., 1

use crate::config::SortOrder;
use crate::record::Record;
use crate::Sorter;

pub struct ShellSort;

impl Sorter for ShellSort {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn sort(&self, records: &mut [Record], order: SortOrder) {
        let n = records.len();
        let mut gap = n / 2;

        while gap > 0 {
            // Gapped insertion sort: shift larger elements right by `gap`
            for i in gap..n {
                let key = records[i];
                let mut j = i;

                while j >= gap && order.out_of_order(records[j - gap], key) {
                    records[j] = records[j - gap];
                    j -= gap;
                }

                records[j] = key;
            }
            gap /= 2;
        }
    }
}
