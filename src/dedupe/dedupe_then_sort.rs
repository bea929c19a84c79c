use rustc_hash::FxHashSet;

use crate::dedupe::DedupeAlgorithm;

/// Compacts the array to its first-occurrence unique values in one pass,
/// then sorts the compacted array. The pass is O(n) and the sort is
/// O(k log k) over the k distinct values, so this strategy wins when
/// duplicates dominate the input.
pub struct DedupeThenSort;

impl DedupeAlgorithm for DedupeThenSort {
    fn run(&self, values: &mut Vec<i64>) {
        let mut seen = FxHashSet::default();
        let mut insert_index = 0;

        for i in 0..values.len() {
            let value = values[i];

            // Skip integers we've already seen.
            if !seen.insert(value) {
                continue;
            }

            // Place this unique integer at the next available index.
            values[insert_index] = value;
            insert_index += 1;
        }

        // Shrink the array down to the unique values, still in
        // first-occurrence order.
        values.truncate(insert_index);

        values.sort_unstable();
    }

    fn name(&self) -> &str {
        "dedupe then sort"
    }
}
