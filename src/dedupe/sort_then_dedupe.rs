use crate::dedupe::DedupeAlgorithm;

/// Sorts the full array first, then compacts adjacent equal runs in one
/// pass. Dominated by the O(n log n) sort regardless of how many
/// duplicates the input contains.
pub struct SortThenDedupe;

impl DedupeAlgorithm for SortThenDedupe {
    fn run(&self, values: &mut Vec<i64>) {
        values.sort_unstable();

        if values.is_empty() {
            return;
        }

        let mut insert_index = 1;
        let mut previous = values[0];

        for i in 1..values.len() {
            let current = values[i];

            // Skip continuations of a duplicate run.
            if current == previous {
                continue;
            }
            previous = current;

            // Place this unique integer at the next available index.
            values[insert_index] = current;
            insert_index += 1;
        }

        // Shrink the array down to its new length.
        values.truncate(insert_index);
    }

    fn name(&self) -> &str {
        "sort then dedupe"
    }
}
