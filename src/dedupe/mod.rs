pub mod dedupe_then_sort;
pub mod sort_then_dedupe;

pub use dedupe_then_sort::DedupeThenSort;
pub use sort_then_dedupe::SortThenDedupe;

/// Represents a strategy for reducing an integer array to its distinct
/// values in strictly ascending order, in place.
pub trait DedupeAlgorithm {
    /// Transforms `values` into the sorted set of its distinct elements.
    ///
    /// Postconditions: strictly ascending, each distinct input value present
    /// exactly once, length equal to the number of distinct input values.
    fn run(&self, values: &mut Vec<i64>);

    /// Returns the name of the algorithm.
    fn name(&self) -> &str;
}
