use rand::rngs::StdRng;
use rand::Rng;

use crate::error::BenchmarkError;

/// Generates a shuffled array of `total_count` integers at the requested
/// duplicate density.
///
/// `density` is a percentage in `[0, 100]`: for a total of N slots,
/// `floor(N * density / 100)` of them hold duplicates of a smaller value
/// set. The number of distinct values is `max(1, N - duplicates)`, each
/// value lies in `[0, distinct_count)`, and slot `i` is assigned
/// `i % distinct_count` before shuffling.
pub fn generate_dataset(
    total_count: usize,
    density: u32,
    rng: &mut StdRng,
) -> Result<Vec<i64>, BenchmarkError> {
    if total_count == 0 {
        return Err(BenchmarkError::Generation(
            "total integer count must be positive".to_string(),
        ));
    }
    if density > 100 {
        return Err(BenchmarkError::Generation(format!(
            "duplicate density {}% exceeds 100%",
            density
        )));
    }

    let duplicate_count = total_count * density as usize / 100;
    let distinct_count = (total_count - duplicate_count).max(1);

    // Repeat the value sequence 0..distinct_count across all N slots.
    let mut values: Vec<i64> = (0..total_count)
        .map(|i| (i % distinct_count) as i64)
        .collect();

    shuffle(&mut values, rng);

    Ok(values)
}

/// Uniform in-place Fisher-Yates shuffle: the outer counter runs from
/// `len - 1` down to 1 and each element is swapped with a uniformly random
/// index in `[0, i]` inclusive, so no iteration addresses an invalid slot.
fn shuffle(values: &mut [i64], rng: &mut StdRng) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}
