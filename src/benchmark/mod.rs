use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::dataset::generate_dataset;
use crate::dedupe::DedupeAlgorithm;
use crate::error::BenchmarkError;

/// Harness configuration: how large the arrays are, which duplicate
/// densities to sweep, and how many trials to time per configuration.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of integers in each generated array.
    pub total_integer_count: usize,
    /// Percentage-point increment between duplicate-density steps.
    pub density_step: u32,
    /// Timed trials per (algorithm, density) configuration.
    pub iterations: usize,
    /// Discarded trials run before measurement to stabilize timings.
    pub warmup_iterations: usize,
    /// Seed for the dataset generator's RNG, for reproducible runs.
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            total_integer_count: 100,
            density_step: 1,
            iterations: 30,
            warmup_iterations: 10,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    /// Checks the configuration before any measurement begins. A zero
    /// iteration count or a zero sweep step would make the run empty or
    /// non-terminating, so both are fatal.
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.total_integer_count == 0 {
            return Err(BenchmarkError::Configuration(
                "total integer count must be positive".to_string(),
            ));
        }
        if self.iterations == 0 {
            return Err(BenchmarkError::Configuration(
                "iteration count must be positive".to_string(),
            ));
        }
        if self.density_step == 0 {
            return Err(BenchmarkError::Configuration(
                "density step must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The ordered duplicate-density sweep: 0%, then every `density_step`
    /// percentage points up to 100%. Requires a validated configuration.
    pub fn density_sweep(&self) -> Vec<u32> {
        (0..=100u32).step_by(self.density_step as usize).collect()
    }
}

/// Aggregated timings for one (algorithm, density) configuration. Created
/// once after all trials for the configuration complete, never mutated.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BenchmarkResult {
    pub algorithm_name: String,
    pub duplicate_density: u32,
    pub mean_time_ms: f64,
    pub sample_count: usize,
}

/// Runs the full density sweep over every algorithm and returns one result
/// per (algorithm, density) configuration.
///
/// Results are ordered by density ascending; within a density, algorithms
/// appear in the order given. For each density one canonical dataset is
/// generated; every trial operates on a fresh clone of it, taken before the
/// timer starts, so clone cost is never part of the measured interval.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    algorithms: &[Box<dyn DedupeAlgorithm>],
) -> Result<Vec<BenchmarkResult>, BenchmarkError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::new();

    for density in config.density_sweep() {
        // Read-only source for per-trial clones; discarded once all trials
        // for this density finish.
        let canonical = generate_dataset(config.total_integer_count, density, &mut rng)?;
        log::info!(
            "benchmarking {} integers at {}% duplicates",
            config.total_integer_count,
            density
        );

        for algorithm in algorithms {
            // Warmup trials are timed by nothing and discarded.
            for _ in 0..config.warmup_iterations {
                let mut trial = canonical.clone();
                algorithm.run(&mut trial);
            }

            let mut total_time = 0.0;
            for _ in 0..config.iterations {
                let mut trial = canonical.clone();

                let start = Instant::now();
                algorithm.run(&mut trial);
                total_time += start.elapsed().as_secs_f64();
            }
            let mean_time_ms = total_time * 1000.0 / config.iterations as f64;
            log::debug!(
                "{} at {}% duplicates: mean {:.6} ms over {} samples",
                algorithm.name(),
                density,
                mean_time_ms,
                config.iterations
            );

            results.push(BenchmarkResult {
                algorithm_name: algorithm.name().to_string(),
                duplicate_density: density,
                mean_time_ms,
                sample_count: config.iterations,
            });
        }
    }

    Ok(results)
}
