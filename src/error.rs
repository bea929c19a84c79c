use thiserror::Error;

/// Errors raised by the benchmark harness. Both kinds are fatal and are
/// raised before any measurement begins; nothing is retried.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    /// Invalid harness configuration (non-positive counts, degenerate sweep).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Dataset generation could not produce a well-formed array.
    #[error("dataset generation failed: {0}")]
    Generation(String),
}
