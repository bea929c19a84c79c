pub mod benchmark;
pub mod dataset;
pub mod dedupe;
pub mod error;
pub mod report;
