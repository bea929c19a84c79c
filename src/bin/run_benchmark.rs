use std::fs;
use std::process;

use dedupe_benchmark_rs::benchmark::{run_benchmark, BenchmarkConfig};
use dedupe_benchmark_rs::dedupe::{DedupeAlgorithm, DedupeThenSort, SortThenDedupe};
use dedupe_benchmark_rs::report::ResultCollector;

const CHART_PAYLOAD_PATH: &str = "chart.json";

fn main() {
    env_logger::init();

    let config = BenchmarkConfig::default();
    let algorithms: Vec<Box<dyn DedupeAlgorithm>> =
        vec![Box::new(DedupeThenSort), Box::new(SortThenDedupe)];

    let results = match run_benchmark(&config, &algorithms) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Benchmark failed: {}", e);
            process::exit(1);
        }
    };

    let collector = match ResultCollector::from_results(results) {
        Ok(collector) => collector,
        Err(e) => {
            eprintln!("Failed to collect results: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Input: array of {} integers of various duplicate percentages",
        config.total_integer_count
    );
    println!("Output: deduplicated sorted array of integers");
    println!();
    collector.render_table().printstd();

    // The chart payload is consumed by an external renderer; this harness
    // only writes the data.
    let payload = collector.chart_payload(config.total_integer_count);
    let json = match serde_json::to_string_pretty(&payload) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize chart payload: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = fs::write(CHART_PAYLOAD_PATH, json) {
        eprintln!("Failed to write {}: {}", CHART_PAYLOAD_PATH, e);
        process::exit(1);
    }
    println!("\nChart payload written to {}", CHART_PAYLOAD_PATH);
}
