//! End-to-end tests for the benchmark harness and result collection.

use dedupe_benchmark_rs::benchmark::{run_benchmark, BenchmarkConfig};
use dedupe_benchmark_rs::dedupe::{DedupeAlgorithm, DedupeThenSort, SortThenDedupe};
use dedupe_benchmark_rs::report::ResultCollector;

fn algorithms() -> Vec<Box<dyn DedupeAlgorithm>> {
    vec![Box::new(DedupeThenSort), Box::new(SortThenDedupe)]
}

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig {
        total_integer_count: 50,
        density_step: 25,
        iterations: 3,
        warmup_iterations: 1,
        seed: 7,
    }
}

#[test]
fn sweep_produces_one_result_per_algorithm_per_density() {
    let results = run_benchmark(&small_config(), &algorithms()).unwrap();

    // 5 densities (0, 25, 50, 75, 100) x 2 algorithms, densities ascending
    // with algorithms interleaved in registration order.
    assert_eq!(results.len(), 10);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.duplicate_density, (i as u32 / 2) * 25);
        let expected_name = if i % 2 == 0 {
            "dedupe then sort"
        } else {
            "sort then dedupe"
        };
        assert_eq!(result.algorithm_name, expected_name);
        assert_eq!(result.sample_count, 3);
        assert!(result.mean_time_ms >= 0.0);
    }
}

#[test]
fn invalid_configuration_fails_before_measurement() {
    let config = BenchmarkConfig {
        iterations: 0,
        ..small_config()
    };
    assert!(run_benchmark(&config, &algorithms()).is_err());

    let config = BenchmarkConfig {
        density_step: 0,
        ..small_config()
    };
    assert!(run_benchmark(&config, &algorithms()).is_err());
}

#[test]
fn collector_aligns_series_with_the_density_sweep() {
    let config = small_config();
    let results = run_benchmark(&config, &algorithms()).unwrap();
    let collector = ResultCollector::from_results(results).unwrap();

    assert_eq!(collector.labels(), &["0%", "25%", "50%", "75%", "100%"]);
    for name in ["dedupe then sort", "sort then dedupe"] {
        let series = collector.mean_series(name).unwrap();
        assert_eq!(series.len(), collector.labels().len());
    }

    let payload = collector.chart_payload(config.total_integer_count);
    assert_eq!(payload.datasets.len(), 2);
    assert!(payload
        .datasets
        .iter()
        .all(|series| series.data.len() == payload.labels.len()));
}

#[test]
fn chart_payload_serializes_to_json() {
    let results = run_benchmark(&small_config(), &algorithms()).unwrap();
    let collector = ResultCollector::from_results(results).unwrap();
    let json = serde_json::to_string(&collector.chart_payload(50)).unwrap();

    assert!(json.contains("\"labels\""));
    assert!(json.contains("\"datasets\""));
    assert!(json.contains("sort then dedupe"));
}
