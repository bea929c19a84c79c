use prettytable::{row, Table};
use serde::Serialize;

use crate::benchmark::BenchmarkResult;
use crate::error::BenchmarkError;

/// Chart-ready payload for the external chart renderer: one label per
/// density step and one equally long mean-time series per algorithm,
/// aligned index-for-index with the labels.
#[derive(Serialize, Debug, Clone)]
pub struct ChartPayload {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
}

/// Assembles benchmark results into the ordered table and the per-algorithm
/// mean-time series consumed by the report and chart renderers.
///
/// Results must arrive in the order the harness produces them: densities
/// ascending, algorithms interleaved in a fixed order within each density.
pub struct ResultCollector {
    results: Vec<BenchmarkResult>,
    labels: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
}

impl ResultCollector {
    /// Groups the harness output into one density-label axis and one mean
    /// series per algorithm. Fails if the results do not cover every
    /// algorithm at every density.
    pub fn from_results(results: Vec<BenchmarkResult>) -> Result<Self, BenchmarkError> {
        let mut labels: Vec<String> = Vec::new();
        let mut densities: Vec<u32> = Vec::new();
        let mut series: Vec<(String, Vec<f64>)> = Vec::new();

        for result in &results {
            if densities.last() != Some(&result.duplicate_density) {
                densities.push(result.duplicate_density);
                labels.push(format!("{}%", result.duplicate_density));
            }

            match series
                .iter_mut()
                .find(|(name, _)| name == &result.algorithm_name)
            {
                Some((_, data)) => data.push(result.mean_time_ms),
                None => series.push((
                    result.algorithm_name.clone(),
                    vec![result.mean_time_ms],
                )),
            }
        }

        for (name, data) in &series {
            if data.len() != labels.len() {
                return Err(BenchmarkError::Configuration(format!(
                    "results for '{}' cover {} of {} density steps",
                    name,
                    data.len(),
                    labels.len()
                )));
            }
        }

        Ok(ResultCollector {
            results,
            labels,
            series,
        })
    }

    /// One label per density step, in sweep order ("0%", "1%", ...).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Algorithm names in the order they first appear in the results.
    pub fn algorithm_names(&self) -> Vec<&str> {
        self.series.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// The mean-time series for one algorithm, aligned with `labels()`.
    pub fn mean_series(&self, algorithm_name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|(name, _)| name == algorithm_name)
            .map(|(_, data)| data.as_slice())
    }

    /// Builds the tabular report, one row per (algorithm, density).
    pub fn render_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Algorithm", "Duplicates", "Mean Time (ms)", "Samples"]);

        for result in &self.results {
            table.add_row(row![
                result.algorithm_name,
                format!("{}%", result.duplicate_density),
                format!("{:.6}", result.mean_time_ms),
                result.sample_count,
            ]);
        }

        table
    }

    /// Builds the payload for the external chart renderer. Styling beyond
    /// titles and axis labels is the renderer's concern.
    pub fn chart_payload(&self, total_integer_count: usize) -> ChartPayload {
        ChartPayload {
            title: format!(
                "Efficiency of sorting and deduping a shuffled array of {} integers",
                total_integer_count
            ),
            x_axis_label: "Duplicate integers (percentage)".to_string(),
            y_axis_label: "Mean time (ms)".to_string(),
            labels: self.labels.clone(),
            datasets: self
                .series
                .iter()
                .map(|(name, data)| ChartSeries {
                    label: name.clone(),
                    data: data.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, density: u32, mean: f64) -> BenchmarkResult {
        BenchmarkResult {
            algorithm_name: name.to_string(),
            duplicate_density: density,
            mean_time_ms: mean,
            sample_count: 30,
        }
    }

    #[test]
    fn splits_interleaved_results_into_aligned_series() {
        let collector = ResultCollector::from_results(vec![
            result("a", 0, 1.0),
            result("b", 0, 2.0),
            result("a", 50, 3.0),
            result("b", 50, 4.0),
            result("a", 100, 5.0),
            result("b", 100, 6.0),
        ])
        .unwrap();

        assert_eq!(collector.labels(), &["0%", "50%", "100%"]);
        assert_eq!(collector.algorithm_names(), vec!["a", "b"]);
        assert_eq!(collector.mean_series("a"), Some(&[1.0, 3.0, 5.0][..]));
        assert_eq!(collector.mean_series("b"), Some(&[2.0, 4.0, 6.0][..]));
        assert_eq!(collector.mean_series("c"), None);
    }

    #[test]
    fn incomplete_coverage_is_rejected() {
        let collector = ResultCollector::from_results(vec![
            result("a", 0, 1.0),
            result("b", 0, 2.0),
            result("a", 50, 3.0),
        ]);
        assert!(collector.is_err());
    }

    #[test]
    fn chart_payload_carries_one_dataset_per_algorithm() {
        let collector = ResultCollector::from_results(vec![
            result("a", 0, 1.0),
            result("b", 0, 2.0),
        ])
        .unwrap();

        let payload = collector.chart_payload(100);
        assert_eq!(payload.labels, vec!["0%"]);
        assert_eq!(payload.datasets.len(), 2);
        assert_eq!(payload.datasets[0].label, "a");
        assert_eq!(payload.datasets[0].data, vec![1.0]);
        assert!(payload.title.contains("100 integers"));
    }

    #[test]
    fn table_has_one_row_per_result_plus_header() {
        let collector = ResultCollector::from_results(vec![
            result("a", 0, 1.0),
            result("b", 0, 2.0),
        ])
        .unwrap();
        assert_eq!(collector.render_table().len(), 3);
    }
}
