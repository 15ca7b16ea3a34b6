use freq_lens_common::{FreqLensError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: u64,
    pub mean: f64,
    pub stddev: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Descriptive statistics over data already sorted ascending (population
/// stddev, matching the grouped table's whole-sample view).
pub fn summarize_sorted(sorted: &[f64]) -> Result<SummaryStats> {
    if sorted.is_empty() {
        return Err(FreqLensError::EmptyInput(
            "summary statistics need at least one observation".into(),
        ));
    }
    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Ok(SummaryStats {
        count: sorted.len() as u64,
        mean,
        stddev: variance.sqrt(),
        median: median_sorted(sorted),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}
