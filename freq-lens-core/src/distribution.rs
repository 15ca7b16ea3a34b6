use freq_lens_common::{FreqLensError, Result};
use serde::{Deserialize, Serialize};

/// One class of the grouped distribution. Limits step in whole class-width
/// units from the minimum; edges are the half-unit display bounds and are
/// never used for membership testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub lower_limit: f64,
    pub upper_limit: f64,
    pub lower_edge: f64,
    pub upper_edge: f64,
    pub midpoint: f64,
    pub frequency: u64,
}

/// Grouped frequency distribution under Sturges' rule. Both the ceiled and
/// the raw class count / width are retained so presenters can show the
/// "rounded up from" audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub sorted_data: Vec<f64>,
    pub min_value: f64,
    pub max_value: f64,
    pub range: f64,
    pub number_of_classes: usize,
    pub raw_number_of_classes: f64,
    pub class_width: u64,
    pub raw_class_width: f64,
    pub classes: Vec<ClassRecord>,
}

impl Distribution {
    /// Tallied observations across all classes. May fall short of
    /// `sorted_data.len()` when the last class stops below the maximum.
    pub fn total_frequency(&self) -> u64 {
        self.classes.iter().map(|c| c.frequency).sum()
    }
}

/// Compute a grouped frequency distribution from a non-empty sequence of
/// finite observations.
///
/// Class count is Sturges' rule `ceil(1 + 3.3*log10(n))` and class width is
/// `ceil(range / count)`, each ceiled independently. That independence is
/// deliberate: the final class's upper limit may fall short of the maximum,
/// leaving the tail observation(s) untallied. Width is clamped to 1 so a
/// zero range (all values identical) still yields advancing classes.
///
/// Pure and deterministic: permuting the input never changes the result.
pub fn compute_frequency_distribution(values: &[f64]) -> Result<Distribution> {
    if values.is_empty() {
        return Err(FreqLensError::EmptyInput(
            "frequency distribution needs at least one observation".into(),
        ));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(FreqLensError::NonFinite(format!(
            "observation {bad} is not a finite number"
        )));
    }

    let mut sorted_data = values.to_vec();
    sorted_data.sort_by(f64::total_cmp);
    let n = sorted_data.len();
    let min_value = sorted_data[0];
    let max_value = sorted_data[n - 1];
    let range = max_value - min_value;

    let raw_number_of_classes = 1.0 + 3.3 * (n as f64).log10();
    let number_of_classes = raw_number_of_classes.ceil() as usize;

    let raw_class_width = range / number_of_classes as f64;
    // ceil(0) = 0 when all values coincide; a zero-width class never advances
    let class_width = (raw_class_width.ceil() as u64).max(1);

    let mut classes = Vec::with_capacity(number_of_classes);
    let mut lower_limit = min_value;
    for _ in 0..number_of_classes {
        let upper_limit = lower_limit + class_width as f64 - 1.0;
        let frequency = sorted_data
            .iter()
            .filter(|&&v| v >= lower_limit && v <= upper_limit)
            .count() as u64;
        classes.push(ClassRecord {
            lower_limit,
            upper_limit,
            lower_edge: lower_limit - 0.5,
            upper_edge: upper_limit + 0.5,
            midpoint: (lower_limit + upper_limit) / 2.0,
            frequency,
        });
        lower_limit = upper_limit + 1.0;
    }

    Ok(Distribution {
        sorted_data,
        min_value,
        max_value,
        range,
        number_of_classes,
        raw_number_of_classes,
        class_width,
        raw_class_width,
        classes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_observation() {
        let d = compute_frequency_distribution(&[1.0]).unwrap();
        assert_eq!(d.raw_number_of_classes, 1.0);
        assert_eq!(d.number_of_classes, 1);
        assert_eq!(d.range, 0.0);
        assert_eq!(d.class_width, 1); // forced minimum, ceil(0) would be 0
        assert_eq!(d.classes.len(), 1);
        assert_eq!(d.classes[0].lower_limit, 1.0);
        assert_eq!(d.classes[0].upper_limit, 1.0);
        assert_eq!(d.classes[0].frequency, 1);
    }

    #[test]
    fn one_through_ten() {
        let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let d = compute_frequency_distribution(&values).unwrap();
        assert_eq!(d.range, 9.0);
        assert!((d.raw_number_of_classes - 4.3).abs() < 1e-9);
        assert_eq!(d.number_of_classes, 5);
        assert!((d.raw_class_width - 1.8).abs() < 1e-9);
        assert_eq!(d.class_width, 2);
        let limits: Vec<(f64, f64)> = d
            .classes
            .iter()
            .map(|c| (c.lower_limit, c.upper_limit))
            .collect();
        assert_eq!(
            limits,
            vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (7.0, 8.0), (9.0, 10.0)]
        );
        assert!(d.classes.iter().all(|c| c.frequency == 2));
        assert_eq!(d.total_frequency(), 10);
    }

    #[test]
    fn identical_duplicates() {
        let d = compute_frequency_distribution(&[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(d.range, 0.0);
        assert_eq!(d.class_width, 1);
        assert_eq!(d.number_of_classes, 3); // ceil(1 + 3.3*log10(3)) = ceil(2.574)
        let freqs: Vec<u64> = d.classes.iter().map(|c| c.frequency).collect();
        assert_eq!(freqs, vec![3, 0, 0]);
        assert_eq!(d.classes[1].lower_limit, 6.0);
        assert_eq!(d.classes[2].upper_limit, 7.0);
    }

    #[test]
    fn permutation_invariant() {
        let a = compute_frequency_distribution(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]).unwrap();
        let b = compute_frequency_distribution(&[9.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0]).unwrap();
        assert_eq!(a.sorted_data, b.sorted_data);
        assert_eq!(a.number_of_classes, b.number_of_classes);
        assert_eq!(a.class_width, b.class_width);
        assert_eq!(a.classes, b.classes);
    }

    #[test]
    fn classes_are_contiguous_with_derived_edges() {
        let values: Vec<f64> = (0..40).map(|v| (v * 3 % 17) as f64).collect();
        let d = compute_frequency_distribution(&values).unwrap();
        for pair in d.classes.windows(2) {
            assert_eq!(pair[0].upper_limit + 1.0, pair[1].lower_limit);
        }
        for c in &d.classes {
            assert_eq!(c.lower_edge, c.lower_limit - 0.5);
            assert_eq!(c.upper_edge, c.upper_limit + 0.5);
            assert_eq!(c.midpoint, (c.lower_limit + c.upper_limit) / 2.0);
        }
    }

    #[test]
    fn tail_coverage_gap_undercounts_maximum() {
        // n=10 -> 5 classes; range 10 -> width 2; classes end at min+9, below max
        let values = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0];
        let d = compute_frequency_distribution(&values).unwrap();
        assert_eq!(d.number_of_classes, 5);
        assert_eq!(d.class_width, 2);
        assert_eq!(d.classes[4].upper_limit, 9.0);
        assert!(d.classes[4].upper_limit < d.max_value);
        assert_eq!(d.total_frequency(), 9); // the 10.0 falls past the last class
    }

    #[test]
    fn fractional_minimum_keeps_integer_stepping() {
        let values = vec![1.5, 2.5, 3.5, 4.5];
        let d = compute_frequency_distribution(&values).unwrap();
        assert_eq!(d.classes[0].lower_limit, 1.5);
        for pair in d.classes.windows(2) {
            assert_eq!(pair[0].upper_limit + 1.0, pair[1].lower_limit);
        }
        let total: u64 = d.total_frequency();
        assert!(total <= 4);
    }

    #[test]
    fn sum_of_frequencies_never_exceeds_n() {
        let values: Vec<f64> = (0..123).map(|v| ((v * 7) % 31) as f64).collect();
        let d = compute_frequency_distribution(&values).unwrap();
        assert!(d.total_frequency() <= values.len() as u64);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = compute_frequency_distribution(&[]).unwrap_err();
        assert!(matches!(err, FreqLensError::EmptyInput(_)));
    }

    #[test]
    fn non_finite_input_is_an_error() {
        let err = compute_frequency_distribution(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, FreqLensError::NonFinite(_)));
        let err = compute_frequency_distribution(&[f64::INFINITY]).unwrap_err();
        assert!(matches!(err, FreqLensError::NonFinite(_)));
    }
}
