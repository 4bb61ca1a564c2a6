//! Parallel label/value arrays backing one chart dataset.

use anyhow::{ensure, Result};
use serde::Serialize;

/// Month labels as rendered on the line chart's x-axis.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names used for line chart tooltip titles.
pub const FULL_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday labels the server seeds for the bar chart (school weeks run
/// Monday through Friday).
pub const WEEKDAY_ABBREVS: [&str; 5] = ["M", "T", "W", "Th", "F"];

/// An ordered label sequence with its parallel numeric counts.
///
/// The only invariant enforced is equal length; label content and count
/// ranges are trusted from the page that supplies them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self> {
        ensure!(
            labels.len() == values.len(),
            "chart series length mismatch: {} labels vs {} values",
            labels.len(),
            values.len()
        );
        Ok(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartSeries, FULL_MONTH_NAMES, MONTH_ABBREVS, WEEKDAY_ABBREVS};

    #[test]
    fn test_series_accepts_parallel_arrays() {
        let series = ChartSeries::new(
            MONTH_ABBREVS.map(String::from).to_vec(),
            vec![0.0; 12],
        )
        .unwrap();
        assert_eq!(series.len(), 12);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_series_rejects_length_mismatch() {
        let err = ChartSeries::new(
            WEEKDAY_ABBREVS.map(String::from).to_vec(),
            vec![1.0, 2.0, 3.0],
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_label_constants_line_up() {
        assert_eq!(MONTH_ABBREVS.len(), FULL_MONTH_NAMES.len());
        assert_eq!(FULL_MONTH_NAMES[0], "January");
        assert_eq!(FULL_MONTH_NAMES[11], "December");
    }
}
