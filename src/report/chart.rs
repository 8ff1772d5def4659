//! Chart descriptions built from aggregates.

use crate::aggregate::AggregateSeries;

/// A line chart ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    /// Legend label and y values, one value per x position.
    pub series: Vec<(String, Vec<f64>)>,
    /// One label per x position.
    pub x_labels: Vec<String>,
}

impl ChartSpec {
    /// Compute time per trace for each algorithm.
    pub fn runtime(aggregate: &AggregateSeries) -> Self {
        let series = aggregate
            .series()
            .iter()
            .map(|s| {
                (
                    s.algorithm.replace('-', " "),
                    s.points.values().copied().collect(),
                )
            })
            .collect();
        Self {
            title: "Runtimes by Trace".to_string(),
            x_desc: "Trace Name".to_string(),
            y_desc: "Runtimes [seconds]".to_string(),
            series,
            x_labels: aggregate.axis_labels(),
        }
    }

    /// Mean absolute error per trace, in percent.
    pub fn accuracy(aggregate: &AggregateSeries) -> Self {
        let series = aggregate
            .series()
            .iter()
            .map(|s| {
                (
                    accuracy_legend(&s.algorithm),
                    s.points.values().map(|mae| 100.0 * mae).collect(),
                )
            })
            .collect();
        Self {
            title: "Mean Absolute Error (MAE) by Trace".to_string(),
            x_desc: "Trace Name".to_string(),
            y_desc: "Mean Absolute Error (MAE) [%]".to_string(),
            series,
            x_labels: aggregate.axis_labels(),
        }
    }

    /// Number of x positions needed to show every value.
    pub fn len(&self) -> usize {
        self.series
            .iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest y value, or 0.0 for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .fold(0.0, f64::max)
    }
}

fn accuracy_legend(algorithm: &str) -> String {
    match algorithm {
        "Evicting-Map" => "Evicting Map".to_string(),
        "Fixed-Size-SHARDS" => "Fixed-Size SHARDS".to_string(),
        other => other.replace('-', " "),
    }
}
