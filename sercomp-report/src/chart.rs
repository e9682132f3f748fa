//! Chart Data
//!
//! The plotting collaborator binds to two parallel ordered sequences,
//! display labels and five-number points, looked up by index.

use serde::{Deserialize, Serialize};
use sercomp_stats::FiveNumberSummary;

/// Labels and points in encounter order, parallel by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Display labels, one per series.
    pub labels: Vec<String>,
    /// Five-number points, parallel to `labels`.
    pub points: Vec<FiveNumberSummary>,
}

impl ChartData {
    /// Append one series.
    pub fn push(&mut self, label: String, point: FiveNumberSummary) {
        self.labels.push(label);
        self.points.push(point);
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the chart holds no series.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Generate a prettified JSON rendition of the chart data.
pub fn generate_json_chart(chart: &ChartData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(chart)
}
