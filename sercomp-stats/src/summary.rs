//! Five-Number Summary
//!
//! Reduces a sample series to the (low, open, close, high) shape a
//! candlestick chart binds to. The open/close ranks use truncating
//! floor-division indices into the ascending sort, NOT interpolated
//! percentiles. For tiny series the indices coincide (open == low,
//! close == high); previously recorded logs depend on reproducing those
//! exact values, so the rule is preserved verbatim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rank of the `open` value in the ascending sort.
const OPEN_RANK: f64 = 0.2;

/// Rank of the `close` value in the ascending sort.
const CLOSE_RANK: f64 = 0.8;

/// Errors from summary reduction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    /// The series carried no samples. Empty series are rejected rather than
    /// silently zero-filled.
    #[error("cannot summarize an empty sample series")]
    EmptySeries,
}

/// The (low, open, close, high) reduction of one sample series.
///
/// Invariant: `low <= open <= close <= high` for any non-empty series; a
/// series of one sample collapses all four fields to that sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    /// Minimum sample.
    pub low: f64,
    /// Value at the 20th-percentile rank of the ascending sort.
    pub open: f64,
    /// Value at the 80th-percentile rank of the ascending sort.
    pub close: f64,
    /// Maximum sample.
    pub high: f64,
}

/// Reduce a sample series to its five-number summary.
///
/// Sorts a copy ascending and reads `low`/`high` from the ends and
/// `open`/`close` from `floor(n × 0.2)` / `floor(n × 0.8)`. Reduction is a
/// pure read; the input series is never mutated.
pub fn summarize(samples: &[f64]) -> Result<FiveNumberSummary, SummaryError> {
    if samples.is_empty() {
        return Err(SummaryError::EmptySeries);
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let open_idx = (n as f64 * OPEN_RANK).floor() as usize;
    let close_idx = (n as f64 * CLOSE_RANK).floor() as usize;

    Ok(FiveNumberSummary {
        low: sorted[0],
        open: sorted[open_idx],
        close: sorted[close_idx],
        high: sorted[n - 1],
    })
}
