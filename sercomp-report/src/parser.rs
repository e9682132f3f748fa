//! Log Parsing
//!
//! Locates the measurement window in a full log text and reduces each data
//! line to a chart point. The scan is two stages: the pure line classifier
//! in [`crate::logline`], and the stateful window fold here. The fold is a
//! single synchronous pass over an in-memory buffer and holds no state
//! between invocations.

use thiserror::Error;

use crate::chart::ChartData;
use crate::labels::normalize_label;
use crate::logline::{classify_line, LineError, LineKind, START_MARKER};
use sercomp_stats::summarize;

/// Errors aborting a whole parse.
///
/// Log corruption must not silently yield a partial chart (a comparison
/// with series quietly missing would mislead), so one bad line fails the
/// entire call.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// A sample token inside the window did not parse as a number.
    #[error("line {line}: sample {token:?} is not a number")]
    InvalidSample {
        /// 1-based line number in the log text.
        line: usize,
        /// The offending token, verbatim.
        token: String,
    },

    /// A data line inside the window carried a name but no samples.
    #[error("line {line}: data line carries no samples")]
    EmptySeries {
        /// 1-based line number in the log text.
        line: usize,
    },
}

impl ParseError {
    fn from_line(err: LineError, line: usize) -> Self {
        match err {
            LineError::InvalidSample { token } => ParseError::InvalidSample { line, token },
        }
    }
}

/// Parse a full log text into chart data.
///
/// The window opens after the first line containing the start marker and
/// closes at the first subsequent stop line; end-of-file is an implicit
/// stop. A log without a start marker parses to empty chart data: "no
/// data", not an error. Lines outside the window are never inspected, so
/// malformed text before the marker cannot fail the parse.
pub fn parse_log(text: &str) -> Result<ChartData, ParseError> {
    let mut lines = text.lines().enumerate();

    if !lines.any(|(_, line)| line.contains(START_MARKER)) {
        return Ok(ChartData::default());
    }

    let mut chart = ChartData::default();
    for (idx, line) in lines {
        match classify_line(line).map_err(|e| ParseError::from_line(e, idx + 1))? {
            LineKind::Stop => break,
            LineKind::Data(data) => {
                let summary =
                    summarize(&data.samples).map_err(|_| ParseError::EmptySeries { line: idx + 1 })?;
                chart.push(normalize_label(&data.name), summary);
            }
            LineKind::Start | LineKind::Ignored => {}
        }
    }

    Ok(chart)
}
