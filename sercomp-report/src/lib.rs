#![warn(missing_docs)]
//! Sercomp Report - Measurement Log & Chart Data
//!
//! Both directions of the log coupling between the harness side and the
//! plotting side:
//! - [`MeasurementLog`] writes `timestamp|LEVEL||message` lines, bracketed
//!   by the start/stop markers
//! - [`parse_log`] finds the measurement window in a full log text and
//!   reduces each data line to a five-number chart point
//! - [`ChartData`] is the parallel labels/points shape a candlestick chart
//!   binds to, with a JSON rendition for external plotters

mod chart;
mod labels;
mod logline;
mod parser;

pub use chart::{generate_json_chart, ChartData};
pub use labels::normalize_label;
pub use logline::{
    classify_line, DataLine, LineError, LineKind, MeasurementLog, FIELD_SEPARATOR,
    SAMPLE_SEPARATOR, START_MARKER, STOP_MARKER,
};
pub use parser::{parse_log, ParseError};
