#![warn(missing_docs)]
//! # Sercomp
//!
//! Serializer comparison harness with box-plot log summaries.
//!
//! Two loosely coupled components, communicating only through a persisted
//! text log:
//! - **Measurement harness**: times repeated invocations of pluggable
//!   serialize/deserialize operations: one untimed warm-up, fixed
//!   repetitions, best-effort pause quiescing around each timed run
//! - **Summary log parser**: finds the measurement window in the log and
//!   reduces each series to a (low, open, close, high) record for
//!   candlestick-style visualization
//!
//! ## Quick Start
//!
//! ```
//! use sercomp::prelude::*;
//!
//! let harness = Harness::new(50);
//! let ticks = harness.run(|| -> Result<(), std::io::Error> {
//!     // operation to measure
//!     Ok(())
//! })?;
//! assert_eq!(ticks.len(), 50);
//!
//! let micros: Vec<f64> = ticks.iter().map(|&t| ticks_to_micros(t)).collect();
//! let summary = summarize(&micros)?;
//! assert!(summary.low <= summary.high);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export the harness
pub use sercomp_core::{
    can_quiesce, pin_to_cpu, raise_priority, ticks_to_micros, Harness, QuiesceError, Reservation,
    Timer, DEFAULT_REPETITIONS, DEFAULT_RESERVE_BYTES, TICK_FREQUENCY,
};

// Re-export the reducer
pub use sercomp_stats::{summarize, FiveNumberSummary, SummaryError};

// Re-export the log format
pub use sercomp_report::{
    classify_line, generate_json_chart, normalize_label, parse_log, ChartData, DataLine,
    LineError, LineKind, MeasurementLog, ParseError, START_MARKER, STOP_MARKER,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        parse_log, summarize, ticks_to_micros, ChartData, FiveNumberSummary, Harness,
        MeasurementLog,
    };
}

/// Run the sercomp CLI harness.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     sercomp::run()
/// }
/// ```
pub use sercomp_cli::run;
