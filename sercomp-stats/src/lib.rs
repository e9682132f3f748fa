#![warn(missing_docs)]
//! Sercomp Statistical Reduction
//!
//! Turns raw per-run timing samples into the five-number summaries
//! (min, 20th-percentile open, 80th-percentile close, max) that drive
//! box-and-whisker / candlestick visualization of benchmark series.

mod summary;

pub use summary::{summarize, FiveNumberSummary, SummaryError};
