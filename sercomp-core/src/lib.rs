#![warn(missing_docs)]
//! Sercomp Core - Measurement Harness
//!
//! This crate provides the timing side of sercomp:
//! - [`Harness`] for warm-up + fixed-repetition measurement batches
//! - Monotonic tick timing with a fixed conversion to microseconds
//! - Best-effort pause quiescing via page-locked memory reservations
//! - CPU affinity pinning and priority raising for stable readings
//!
//! Benchmark noise dominates small differences between encoders; the
//! warm-up and quiesce protocol here exists to make inter-series
//! comparisons meaningful despite that.

mod harness;
mod measure;
mod quiesce;

pub use harness::{Harness, DEFAULT_REPETITIONS};
pub use measure::{pin_to_cpu, raise_priority, ticks_to_micros, Timer, TICK_FREQUENCY};
pub use quiesce::{can_quiesce, QuiesceError, Reservation, DEFAULT_RESERVE_BYTES};
