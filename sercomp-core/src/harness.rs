//! The Measurement Harness
//!
//! Runs a caller-supplied operation a fixed number of times after one untimed
//! warm-up, returning one elapsed-tick sample per timed run. Strictly
//! sequential: no two timed runs overlap, and the quiesce acquire/release
//! pair around each run stays outside the timed interval.

use std::io::{Seek, SeekFrom};

use tracing::warn;

use crate::measure::Timer;
use crate::quiesce::{Reservation, DEFAULT_RESERVE_BYTES};

/// Default number of timed runs per batch.
pub const DEFAULT_REPETITIONS: usize = 250;

/// Configuration and entry points for timed measurement batches.
///
/// A batch is one untimed warm-up plus `repetitions` timed runs of a single
/// operation. The warm-up exists to exclude first-call overhead (lazy
/// initialization, cold caches) from the recorded samples.
#[derive(Debug, Clone)]
pub struct Harness {
    repetitions: usize,
    reserve_bytes: usize,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            reserve_bytes: DEFAULT_RESERVE_BYTES,
        }
    }
}

impl Harness {
    /// Create a harness running `repetitions` timed runs per batch.
    ///
    /// # Panics
    /// Panics if `repetitions` is zero; a batch with no timed runs has no
    /// meaning.
    pub fn new(repetitions: usize) -> Self {
        assert!(repetitions >= 1, "repetition count must be at least 1");
        Self {
            repetitions,
            ..Self::default()
        }
    }

    /// Override the quiesce reservation budget for each timed run.
    pub fn with_reserve_bytes(mut self, bytes: usize) -> Self {
        self.reserve_bytes = bytes;
        self
    }

    /// Number of timed runs per batch.
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Measure `op` over one warm-up and `repetitions` timed runs.
    ///
    /// Returns exactly `repetitions` tick samples in execution order. An
    /// operation failure aborts the batch immediately; a partial sample set
    /// mixed with a failure is not valid input for statistics, so none is
    /// returned.
    pub fn run<F, E>(&self, mut op: F) -> Result<Vec<u64>, E>
    where
        F: FnMut() -> Result<(), E>,
    {
        // Warm-up: executed, never timed, never recorded.
        op()?;

        let mut samples = Vec::with_capacity(self.repetitions);
        for _ in 0..self.repetitions {
            samples.push(self.timed_run(&mut op)?);
        }
        Ok(samples)
    }

    /// Like [`Harness::run`] for operations that write to or read from a
    /// reusable stream.
    ///
    /// The stream's position on entry is the rewind target: the harness seeks
    /// back to it before the warm-up and before every timed run (outside the
    /// timed interval), and leaves the stream at that position on success.
    /// Nothing but the position cursor is touched.
    pub fn run_with_stream<S, F, E>(&self, stream: &mut S, mut op: F) -> Result<Vec<u64>, E>
    where
        S: Seek,
        F: FnMut(&mut S) -> Result<(), E>,
        E: From<std::io::Error>,
    {
        let origin = stream.stream_position()?;

        op(stream)?;
        stream.seek(SeekFrom::Start(origin))?;

        let mut samples = Vec::with_capacity(self.repetitions);
        for _ in 0..self.repetitions {
            let mut one = || op(stream);
            samples.push(self.timed_run(&mut one)?);
            stream.seek(SeekFrom::Start(origin))?;
        }
        Ok(samples)
    }

    /// One timed run: acquire the reservation, time the operation, release.
    fn timed_run<F, E>(&self, op: &mut F) -> Result<u64, E>
    where
        F: FnMut() -> Result<(), E>,
    {
        let reservation = Reservation::acquire(self.reserve_bytes);
        if let Err(err) = &reservation {
            warn!("pause quiescing unavailable, results probably off: {err}");
        }

        let timer = Timer::start();
        op()?;
        let ticks = timer.stop();

        // Unlock after the timer stops so reclaim cost lands between runs.
        drop(reservation);

        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::io::{Cursor, Write};

    #[test]
    fn test_returns_exactly_r_samples() {
        let harness = Harness::new(17);
        let samples: Vec<u64> = harness
            .run(|| Ok::<(), Infallible>(()))
            .expect("no-op cannot fail");
        assert_eq!(samples.len(), 17);
    }

    #[test]
    fn test_warmup_excluded_from_samples() {
        let harness = Harness::new(5);
        let mut invocations = 0u32;
        let samples = harness
            .run(|| {
                invocations += 1;
                Ok::<(), Infallible>(())
            })
            .unwrap();

        // 1 warm-up + 5 timed
        assert_eq!(invocations, 6);
        assert_eq!(samples.len(), 5);
    }

    #[test]
    fn test_operation_failure_aborts_batch() {
        let harness = Harness::new(100);
        let mut invocations = 0u32;
        let result: Result<Vec<u64>, &str> = harness.run(|| {
            invocations += 1;
            if invocations == 3 { Err("encoder fault") } else { Ok(()) }
        });

        assert_eq!(result, Err("encoder fault"));
        // warm-up + 2 timed runs, nothing after the failure
        assert_eq!(invocations, 3);
    }

    #[test]
    fn test_failure_during_warmup() {
        let harness = Harness::new(10);
        let result: Result<Vec<u64>, &str> = harness.run(|| Err("cold fault"));
        assert_eq!(result, Err("cold fault"));
    }

    #[test]
    fn test_samples_are_nonnegative_and_ordered_by_execution() {
        let harness = Harness::new(8);
        let samples = harness
            .run(|| Ok::<(), Infallible>(std::hint::black_box(())))
            .unwrap();
        assert_eq!(samples.len(), 8);
        // u64 ticks are non-negative by construction; the meaningful check
        // is that each run produced a finite, plausible value.
        assert!(samples.iter().all(|&t| t < 10_000_000_000));
    }

    #[test]
    fn test_stream_rewound_between_runs() {
        let harness = Harness::new(4);
        let mut stream = Cursor::new(Vec::new());

        harness
            .run_with_stream(&mut stream, |s| s.write_all(b"payload"))
            .unwrap();

        // Every run overwrote the same region: warm-up + 4 runs, one payload
        assert_eq!(stream.get_ref().len(), "payload".len());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_stream_origin_is_not_start_of_stream() {
        let harness = Harness::new(3);
        let mut stream = Cursor::new(b"header|".to_vec());
        stream.set_position(7);

        harness
            .run_with_stream(&mut stream, |s| s.write_all(b"x"))
            .unwrap();

        // The prefix before the entry position is untouched and the cursor
        // is back where the caller left it.
        assert_eq!(&stream.get_ref()[..7], b"header|");
        assert_eq!(stream.position(), 7);
        assert_eq!(stream.get_ref().len(), 8);
    }

    #[test]
    #[should_panic(expected = "repetition count must be at least 1")]
    fn test_zero_repetitions_rejected() {
        let _ = Harness::new(0);
    }
}
