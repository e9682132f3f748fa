//! Elapsed-Time Measurement
//!
//! Timing uses `std::time::Instant`, the highest-resolution monotonic clock
//! the standard library exposes. Elapsed time is reported as an integer tick
//! count; [`TICK_FREQUENCY`] fixes the tick-to-wall-clock conversion.

use std::time::Instant;

/// Ticks per second of the measurement clock.
pub const TICK_FREQUENCY: u64 = 1_000_000_000;

/// Convert a raw tick count to microseconds.
#[inline]
pub fn ticks_to_micros(ticks: u64) -> f64 {
    ticks as f64 / TICK_FREQUENCY as f64 * 1_000_000.0
}

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Timer for one timed run.
///
/// `Instant` is monotonic by the standard library's contract, so `stop`
/// cannot observe a negative interval. A platform clock that went backward
/// would violate a harness precondition, not produce an error value.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed tick count.
    #[inline(always)]
    pub fn stop(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }
}

// ─── Run environment ─────────────────────────────────────────────────────────

/// Pin the current thread to a specific core.
///
/// Keeps the scheduler from migrating the measurement thread mid-batch.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref) != 0 {
            return Err(std::io::Error::last_os_error());
        }
    }

    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    // CPU pinning not supported on this platform
    Ok(())
}

/// Raise the scheduling priority of the current process.
///
/// Needs elevated privileges on most systems; callers treat failure as a
/// warning, not an error.
#[cfg(unix)]
pub fn raise_priority() -> Result<(), std::io::Error> {
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS as _, 0, -10) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn raise_priority() -> Result<(), std::io::Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timer_elapsed() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let ticks = timer.stop();

        // Should be at least 5ms in ticks
        assert!(ticks >= 5_000_000);
        // Should be less than 1s (accounting for scheduling)
        assert!(ticks < 1_000_000_000);
    }

    #[test]
    fn test_timer_monotonic() {
        let timer = Timer::start();
        let a = timer.stop();
        let b = timer.stop();
        assert!(b >= a, "elapsed ticks should never go backward");
    }

    #[test]
    fn test_ticks_to_micros() {
        assert_eq!(ticks_to_micros(0), 0.0);
        assert_eq!(ticks_to_micros(1_000), 1.0);
        assert_eq!(ticks_to_micros(TICK_FREQUENCY), 1_000_000.0);
        assert!((ticks_to_micros(1_500) - 1.5).abs() < f64::EPSILON);
    }
}
