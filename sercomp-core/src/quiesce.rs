//! Best-Effort Pause Quiescing
//!
//! The harness cannot stop the OS from reclaiming or faulting pages in the
//! middle of a timed run, but it can bound that work: before each run it
//! acquires a [`Reservation`], a touched, page-locked buffer of fixed
//! budget, and drops it after the timer stops. When locking is denied
//! (RLIMIT_MEMLOCK, missing CAP_IPC_LOCK, non-Unix platform) the caller is
//! expected to warn and measure anyway: quiescing is a capability, not a
//! dependency.

use thiserror::Error;

/// Default reservation budget: 1 MiB.
pub const DEFAULT_RESERVE_BYTES: usize = 1024 * 1024;

/// Why a reservation could not be acquired.
#[derive(Debug, Error)]
pub enum QuiesceError {
    /// The platform cannot lock pages at all.
    #[error("page locking is not supported on this platform")]
    Unsupported,

    /// The kernel refused to lock the reservation.
    #[error("failed to lock {bytes} reserved bytes: {source}")]
    Lock {
        /// Requested budget in bytes.
        bytes: usize,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

/// Whether this platform can grant reservations at all.
pub const fn can_quiesce() -> bool {
    cfg!(unix)
}

/// A page-locked memory reservation held for the duration of one timed run.
///
/// Dropping the reservation unlocks the pages; any reclaim that triggers
/// happens between runs, outside the timed interval.
pub struct Reservation {
    #[cfg(unix)]
    buf: Box<[u8]>,
}

impl Reservation {
    /// Acquire a reservation of `bytes`.
    ///
    /// Every page is touched before locking so the lock covers resident
    /// memory rather than untouched copy-on-write mappings.
    #[cfg(unix)]
    pub fn acquire(bytes: usize) -> Result<Self, QuiesceError> {
        let mut buf = vec![0u8; bytes.max(1)].into_boxed_slice();

        let page = page_size();
        let mut offset = 0;
        while offset < buf.len() {
            buf[offset] = 1;
            offset += page;
        }

        // SAFETY: buf stays allocated (and therefore mapped) until Drop,
        // where the region is unlocked again.
        let rc = unsafe { libc::mlock(buf.as_ptr().cast(), buf.len()) };
        if rc != 0 {
            return Err(QuiesceError::Lock {
                bytes,
                source: std::io::Error::last_os_error(),
            });
        }

        Ok(Self { buf })
    }

    /// Acquire a reservation of `bytes`.
    #[cfg(not(unix))]
    pub fn acquire(_bytes: usize) -> Result<Self, QuiesceError> {
        Err(QuiesceError::Unsupported)
    }
}

#[cfg(unix)]
impl Drop for Reservation {
    fn drop(&mut self) {
        // SAFETY: the region was locked in acquire and is still mapped.
        unsafe {
            libc::munlock(self.buf.as_ptr().cast(), self.buf.len());
        }
    }
}

#[cfg(unix)]
fn page_size() -> usize {
    let sz = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if sz > 0 { sz as usize } else { 4096 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_matches_platform() {
        assert_eq!(can_quiesce(), cfg!(unix));
    }

    #[test]
    fn test_acquire_is_best_effort() {
        // A single page either locks or fails with the OS error carried
        // along; anything else means the acquire path is broken.
        match Reservation::acquire(4096) {
            Ok(_reservation) => {}
            Err(QuiesceError::Lock { bytes, .. }) => assert_eq!(bytes, 4096),
            Err(QuiesceError::Unsupported) => assert!(!can_quiesce()),
        }
    }

    #[test]
    fn test_zero_budget_still_reserves_a_page() {
        // acquire(0) clamps to one byte so Drop always has a region to unlock
        match Reservation::acquire(0) {
            Ok(_) | Err(QuiesceError::Lock { .. }) => {}
            Err(QuiesceError::Unsupported) => assert!(!can_quiesce()),
        }
    }
}
