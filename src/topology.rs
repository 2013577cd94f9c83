//! Host logical-processor enumeration.
//!
//! The count is queried from the OS once and cached; it serves as the
//! validation ceiling for pin requests and the practical upper bound for
//! mask scans. Using the configured (not merely online) processor count
//! keeps the ceiling stable even when cores are hot-unplugged.

use std::sync::OnceLock;

/// Fallback bound used only when the OS query itself fails.
pub const FALLBACK_PROCESSOR_COUNT: usize = 128;

static PROCESSOR_COUNT: OnceLock<usize> = OnceLock::new();

/// Number of logical processors configured on this host. Never zero.
///
/// The first call performs the OS query; later calls return the cached
/// value.
pub fn logical_processor_count() -> usize {
    *PROCESSOR_COUNT.get_or_init(query_processor_count)
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn query_processor_count() -> usize {
    let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_CONF) };
    if n > 0 {
        n as usize
    } else {
        FALLBACK_PROCESSOR_COUNT
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn query_processor_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(FALLBACK_PROCESSOR_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_at_least_one() {
        assert!(logical_processor_count() >= 1);
    }

    #[test]
    fn count_is_stable_across_calls() {
        assert_eq!(logical_processor_count(), logical_processor_count());
    }
}
