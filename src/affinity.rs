//! The three affinity operations.
//!
//! Each operation is a one-shot synchronous kernel call with no retry and
//! no state kept inside the crate; the only state touched is the affinity
//! mask the kernel maintains per thread/process. Concurrent calls from
//! different threads pinning themselves are independent. Pinning the
//! *process* from one thread changes what sibling threads observe, which
//! is the semantics of the underlying primitive, not shared state here.
//!
//! All three symbols exist on every target. On platforms without affinity
//! primitives they return [`AffinityError::Unsupported`] rather than
//! disappearing behind conditional compilation, so callers can probe
//! support at runtime via [`is_supported`].

use crate::error::AffinityError;
use crate::topology;

/// Whether this build targets a platform with affinity primitives.
pub const fn is_supported() -> bool {
    cfg!(target_os = "linux")
}

/// Reject processor identifiers at or above the host's logical-processor
/// count before any kernel call is made.
fn check_processor_id(id: usize) -> Result<(), AffinityError> {
    let max = topology::logical_processor_count();
    if id >= max {
        return Err(AffinityError::InvalidProcessor { id, max });
    }
    Ok(())
}

// ─── Linux implementation ─────────────────────────────────────────────────────

#[cfg(target_os = "linux")]
pub use linux_impl::*;

#[cfg(target_os = "linux")]
mod linux_impl {
    use std::mem::{size_of, zeroed};

    use libc::{cpu_set_t, sched_getaffinity, sched_setaffinity, CPU_ISSET, CPU_SET, CPU_SETSIZE};

    use super::check_processor_id;
    use crate::error::AffinityError;

    /// An empty (all bits clear) kernel cpu set.
    fn new_cpu_set() -> cpu_set_t {
        unsafe { zeroed::<cpu_set_t>() }
    }

    /// A cpu set with exactly one bit set — the zero-then-set idiom, so a
    /// pin always fully overwrites the previous mask.
    fn singleton_set(id: usize) -> cpu_set_t {
        let mut set = new_cpu_set();
        unsafe { CPU_SET(id, &mut set) };
        set
    }

    /// Lowest-numbered processor present in `set`, scanning ascending
    /// from 0 over the full kernel mask capacity.
    fn first_set_processor(set: &cpu_set_t) -> Option<usize> {
        (0..CPU_SETSIZE as usize).find(|&id| unsafe { CPU_ISSET(id, set) })
    }

    /// Lowest-numbered logical processor in the calling thread's current
    /// affinity mask.
    ///
    /// Pid 0 names the calling thread for `sched_getaffinity`. After a
    /// singleton pin this is exactly the processor the thread runs on.
    /// A zeroed mask (never produced by a successful kernel call in
    /// practice) yields [`AffinityError::MaskEmpty`].
    pub fn current_processor_id() -> Result<usize, AffinityError> {
        let mut set = new_cpu_set();
        let rc = unsafe { sched_getaffinity(0, size_of::<cpu_set_t>(), &mut set) };
        if rc != 0 {
            return Err(AffinityError::last_os_error());
        }
        first_set_processor(&set).ok_or(AffinityError::MaskEmpty)
    }

    /// Pin the calling thread to `id`.
    ///
    /// From this point the thread is eligible to run only on `id`, until
    /// a later call changes the mask again (last-write-wins).
    pub fn pin_current_thread(id: usize) -> Result<(), AffinityError> {
        check_processor_id(id)?;
        let set = singleton_set(id);
        // pthread_setaffinity_np reports failure as a returned error
        // number, not through errno.
        let rc = unsafe {
            libc::pthread_setaffinity_np(libc::pthread_self(), size_of::<cpu_set_t>(), &set)
        };
        if rc != 0 {
            return Err(AffinityError::Os(rc));
        }
        log::trace!("pinned calling thread to processor {}", id);
        Ok(())
    }

    /// Pin the calling process to `id`.
    ///
    /// Uses `sched_setaffinity` with the self-referential pid 0, the
    /// process-scoped counterpart of the thread pin.
    pub fn pin_current_process(id: usize) -> Result<(), AffinityError> {
        check_processor_id(id)?;
        let set = singleton_set(id);
        let rc = unsafe { sched_setaffinity(0, size_of::<cpu_set_t>(), &set) };
        if rc != 0 {
            return Err(AffinityError::last_os_error());
        }
        log::trace!("pinned calling process to processor {}", id);
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn empty_set_has_no_first_processor() {
            let set = new_cpu_set();
            assert_eq!(first_set_processor(&set), None);
        }

        #[test]
        fn singleton_set_scans_to_its_bit() {
            assert_eq!(first_set_processor(&singleton_set(0)), Some(0));
            assert_eq!(first_set_processor(&singleton_set(3)), Some(3));
        }

        #[test]
        fn singleton_set_holds_exactly_one_bit() {
            let set = singleton_set(2);
            let count = (0..CPU_SETSIZE as usize)
                .filter(|&id| unsafe { CPU_ISSET(id, &set) })
                .count();
            assert_eq!(count, 1);
        }
    }
}

// ─── Non-Linux stubs ──────────────────────────────────────────────────────────

#[cfg(not(target_os = "linux"))]
pub fn current_processor_id() -> Result<usize, AffinityError> {
    Err(AffinityError::Unsupported)
}

#[cfg(not(target_os = "linux"))]
pub fn pin_current_thread(id: usize) -> Result<(), AffinityError> {
    check_processor_id(id)?;
    Err(AffinityError::Unsupported)
}

#[cfg(not(target_os = "linux"))]
pub fn pin_current_process(id: usize) -> Result<(), AffinityError> {
    check_processor_id(id)?;
    Err(AffinityError::Unsupported)
}
