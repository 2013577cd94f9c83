/// Errors surfaced by the affinity operations.
///
/// The underlying kernel primitives report failure through a return code
/// plus `errno`; every variant here maps one observable failure mode so
/// callers can distinguish "pinned successfully" from "the OS rejected or
/// ignored the request".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffinityError {
    /// The target platform exposes no per-thread/per-process affinity
    /// primitives. The symbols still exist so callers can probe support
    /// at runtime instead of hitting missing-symbol build errors.
    Unsupported,
    /// Pin called with a processor identifier at or above the host's
    /// logical-processor count. Rejected before any kernel call.
    InvalidProcessor { id: usize, max: usize },
    /// The affinity mask scan found no set bit. A successful
    /// `sched_getaffinity` never produces this in practice; it indicates
    /// the kernel returned a zeroed mask.
    MaskEmpty,
    /// An underlying affinity call failed; carries the raw `errno`
    /// captured immediately after the call.
    Os(i32),
}

impl core::fmt::Display for AffinityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "CPU affinity is not supported on this platform"),
            Self::InvalidProcessor { id, max } => {
                write!(f, "processor id {} out of range (host has {} logical processors)", id, max)
            }
            Self::MaskEmpty => write!(f, "affinity mask contains no processors"),
            Self::Os(errno) => write!(f, "affinity syscall failed (errno={})", errno),
        }
    }
}

impl std::error::Error for AffinityError {}

impl AffinityError {
    /// Capture the calling thread's current `errno` as an `Os` error.
    pub(crate) fn last_os_error() -> Self {
        Self::Os(std::io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }
}
