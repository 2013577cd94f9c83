//! CPU affinity utilities: query the lowest eligible logical processor of
//! the calling thread, pin the calling thread to one processor, or pin
//! the whole calling process to one processor.
//!
//! The operations wrap the kernel's per-thread and per-process affinity
//! masks directly (`sched_getaffinity`, `pthread_setaffinity_np`,
//! `sched_setaffinity` on Linux). They are stateless: nothing is cached
//! or coordinated in userspace besides the host topology count used to
//! validate processor identifiers.
//!
//! ```no_run
//! use corepin::{current_processor_id, pin_current_thread};
//!
//! pin_current_thread(0)?;
//! assert_eq!(current_processor_id()?, 0);
//! # Ok::<(), corepin::AffinityError>(())
//! ```
//!
//! On platforms without affinity primitives every operation returns
//! [`AffinityError::Unsupported`]; use [`is_supported`] to probe.

pub mod affinity;
pub mod error;
pub mod pinner;
pub mod topology;

pub use affinity::{current_processor_id, is_supported, pin_current_process, pin_current_thread};
pub use error::AffinityError;
pub use pinner::{PinPolicy, Pinner};
pub use topology::logical_processor_count;
