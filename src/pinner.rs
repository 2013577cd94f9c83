//! Strict vs best-effort pinning.
//!
//! The crate-level functions always report failures. Some deployments
//! prefer the classic convenience contract where a failed pin degrades to
//! "run wherever the scheduler puts you"; [`Pinner`] makes that an
//! explicit, logged choice instead of a hard-coded silence.

use crate::affinity;
use crate::error::AffinityError;

/// How a [`Pinner`] reacts to OS-level pin failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinPolicy {
    /// Propagate every failure to the caller.
    #[default]
    Strict,
    /// Swallow `Os` and `Unsupported` failures after logging a warning.
    /// `InvalidProcessor` still propagates: an out-of-range id is a
    /// caller bug, not an environment limitation.
    BestEffort,
}

/// A copyable handle that applies one [`PinPolicy`] to pin requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pinner {
    policy: PinPolicy,
}

impl Pinner {
    pub const fn new(policy: PinPolicy) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> PinPolicy {
        self.policy
    }

    /// Pin the calling thread to `id` under this pinner's policy.
    pub fn pin_thread(&self, id: usize) -> Result<(), AffinityError> {
        self.apply("thread", id, affinity::pin_current_thread(id))
    }

    /// Pin the calling process to `id` under this pinner's policy.
    pub fn pin_process(&self, id: usize) -> Result<(), AffinityError> {
        self.apply("process", id, affinity::pin_current_process(id))
    }

    fn apply(
        &self,
        scope: &str,
        id: usize,
        result: Result<(), AffinityError>,
    ) -> Result<(), AffinityError> {
        match (self.policy, result) {
            (PinPolicy::BestEffort, Err(err @ (AffinityError::Os(_) | AffinityError::Unsupported))) => {
                log::warn!("best-effort {} pin to processor {} failed: {}", scope, id, err);
                Ok(())
            }
            (_, result) => result,
        }
    }
}
