//! Time abstraction traits for platform-agnostic delayed work.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds, saturating at `u64::MAX`.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

impl TimeDuration for core::time::Duration {
    fn as_millis(&self) -> u64 {
        u64::try_from(core::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
    }

    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }
}

/// Trait for a single cancelable delayed-work slot.
///
/// Implement this on top of your executor's timer (a delayable work item, an
/// alarm, a task waiting on a signal). When the delay elapses the host must
/// call back into the owner, e.g. [`LedIndicator::on_timer`].
///
/// There is exactly one slot: scheduling while a fire is pending replaces the
/// pending fire time, it never queues a second one.
///
/// [`LedIndicator::on_timer`]: crate::LedIndicator::on_timer
pub trait DelayedWork<D: TimeDuration> {
    /// Arms the slot to fire once after `delay`, replacing any pending fire.
    fn schedule(&mut self, delay: D);

    /// Disarms the slot. No-op when nothing is pending.
    fn cancel(&mut self);
}
