//! Hooks the runtime needs from whatever hosts it.

/// Wakes the host loop when frame callbacks are waiting.
pub trait RuntimeScheduler {
    fn schedule_frame(&self);
}

/// Monotonic source of frame timestamps.
///
/// Timestamps are nanoseconds from an arbitrary, fixed origin. Animations
/// only ever look at differences between two readings.
pub trait Clock {
    fn now_nanos(&self) -> u64;

    fn now_millis(&self) -> u64 {
        self.now_nanos() / 1_000_000
    }
}

/// Scheduler for hosts that poll [`crate::Runtime::needs_frame`] instead of
/// being woken.
#[derive(Debug, Default, Clone, Copy)]
pub struct PollingScheduler;

impl RuntimeScheduler for PollingScheduler {
    fn schedule_frame(&self) {}
}
