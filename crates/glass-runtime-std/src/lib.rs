//! Wall-clock host for the Glass runtime.
//!
//! A blocking loop creates one [`StdRuntime`], passes
//! [`StdRuntime::runtime_handle`] to its widgets and calls
//! [`StdRuntime::pump_frame`] on its own cadence.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use glass_core::{Clock, Runtime, RuntimeHandle, RuntimeScheduler};

/// Remembers that a frame was requested until the host loop asks.
#[derive(Debug, Default)]
pub struct StdScheduler {
    requested: Cell<bool>,
}

impl StdScheduler {
    /// Returns whether a frame was requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.requested.replace(false)
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.requested.set(true);
    }
}

/// Frame timestamps measured from the moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

#[derive(Clone)]
pub struct StdRuntime {
    runtime: Runtime,
    scheduler: Rc<StdScheduler>,
    clock: StdClock,
}

impl StdRuntime {
    pub fn new() -> Self {
        let scheduler = Rc::new(StdScheduler::default());
        Self {
            runtime: Runtime::new(scheduler.clone()),
            scheduler,
            clock: StdClock::new(),
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Whether a frame was requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    /// Whether a frame callback is waiting.
    pub fn needs_frame(&self) -> bool {
        self.runtime.needs_frame()
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Delivers one frame stamped with the time elapsed since this runtime
    /// was created.
    pub fn pump_frame(&self) -> usize {
        self.runtime.pump_frame(&self.clock)
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("frames", &self.runtime.frame_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::thread;
    use std::time::Duration;

    use glass_core::Clock;

    use super::{StdClock, StdRuntime};

    #[test]
    fn frame_request_is_reported_once() {
        let runtime = StdRuntime::new();
        let fired = Rc::new(Cell::new(false));
        let registration = runtime
            .runtime_handle()
            .frame_clock()
            .with_frame_nanos({
                let fired = Rc::clone(&fired);
                move |_| fired.set(true)
            });

        assert!(runtime.take_frame_request());
        assert!(!runtime.take_frame_request());
        assert!(runtime.needs_frame());

        assert_eq!(runtime.pump_frame(), 1);
        assert!(fired.get());
        assert!(!runtime.needs_frame());
        drop(registration);
    }

    #[test]
    fn clock_moves_forward() {
        let clock = StdClock::new();
        let before = clock.now_nanos();
        thread::sleep(Duration::from_millis(2));
        assert!(clock.now_nanos() > before);
    }
}
