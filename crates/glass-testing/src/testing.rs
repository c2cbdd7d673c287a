use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glass_core::{Clock, PollingScheduler, Runtime, RuntimeHandle, SoundEffect, SoundPlayer};

/// Default spacing between simulated frames.
pub const FRAME_INTERVAL_MILLIS: u64 = 16;

const MAX_IDLE_FRAMES: usize = 100_000;

/// Headless frame driver for exercising animated widgets in tests.
///
/// `FrameDriver` owns a runtime and a simulated clock. Time only moves when a
/// test asks for it, so animation timing is fully deterministic.
pub struct FrameDriver {
    runtime: Runtime,
    now_nanos: Cell<u64>,
    frame_interval_millis: u64,
}

impl FrameDriver {
    /// Create a driver that steps in [`FRAME_INTERVAL_MILLIS`] frames.
    pub fn new() -> Self {
        Self::with_frame_interval(FRAME_INTERVAL_MILLIS)
    }

    pub fn with_frame_interval(frame_interval_millis: u64) -> Self {
        Self {
            runtime: Runtime::new(Rc::new(PollingScheduler)),
            now_nanos: Cell::new(0),
            frame_interval_millis: frame_interval_millis.max(1),
        }
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime.clone()
    }

    /// Handle passed to widgets under test.
    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Returns whether any frame callback is waiting.
    pub fn is_idle(&self) -> bool {
        !self.runtime.needs_frame()
    }

    /// Deliver one frame at the current simulated time.
    pub fn frame(&self) {
        self.runtime.pump_frame(self);
    }

    /// Advance simulated time by `millis`, delivering a frame at every
    /// interval boundary and at the final instant.
    pub fn advance_by(&self, millis: u64) {
        let target = self.now_nanos.get() + millis * 1_000_000;
        let step = self.frame_interval_millis * 1_000_000;
        self.frame();
        while self.now_nanos.get() < target {
            let next = (self.now_nanos.get() + step).min(target);
            self.now_nanos.set(next);
            self.frame();
        }
    }

    /// Step frames until no callbacks remain. Returns the frames delivered.
    ///
    /// # Panics
    ///
    /// Panics if the runtime is still busy after an implausible number of
    /// frames, which means some animation reschedules itself forever.
    pub fn run_until_idle(&self) -> usize {
        let mut frames = 0;
        self.frame();
        while !self.is_idle() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "runtime still busy after {MAX_IDLE_FRAMES} frames"
            );
            self.now_nanos
                .set(self.now_nanos.get() + self.frame_interval_millis * 1_000_000);
            self.frame();
            frames += 1;
        }
        frames
    }
}

impl Clock for FrameDriver {
    fn now_nanos(&self) -> u64 {
        self.now_nanos.get()
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Sound player that remembers every effect it was asked to play.
#[derive(Clone, Default)]
pub struct RecordingSoundPlayer {
    played: Rc<RefCell<Vec<SoundEffect>>>,
}

impl RecordingSoundPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<SoundEffect> {
        self.played.borrow().clone()
    }

    pub fn last(&self) -> Option<SoundEffect> {
        self.played.borrow().last().copied()
    }

    /// Returns and forgets everything recorded so far.
    pub fn take(&self) -> Vec<SoundEffect> {
        std::mem::take(&mut *self.played.borrow_mut())
    }
}

impl SoundPlayer for RecordingSoundPlayer {
    fn play(&self, effect: SoundEffect) {
        self.played.borrow_mut().push(effect);
    }
}

/// Convenience helper for tests that only need temporary access to a
/// `FrameDriver`.
pub fn run_with_frames<R>(f: impl FnOnce(&FrameDriver) -> R) -> R {
    let driver = FrameDriver::new();
    f(&driver)
}
