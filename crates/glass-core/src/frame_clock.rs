//! Scoped frame callbacks.

use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;

/// Hands out frame callbacks that are withdrawn when their
/// [`FrameCallbackRegistration`] goes away.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Runs `callback` with the next frame's timestamp in nanoseconds.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        FrameCallbackRegistration {
            id: self.runtime.register_frame_callback(callback),
            runtime: self.runtime.clone(),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| callback(nanos / 1_000_000))
    }
}

/// Pending frame callback, cancelled on drop.
///
/// A registration obtained from a dropped runtime is inactive from the
/// start.
#[must_use = "dropping the registration cancels the callback"]
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        self.withdraw();
    }

    fn withdraw(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.withdraw();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::platform::PollingScheduler;
    use crate::runtime::Runtime;

    fn runtime() -> Runtime {
        Runtime::new(Rc::new(PollingScheduler))
    }

    #[test]
    fn millis_callback_sees_truncated_frame_time() {
        let runtime = runtime();
        let seen = Rc::new(Cell::new(None));
        let registration = runtime.frame_clock().with_frame_millis({
            let seen = Rc::clone(&seen);
            move |millis| seen.set(Some(millis))
        });
        assert!(registration.is_active());

        runtime.handle().deliver_frame(32_999_999);
        assert_eq!(seen.get(), Some(32));
        assert!(!runtime.needs_frame());
    }

    #[test]
    fn dropping_registration_withdraws_callback() {
        let runtime = runtime();
        let fired = Rc::new(Cell::new(false));
        drop(runtime.frame_clock().with_frame_nanos({
            let fired = Rc::clone(&fired);
            move |_| fired.set(true)
        }));

        assert!(!runtime.needs_frame());
        runtime.handle().deliver_frame(1);
        assert!(!fired.get());
    }

    #[test]
    fn callback_queued_during_frame_runs_on_the_next_one() {
        let runtime = runtime();
        let handle = runtime.handle();
        let times = Rc::new(RefCell::new(Vec::new()));
        let chained = Rc::new(RefCell::new(None));
        let _first = handle.frame_clock().with_frame_nanos({
            let times = Rc::clone(&times);
            let chained = Rc::clone(&chained);
            let handle = handle.clone();
            move |time| {
                times.borrow_mut().push(("first", time));
                let times = Rc::clone(&times);
                *chained.borrow_mut() = Some(
                    handle
                        .frame_clock()
                        .with_frame_nanos(move |time| times.borrow_mut().push(("chained", time))),
                );
            }
        });

        handle.deliver_frame(10);
        assert_eq!(*times.borrow(), vec![("first", 10)]);
        handle.deliver_frame(20);
        assert_eq!(*times.borrow(), vec![("first", 10), ("chained", 20)]);
    }
}
