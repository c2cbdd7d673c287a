//! Single-threaded frame runtime shared by every widget of one screen stack.
//!
//! Widgets never own the runtime. They hold a [`RuntimeHandle`], ask it for
//! a callback on the next frame and let the host decide when that frame
//! happens.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::frame_clock::FrameClock;
use crate::platform::{Clock, RuntimeScheduler};
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64)>;

struct QueuedCallback {
    id: FrameCallbackId,
    callback: FrameCallback,
}

struct RuntimeState {
    scheduler: Rc<dyn RuntimeScheduler>,
    // Ordered by id; ids only grow.
    queue: RefCell<VecDeque<QueuedCallback>>,
    next_id: Cell<FrameCallbackId>,
    frames: Cell<u64>,
}

impl RuntimeState {
    fn enqueue(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let was_idle = {
            let mut queue = self.queue.borrow_mut();
            let was_idle = queue.is_empty();
            queue.push_back(QueuedCallback { id, callback });
            was_idle
        };
        if was_idle {
            self.scheduler.schedule_frame();
        }
        id
    }

    fn remove(&self, id: FrameCallbackId) -> bool {
        let mut queue = self.queue.borrow_mut();
        match queue.iter().position(|queued| queued.id == id) {
            Some(index) => queue.remove(index).is_some(),
            None => false,
        }
    }

    /// Pops the oldest callback registered before `limit`.
    fn pop_before(&self, limit: FrameCallbackId) -> Option<FrameCallback> {
        let mut queue = self.queue.borrow_mut();
        if queue.front().is_some_and(|queued| queued.id < limit) {
            queue.pop_front().map(|queued| queued.callback)
        } else {
            None
        }
    }

    fn deliver(&self, frame_time_nanos: u64) -> usize {
        // Callbacks registered while this frame runs wait for the next one.
        // Callbacks cancelled while it runs never fire.
        let limit = self.next_id.get();
        let mut delivered = 0;
        while let Some(callback) = self.pop_before(limit) {
            callback(frame_time_nanos);
            delivered += 1;
        }
        self.frames.set(self.frames.get() + 1);
        if delivered > 0 {
            log::trace!("frame {} ran {delivered} callbacks", self.frames.get());
        }
        delivered
    }

    fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

/// Owner of the frame-callback queue.
///
/// Cloning shares the same queue. When the last clone is dropped, every
/// [`RuntimeHandle`] becomes inert.
#[derive(Clone)]
pub struct Runtime {
    state: Rc<RuntimeState>,
}

impl Runtime {
    pub fn new(scheduler: Rc<dyn RuntimeScheduler>) -> Self {
        Self {
            state: Rc::new(RuntimeState {
                scheduler,
                queue: RefCell::new(VecDeque::new()),
                next_id: Cell::new(1),
                frames: Cell::new(0),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle(Rc::downgrade(&self.state))
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }

    /// Whether any frame callback is waiting.
    pub fn needs_frame(&self) -> bool {
        self.state.pending() > 0
    }

    /// Number of frames delivered so far.
    pub fn frame_count(&self) -> u64 {
        self.state.frames.get()
    }

    /// Delivers one frame stamped with `clock`'s current reading. Returns
    /// how many callbacks ran.
    pub fn pump_frame(&self, clock: &impl Clock) -> usize {
        self.state.deliver(clock.now_nanos())
    }
}

/// Weak reference to a [`Runtime`]. Every operation is a no-op once the
/// runtime is gone.
#[derive(Clone)]
pub struct RuntimeHandle(Weak<RuntimeState>);

impl RuntimeHandle {
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    pub fn needs_frame(&self) -> bool {
        self.0.upgrade().is_some_and(|state| state.pending() > 0)
    }

    /// Queues `callback` for the next frame. Returns `None` if the runtime
    /// was dropped, in which case the callback is discarded.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let state = self.0.upgrade()?;
        Some(state.enqueue(Box::new(callback)))
    }

    /// Removes a queued callback. Returns `false` if it already ran or was
    /// never queued.
    pub fn cancel_frame_callback(&self, id: FrameCallbackId) -> bool {
        self.0.upgrade().is_some_and(|state| state.remove(id))
    }

    /// Runs every callback queued before this call, oldest first.
    pub fn deliver_frame(&self, frame_time_nanos: u64) -> usize {
        self.0
            .upgrade()
            .map_or(0, |state| state.deliver(frame_time_nanos))
    }

    pub fn pending_frame_callbacks(&self) -> usize {
        self.0.upgrade().map_or(0, |state| state.pending())
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}
