//! Tween animator driven by the runtime's frame clock.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use glass_core::{FrameCallbackRegistration, RuntimeHandle};

use crate::animation::AnimationSpec;

/// Observer of a [`ValueAnimator`]'s lifecycle.
///
/// `on_end` fires only when the animation completes. A cancelled animation
/// reports `on_cancel` and never `on_end`.
pub trait AnimatorListener {
    fn on_start(&mut self) {}
    fn on_update(&mut self, _value: f32) {}
    fn on_end(&mut self) {}
    fn on_cancel(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running,
    Ended,
    Cancelled,
}

#[derive(Clone, Copy)]
enum AnimatorEvent {
    Start,
    Update(f32),
    End,
    Cancel,
}

struct AnimatorInner {
    runtime: RuntimeHandle,
    from: f32,
    to: f32,
    spec: AnimationSpec,
    value: f32,
    state: AnimatorState,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    listeners: Vec<Box<dyn AnimatorListener>>,
    pending_events: VecDeque<AnimatorEvent>,
    dispatching: bool,
}

/// Animates an `f32` from one value to another over an [`AnimationSpec`].
///
/// Cloning yields another handle to the same animation. Dropping the last
/// handle stops the animation without notifying listeners.
#[derive(Clone)]
pub struct ValueAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

impl ValueAnimator {
    pub fn of_float(runtime: RuntimeHandle, from: f32, to: f32, spec: AnimationSpec) -> Self {
        let inner = AnimatorInner {
            runtime,
            from,
            to,
            spec,
            value: from,
            state: AnimatorState::Idle,
            start_time_nanos: None,
            registration: None,
            listeners: Vec::new(),
            pending_events: VecDeque::new(),
            dispatching: false,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn add_listener(&self, listener: impl AnimatorListener + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }

    /// Registers a closure called with every animated value.
    pub fn on_update(&self, callback: impl FnMut(f32) + 'static) {
        self.add_listener(UpdateListener(callback));
    }

    /// Registers a closure called once when the animation completes.
    pub fn on_end(&self, callback: impl FnMut() + 'static) {
        self.add_listener(EndListener(callback));
    }

    pub fn state(&self) -> AnimatorState {
        self.inner.borrow().state
    }

    pub fn is_running(&self) -> bool {
        self.state() == AnimatorState::Running
    }

    pub fn animated_value(&self) -> f32 {
        self.inner.borrow().value
    }

    pub fn spec(&self) -> AnimationSpec {
        self.inner.borrow().spec
    }

    /// Starts (or restarts) the animation from its initial value.
    pub fn start(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.registration = None;
            inner.start_time_nanos = None;
            inner.value = inner.from;
            inner.state = AnimatorState::Running;
        }
        Self::dispatch(&self.inner, AnimatorEvent::Start);
        if self.is_running() {
            Self::schedule_frame(&self.inner);
        }
    }

    /// Stops a running animation and reports `on_cancel`. No-op otherwise.
    pub fn cancel(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.state != AnimatorState::Running {
                return;
            }
            inner.state = AnimatorState::Cancelled;
            inner.registration = None;
        }
        Self::dispatch(&self.inner, AnimatorEvent::Cancel);
    }

    /// Jumps a running animation to its final value and reports `on_end`.
    pub fn end(&self) {
        let value = {
            let mut inner = self.inner.borrow_mut();
            if inner.state != AnimatorState::Running {
                return;
            }
            inner.state = AnimatorState::Ended;
            inner.registration = None;
            inner.value = inner.to;
            inner.value
        };
        Self::dispatch(&self.inner, AnimatorEvent::Update(value));
        Self::dispatch(&self.inner, AnimatorEvent::End);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatorInner>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if !registration.is_active() {
            log::warn!("animator started without a live runtime");
        }
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatorInner>>, frame_time_nanos: u64) {
        let (value, finished) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if inner.state != AnimatorState::Running {
                return;
            }
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let (progress, finished) = inner
                .spec
                .progress_at(frame_time_nanos.saturating_sub(start_time));
            inner.value = if finished {
                inner.to
            } else {
                inner.from + (inner.to - inner.from) * progress
            };
            if finished {
                inner.state = AnimatorState::Ended;
            }
            (inner.value, finished)
        };

        Self::dispatch(this, AnimatorEvent::Update(value));
        if finished {
            Self::dispatch(this, AnimatorEvent::End);
        } else if this.borrow().state == AnimatorState::Running {
            Self::schedule_frame(this);
        }
    }

    fn dispatch(this: &Rc<RefCell<AnimatorInner>>, event: AnimatorEvent) {
        {
            let mut inner = this.borrow_mut();
            inner.pending_events.push_back(event);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }
        // Listeners run unborrowed so they may call back into the animator;
        // events raised meanwhile are queued and delivered in order.
        loop {
            let (event, mut listeners) = {
                let mut inner = this.borrow_mut();
                match inner.pending_events.pop_front() {
                    Some(event) => (event, std::mem::take(&mut inner.listeners)),
                    None => {
                        inner.dispatching = false;
                        break;
                    }
                }
            };
            for listener in listeners.iter_mut() {
                match event {
                    AnimatorEvent::Start => listener.on_start(),
                    AnimatorEvent::Update(value) => listener.on_update(value),
                    AnimatorEvent::End => listener.on_end(),
                    AnimatorEvent::Cancel => listener.on_cancel(),
                }
            }
            let mut inner = this.borrow_mut();
            listeners.append(&mut inner.listeners);
            inner.listeners = listeners;
        }
    }
}

impl fmt::Debug for ValueAnimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ValueAnimator")
            .field("from", &inner.from)
            .field("to", &inner.to)
            .field("value", &inner.value)
            .field("state", &inner.state)
            .finish()
    }
}

struct UpdateListener<F>(F);

impl<F: FnMut(f32)> AnimatorListener for UpdateListener<F> {
    fn on_update(&mut self, value: f32) {
        (self.0)(value);
    }
}

struct EndListener<F>(F);

impl<F: FnMut()> AnimatorListener for EndListener<F> {
    fn on_end(&mut self) {
        (self.0)();
    }
}
