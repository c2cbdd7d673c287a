//! Progress and countdown indicators shown on top of a card scroll view.
//!
//! At most one indicator is shown per [`Slider`]; starting any indicator
//! hides the one currently shown. Handles returned by the `start_*` methods
//! stay valid after their indicator is hidden, they just stop doing anything.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glass_animation::{AnimationSpec, ValueAnimator};
use glass_core::RuntimeHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderConfig {
    /// Length of the grace-period countdown.
    pub grace_period_millis: u64,
    /// A scroller hides itself after this long without a position change.
    pub scroller_hide_delay_millis: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            grace_period_millis: 1500,
            scroller_hide_delay_millis: 1000,
        }
    }
}

/// Receives the outcome of a grace period. Exactly one of the two methods is
/// called, at most once.
pub trait GracePeriodListener {
    fn on_grace_period_end(&mut self);
    fn on_grace_period_cancel(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderKind {
    Scroller,
    Determinate,
    GracePeriod,
    Indeterminate,
}

enum Indicator {
    Scroller {
        max: f32,
        position: f32,
        hide_timer: ValueAnimator,
    },
    Determinate {
        max: f32,
        position: f32,
    },
    GracePeriod {
        countdown: ValueAnimator,
        listener: Box<dyn GracePeriodListener>,
    },
    Indeterminate,
}

impl Indicator {
    fn kind(&self) -> SliderKind {
        match self {
            Indicator::Scroller { .. } => SliderKind::Scroller,
            Indicator::Determinate { .. } => SliderKind::Determinate,
            Indicator::GracePeriod { .. } => SliderKind::GracePeriod,
            Indicator::Indeterminate => SliderKind::Indeterminate,
        }
    }

    fn position(&self) -> Option<f32> {
        match self {
            Indicator::Scroller { position, .. } | Indicator::Determinate { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }

    fn max(&self) -> Option<f32> {
        match self {
            Indicator::Scroller { max, .. } | Indicator::Determinate { max, .. } => Some(*max),
            _ => None,
        }
    }
}

struct Shown {
    token: u64,
    indicator: Indicator,
}

struct SliderInner {
    runtime: RuntimeHandle,
    config: SliderConfig,
    shown: Option<Shown>,
    next_token: u64,
}

type SharedSlider = Rc<RefCell<SliderInner>>;

/// Hides `shown`. A running grace period reports a cancel.
///
/// Must be called with the slider unborrowed; listeners may start another
/// indicator.
fn dismiss(shown: Shown) {
    match shown.indicator {
        Indicator::Scroller { hide_timer, .. } => hide_timer.cancel(),
        Indicator::GracePeriod {
            countdown,
            mut listener,
        } => {
            countdown.cancel();
            log::debug!("grace period cancelled");
            listener.on_grace_period_cancel();
        }
        Indicator::Determinate { .. } | Indicator::Indeterminate => {}
    }
}

fn take_shown(slider: &SharedSlider, token: u64) -> Option<Shown> {
    let mut inner = slider.borrow_mut();
    match &inner.shown {
        Some(shown) if shown.token == token => inner.shown.take(),
        _ => None,
    }
}

fn hide_token(slider: &Weak<RefCell<SliderInner>>, token: u64) {
    let Some(slider) = slider.upgrade() else {
        return;
    };
    if let Some(shown) = take_shown(&slider, token) {
        log::debug!("{:?} slider hidden", shown.indicator.kind());
        dismiss(shown);
    }
}

fn with_indicator<R>(
    slider: &Weak<RefCell<SliderInner>>,
    token: u64,
    f: impl FnOnce(&mut Indicator) -> R,
) -> Option<R> {
    let slider = slider.upgrade()?;
    let mut inner = slider.borrow_mut();
    match inner.shown.as_mut() {
        Some(shown) if shown.token == token => Some(f(&mut shown.indicator)),
        _ => None,
    }
}

/// Indicator host attached to one card scroll view.
pub struct Slider {
    inner: SharedSlider,
}

impl Slider {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self::with_config(runtime, SliderConfig::default())
    }

    pub fn with_config(runtime: RuntimeHandle, config: SliderConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SliderInner {
                runtime,
                config,
                shown: None,
                next_token: 0,
            })),
        }
    }

    pub fn config(&self) -> SliderConfig {
        self.inner.borrow().config
    }

    pub fn shown_kind(&self) -> Option<SliderKind> {
        self.inner
            .borrow()
            .shown
            .as_ref()
            .map(|shown| shown.indicator.kind())
    }

    pub fn is_shown(&self) -> bool {
        self.inner.borrow().shown.is_some()
    }

    /// Hides whatever is shown, cancelling a running grace period.
    pub fn hide(&self) {
        let shown = self.inner.borrow_mut().shown.take();
        if let Some(shown) = shown {
            dismiss(shown);
        }
    }

    /// Installs `indicator` under a fresh token and dismisses the previous
    /// one.
    fn show(&self, token: u64, indicator: Indicator) {
        log::debug!("{:?} slider shown", indicator.kind());
        let previous = self
            .inner
            .borrow_mut()
            .shown
            .replace(Shown { token, indicator });
        if let Some(previous) = previous {
            dismiss(previous);
        }
    }

    fn next_token(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let token = inner.next_token;
        inner.next_token += 1;
        token
    }

    fn timer(&self, millis: u64, on_end: impl FnMut() + 'static) -> ValueAnimator {
        let runtime = self.inner.borrow().runtime.clone();
        let timer = ValueAnimator::of_float(runtime, 0.0, 1.0, AnimationSpec::linear(millis));
        timer.on_end(on_end);
        timer
    }

    /// Shows a position indicator in `0..=max` that hides itself after a
    /// period without position changes.
    pub fn start_scroller(&self, max: f32, position: f32) -> Scroller {
        let token = self.next_token();
        let weak = Rc::downgrade(&self.inner);
        let hide_timer = self.timer(self.config().scroller_hide_delay_millis, move || {
            hide_token(&weak, token);
        });
        self.show(
            token,
            Indicator::Scroller {
                max,
                position: position.clamp(0.0, max),
                hide_timer: hide_timer.clone(),
            },
        );
        hide_timer.start();
        Scroller {
            slider: Rc::downgrade(&self.inner),
            token,
        }
    }

    /// Shows a position indicator in `0..=max` that stays until hidden.
    pub fn start_determinate(&self, max: f32, position: f32) -> Determinate {
        let token = self.next_token();
        self.show(
            token,
            Indicator::Determinate {
                max,
                position: position.clamp(0.0, max),
            },
        );
        Determinate {
            slider: Rc::downgrade(&self.inner),
            token,
        }
    }

    /// Starts a countdown that reports to `listener` when it completes or
    /// is cancelled.
    pub fn start_grace_period(&self, listener: impl GracePeriodListener + 'static) -> GracePeriod {
        let token = self.next_token();
        let weak = Rc::downgrade(&self.inner);
        let countdown = self.timer(self.config().grace_period_millis, move || {
            let Some(slider) = weak.upgrade() else {
                return;
            };
            let Some(shown) = take_shown(&slider, token) else {
                return;
            };
            drop(slider);
            if let Indicator::GracePeriod { mut listener, .. } = shown.indicator {
                log::debug!("grace period ended");
                listener.on_grace_period_end();
            }
        });
        self.show(
            token,
            Indicator::GracePeriod {
                countdown: countdown.clone(),
                listener: Box::new(listener),
            },
        );
        countdown.start();
        GracePeriod {
            slider: Rc::downgrade(&self.inner),
            token,
        }
    }

    /// Shows an activity indicator until hidden.
    pub fn start_indeterminate(&self) -> Indeterminate {
        let token = self.next_token();
        self.show(token, Indicator::Indeterminate);
        Indeterminate {
            slider: Rc::downgrade(&self.inner),
            token,
        }
    }
}

/// Handle to a self-hiding position indicator.
#[derive(Clone)]
pub struct Scroller {
    slider: Weak<RefCell<SliderInner>>,
    token: u64,
}

impl Scroller {
    pub fn is_shown(&self) -> bool {
        with_indicator(&self.slider, self.token, |_| ()).is_some()
    }

    pub fn position(&self) -> Option<f32> {
        with_indicator(&self.slider, self.token, |indicator| indicator.position()).flatten()
    }

    pub fn max(&self) -> Option<f32> {
        with_indicator(&self.slider, self.token, |indicator| indicator.max()).flatten()
    }

    /// Moves the indicator and restarts the auto-hide delay.
    pub fn set_position(&self, value: f32) {
        let timer = with_indicator(&self.slider, self.token, |indicator| match indicator {
            Indicator::Scroller {
                max,
                position,
                hide_timer,
            } => {
                *position = value.clamp(0.0, *max);
                Some(hide_timer.clone())
            }
            _ => None,
        })
        .flatten();
        if let Some(timer) = timer {
            timer.start();
        }
    }

    pub fn hide(&self) {
        hide_token(&self.slider, self.token);
    }
}

/// Handle to a position indicator that stays until hidden.
#[derive(Clone)]
pub struct Determinate {
    slider: Weak<RefCell<SliderInner>>,
    token: u64,
}

impl Determinate {
    pub fn is_shown(&self) -> bool {
        with_indicator(&self.slider, self.token, |_| ()).is_some()
    }

    pub fn position(&self) -> Option<f32> {
        with_indicator(&self.slider, self.token, |indicator| indicator.position()).flatten()
    }

    pub fn set_position(&self, value: f32) {
        with_indicator(&self.slider, self.token, |indicator| {
            if let Indicator::Determinate { max, position } = indicator {
                *position = value.clamp(0.0, *max);
            }
        });
    }

    pub fn hide(&self) {
        hide_token(&self.slider, self.token);
    }
}

/// Handle to a grace-period countdown.
#[derive(Clone)]
pub struct GracePeriod {
    slider: Weak<RefCell<SliderInner>>,
    token: u64,
}

impl GracePeriod {
    pub fn is_running(&self) -> bool {
        with_indicator(&self.slider, self.token, |_| ()).is_some()
    }

    /// Elapsed share of the countdown, `None` once it is over.
    pub fn progress(&self) -> Option<f32> {
        with_indicator(&self.slider, self.token, |indicator| match indicator {
            Indicator::GracePeriod { countdown, .. } => Some(countdown.animated_value()),
            _ => None,
        })
        .flatten()
    }

    /// Cancels the countdown and reports `on_grace_period_cancel`.
    ///
    /// Does nothing if the grace period already ended or was cancelled.
    pub fn cancel(&self) {
        hide_token(&self.slider, self.token);
    }
}

/// Handle to an activity indicator.
#[derive(Clone)]
pub struct Indeterminate {
    slider: Weak<RefCell<SliderInner>>,
    token: u64,
}

impl Indeterminate {
    pub fn is_shown(&self) -> bool {
        with_indicator(&self.slider, self.token, |_| ()).is_some()
    }

    pub fn hide(&self) {
        hide_token(&self.slider, self.token);
    }
}
