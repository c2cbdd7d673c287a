use std::rc::Rc;

use glass_animation::{AnimationSpec, Easing, ValueAnimator};
use glass_cards::{Card, CardAdapter, CardLayout};
use glass_core::{RuntimeHandle, SoundEffect, SoundPlayer};
use glass_widget::{CardScrollView, GracePeriod, GracePeriodListener, Indeterminate, Slider};

use super::{HostView, Screen, Transition};
use crate::app::DemoContext;

pub const SCROLLER: usize = 0;
pub const DETERMINATE: usize = 1;
pub const GRACE_PERIOD: usize = 2;
pub const INDETERMINATE: usize = 3;

pub const MAX_SLIDER_VALUE: f32 = 5.0;
pub const ANIMATION_DURATION_MILLIS: u64 = 5000;

struct GracePeriodSounds {
    sounds: Rc<dyn SoundPlayer>,
}

impl GracePeriodListener for GracePeriodSounds {
    fn on_grace_period_end(&mut self) {
        self.sounds.play(SoundEffect::Success);
    }

    fn on_grace_period_cancel(&mut self) {
        self.sounds.play(SoundEffect::Dismissed);
    }
}

/// One card per slider kind. Back cancels a running grace period instead of
/// leaving the screen.
pub struct SliderScreen {
    view: CardScrollView<CardAdapter>,
    slider: Slider,
    runtime: RuntimeHandle,
    grace_period: Option<GracePeriod>,
    indeterminate: Option<Indeterminate>,
    position_animator: Option<ValueAnimator>,
}

impl SliderScreen {
    pub fn new(context: &DemoContext) -> Self {
        let cards = [
            "Tap to show a scroller",
            "Tap to show a determinate slider",
            "Tap to start a grace period",
            "Tap to toggle an indeterminate slider",
        ]
        .into_iter()
        .map(|text| Card::new(CardLayout::Text).text(text))
        .collect();
        let view = CardScrollView::new(context.runtime.clone());
        view.set_adapter(CardAdapter::new(cards));
        Self {
            view,
            slider: Slider::new(context.runtime.clone()),
            runtime: context.runtime.clone(),
            grace_period: None,
            indeterminate: None,
            position_animator: None,
        }
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    fn sweep(&mut self, set_position: impl Fn(f32) + 'static) -> ValueAnimator {
        let animator = ValueAnimator::of_float(
            self.runtime.clone(),
            0.0,
            MAX_SLIDER_VALUE,
            AnimationSpec::tween(ANIMATION_DURATION_MILLIS, Easing::EaseInOut),
        );
        animator.on_update(set_position);
        self.position_animator = Some(animator.clone());
        animator
    }

    fn process_slider_request(&mut self, position: usize, context: &DemoContext) {
        match position {
            SCROLLER => {
                // Hides itself a moment after the sweep stops moving it.
                let scroller = self.slider.start_scroller(MAX_SLIDER_VALUE, 0.0);
                self.sweep(move |value| scroller.set_position(value)).start();
            }
            DETERMINATE => {
                let determinate = self.slider.start_determinate(MAX_SLIDER_VALUE, 0.0);
                let animator = self.sweep({
                    let determinate = determinate.clone();
                    move |value| determinate.set_position(value)
                });
                animator.on_end(move || determinate.hide());
                animator.start();
            }
            GRACE_PERIOD => {
                self.grace_period = Some(self.slider.start_grace_period(GracePeriodSounds {
                    sounds: Rc::clone(&context.sounds),
                }));
            }
            INDETERMINATE => match self.indeterminate.take() {
                Some(indeterminate) => indeterminate.hide(),
                None => self.indeterminate = Some(self.slider.start_indeterminate()),
            },
            _ => log::debug!("no slider for card {position}"),
        }
    }
}

impl Screen for SliderScreen {
    fn title(&self) -> &'static str {
        "Slider"
    }

    fn host(&self) -> &dyn HostView {
        &self.view
    }

    fn tap(&mut self, context: &DemoContext) -> Transition {
        if let Some(position) = self.view.tap() {
            context.play(SoundEffect::Tap);
            self.process_slider_request(position, context);
        }
        Transition::Stay
    }

    fn back(&mut self, _context: &DemoContext) -> Transition {
        match self.grace_period.take() {
            Some(grace_period) if grace_period.is_running() => {
                grace_period.cancel();
                Transition::Stay
            }
            _ => Transition::Pop,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use glass_testing::{FrameDriver, RecordingSoundPlayer};
    use glass_widget::SliderKind;

    use super::*;

    fn screen_at(driver: &FrameDriver, card: usize) -> (SliderScreen, DemoContext) {
        let context = DemoContext::new(driver.handle(), Rc::new(RecordingSoundPlayer::new()), 1);
        let mut screen = SliderScreen::new(&context);
        screen.resume();
        for _ in 0..card {
            assert!(screen.host().swipe_forward());
            driver.run_until_idle();
        }
        (screen, context)
    }

    #[test]
    fn determinate_hides_when_sweep_ends() {
        let driver = FrameDriver::new();
        let (mut screen, context) = screen_at(&driver, DETERMINATE);

        screen.tap(&context);
        assert_eq!(screen.slider().shown_kind(), Some(SliderKind::Determinate));
        driver.advance_by(ANIMATION_DURATION_MILLIS - 1);
        assert_eq!(screen.slider().shown_kind(), Some(SliderKind::Determinate));
        driver.advance_by(1);
        assert_eq!(screen.slider().shown_kind(), None);
    }

    #[test]
    fn scroller_hides_after_sweep_settles() {
        let driver = FrameDriver::new();
        let (mut screen, context) = screen_at(&driver, SCROLLER);

        screen.tap(&context);
        driver.advance_by(ANIMATION_DURATION_MILLIS);
        assert_eq!(screen.slider().shown_kind(), Some(SliderKind::Scroller));
        driver.advance_by(1100);
        assert_eq!(screen.slider().shown_kind(), None);
    }

    #[test]
    fn indeterminate_toggles() {
        let driver = FrameDriver::new();
        let (mut screen, context) = screen_at(&driver, INDETERMINATE);

        screen.tap(&context);
        assert_eq!(screen.slider().shown_kind(), Some(SliderKind::Indeterminate));
        screen.tap(&context);
        assert!(!screen.slider().is_shown());
    }

    #[test]
    fn back_leaves_screen_when_no_grace_period_runs() {
        let driver = FrameDriver::new();
        let (mut screen, context) = screen_at(&driver, GRACE_PERIOD);

        assert!(matches!(screen.back(&context), Transition::Pop));
        screen.tap(&context);
        assert!(matches!(screen.back(&context), Transition::Stay));
        assert!(!screen.slider().is_shown());
        assert!(matches!(screen.back(&context), Transition::Pop));
    }
}
