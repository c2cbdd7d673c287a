use std::cell::RefCell;
use std::rc::Rc;

use glass_testing::FrameDriver;

use crate::slider::{GracePeriodListener, Slider, SliderKind};

#[derive(Clone, Default)]
struct RecordingListener {
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingListener {
    fn events(&self) -> Vec<&'static str> {
        self.events.borrow().clone()
    }
}

impl GracePeriodListener for RecordingListener {
    fn on_grace_period_end(&mut self) {
        self.events.borrow_mut().push("end");
    }

    fn on_grace_period_cancel(&mut self) {
        self.events.borrow_mut().push("cancel");
    }
}

#[test]
fn grace_period_ends_after_configured_duration() {
    let driver = FrameDriver::new();
    let slider = Slider::new(driver.handle());
    let listener = RecordingListener::default();

    let grace = slider.start_grace_period(listener.clone());
    assert_eq!(slider.shown_kind(), Some(SliderKind::GracePeriod));

    driver.advance_by(1499);
    assert!(grace.is_running());
    assert!(listener.events().is_empty());
    let progress = grace.progress().expect("countdown running");
    assert!(progress > 0.9 && progress < 1.0);

    driver.advance_by(1);
    assert!(!grace.is_running());
    assert!(!slider.is_shown());
    assert_eq!(listener.events(), vec!["end"]);
}

#[test]
fn cancel_reports_once_and_suppresses_end() {
    let driver = FrameDriver::new();
    let slider = Slider::new(driver.handle());
    let listener = RecordingListener::default();

    let grace = slider.start_grace_period(listener.clone());
    driver.advance_by(500);
    grace.cancel();
    grace.cancel();
    driver.advance_by(2000);

    assert_eq!(listener.events(), vec!["cancel"]);
    assert!(!grace.is_running());
    assert!(driver.is_idle());
}

#[test]
fn cancel_after_completion_is_a_no_op() {
    let driver = FrameDriver::new();
    let slider = Slider::new(driver.handle());
    let listener = RecordingListener::default();

    let grace = slider.start_grace_period(listener.clone());
    driver.run_until_idle();
    grace.cancel();

    assert_eq!(listener.events(), vec!["end"]);
}

#[test]
fn starting_another_slider_cancels_grace_period() {
    let driver = FrameDriver::new();
    let slider = Slider::new(driver.handle());
    let listener = RecordingListener::default();

    let grace = slider.start_grace_period(listener.clone());
    let indeterminate = slider.start_indeterminate();

    assert_eq!(listener.events(), vec!["cancel"]);
    assert!(!grace.is_running());
    assert!(indeterminate.is_shown());
    driver.advance_by(2000);
    assert_eq!(listener.events(), vec!["cancel"]);
}

#[test]
fn listener_may_start_another_slider() {
    struct Restarting {
        slider: Rc<Slider>,
    }

    impl GracePeriodListener for Restarting {
        fn on_grace_period_end(&mut self) {}

        fn on_grace_period_cancel(&mut self) {
            self.slider.start_indeterminate();
        }
    }

    let driver = FrameDriver::new();
    let slider = Rc::new(Slider::new(driver.handle()));
    let grace = slider.start_grace_period(Restarting {
        slider: Rc::clone(&slider),
    });
    grace.cancel();

    assert_eq!(slider.shown_kind(), Some(SliderKind::Indeterminate));
}

#[test]
fn scroller_hides_after_inactivity() {
    let driver = FrameDriver::new();
    let slider = Slider::new(driver.handle());

    let scroller = slider.start_scroller(5.0, 0.0);
    driver.advance_by(600);
    scroller.set_position(2.0);
    assert_eq!(scroller.position(), Some(2.0));

    driver.advance_by(600);
    assert!(scroller.is_shown(), "position change restarts the delay");

    driver.advance_by(400);
    assert!(!scroller.is_shown());
    assert_eq!(scroller.position(), None);
    assert!(!slider.is_shown());
}

#[test]
fn determinate_stays_until_hidden_and_clamps_position() {
    let driver = FrameDriver::new();
    let slider = Slider::new(driver.handle());

    let determinate = slider.start_determinate(5.0, 0.0);
    determinate.set_position(7.5);
    assert_eq!(determinate.position(), Some(5.0));

    driver.advance_by(10_000);
    assert!(determinate.is_shown());

    determinate.hide();
    assert!(!determinate.is_shown());
    assert_eq!(slider.shown_kind(), None);
}

#[test]
fn stale_handles_do_not_touch_newer_slider() {
    let driver = FrameDriver::new();
    let slider = Slider::new(driver.handle());

    let first = slider.start_indeterminate();
    let second = slider.start_indeterminate();
    assert!(!first.is_shown());

    first.hide();
    assert!(second.is_shown());
    second.hide();
    assert!(!slider.is_shown());
}
