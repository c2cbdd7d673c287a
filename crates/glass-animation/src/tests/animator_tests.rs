use std::cell::RefCell;
use std::rc::Rc;

use glass_testing::FrameDriver;

use crate::animation::AnimationSpec;
use crate::animator::*;

#[derive(Clone, Default)]
struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn count(&self, name: &str) -> usize {
        self.0.borrow().iter().filter(|entry| *entry == name).count()
    }
}

impl AnimatorListener for EventLog {
    fn on_start(&mut self) {
        self.0.borrow_mut().push("start".into());
    }

    fn on_end(&mut self) {
        self.0.borrow_mut().push("end".into());
    }

    fn on_cancel(&mut self) {
        self.0.borrow_mut().push("cancel".into());
    }
}

#[test]
fn animator_runs_to_completion_on_frames() {
    let driver = FrameDriver::new();
    let animator = ValueAnimator::of_float(driver.handle(), 0.0, 10.0, AnimationSpec::linear(100));
    let log = EventLog::default();
    animator.add_listener(log.clone());
    let values = Rc::new(RefCell::new(Vec::new()));
    animator.on_update({
        let values = Rc::clone(&values);
        move |value| values.borrow_mut().push(value)
    });

    animator.start();
    assert!(animator.is_running());
    assert_eq!(log.entries(), vec!["start"]);

    driver.advance_by(50);
    assert!(animator.is_running());
    assert!((animator.animated_value() - 5.0).abs() < 0.01);

    driver.advance_by(60);
    assert_eq!(animator.state(), AnimatorState::Ended);
    assert_eq!(animator.animated_value(), 10.0);
    assert_eq!(log.entries(), vec!["start", "end"]);
    assert_eq!(values.borrow().last().copied(), Some(10.0));
    assert!(driver.is_idle());
}

#[test]
fn cancel_is_idempotent_and_skips_end() {
    let driver = FrameDriver::new();
    let animator = ValueAnimator::of_float(driver.handle(), 0.0, 1.0, AnimationSpec::linear(100));
    let log = EventLog::default();
    animator.add_listener(log.clone());

    animator.start();
    driver.advance_by(32);
    animator.cancel();
    animator.cancel();
    driver.advance_by(200);

    assert_eq!(animator.state(), AnimatorState::Cancelled);
    assert_eq!(log.count("cancel"), 1);
    assert_eq!(log.count("end"), 0);
    assert!(driver.is_idle());
}

#[test]
fn cancel_after_completion_is_ignored() {
    let driver = FrameDriver::new();
    let animator = ValueAnimator::of_float(driver.handle(), 0.0, 1.0, AnimationSpec::linear(20));
    let log = EventLog::default();
    animator.add_listener(log.clone());

    animator.start();
    driver.run_until_idle();
    animator.cancel();

    assert_eq!(animator.state(), AnimatorState::Ended);
    assert_eq!(log.entries(), vec!["start", "end"]);
}

#[test]
fn end_jumps_to_final_value() {
    let driver = FrameDriver::new();
    let animator = ValueAnimator::of_float(driver.handle(), 3.0, 7.0, AnimationSpec::default());
    let ends = Rc::new(RefCell::new(0));
    animator.on_end({
        let ends = Rc::clone(&ends);
        move || *ends.borrow_mut() += 1
    });

    animator.start();
    animator.end();
    animator.end();

    assert_eq!(animator.animated_value(), 7.0);
    assert_eq!(*ends.borrow(), 1);
    assert!(driver.is_idle());
}

#[test]
fn listener_may_cancel_during_update() {
    let driver = FrameDriver::new();
    let animator = ValueAnimator::of_float(driver.handle(), 0.0, 1.0, AnimationSpec::linear(100));
    let log = EventLog::default();
    animator.add_listener(log.clone());
    animator.on_update({
        let animator = animator.clone();
        move |value| {
            if value > 0.3 {
                animator.cancel();
            }
        }
    });

    animator.start();
    driver.run_until_idle();

    assert_eq!(animator.state(), AnimatorState::Cancelled);
    assert_eq!(log.count("cancel"), 1);
    assert_eq!(log.count("end"), 0);
}

#[test]
fn dropping_animator_stops_frames() {
    let driver = FrameDriver::new();
    let animator = ValueAnimator::of_float(driver.handle(), 0.0, 1.0, AnimationSpec::linear(100));
    animator.start();
    assert!(!driver.is_idle());
    drop(animator);
    assert!(driver.is_idle());
}
