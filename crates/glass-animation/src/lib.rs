//! Tweens for the Glass card toolkit.
//!
//! A [`ValueAnimator`] moves an `f32` along an [`AnimationSpec`], one step
//! per runtime frame.

pub mod animation;
pub mod animator;

pub use animation::*;
pub use animator::*;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, CubicBezier, Easing};
    pub use crate::animator::{AnimatorListener, AnimatorState, ValueAnimator};
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod animation_tests;

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod animator_tests;
