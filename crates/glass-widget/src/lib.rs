//! Widgets of the Glass card toolkit.
//!
//! [`CardScrollView`] hosts a [`glass_cards::CardScrollAdapter`] and owns the
//! timing of insertion, deletion and navigation animations. [`Slider`] shows
//! progress and countdown indicators on top of it.

pub mod card_scroll_view;
pub mod slider;

pub use card_scroll_view::{CardScrollView, ScrollerConfig};
pub use slider::{
    Determinate, GracePeriod, GracePeriodListener, Indeterminate, Scroller, Slider, SliderConfig,
    SliderKind,
};

pub mod prelude {
    pub use crate::card_scroll_view::{CardScrollView, ScrollerConfig};
    pub use crate::slider::{GracePeriodListener, Slider, SliderConfig};
    pub use glass_cards::{AnimationKind, CardScrollAdapter};
}

#[cfg(test)]
#[path = "tests/card_scroll_view_tests.rs"]
mod card_scroll_view_tests;

#[cfg(test)]
#[path = "tests/slider_tests.rs"]
mod slider_tests;
