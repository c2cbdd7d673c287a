//! One module per sample screen.

use glass_cards::{CardScrollAdapter, CardView};
use glass_widget::CardScrollView;

use crate::app::DemoContext;

pub mod card_scroll_view;
pub mod cards;
pub mod embedded_layout;
pub mod main_menu;
pub mod slider;
pub mod text_appearance;
pub mod voice_menu;

pub use card_scroll_view::{CardScrollViewScreen, ScrollAction};
pub use cards::CardsScreen;
pub use embedded_layout::EmbeddedLayoutScreen;
pub use main_menu::{MainMenuScreen, MenuItem};
pub use slider::SliderScreen;
pub use text_appearance::TextAppearanceScreen;
pub use voice_menu::{VoiceMenuScreen, VoicePicture};

/// What the screen stack should do after an input.
pub enum Transition {
    Stay,
    Push(Box<dyn Screen>),
    Pop,
}

/// Adapter-independent view of a screen's card scroll view.
pub trait HostView {
    fn activate(&self);
    fn deactivate(&self);
    fn swipe_forward(&self) -> bool;
    fn swipe_back(&self) -> bool;
    fn is_animating(&self) -> bool;
    fn selected_position(&self) -> Option<usize>;
    fn count(&self) -> usize;
    fn current_view(&self) -> Option<CardView>;
}

impl<A: CardScrollAdapter + 'static> HostView for CardScrollView<A> {
    fn activate(&self) {
        CardScrollView::activate(self);
    }

    fn deactivate(&self) {
        CardScrollView::deactivate(self);
    }

    fn swipe_forward(&self) -> bool {
        CardScrollView::swipe_forward(self)
    }

    fn swipe_back(&self) -> bool {
        CardScrollView::swipe_back(self)
    }

    fn is_animating(&self) -> bool {
        CardScrollView::is_animating(self)
    }

    fn selected_position(&self) -> Option<usize> {
        CardScrollView::selected_position(self)
    }

    fn count(&self) -> usize {
        CardScrollView::count(self)
    }

    fn current_view(&self) -> Option<CardView> {
        CardScrollView::current_view(self)
    }
}

/// A sample screen. The card scroll view is activated while the screen is
/// on top of the stack.
pub trait Screen {
    fn title(&self) -> &'static str;

    fn host(&self) -> &dyn HostView;

    fn tap(&mut self, context: &DemoContext) -> Transition;

    fn back(&mut self, _context: &DemoContext) -> Transition {
        Transition::Pop
    }

    /// Handles a spoken command. Returns `false` if it was not accepted.
    fn voice(&mut self, _command: &str, _context: &DemoContext) -> bool {
        false
    }

    fn resume(&mut self) {
        self.host().activate();
    }

    fn pause(&mut self) {
        self.host().deactivate();
    }
}
