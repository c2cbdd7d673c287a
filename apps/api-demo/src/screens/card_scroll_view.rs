use glass_cards::{AnimationKind, Card, CardLayout, MutableCardAdapter};
use glass_core::SoundEffect;
use glass_widget::CardScrollView;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::{HostView, Screen, Transition};
use crate::app::DemoContext;

/// What tapping a card in the mutation demo does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    DeleteHere,
    NavigateToStart,
    NavigateToEnd,
    InsertAtStart,
    InsertBefore,
    InsertAfter,
    InsertAtEnd,
    NoAction,
}

impl ScrollAction {
    pub const ALL: [ScrollAction; 8] = [
        ScrollAction::DeleteHere,
        ScrollAction::NavigateToStart,
        ScrollAction::NavigateToEnd,
        ScrollAction::InsertAtStart,
        ScrollAction::InsertBefore,
        ScrollAction::InsertAfter,
        ScrollAction::InsertAtEnd,
        ScrollAction::NoAction,
    ];

    pub fn text(self) -> &'static str {
        match self {
            ScrollAction::DeleteHere => "Tap to delete this card",
            ScrollAction::NavigateToStart => "Tap to go to the first card",
            ScrollAction::NavigateToEnd => "Tap to go to the last card",
            ScrollAction::InsertAtStart => "Tap to insert a card at the start",
            ScrollAction::InsertBefore => "Tap to insert a card before this one",
            ScrollAction::InsertAfter => "Tap to insert a card after this one",
            ScrollAction::InsertAtEnd => "Tap to insert a card at the end",
            ScrollAction::NoAction => "Tapping this card does nothing",
        }
    }

    pub fn image(self) -> String {
        format!("codemonkey{}", self as usize + 1)
    }

    pub fn card(self) -> Card {
        Card::new(CardLayout::Columns)
            .text(self.text())
            .add_image(self.image())
    }
}

/// Cards that insert, delete and navigate with animations.
pub struct CardScrollViewScreen {
    view: CardScrollView<MutableCardAdapter<ScrollAction>>,
    rng: ChaCha8Rng,
}

impl CardScrollViewScreen {
    pub fn new(context: &DemoContext) -> Self {
        let mut adapter = MutableCardAdapter::new();
        adapter.seed(ScrollAction::ALL.iter().map(|action| (action.card(), *action)));
        let view = CardScrollView::new(context.runtime.clone());
        view.set_adapter(adapter);
        Self {
            view,
            rng: ChaCha8Rng::seed_from_u64(context.seed),
        }
    }

    fn delete_card(&self, position: usize) {
        self.view
            .with_adapter_mut(|adapter| adapter.delete_card_without_notification(position));
        self.view.animate(position, AnimationKind::Deletion);
    }

    fn navigate_to(&self, position: usize) {
        self.view.animate(position, AnimationKind::Navigation);
    }

    fn insert_new_card(&mut self, position: usize) {
        let action = ScrollAction::ALL[self.rng.random_range(0..ScrollAction::ALL.len())];
        log::debug!("inserting {action:?} card at {position}");
        self.view.with_adapter_mut(|adapter| {
            adapter.insert_card_without_notification(position, action.card(), action)
        });
        self.view.animate(position, AnimationKind::Insertion);
    }
}

impl Screen for CardScrollViewScreen {
    fn title(&self) -> &'static str {
        "Card scroll view"
    }

    fn host(&self) -> &dyn HostView {
        &self.view
    }

    fn tap(&mut self, context: &DemoContext) -> Transition {
        let Some(position) = self.view.tap() else {
            return Transition::Stay;
        };
        let Some(action) = self
            .view
            .with_adapter(|adapter| adapter.action_at(position).copied())
            .flatten()
        else {
            log::error!("no action for card {position}");
            return Transition::Stay;
        };
        let count = self.view.count();
        if action != ScrollAction::NoAction {
            context.play(SoundEffect::Tap);
        }
        match action {
            ScrollAction::DeleteHere => self.delete_card(position),
            ScrollAction::NavigateToStart => self.navigate_to(0),
            ScrollAction::NavigateToEnd => self.navigate_to(count - 1),
            ScrollAction::InsertAtStart => self.insert_new_card(0),
            ScrollAction::InsertBefore => self.insert_new_card(position),
            ScrollAction::InsertAfter => self.insert_new_card(position + 1),
            ScrollAction::InsertAtEnd => self.insert_new_card(count),
            ScrollAction::NoAction => context.play(SoundEffect::Disallowed),
        }
        Transition::Stay
    }
}
