use glass_cards::{Card, CardAdapter, CardLayout};
use glass_core::SoundEffect;
use glass_widget::CardScrollView;

use super::{
    CardScrollViewScreen, CardsScreen, EmbeddedLayoutScreen, HostView, Screen, SliderScreen,
    TextAppearanceScreen, Transition, VoiceMenuScreen,
};
use crate::app::DemoContext;

/// Entries of the main menu, in card order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Cards,
    EmbeddedCardLayout,
    CardScrollView,
    TextAppearance,
    VoiceMenu,
    Slider,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Cards,
        MenuItem::EmbeddedCardLayout,
        MenuItem::CardScrollView,
        MenuItem::TextAppearance,
        MenuItem::VoiceMenu,
        MenuItem::Slider,
    ];

    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Cards => "Cards",
            MenuItem::EmbeddedCardLayout => "Embedded card layout",
            MenuItem::CardScrollView => "Card scroll view",
            MenuItem::TextAppearance => "Text appearance",
            MenuItem::VoiceMenu => "Voice menu",
            MenuItem::Slider => "Slider",
        }
    }

    fn open(self, context: &DemoContext) -> Box<dyn Screen> {
        match self {
            MenuItem::Cards => Box::new(CardsScreen::new(context)),
            MenuItem::EmbeddedCardLayout => Box::new(EmbeddedLayoutScreen::new(context)),
            MenuItem::CardScrollView => Box::new(CardScrollViewScreen::new(context)),
            MenuItem::TextAppearance => Box::new(TextAppearanceScreen::new(context)),
            MenuItem::VoiceMenu => Box::new(VoiceMenuScreen::new(context)),
            MenuItem::Slider => Box::new(SliderScreen::new(context)),
        }
    }
}

pub struct MainMenuScreen {
    view: CardScrollView<CardAdapter>,
}

impl MainMenuScreen {
    pub fn new(context: &DemoContext) -> Self {
        let cards = MenuItem::ALL
            .iter()
            .map(|item| Card::new(CardLayout::Text).text(item.label()))
            .collect();
        let view = CardScrollView::new(context.runtime.clone());
        view.set_adapter(CardAdapter::new(cards));
        Self { view }
    }
}

impl Screen for MainMenuScreen {
    fn title(&self) -> &'static str {
        "API demo"
    }

    fn host(&self) -> &dyn HostView {
        &self.view
    }

    fn tap(&mut self, context: &DemoContext) -> Transition {
        let Some(position) = self.view.tap() else {
            return Transition::Stay;
        };
        log::debug!("clicked menu card at position {position}");
        match MenuItem::from_position(position) {
            Some(item) => {
                context.play(SoundEffect::Tap);
                Transition::Push(item.open(context))
            }
            None => {
                context.play(SoundEffect::Error);
                log::debug!("nothing to show for position {position}");
                Transition::Stay
            }
        }
    }
}
