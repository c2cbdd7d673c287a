use glass_cards::{AnimationKind, Card, CardLayout, MutableCardAdapter};
use glass_core::SoundEffect;
use glass_widget::CardScrollView;

use super::{HostView, Screen, Transition};
use crate::app::DemoContext;

const FOOTNOTE: &str = "This is the footnote";
const TIMESTAMP: &str = "just now";
const ATTRIBUTION: &str = "ic_smile";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShowcaseAction {
    AppendCard,
    None,
}

/// Every card layout, plus a card that appends new cards at the end.
pub struct CardsScreen {
    view: CardScrollView<MutableCardAdapter<ShowcaseAction>>,
}

fn with_images(layout: CardLayout) -> Card {
    Card::new(layout).add_images((1..=8).map(|index| format!("codemonkey{index}")))
}

fn showcase_cards() -> Vec<Card> {
    vec![
        Card::new(CardLayout::Text)
            .text("This card has a text layout that can grow")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
        with_images(CardLayout::Text)
            .text("This text card has a mosaic of images")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
        Card::new(CardLayout::TextFixed)
            .text("This card has a fixed text size")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
        Card::new(CardLayout::Text)
            .text("This card is part of a stack")
            .show_stack_indicator(true)
            .attribution_icon(ATTRIBUTION),
        with_images(CardLayout::Columns)
            .text("This card has a columns layout")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
        Card::new(CardLayout::Columns)
            .text("This columns card has an icon")
            .icon("ic_wifi_150")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
        with_images(CardLayout::ColumnsFixed)
            .text("This columns card has a fixed text size")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
        Card::new(CardLayout::Caption)
            .add_image("beach")
            .text("This card has a caption layout")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
        Card::new(CardLayout::Caption)
            .add_image("beach")
            .text("This caption card has an icon")
            .icon("ic_avatar_70")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
        Card::new(CardLayout::Title)
            .add_image("beach")
            .text("Title layout"),
        Card::new(CardLayout::Title)
            .add_image("beach")
            .text("Title layout with icon")
            .icon("ic_phone_50"),
        Card::new(CardLayout::Menu)
            .text("Menu layout")
            .footnote("Menu items use this layout")
            .icon("ic_phone_50"),
        Card::new(CardLayout::Alert)
            .text("Alert layout")
            .footnote("Alerts warn about a problem")
            .icon("ic_warning_150"),
        Card::new(CardLayout::Author)
            .text("This card has an author layout")
            .icon("ic_avatar_70")
            .heading("Joe Lastname")
            .subheading("Mountain View, California")
            .footnote(FOOTNOTE)
            .timestamp(TIMESTAMP)
            .attribution_icon(ATTRIBUTION),
    ]
}

impl CardsScreen {
    pub fn new(context: &DemoContext) -> Self {
        let mut adapter = MutableCardAdapter::new();
        adapter.seed(std::iter::once((
            Card::new(CardLayout::Text).text("Tap to add a card at the end"),
            ShowcaseAction::AppendCard,
        )));
        adapter.seed(
            showcase_cards()
                .into_iter()
                .map(|card| (card, ShowcaseAction::None)),
        );
        let view = CardScrollView::new(context.runtime.clone());
        view.set_adapter(adapter);
        Self { view }
    }

    fn append_card(&self) {
        let position = self.view.with_adapter_mut(|adapter| {
            let position = adapter.store().len();
            let card =
                Card::new(CardLayout::Text).text(format!("New card at position {position}"));
            adapter.append_card_without_notification(card, ShowcaseAction::None)
        });
        if let Some(position) = position {
            self.view.animate(position, AnimationKind::Insertion);
        }
    }
}

impl Screen for CardsScreen {
    fn title(&self) -> &'static str {
        "Cards"
    }

    fn host(&self) -> &dyn HostView {
        &self.view
    }

    fn tap(&mut self, context: &DemoContext) -> Transition {
        let Some(position) = self.view.tap() else {
            return Transition::Stay;
        };
        let action = self
            .view
            .with_adapter(|adapter| adapter.action_at(position).copied())
            .flatten();
        match action {
            Some(ShowcaseAction::AppendCard) => {
                context.play(SoundEffect::Tap);
                self.append_card();
            }
            _ => context.play(SoundEffect::Disallowed),
        }
        Transition::Stay
    }
}
