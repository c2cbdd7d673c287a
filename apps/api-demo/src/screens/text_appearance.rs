use glass_cards::TextAppearanceAdapter;
use glass_widget::CardScrollView;

use super::{HostView, Screen, Transition};
use crate::app::DemoContext;

pub struct TextAppearanceScreen {
    view: CardScrollView<TextAppearanceAdapter>,
}

impl TextAppearanceScreen {
    pub fn new(context: &DemoContext) -> Self {
        let view = CardScrollView::new(context.runtime.clone());
        view.set_adapter(TextAppearanceAdapter::new());
        Self { view }
    }
}

impl Screen for TextAppearanceScreen {
    fn title(&self) -> &'static str {
        "Text appearance"
    }

    fn host(&self) -> &dyn HostView {
        &self.view
    }

    fn tap(&mut self, _context: &DemoContext) -> Transition {
        self.view.tap();
        Transition::Stay
    }
}
