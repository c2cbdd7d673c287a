use glass_cards::{EmbeddedCardLayoutAdapter, SimpleTableItem};
use glass_widget::CardScrollView;

use super::{HostView, Screen, Transition};
use crate::app::DemoContext;

/// A grocery list paged into cards with an embedded table layout.
pub struct EmbeddedLayoutScreen {
    view: CardScrollView<EmbeddedCardLayoutAdapter>,
}

fn table_items() -> Vec<SimpleTableItem> {
    vec![
        SimpleTableItem::new("ic_circle_blue", "Water", "8 oz"),
        SimpleTableItem::new("ic_circle_yellow", "Eggs, large", "2"),
        SimpleTableItem::new("ic_circle_red", "Ground beef", "4 oz"),
        SimpleTableItem::new("ic_circle_green", "Brussel sprouts", "1 cup"),
        SimpleTableItem::new("ic_circle_green", "Celery", "1 stalk"),
        SimpleTableItem::new("ic_circle_red", "Beef jerky", "8 strips"),
        SimpleTableItem::new("ic_circle_yellow", "Almonds", "3 handfuls"),
        SimpleTableItem::new("ic_circle_red", "Strawberry fruit leather", "2.5 miles"),
    ]
}

impl EmbeddedLayoutScreen {
    pub fn new(context: &DemoContext) -> Self {
        let view = CardScrollView::new(context.runtime.clone());
        view.set_adapter(EmbeddedCardLayoutAdapter::new(
            table_items(),
            "Daily intake",
            "just now",
        ));
        Self { view }
    }
}

impl Screen for EmbeddedLayoutScreen {
    fn title(&self) -> &'static str {
        "Embedded card layout"
    }

    fn host(&self) -> &dyn HostView {
        &self.view
    }

    fn tap(&mut self, _context: &DemoContext) -> Transition {
        if let Some(position) = self.view.tap() {
            log::debug!("table card {position} has no action");
        }
        Transition::Stay
    }
}
