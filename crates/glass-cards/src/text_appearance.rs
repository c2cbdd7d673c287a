//! Static cards that showcase the three text appearance sizes.

use crate::adapter::{CardScrollAdapter, DataSetObservable};
use crate::card::CardLayout;
use crate::view::CardView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAppearanceLayout {
    Large,
    Medium,
    Small,
}

impl TextAppearanceLayout {
    pub const ALL: [TextAppearanceLayout; 3] = [
        TextAppearanceLayout::Large,
        TextAppearanceLayout::Medium,
        TextAppearanceLayout::Small,
    ];

    pub fn resource_name(self) -> &'static str {
        match self {
            TextAppearanceLayout::Large => "text_appearances_large",
            TextAppearanceLayout::Medium => "text_appearances_medium",
            TextAppearanceLayout::Small => "text_appearances_small",
        }
    }

    fn sample_text(self) -> &'static str {
        match self {
            TextAppearanceLayout::Large => "Large text appearance",
            TextAppearanceLayout::Medium => "Medium text appearance",
            TextAppearanceLayout::Small => "Small text appearance",
        }
    }
}

static LAYOUTS: [TextAppearanceLayout; 3] = TextAppearanceLayout::ALL;

#[derive(Debug, Default)]
pub struct TextAppearanceAdapter {
    observable: DataSetObservable,
}

impl TextAppearanceAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardScrollAdapter for TextAppearanceAdapter {
    type Item = TextAppearanceLayout;

    fn count(&self) -> usize {
        TextAppearanceLayout::ALL.len()
    }

    fn item(&self, position: usize) -> Option<&TextAppearanceLayout> {
        LAYOUTS.get(position)
    }

    fn view(&self, position: usize, recycled: Option<CardView>) -> Option<CardView> {
        let layout = *self.item(position)?;
        // The cards never change, so a recycled view of the right type is
        // already correct and is handed back as is.
        if let Some(view) = recycled.filter(|view| view.view_type() == position) {
            return Some(view);
        }
        let mut view = CardView::new(position);
        view.layout = CardLayout::Text;
        view.embedded_layout = Some(layout.resource_name().to_string());
        view.text = Some(layout.sample_text().to_string());
        Some(view)
    }

    fn view_type_count(&self) -> usize {
        TextAppearanceLayout::ALL.len()
    }

    fn item_view_type(&self, position: usize) -> usize {
        position
    }

    fn position(&self, item: &TextAppearanceLayout) -> Option<usize> {
        TextAppearanceLayout::ALL.iter().position(|layout| layout == item)
    }

    fn data_set_observable(&self) -> &DataSetObservable {
        &self.observable
    }

    fn data_set_observable_mut(&mut self) -> &mut DataSetObservable {
        &mut self.observable
    }
}
