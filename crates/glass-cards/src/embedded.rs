//! Adapter that pages a table of items into cards with an embedded layout.

use crate::adapter::{CardScrollAdapter, DataSetObservable};
use crate::card::CardLayout;
use crate::view::{CardView, TableRow};

/// The maximum number of items that fit on a card.
pub const ITEMS_PER_CARD: usize = 4;

const TABLE_LAYOUT: &str = "simple_table";

#[derive(Clone, Debug, PartialEq)]
pub struct SimpleTableItem {
    pub icon: String,
    pub primary_text: String,
    pub secondary_text: String,
}

impl SimpleTableItem {
    pub fn new(
        icon: impl Into<String>,
        primary_text: impl Into<String>,
        secondary_text: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            primary_text: primary_text.into(),
            secondary_text: secondary_text.into(),
        }
    }
}

#[derive(Debug)]
pub struct EmbeddedCardLayoutAdapter {
    items: Vec<SimpleTableItem>,
    footnote: String,
    timestamp: String,
    observable: DataSetObservable,
}

impl EmbeddedCardLayoutAdapter {
    pub fn new(
        items: Vec<SimpleTableItem>,
        footnote: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            items,
            footnote: footnote.into(),
            timestamp: timestamp.into(),
            observable: DataSetObservable::new(),
        }
    }

    fn page_range(&self, position: usize) -> std::ops::Range<usize> {
        let start = (position * ITEMS_PER_CARD).min(self.items.len());
        let end = (start + ITEMS_PER_CARD).min(self.items.len());
        start..end
    }

    fn populate_rows(&self, position: usize, rows: &mut Vec<TableRow>) {
        // The table has a fixed number of rows; the ones past the last item
        // are hidden, and every row's visibility is rewritten because the
        // view may be recycled from a fuller page.
        rows.resize_with(ITEMS_PER_CARD, TableRow::default);
        let page = &self.items[self.page_range(position)];
        for (index, row) in rows.iter_mut().enumerate() {
            match page.get(index) {
                Some(item) => {
                    row.icon = Some(item.icon.clone());
                    row.primary_text.clone_from(&item.primary_text);
                    row.secondary_text.clone_from(&item.secondary_text);
                    row.visible = true;
                }
                None => row.visible = false,
            }
        }
    }
}

impl CardScrollAdapter for EmbeddedCardLayoutAdapter {
    type Item = [SimpleTableItem];

    fn count(&self) -> usize {
        self.items.len().div_ceil(ITEMS_PER_CARD)
    }

    fn item(&self, position: usize) -> Option<&[SimpleTableItem]> {
        if position < self.count() {
            Some(&self.items[self.page_range(position)])
        } else {
            None
        }
    }

    fn view(&self, position: usize, recycled: Option<CardView>) -> Option<CardView> {
        if position >= self.count() {
            return None;
        }
        let mut view = CardView::reuse_or_create(recycled, 0);
        view.layout = CardLayout::EmbedInside;
        view.text = None;
        view.heading = None;
        view.subheading = None;
        view.icon = None;
        view.attribution_icon = None;
        view.images.clear();
        view.stack_indicator = false;
        view.embedded_layout = Some(TABLE_LAYOUT.to_string());
        view.footnote = Some(self.footnote.clone());
        view.timestamp = Some(self.timestamp.clone());
        self.populate_rows(position, &mut view.rows);
        view.mark_bound();
        Some(view)
    }

    fn data_set_observable(&self) -> &DataSetObservable {
        &self.observable
    }

    fn data_set_observable_mut(&mut self) -> &mut DataSetObservable {
        &mut self.observable
    }
}
