//! Headless materialised views produced by adapters.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::card::CardLayout;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a view instance; preserved across recycling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// One row of an embedded table layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableRow {
    pub icon: Option<String>,
    pub primary_text: String,
    pub secondary_text: String,
    pub visible: bool,
}

/// A card rendered into plain data, ready for a renderer to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    id: ViewId,
    view_type: usize,
    bind_count: u32,
    pub layout: CardLayout,
    pub text: Option<String>,
    pub footnote: Option<String>,
    pub timestamp: Option<String>,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub icon: Option<String>,
    pub attribution_icon: Option<String>,
    pub images: Vec<String>,
    pub stack_indicator: bool,
    pub embedded_layout: Option<String>,
    pub rows: Vec<TableRow>,
}

impl CardView {
    pub fn new(view_type: usize) -> Self {
        Self {
            id: ViewId::next(),
            view_type,
            bind_count: 0,
            layout: CardLayout::Text,
            text: None,
            footnote: None,
            timestamp: None,
            heading: None,
            subheading: None,
            icon: None,
            attribution_icon: None,
            images: Vec::new(),
            stack_indicator: false,
            embedded_layout: None,
            rows: Vec::new(),
        }
    }

    /// Returns `recycled` if it was built for `view_type`, else a fresh view.
    pub fn reuse_or_create(recycled: Option<CardView>, view_type: usize) -> Self {
        match recycled {
            Some(view) if view.view_type == view_type => view,
            _ => Self::new(view_type),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn view_type(&self) -> usize {
        self.view_type
    }

    /// How many times content has been bound into this instance.
    pub fn bind_count(&self) -> u32 {
        self.bind_count
    }

    pub(crate) fn mark_bound(&mut self) {
        self.bind_count += 1;
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| row.visible)
    }
}
