//! Immutable card content and its builder API.

use std::fmt;

use crate::view::CardView;

/// Visual template a card is rendered with. Each layout is one view type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardLayout {
    Text,
    TextFixed,
    Columns,
    ColumnsFixed,
    Caption,
    Title,
    Author,
    Menu,
    Alert,
    EmbedInside,
}

impl CardLayout {
    pub const ALL: [CardLayout; 10] = [
        CardLayout::Text,
        CardLayout::TextFixed,
        CardLayout::Columns,
        CardLayout::ColumnsFixed,
        CardLayout::Caption,
        CardLayout::Title,
        CardLayout::Author,
        CardLayout::Menu,
        CardLayout::Alert,
        CardLayout::EmbedInside,
    ];

    pub fn view_type(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            CardLayout::Text => "text",
            CardLayout::TextFixed => "text-fixed",
            CardLayout::Columns => "columns",
            CardLayout::ColumnsFixed => "columns-fixed",
            CardLayout::Caption => "caption",
            CardLayout::Title => "title",
            CardLayout::Author => "author",
            CardLayout::Menu => "menu",
            CardLayout::Alert => "alert",
            CardLayout::EmbedInside => "embed-inside",
        }
    }
}

impl fmt::Display for CardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One renderable unit shown as a single page of a card scroller.
///
/// Resource references (images, icons, embedded layouts) are plain names;
/// resolving them is the renderer's business.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    layout: CardLayout,
    text: Option<String>,
    footnote: Option<String>,
    timestamp: Option<String>,
    heading: Option<String>,
    subheading: Option<String>,
    icon: Option<String>,
    attribution_icon: Option<String>,
    images: Vec<String>,
    stack_indicator: bool,
    embedded_layout: Option<String>,
}

impl Card {
    pub fn new(layout: CardLayout) -> Self {
        Self {
            layout,
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
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn subheading(mut self, subheading: impl Into<String>) -> Self {
        self.subheading = Some(subheading.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn attribution_icon(mut self, icon: impl Into<String>) -> Self {
        self.attribution_icon = Some(icon.into());
        self
    }

    pub fn add_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    pub fn add_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images.extend(images.into_iter().map(Into::into));
        self
    }

    pub fn show_stack_indicator(mut self, visible: bool) -> Self {
        self.stack_indicator = visible;
        self
    }

    pub fn embedded_layout(mut self, layout: impl Into<String>) -> Self {
        self.embedded_layout = Some(layout.into());
        self
    }

    pub fn layout(&self) -> CardLayout {
        self.layout
    }

    pub fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn footnote_value(&self) -> Option<&str> {
        self.footnote.as_deref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Number of distinct view types cards can produce.
    pub fn view_type_count() -> usize {
        CardLayout::ALL.len()
    }

    pub fn item_view_type(&self) -> usize {
        self.layout.view_type()
    }

    /// Materialises this card, reusing `recycled` when its view type matches.
    ///
    /// Every field is written, so a recycled view never shows content left
    /// over from whatever card it displayed before.
    pub fn bind(&self, recycled: Option<CardView>) -> CardView {
        let mut view = CardView::reuse_or_create(recycled, self.item_view_type());
        view.layout = self.layout;
        view.text = self.text.clone();
        view.footnote = self.footnote.clone();
        view.timestamp = self.timestamp.clone();
        view.heading = self.heading.clone();
        view.subheading = self.subheading.clone();
        view.icon = self.icon.clone();
        view.attribution_icon = self.attribution_icon.clone();
        view.images.clone_from(&self.images);
        view.stack_indicator = self.stack_indicator;
        view.embedded_layout = self.embedded_layout.clone();
        view.rows.clear();
        view.mark_bound();
        view
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.layout)?;
        if let Some(text) = &self.text {
            write!(f, " {text}")?;
        }
        Ok(())
    }
}
