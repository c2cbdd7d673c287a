//! Read model a card scroller renders from.

use std::fmt;

use crate::card::Card;
use crate::reconcile::AnimationKind;
use crate::view::CardView;

type Observer = Box<dyn FnMut(u64) + 'static>;

/// Observers of an adapter's data-changed signal.
///
/// Each notification bumps a generation counter, so tests can assert that a
/// mutation has not been announced yet.
#[derive(Default)]
pub struct DataSetObservable {
    generation: u64,
    observers: Vec<Observer>,
}

impl DataSetObservable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: impl FnMut(u64) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn notify_changed(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        for observer in self.observers.iter_mut() {
            observer(generation);
        }
    }

    /// Number of data-changed signals emitted so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Debug for DataSetObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSetObservable")
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Data source bound to a card scroll view.
///
/// `view` must fully re-bind whatever view it returns: a recycled view may
/// have shown any other position before.
pub trait CardScrollAdapter {
    type Item: ?Sized;

    fn count(&self) -> usize;

    fn item(&self, position: usize) -> Option<&Self::Item>;

    fn view(&self, position: usize, recycled: Option<CardView>) -> Option<CardView>;

    fn view_type_count(&self) -> usize {
        1
    }

    fn item_view_type(&self, _position: usize) -> usize {
        0
    }

    fn position(&self, _item: &Self::Item) -> Option<usize> {
        None
    }

    fn data_set_observable(&self) -> &DataSetObservable;

    fn data_set_observable_mut(&mut self) -> &mut DataSetObservable;

    fn register_data_set_observer(&mut self, observer: impl FnMut(u64) + 'static)
    where
        Self: Sized,
    {
        self.data_set_observable_mut().register(observer);
    }

    /// Called by the host when it starts animating a change at `position`.
    fn on_animation_started(&mut self, _position: usize, _kind: AnimationKind) {}

    /// Signals observers that count and items must be re-read.
    fn notify_data_set_changed(&mut self) {
        self.data_set_observable_mut().notify_changed();
    }

    /// Number of data-changed signals emitted so far.
    fn notifications(&self) -> u64 {
        self.data_set_observable().generation()
    }
}

/// Adapter over a fixed list of cards.
#[derive(Debug, Default)]
pub struct CardAdapter {
    cards: Vec<Card>,
    observable: DataSetObservable,
}

impl CardAdapter {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            observable: DataSetObservable::new(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl CardScrollAdapter for CardAdapter {
    type Item = Card;

    fn count(&self) -> usize {
        self.cards.len()
    }

    fn item(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    fn view(&self, position: usize, recycled: Option<CardView>) -> Option<CardView> {
        self.cards.get(position).map(|card| card.bind(recycled))
    }

    fn view_type_count(&self) -> usize {
        Card::view_type_count()
    }

    fn item_view_type(&self, position: usize) -> usize {
        self.cards
            .get(position)
            .map(Card::item_view_type)
            .unwrap_or_default()
    }

    fn position(&self, item: &Card) -> Option<usize> {
        self.cards.iter().position(|card| card == item)
    }

    fn data_set_observable(&self) -> &DataSetObservable {
        &self.observable
    }

    fn data_set_observable_mut(&mut self) -> &mut DataSetObservable {
        &mut self.observable
    }
}
