//! Adapter whose mutations are announced later, by the host view.

use crate::adapter::{CardScrollAdapter, DataSetObservable};
use crate::card::Card;
use crate::reconcile::{AnimationKind, PendingChange, Reconciliation};
use crate::store::{CardEntry, CardStore};
use crate::view::CardView;

/// Card adapter with per-card actions and deferred change notification.
///
/// The `*_without_notification` methods change the store immediately and
/// record the change as pending. The caller then asks the host view to
/// animate at the changed position; the host calls
/// [`CardScrollAdapter::notify_data_set_changed`] at the right moment of its
/// animation. Only one change may be outstanding at a time.
#[derive(Debug)]
pub struct MutableCardAdapter<A> {
    store: CardStore<A>,
    reconciliation: Reconciliation,
    observable: DataSetObservable,
}

impl<A> MutableCardAdapter<A> {
    pub fn new() -> Self {
        Self {
            store: CardStore::new(),
            reconciliation: Reconciliation::Idle,
            observable: DataSetObservable::new(),
        }
    }

    /// Appends initial content before the adapter is bound to a host.
    ///
    /// Seed content is picked up by the host's full refresh when the adapter
    /// is bound, so it is not tracked as a pending change.
    ///
    /// # Panics
    ///
    /// Panics if a change is pending reconciliation.
    pub fn seed(&mut self, entries: impl IntoIterator<Item = (Card, A)>) {
        if let Some(pending) = self.reconciliation.pending() {
            panic!("cannot seed cards while {pending} is pending");
        }
        for (card, action) in entries {
            self.store.push(card, action);
        }
    }

    /// Inserts a card at `position` in `0..=count` without notifying.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range or another change is pending;
    /// the store is left untouched in both cases.
    pub fn insert_card_without_notification(&mut self, position: usize, card: Card, action: A) {
        let change = PendingChange::new(position, AnimationKind::Insertion);
        self.ensure_idle(change);
        if let Err(err) = self.store.insert_at(position, card, action) {
            panic!("{err}");
        }
        self.record(change);
    }

    /// Appends a card without notifying and returns its position.
    ///
    /// # Panics
    ///
    /// Panics if another change is pending.
    pub fn append_card_without_notification(&mut self, card: Card, action: A) -> usize {
        let position = self.store.len();
        self.insert_card_without_notification(position, card, action);
        position
    }

    /// Removes the card at `position` in `0..count` without notifying.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range or another change is pending;
    /// the store is left untouched in both cases.
    pub fn delete_card_without_notification(&mut self, position: usize) -> CardEntry<A> {
        let change = PendingChange::new(position, AnimationKind::Deletion);
        self.ensure_idle(change);
        let entry = match self.store.remove_at(position) {
            Ok(entry) => entry,
            Err(err) => panic!("{err}"),
        };
        self.record(change);
        entry
    }

    pub fn card_at(&self, position: usize) -> Option<&Card> {
        self.store.card_at(position)
    }

    pub fn action_at(&self, position: usize) -> Option<&A> {
        self.store.action_at(position)
    }

    pub fn store(&self) -> &CardStore<A> {
        &self.store
    }

    pub fn reconciliation(&self) -> Reconciliation {
        self.reconciliation
    }

    /// The change awaiting the host's data-changed signal, if any.
    pub fn pending_change(&self) -> Option<PendingChange> {
        self.reconciliation.pending()
    }

    fn ensure_idle(&self, attempted: PendingChange) {
        if let Some(pending) = self.reconciliation.pending() {
            panic!("cannot apply {attempted}: {pending} has not been reconciled yet");
        }
    }

    fn record(&mut self, change: PendingChange) {
        if let Err(err) = self.reconciliation.record(change) {
            panic!("{err}");
        }
        log::debug!("card store changed ({change}), {} cards, notification deferred", self.store.len());
    }
}

impl<A> Default for MutableCardAdapter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> CardScrollAdapter for MutableCardAdapter<A> {
    type Item = Card;

    fn count(&self) -> usize {
        self.store.len()
    }

    fn item(&self, position: usize) -> Option<&Card> {
        self.store.card_at(position)
    }

    fn view(&self, position: usize, recycled: Option<CardView>) -> Option<CardView> {
        self.store.card_at(position).map(|card| card.bind(recycled))
    }

    fn view_type_count(&self) -> usize {
        Card::view_type_count()
    }

    fn item_view_type(&self, position: usize) -> usize {
        self.store
            .card_at(position)
            .map(Card::item_view_type)
            .unwrap_or_default()
    }

    fn position(&self, item: &Card) -> Option<usize> {
        self.store.position_of(item)
    }

    fn data_set_observable(&self) -> &DataSetObservable {
        &self.observable
    }

    fn data_set_observable_mut(&mut self) -> &mut DataSetObservable {
        &mut self.observable
    }

    /// # Panics
    ///
    /// Panics if the requested animation does not describe the pending
    /// change, or if an insertion or deletion is requested with nothing
    /// pending.
    fn on_animation_started(&mut self, position: usize, kind: AnimationKind) {
        if let Err(err) = self
            .reconciliation
            .begin_animation(PendingChange::new(position, kind))
        {
            panic!("{err}");
        }
    }

    fn notify_data_set_changed(&mut self) {
        if let Some(change) = self.reconciliation.settle() {
            log::debug!("reconciled {change}");
        }
        self.observable.notify_changed();
    }
}
