//! Ordered card storage with one action tag per card.

use std::fmt;

use crate::card::Card;

/// A card together with the action tag that travels with it.
///
/// Keeping both in one record makes it impossible for the card and action
/// sequences to drift apart in length.
#[derive(Clone, Debug, PartialEq)]
pub struct CardEntry<A> {
    pub card: Card,
    pub action: A,
}

impl<A> CardEntry<A> {
    pub fn new(card: Card, action: A) -> Self {
        Self { card, action }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOp {
    Insert,
    Remove,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOp::Insert => f.write_str("insert"),
            StoreOp::Remove => f.write_str("remove"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    IndexOutOfRange { op: StoreOp, index: usize, len: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IndexOutOfRange {
                op: StoreOp::Insert,
                index,
                len,
            } => write!(
                f,
                "cannot insert at index {index}: store holds {len} cards (valid 0..={len})"
            ),
            StoreError::IndexOutOfRange {
                op: StoreOp::Remove,
                index,
                len,
            } => write!(
                f,
                "cannot remove index {index}: store holds {len} cards"
            ),
        }
    }
}

impl std::error::Error for StoreError {}

/// Positionally indexed cards. Indices shift on every insert and remove.
///
/// Nothing here notifies anyone; refresh timing belongs to the adapter's
/// caller.
#[derive(Clone, Debug, PartialEq)]
pub struct CardStore<A> {
    entries: Vec<CardEntry<A>>,
}

impl<A> CardStore<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts at `index` in `0..=len`, shifting later entries up by one.
    /// On error the store is unchanged.
    pub fn insert_at(&mut self, index: usize, card: Card, action: A) -> Result<(), StoreError> {
        if index > self.entries.len() {
            return Err(StoreError::IndexOutOfRange {
                op: StoreOp::Insert,
                index,
                len: self.entries.len(),
            });
        }
        self.entries.insert(index, CardEntry::new(card, action));
        Ok(())
    }

    /// Removes the entry at `index` in `0..len`, shifting later entries down.
    /// On error the store is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<CardEntry<A>, StoreError> {
        if index >= self.entries.len() {
            return Err(StoreError::IndexOutOfRange {
                op: StoreOp::Remove,
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn push(&mut self, card: Card, action: A) -> usize {
        self.entries.push(CardEntry::new(card, action));
        self.entries.len() - 1
    }

    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.entries.get(index).map(|entry| &entry.card)
    }

    pub fn action_at(&self, index: usize) -> Option<&A> {
        self.entries.get(index).map(|entry| &entry.action)
    }

    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.card == card)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardEntry<A>> {
        self.entries.iter()
    }
}

impl<A> Default for CardStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> FromIterator<(Card, A)> for CardStore<A> {
    fn from_iter<I: IntoIterator<Item = (Card, A)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(card, action)| CardEntry::new(card, action))
                .collect(),
        }
    }
}
