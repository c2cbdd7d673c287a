//! Card store, card model and adapters for the Glass card toolkit.
//!
//! The centrepiece is [`MutableCardAdapter`], which separates changing the
//! data from telling the view about it so the host view can animate first.

pub mod adapter;
pub mod card;
pub mod embedded;
pub mod mutable;
pub mod reconcile;
pub mod store;
pub mod text_appearance;
pub mod view;

pub use adapter::{CardAdapter, CardScrollAdapter, DataSetObservable};
pub use card::{Card, CardLayout};
pub use embedded::{EmbeddedCardLayoutAdapter, SimpleTableItem, ITEMS_PER_CARD};
pub use mutable::MutableCardAdapter;
pub use reconcile::{AnimationKind, PendingChange, ReconcileError, Reconciliation};
pub use store::{CardEntry, CardStore, StoreError, StoreOp};
pub use text_appearance::{TextAppearanceAdapter, TextAppearanceLayout};
pub use view::{CardView, TableRow, ViewId};

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod store_tests;

#[cfg(test)]
#[path = "tests/adapter_tests.rs"]
mod adapter_tests;
