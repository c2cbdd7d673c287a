//! Bookkeeping for the "mutate now, notify later" handshake between an
//! adapter and the scroll view hosting it.
//!
//! A mutation moves the adapter from `Idle` to `Mutated`. The host's
//! `animate` call moves it to `Animating`, and the host's data-changed
//! signal returns it to `Idle`. At most one change is outstanding.

use std::fmt;

/// Visual transition requested from the host view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Insertion,
    Deletion,
    Navigation,
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationKind::Insertion => f.write_str("insertion"),
            AnimationKind::Deletion => f.write_str("deletion"),
            AnimationKind::Navigation => f.write_str("navigation"),
        }
    }
}

/// A data change the host has not been told about yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingChange {
    pub position: usize,
    pub kind: AnimationKind,
}

impl PendingChange {
    pub fn new(position: usize, kind: AnimationKind) -> Self {
        Self { position, kind }
    }
}

impl fmt::Display for PendingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reconciliation {
    #[default]
    Idle,
    /// Store already reflects the change; no animation requested yet.
    Mutated(PendingChange),
    /// Host is animating; it will signal data-changed when appropriate.
    Animating(PendingChange),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcileError {
    /// A second mutation arrived while one is still outstanding.
    ChangePending {
        pending: PendingChange,
        attempted: PendingChange,
    },
    /// Insertion or deletion animation requested with nothing mutated.
    NothingToAnimate { requested: PendingChange },
    /// The animation requested does not describe the outstanding change.
    Mismatch {
        pending: PendingChange,
        requested: PendingChange,
    },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileError::ChangePending { pending, attempted } => write!(
                f,
                "cannot apply {attempted}: {pending} has not been reconciled yet"
            ),
            ReconcileError::NothingToAnimate { requested } => {
                write!(f, "{requested} requested but no mutation is pending")
            }
            ReconcileError::Mismatch { pending, requested } => {
                write!(f, "{requested} requested while {pending} is pending")
            }
        }
    }
}

impl std::error::Error for ReconcileError {}

impl Reconciliation {
    pub fn is_idle(&self) -> bool {
        matches!(self, Reconciliation::Idle)
    }

    pub fn pending(&self) -> Option<PendingChange> {
        match self {
            Reconciliation::Idle => None,
            Reconciliation::Mutated(change) | Reconciliation::Animating(change) => Some(*change),
        }
    }

    /// `Idle -> Mutated`.
    pub fn record(&mut self, change: PendingChange) -> Result<(), ReconcileError> {
        match *self {
            Reconciliation::Idle => {
                *self = Reconciliation::Mutated(change);
                Ok(())
            }
            Reconciliation::Mutated(pending) | Reconciliation::Animating(pending) => {
                Err(ReconcileError::ChangePending {
                    pending,
                    attempted: change,
                })
            }
        }
    }

    /// `Mutated -> Animating`; navigation from `Idle` leaves the state alone.
    pub fn begin_animation(&mut self, requested: PendingChange) -> Result<(), ReconcileError> {
        match *self {
            Reconciliation::Idle if requested.kind == AnimationKind::Navigation => Ok(()),
            Reconciliation::Idle => Err(ReconcileError::NothingToAnimate { requested }),
            Reconciliation::Mutated(pending) if pending == requested => {
                *self = Reconciliation::Animating(pending);
                Ok(())
            }
            Reconciliation::Mutated(pending) | Reconciliation::Animating(pending) => {
                Err(ReconcileError::Mismatch { pending, requested })
            }
        }
    }

    /// Any state `-> Idle`; returns the change that was outstanding.
    pub fn settle(&mut self) -> Option<PendingChange> {
        let pending = self.pending();
        *self = Reconciliation::Idle;
        pending
    }
}
