//! Gallery of Glass card toolkit samples.
//!
//! [`ApiDemo`] keeps a stack of screens, each hosting a card scroll view,
//! and routes line-oriented [`Command`]s to the screen on top.

pub mod app;
pub mod command;
pub mod screens;

pub use app::{ApiDemo, DemoContext, Flow};
pub use command::{Command, ParseCommandError};
pub use screens::{HostView, Screen, Transition};

/// Seed used for random card actions when none is given.
pub const DEFAULT_SEED: u64 = 0x5eed_ca2d;
