//! Testing utilities and harness for the Glass card toolkit

pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::testing::*;
}
