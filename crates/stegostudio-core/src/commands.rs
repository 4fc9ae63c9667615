//! Plain function wrappers around the [`crate::api`] builders.

mod capacity;
mod hide;
mod unveil;
mod unveil_raw;

pub use capacity::*;
pub use hide::*;
pub use unveil::*;
pub use unveil_raw::*;
