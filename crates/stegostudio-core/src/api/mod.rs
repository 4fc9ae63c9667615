//! File based API, every operation is a builder started by `prepare()`
//! and run by `execute()`.

pub mod capacity;
pub mod hide;
pub mod unveil;
pub mod unveil_raw;
