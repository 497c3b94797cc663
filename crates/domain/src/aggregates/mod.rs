//! Aggregate roots.

mod knight;

pub use knight::Knight;
