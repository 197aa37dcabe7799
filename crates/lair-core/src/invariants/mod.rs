//! Invariant traits for lairs.
//!
//! Each property is traceable to `specs/lair.tla`.

pub mod lair;

pub use lair::{LairProperties, LairPropertyChecker};
