//! # lair-core
//!
//! Core types and invariants for the log-pile transfer puzzle.
//!
//! A lair holds three piles of logs. All logs start on the Forest pile
//! (largest at the bottom) and must end up on the Hideout pile, moving one
//! log at a time and never resting a log on a smaller one. The Base pile is
//! the spare.
//!
//! This crate has no solver; it defines the vocabulary shared by the solver
//! (`lair`), the simulation helpers (`lair-dst`) and the model checker
//! (`lair-stateright`), plus a property checker whose every invariant is
//! traceable to `specs/lair.tla`.

pub mod counterexample;
pub mod error;
pub mod history;
pub mod invariants;
pub mod property;
pub mod types;

pub use counterexample::{Counterexample, StateSnapshot};
pub use error::LairError;
pub use history::MoveHistory;
pub use invariants::{LairProperties, LairPropertyChecker};
pub use property::{PropertyChecker, PropertyResult, PropertySummary};
pub use types::{optimal_moves_count, Move, PileId, Unit, SIZE_MAX};
