//! # lair-stateright
//!
//! Stateright model that mirrors `specs/lair.tla`.
//!
//! The model explores every configuration reachable by legal moves, so the
//! invariants can be checked exhaustively and the shortest route to the
//! goal compared against the solver.

pub mod model;

pub use model::{LairAction, LairModel, LairState};
