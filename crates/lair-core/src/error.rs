//! Errors raised by piles and lairs.

use crate::types::{PileId, SIZE_MAX};

/// Errors from pile and lair operations.
///
/// None of these occur when a correctly sized lair is solved once; they
/// signal a contract violation by the caller or a defect in a move policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LairError {
    /// A log was taken from an empty pile.
    #[error("cannot take a log from the empty {pile} pile")]
    EmptyPile { pile: PileId },

    /// The requested lair size is negative or too large.
    #[error("invalid lair size {size}: expected 0..={}", SIZE_MAX)]
    InvalidSize { size: i64 },

    /// `solve` was called on a lair that already ran.
    #[error("lair has already been solved")]
    AlreadySolved,
}
