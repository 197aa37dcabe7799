//! A single pile of logs.

use lair_core::{LairError, PileId, Unit};

/// Ordered pile of logs with top-only insert and remove.
///
/// The pile performs no ordering checks; keeping smaller logs above larger
/// ones is the move policy's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    id: PileId,
    /// Bottom to top: the top log is the last element.
    units: Vec<Unit>,
    capacity: u32,
}

impl Pile {
    /// Create an empty pile that can hold up to `capacity` logs.
    #[must_use]
    pub fn empty(id: PileId, capacity: u32) -> Self {
        Self {
            id,
            units: Vec::with_capacity(capacity as usize),
            capacity,
        }
    }

    /// Create a pile holding logs `1..=size`, log 1 on top.
    #[must_use]
    pub fn full(id: PileId, size: u32) -> Self {
        Self {
            id,
            units: (1..=size).rev().collect(),
            capacity: size,
        }
    }

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// Number of logs the lair can stack here (its size).
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Place a log on top.
    pub fn push(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Remove and return the top log.
    pub fn pop(&mut self) -> Result<Unit, LairError> {
        self.units
            .pop()
            .ok_or(LairError::EmptyPile { pile: self.id })
    }

    /// The top log, if any.
    #[must_use]
    pub fn peek(&self) -> Option<Unit> {
        self.units.last().copied()
    }

    /// Logs from top to bottom.
    #[must_use]
    pub fn units(&self) -> Vec<Unit> {
        self.units.iter().rev().copied().collect()
    }
}
