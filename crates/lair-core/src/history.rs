//! Ordered record of the moves performed on a lair.

use crate::types::{Move, PileId, Unit};

/// Moves in the order they were performed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    pub moves: Vec<Move>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Append a move that already carries its step number.
    pub fn push(&mut self, mv: Move) {
        debug_assert!(mv.step > 0, "Step must be positive");
        debug_assert_eq!(
            mv.step,
            self.moves.len() as u64 + 1,
            "Moves must be recorded in step order"
        );
        self.moves.push(mv);
    }

    /// Record a move, numbering it after the last one.
    pub fn record(&mut self, unit: Unit, from: PileId, to: PileId) -> Move {
        let mv = Move {
            step: self.moves.len() as u64 + 1,
            unit,
            from,
            to,
        };
        self.moves.push(mv);
        mv
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_numbers_steps() {
        let mut history = MoveHistory::new();
        let first = history.record(1, PileId::Source, PileId::Destination);
        let second = history.record(2, PileId::Source, PileId::Auxiliary);

        assert_eq!(first.step, 1);
        assert_eq!(second.step, 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.iter().map(|m| m.unit).collect::<Vec<_>>(), vec![1, 2]);
    }
}
