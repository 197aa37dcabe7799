//! A solved lair together with the moves that solved it, ready for the
//! property checker.

use lair_core::{LairError, LairProperties, MoveHistory, PileId, Unit};

use crate::solver::{Lair, Strategy};

/// Lair solved while recording every move.
#[derive(Debug, Clone)]
pub struct AuditedLair {
    lair: Lair,
    history: MoveHistory,
}

impl AuditedLair {
    /// Build a lair of `size` logs and solve it with `strategy`.
    pub fn solve(size: u32, strategy: Strategy) -> Result<Self, LairError> {
        let mut lair = Lair::new(size)?;
        let mut history = MoveHistory::new();
        lair.solve_with(strategy, &mut history)?;
        Ok(Self { lair, history })
    }

    #[must_use]
    pub fn lair(&self) -> &Lair {
        &self.lair
    }

    #[must_use]
    pub fn moves(&self) -> &MoveHistory {
        &self.history
    }
}

impl LairProperties for AuditedLair {
    fn size(&self) -> u32 {
        self.lair.size()
    }

    fn piles(&self) -> [Vec<Unit>; 3] {
        PileId::ALL.map(|id| self.lair.pile(id).units())
    }

    fn history(&self) -> &MoveHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lair_core::{LairPropertyChecker, PropertyChecker};

    #[test]
    fn test_solved_lair_satisfies_all_properties() {
        for strategy in [Strategy::Recursive, Strategy::Iterative] {
            for size in 0..=7 {
                let audited = AuditedLair::solve(size, strategy).unwrap();
                let checker = LairPropertyChecker::new(&audited).expect_optimal();
                assert!(
                    checker.all_hold(),
                    "size {} {}:\n{}",
                    size,
                    strategy,
                    checker.summary().format_report()
                );
            }
        }
    }

    #[test]
    fn test_history_length() {
        let audited = AuditedLair::solve(5, Strategy::Recursive).unwrap();
        assert_eq!(audited.moves().len(), 31);
        assert_eq!(audited.lair().moves_count(), 31);
    }
}
