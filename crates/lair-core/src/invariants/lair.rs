//! Lair invariants from lair.tla
//!
//! # TLA+ Mapping
//!
//! | Property | TLA+ Line | Description |
//! |----------|-----------|-------------|
//! | UnitsConserved | 39 | Every log `1..=n` is on exactly one pile |
//! | PilesOrdered | 44 | Each pile is strictly ascending from top to bottom |
//! | LegalMoves | 48 | No move places a log onto a smaller one |
//! | MinimalMoves | 53 | Reaching the goal takes at least `2^n - 1` moves |

use std::collections::BTreeSet;

use crate::counterexample::{Counterexample, StateSnapshot};
use crate::history::MoveHistory;
use crate::property::{PropertyChecker, PropertyResult};
use crate::types::{optimal_moves_count, Move, PileId, Unit};

const TLA_SPEC: &str = "lair.tla";

/// Observable state of anything that moves logs between three piles.
pub trait LairProperties {
    /// Number of logs in play.
    fn size(&self) -> u32;

    /// Current piles, indexed by [`PileId::index`], each listed top to bottom.
    fn piles(&self) -> [Vec<Unit>; 3];

    /// Every move performed since the initial configuration.
    fn history(&self) -> &MoveHistory;
}

/// Property checker for lairs.
///
/// Verifies the invariants of lair.tla against a lair's current piles and
/// its move history.
pub struct LairPropertyChecker<'a, T: LairProperties> {
    lair: &'a T,
    dst_seed: Option<u64>,
    expect_optimal: bool,
}

impl<'a, T: LairProperties> LairPropertyChecker<'a, T> {
    #[must_use]
    pub fn new(lair: &'a T) -> Self {
        Self {
            lair,
            dst_seed: None,
            expect_optimal: false,
        }
    }

    /// Set DST seed for counterexample reproduction.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        debug_assert!(seed != 0, "DST seed should not be zero");
        self.dst_seed = Some(seed);
        self
    }

    /// Require a solved lair to have taken exactly `2^n - 1` moves, not just
    /// at least that many.
    #[must_use]
    pub fn expect_optimal(mut self) -> Self {
        self.expect_optimal = true;
        self
    }

    fn counterexample(&self) -> Counterexample {
        match self.dst_seed {
            Some(seed) => Counterexample::with_seed(seed),
            None => Counterexample::new(),
        }
    }

    fn piles_snapshot(step: u64, description: String, piles: &[Vec<Unit>; 3]) -> StateSnapshot {
        StateSnapshot {
            step,
            description,
            variables: PileId::ALL
                .iter()
                .map(|p| (p.label().to_string(), format!("{:?}", piles[p.index()])))
                .collect(),
        }
    }

    /// Line 39: UnitsConserved
    fn check_units_conserved(&self) -> PropertyResult {
        let size = self.lair.size();
        let piles = self.lair.piles();
        let units_count: usize = piles.iter().map(Vec::len).sum();

        let mut seen = BTreeSet::new();
        let mut violation = None;
        for unit in piles.iter().flatten() {
            if *unit == 0 || *unit > size {
                violation = Some(format!("Log {} is not part of a lair of size {}", unit, size));
                break;
            }
            if !seen.insert(*unit) {
                violation = Some(format!("Log {} appears more than once", unit));
                break;
            }
        }
        if violation.is_none() && units_count != size as usize {
            let missing: Vec<Unit> = (1..=size).filter(|u| !seen.contains(u)).collect();
            violation = Some(format!(
                "Piles hold {} logs but the lair has {}; missing {:?}",
                units_count, size, missing
            ));
        }

        match violation {
            Some(message) => {
                let mut ce = self.counterexample();
                ce.add_state(Self::piles_snapshot(
                    self.lair.history().len() as u64,
                    message.clone(),
                    &piles,
                ));
                PropertyResult::fail("UnitsConserved", TLA_SPEC, 39, message, Some(ce))
            }
            None => PropertyResult::pass("UnitsConserved", TLA_SPEC, 39),
        }
    }

    /// Line 44: PilesOrdered
    fn check_piles_ordered(&self) -> PropertyResult {
        let piles = self.lair.piles();

        for pile in PileId::ALL {
            let units = &piles[pile.index()];
            if let Some(pair) = units.windows(2).find(|w| w[0] >= w[1]) {
                let message = format!(
                    "Log {} rests on log {} in the {} pile",
                    pair[0], pair[1], pile
                );
                let mut ce = self.counterexample();
                ce.add_state(Self::piles_snapshot(
                    self.lair.history().len() as u64,
                    message.clone(),
                    &piles,
                ));
                return PropertyResult::fail("PilesOrdered", TLA_SPEC, 44, message, Some(ce));
            }
        }

        PropertyResult::pass("PilesOrdered", TLA_SPEC, 44)
    }

    /// Line 48: LegalMoves
    ///
    /// Replays the history from the initial configuration. Every move must
    /// take the top log of its source pile and land on an empty pile or a
    /// larger log, and the replay must end in the lair's current piles.
    fn check_legal_moves(&self) -> PropertyResult {
        let size = self.lair.size();

        // Bottom to top, so the top is the last element.
        let mut replay: [Vec<Unit>; 3] = [(1..=size).rev().collect(), Vec::new(), Vec::new()];

        for mv in self.lair.history() {
            if let Some(message) = Self::apply(&mut replay, mv) {
                let mut ce = self.counterexample();
                ce.add_state(Self::piles_snapshot(
                    mv.step - 1,
                    "Before the offending move".to_string(),
                    &top_first(&replay),
                ));
                ce.add_state(StateSnapshot {
                    step: mv.step,
                    description: message.clone(),
                    variables: vec![
                        ("unit".to_string(), mv.unit.to_string()),
                        ("from".to_string(), mv.from.to_string()),
                        ("to".to_string(), mv.to.to_string()),
                    ],
                });
                return PropertyResult::fail("LegalMoves", TLA_SPEC, 48, message, Some(ce));
            }
        }

        let replayed = top_first(&replay);
        let current = self.lair.piles();
        if replayed != current {
            let message = format!(
                "Replaying {} moves gives {:?} but the piles are {:?}",
                self.lair.history().len(),
                replayed,
                current
            );
            return PropertyResult::fail("LegalMoves", TLA_SPEC, 48, message, None);
        }

        PropertyResult::pass("LegalMoves", TLA_SPEC, 48)
    }

    /// Apply one move to bottom-first piles, describing why it is illegal.
    fn apply(piles: &mut [Vec<Unit>; 3], mv: &Move) -> Option<String> {
        if mv.from == mv.to {
            return Some(format!("Move {} takes log {} onto its own pile", mv.step, mv.unit));
        }

        let top = piles[mv.from.index()].last().copied();
        if top != Some(mv.unit) {
            return Some(match top {
                Some(top) => format!(
                    "Move {} takes log {} from {} but its top log is {}",
                    mv.step, mv.unit, mv.from, top
                ),
                None => format!(
                    "Move {} takes log {} from the empty {} pile",
                    mv.step, mv.unit, mv.from
                ),
            });
        }

        if let Some(&below) = piles[mv.to.index()].last() {
            if below < mv.unit {
                return Some(format!(
                    "Move {} places log {} onto smaller log {} in {}",
                    mv.step, mv.unit, below, mv.to
                ));
            }
        }

        piles[mv.from.index()].pop();
        piles[mv.to.index()].push(mv.unit);
        None
    }

    /// Line 53: MinimalMoves
    fn check_minimal_moves(&self) -> PropertyResult {
        let size = self.lair.size();
        let piles = self.lair.piles();
        let solved = piles[PileId::Destination.index()].len() == size as usize;
        if !solved {
            return PropertyResult::pass("MinimalMoves", TLA_SPEC, 53);
        }

        let moves = self.lair.history().len() as u64;
        let optimal = optimal_moves_count(size);
        let violation = if moves < optimal {
            Some(format!(
                "Solved {} logs in {} moves, fewer than the minimum {}",
                size, moves, optimal
            ))
        } else if self.expect_optimal && moves != optimal {
            Some(format!(
                "Solved {} logs in {} moves, expected exactly {}",
                size, moves, optimal
            ))
        } else {
            None
        };

        match violation {
            Some(message) => PropertyResult::fail("MinimalMoves", TLA_SPEC, 53, message, None),
            None => PropertyResult::pass("MinimalMoves", TLA_SPEC, 53),
        }
    }
}

fn top_first(piles: &[Vec<Unit>; 3]) -> [Vec<Unit>; 3] {
    piles.clone().map(|mut p| {
        p.reverse();
        p
    })
}

impl<T: LairProperties> PropertyChecker for LairPropertyChecker<'_, T> {
    fn check_all(&self) -> Vec<PropertyResult> {
        vec![
            self.check_units_conserved(),
            self.check_piles_ordered(),
            self.check_legal_moves(),
            self.check_minimal_moves(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-built lair state for exercising the checker.
    struct TestLair {
        size: u32,
        piles: [Vec<Unit>; 3],
        history: MoveHistory,
    }

    impl TestLair {
        fn new(size: u32) -> Self {
            Self {
                size,
                piles: [(1..=size).collect(), Vec::new(), Vec::new()],
                history: MoveHistory::new(),
            }
        }

        /// Move the top log without checking anything.
        fn shift(&mut self, from: PileId, to: PileId) {
            let unit = self.piles[from.index()].remove(0);
            self.piles[to.index()].insert(0, unit);
            self.history.record(unit, from, to);
        }
    }

    impl LairProperties for TestLair {
        fn size(&self) -> u32 {
            self.size
        }

        fn piles(&self) -> [Vec<Unit>; 3] {
            self.piles.clone()
        }

        fn history(&self) -> &MoveHistory {
            &self.history
        }
    }

    fn result<'r>(results: &'r [PropertyResult], name: &str) -> &'r PropertyResult {
        results.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_solved_two_logs_passes_all() {
        let mut lair = TestLair::new(2);
        lair.shift(PileId::Source, PileId::Auxiliary);
        lair.shift(PileId::Source, PileId::Destination);
        lair.shift(PileId::Auxiliary, PileId::Destination);

        let checker = LairPropertyChecker::new(&lair).expect_optimal();
        assert!(checker.all_hold(), "{}", checker.summary().format_report());
    }

    #[test]
    fn test_initial_state_passes_all() {
        let lair = TestLair::new(4);
        assert!(LairPropertyChecker::new(&lair).all_hold());
    }

    #[test]
    fn test_empty_lair_passes_all() {
        let lair = TestLair::new(0);
        assert!(LairPropertyChecker::new(&lair).expect_optimal().all_hold());
    }

    #[test]
    fn test_illegal_move_detected() {
        let mut lair = TestLair::new(3);
        lair.shift(PileId::Source, PileId::Destination);
        // Log 2 onto log 1.
        lair.shift(PileId::Source, PileId::Destination);

        let checker = LairPropertyChecker::new(&lair).with_seed(99);
        let results = checker.check_all();

        let legal = result(&results, "LegalMoves");
        assert!(!legal.holds);
        assert!(legal.violation.as_ref().unwrap().contains("onto smaller log 1"));
        assert_eq!(legal.counterexample.as_ref().unwrap().dst_seed, Some(99));

        assert!(!result(&results, "PilesOrdered").holds);
        assert!(result(&results, "UnitsConserved").holds);
    }

    #[test]
    fn test_lost_log_detected() {
        let lair = TestLair {
            size: 3,
            piles: [vec![1], vec![], vec![3]],
            history: MoveHistory::new(),
        };

        let results = LairPropertyChecker::new(&lair).check_all();
        let conserved = result(&results, "UnitsConserved");
        assert!(!conserved.holds);
        assert!(conserved.violation.as_ref().unwrap().contains("missing [2]"));
    }

    #[test]
    fn test_duplicate_log_detected() {
        let lair = TestLair {
            size: 2,
            piles: [vec![1], vec![1], vec![]],
            history: MoveHistory::new(),
        };

        let results = LairPropertyChecker::new(&lair).check_all();
        assert!(!result(&results, "UnitsConserved").holds);
    }

    #[test]
    fn test_history_out_of_sync_detected() {
        let mut lair = TestLair::new(2);
        lair.history.record(1, PileId::Source, PileId::Auxiliary);

        let results = LairPropertyChecker::new(&lair).check_all();
        let legal = result(&results, "LegalMoves");
        assert!(!legal.holds);
        assert!(legal.violation.as_ref().unwrap().starts_with("Replaying 1 moves"));
    }

    #[test]
    fn test_wasted_moves_only_fail_when_optimal_expected() {
        let mut lair = TestLair::new(1);
        lair.shift(PileId::Source, PileId::Auxiliary);
        lair.shift(PileId::Auxiliary, PileId::Destination);

        assert!(LairPropertyChecker::new(&lair).all_hold());

        let results = LairPropertyChecker::new(&lair).expect_optimal().check_all();
        let minimal = result(&results, "MinimalMoves");
        assert!(!minimal.holds);
        assert!(minimal.violation.as_ref().unwrap().contains("expected exactly 1"));
    }
}
