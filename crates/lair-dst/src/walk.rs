//! Random walks through lair configurations.

use lair_core::{LairProperties, Move, MoveHistory, PileId, Unit};
use tracing::debug;

use crate::random::DeterministicRng;

/// A lair driven by random moves instead of the solver.
///
/// Starts with every log on the source pile. Each step moves the top log
/// of a random non-empty pile to another pile. Normally only legal moves
/// are chosen; with a fault probability set, an illegal move (onto a
/// smaller log) is injected instead whenever one is available.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    size: u32,
    /// Bottom to top, indexed by [`PileId::index`].
    piles: [Vec<Unit>; 3],
    history: MoveHistory,
    fault_probability: f64,
    faults_injected: u64,
}

impl RandomWalk {
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            piles: [(1..=size).rev().collect(), Vec::new(), Vec::new()],
            history: MoveHistory::new(),
            fault_probability: 0.0,
            faults_injected: 0,
        }
    }

    /// Inject illegal moves with the given probability per step.
    #[must_use]
    pub fn with_fault_probability(mut self, probability: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0.0, 1.0]"
        );
        self.fault_probability = probability;
        self
    }

    /// Run `steps` legal moves from the initial configuration.
    #[must_use]
    pub fn run(size: u32, steps: u64, rng: &mut DeterministicRng) -> Self {
        let mut walk = Self::new(size);
        walk.advance(steps, rng);
        walk
    }

    /// Take up to `steps` moves; stops early when no move is possible.
    pub fn advance(&mut self, steps: u64, rng: &mut DeterministicRng) -> u64 {
        let mut taken = 0;
        while taken < steps && self.step(rng).is_some() {
            taken += 1;
        }
        debug!(
            size = self.size,
            taken,
            faults = self.faults_injected,
            seed = rng.seed(),
            "random walk advanced"
        );
        taken
    }

    /// Take one move. `None` when the lair has no logs.
    pub fn step(&mut self, rng: &mut DeterministicRng) -> Option<Move> {
        if self.fault_probability > 0.0 && rng.gen_bool(self.fault_probability) {
            let illegal = self.candidate_moves(false);
            if let Some(&(from, to)) = rng.choose(&illegal) {
                self.faults_injected += 1;
                return self.apply(from, to);
            }
        }

        let legal = self.candidate_moves(true);
        let &(from, to) = rng.choose(&legal)?;
        self.apply(from, to)
    }

    /// All `(from, to)` pairs whose move is legal (or illegal).
    #[must_use]
    pub fn candidate_moves(&self, legal: bool) -> Vec<(PileId, PileId)> {
        let mut moves = Vec::new();
        for from in PileId::ALL {
            let Some(&unit) = self.piles[from.index()].last() else {
                continue;
            };
            for to in PileId::ALL {
                if to == from {
                    continue;
                }
                let fits = self.piles[to.index()].last().map_or(true, |&top| unit < top);
                if fits == legal {
                    moves.push((from, to));
                }
            }
        }
        moves
    }

    fn apply(&mut self, from: PileId, to: PileId) -> Option<Move> {
        let unit = self.piles[from.index()].pop()?;
        self.piles[to.index()].push(unit);
        Some(self.history.record(unit, from, to))
    }

    #[must_use]
    pub fn faults_injected(&self) -> u64 {
        self.faults_injected
    }

    /// Whether every log has reached the destination pile.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.piles[PileId::Destination.index()].len() == self.size as usize
    }
}

impl LairProperties for RandomWalk {
    fn size(&self) -> u32 {
        self.size
    }

    fn piles(&self) -> [Vec<Unit>; 3] {
        self.piles.clone().map(|mut pile| {
            pile.reverse();
            pile
        })
    }

    fn history(&self) -> &MoveHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_candidates() {
        let walk = RandomWalk::new(3);
        assert_eq!(
            walk.candidate_moves(true),
            vec![
                (PileId::Source, PileId::Auxiliary),
                (PileId::Source, PileId::Destination),
            ]
        );
        assert!(walk.candidate_moves(false).is_empty());
    }

    #[test]
    fn test_walk_is_reproducible() {
        let a = RandomWalk::run(4, 100, &mut DeterministicRng::new(7));
        let b = RandomWalk::run(4, 100, &mut DeterministicRng::new(7));
        assert_eq!(a.history(), b.history());
        assert_eq!(a.history().len(), 100);
    }

    #[test]
    fn test_empty_lair_cannot_move() {
        let mut walk = RandomWalk::new(0);
        let mut rng = DeterministicRng::new(1);
        assert_eq!(walk.advance(10, &mut rng), 0);
        assert!(walk.is_solved());
    }

    #[test]
    fn test_faults_are_counted() {
        let mut rng = DeterministicRng::new(99);
        let mut walk = RandomWalk::new(3).with_fault_probability(1.0);
        walk.advance(20, &mut rng);
        assert!(walk.faults_injected() > 0);
    }
}
