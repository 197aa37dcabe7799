//! Stateright model for the lair.
//!
//! This model mirrors `specs/lair.tla`: piles are written top first and a
//! step moves the head of one pile onto another.

use lair_core::{PileId, Unit};
use stateright::Model;

/// State of the lair (corresponds to TLA+ `piles`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LairState {
    /// Indexed by [`PileId::index`], each pile top first
    pub piles: [Vec<Unit>; 3],
}

impl LairState {
    /// Every log on the source pile (TLA+ `Init`).
    pub fn new(size: u32) -> Self {
        Self {
            piles: [(1..=size).collect(), Vec::new(), Vec::new()],
        }
    }

    pub fn top(&self, pile: PileId) -> Option<Unit> {
        self.piles[pile.index()].first().copied()
    }

    /// TLA+ `CanMove`.
    pub fn can_move(&self, from: PileId, to: PileId) -> bool {
        if from == to {
            return false;
        }
        match (self.top(from), self.top(to)) {
            (Some(unit), Some(below)) => unit < below,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    // ========== Invariants (from TLA+ spec) ==========

    /// Line 39: UnitsConserved
    pub fn units_conserved(&self, size: u32) -> bool {
        let mut units: Vec<Unit> = self.piles.iter().flatten().copied().collect();
        units.sort_unstable();
        units.into_iter().eq(1..=size)
    }

    /// Line 44: PilesOrdered
    pub fn piles_ordered(&self) -> bool {
        self.piles
            .iter()
            .all(|pile| pile.windows(2).all(|w| w[0] < w[1]))
    }

    /// Line 50: Solved
    pub fn is_solved(&self, size: u32) -> bool {
        self.piles[PileId::Destination.index()].len() == size as usize
    }
}

/// A step of the model (TLA+ `Move(from, to)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LairAction {
    Move { from: PileId, to: PileId },
}

/// Model of a lair with `size` logs.
pub struct LairModel {
    pub size: u32,
}

/// Largest size worth exploring exhaustively (`3^size` states).
const SIZE_MAX: u32 = 8;

impl LairModel {
    pub fn new(size: u32) -> Self {
        debug_assert!(size <= SIZE_MAX, "Model checking {} logs is slow", size);
        Self { size }
    }
}

impl Model for LairModel {
    type State = LairState;
    type Action = LairAction;

    fn init_states(&self) -> Vec<Self::State> {
        vec![LairState::new(self.size)]
    }

    fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>) {
        for from in PileId::ALL {
            for to in PileId::ALL {
                if state.can_move(from, to) {
                    actions.push(LairAction::Move { from, to });
                }
            }
        }
    }

    fn next_state(&self, state: &Self::State, action: Self::Action) -> Option<Self::State> {
        let LairAction::Move { from, to } = action;
        if !state.can_move(from, to) {
            return None;
        }

        let mut next = state.clone();
        let unit = next.piles[from.index()].remove(0);
        next.piles[to.index()].insert(0, unit);
        Some(next)
    }

    fn properties(&self) -> Vec<stateright::Property<Self>> {
        vec![
            stateright::Property::always("UnitsConserved", |model: &Self, state: &Self::State| {
                state.units_conserved(model.size)
            }),
            stateright::Property::always("PilesOrdered", |_model: &Self, state: &Self::State| {
                state.piles_ordered()
            }),
            stateright::Property::sometimes("Solved", |model: &Self, state: &Self::State| {
                state.is_solved(model.size)
            }),
        ]
    }
}
