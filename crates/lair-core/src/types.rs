//! Units, pile identifiers and moves.

use std::fmt;

/// Size of a single log. A lair of size `n` holds the logs `1..=n`.
pub type Unit = u32;

/// Largest lair size whose optimal move count (`2^n - 1`) fits in a `u64`.
pub const SIZE_MAX: u32 = 64;

/// One of the three piles of a lair.
///
/// The solver always transfers from `Source` to `Destination`, using
/// `Auxiliary` as the spare pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PileId {
    /// Where every log starts ("Forest")
    Source,
    /// The spare pile ("Base")
    Auxiliary,
    /// Where every log must end up ("Hideout")
    Destination,
}

impl PileId {
    /// All piles, in storage order.
    pub const ALL: [PileId; 3] = [PileId::Source, PileId::Auxiliary, PileId::Destination];

    /// Position of this pile in a three-element array.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            PileId::Source => 0,
            PileId::Auxiliary => 1,
            PileId::Destination => 2,
        }
    }

    /// Display label of the pile.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PileId::Source => "Forest",
            PileId::Auxiliary => "Base",
            PileId::Destination => "Hideout",
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relocation of exactly one log from the top of one pile to the top of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// 1-based position of this move in the run
    pub step: u64,
    /// The log that moved
    pub unit: Unit,
    pub from: PileId,
    pub to: PileId,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} log {} {} -> {}",
            self.step, self.unit, self.from, self.to
        )
    }
}

/// Number of moves the optimal transfer of `size` logs takes: `2^size - 1`.
#[must_use]
pub fn optimal_moves_count(size: u32) -> u64 {
    debug_assert!(size <= SIZE_MAX, "Size {} exceeds {}", size, SIZE_MAX);

    if size == 0 {
        return 0;
    }
    u64::MAX >> (SIZE_MAX - size)
}
