//! The lair: three piles and the transfer that moves every log from the
//! Forest to the Hideout.
//!
//! The transfer of `count` logs from `source` to `destination` is:
//!
//! 1. transfer `count - 1` logs from `source` to `auxiliary`,
//! 2. move the exposed largest log from `source` to `destination`,
//! 3. transfer `count - 1` logs from `auxiliary` to `destination`.
//!
//! A log is only ever placed on an empty pile or a larger log, so the piles
//! stay ordered without any runtime check. The move count satisfies
//! `T(n) = 2 T(n - 1) + 1`, i.e. `2^n - 1`.

use std::fmt;

use lair_core::{optimal_moves_count, LairError, Move, PileId, SIZE_MAX};
use tracing::{debug, trace};

use crate::observer::{MoveObserver, Silent};
use crate::pile::Pile;

/// How the transfer is executed. Both produce the identical move sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Direct recursion; call depth equals the lair size.
    #[default]
    Recursive,
    /// Explicit frame stack; no call-stack growth.
    Iterative,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
        })
    }
}

/// Three piles of logs and a move counter.
///
/// Solving is a one-shot transition: a second `solve` fails with
/// [`LairError::AlreadySolved`].
#[derive(Debug, Clone)]
pub struct Lair {
    size: u32,
    /// Indexed by [`PileId::index`].
    piles: [Pile; 3],
    moves_count: u64,
    solved: bool,
}

/// One pending transfer in the iterative strategy.
#[derive(Debug, Clone, Copy)]
struct Frame {
    source: PileId,
    destination: PileId,
    auxiliary: PileId,
    count: u32,
}

impl Lair {
    /// Create a lair with `size` logs on the Forest pile.
    pub fn new(size: u32) -> Result<Self, LairError> {
        if size > SIZE_MAX {
            return Err(LairError::InvalidSize {
                size: i64::from(size),
            });
        }

        Ok(Self {
            size,
            piles: [
                Pile::full(PileId::Source, size),
                Pile::empty(PileId::Auxiliary, size),
                Pile::empty(PileId::Destination, size),
            ],
            moves_count: 0,
            solved: false,
        })
    }

    /// Create a lair from a signed size, rejecting negative values.
    pub fn from_signed(size: i64) -> Result<Self, LairError> {
        let size = u32::try_from(size).map_err(|_| LairError::InvalidSize { size })?;
        Self::new(size)
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    #[must_use]
    pub fn source(&self) -> &Pile {
        self.pile(PileId::Source)
    }

    #[must_use]
    pub fn auxiliary(&self) -> &Pile {
        self.pile(PileId::Auxiliary)
    }

    #[must_use]
    pub fn destination(&self) -> &Pile {
        self.pile(PileId::Destination)
    }

    /// Moves performed by the last completed `solve`.
    #[must_use]
    pub fn moves_count(&self) -> u64 {
        self.moves_count
    }

    /// Total logs across all piles; always equal to `size`.
    #[must_use]
    pub fn units_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Move every log to the Hideout and return the number of moves.
    pub fn solve(&mut self) -> Result<u64, LairError> {
        self.solve_with(Strategy::Recursive, &mut Silent)
    }

    /// Same as [`solve`](Self::solve) without recursion.
    pub fn solve_iterative(&mut self) -> Result<u64, LairError> {
        self.solve_with(Strategy::Iterative, &mut Silent)
    }

    /// Solve with the given strategy, reporting every move to `observer`.
    pub fn solve_with<O: MoveObserver + ?Sized>(
        &mut self,
        strategy: Strategy,
        observer: &mut O,
    ) -> Result<u64, LairError> {
        if self.solved {
            return Err(LairError::AlreadySolved);
        }

        debug!(size = self.size, %strategy, "solving lair");

        let moves = match strategy {
            Strategy::Recursive => self.transfer(
                PileId::Source,
                PileId::Destination,
                PileId::Auxiliary,
                self.size,
                0,
                observer,
            )?,
            Strategy::Iterative => self.transfer_iterative(observer)?,
        };

        debug_assert_eq!(moves, optimal_moves_count(self.size));
        debug_assert_eq!(self.units_count(), self.size as usize);

        self.moves_count = moves;
        self.solved = true;

        debug!(size = self.size, moves, "lair solved");
        Ok(moves)
    }

    /// Transfer `count` logs and return the running move total, starting
    /// from `moves_done`.
    fn transfer<O: MoveObserver + ?Sized>(
        &mut self,
        source: PileId,
        destination: PileId,
        auxiliary: PileId,
        count: u32,
        moves_done: u64,
        observer: &mut O,
    ) -> Result<u64, LairError> {
        match count {
            0 => Ok(moves_done),
            1 => self.move_unit(source, destination, moves_done, observer),
            _ => {
                let moves_done =
                    self.transfer(source, auxiliary, destination, count - 1, moves_done, observer)?;
                let moves_done = self.move_unit(source, destination, moves_done, observer)?;
                self.transfer(auxiliary, destination, source, count - 1, moves_done, observer)
            }
        }
    }

    fn transfer_iterative<O: MoveObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<u64, LairError> {
        let mut moves_done = 0;
        let mut frames = Vec::with_capacity(2 * self.size as usize + 1);
        frames.push(Frame {
            source: PileId::Source,
            destination: PileId::Destination,
            auxiliary: PileId::Auxiliary,
            count: self.size,
        });

        while let Some(frame) = frames.pop() {
            match frame.count {
                0 => {}
                1 => {
                    moves_done =
                        self.move_unit(frame.source, frame.destination, moves_done, observer)?;
                }
                count => {
                    // Pushed in reverse so they run in recursion order.
                    frames.push(Frame {
                        source: frame.auxiliary,
                        destination: frame.destination,
                        auxiliary: frame.source,
                        count: count - 1,
                    });
                    frames.push(Frame { count: 1, ..frame });
                    frames.push(Frame {
                        source: frame.source,
                        destination: frame.auxiliary,
                        auxiliary: frame.destination,
                        count: count - 1,
                    });
                }
            }
        }

        Ok(moves_done)
    }

    fn move_unit<O: MoveObserver + ?Sized>(
        &mut self,
        from: PileId,
        to: PileId,
        moves_done: u64,
        observer: &mut O,
    ) -> Result<u64, LairError> {
        let unit = self.piles[from.index()].pop()?;
        debug_assert!(
            self.piles[to.index()].peek().map_or(true, |top| unit < top),
            "Log {} placed on a smaller log",
            unit
        );
        self.piles[to.index()].push(unit);

        let mv = Move {
            step: moves_done + 1,
            unit,
            from,
            to,
        };
        trace!(step = mv.step, unit, %from, %to, "moved log");
        observer.on_move(&mv, self);

        Ok(mv.step)
    }
}
