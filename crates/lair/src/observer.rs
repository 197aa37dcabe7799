//! Hooks into a running transfer.

use lair_core::{Move, MoveHistory};

use crate::solver::Lair;

/// Called after every single-log move while a lair is being solved.
///
/// `lair` already reflects the move. Its move counter is only updated once
/// the whole transfer finishes; use `mv.step` for the running count.
pub trait MoveObserver {
    fn on_move(&mut self, mv: &Move, lair: &Lair);
}

/// Observer that ignores every move.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl MoveObserver for Silent {
    fn on_move(&mut self, _mv: &Move, _lair: &Lair) {}
}

impl MoveObserver for MoveHistory {
    fn on_move(&mut self, mv: &Move, _lair: &Lair) {
        self.push(*mv);
    }
}

impl<O: MoveObserver + ?Sized> MoveObserver for &mut O {
    fn on_move(&mut self, mv: &Move, lair: &Lair) {
        (**self).on_move(mv, lair);
    }
}

/// Observer built from a closure, see [`observe_fn`].
pub struct FnObserver<F>(F);

impl<F: FnMut(&Move, &Lair)> MoveObserver for FnObserver<F> {
    fn on_move(&mut self, mv: &Move, lair: &Lair) {
        (self.0)(mv, lair);
    }
}

/// Wrap a closure as a [`MoveObserver`].
///
/// ```
/// use lair::{observe_fn, Lair, Strategy};
///
/// let mut lair = Lair::new(3).unwrap();
/// let mut largest = 0;
/// lair.solve_with(Strategy::Recursive, &mut observe_fn(|mv, _| largest = largest.max(mv.unit)))
///     .unwrap();
/// assert_eq!(largest, 3);
/// ```
pub fn observe_fn<F: FnMut(&Move, &Lair)>(f: F) -> FnObserver<F> {
    FnObserver(f)
}
