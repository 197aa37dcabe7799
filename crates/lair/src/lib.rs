//! # lair
//!
//! Moves a pile of logs from the Forest to the Hideout, one log at a time,
//! never resting a log on a smaller one, using the Base as the spare pile.
//!
//! - [`Pile`]: ordered logs with top-only push and pop
//! - [`Lair`]: three piles and the recursive transfer (`2^n - 1` moves)
//! - [`MoveObserver`]: hook called after every move
//! - [`move_growth`]: move counts per size, fed to a [`Reporter`]
//! - [`AuditedLair`]: solved lair plus history for the `lair-core` property checker
//!
//! ```
//! use lair::Lair;
//!
//! let mut lair = Lair::new(3).unwrap();
//! assert_eq!(lair.solve().unwrap(), 7);
//! assert_eq!(lair.destination().units(), vec![1, 2, 3]);
//! assert!(lair.source().is_empty() && lair.auxiliary().is_empty());
//! ```

pub mod audit;
pub mod growth;
pub mod observer;
pub mod pile;
pub mod solver;

pub use audit::AuditedLair;
pub use growth::{move_growth, GrowthConfig, GrowthPoint, Reporter, GROWTH_SIZE_MAX};
pub use observer::{observe_fn, FnObserver, MoveObserver, Silent};
pub use pile::Pile;
pub use solver::{Lair, Strategy};

pub use lair_core::{LairError, Move, PileId, Unit};
