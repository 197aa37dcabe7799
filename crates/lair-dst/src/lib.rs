//! # lair-dst
//!
//! Deterministic simulation helpers for lairs.
//!
//! A seeded RNG drives random walks of legal (and optionally illegal) moves,
//! so the property checker can be exercised on arbitrary reachable
//! configurations, not just the solver's path. Every run is reproducible
//! from its seed.
//!
//! ```rust
//! use lair_core::{LairPropertyChecker, PropertyChecker};
//! use lair_dst::{DeterministicRng, RandomWalk};
//!
//! let mut rng = DeterministicRng::new(12345);
//! let walk = RandomWalk::run(4, 200, &mut rng);
//! assert!(LairPropertyChecker::new(&walk).with_seed(12345).all_hold());
//! ```
//!
//! To reproduce a failing test:
//! ```bash
//! DST_SEED=12345 cargo test
//! ```

pub mod random;
pub mod walk;

pub use random::DeterministicRng;
pub use walk::RandomWalk;

use tracing::info;

/// Errors from simulation setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DstError {
    #[error("DST_SEED must be a non-zero u64, got {0:?}")]
    InvalidSeed(String),
}

/// Get DST seed from the `DST_SEED` environment variable or generate one.
///
/// The seed is logged so a failing run can be reproduced.
pub fn get_or_generate_seed() -> Result<u64, DstError> {
    match std::env::var("DST_SEED") {
        Ok(raw) => {
            let seed = parse_seed(&raw)?;
            info!(seed, "DST_SEED={} (from environment)", seed);
            Ok(seed)
        }
        Err(_) => {
            // DeterministicRng rejects a zero seed.
            let seed = rand::random::<u64>().max(1);
            info!(seed, "DST_SEED={} (randomly generated)", seed);
            Ok(seed)
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64, DstError> {
    match raw.trim().parse::<u64>() {
        Ok(seed) if seed != 0 => Ok(seed),
        _ => Err(DstError::InvalidSeed(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed(" 7\n"), Ok(7));
        assert_eq!(parse_seed("0"), Err(DstError::InvalidSeed("0".to_string())));
        assert!(parse_seed("forest").is_err());
    }
}
