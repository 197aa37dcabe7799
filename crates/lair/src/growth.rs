//! Move-count growth across lair sizes.
//!
//! Plotting lives outside this crate. A [`Reporter`] receives one
//! `(size, moves)` pair per solved lair; a [`GrowthPoint`] adds the `2^size`
//! reference curve the plot compares against.

use lair_core::LairError;
use serde::Serialize;
use tracing::info;

use crate::observer::Silent;
use crate::solver::{Lair, Strategy};

/// Largest size a growth run accepts. Each size solves a fresh lair, so the
/// run takes about `2^(size_max + 1)` moves.
pub const GROWTH_SIZE_MAX: u32 = 24;

/// Consumer of solved lair sizes and their move counts.
pub trait Reporter {
    fn report(&mut self, size: u32, moves: u64);
}

/// One sample of the growth curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthPoint {
    pub size: u32,
    pub moves: u64,
    /// `2^size`, the reference curve
    pub reference: u128,
}

impl GrowthPoint {
    #[must_use]
    pub fn new(size: u32, moves: u64) -> Self {
        Self {
            size,
            moves,
            reference: 1u128 << size,
        }
    }
}

impl Reporter for Vec<GrowthPoint> {
    fn report(&mut self, size: u32, moves: u64) {
        self.push(GrowthPoint::new(size, moves));
    }
}

/// Configuration for a growth run.
#[derive(Debug, Clone)]
pub struct GrowthConfig {
    /// Largest size to solve (inclusive); sizes start at 1
    pub size_max: u32,
    pub strategy: Strategy,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            size_max: 16,
            strategy: Strategy::Recursive,
        }
    }
}

impl GrowthConfig {
    /// Small run for smoke tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            size_max: 8,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size_max(mut self, size_max: u32) -> Self {
        self.size_max = size_max;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<(), LairError> {
        if self.size_max > GROWTH_SIZE_MAX {
            return Err(LairError::InvalidSize {
                size: i64::from(self.size_max),
            });
        }
        Ok(())
    }
}

/// Solve a fresh lair for every size in `1..=size_max`, reporting each.
pub fn move_growth<R: Reporter + ?Sized>(
    config: &GrowthConfig,
    reporter: &mut R,
) -> Result<Vec<GrowthPoint>, LairError> {
    config.validate()?;

    let mut points = Vec::with_capacity(config.size_max as usize);
    for size in 1..=config.size_max {
        let mut lair = Lair::new(size)?;
        let moves = lair.solve_with(config.strategy, &mut Silent)?;
        reporter.report(size, moves);
        points.push(GrowthPoint::new(size, moves));
    }

    info!(
        size_max = config.size_max,
        strategy = %config.strategy,
        "growth run finished"
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_growth() {
        let mut reported: Vec<GrowthPoint> = Vec::new();
        let points = move_growth(&GrowthConfig::quick(), &mut reported).unwrap();

        assert_eq!(points, reported);
        assert_eq!(points.len(), 8);
        for point in &points {
            assert_eq!(point.moves as u128, point.reference - 1);
        }
        assert_eq!(points[2], GrowthPoint::new(3, 7));
    }

    #[test]
    fn test_zero_size_max_is_empty() {
        let mut reported: Vec<GrowthPoint> = Vec::new();
        let config = GrowthConfig::default().with_size_max(0);
        assert!(move_growth(&config, &mut reported).unwrap().is_empty());
        assert!(reported.is_empty());
    }

    #[test]
    fn test_size_max_limit() {
        let config = GrowthConfig::default().with_size_max(GROWTH_SIZE_MAX + 1);
        let mut reported: Vec<GrowthPoint> = Vec::new();
        assert_eq!(
            move_growth(&config, &mut reported).unwrap_err(),
            LairError::InvalidSize { size: 25 }
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&GrowthPoint::new(2, 3)).unwrap();
        assert_eq!(json, r#"{"size":2,"moves":3,"reference":4}"#);
    }
}
