//! Random sources for delay draws and initial train placement.
//!
//! Everything random in the simulator goes through the [`RandomSource`]
//! trait so a run can be driven either by a seeded [`SimRng`] or by a
//! scripted [`SequenceRng`] that replays fixed values.
//!
//! # Draw discipline
//!
//! The movement engine makes exactly one [`RandomSource::unit`] call per
//! train per tick, in ascending `TrainId` order.  Placement makes three
//! [`RandomSource::index`] calls per train (station, direction, line).  With a
//! seeded `SimRng` the same seed therefore always replays the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random values.
pub trait RandomSource {
    /// Uniformly distributed value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniformly distributed index in `0..len`.
    ///
    /// Callers guarantee `len > 0`.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }

    #[inline]
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Used only from the single simulation thread; the parallel movement path
/// draws every value up front before fanning out.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs started this way are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        // `Standard` for f64 samples the half-open interval [0, 1).
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

// ── SequenceRng ───────────────────────────────────────────────────────────────

/// Replays a fixed, cycling list of unit values.
///
/// Intended for tests: `SequenceRng::constant(0.99)` never trips a delay
/// below probability `0.99`, `SequenceRng::constant(0.0)` trips every
/// non-zero probability.  `index(len)` maps the next unit value `u` to
/// `floor(u * len)`.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
    draws:  u64,
}

impl SequenceRng {
    /// # Panics
    /// Panics if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "SequenceRng values must lie in [0, 1)"
        );
        Self { values, cursor: 0, draws: 0 }
    }

    /// Always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Total number of values handed out so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RandomSource for SequenceRng {
    fn unit(&mut self) -> f64 {
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.draws += 1;
        v
    }

    fn index(&mut self, len: usize) -> usize {
        let u = self.unit();
        ((u * len as f64) as usize).min(len.saturating_sub(1))
    }
}
