//! Injectable randomness for cost tie-breaking.
//!
//! # Determinism strategy
//!
//! The assignment cost carries a small jitter term so exact ties do not
//! always fall to the first employee in input order.  The jitter is drawn
//! through the [`JitterSource`] trait so that:
//!
//! - production runs use [`SeededJitter`], a `SmallRng` seeded from
//!   `RunConfig::seed`, which makes every run reproducible from its seed;
//! - tests use [`NoJitter`] and get a fully deterministic engine where ties
//!   go to the earliest employee in input order.
//!
//! A source is owned by exactly one run; nothing here is shared between
//! threads.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of the jitter added to each cost evaluation.
pub const JITTER_SPAN: f64 = 5.0;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Source of the tie-breaking term in the assignment cost.
///
/// # Contract
///
/// - Must return a value in `[0, JITTER_SPAN)`.
/// - Must be deterministic given its construction parameters.
pub trait JitterSource {
    fn jitter(&mut self) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    #[inline]
    fn jitter(&mut self) -> f64 {
        (**self).jitter()
    }
}

// ── NoJitter ──────────────────────────────────────────────────────────────────

/// A source that always returns zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    #[inline]
    fn jitter(&mut self) -> f64 {
        0.0
    }
}

// ── SeededJitter ──────────────────────────────────────────────────────────────

/// Uniform jitter in `[0, JITTER_SPAN)` from a seeded `SmallRng`.
pub struct SeededJitter(SmallRng);

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        SeededJitter(SmallRng::seed_from_u64(seed))
    }
}

impl JitterSource for SeededJitter {
    #[inline]
    fn jitter(&mut self) -> f64 {
        self.0.gen_range(0.0..JITTER_SPAN)
    }
}
