//! Selection source for the quiz engine.
//!
//! The engine never touches a random number generator directly; it asks a
//! [`Picker`] for indices so tests can script the sequence of rounds.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice over `0..upper`.
pub trait Picker {
    /// Return an index in `0..upper`. `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

/// Picker backed by any `rand` generator.
pub struct RandomPicker<R> {
    rng: R,
}

impl RandomPicker<StdRng> {
    /// Entropy-seeded picker for interactive sessions.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible picker: the same seed yields the same session.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// A picker that replays a fixed sequence of indices.
///
/// Each value is reduced modulo `upper`. Once the script runs out it keeps
/// returning 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: VecDeque<usize>,
}

impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Number of scripted picks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, upper: usize) -> usize {
        self.script.pop_front().unwrap_or(0) % upper
    }
}
