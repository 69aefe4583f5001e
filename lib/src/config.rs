//! World configuration.

use crate::{error::Error, rules::Ruleset, world::World};
use educe::Educe;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Side length of the grid, shared by every axis.
    #[educe(Default = 16)]
    pub n: usize,

    /// Survival and birth thresholds.
    #[educe(Default(expression = "Ruleset::conway()"))]
    pub ruleset: Ruleset,

    /// Seed for the initial random fill.
    ///
    /// `None` means a fresh seed from the operating system,
    /// so every run starts from a different grid.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with the given side length.
    pub fn new(n: usize) -> Self {
        Config {
            n,
            ..Config::default()
        }
    }

    /// Sets the ruleset.
    pub fn set_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    /// Sets the seed for the initial random fill.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Each cell of the world is filled with an independent fifty-fifty
    /// draw from a generator seeded by [`seed`](#structfield.seed).
    ///
    /// Returns an error if the side length is zero or the ruleset's
    /// threshold ranges are inconsistent.
    pub fn world<const D: usize>(&self) -> Result<World<D>, Error> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        World::new_with_rng(self, &mut rng)
    }
}
