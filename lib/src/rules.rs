//! Rulesets for totalistic Life-like rules.

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Survival and birth thresholds of a totalistic Life-like rule.
///
/// A live cell stays alive iff its live-neighbor count lies in
/// `survival_min..=survival_max`; a dead cell comes alive iff the count
/// lies in `birth_min..=birth_max`. Both ranges are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ruleset {
    /// Minimum live neighbors for a live cell to stay alive.
    pub survival_min: usize,
    /// Maximum live neighbors for a live cell to stay alive.
    pub survival_max: usize,
    /// Minimum live neighbors for a dead cell to come alive.
    pub birth_min: usize,
    /// Maximum live neighbors for a dead cell to come alive.
    pub birth_max: usize,
}

impl Ruleset {
    /// Creates a ruleset from inclusive threshold ranges.
    ///
    /// The ranges are not checked here; see [`validate`](Self::validate).
    pub const fn new(
        survival_min: usize,
        survival_max: usize,
        birth_min: usize,
        birth_max: usize,
    ) -> Self {
        Ruleset {
            survival_min,
            survival_max,
            birth_min,
            birth_max,
        }
    }

    /// Conway's Game of Life, `B3/S23`.
    pub const fn conway() -> Self {
        Self::new(2, 3, 3, 3)
    }

    /// Carter Bays' 3D Life 5766: survival on 5 to 7 live neighbors,
    /// birth on exactly 6.
    pub const fn bays_5766() -> Self {
        Self::new(5, 7, 6, 6)
    }

    /// Looks up a ruleset by name.
    ///
    /// The standard 2D rule is named `conway`, `standard-2d` or `2d`;
    /// the standard 3D rule is named `bays-5766`, `standard-3d` or `3d`.
    pub fn named(name: &str) -> Result<Self, Error> {
        match name {
            "conway" | "standard-2d" | "2d" => Ok(Self::conway()),
            "bays-5766" | "standard-3d" | "3d" => Ok(Self::bays_5766()),
            _ => Err(Error::UnknownRuleset(name.to_string())),
        }
    }

    /// Checks that both threshold ranges are consistent.
    pub fn validate(&self) -> Result<(), Error> {
        if self.survival_min > self.survival_max {
            return Err(Error::SurvivalRange(self.survival_min, self.survival_max));
        }
        if self.birth_min > self.birth_max {
            return Err(Error::BirthRange(self.birth_min, self.birth_max));
        }
        Ok(())
    }

    /// Applies the rule to one cell, given its current state and the number
    /// of live cells in its neighborhood.
    #[inline]
    pub fn next_state(&self, state: State, live_neighbors: usize) -> State {
        let alive = if state.is_alive() {
            (self.survival_min..=self.survival_max).contains(&live_neighbors)
        } else {
            (self.birth_min..=self.birth_max).contains(&live_neighbors)
        };
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// Conway's rule.
impl Default for Ruleset {
    fn default() -> Self {
        Self::conway()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_transitions() {
        let rule = Ruleset::conway();
        assert_eq!(rule.next_state(ALIVE, 1), DEAD);
        assert_eq!(rule.next_state(ALIVE, 2), ALIVE);
        assert_eq!(rule.next_state(ALIVE, 3), ALIVE);
        assert_eq!(rule.next_state(ALIVE, 4), DEAD);
        assert_eq!(rule.next_state(DEAD, 2), DEAD);
        assert_eq!(rule.next_state(DEAD, 3), ALIVE);
        assert_eq!(rule.next_state(DEAD, 4), DEAD);
    }

    #[test]
    fn named_rulesets() {
        assert_eq!(Ruleset::named("standard-2d").unwrap(), Ruleset::conway());
        assert_eq!(Ruleset::named("standard-3d").unwrap(), Ruleset::bays_5766());
        assert_eq!(
            Ruleset::named("brians-brain"),
            Err(Error::UnknownRuleset(String::from("brians-brain")))
        );
    }

    #[test]
    fn inconsistent_ranges() {
        assert_eq!(
            Ruleset::new(3, 2, 3, 3).validate(),
            Err(Error::SurvivalRange(3, 2))
        );
        assert_eq!(
            Ruleset::new(2, 3, 4, 3).validate(),
            Err(Error::BirthRange(4, 3))
        );
        assert_eq!(Ruleset::conway().validate(), Ok(()));
    }
}
