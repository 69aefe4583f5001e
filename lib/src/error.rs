//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Side length of the grid should be positive.
    NonPositiveSize,
    /// Inconsistent survival range: {0}..={1}.
    SurvivalRange(usize, usize),
    /// Inconsistent birth range: {0}..={1}.
    BirthRange(usize, usize),
    /// Unknown ruleset: {0:?}.
    UnknownRuleset(String),
}
