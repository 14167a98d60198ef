//! Six-sided dice: pools, random sources, and single-die manipulation.
//!
//! Every die in the game is a d6. A [`DieRange`] is the inclusive band of
//! faces a trait side covers; a die "hits" a side when its face lies inside.

pub mod manipulate;
pub mod pool;
pub mod source;

pub use manipulate::{DieChange, flip_pool_die, flip_value, reroll_die};
pub use pool::DicePool;
pub use source::{RandomSource, RngSource, ScriptedSource};

use serde::{Deserialize, Serialize};

/// Number of faces on every die the game rolls.
pub const D6: u32 = 6;

/// An inclusive range of die faces, e.g. `1-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieRange {
    /// Lowest face in the range.
    pub low: u32,
    /// Highest face in the range.
    pub high: u32,
}

impl DieRange {
    /// Create a range covering `low..=high`.
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Returns true if `value` lies inside the range, bounds included.
    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Number of faces covered.
    pub fn width(&self) -> u32 {
        (self.high + 1).saturating_sub(self.low)
    }
}

impl std::fmt::Display for DieRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
