//! Dice pools: the ordered faces rolled for one check.

use serde::{Deserialize, Serialize};

use super::D6;
use super::source::RandomSource;
use crate::error::MechResult;

/// The ordered faces of one roll. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DicePool {
    values: Vec<u32>,
}

impl DicePool {
    /// Wrap already-rolled faces.
    pub fn from_values(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Roll `count` d6 from the given source.
    pub fn roll(count: usize, source: &mut impl RandomSource) -> MechResult<Self> {
        let values = source.draw(count, D6)?;
        Ok(Self { values })
    }

    /// The faces in roll order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// The face at `index`, if any.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// Replace the face at `index`. Returns the old face, or `None` when the
    /// index is out of bounds (the pool is then unchanged).
    pub(crate) fn replace(&mut self, index: usize, value: u32) -> Option<u32> {
        let slot = self.values.get_mut(index)?;
        Some(std::mem::replace(slot, value))
    }

    /// Sum of all faces.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// The highest single face, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// How many dice are in the pool.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
