//! The Despair meter and Hope recovery.
//!
//! Despair runs from 0 to 10. Reaching 10 is a Breakdown; the meter keeps
//! reporting it on every increase while it stays there. Only a decrease
//! (for instance after the player gives up a Conviction) brings it back.

use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, RandomSource};
use crate::error::{MechError, MechResult};
use crate::signal::Signal;

/// The two states of the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DespairState {
    /// 0 to 9.
    Normal,
    /// At the ceiling.
    Breakdown,
}

/// Bounded 0..=10 Despair counter.
///
/// Serialized as a bare number; out-of-range values fail to deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DespairMeter {
    value: u32,
}

/// The result of moving the meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DespairChange {
    /// Value before.
    pub previous: u32,
    /// Value after.
    pub value: u32,
    /// Signals raised (Breakdown at the ceiling).
    pub signals: Vec<Signal>,
}

/// The result of a Hope roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopeRecovery {
    /// One die per Conviction held.
    pub dice: DicePool,
    /// The highest die, subtracted from Despair.
    pub reduction: u32,
    /// Despair before.
    pub previous: u32,
    /// Despair after.
    pub value: u32,
}

impl DespairMeter {
    /// The ceiling; reaching it triggers Breakdown.
    pub const MAX: u32 = 10;

    /// A meter at `value`, or `OutOfRangeValue` above the ceiling.
    pub fn new(value: u32) -> MechResult<Self> {
        if value > Self::MAX {
            return Err(MechError::OutOfRangeValue(format!(
                "despair {value} above {}",
                Self::MAX
            )));
        }
        Ok(Self { value })
    }

    /// Current value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Which state the meter is in.
    pub fn state(&self) -> DespairState {
        if self.value >= Self::MAX {
            DespairState::Breakdown
        } else {
            DespairState::Normal
        }
    }

    /// Raise by `amount`, stopping at the ceiling.
    pub fn increase(&mut self, amount: u32) -> DespairChange {
        let previous = self.value;
        self.value = self.value.saturating_add(amount).min(Self::MAX);

        let mut signals = Vec::new();
        if self.value == Self::MAX {
            tracing::warn!(previous, "despair at ceiling, breakdown");
            signals.push(Signal::BreakdownTriggered);
        } else {
            tracing::debug!(previous, value = self.value, "despair increased");
        }

        DespairChange {
            previous,
            value: self.value,
            signals,
        }
    }

    /// Lower by `amount`, stopping at zero.
    pub fn decrease(&mut self, amount: u32) -> DespairChange {
        let previous = self.value;
        self.value = self.value.saturating_sub(amount);
        tracing::debug!(previous, value = self.value, "despair decreased");
        DespairChange {
            previous,
            value: self.value,
            signals: Vec::new(),
        }
    }

    /// Move by a signed delta: positive increases, negative decreases.
    pub fn adjust(&mut self, delta: i32) -> DespairChange {
        if delta >= 0 {
            self.increase(delta.unsigned_abs())
        } else {
            self.decrease(delta.unsigned_abs())
        }
    }

    /// Roll one die per Conviction and subtract the highest face.
    ///
    /// With no Convictions this fails with `InvalidSelection` and draws
    /// nothing. A failed draw leaves the meter unchanged.
    pub fn hope_recovery(
        &mut self,
        conviction_count: usize,
        source: &mut impl RandomSource,
    ) -> MechResult<HopeRecovery> {
        if conviction_count == 0 {
            return Err(MechError::InvalidSelection(
                "at least one Conviction is needed to roll Hope".to_string(),
            ));
        }

        let dice = DicePool::roll(conviction_count, source)?;
        let reduction = dice.highest();
        let previous = self.value;
        self.value = self.value.saturating_sub(reduction);

        tracing::debug!(
            dice = %dice,
            reduction,
            previous,
            value = self.value,
            "hope recovery"
        );

        Ok(HopeRecovery {
            dice,
            reduction,
            previous,
            value: self.value,
        })
    }
}

impl TryFrom<u32> for DespairMeter {
    type Error = MechError;

    fn try_from(value: u32) -> MechResult<Self> {
        Self::new(value)
    }
}

impl From<DespairMeter> for u32 {
    fn from(meter: DespairMeter) -> Self {
        meter.value
    }
}

impl std::fmt::Display for DespairMeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Despair: {}/{}", self.value, Self::MAX)
    }
}
