//! Conviction damage.
//!
//! A Conviction can take as much damage as its strength allows: one point
//! for a weak Conviction, two for a stable one, three for a strong one. At
//! the maximum the Conviction is lost. The engine only reports the loss;
//! removing the item is up to whoever owns the sheet.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::sheet::ItemId;
use crate::signal::Signal;

/// How firmly a Conviction is held. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// Lost after one point of damage.
    Weak,
    /// Lost after two.
    Stable,
    /// Lost after three.
    Strong,
}

impl Strength {
    /// All strengths, weakest first.
    pub const ALL: [Self; 3] = [Self::Weak, Self::Stable, Self::Strong];

    /// The damage a Conviction of this strength can take.
    pub fn damage_max(self) -> u32 {
        match self {
            Self::Weak => 1,
            Self::Stable => 2,
            Self::Strong => 3,
        }
    }

    /// Parse `weak`, `stable`, or `strong`, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weak" => Some(Self::Weak),
            "stable" => Some(Self::Stable),
            "strong" => Some(Self::Strong),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "weak"),
            Self::Stable => write!(f, "stable"),
            Self::Strong => write!(f, "strong"),
        }
    }
}

#[derive(Deserialize)]
struct RawDamage {
    value: u32,
    max: u32,
}

/// A damage counter with `value <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDamage")]
pub struct Damage {
    value: u32,
    max: u32,
}

impl Damage {
    /// Current damage.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Damage at which the Conviction is lost.
    pub fn max(&self) -> u32 {
        self.max
    }
}

impl TryFrom<RawDamage> for Damage {
    type Error = MechError;

    fn try_from(raw: RawDamage) -> MechResult<Self> {
        if raw.value > raw.max {
            return Err(MechError::OutOfRangeValue(format!(
                "damage {} above maximum {}",
                raw.value, raw.max
            )));
        }
        Ok(Self {
            value: raw.value,
            max: raw.max,
        })
    }
}

/// A Conviction item's mechanical state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conviction {
    /// How firmly it is held.
    pub strength: Strength,
    damage: Damage,
}

/// The result of damaging or healing a Conviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvictionChange {
    /// Damage before.
    pub previous: u32,
    /// Damage after.
    pub value: u32,
    /// The maximum in force.
    pub max: u32,
    /// Whether the Conviction is now lost.
    pub lost: bool,
    /// Signals raised (Loss at the maximum).
    pub signals: Vec<Signal>,
}

impl Conviction {
    /// An undamaged Conviction whose maximum follows from its strength.
    pub fn new(strength: Strength) -> Self {
        Self {
            strength,
            damage: Damage {
                value: 0,
                max: strength.damage_max(),
            },
        }
    }

    /// Current damage.
    pub fn damage_value(&self) -> u32 {
        self.damage.value
    }

    /// Damage at which the Conviction is lost.
    pub fn damage_max(&self) -> u32 {
        self.damage.max
    }

    /// Returns true when damage has reached the maximum.
    pub fn is_lost(&self) -> bool {
        self.damage.value >= self.damage.max
    }

    /// Add `delta` damage (negative heals), clamped to `0..=max`.
    pub fn adjust_damage(&mut self, id: ItemId, delta: i32) -> ConvictionChange {
        let previous = self.damage.value;
        let max = self.damage.max;
        let next = (i64::from(previous) + i64::from(delta)).clamp(0, i64::from(max));
        // Clamped into 0..=max, so it fits.
        self.damage.value = u32::try_from(next).unwrap_or(max);

        let lost = self.damage.value == max;
        let mut signals = Vec::new();
        if lost {
            tracing::warn!(%id, max, "conviction lost");
            signals.push(Signal::ConvictionLost(id));
        } else {
            tracing::debug!(%id, previous, value = self.damage.value, "conviction damage");
        }

        ConvictionChange {
            previous,
            value: self.damage.value,
            max,
            lost,
            signals,
        }
    }

    /// Override the maximum. Existing damage above it is cut down to it.
    ///
    /// A negative maximum is rejected with `OutOfRangeValue` and nothing changes.
    pub fn set_damage_max(&mut self, new_max: i32) -> MechResult<Damage> {
        let max = u32::try_from(new_max).map_err(|_| {
            MechError::OutOfRangeValue(format!("damage maximum {new_max} is negative"))
        })?;
        self.damage = Damage {
            value: self.damage.value.min(max),
            max,
        };
        tracing::debug!(max, value = self.damage.value, "conviction maximum set");
        Ok(self.damage)
    }
}
