//! Trait distributions: how a trait's six faces split between its two aspects.
//!
//! A trait such as "Calm - Fierce" owns the d6 faces `1..=6`. The left aspect
//! takes the low faces `1..=left_count`, the right aspect takes the rest.
//! Both aspects always hold at least one face, so `left_count` is `1..=5`.

use serde::{Deserialize, Serialize};

use crate::dice::{D6, DieRange};
use crate::error::{MechError, MechResult};

/// Which aspect of a trait is being selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitSide {
    /// The aspect holding the low faces.
    Left,
    /// The aspect holding the high faces.
    Right,
}

impl TraitSide {
    /// Parse `left`/`right` (also `l`/`r`), case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraitSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// The split of a trait's faces between its two aspects.
///
/// Serialized as the bare `left_count`; deserializing anything outside
/// `1..=5` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TraitDistribution {
    left_count: u32,
}

impl TraitDistribution {
    /// Smallest number of faces an aspect may hold.
    pub const MIN_LEFT: u32 = 1;
    /// Largest number of faces the left aspect may hold.
    pub const MAX_LEFT: u32 = D6 - 1;

    /// Create a distribution giving `left_count` faces to the left aspect.
    pub fn new(left_count: u32) -> MechResult<Self> {
        Self::validate(left_count)?;
        Ok(Self { left_count })
    }

    /// Move the split. On error the distribution is unchanged.
    pub fn set_left_count(&mut self, left_count: u32) -> MechResult<()> {
        Self::validate(left_count)?;
        self.left_count = left_count;
        Ok(())
    }

    /// Faces held by the left aspect.
    pub fn left_count(&self) -> u32 {
        self.left_count
    }

    /// Faces held by the right aspect.
    pub fn right_count(&self) -> u32 {
        D6 - self.left_count
    }

    /// `1..=left_count`.
    pub fn left_range(&self) -> DieRange {
        DieRange::new(1, self.left_count)
    }

    /// `left_count + 1..=6`.
    pub fn right_range(&self) -> DieRange {
        DieRange::new(self.left_count + 1, D6)
    }

    /// The range of the given side.
    pub fn range(&self, side: TraitSide) -> DieRange {
        match side {
            TraitSide::Left => self.left_range(),
            TraitSide::Right => self.right_range(),
        }
    }

    fn validate(left_count: u32) -> MechResult<()> {
        if (Self::MIN_LEFT..=Self::MAX_LEFT).contains(&left_count) {
            Ok(())
        } else {
            Err(MechError::OutOfRangeValue(format!(
                "trait split {left_count} outside {}..={}",
                Self::MIN_LEFT,
                Self::MAX_LEFT
            )))
        }
    }
}

impl Default for TraitDistribution {
    fn default() -> Self {
        Self { left_count: 3 }
    }
}

impl TryFrom<u32> for TraitDistribution {
    type Error = MechError;

    fn try_from(left_count: u32) -> MechResult<Self> {
        Self::new(left_count)
    }
}

impl From<TraitDistribution> for u32 {
    fn from(d: TraitDistribution) -> Self {
        d.left_count
    }
}

impl std::fmt::Display for TraitDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.left_count, self.right_count())
    }
}

/// A trait on a character sheet: two named aspects and their split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTrait {
    /// Name of the low-faces aspect.
    pub left: String,
    /// Name of the high-faces aspect.
    pub right: String,
    /// How the faces are split.
    pub distribution: TraitDistribution,
}

impl CharacterTrait {
    /// Create an evenly split trait.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            distribution: TraitDistribution::default(),
        }
    }

    /// Build from a `"Left - Right"` label.
    pub fn from_label(label: &str, distribution: TraitDistribution) -> Option<Self> {
        let (left, right) = label.split_once(" - ")?;
        let (left, right) = (left.trim(), right.trim());
        if left.is_empty() || right.is_empty() {
            return None;
        }
        Some(Self {
            left: left.to_string(),
            right: right.to_string(),
            distribution,
        })
    }

    /// Name of the given aspect.
    pub fn aspect(&self, side: TraitSide) -> &str {
        match side {
            TraitSide::Left => &self.left,
            TraitSide::Right => &self.right,
        }
    }

    /// `"Left - Right"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_split_partitions_the_die() {
        for n in 1..=5 {
            let d = TraitDistribution::new(n).unwrap();
            assert_eq!(d.left_range(), DieRange::new(1, n));
            assert_eq!(d.right_range(), DieRange::new(n + 1, 6));
            assert_eq!(d.left_count() + d.right_count(), 6);
            for face in 1..=6 {
                let in_left = d.left_range().contains(face);
                let in_right = d.right_range().contains(face);
                assert!(in_left ^ in_right, "face {face} with split {n}");
            }
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(matches!(
            TraitDistribution::new(0),
            Err(MechError::OutOfRangeValue(_))
        ));
        assert!(TraitDistribution::new(6).is_err());
    }

    #[test]
    fn failed_set_leaves_split_alone() {
        let mut d = TraitDistribution::new(2).unwrap();
        assert!(d.set_left_count(6).is_err());
        assert_eq!(d.left_count(), 2);
        assert_eq!(d.right_range(), DieRange::new(3, 6));
        d.set_left_count(5).unwrap();
        assert_eq!(d.right_range(), DieRange::new(6, 6));
    }

    #[test]
    fn deserialize_checks_bounds() {
        let ok: TraitDistribution = serde_json::from_str("4").unwrap();
        assert_eq!(ok.left_count(), 4);
        assert!(serde_json::from_str::<TraitDistribution>("0").is_err());
        assert!(serde_json::from_str::<TraitDistribution>("9").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "4");
    }

    #[test]
    fn display_shows_split() {
        assert_eq!(TraitDistribution::new(2).unwrap().to_string(), "2-4");
    }

    #[test]
    fn trait_label_round_trip() {
        let t = CharacterTrait::from_label("Calm - Fierce", TraitDistribution::default()).unwrap();
        assert_eq!(t.aspect(TraitSide::Left), "Calm");
        assert_eq!(t.aspect(TraitSide::Right), "Fierce");
        assert_eq!(t.label(), "Calm - Fierce");
        assert!(CharacterTrait::from_label("Calm", TraitDistribution::default()).is_none());
    }

    #[test]
    fn side_parse() {
        assert_eq!(TraitSide::parse("LEFT"), Some(TraitSide::Left));
        assert_eq!(TraitSide::parse("r"), Some(TraitSide::Right));
        assert_eq!(TraitSide::parse("up"), None);
    }
}
