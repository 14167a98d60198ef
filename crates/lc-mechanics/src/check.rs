//! Check resolution: roll a pool and count hits against trait ranges.
//!
//! A check rolls two d6, plus one for a Signature and one for Help. Each
//! die is compared with every selected trait side; every side whose range
//! contains the face scores a hit. Overlapping sides stack, so one die can
//! score more than once. The check succeeds when hits reach the difficulty.

use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, DieRange, RandomSource};
use crate::distribution::TraitSide;
use crate::error::{MechError, MechResult};

/// Dice every check starts with.
pub const BASE_POOL: usize = 2;

/// One trait aspect chosen for a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedSide {
    /// Display name of the aspect (e.g. "Calm").
    pub name: String,
    /// The faces that count as hits for this aspect.
    pub range: DieRange,
}

impl SelectedSide {
    /// Create a selection from a name and range.
    pub fn new(name: impl Into<String>, range: DieRange) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    /// An unnamed selection, for callers that only have ranges.
    pub fn unnamed(low: u32, high: u32) -> Self {
        Self::new(format!("{low}-{high}"), DieRange::new(low, high))
    }
}

impl std::fmt::Display for SelectedSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.range)
    }
}

/// A trait key plus the aspect picked from it, before lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePick {
    /// Key of the trait on the character.
    pub trait_key: String,
    /// Which aspect.
    pub side: TraitSide,
}

impl SidePick {
    /// Pick `side` of the trait stored under `trait_key`.
    pub fn new(trait_key: impl Into<String>, side: TraitSide) -> Self {
        Self {
            trait_key: trait_key.into(),
            side,
        }
    }
}

/// Optional boosts applied when building the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckModifiers {
    /// A Signature applies: one extra die.
    pub signature_used: bool,
    /// Someone helps: one extra die.
    pub help_used: bool,
    /// The Conviction invoked for the check, if any. Descriptive only.
    pub conviction: Option<String>,
}

impl CheckModifiers {
    /// Number of dice the check rolls.
    pub fn pool_size(&self) -> usize {
        BASE_POOL + usize::from(self.signature_used) + usize::from(self.help_used)
    }
}

/// The outcome of a check. Returned to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The rolled faces.
    pub dice: DicePool,
    /// Hits scored against the selected sides.
    pub hits: u32,
    /// Hits needed.
    pub difficulty: u32,
    /// `hits >= difficulty`.
    pub success: bool,
    /// The sides the check was rolled against.
    pub sides: Vec<SelectedSide>,
    /// The Conviction invoked, if any.
    pub conviction: Option<String>,
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.success { "Success" } else { "Failure" };
        write!(
            f,
            "{verdict}: {} / {} hits, dice {}",
            self.hits, self.difficulty, self.dice
        )
    }
}

/// Count hits: one per (die, side) pair where the side's range holds the face.
pub fn count_hits(pool: &DicePool, sides: &[SelectedSide]) -> u32 {
    let mut hits = 0;
    for &face in pool.values() {
        for side in sides {
            if side.range.contains(face) {
                hits += 1;
            }
        }
    }
    hits
}

/// Resolve a check against the selected sides.
///
/// Fails with [`MechError::InvalidSelection`] when no side is selected, and
/// then nothing is drawn from `source`. A zero difficulty counts as 1.
pub fn resolve_check(
    sides: &[SelectedSide],
    difficulty: u32,
    modifiers: &CheckModifiers,
    source: &mut impl RandomSource,
) -> MechResult<CheckResult> {
    if sides.is_empty() {
        return Err(MechError::InvalidSelection(
            "select at least one trait for the check".to_string(),
        ));
    }
    let difficulty = difficulty.max(1);

    let dice = DicePool::roll(modifiers.pool_size(), source)?;
    let hits = count_hits(&dice, sides);
    let success = hits >= difficulty;

    tracing::debug!(
        pool = %dice,
        hits,
        difficulty,
        success,
        sides = sides.len(),
        "resolved check"
    );

    Ok(CheckResult {
        dice,
        hits,
        difficulty,
        success,
        sides: sides.to_vec(),
        conviction: modifiers.conviction.clone(),
    })
}
