//! Single-die manipulation: Conviction flips and Equipment rerolls.
//!
//! Both work on one face of an existing pool and report the pool's plain
//! sum afterwards. Neither recounts hits; call
//! [`count_hits`](crate::check::count_hits) for that.

use serde::{Deserialize, Serialize};

use super::D6;
use super::pool::DicePool;
use super::source::RandomSource;
use crate::error::{MechError, MechResult};

/// Mirror a face across the die: 1<->6, 2<->5, 3<->4.
///
/// Values that are not a d6 face come back unchanged.
pub fn flip_value(value: u32) -> u32 {
    if (1..=D6).contains(&value) {
        D6 + 1 - value
    } else {
        value
    }
}

/// The pool after one of its dice was changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieChange {
    /// The updated pool.
    pub pool: DicePool,
    /// Which die changed.
    pub index: usize,
    /// Its face before the change.
    pub previous: u32,
    /// Its face after the change.
    pub value: u32,
    /// Plain sum of the updated pool.
    pub total: u32,
}

/// Reroll the die at `index`, drawing one fresh d6 from `source`.
///
/// The input pool is never touched: an out-of-bounds index or a failed draw
/// returns an error and the caller still holds the original faces.
pub fn reroll_die(
    pool: &DicePool,
    index: usize,
    source: &mut impl RandomSource,
) -> MechResult<DieChange> {
    check_index(pool, index)?;
    let fresh = source
        .draw(1, D6)?
        .first()
        .copied()
        .ok_or_else(|| MechError::RandomSource("no die returned for reroll".to_string()))?;
    let change = change_die(pool, index, fresh)?;
    tracing::debug!(
        index,
        previous = change.previous,
        value = change.value,
        total = change.total,
        "rerolled die"
    );
    Ok(change)
}

/// Flip the die at `index` to its opposite face.
pub fn flip_pool_die(pool: &DicePool, index: usize) -> MechResult<DieChange> {
    check_index(pool, index)?;
    let current = pool.values()[index];
    let change = change_die(pool, index, flip_value(current))?;
    tracing::debug!(index, previous = current, value = change.value, "flipped die");
    Ok(change)
}

fn check_index(pool: &DicePool, index: usize) -> MechResult<()> {
    if index < pool.len() {
        Ok(())
    } else {
        Err(MechError::OutOfRangeValue(format!(
            "die index {index} outside pool of {}",
            pool.len()
        )))
    }
}

fn change_die(pool: &DicePool, index: usize, value: u32) -> MechResult<DieChange> {
    let mut updated = pool.clone();
    let previous = updated.replace(index, value).ok_or_else(|| {
        MechError::OutOfRangeValue(format!("die index {index} outside pool of {}", pool.len()))
    })?;
    let total = updated.total();
    Ok(DieChange {
        pool: updated,
        index,
        previous,
        value,
        total,
    })
}
