use lc_mechanics::DicePool;

use super::Context;

/// Values outside 1..=6 come back unchanged.
pub fn flip(ctx: &Context, value: u32) -> Result<(), String> {
    println!("  {value} -> {}", ctx.engine().flip_die(value));
    Ok(())
}

pub fn reroll(ctx: &Context, pool: &[u32], index: usize) -> Result<(), String> {
    let pool = DicePool::from_values(pool.to_vec());
    let change = ctx
        .engine()
        .reroll_die(&pool, index)
        .map_err(|e| e.to_string())?;
    println!(
        "  Die {}: {} -> {}, pool {}",
        change.index, change.previous, change.value, change.pool
    );
    Ok(())
}
