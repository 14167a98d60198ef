use lc_mechanics::sheet::{FameRank, StatusRank};

use super::Context;

fn names<T: ToString>(all: &[T]) -> String {
    all.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

pub fn fame(ctx: &Context, rank: &str) -> Result<(), String> {
    let rank = FameRank::parse(rank)
        .ok_or_else(|| format!("invalid fame rank \"{rank}\" (expected {})", names(FameRank::ALL)))?;
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().set_fame_rank(&mut character, rank);
    applied.commit(&mut file)?;
    println!("  Fame: {rank}");
    Ok(())
}

pub fn status(ctx: &Context, rank: &str) -> Result<(), String> {
    let rank = StatusRank::parse(rank).ok_or_else(|| {
        format!(
            "invalid status rank \"{rank}\" (expected {})",
            names(StatusRank::ALL)
        )
    })?;
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().set_status_rank(&mut character, rank);
    applied.commit(&mut file)?;
    println!("  Status: {rank}");
    Ok(())
}

pub fn drain(ctx: &Context) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().toggle_drain(&mut character);
    applied.commit(&mut file)?;
    println!(
        "  Authority drain {}",
        if applied.result { "on" } else { "off" }
    );
    Ok(())
}
