use lc_mechanics::meter::Aspect;

use super::{Context, find_item, print_signals};

pub fn despair(ctx: &Context, delta: i32) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().adjust_despair(&mut character, delta);
    applied.commit(&mut file)?;

    let change = &applied.result;
    println!("  Despair: {} -> {}", change.previous, change.value);
    print_signals(&applied.signals);
    Ok(())
}

pub fn set_trait(ctx: &Context, key: &str, left_count: u32) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx
        .engine()
        .set_trait_distribution(&mut character, key, left_count)
        .map_err(|e| e.to_string())?;
    applied.commit(&mut file)?;

    let t = character.character_trait(key).map_err(|e| e.to_string())?;
    println!(
        "  {key}: {} {} / {} {}",
        t.left, applied.result.left, t.right, applied.result.right
    );
    Ok(())
}

pub fn conviction_damage(ctx: &Context, id: &str, delta: i32) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let id = find_item(&character, id)?;
    let applied = ctx
        .engine()
        .adjust_conviction_damage(&mut character, id, delta)
        .map_err(|e| e.to_string())?;
    applied.commit(&mut file)?;

    let change = &applied.result;
    println!(
        "  Conviction {id}: damage {} -> {} of {}",
        change.previous, change.value, change.max
    );
    print_signals(&applied.signals);
    Ok(())
}

pub fn conviction_max(ctx: &Context, id: &str, max: i32) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let id = find_item(&character, id)?;
    let applied = ctx
        .engine()
        .set_conviction_max(&mut character, id, max)
        .map_err(|e| e.to_string())?;
    applied.commit(&mut file)?;

    let damage = applied.result;
    println!(
        "  Conviction {id}: damage {} of {}",
        damage.value(),
        damage.max()
    );
    Ok(())
}

pub fn reflect(ctx: &Context, aspect: &str) -> Result<(), String> {
    let aspect = Aspect::parse(aspect)
        .ok_or_else(|| format!("invalid aspect \"{aspect}\" (expected ethical or shadow)"))?;
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().mark_reflection(&mut character, aspect);
    applied.commit(&mut file)?;

    let change = &applied.result;
    if !change.marked {
        println!("  No free box for {aspect}");
    }
    println!(
        "  Reflection: ethical {} / shadow {}",
        change.ethical, change.shadow
    );
    print_signals(&applied.signals);
    Ok(())
}
