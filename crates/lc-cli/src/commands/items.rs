use colored::Colorize;
use lc_mechanics::meter::Strength;
use lc_mechanics::{Applied, Item, ItemId, MechResult};

use super::{Context, find_item};
use crate::sheet_file::SheetFile;

/// Run an add command and report the new id.
fn added(
    file: &mut SheetFile,
    applied: MechResult<Applied<ItemId>>,
    what: &str,
    name: &str,
) -> Result<(), String> {
    let applied = applied.map_err(|e| e.to_string())?;
    applied.commit(file)?;
    println!(
        "  {} {what} \"{name}\" [{}]",
        "Added".green().bold(),
        applied.result
    );
    Ok(())
}

pub fn add_conviction(ctx: &Context, name: &str, strength: &str) -> Result<(), String> {
    let strength = Strength::parse(strength).ok_or_else(|| {
        format!("invalid strength \"{strength}\" (expected weak, stable, or strong)")
    })?;
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().add_conviction(&mut character, name, strength);
    added(&mut file, applied, "conviction", name)
}

pub fn add_equipment(ctx: &Context, name: &str) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().add_equipment(&mut character, name);
    added(&mut file, applied, "equipment", name)
}

pub fn add_modification(ctx: &Context, name: &str) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().add_modification(&mut character, name);
    added(&mut file, applied, "modification", name)
}

pub fn add_signature(ctx: &Context, name: &str) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let applied = ctx.engine().add_item(&mut character, Item::signature(name));
    added(&mut file, applied, "signature", name)
}

pub fn use_equipment(ctx: &Context, id: &str) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let id = find_item(&character, id)?;
    let applied = ctx
        .engine()
        .use_equipment(&mut character, id)
        .map_err(|e| e.to_string())?;
    applied.commit(&mut file)?;
    println!("  Equipment {id} used; it needs repair");
    Ok(())
}

pub fn repair_equipment(ctx: &Context, id: &str) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let id = find_item(&character, id)?;
    let applied = ctx
        .engine()
        .repair_equipment(&mut character, id)
        .map_err(|e| e.to_string())?;
    applied.commit(&mut file)?;
    println!("  Equipment {id} repaired");
    Ok(())
}

pub fn remove(ctx: &Context, id: &str) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let id = find_item(&character, id)?;
    let applied = ctx
        .engine()
        .remove_item(&mut character, id)
        .map_err(|e| e.to_string())?;
    applied.commit(&mut file)?;
    println!(
        "  {} {} \"{}\"",
        "Removed".yellow().bold(),
        applied.result.kind.name(),
        applied.result.name
    );
    Ok(())
}
