use colored::Colorize;
use lc_mechanics::{CheckModifiers, SidePick, TraitSide};

use super::{Context, print_signals};

pub fn run(
    ctx: &Context,
    sides: &[String],
    difficulty: Option<u32>,
    signature: bool,
    help: bool,
    conviction: Option<String>,
) -> Result<(), String> {
    let (_, character) = ctx.open()?;
    let picks = sides
        .iter()
        .map(|s| parse_pick(s))
        .collect::<Result<Vec<_>, _>>()?;
    let modifiers = CheckModifiers {
        signature_used: signature,
        help_used: help,
        conviction,
    };

    let mut engine = ctx.engine();
    let result = engine
        .check(&character, &picks, difficulty, &modifiers)
        .map_err(|e| e.to_string())?;

    let names: Vec<String> = result.sides.iter().map(ToString::to_string).collect();
    println!("  Sides: {}", names.join(", "));
    if let Some(conviction) = &result.conviction {
        println!("  Conviction: {conviction}");
    }
    let line = result.to_string();
    if result.success {
        println!("  {}", line.green().bold());
    } else {
        println!("  {}", line.red().bold());
    }
    Ok(())
}

pub fn hope(ctx: &Context) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let mut engine = ctx.engine();
    let applied = engine
        .hope_recovery(&mut character)
        .map_err(|e| e.to_string())?;
    applied.commit(&mut file)?;

    let hope = &applied.result;
    println!(
        "  Hope: dice {} removes {} Despair ({} -> {})",
        hope.dice, hope.reduction, hope.previous, hope.value
    );
    print_signals(&applied.signals);
    Ok(())
}

/// Parse `key:left` or `key:right`.
fn parse_pick(arg: &str) -> Result<SidePick, String> {
    let (key, side) = arg
        .rsplit_once(':')
        .ok_or_else(|| format!("invalid side \"{arg}\" (expected key:left or key:right)"))?;
    let side = TraitSide::parse(side)
        .ok_or_else(|| format!("invalid side \"{side}\" (expected left or right)"))?;
    Ok(SidePick::new(key.trim(), side))
}
