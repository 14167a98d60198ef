use colored::Colorize;
use lc_mechanics::{Character, CharacterTrait, TraitDistribution};

use super::Context;
use crate::sheet_file::SheetFile;

pub fn run(ctx: &Context, name: &str, traits: &[String], force: bool) -> Result<(), String> {
    let mut character = Character::new(name);
    for arg in traits {
        let (key, character_trait) = parse_trait(arg)?;
        if character.traits.insert(key.clone(), character_trait).is_some() {
            return Err(format!("trait \"{key}\" given twice"));
        }
    }

    SheetFile::create(&ctx.sheet, &character, force)?;

    println!(
        "  {} {} ({})",
        "Created".green().bold(),
        character.name,
        ctx.sheet.display()
    );
    for (key, t) in &character.traits {
        println!("  {key}: {} [{}]", t.label(), t.distribution);
    }
    Ok(())
}

/// Parse `key=Left/Right` or `key=Left/Right:n`.
fn parse_trait(arg: &str) -> Result<(String, CharacterTrait), String> {
    let invalid = || format!("invalid trait \"{arg}\" (expected key=Left/Right:n)");

    let (key, rest) = arg.split_once('=').ok_or_else(invalid)?;
    let (names, left_count) = match rest.rsplit_once(':') {
        Some((names, n)) => (names, Some(n.trim().parse::<u32>().map_err(|_| invalid())?)),
        None => (rest, None),
    };
    let (left, right) = names.split_once('/').ok_or_else(invalid)?;
    let (key, left, right) = (key.trim(), left.trim(), right.trim());
    if key.is_empty() || left.is_empty() || right.is_empty() {
        return Err(invalid());
    }
    Character::check_trait_key(key).map_err(|e| e.to_string())?;

    let distribution = match left_count {
        Some(n) => TraitDistribution::new(n).map_err(|e| e.to_string())?,
        None => TraitDistribution::default(),
    };
    Ok((
        key.to_string(),
        CharacterTrait {
            left: left.to_string(),
            right: right.to_string(),
            distribution,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_trait() {
        let (key, t) = parse_trait("temper=Calm/Fierce:2").unwrap();
        assert_eq!(key, "temper");
        assert_eq!(t.label(), "Calm - Fierce");
        assert_eq!(t.distribution.left_count(), 2);
    }

    #[test]
    fn split_defaults_to_even() {
        let (_, t) = parse_trait("drive=Doubt/Resolve").unwrap();
        assert_eq!(t.distribution.left_count(), 3);
    }

    #[test]
    fn rejects_bad_traits() {
        assert!(parse_trait("temper").is_err());
        assert!(parse_trait("temper=Calm").is_err());
        assert!(parse_trait("temper=Calm/Fierce:9").is_err());
        assert!(parse_trait("=Calm/Fierce").is_err());
    }

    #[test]
    fn rejects_dotted_key() {
        let err = parse_trait("a.b=Calm/Fierce:2").unwrap_err();
        assert!(err.contains("invalid trait key"));
    }
}
