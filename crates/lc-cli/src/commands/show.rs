use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use lc_mechanics::sheet::ConvictionGroups;
use lc_mechanics::{Character, ItemKind, Signal};

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let (file, character) = ctx.open()?;

    println!(
        "  {} [{}]",
        character.name.bold(),
        file.session().to_string().dimmed()
    );
    println!();

    let despair = character.despair.to_string();
    if character.despair.value() >= lc_mechanics::DespairMeter::MAX {
        println!("  {} ({})", despair.red().bold(), Signal::BreakdownTriggered);
    } else {
        println!("  {despair}");
    }
    println!(
        "  Reflection: ethical {} / shadow {} of {}",
        character.reflection.ethical(),
        character.reflection.shadow(),
        lc_mechanics::ReflectionTrack::CAPACITY
    );
    let authority = &character.authority;
    println!(
        "  Authority: fame {}, status {}{}",
        authority.fame_rank,
        authority.status_rank,
        if authority.drain { ", draining" } else { "" }
    );
    println!();

    if !character.traits.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Key", "Trait", "Left", "Right"]);
        for (key, t) in &character.traits {
            table.add_row(vec![
                key.clone(),
                t.label(),
                format!("{} {}", t.left, t.distribution.left_range()),
                format!("{} {}", t.right, t.distribution.right_range()),
            ]);
        }
        println!("{table}");
        println!();
    }

    print_convictions(&character.convictions_by_strength());
    print_other_items(&character, file.session());

    Ok(())
}

fn print_convictions(groups: &ConvictionGroups<'_>) {
    let rows = [
        ("weak", &groups.weak),
        ("stable", &groups.stable),
        ("strong", &groups.strong),
    ];
    if rows.iter().all(|(_, g)| g.is_empty()) {
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Conviction", "Strength", "Damage"]);
    for (strength, group) in rows {
        for (id, item) in group {
            let ItemKind::Conviction(c) = &item.kind else {
                continue;
            };
            let damage = if c.is_lost() {
                format!("{}/{} lost", c.damage_value(), c.damage_max())
            } else {
                format!("{}/{}", c.damage_value(), c.damage_max())
            };
            table.add_row(vec![
                id.to_string(),
                item.name.clone(),
                strength.to_string(),
                damage,
            ]);
        }
    }
    println!("{table}");
    println!();
}

fn print_other_items(character: &Character, session: lc_mechanics::SessionContext) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Item", "Type", "State"]);

    let mut count = 0;
    for (id, item) in &character.items {
        let state = match &item.kind {
            ItemKind::Conviction(_) => continue,
            ItemKind::Signature => "-".to_string(),
            ItemKind::Equipment(e) if e.needs_repair => format!("{}, needs repair", e.condition),
            ItemKind::Equipment(e) => e.condition.to_string(),
            ItemKind::Modification(m) if m.used_this_session(&session) => "used".to_string(),
            ItemKind::Modification(_) => "ready".to_string(),
        };
        table.add_row(vec![
            id.to_string(),
            item.name.clone(),
            item.kind.name().to_string(),
            state,
        ]);
        count += 1;
    }

    if count > 0 {
        println!("{table}");
        println!();
    }
}
