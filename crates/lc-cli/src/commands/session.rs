use super::{Context, find_item, print_signals};

pub fn activate(ctx: &Context, id: &str) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let id = find_item(&character, id)?;
    let session = file.session();
    let applied = ctx
        .engine()
        .activate_modification(&mut character, &session, id)
        .map_err(|e| e.to_string())?;
    applied.commit(&mut file)?;

    if applied.result.overused {
        println!("  Despair is now {}", applied.result.despair);
    }
    print_signals(&applied.signals);
    Ok(())
}

pub fn next(ctx: &Context) -> Result<(), String> {
    let (mut file, mut character) = ctx.open()?;
    let session = file.session().next();
    let applied = ctx.engine().reset_session(&mut character, &session);
    file.commit_with_session(&applied.updates, session)?;

    println!(
        "  Now in {session}; {} modification(s) ready again",
        applied.result.len()
    );
    Ok(())
}
