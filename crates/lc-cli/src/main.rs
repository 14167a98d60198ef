//! CLI frontend for the Lost Connection mechanics engine.

mod commands;
mod sheet_file;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lc",
    about = "Lost Connection: checks, meters, and items for a character sheet",
    version,
    propagate_version = true
)]
struct Cli {
    /// Character sheet file
    #[arg(long, global = true, default_value = "character.json")]
    sheet: PathBuf,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character sheet
    New {
        /// Character name
        name: String,

        /// Trait as key=Left/Right:n, where n faces go to the left side
        #[arg(long = "trait", value_name = "KEY=LEFT/RIGHT:N")]
        traits: Vec<String>,

        /// Overwrite an existing sheet
        #[arg(short, long)]
        force: bool,
    },

    /// Show the character sheet
    Show,

    /// Roll a check against one or more trait sides
    Check {
        /// Trait side as key:left or key:right
        #[arg(long = "side", required = true, value_name = "KEY:SIDE")]
        sides: Vec<String>,

        /// Hits needed (default: 1)
        #[arg(short, long)]
        difficulty: Option<u32>,

        /// A Signature applies: one extra die
        #[arg(long)]
        signature: bool,

        /// Someone helps: one extra die
        #[arg(long)]
        help_die: bool,

        /// Conviction invoked for the check
        #[arg(long)]
        conviction: Option<String>,
    },

    /// Roll Hope to reduce Despair
    Hope,

    /// Raise or lower Despair
    Despair {
        /// Amount to add (negative to remove)
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },

    /// Set how many faces of a trait go to its left side
    Trait {
        /// Trait key
        key: String,

        /// Faces on the left side (1-5)
        left_count: u32,
    },

    /// Manage Convictions
    Conviction {
        #[command(subcommand)]
        action: ConvictionAction,
    },

    /// Mark the Reflection track
    Reflect {
        /// ethical or shadow
        aspect: String,
    },

    /// Manage Modifications
    Mod {
        #[command(subcommand)]
        action: ModAction,
    },

    /// Session bookkeeping
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Manage equipment
    Equipment {
        #[command(subcommand)]
        action: EquipmentAction,
    },

    /// Set Authority ranks
    Authority {
        #[command(subcommand)]
        action: AuthorityAction,
    },

    /// Manage any item
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Flip a die face (1 <-> 6, 2 <-> 5, 3 <-> 4)
    Flip {
        /// Die face
        value: u32,
    },

    /// Reroll one die of a pool
    Reroll {
        /// Pool faces, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        pool: Vec<u32>,

        /// Index of the die to reroll
        #[arg(long)]
        index: usize,
    },
}

#[derive(Subcommand)]
enum ConvictionAction {
    /// Add a Conviction
    Add {
        /// Conviction text
        name: String,

        /// weak, stable, or strong
        #[arg(short, long, default_value = "stable")]
        strength: String,
    },
    /// Damage or heal a Conviction
    Damage {
        /// Item id (or unique prefix)
        id: String,

        /// Damage to add (negative heals)
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
    /// Override a Conviction's damage maximum
    Max {
        /// Item id (or unique prefix)
        id: String,

        /// New maximum
        #[arg(allow_negative_numbers = true)]
        max: i32,
    },
}

#[derive(Subcommand)]
enum ModAction {
    /// Add a Modification
    Add {
        /// Modification name
        name: String,
    },
    /// Activate a Modification this session
    Activate {
        /// Item id (or unique prefix)
        id: String,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Start the next session
    Next,
}

#[derive(Subcommand)]
enum EquipmentAction {
    /// Add equipment
    Add {
        /// Equipment name
        name: String,
    },
    /// Use equipment; it then needs repair
    Use {
        /// Item id (or unique prefix)
        id: String,
    },
    /// Repair equipment
    Repair {
        /// Item id (or unique prefix)
        id: String,
    },
}

#[derive(Subcommand)]
enum AuthorityAction {
    /// Set the Fame rank: shell, frame, glitch, storm, blast
    Fame {
        /// Rank name
        rank: String,
    },
    /// Set the Status rank: ghost, mod, builder, guru, lead
    Status {
        /// Rank name
        rank: String,
    },
    /// Toggle authority drain
    Drain,
}

#[derive(Subcommand)]
enum ItemAction {
    /// Add a Signature
    Signature {
        /// Signature name
        name: String,
    },
    /// Remove an item
    Remove {
        /// Item id (or unique prefix)
        id: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context::new(cli.sheet, cli.seed);

    let result = match cli.command {
        Commands::New {
            name,
            traits,
            force,
        } => commands::new::run(&ctx, &name, &traits, force),
        Commands::Show => commands::show::run(&ctx),
        Commands::Check {
            sides,
            difficulty,
            signature,
            help_die,
            conviction,
        } => commands::check::run(&ctx, &sides, difficulty, signature, help_die, conviction),
        Commands::Hope => commands::check::hope(&ctx),
        Commands::Despair { delta } => commands::meters::despair(&ctx, delta),
        Commands::Trait { key, left_count } => commands::meters::set_trait(&ctx, &key, left_count),
        Commands::Conviction { action } => match action {
            ConvictionAction::Add { name, strength } => {
                commands::items::add_conviction(&ctx, &name, &strength)
            }
            ConvictionAction::Damage { id, delta } => {
                commands::meters::conviction_damage(&ctx, &id, delta)
            }
            ConvictionAction::Max { id, max } => commands::meters::conviction_max(&ctx, &id, max),
        },
        Commands::Reflect { aspect } => commands::meters::reflect(&ctx, &aspect),
        Commands::Mod { action } => match action {
            ModAction::Add { name } => commands::items::add_modification(&ctx, &name),
            ModAction::Activate { id } => commands::session::activate(&ctx, &id),
        },
        Commands::Session { action } => match action {
            SessionAction::Next => commands::session::next(&ctx),
        },
        Commands::Equipment { action } => match action {
            EquipmentAction::Add { name } => commands::items::add_equipment(&ctx, &name),
            EquipmentAction::Use { id } => commands::items::use_equipment(&ctx, &id),
            EquipmentAction::Repair { id } => commands::items::repair_equipment(&ctx, &id),
        },
        Commands::Authority { action } => match action {
            AuthorityAction::Fame { rank } => commands::authority::fame(&ctx, &rank),
            AuthorityAction::Status { rank } => commands::authority::status(&ctx, &rank),
            AuthorityAction::Drain => commands::authority::drain(&ctx),
        },
        Commands::Item { action } => match action {
            ItemAction::Signature { name } => commands::items::add_signature(&ctx, &name),
            ItemAction::Remove { id } => commands::items::remove(&ctx, &id),
        },
        Commands::Flip { value } => commands::dice::flip(&ctx, value),
        Commands::Reroll { pool, index } => commands::dice::reroll(&ctx, &pool, index),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
