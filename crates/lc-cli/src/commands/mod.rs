pub mod authority;
pub mod check;
pub mod dice;
pub mod items;
pub mod meters;
pub mod new;
pub mod session;
pub mod show;

use std::path::PathBuf;

use colored::Colorize;
use lc_mechanics::{Character, Engine, EngineConfig, ItemId, Signal};

use crate::sheet_file::SheetFile;

/// Global options shared by every command.
pub struct Context {
    pub sheet: PathBuf,
    pub seed: Option<u64>,
}

impl Context {
    pub fn new(sheet: PathBuf, seed: Option<u64>) -> Self {
        Self { sheet, seed }
    }

    pub fn engine(&self) -> Engine {
        let mut config = EngineConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Engine::from_config(config)
    }

    /// Load the sheet and decode its character.
    pub fn open(&self) -> Result<(SheetFile, Character), String> {
        let file = SheetFile::open(&self.sheet)?;
        let character = file.character()?;
        Ok((file, character))
    }
}

fn print_signals(signals: &[Signal]) {
    for signal in signals {
        if signal.is_warning() {
            println!("  {} {signal}", "!".red().bold());
        } else {
            println!("  {} {signal}", "*".green());
        }
    }
}

/// Resolve an item id or unique id prefix.
fn find_item(character: &Character, id: &str) -> Result<ItemId, String> {
    character
        .find_item(id)
        .ok_or_else(|| format!("no single item matches \"{id}\""))
}
