//! The persistence boundary.
//!
//! The engine does not save anything. Each command describes what it changed
//! as a list of [`FieldUpdate`]s addressed by JSON field path; the host hands
//! them to a [`DocumentStore`] of its choosing and commits them together.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sheet::{CharacterId, ItemId};
use crate::signal::Signal;

/// One change to a stored sheet document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FieldChange {
    /// Write `value` at `path`, creating the field if needed.
    Set {
        /// Dot-separated field path, e.g. `reflection.ethical`.
        path: String,
        /// The new value.
        value: Value,
    },
    /// Delete the field at `path`.
    Remove {
        /// Dot-separated field path.
        path: String,
    },
}

impl FieldChange {
    /// The path this change targets.
    pub fn path(&self) -> &str {
        match self {
            Self::Set { path, .. } | Self::Remove { path } => path,
        }
    }
}

/// A field change addressed to one character document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldUpdate {
    /// The document to change.
    pub entity: CharacterId,
    /// What to change.
    #[serde(flatten)]
    pub change: FieldChange,
}

impl FieldUpdate {
    /// Set `path` to `value` on `entity`.
    pub fn set(entity: CharacterId, path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            entity,
            change: FieldChange::Set {
                path: path.into(),
                value: value.into(),
            },
        }
    }

    /// Remove `path` from `entity`.
    pub fn remove(entity: CharacterId, path: impl Into<String>) -> Self {
        Self {
            entity,
            change: FieldChange::Remove { path: path.into() },
        }
    }
}

/// Path of a field inside an owned item.
pub fn item_path(id: ItemId, field: &str) -> String {
    if field.is_empty() {
        format!("items.{}", id.0)
    } else {
        format!("items.{}.{field}", id.0)
    }
}

/// Where field updates end up.
pub trait DocumentStore {
    /// The store's failure type.
    type Error;

    /// Apply every update of one command, all or nothing.
    fn commit(&mut self, updates: &[FieldUpdate]) -> Result<(), Self::Error>;
}

/// What a command did: its result, the signals it raised, and the field
/// updates the host must persist.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    /// Command-specific result.
    pub result: T,
    /// Signals, in the order they were raised.
    pub signals: Vec<Signal>,
    /// Field updates, in the order they were made.
    pub updates: Vec<FieldUpdate>,
}

impl<T> Applied<T> {
    /// A result with no signals.
    pub fn new(result: T, updates: Vec<FieldUpdate>) -> Self {
        Self {
            result,
            signals: Vec::new(),
            updates,
        }
    }

    /// Attach signals.
    pub fn with_signals(mut self, signals: Vec<Signal>) -> Self {
        self.signals = signals;
        self
    }

    /// Hand the updates to `store`.
    pub fn commit<S: DocumentStore>(&self, store: &mut S) -> Result<(), S::Error> {
        if self.updates.is_empty() {
            return Ok(());
        }
        store.commit(&self.updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        commits: Vec<Vec<FieldUpdate>>,
    }

    impl DocumentStore for Recorder {
        type Error = std::convert::Infallible;

        fn commit(&mut self, updates: &[FieldUpdate]) -> Result<(), Self::Error> {
            self.commits.push(updates.to_vec());
            Ok(())
        }
    }

    #[test]
    fn commit_forwards_updates_once() {
        let id = CharacterId::new();
        let applied = Applied::new(
            (),
            vec![
                FieldUpdate::set(id, "despair", 4),
                FieldUpdate::set(id, "reflection.ethical", 1),
            ],
        );
        let mut store = Recorder::default();
        applied.commit(&mut store).unwrap();
        assert_eq!(store.commits.len(), 1);
        assert_eq!(store.commits[0].len(), 2);
    }

    #[test]
    fn empty_commit_skips_store() {
        let mut store = Recorder::default();
        Applied::new(1, Vec::new()).commit(&mut store).unwrap();
        assert!(store.commits.is_empty());
    }

    #[test]
    fn item_paths_use_full_id() {
        let id = ItemId::new();
        assert_eq!(
            item_path(id, "damage.value"),
            format!("items.{}.damage.value", id.0)
        );
        assert_eq!(item_path(id, ""), format!("items.{}", id.0));
    }

    #[test]
    fn update_json_shape() {
        let id = CharacterId::new();
        let json = serde_json::to_value(FieldUpdate::set(id, "despair", 3)).unwrap();
        assert_eq!(json["op"], "set");
        assert_eq!(json["path"], "despair");
        assert_eq!(json["value"], 3);
        assert_eq!(FieldUpdate::remove(id, "items.x").change.path(), "items.x");
    }
}
