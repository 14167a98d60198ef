//! Items a character owns: Convictions, Signatures, Equipment, Modifications.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::meter::{Conviction, Modification, Strength};

/// Unique identifier of an owned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns true if the full id starts with `prefix` (case-insensitive).
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim().to_lowercase();
        !prefix.is_empty() && self.0.to_string().starts_with(&prefix)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Wear state of a piece of equipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// In good order.
    #[default]
    Working,
    /// Showing wear.
    Worn,
    /// Out of service until repaired.
    Broken,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Working => write!(f, "working"),
            Self::Worn => write!(f, "worn"),
            Self::Broken => write!(f, "broken"),
        }
    }
}

/// A piece of equipment. Using it for a reroll means it needs repair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Wear state.
    pub condition: Condition,
    /// Set by use, cleared by repair.
    pub needs_repair: bool,
}

/// What an item is, with its kind-specific state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// A belief the character acts on.
    Conviction(Conviction),
    /// A signature move; adds a die to checks.
    Signature,
    /// Gear that can be used for a reroll.
    Equipment(Equipment),
    /// A once-per-session enhancement.
    Modification(Modification),
}

impl ItemKind {
    /// Lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conviction(_) => "conviction",
            Self::Signature => "signature",
            Self::Equipment(_) => "equipment",
            Self::Modification(_) => "modification",
        }
    }
}

/// An item on a character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Kind and state.
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    /// A fresh Conviction of the given strength.
    pub fn conviction(name: impl Into<String>, strength: Strength) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Conviction(Conviction::new(strength)),
        }
    }

    /// A Signature.
    pub fn signature(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Signature,
        }
    }

    /// Working equipment.
    pub fn equipment(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Equipment(Equipment::default()),
        }
    }

    /// An unused Modification.
    pub fn modification(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Modification(Modification::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conviction_json_layout() {
        let item = Item::conviction("Never again", Strength::Stable);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Never again",
                "type": "conviction",
                "strength": "stable",
                "damage": { "value": 0, "max": 2 }
            })
        );
    }

    #[test]
    fn equipment_json_layout() {
        let json = serde_json::to_value(Item::equipment("Deck")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Deck",
                "type": "equipment",
                "condition": "working",
                "needsRepair": false
            })
        );
    }

    #[test]
    fn round_trips_every_kind() {
        for item in [
            Item::conviction("a", Strength::Weak),
            Item::signature("b"),
            Item::equipment("c"),
            Item::modification("d"),
        ] {
            let text = serde_json::to_string(&item).unwrap();
            let back: Item = serde_json::from_str(&text).unwrap();
            assert_eq!(back, item);
        }
    }

    #[test]
    fn id_prefix_match() {
        let id = ItemId::new();
        let short = id.to_string();
        assert_eq!(short.len(), 8);
        assert!(id.matches_prefix(&short));
        assert!(id.matches_prefix(&short.to_uppercase()));
        assert!(!id.matches_prefix(""));
    }

    #[test]
    fn kind_names() {
        assert_eq!(Item::signature("x").kind.name(), "signature");
        assert_eq!(Item::modification("x").kind.name(), "modification");
    }
}
