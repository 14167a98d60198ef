//! Character sheets: traits, meters, authority, and owned items.
//!
//! A [`Character`] is the engine's view of a stored sheet document. The host
//! loads and saves it; the engine reads and changes fields through the
//! commands on [`Engine`](crate::Engine).

pub mod item;

pub use item::{Condition, Equipment, Item, ItemId, ItemKind};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::check::{SelectedSide, SidePick};
use crate::distribution::{CharacterTrait, TraitSide};
use crate::error::{MechError, MechResult};
use crate::meter::{Conviction, DespairMeter, Modification, ReflectionTrack, Strength};
use crate::session::SessionContext;

/// Unique identifier of a character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Fame ladder, lowest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FameRank {
    /// Unknown.
    #[default]
    Shell,
    /// Noticed.
    Frame,
    /// Talked about.
    Glitch,
    /// Trending.
    Storm,
    /// Everywhere.
    Blast,
}

/// Status ladder, lowest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusRank {
    /// No standing.
    #[default]
    Ghost,
    /// Trusted with moderation.
    Mod,
    /// Builds things others use.
    Builder,
    /// Sought out for advice.
    Guru,
    /// Leads the group.
    Lead,
}

macro_rules! rank_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// All ranks, lowest first.
            pub const ALL: &[Self] = &[$(Self::$variant),+];

            /// Parse a rank name, case-insensitive.
            pub fn parse(s: &str) -> Option<Self> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $name),)+
                }
            }
        }
    };
}

rank_names!(FameRank {
    Shell => "shell",
    Frame => "frame",
    Glitch => "glitch",
    Storm => "storm",
    Blast => "blast",
});

rank_names!(StatusRank {
    Ghost => "ghost",
    Mod => "mod",
    Builder => "builder",
    Guru => "guru",
    Lead => "lead",
});

/// Standing within the network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authority {
    /// Public reach.
    pub fame_rank: FameRank,
    /// Standing among peers.
    pub status_rank: StatusRank,
    /// Whether authority is being drained.
    pub drain: bool,
}

/// Convictions grouped by strength, as the sheet lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvictionGroups<'a> {
    /// Weak Convictions.
    pub weak: Vec<(ItemId, &'a Item)>,
    /// Stable Convictions.
    pub stable: Vec<(ItemId, &'a Item)>,
    /// Strong Convictions.
    pub strong: Vec<(ItemId, &'a Item)>,
}

/// A character's mechanical state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Document id.
    pub id: CharacterId,
    /// Character name.
    pub name: String,
    /// Traits by key.
    #[serde(default)]
    pub traits: BTreeMap<String, CharacterTrait>,
    /// The Despair meter.
    #[serde(default)]
    pub despair: DespairMeter,
    /// The Reflection track.
    #[serde(default)]
    pub reflection: ReflectionTrack,
    /// Authority ranks.
    #[serde(default)]
    pub authority: Authority,
    /// Owned items by id.
    #[serde(default)]
    pub items: BTreeMap<ItemId, Item>,
}

impl Character {
    /// A blank character with no traits or items.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            traits: BTreeMap::new(),
            despair: DespairMeter::default(),
            reflection: ReflectionTrack::default(),
            authority: Authority::default(),
            items: BTreeMap::new(),
        }
    }

    /// Builder helper: add a trait under `key`.
    pub fn with_trait(mut self, key: impl Into<String>, character_trait: CharacterTrait) -> Self {
        self.traits.insert(key.into(), character_trait);
        self
    }

    /// Trait keys become one segment of a dotted field path, so they must
    /// be non-empty and free of `.`.
    pub fn check_trait_key(key: &str) -> MechResult<()> {
        if key.is_empty() || key.contains('.') {
            return Err(MechError::InvalidTraitKey(key.to_string()));
        }
        Ok(())
    }

    /// Look up a trait.
    pub fn character_trait(&self, key: &str) -> MechResult<&CharacterTrait> {
        self.traits
            .get(key)
            .ok_or_else(|| MechError::UnknownTrait(key.to_string()))
    }

    /// Look up a trait for mutation.
    pub fn character_trait_mut(&mut self, key: &str) -> MechResult<&mut CharacterTrait> {
        self.traits
            .get_mut(key)
            .ok_or_else(|| MechError::UnknownTrait(key.to_string()))
    }

    /// The named range of one side of a trait.
    pub fn side(&self, key: &str, side: TraitSide) -> MechResult<SelectedSide> {
        let t = self.character_trait(key)?;
        Ok(SelectedSide::new(t.aspect(side), t.distribution.range(side)))
    }

    /// Resolve picks into selected sides, in order. Fails on the first
    /// unknown trait.
    pub fn select(&self, picks: &[SidePick]) -> MechResult<Vec<SelectedSide>> {
        picks
            .iter()
            .map(|p| self.side(&p.trait_key, p.side))
            .collect()
    }

    /// Look up an item.
    pub fn item(&self, id: ItemId) -> MechResult<&Item> {
        self.items.get(&id).ok_or(MechError::ItemNotFound(id))
    }

    /// Find an item by id prefix. Ambiguous or missing prefixes yield `None`.
    pub fn find_item(&self, prefix: &str) -> Option<ItemId> {
        let mut matches = self.items.keys().filter(|id| id.matches_prefix(prefix));
        let first = *matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// A Conviction item's state.
    pub fn conviction_mut(&mut self, id: ItemId) -> MechResult<&mut Conviction> {
        match &mut self.item_mut(id)?.kind {
            ItemKind::Conviction(c) => Ok(c),
            _ => Err(MechError::WrongItemKind {
                id,
                expected: "conviction",
            }),
        }
    }

    /// An Equipment item's state.
    pub fn equipment_mut(&mut self, id: ItemId) -> MechResult<&mut Equipment> {
        match &mut self.item_mut(id)?.kind {
            ItemKind::Equipment(e) => Ok(e),
            _ => Err(MechError::WrongItemKind {
                id,
                expected: "equipment",
            }),
        }
    }

    /// Split borrow: a Modification together with the Despair meter it
    /// charges on overuse.
    pub fn modification_and_despair(
        &mut self,
        id: ItemId,
    ) -> MechResult<(&mut Modification, &mut DespairMeter)> {
        let item = self.items.get_mut(&id).ok_or(MechError::ItemNotFound(id))?;
        match &mut item.kind {
            ItemKind::Modification(m) => Ok((m, &mut self.despair)),
            _ => Err(MechError::WrongItemKind {
                id,
                expected: "modification",
            }),
        }
    }

    fn item_mut(&mut self, id: ItemId) -> MechResult<&mut Item> {
        self.items.get_mut(&id).ok_or(MechError::ItemNotFound(id))
    }

    /// Number of Conviction items held.
    pub fn conviction_count(&self) -> usize {
        self.items
            .values()
            .filter(|i| matches!(i.kind, ItemKind::Conviction(_)))
            .count()
    }

    /// Convictions grouped weak, stable, strong.
    pub fn convictions_by_strength(&self) -> ConvictionGroups<'_> {
        let mut groups = ConvictionGroups::default();
        for (id, item) in &self.items {
            if let ItemKind::Conviction(c) = &item.kind {
                let bucket = match c.strength {
                    Strength::Weak => &mut groups.weak,
                    Strength::Stable => &mut groups.stable,
                    Strength::Strong => &mut groups.strong,
                };
                bucket.push((*id, item));
            }
        }
        groups
    }

    /// Clear every Modification marker left over from an earlier session.
    /// Returns the ids that were cleared.
    pub fn reset_session(&mut self, session: &SessionContext) -> Vec<ItemId> {
        let mut cleared = Vec::new();
        for (id, item) in &mut self.items {
            let ItemKind::Modification(m) = &mut item.kind else {
                continue;
            };
            if m.used_in_session().is_some_and(|s| s != *session) {
                m.reset();
                cleared.push(*id);
            }
        }
        cleared
    }

    /// Items of one kind, by kind name.
    pub fn items_of_kind<'a>(
        &'a self,
        kind: &'a str,
    ) -> impl Iterator<Item = (ItemId, &'a Item)> + 'a {
        self.items
            .iter()
            .filter(move |(_, i)| i.kind.name() == kind)
            .map(|(id, i)| (*id, i))
    }
}
