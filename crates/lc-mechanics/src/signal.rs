//! Outbound signals.
//!
//! The engine never notifies anybody itself. Operations that cross a rules
//! threshold return a [`Signal`] and the host decides how to surface it.

use serde::{Deserialize, Serialize};

use crate::sheet::ItemId;

/// A rules threshold crossed by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "signal", content = "item", rename_all = "snake_case")]
pub enum Signal {
    /// Despair sits at its ceiling: the character breaks down.
    BreakdownTriggered,
    /// A Conviction's damage reached its maximum.
    ConvictionLost(ItemId),
    /// Ethical and shadow marks together fill the Reflection track.
    ReflectionTrackFull,
    /// A Modification was used again in the same session.
    ModificationOverused(ItemId),
    /// A Modification was used for the first time this session.
    ModificationActivated(ItemId),
}

impl Signal {
    /// Returns true for signals the host should treat as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::BreakdownTriggered | Self::ConvictionLost(_) | Self::ModificationOverused(_)
        )
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BreakdownTriggered => write!(f, "Breakdown triggered"),
            Self::ConvictionLost(id) => write!(f, "Conviction {id} lost"),
            Self::ReflectionTrackFull => write!(f, "Reflection track full"),
            Self::ModificationOverused(id) => write!(f, "Modification {id} overused"),
            Self::ModificationActivated(id) => write!(f, "Modification {id} activated"),
        }
    }
}
