//! Modification usage.
//!
//! A Modification gives its benefit once per session. Activating it again
//! in the same session still works, but costs 4 Despair.

use serde::{Deserialize, Serialize};

use super::despair::DespairMeter;
use crate::session::SessionContext;
use crate::sheet::ItemId;
use crate::signal::Signal;

/// Despair added when a Modification is pushed past its one use.
pub const OVERUSE_PENALTY: u32 = 4;

/// A Modification item's mechanical state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modification {
    /// The session in which it was last activated.
    used_in_session: Option<SessionContext>,
}

/// The result of activating a Modification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationChange {
    /// First use this session.
    pub activated: bool,
    /// Used again this session; Despair went up.
    pub overused: bool,
    /// Despair after the activation.
    pub despair: u32,
    /// Signals raised, in order.
    pub signals: Vec<Signal>,
}

impl Modification {
    /// A Modification that has not been used yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if it was already activated during `session`.
    pub fn used_this_session(&self, session: &SessionContext) -> bool {
        self.used_in_session == Some(*session)
    }

    /// The session of the last activation.
    pub fn used_in_session(&self) -> Option<SessionContext> {
        self.used_in_session
    }

    /// Forget the last activation.
    pub fn reset(&mut self) {
        self.used_in_session = None;
    }

    /// Activate during `session`.
    ///
    /// The first activation marks the session. Any further activation
    /// in the same session leaves the mark alone and raises `despair` by
    /// [`OVERUSE_PENALTY`]; a Breakdown from that raise is reported after
    /// the overuse signal.
    pub fn activate(
        &mut self,
        id: ItemId,
        session: &SessionContext,
        despair: &mut DespairMeter,
    ) -> ModificationChange {
        if !self.used_this_session(session) {
            self.used_in_session = Some(*session);
            tracing::info!(%id, %session, "modification activated");
            return ModificationChange {
                activated: true,
                overused: false,
                despair: despair.value(),
                signals: vec![Signal::ModificationActivated(id)],
            };
        }

        tracing::warn!(%id, %session, "modification overused");
        let change = despair.increase(OVERUSE_PENALTY);
        let mut signals = vec![Signal::ModificationOverused(id)];
        signals.extend(change.signals);
        ModificationChange {
            activated: false,
            overused: true,
            despair: change.value,
            signals,
        }
    }
}
