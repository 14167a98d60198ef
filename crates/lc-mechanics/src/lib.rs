//! Check resolution and meter state for Lost Connection.
//!
//! Characters pick trait sides, roll a small pool of d6s, and count hits
//! against a difficulty. Around that core sit the meters a sheet tracks:
//! Despair, Conviction damage, the Reflection track, and once-per-session
//! Modifications. The [`Engine`] runs every command, raises [`Signal`]s for
//! notable transitions, and describes its writes as [`FieldUpdate`]s for a
//! host-side [`DocumentStore`].

pub mod check;
pub mod config;
pub mod dice;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod meter;
pub mod session;
pub mod sheet;
pub mod signal;
pub mod store;

pub use check::{CheckModifiers, CheckResult, SelectedSide, SidePick, count_hits, resolve_check};
pub use config::EngineConfig;
pub use dice::{DicePool, DieChange, DieRange, RandomSource, RngSource, ScriptedSource};
pub use distribution::{CharacterTrait, TraitDistribution, TraitSide};
pub use engine::{Engine, TraitRanges};
pub use error::{MechError, MechResult};
pub use meter::{Aspect, Conviction, DespairMeter, DespairState, ReflectionTrack, Strength};
pub use session::SessionContext;
pub use sheet::{Character, CharacterId, Item, ItemId, ItemKind};
pub use signal::Signal;
pub use store::{Applied, DocumentStore, FieldChange, FieldUpdate};
