//! Bounded meters that react to play: Despair, Conviction damage, the
//! Reflection track, and Modification usage.
//!
//! Each meter clamps its own value and returns the [`Signal`](crate::Signal)s
//! raised by a change alongside the new state.

pub mod conviction;
pub mod despair;
pub mod modification;
pub mod reflection;

pub use conviction::{Conviction, ConvictionChange, Damage, Strength};
pub use despair::{DespairChange, DespairMeter, DespairState, HopeRecovery};
pub use modification::{Modification, ModificationChange, OVERUSE_PENALTY};
pub use reflection::{Aspect, ReflectionChange, ReflectionTrack};
