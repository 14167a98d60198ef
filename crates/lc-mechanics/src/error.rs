//! Error types for the mechanics engine.

use crate::sheet::ItemId;

/// Errors that can occur during mechanics operations.
///
/// Every variant is raised before any die is drawn or any field is written,
/// so a failed operation leaves the character exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The request selected nothing to act on (empty trait selection,
    /// Hope recovery without Convictions).
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// A numeric argument fell outside the range the operation accepts.
    #[error("value out of range: {0}")]
    OutOfRangeValue(String),

    /// A trait key that is not on the character.
    #[error("unknown trait: {0}")]
    UnknownTrait(String),

    /// A trait key that cannot name a field (empty, or containing `.`).
    #[error("invalid trait key: \"{0}\"")]
    InvalidTraitKey(String),

    /// An item id that the character does not own.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    /// The item exists but is of a different kind than the command needs.
    #[error("item {id} is not a {expected}")]
    WrongItemKind {
        /// The offending item.
        id: ItemId,
        /// The kind the command operates on.
        expected: &'static str,
    },

    /// The random source could not produce the requested dice.
    #[error("random source failed: {0}")]
    RandomSource(String),

    /// A value could not be encoded for a field update.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
