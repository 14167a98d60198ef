//! Engine configuration.

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Difficulty used when a check does not name one.
    pub default_difficulty: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_difficulty: 1,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default difficulty (at least 1).
    pub fn with_default_difficulty(mut self, difficulty: u32) -> Self {
        self.default_difficulty = difficulty.max(1);
        self
    }
}
