//! The Reflection track: ethical and shadow marks sharing six boxes.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::signal::Signal;

/// Which kind of mark to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    /// A mark for acting on one's ethics.
    Ethical,
    /// A mark for giving in to one's shadow.
    Shadow,
}

impl Aspect {
    /// Parse `ethical` or `shadow`, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ethical" => Some(Self::Ethical),
            "shadow" => Some(Self::Shadow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ethical => write!(f, "ethical"),
            Self::Shadow => write!(f, "shadow"),
        }
    }
}

#[derive(Deserialize)]
struct RawTrack {
    ethical: u32,
    shadow: u32,
}

/// Two counters whose sum never exceeds [`ReflectionTrack::CAPACITY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTrack")]
pub struct ReflectionTrack {
    ethical: u32,
    shadow: u32,
}

/// The result of marking the track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionChange {
    /// Ethical marks after.
    pub ethical: u32,
    /// Shadow marks after.
    pub shadow: u32,
    /// Whether a mark was actually added.
    pub marked: bool,
    /// Whether the track is full.
    pub full: bool,
    /// Signals raised (Full once the boxes are used up).
    pub signals: Vec<Signal>,
}

impl ReflectionTrack {
    /// Boxes on the track; also the cap for each counter.
    pub const CAPACITY: u32 = 6;

    /// A track with the given marks.
    pub fn new(ethical: u32, shadow: u32) -> MechResult<Self> {
        if ethical.saturating_add(shadow) > Self::CAPACITY {
            return Err(MechError::OutOfRangeValue(format!(
                "reflection {ethical}+{shadow} exceeds {} boxes",
                Self::CAPACITY
            )));
        }
        Ok(Self { ethical, shadow })
    }

    /// Ethical marks.
    pub fn ethical(&self) -> u32 {
        self.ethical
    }

    /// Shadow marks.
    pub fn shadow(&self) -> u32 {
        self.shadow
    }

    /// Marks of the given aspect.
    pub fn get(&self, aspect: Aspect) -> u32 {
        match aspect {
            Aspect::Ethical => self.ethical,
            Aspect::Shadow => self.shadow,
        }
    }

    /// Returns true when every box is marked.
    pub fn is_full(&self) -> bool {
        self.ethical + self.shadow >= Self::CAPACITY
    }

    /// Add one mark of `aspect`.
    ///
    /// Nothing is added when that counter is already at the cap or when the
    /// track has no free box left. The Full signal is raised whenever the
    /// track is full afterwards, including on a mark that added nothing.
    pub fn mark(&mut self, aspect: Aspect) -> ReflectionChange {
        let marked = self.get(aspect) < Self::CAPACITY && !self.is_full();
        if marked {
            match aspect {
                Aspect::Ethical => self.ethical += 1,
                Aspect::Shadow => self.shadow += 1,
            }
        }

        let full = self.is_full();
        let mut signals = Vec::new();
        if full {
            tracing::info!(ethical = self.ethical, shadow = self.shadow, "reflection track full");
            signals.push(Signal::ReflectionTrackFull);
        } else {
            tracing::debug!(%aspect, marked, "reflection marked");
        }

        ReflectionChange {
            ethical: self.ethical,
            shadow: self.shadow,
            marked,
            full,
            signals,
        }
    }
}

impl TryFrom<RawTrack> for ReflectionTrack {
    type Error = MechError;

    fn try_from(raw: RawTrack) -> MechResult<Self> {
        Self::new(raw.ethical, raw.shadow)
    }
}
