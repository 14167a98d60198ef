//! Random sources that produce die results.
//!
//! The engine never calls an RNG directly. Every draw goes through a
//! [`RandomSource`], so tests can script exact faces and hosts can plug in
//! whatever dice service they trust.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MechError, MechResult};

/// A capability that rolls dice.
pub trait RandomSource {
    /// Roll `count` dice with `sides` faces each, in order.
    fn draw(&mut self, count: usize, sides: u32) -> MechResult<Vec<u32>>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw(&mut self, count: usize, sides: u32) -> MechResult<Vec<u32>> {
        (**self).draw(count, sides)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn draw(&mut self, count: usize, sides: u32) -> MechResult<Vec<u32>> {
        (**self).draw(count, sides)
    }
}

/// A [`RandomSource`] backed by a seedable standard RNG.
#[derive(Debug, Clone)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// A reproducible source: the same seed rolls the same dice.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for RngSource {
    fn draw(&mut self, count: usize, sides: u32) -> MechResult<Vec<u32>> {
        if sides == 0 {
            return Err(MechError::RandomSource(
                "cannot roll a die with zero sides".to_string(),
            ));
        }
        Ok((0..count)
            .map(|_| self.rng.random_range(1..=sides))
            .collect())
    }
}

/// A [`RandomSource`] that replays a fixed script of faces.
///
/// A draw that asks for more faces than remain fails without consuming any,
/// as does a draw whose next faces do not fit the requested die.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    faces: VecDeque<u32>,
    draws: usize,
}

impl ScriptedSource {
    /// Create a source that will yield `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            draws: 0,
        }
    }

    /// How many successful draw calls have been served.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Faces not yet handed out.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl RandomSource for ScriptedSource {
    fn draw(&mut self, count: usize, sides: u32) -> MechResult<Vec<u32>> {
        if count > self.faces.len() {
            return Err(MechError::RandomSource(format!(
                "scripted source exhausted: wanted {count}, have {}",
                self.faces.len()
            )));
        }
        if let Some(bad) = self
            .faces
            .iter()
            .take(count)
            .find(|&&face| face == 0 || face > sides)
        {
            return Err(MechError::RandomSource(format!(
                "scripted face {bad} does not fit a d{sides}"
            )));
        }
        self.draws += 1;
        Ok(self.faces.drain(..count).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_source_stays_on_the_die() {
        let mut source = RngSource::seeded(42);
        let faces = source.draw(50, 6).unwrap();
        assert_eq!(faces.len(), 50);
        assert!(faces.iter().all(|f| (1..=6).contains(f)));
    }

    #[test]
    fn rng_source_deterministic_with_seed() {
        let a = RngSource::seeded(99).draw(10, 6).unwrap();
        let b = RngSource::seeded(99).draw(10, 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rng_source_rejects_zero_sides() {
        assert!(RngSource::seeded(1).draw(1, 0).is_err());
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut source = ScriptedSource::new([2, 5, 4]);
        assert_eq!(source.draw(2, 6).unwrap(), vec![2, 5]);
        assert_eq!(source.draw(1, 6).unwrap(), vec![4]);
        assert_eq!(source.draws(), 2);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn scripted_source_exhaustion_consumes_nothing() {
        let mut source = ScriptedSource::new([3]);
        assert!(matches!(
            source.draw(2, 6),
            Err(MechError::RandomSource(_))
        ));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn scripted_source_rejects_faces_off_the_die() {
        let mut source = ScriptedSource::new([7]);
        assert!(source.draw(1, 6).is_err());
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn roll_one(mut source: impl RandomSource) -> u32 {
            source.draw(1, 6).unwrap()[0]
        }
        let mut source = ScriptedSource::new([6, 1]);
        assert_eq!(roll_one(&mut source), 6);
        assert_eq!(roll_one(&mut source), 1);
    }
}
