//! Lehmer64: 128-bit multiplicative congruential generator.
//!
//! `state ← state · M (mod 2^128)` with the high 64 bits as output. The state
//! is kept odd so it never collapses to zero.

use super::{SplitMix64, UniformEngine};
use crate::convert::open_unit_from_u64;

/// 64-bit multiplier, also the PCG "cheap multiplier".
const MULTIPLIER: u128 = 0xda94_2042_e4dd_58b5;

/// SplitMix64 draws consumed per seed.
const SEED_WORDS: u64 = 2;

/// Lehmer64 generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lehmer64 {
    state: u128,
}

impl Lehmer64 {
    /// Stable engine name.
    pub const NAME: &'static str = "Lehmer64";

    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_mixer(&mut SplitMix64::new(seed))
    }

    fn from_mixer(mixer: &mut SplitMix64) -> Self {
        let hi = u128::from(mixer.next_u64());
        let lo = u128::from(mixer.next_u64());
        Self {
            state: (hi << 64) | lo | 1,
        }
    }

    /// Returns the 128-bit state.
    pub fn state(&self) -> u128 {
        self.state
    }

    /// Advances the generator and returns the next raw output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER);
        (self.state >> 64) as u64
    }
}

impl UniformEngine for Lehmer64 {
    fn name(&self) -> &str {
        Self::NAME
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (Lehmer64::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Lehmer64::next_u64(self)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        open_unit_from_u64(|| Lehmer64::next_u64(self))
    }

    fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    fn seed_and_forward(&mut self, seed: u64, count: u64) {
        let mut mixer = SplitMix64::new(seed);
        mixer.advance(count.wrapping_mul(SEED_WORDS));
        *self = Self::from_mixer(&mut mixer);
    }
}
