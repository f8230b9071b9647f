//! Marsaglia multiply-with-carry generator with lag 256 (MWC8222).
//!
//! A circular buffer of 256 32-bit words and a carry. Each step moves the
//! position forward by one, forms `A · word + carry` in 64 bits, stores the
//! low half back as the new word (which is also the output) and keeps the
//! high half as the next carry.
//!
//! Doubles combine two successive words into a 52-bit-mantissa fixed-point
//! value, see [`fixed52_to_open_unit`].

use super::{SplitMix64, UniformEngine};
use crate::convert::fixed52_to_open_unit;

/// Multiplier.
const MWC_A: u64 = 809_430_660;
/// Initial carry.
const MWC_C: u32 = 362_436;
/// Lag (buffer length).
pub(crate) const MWC_R: usize = 256;

/// Knuth's LCG used by the legacy fill.
const LCG_MULT: u32 = 1_664_525;
const LCG_INC: u32 = 1_013_904_223;

/// MWC256 generator.
///
/// # Examples
///
/// ```rust
/// use zigrand::engines::{Mwc256, UniformEngine};
///
/// let mut rng = Mwc256::from_legacy_seed(12345);
/// assert_eq!(rng.next_u32(), 1_647_792_852);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mwc256 {
    state: [u32; MWC_R],
    carry: u32,
    index: usize,
}

impl Mwc256 {
    /// Stable engine name.
    pub const NAME: &'static str = "MWC256";

    /// Creates a generator whose 256 words are the upper halves of 256
    /// successive SplitMix64 draws from `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_mixer(&mut SplitMix64::new(seed))
    }

    /// Creates a generator from Doornik's original 32-bit seeding.
    ///
    /// The words are successive values of `s ← 1664525·s + 1013904223`
    /// starting from `seed`; a zero value is skipped.
    pub fn from_legacy_seed(seed: u32) -> Self {
        let mut state = [0u32; MWC_R];
        let mut s = seed;
        let mut filled = 0;
        while filled < MWC_R {
            s = s.wrapping_mul(LCG_MULT).wrapping_add(LCG_INC);
            if s == 0 {
                continue;
            }
            state[filled] = s;
            filled += 1;
        }
        Self::from_state(&state)
    }

    /// Creates a generator from a full 256-word state.
    ///
    /// The carry and position take their standard initial values.
    pub fn from_state(state: &[u32; MWC_R]) -> Self {
        Self {
            state: *state,
            carry: MWC_C,
            index: MWC_R - 1,
        }
    }

    fn from_mixer(mixer: &mut SplitMix64) -> Self {
        let mut state = [0u32; MWC_R];
        for word in state.iter_mut() {
            *word = (mixer.next_u64() >> 32) as u32;
        }
        Self::from_state(&state)
    }

    /// Returns the current carry.
    pub fn carry(&self) -> u32 {
        self.carry
    }

    /// Advances the generator and returns the next 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.index = (self.index + 1) & (MWC_R - 1);
        let t = MWC_A * u64::from(self.state[self.index]) + u64::from(self.carry);
        self.carry = (t >> 32) as u32;
        self.state[self.index] = t as u32;
        t as u32
    }
}

impl UniformEngine for Mwc256 {
    fn name(&self) -> &str {
        Self::NAME
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        Mwc256::next_u32(self)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        let hi = Mwc256::next_u32(self);
        let lo = Mwc256::next_u32(self);
        fixed52_to_open_unit(hi, lo)
    }

    fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    fn seed_and_forward(&mut self, seed: u64, count: u64) {
        let mut mixer = SplitMix64::new(seed);
        mixer.advance(count.wrapping_mul(MWC_R as u64));
        *self = Self::from_mixer(&mut mixer);
    }
}
