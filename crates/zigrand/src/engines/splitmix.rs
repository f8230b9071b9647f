//! SplitMix64 bit-mixing primitive.
//!
//! A Weyl sequence (additive counter) followed by a variant of the MurmurHash3
//! finaliser. Every other engine expands its 64-bit seed through this
//! generator; it is also selectable as an engine in its own right.
//!
//! Because the state is a plain counter, advancing the stream by `k` draws is
//! a single multiply-add.

use super::UniformEngine;
use crate::convert::open_unit_from_u64;

/// Weyl increment (2^64 divided by the golden ratio, made odd).
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Number of draws one seed-and-forward unit skips when SplitMix64 itself is
/// the active engine.
pub const FORWARD_STRIDE: u64 = 1 << 32;

/// SplitMix64 generator.
///
/// # Examples
///
/// ```rust
/// use zigrand::engines::SplitMix64;
///
/// let mut mixer = SplitMix64::new(0);
/// assert_eq!(mixer.next_u64(), 0xe220_a839_7b1d_cdaf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Stable engine name.
    pub const NAME: &'static str = "Splitmix64";

    /// Creates a generator whose counter starts at `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next mixed 64-bit value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }

    /// Skips `draws` outputs without computing them.
    #[inline]
    pub fn advance(&mut self, draws: u64) {
        self.state = self.state.wrapping_add(draws.wrapping_mul(GOLDEN_GAMMA));
    }

    /// Returns the raw counter.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }
}

/// The SplitMix64 output finaliser.
#[inline]
fn mix64(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl UniformEngine for SplitMix64 {
    fn name(&self) -> &str {
        Self::NAME
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (SplitMix64::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        SplitMix64::next_u64(self)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        open_unit_from_u64(|| SplitMix64::next_u64(self))
    }

    fn seed(&mut self, seed: u64) {
        self.state = seed;
    }

    fn seed_and_forward(&mut self, seed: u64, count: u64) {
        self.state = seed;
        self.advance(count.wrapping_mul(FORWARD_STRIDE));
    }
}
