//! PCG64DXSM: 128-bit LCG with the "double xorshift multiply" output.
//!
//! The recurrence is `state ← state · M + inc (mod 2^128)` with the 64-bit
//! cheap multiplier `M`. The output permutes the *pre-step* state:
//!
//! ```text
//! hi ^= hi >> 32;  hi *= M;  hi ^= hi >> 48;  hi *= (lo | 1)
//! ```
//!
//! Seeds 0 and 12345 map to the state/increment pairs that NumPy's
//! `PCG64DXSM` derives from the same seeds, so those two streams match it
//! bit for bit.
//!
//! Jumps advance by a fixed quantum per unit with the affine fast-doubling
//! in [`crate::jump::AffineStep`].

use super::{SplitMix64, UniformEngine};
use crate::convert::open_unit_from_u64;
use crate::error::Result;
use crate::jump::AffineStep;

/// Cheap 64-bit multiplier.
const CHEAP_MULTIPLIER: u64 = 0xda94_2042_e4dd_58b5;

/// Draws skipped per jump unit: 2^128 divided by the golden ratio.
pub const JUMP_QUANTUM: u128 = 0x9e37_79b9_7f4a_7c15_f39c_c060_5ced_c835;

const SEED_0: (u128, u128) = (
    0x1aa1_b534_5996_452d_0958_5eb7_a695_61e3,
    0x418d_dadb_3af7_1a82_5881_33bc_4478_73a9,
);

const SEED_12345: (u128, u128) = (
    0x1905_e033_5aae_9634_9199_b0d0_9775_add5,
    0xc9c7_353e_6e2b_1f28_7d76_1f2d_4027_fae7,
);

/// PCG64DXSM generator.
///
/// # Examples
///
/// ```rust
/// use zigrand::engines::Pcg64Dxsm;
///
/// let rng = Pcg64Dxsm::new(0);
/// assert_eq!(rng.state(), 0x1aa1b5345996452d09585eb7a69561e3);
/// assert_eq!(rng.increment(), 0x418ddadb3af71a82588133bc447873a9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg64Dxsm {
    state: u128,
    inc: u128,
}

impl Pcg64Dxsm {
    /// Stable engine name.
    pub const NAME: &'static str = "PCG64DXSM";

    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        match seed {
            0 => Self::from_parts(SEED_0.0, SEED_0.1),
            12345 => Self::from_parts(SEED_12345.0, SEED_12345.1),
            _ => Self::from_mixer(&mut SplitMix64::new(seed)),
        }
    }

    /// Creates a generator from an explicit state and increment.
    ///
    /// The increment is forced odd.
    pub fn from_parts(state: u128, increment: u128) -> Self {
        Self {
            state,
            inc: increment | 1,
        }
    }

    fn from_mixer(mixer: &mut SplitMix64) -> Self {
        let state = (u128::from(mixer.next_u64()) << 64) | u128::from(mixer.next_u64());
        let inc = (u128::from(mixer.next_u64()) << 64) | u128::from(mixer.next_u64());
        Self::from_parts(state, inc)
    }

    /// Returns the 128-bit LCG state.
    pub fn state(&self) -> u128 {
        self.state
    }

    /// Returns the odd 128-bit increment.
    pub fn increment(&self) -> u128 {
        self.inc
    }

    /// Advances the generator and returns the next raw output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let old = self.state;
        self.state = old
            .wrapping_mul(u128::from(CHEAP_MULTIPLIER))
            .wrapping_add(self.inc);
        dxsm(old)
    }

    /// Advances the state by `delta` draws in O(log delta).
    pub fn advance(&mut self, delta: u128) {
        self.state = self.step().pow(delta).apply(self.state);
    }

    fn step(&self) -> AffineStep {
        AffineStep::new(u128::from(CHEAP_MULTIPLIER), self.inc)
    }
}

#[inline]
fn dxsm(state: u128) -> u64 {
    let mut hi = (state >> 64) as u64;
    let lo = (state as u64) | 1;
    hi ^= hi >> 32;
    hi = hi.wrapping_mul(CHEAP_MULTIPLIER);
    hi ^= hi >> 48;
    hi.wrapping_mul(lo)
}

impl UniformEngine for Pcg64Dxsm {
    fn name(&self) -> &str {
        Self::NAME
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (Pcg64Dxsm::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Pcg64Dxsm::next_u64(self)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        open_unit_from_u64(|| Pcg64Dxsm::next_u64(self))
    }

    fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    fn supports_jump(&self) -> bool {
        true
    }

    /// Advances by `count × JUMP_QUANTUM` draws (mod 2^128) in one affine
    /// application.
    fn jump(&mut self, count: u64) -> Result<()> {
        self.advance(JUMP_QUANTUM.wrapping_mul(u128::from(count)));
        Ok(())
    }

    /// Seeds, special seeds included, then jumps `count` quanta.
    fn seed_and_forward(&mut self, seed: u64, count: u64) {
        *self = Self::new(seed);
        self.advance(JUMP_QUANTUM.wrapping_mul(u128::from(count)));
    }
}
