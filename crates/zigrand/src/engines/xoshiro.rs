//! xoshiro256+ (Blackman & Vigna, 2018).
//!
//! Four 64-bit words updated by a xor/shift/rotate recurrence that is a
//! bijection on the nonzero 256-bit states. The output is `s[0] + s[3]`; its
//! lowest bits are weak, so 32-bit and floating-point draws use the top bits.
//!
//! The state is always expanded from SplitMix64 and is therefore never the
//! all-zero fixed point.

use super::{SplitMix64, UniformEngine};
use crate::convert::open_unit_from_u64;
use crate::error::Result;

/// Jump polynomial equivalent to 2^128 calls to `next_u64`.
const JUMP: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

/// Jump polynomial equivalent to 2^192 calls to `next_u64`.
const LONG_JUMP: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

/// xoshiro256+ generator.
///
/// # Examples
///
/// ```rust
/// use zigrand::engines::{UniformEngine, Xoshiro256Plus};
///
/// let mut a = Xoshiro256Plus::new(42);
/// let mut b = Xoshiro256Plus::new(42);
/// b.jump(1).unwrap();
/// assert_ne!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256Plus {
    s: [u64; 4],
}

impl Xoshiro256Plus {
    /// Stable engine name.
    pub const NAME: &'static str = "Xoshiro256+";

    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::from_mixer(&mut SplitMix64::new(seed))
    }

    fn from_mixer(mixer: &mut SplitMix64) -> Self {
        Self {
            s: [
                mixer.next_u64(),
                mixer.next_u64(),
                mixer.next_u64(),
                mixer.next_u64(),
            ],
        }
    }

    /// Returns the four state words.
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Advances the generator and returns the next raw output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = self.s[0].wrapping_add(self.s[3]);
        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Advances the state by 2^128 draws.
    pub fn short_jump(&mut self) {
        self.apply_jump(&JUMP);
    }

    /// Advances the state by 2^192 draws.
    pub fn long_jump(&mut self) {
        self.apply_jump(&LONG_JUMP);
    }

    /// Accumulates the state for every set bit of the jump polynomial,
    /// stepping once per bit, then replaces the state by the accumulator.
    fn apply_jump(&mut self, polynomial: &[u64; 4]) {
        let mut acc = [0u64; 4];
        for &word in polynomial {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(self.s.iter()) {
                        *a ^= *s;
                    }
                }
                self.next_u64();
            }
        }
        self.s = acc;
    }
}

impl UniformEngine for Xoshiro256Plus {
    fn name(&self) -> &str {
        Self::NAME
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (Xoshiro256Plus::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xoshiro256Plus::next_u64(self)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        open_unit_from_u64(|| Xoshiro256Plus::next_u64(self))
    }

    fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    fn supports_jump(&self) -> bool {
        true
    }

    /// Applies `count` long jumps (2^192 draws each).
    fn jump(&mut self, count: u64) -> Result<()> {
        for _ in 0..count {
            self.long_jump();
        }
        Ok(())
    }

    /// Seeds, then applies `count` long jumps.
    fn seed_and_forward(&mut self, seed: u64, count: u64) {
        *self = Self::new(seed);
        for _ in 0..count {
            self.long_jump();
        }
    }
}
