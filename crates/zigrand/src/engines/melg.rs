//! MELG19937-64: 64-bit maximally equidistributed F2-linear generator with
//! period 2^19937 − 1 (Harase & Kimoto, 2018).
//!
//! The state is a circular buffer of 311 words plus an extra accumulator,
//! the *lung*. Each step combines two adjacent words, folds the result into
//! the lung through a GF(2) matrix step, rewrites the current word and
//! tempers it with a word 19 positions ahead.
//!
//! The two offsets (81 for the recurrence, 19 for the tempering) wrap
//! around the buffer at different positions, so stepping is a four-phase
//! state machine:
//!
//! | Phase | Index range | Recurrence word | Tempering word |
//! |-------|-------------|-----------------|----------------|
//! | forward | `0..230` | `i + 81` | `i + 19` |
//! | forward wrapped | `230..292` | `i − 230` | `i + 19` |
//! | lag wrapped | `292..310` | `i − 230` | `i − 292` |
//! | boundary | `310` | `80` | `18` |
//!
//! Jumping applies a fixed GF(2) polynomial worth 2^256 steps. Each unit
//! walks all 19940 polynomial bits and is by far the most expensive jump in
//! this crate.

use super::UniformEngine;
use crate::convert::open_unit_from_u64;
use crate::error::{Result, RngError};
use crate::jump::JumpPolynomial;

/// Buffer length.
const NN: usize = 311;
/// Recurrence offset.
const MM: usize = 81;
const MATRIX_A: u64 = 0x5c32_e06d_f730_fc42;
/// Upper `64 − 31` bits.
const MASKU: u64 = u64::MAX << 31;
const MASKL: u64 = !MASKU;
/// Tempering lag.
const LAG1: usize = 19;
const SHIFT1: u32 = 16;
const MASK1: u64 = 0x6aed_e6fd_97b3_38ec;
/// Index at which the tempering lag wraps.
const LAG1_OVER: usize = NN - LAG1;

const SEED_MULT: u64 = 6_364_136_223_846_793_005;
const KEY_MULT1: u64 = 3_935_559_000_370_003_845;
const KEY_MULT2: u64 = 2_862_933_555_777_941_757;
/// Single seed used to prime the buffer before key mixing.
const KEY_PRIME_SEED: u64 = 19_650_218;

/// Jump counts above this emit a `tracing` warning.
pub const JUMP_WARN_THRESHOLD: u64 = 64;

/// Stepping phase, determined by where the buffer offsets wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Both offsets ahead of the index stay inside the buffer.
    Forward,
    /// The recurrence offset has wrapped to the start of the buffer.
    ForwardWrapped,
    /// The tempering offset has wrapped as well.
    LagWrapped,
    /// Last word: its neighbour is word 0.
    Boundary,
}

impl Phase {
    fn at(index: usize) -> Self {
        match index {
            i if i < NN - MM => Phase::Forward,
            i if i < LAG1_OVER => Phase::ForwardWrapped,
            i if i < NN - 1 => Phase::LagWrapped,
            _ => Phase::Boundary,
        }
    }
}

#[inline]
fn mat3neg(t: u32, v: u64) -> u64 {
    v ^ (v << t)
}

#[inline]
fn mat3pos(t: u32, v: u64) -> u64 {
    v ^ (v >> t)
}

/// MELG19937-64 generator.
///
/// # Examples
///
/// ```rust
/// use zigrand::engines::Melg19937;
///
/// let mut rng = Melg19937::new(5489);
/// assert_eq!(rng.next_u64(), 0x923b_11e2_f473_b9bf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Melg19937 {
    state: [u64; NN],
    lung: u64,
    index: usize,
    phase: Phase,
}

impl Melg19937 {
    /// Stable engine name.
    pub const NAME: &'static str = "MELG19937";

    /// Creates a generator from a single seed with the reference
    /// linear-congruential fill.
    pub fn new(seed: u64) -> Self {
        let mut state = [0u64; NN];
        state[0] = seed;
        for i in 1..NN {
            let prev = state[i - 1];
            state[i] = SEED_MULT
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        let last = state[NN - 1];
        let lung = SEED_MULT
            .wrapping_mul(last ^ (last >> 62))
            .wrapping_add(NN as u64);
        Self {
            state,
            lung,
            index: 0,
            phase: Phase::Forward,
        }
    }

    /// Creates a generator from a key of arbitrary length.
    ///
    /// The top bit of word 0 is forced so the buffer is never all zero.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::EmptySeedKey`] when `key` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zigrand::engines::Melg19937;
    ///
    /// let mut rng = Melg19937::from_key(&[0x12345, 0x23456, 0x34567, 0x45678]).unwrap();
    /// assert_eq!(rng.next_u64(), 0xe76b_50f1_2f5e_26c1);
    /// assert!(Melg19937::from_key(&[]).is_err());
    /// ```
    pub fn from_key(key: &[u64]) -> Result<Self> {
        if key.is_empty() {
            return Err(RngError::EmptySeedKey);
        }
        Ok(Self::mix_key(key))
    }

    /// Key mixing; `key` must not be empty.
    fn mix_key(key: &[u64]) -> Self {
        debug_assert!(!key.is_empty());
        let mut rng = Self::new(KEY_PRIME_SEED);
        let s = &mut rng.state;

        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..NN.max(key.len()) {
            let prev = s[i - 1];
            s[i] = (s[i] ^ (prev ^ (prev >> 62)).wrapping_mul(KEY_MULT1))
                .wrapping_add(key[j])
                .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= NN {
                s[0] = s[NN - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..NN - 1 {
            let prev = s[i - 1];
            s[i] = (s[i] ^ (prev ^ (prev >> 62)).wrapping_mul(KEY_MULT2)).wrapping_sub(i as u64);
            i += 1;
            if i >= NN {
                s[0] = s[NN - 1];
                i = 1;
            }
        }
        let last = s[NN - 1];
        s[0] |= 1 << 63;

        rng.lung = (rng.lung ^ (last ^ (last >> 62)).wrapping_mul(KEY_MULT2))
            .wrapping_sub(NN as u64);
        rng.index = 0;
        rng.phase = Phase::Forward;
        rng
    }

    /// Returns the extra accumulator.
    pub fn lung(&self) -> u64 {
        self.lung
    }

    /// Returns the current buffer position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advances the generator and returns the next raw output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let i = self.index;
        match self.phase {
            Phase::Forward => {
                self.recur(i, i + 1, i + MM);
                self.index += 1;
                if self.index == NN - MM {
                    self.phase = Phase::ForwardWrapped;
                }
                self.temper(i, i + LAG1)
            }
            Phase::ForwardWrapped => {
                self.recur(i, i + 1, i + MM - NN);
                self.index += 1;
                if self.index == LAG1_OVER {
                    self.phase = Phase::LagWrapped;
                }
                self.temper(i, i + LAG1)
            }
            Phase::LagWrapped => {
                self.recur(i, i + 1, i + MM - NN);
                self.index += 1;
                if self.index == NN - 1 {
                    self.phase = Phase::Boundary;
                }
                self.temper(i, i - LAG1_OVER)
            }
            Phase::Boundary => {
                self.recur(NN - 1, 0, MM - 1);
                self.index = 0;
                self.phase = Phase::Forward;
                self.temper(NN - 1, NN - 1 - LAG1_OVER)
            }
        }
    }

    /// Rewrites word `i` from words `i` and `next`, the recurrence word
    /// `far` and the lung.
    #[inline]
    fn recur(&mut self, i: usize, next: usize, far: usize) {
        let x = (self.state[i] & MASKU) | (self.state[next] & MASKL);
        let mag = if x & 1 == 1 { MATRIX_A } else { 0 };
        self.lung = (x >> 1) ^ mag ^ self.state[far] ^ mat3neg(23, self.lung);
        self.state[i] = x ^ mat3pos(33, self.lung);
    }

    #[inline]
    fn temper(&self, i: usize, lag: usize) -> u64 {
        let x = self.state[i] ^ (self.state[i] << SHIFT1);
        x ^ (self.state[lag] & MASK1)
    }

    /// Advances the state by 2^256 steps.
    pub fn jump_2pow256(&mut self) {
        let mut acc = Self {
            state: [0u64; NN],
            lung: 0,
            index: self.index,
            phase: Phase::at(self.index),
        };
        for bit in JumpPolynomial::MELG19937.bits() {
            if bit {
                acc.add_state(self);
            }
            self.next_u64();
        }
        *self = acc;
    }

    /// Applies `count` jumps of 2^256 steps, warning above
    /// [`JUMP_WARN_THRESHOLD`].
    fn jump_many(&mut self, count: u64) {
        warn_on_large_jump(count);
        for _ in 0..count {
            self.jump_2pow256();
        }
    }

    /// XORs `live` into `self`, aligning the two circular buffers by their
    /// positions.
    ///
    /// Word `k` of `self` receives word `(k + live.index − self.index) mod 311`
    /// of `live`.
    fn add_state(&mut self, live: &Self) {
        self.lung ^= live.lung;

        let n1 = self.index;
        let n2 = live.index;
        let acc = &mut self.state;
        let src = &live.state;
        if n1 <= n2 {
            let diff1 = NN - n2 + n1;
            let diff2 = n2 - n1;
            xor_into(&mut acc[n1..diff1], &src[n2..]);
            xor_into(&mut acc[diff1..], &src[..diff2]);
            xor_into(&mut acc[..n1], &src[diff2..n2]);
        } else {
            let diff1 = NN - n1 + n2;
            let diff2 = n1 - n2;
            xor_into(&mut acc[n1..], &src[n2..diff1]);
            xor_into(&mut acc[..diff2], &src[diff1..]);
            xor_into(&mut acc[diff2..n1], &src[..n2]);
        }
    }
}

/// Logs a warning when `count` jumps exceed [`JUMP_WARN_THRESHOLD`].
///
/// Returns whether the warning was emitted.
fn warn_on_large_jump(count: u64) -> bool {
    if count <= JUMP_WARN_THRESHOLD {
        return false;
    }
    tracing::warn!(
        engine = Melg19937::NAME,
        count,
        threshold = JUMP_WARN_THRESHOLD,
        "large jump count on MELG19937; cost is linear in count"
    );
    true
}

#[inline]
fn xor_into(dst: &mut [u64], src: &[u64]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

impl UniformEngine for Melg19937 {
    fn name(&self) -> &str {
        Self::NAME
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (Melg19937::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Melg19937::next_u64(self)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        open_unit_from_u64(|| Melg19937::next_u64(self))
    }

    fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    fn supports_jump(&self) -> bool {
        true
    }

    /// Applies `count` jumps of 2^256 steps each.
    ///
    /// Cost is linear in `count`; every unit steps the generator 19940
    /// times and XORs the full state about half as often.
    fn jump(&mut self, count: u64) -> Result<()> {
        self.jump_many(count);
        Ok(())
    }

    /// Seeds, then applies `count` jumps of 2^256 steps.
    fn seed_and_forward(&mut self, seed: u64, count: u64) {
        *self = Self::new(seed);
        self.jump_many(count);
    }
}
