//! # Uniform Generator Engines
//!
//! Six interchangeable uniform bit generators behind one capability
//! interface, [`UniformEngine`]:
//!
//! | Engine | State | Native jump | Jump unit |
//! |--------|-------|-------------|-----------|
//! | [`Mwc256`] | 256 × u32 + carry | no | - |
//! | [`Lehmer64`] | u128 | no | - |
//! | [`Xoshiro256Plus`] | 4 × u64 | yes | 2^192 draws (long jump) |
//! | [`Pcg64Dxsm`] | u128 state + u128 increment | yes | ≈ 0.618 · 2^128 draws |
//! | [`Melg19937`] | 311 × u64 + lung | yes | 2^256 draws |
//! | [`SplitMix64`] | u64 counter | no | - |
//!
//! Every engine is seeded from a single `u64` and reproduces the same
//! output for the same seed on every platform. `next_u32` returns the most
//! significant 32 bits of the raw output; `next_f64` returns a value in the
//! open interval (0, 1).
//!
//! ## Seed-and-forward
//!
//! [`UniformEngine::seed_and_forward`] is available on every engine. Engines
//! with a native jump seed and then jump, so their forwarded streams are
//! provably disjoint. MWC256, Lehmer64 and SplitMix64 instead advance the
//! SplitMix64 seed-expansion stream before deriving fresh state; those
//! streams are only *practically* independent, with no guarantee that two
//! of them never overlap.
//!
//! ## Dispatch
//!
//! [`Engine`] is the closed set of built-in engines plus one open variant for
//! caller-supplied engines. Dispatch over the built-ins is a `match`, not a
//! vtable call.

mod custom;
mod lehmer;
mod melg;
mod mwc;
mod pcg;
mod splitmix;
mod xoshiro;

pub use custom::{CustomEngine, CustomEngineBuilder};
pub use lehmer::Lehmer64;
pub use melg::Melg19937;
pub use mwc::Mwc256;
pub use pcg::Pcg64Dxsm;
pub use splitmix::{SplitMix64, GOLDEN_GAMMA};
pub use xoshiro::Xoshiro256Plus;

use std::fmt;

use crate::error::{Result, RngError};

/// Common capability interface of every uniform engine.
///
/// Implement this trait to plug an external generator into a
/// [`RandomStream`](crate::RandomStream) via
/// [`select_custom`](crate::RandomStream::select_custom).
pub trait UniformEngine: Send {
    /// Stable engine name, part of the reproducibility contract.
    fn name(&self) -> &str;

    /// Returns the most significant 32 bits of the next raw output.
    fn next_u32(&mut self) -> u32;

    /// Returns the next raw 64-bit output.
    ///
    /// 32-bit engines concatenate two draws, high word first.
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    /// Returns a uniform double in the open interval (0, 1).
    fn next_f64(&mut self) -> f64;

    /// Reinitialises the state from `seed`, discarding all history.
    fn seed(&mut self, seed: u64);

    /// Whether [`jump`](Self::jump) is natively supported.
    fn supports_jump(&self) -> bool {
        false
    }

    /// Advances the state by `count` engine-specific jump units.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::JumpUnsupported`] on engines without a native
    /// fast-forward.
    fn jump(&mut self, count: u64) -> Result<()> {
        let _ = count;
        Err(RngError::JumpUnsupported {
            engine: self.name().to_string(),
        })
    }

    /// Seeds from `seed` and moves `count` units forward.
    ///
    /// Engines with a native jump seed and then [`jump`](Self::jump).
    /// The others advance the seed-expansion stream of `seed`; streams
    /// obtained that way are practically, not provably, non-overlapping.
    fn seed_and_forward(&mut self, seed: u64, count: u64);
}

/// A built-in engine or a caller-supplied one.
pub enum Engine {
    /// Marsaglia multiply-with-carry, lag 256.
    Mwc256(Box<Mwc256>),
    /// 128-bit multiplicative congruential generator.
    Lehmer64(Lehmer64),
    /// xoshiro256+ rotate-xor-shift generator.
    Xoshiro256Plus(Xoshiro256Plus),
    /// 128-bit LCG with DXSM output permutation.
    Pcg64Dxsm(Pcg64Dxsm),
    /// 64-bit maximally equidistributed F2-linear generator.
    Melg19937(Box<Melg19937>),
    /// SplitMix64 used as an engine.
    SplitMix64(SplitMix64),
    /// Caller-supplied engine.
    Custom(Box<dyn UniformEngine>),
}

macro_rules! dispatch {
    ($engine:expr, $inner:ident => $body:expr) => {
        match $engine {
            Engine::Mwc256($inner) => $body,
            Engine::Lehmer64($inner) => $body,
            Engine::Xoshiro256Plus($inner) => $body,
            Engine::Pcg64Dxsm($inner) => $body,
            Engine::Melg19937($inner) => $body,
            Engine::SplitMix64($inner) => $body,
            Engine::Custom($inner) => $body,
        }
    };
}

impl UniformEngine for Engine {
    fn name(&self) -> &str {
        dispatch!(self, e => e.name())
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        dispatch!(self, e => e.next_u32())
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        dispatch!(self, e => e.next_u64())
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        dispatch!(self, e => e.next_f64())
    }

    fn seed(&mut self, seed: u64) {
        dispatch!(self, e => e.seed(seed))
    }

    fn supports_jump(&self) -> bool {
        dispatch!(self, e => e.supports_jump())
    }

    fn jump(&mut self, count: u64) -> Result<()> {
        dispatch!(self, e => e.jump(count))
    }

    fn seed_and_forward(&mut self, seed: u64, count: u64) {
        dispatch!(self, e => e.seed_and_forward(seed, count))
    }
}

impl Engine {
    /// Copies a built-in engine with its full state.
    ///
    /// Returns `None` for [`Engine::Custom`], whose callbacks cannot be
    /// duplicated.
    pub fn try_clone(&self) -> Option<Engine> {
        let engine = match self {
            Engine::Mwc256(e) => Engine::Mwc256(e.clone()),
            Engine::Lehmer64(e) => Engine::Lehmer64(e.clone()),
            Engine::Xoshiro256Plus(e) => Engine::Xoshiro256Plus(e.clone()),
            Engine::Pcg64Dxsm(e) => Engine::Pcg64Dxsm(e.clone()),
            Engine::Melg19937(e) => Engine::Melg19937(e.clone()),
            Engine::SplitMix64(e) => Engine::SplitMix64(e.clone()),
            Engine::Custom(_) => return None,
        };
        Some(engine)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Engine").field(&self.name()).finish()
    }
}

impl rand::RngCore for Engine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        UniformEngine::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        UniformEngine::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_u64(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        fill_bytes_via_u64(self, dest);
        Ok(())
    }
}

/// Fills `dest` with little-endian bytes of successive 64-bit draws.
pub(crate) fn fill_bytes_via_u64<E: UniformEngine + ?Sized>(engine: &mut E, dest: &mut [u8]) {
    for chunk in dest.chunks_mut(8) {
        let bytes = engine.next_u64().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
