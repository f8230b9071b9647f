//! Owned random stream: an active engine plus normal-sampling state.
//!
//! This module provides [`RandomStream`], the context object through which
//! callers select engines, seed, jump and draw. Each stream owns its engine
//! outright, so independent streams (for example one per worker thread, each
//! positioned with a jump) never share mutable state.

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::engines::{fill_bytes_via_u64, Engine, UniformEngine};
use crate::error::Result;
use crate::normal::{PolarSampler, ZigguratTable};
use crate::registry::EngineKind;

/// Reproducible random stream over a selectable uniform engine.
///
/// The stream exposes uniform 32-bit integers, uniform doubles in the open
/// interval (0, 1) and standard normal deviates. For a given engine, seed
/// and jump count the sequence of draws is identical on every platform.
///
/// # Examples
///
/// ```rust
/// use zigrand::RandomStream;
///
/// let mut stream = RandomStream::init("Xoshiro256+", 42, 0).unwrap();
///
/// // Single value generation
/// let u = stream.draw_f64();
/// let z = stream.draw_normal();
/// assert!(u > 0.0 && u < 1.0);
/// assert!(z.is_finite());
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// stream.fill_uniform(&mut buffer);
/// stream.fill_normal(&mut buffer);
/// ```
#[derive(Debug)]
pub struct RandomStream {
    /// The active uniform engine.
    engine: Engine,
    /// Polar-method cache, tied to the current bit stream.
    polar: PolarSampler,
}

impl Default for RandomStream {
    /// MWC256 seeded with 0.
    fn default() -> Self {
        Self::new(EngineKind::default(), 0)
    }
}

impl RandomStream {
    /// Creates a stream over a freshly seeded built-in engine.
    ///
    /// # Arguments
    ///
    /// * `kind` - Engine to run
    /// * `seed` - 64-bit seed value for reproducibility
    #[inline]
    pub fn new(kind: EngineKind, seed: u64) -> Self {
        Self::from_engine(kind.create(seed))
    }

    /// Wraps an existing engine.
    pub fn from_engine(engine: Engine) -> Self {
        Self {
            engine,
            polar: PolarSampler::new(),
        }
    }

    /// Initialises a stream by engine name, seed and jump count.
    ///
    /// Builds the shared ziggurat table, selects the named engine (an empty
    /// name keeps the default, MWC256) and positions it with
    /// [`seed_and_jump`](Self::seed_and_jump), which is available on every
    /// engine. With `jumps == 0` this is plain seeding.
    ///
    /// # Arguments
    ///
    /// * `engine_name` - Stable engine name, or `""` for the default
    /// * `seed` - 64-bit seed value
    /// * `jumps` - Number of jump units to skip (native where available)
    ///
    /// # Errors
    ///
    /// Returns [`RngError::UnknownEngine`](crate::RngError::UnknownEngine)
    /// if the name is not recognised.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zigrand::RandomStream;
    ///
    /// let stream = RandomStream::init("", 0, 0).unwrap();
    /// assert_eq!(stream.engine_name(), "MWC256");
    /// assert!(RandomStream::init("Mersenne", 0, 0).is_err());
    /// ```
    pub fn init(engine_name: &str, seed: u64, jumps: u64) -> Result<Self> {
        let kind = if engine_name.is_empty() {
            EngineKind::default()
        } else {
            EngineKind::from_name(engine_name)?
        };
        Ok(Self::init_kind(kind, seed, jumps))
    }

    /// Initialises a stream from a validated [`GeneratorConfig`].
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, if any.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::init_kind(config.engine(), config.seed(), config.jumps()))
    }

    fn init_kind(kind: EngineKind, seed: u64, jumps: u64) -> Self {
        ZigguratTable::global();
        let mut stream = Self::new(kind, seed);
        if jumps > 0 {
            stream.seed_and_jump(seed, jumps);
        }
        stream
    }

    /// Creates `count` streams of the same engine and seed, stream `k`
    /// positioned `k` jump units ahead of stream 0.
    ///
    /// Engines with a native jump use it, giving provably disjoint
    /// sub-streams; the others fall back to seed-and-forward, whose
    /// sub-streams are only practically independent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zigrand::{EngineKind, RandomStream};
    ///
    /// let mut streams = RandomStream::substreams(EngineKind::Pcg64Dxsm, 7, 4);
    /// assert_eq!(streams.len(), 4);
    /// let firsts: Vec<u32> = streams.iter_mut().map(|s| s.draw_u32()).collect();
    /// assert_ne!(firsts[0], firsts[1]);
    /// ```
    pub fn substreams(kind: EngineKind, seed: u64, count: usize) -> Vec<Self> {
        let mut streams = Vec::with_capacity(count);
        let mut cursor = kind.create(seed);
        for k in 0..count as u64 {
            if k > 0 && cursor.jump(1).is_err() {
                cursor.seed_and_forward(seed, k);
            }
            if let Some(engine) = cursor.try_clone() {
                streams.push(Self::from_engine(engine));
            }
        }
        streams
    }

    /// Replaces the active engine by a built-in engine chosen by name.
    ///
    /// The new engine starts from seed 0; call [`set_seed`](Self::set_seed)
    /// afterwards to position it. Any cached polar deviate is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::UnknownEngine`](crate::RngError::UnknownEngine)
    /// for an unrecognised name. The active engine is left untouched.
    pub fn select_engine(&mut self, name: &str) -> Result<()> {
        let kind = EngineKind::from_name(name)?;
        self.select_kind(kind);
        Ok(())
    }

    /// Replaces the active engine by a built-in engine.
    pub fn select_kind(&mut self, kind: EngineKind) {
        debug!(engine = kind.name(), "engine selected");
        self.engine = kind.create(0);
        self.polar.reset();
    }

    /// Replaces the active engine by a caller-supplied one, for example a
    /// [`CustomEngine`](crate::engines::CustomEngine).
    pub fn select_custom<E: UniformEngine + 'static>(&mut self, engine: E) {
        debug!(engine = engine.name(), "custom engine selected");
        self.engine = Engine::Custom(Box::new(engine));
        self.polar.reset();
    }

    /// Reinitialises the active engine from `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        debug!(engine = self.engine.name(), seed, "stream seeded");
        self.engine.seed(seed);
        self.polar.reset();
    }

    /// Advances the active engine by `count` native jump units.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::JumpUnsupported`](crate::RngError::JumpUnsupported)
    /// on engines without a native jump; use
    /// [`seed_and_jump`](Self::seed_and_jump) there.
    pub fn jump(&mut self, count: u64) -> Result<()> {
        debug!(engine = self.engine.name(), count, "stream jump");
        self.engine.jump(count)?;
        self.polar.reset();
        Ok(())
    }

    /// Seeds from `seed` and moves `count` units forward. Available on
    /// every engine.
    ///
    /// Xoshiro256+, PCG64DXSM and MELG19937 seed and then apply `count`
    /// native jumps. The other engines advance the seed-expansion stream of
    /// `seed` instead.
    pub fn seed_and_jump(&mut self, seed: u64, count: u64) {
        debug!(engine = self.engine.name(), seed, count, "stream seed-and-jump");
        self.engine.seed_and_forward(seed, count);
        self.polar.reset();
    }

    /// Stable name of the active engine.
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Whether the active engine has a native jump.
    pub fn supports_jump(&self) -> bool {
        self.engine.supports_jump()
    }

    /// Borrows the active engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the most significant 32 bits of the next raw output.
    #[inline]
    pub fn draw_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }

    /// Returns the next raw 64-bit output.
    #[inline]
    pub fn draw_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    /// Returns a uniform double in the open interval (0, 1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zigrand::RandomStream;
    ///
    /// let mut stream = RandomStream::default();
    /// let value = stream.draw_f64();
    /// assert!(value > 0.0 && value < 1.0);
    /// ```
    #[inline]
    pub fn draw_f64(&mut self) -> f64 {
        self.engine.next_f64()
    }

    /// Returns a standard normal deviate from the ziggurat sampler.
    ///
    /// # Algorithm Reference
    ///
    /// - Doornik, J. A. (2005). "An Improved Ziggurat Method to Generate
    ///   Normal Random Samples". Nuffield College, University of Oxford.
    #[inline]
    pub fn draw_normal(&mut self) -> f64 {
        ZigguratTable::global().sample(&mut self.engine)
    }

    /// Returns a standard normal deviate from the polar method.
    ///
    /// Every other call is served from a one-value cache, which is cleared
    /// whenever the engine is selected, seeded or jumped.
    ///
    /// # Algorithm Reference
    ///
    /// - Marsaglia, G. & Bray, T. A. (1964). "A Convenient Method for
    ///   Generating Normal Variables". SIAM Review.
    #[inline]
    pub fn draw_normal_polar(&mut self) -> f64 {
        self.polar.sample(&mut self.engine)
    }

    /// Fills the buffer with uniform doubles in (0, 1).
    ///
    /// Zero-allocation; empty buffers are a no-op.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with uniform variates
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.engine.next_f64();
        }
    }

    /// Fills the buffer with ziggurat standard normal deviates.
    ///
    /// Zero-allocation; empty buffers are a no-op.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with normal variates
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        let table = ZigguratTable::global();
        for value in buffer.iter_mut() {
            *value = table.sample(&mut self.engine);
        }
    }
}

impl rand::RngCore for RandomStream {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        UniformEngine::next_u32(&mut self.engine)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        UniformEngine::next_u64(&mut self.engine)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_u64(&mut self.engine, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        fill_bytes_via_u64(&mut self.engine, dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{CustomEngine, SplitMix64};
    use crate::error::RngError;

    #[test]
    fn test_default_stream() {
        let mut stream = RandomStream::default();
        let mut reference = RandomStream::new(EngineKind::Mwc256, 0);
        assert_eq!(stream.engine_name(), "MWC256");
        for _ in 0..10 {
            assert_eq!(stream.draw_u32(), reference.draw_u32());
        }
    }

    #[test]
    fn test_init_with_jumps_uses_seed_and_forward() {
        let mut stream = RandomStream::init("Lehmer64", 42, 3).unwrap();
        let mut reference = RandomStream::new(EngineKind::Lehmer64, 0);
        reference.seed_and_jump(42, 3);
        for _ in 0..10 {
            assert_eq!(stream.draw_u64(), reference.draw_u64());
        }
    }

    #[test]
    fn test_init_with_jumps_uses_native_jump() {
        for kind in [
            EngineKind::Xoshiro256Plus,
            EngineKind::Pcg64Dxsm,
            EngineKind::Melg19937,
        ] {
            let mut stream = RandomStream::init(kind.name(), 42, 1).unwrap();
            let mut reference = RandomStream::new(kind, 42);
            reference.jump(1).unwrap();
            for _ in 0..10 {
                assert_eq!(stream.draw_u64(), reference.draw_u64(), "{}", kind);
            }
        }

        // Special PCG seeds survive a nonzero count.
        let mut stream = RandomStream::new(EngineKind::Pcg64Dxsm, 0);
        stream.seed_and_jump(12345, 2);
        let mut reference = RandomStream::new(EngineKind::Pcg64Dxsm, 12345);
        reference.jump(2).unwrap();
        assert_eq!(stream.draw_u64(), reference.draw_u64());
    }

    #[test]
    fn test_select_unknown_keeps_engine() {
        let mut stream = RandomStream::new(EngineKind::Pcg64Dxsm, 5);
        let mut reference = RandomStream::new(EngineKind::Pcg64Dxsm, 5);
        assert_eq!(
            stream.select_engine("pcg64"),
            Err(RngError::UnknownEngine("pcg64".to_string()))
        );
        assert_eq!(stream.engine_name(), "PCG64DXSM");
        assert_eq!(stream.draw_u64(), reference.draw_u64());
    }

    #[test]
    fn test_jump_error_on_mwc() {
        let mut stream = RandomStream::default();
        let err = stream.jump(1).unwrap_err();
        assert_eq!(
            err,
            RngError::JumpUnsupported {
                engine: "MWC256".to_string()
            }
        );
    }

    /// Stream with a fresh polar cache over a copy of `stream`'s engine.
    fn probe(stream: &RandomStream) -> RandomStream {
        RandomStream::from_engine(stream.engine().try_clone().unwrap())
    }

    #[test]
    fn test_polar_cache_cleared_by_state_changes() {
        let mut stream = RandomStream::new(EngineKind::Xoshiro256Plus, 1);

        stream.draw_normal_polar();
        stream.set_seed(1);
        assert_eq!(
            stream.draw_normal_polar(),
            RandomStream::new(EngineKind::Xoshiro256Plus, 1).draw_normal_polar()
        );

        stream.jump(1).unwrap();
        let mut fresh = probe(&stream);
        assert_eq!(stream.draw_normal_polar(), fresh.draw_normal_polar());

        stream.seed_and_jump(1, 2);
        let mut fresh = probe(&stream);
        assert_eq!(stream.draw_normal_polar(), fresh.draw_normal_polar());

        stream.select_kind(EngineKind::SplitMix64);
        assert_eq!(
            stream.draw_normal_polar(),
            RandomStream::new(EngineKind::SplitMix64, 0).draw_normal_polar()
        );
    }

    #[test]
    fn test_select_custom_engine() {
        let mut stream = RandomStream::default();
        stream.select_custom(SplitMix64::new(9));
        assert_eq!(stream.engine_name(), "Splitmix64");
        assert_eq!(stream.draw_u64(), SplitMix64::new(9).next_u64());

        let custom = CustomEngine::builder("constant")
            .draw_f64(|| 0.25)
            .seed(|_| {})
            .seed_and_forward(|_, _| {})
            .build()
            .unwrap();
        stream.select_custom(custom);
        assert_eq!(stream.draw_f64(), 0.25);
        assert!(stream.jump(1).is_err());
    }

    #[test]
    fn test_substreams_follow_native_jump() {
        let mut streams = RandomStream::substreams(EngineKind::Xoshiro256Plus, 11, 3);
        for (k, stream) in streams.iter_mut().enumerate() {
            let mut expected = RandomStream::new(EngineKind::Xoshiro256Plus, 11);
            expected.jump(k as u64).unwrap();
            assert_eq!(stream.draw_u64(), expected.draw_u64());
        }
    }

    #[test]
    fn test_substreams_fall_back_to_forward() {
        let mut streams = RandomStream::substreams(EngineKind::Mwc256, 11, 3);
        for (k, stream) in streams.iter_mut().enumerate() {
            let mut expected = RandomStream::new(EngineKind::Mwc256, 0);
            expected.seed_and_jump(11, k as u64);
            assert_eq!(stream.draw_u32(), expected.draw_u32());
        }
        assert!(RandomStream::substreams(EngineKind::Mwc256, 11, 0).is_empty());
    }

    #[test]
    fn test_rng_core_matches_draws() {
        use rand::RngCore;

        let mut stream = RandomStream::new(EngineKind::Mwc256, 3);
        let mut reference = RandomStream::new(EngineKind::Mwc256, 3);
        assert_eq!(RngCore::next_u32(&mut stream), reference.draw_u32());
        assert_eq!(RngCore::next_u64(&mut stream), reference.draw_u64());

        let mut bytes = [0u8; 8];
        stream.fill_bytes(&mut bytes);
        assert_eq!(u64::from_le_bytes(bytes), reference.draw_u64());
    }

    #[test]
    fn test_empty_buffers() {
        let mut stream = RandomStream::default();
        let mut empty: Vec<f64> = vec![];
        stream.fill_uniform(&mut empty);
        stream.fill_normal(&mut empty);
    }
}
