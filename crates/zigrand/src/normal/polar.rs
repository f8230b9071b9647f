//! Marsaglia's polar method.
//!
//! Each accepted pair of uniforms yields two independent normals; the second
//! is cached and returned by the next call. The cache belongs to the bit
//! stream it was drawn from and must be cleared whenever that stream is
//! reseeded, jumped or replaced.

use crate::engines::UniformEngine;

/// Polar-method sampler holding at most one cached deviate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolarSampler {
    cached: Option<f64>,
}

impl PolarSampler {
    /// Creates a sampler with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a deviate is waiting in the cache.
    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Drops the cached deviate, if any.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// Returns the cached deviate, or draws a fresh pair and caches its
    /// second half.
    pub fn sample<E: UniformEngine + ?Sized>(&mut self, engine: &mut E) -> f64 {
        if let Some(z) = self.cached.take() {
            return z;
        }
        let (z1, z2) = polar_pair(engine);
        self.cached = Some(z2);
        z1
    }
}

/// Draws one pair of independent standard normals.
fn polar_pair<E: UniformEngine + ?Sized>(engine: &mut E) -> (f64, f64) {
    loop {
        let u1 = 2.0 * engine.next_f64() - 1.0;
        let u2 = 2.0 * engine.next_f64() - 1.0;
        let d = u1 * u1 + u2 * u2;
        // d == 0 only when both draws are exactly 1/2.
        if d < 1.0 && d > 0.0 {
            let scale = ((-2.0 / d) * d.ln()).sqrt();
            return (u1 * scale, u2 * scale);
        }
    }
}
