//! Doornik's ziggurat for the standard normal distribution.
//!
//! The density is covered by 128 blocks of equal area: 127 horizontal
//! rectangles stacked on a base block that also contains the tail beyond
//! `R`. Abscissas are computed once from the tail inward:
//!
//! ```text
//! X[0] = V / f(R),  X[1] = R,  X[128] = 0
//! X[i] = sqrt(-2 ln(V / X[i-1] + f(X[i-1])))   for 2 ≤ i < 128
//! ```
//!
//! with `f(x) = exp(-x²/2)`. A draw takes a signed uniform `u` and a block
//! index from the low 7 bits of a 32-bit draw. Most draws are accepted at
//! once because `|u|` falls under the block's ratio `X[i+1] / X[i]`; the
//! rest go to the tail (block 0) or to the wedge test.

use std::sync::OnceLock;

use crate::engines::UniformEngine;

/// Number of blocks.
pub const ZIGNOR_C: usize = 128;
/// Start of the right tail.
pub const ZIGNOR_R: f64 = 3.442_619_855_899;
/// Area of each block: `(R·φ(R) + P(X ≥ R))·√(2π)`.
pub const ZIGNOR_V: f64 = 9.912_563_035_262_17e-3;

/// Mask selecting a block index from a 32-bit draw.
const BLOCK_MASK: u32 = (ZIGNOR_C as u32) - 1;

static TABLE: OnceLock<ZigguratTable> = OnceLock::new();

/// Block abscissas and acceptance ratios.
#[derive(Clone, Debug, PartialEq)]
pub struct ZigguratTable {
    x: [f64; ZIGNOR_C + 1],
    ratio: [f64; ZIGNOR_C],
}

impl Default for ZigguratTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ZigguratTable {
    /// Builds the table for `C = 128`, `R = 3.442619855899`,
    /// `V = 9.91256303526217e-3`.
    pub fn new() -> Self {
        let mut x = [0.0; ZIGNOR_C + 1];
        let mut f = (-0.5 * ZIGNOR_R * ZIGNOR_R).exp();
        x[0] = ZIGNOR_V / f;
        x[1] = ZIGNOR_R;
        x[ZIGNOR_C] = 0.0;
        for i in 2..ZIGNOR_C {
            x[i] = (-2.0 * (ZIGNOR_V / x[i - 1] + f).ln()).sqrt();
            f = (-0.5 * x[i] * x[i]).exp();
        }

        let mut ratio = [0.0; ZIGNOR_C];
        for (i, r) in ratio.iter_mut().enumerate() {
            *r = x[i + 1] / x[i];
        }
        Self { x, ratio }
    }

    /// Returns the process-wide table, building it on first use.
    pub fn global() -> &'static Self {
        TABLE.get_or_init(Self::new)
    }

    /// The `C + 1` abscissas, strictly decreasing from `X[0]` to `X[C] = 0`.
    pub fn abscissas(&self) -> &[f64] {
        &self.x
    }

    /// The `C` ratios `X[i+1] / X[i]`.
    pub fn ratios(&self) -> &[f64] {
        &self.ratio
    }

    /// Draws one standard normal deviate.
    ///
    /// The rejection loop has no iteration cap; it terminates with
    /// probability one and needs close to one pass on average.
    #[inline]
    pub fn sample<E: UniformEngine + ?Sized>(&self, engine: &mut E) -> f64 {
        loop {
            let u = 2.0 * engine.next_f64() - 1.0;
            let i = (engine.next_u32() & BLOCK_MASK) as usize;

            if u.abs() < self.ratio[i] {
                return u * self.x[i];
            }
            if i == 0 {
                return sample_tail(engine, ZIGNOR_R, u < 0.0);
            }

            let x = u * self.x[i];
            let f0 = (-0.5 * (self.x[i] * self.x[i] - x * x)).exp();
            let f1 = (-0.5 * (self.x[i + 1] * self.x[i + 1] - x * x)).exp();
            if f1 + engine.next_f64() * (f0 - f1) < 1.0 {
                return x;
            }
        }
    }
}

/// Marsaglia's tail method: returns a deviate beyond `min` in magnitude.
fn sample_tail<E: UniformEngine + ?Sized>(engine: &mut E, min: f64, negative: bool) -> f64 {
    loop {
        let x = engine.next_f64().ln() / min;
        let y = engine.next_f64().ln();
        if -2.0 * y >= x * x {
            return if negative { x - min } else { min - x };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::Xoshiro256Plus;
    use approx::assert_relative_eq;

    /// Engine replaying fixed draws.
    struct Scripted {
        u32s: Vec<u32>,
        f64s: Vec<f64>,
    }

    impl UniformEngine for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }
        fn next_u32(&mut self) -> u32 {
            self.u32s.remove(0)
        }
        fn next_f64(&mut self) -> f64 {
            self.f64s.remove(0)
        }
        fn seed(&mut self, _seed: u64) {}
        fn seed_and_forward(&mut self, _seed: u64, _count: u64) {}
    }

    #[test]
    fn test_table_invariants() {
        let table = ZigguratTable::new();
        let x = table.abscissas();
        assert_eq!(x.len(), ZIGNOR_C + 1);
        assert_eq!(x[1], ZIGNOR_R);
        assert_eq!(x[ZIGNOR_C], 0.0);
        for w in x.windows(2) {
            assert!(w[0] > w[1], "{} !> {}", w[0], w[1]);
        }

        let ratios = table.ratios();
        for &r in &ratios[..ZIGNOR_C - 1] {
            assert!(r > 0.0 && r < 1.0);
        }
        assert_eq!(ratios[ZIGNOR_C - 1], 0.0);
    }

    #[test]
    fn test_table_reference_values() {
        let x = ZigguratTable::new().abscissas().to_vec();
        assert_relative_eq!(x[0], 3.7130862467425505, max_relative = 1e-13);
        assert_relative_eq!(x[2], 3.2230849845811416, max_relative = 1e-13);
        assert_relative_eq!(x[127], 0.27232086481396467, max_relative = 1e-11);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(ZigguratTable::global(), ZigguratTable::global()));
        assert_eq!(ZigguratTable::global(), &ZigguratTable::new());
    }

    #[test]
    fn test_rectangle_fast_path() {
        let table = ZigguratTable::new();
        let mut engine = Scripted {
            u32s: vec![0xffff_ff05],
            f64s: vec![0.75],
        };
        assert_eq!(table.sample(&mut engine), 0.5 * table.abscissas()[5]);
    }

    #[test]
    fn test_tail_lies_beyond_r() {
        let table = ZigguratTable::new();
        let mut engine = Scripted {
            u32s: vec![0],
            f64s: vec![0.0001, 0.9999, 0.9999],
        };
        let z = table.sample(&mut engine);
        assert!(z < -ZIGNOR_R);

        let mut engine = Scripted {
            u32s: vec![0x80],
            f64s: vec![0.9999, 0.9999, 0.9999],
        };
        let z = table.sample(&mut engine);
        assert!(z > ZIGNOR_R);
        assert_relative_eq!(z, ZIGNOR_R - 0.9999f64.ln() / ZIGNOR_R, max_relative = 1e-15);
    }

    #[test]
    fn test_moments_short_run() {
        let table = ZigguratTable::new();
        let mut engine = Xoshiro256Plus::new(42);
        let n = 1_000_000;
        let (mut m1, mut m2, mut m4) = (0.0, 0.0, 0.0);
        for _ in 0..n {
            let z = table.sample(&mut engine);
            m1 += z;
            m2 += z * z;
            m4 += z * z * z * z;
        }
        let n = n as f64;
        assert!((m1 / n).abs() < 0.005, "mean {}", m1 / n);
        assert!((m2 / n - 1.0).abs() < 0.01, "variance {}", m2 / n);
        assert!((m4 / n - 3.0).abs() < 0.05, "fourth moment {}", m4 / n);
    }
}
