//! # Normal Sampling
//!
//! Standard normal deviates from any [`UniformEngine`]:
//!
//! - [`ZigguratTable`]: Doornik's ziggurat, the primary sampler. The table
//!   is built once per process and shared read-only by every stream.
//! - [`PolarSampler`]: Marsaglia's polar method with a one-value cache.
//!
//! ## Example
//!
//! ```rust
//! use zigrand::engines::Xoshiro256Plus;
//! use zigrand::normal::standard_normal;
//!
//! let mut engine = Xoshiro256Plus::new(42);
//! let z = standard_normal(&mut engine);
//! assert!(z.is_finite());
//! ```

mod polar;
mod ziggurat;

pub use polar::PolarSampler;
pub use ziggurat::{ZigguratTable, ZIGNOR_C, ZIGNOR_R, ZIGNOR_V};

use crate::engines::UniformEngine;

/// Draws one standard normal deviate with the shared ziggurat table.
#[inline]
pub fn standard_normal<E: UniformEngine + ?Sized>(engine: &mut E) -> f64 {
    ZigguratTable::global().sample(engine)
}
