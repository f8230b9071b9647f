//! Caller-supplied engines built from callbacks.
//!
//! A [`CustomEngine`] wraps a set of closures (32-bit draw, double draw,
//! seed, optional jump and seed-and-forward) so that an external generator
//! can be plugged into a [`RandomStream`](crate::RandomStream) without
//! implementing [`UniformEngine`] by hand.
//!
//! One of the two draw callbacks may be left out:
//!
//! - without a double draw, doubles come from the 32-bit draw through
//!   [`fixed32_to_open_unit`];
//! - without a 32-bit draw, integers come from the double draw as
//!   `⌊(2^32 − 1) · u⌋`.

use std::fmt;

use super::UniformEngine;
use crate::convert::{fixed32_to_open_unit, unit_to_u32};
use crate::error::{Result, RngError};

type DrawU32 = Box<dyn FnMut() -> u32 + Send>;
type DrawF64 = Box<dyn FnMut() -> f64 + Send>;
type SeedFn = Box<dyn FnMut(u64) + Send>;
type JumpFn = Box<dyn FnMut(u64) + Send>;
type ForwardFn = Box<dyn FnMut(u64, u64) + Send>;

enum Draws {
    Both(DrawU32, DrawF64),
    U32Only(DrawU32),
    F64Only(DrawF64),
}

/// Engine assembled from caller-supplied callbacks.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use zigrand::engines::{CustomEngine, SplitMix64, UniformEngine};
///
/// let inner = Arc::new(Mutex::new(SplitMix64::new(0)));
/// let (draw, reseed, forward) = (inner.clone(), inner.clone(), inner.clone());
///
/// let mut engine = CustomEngine::builder("wrapped-splitmix")
///     .draw_u32(move || (draw.lock().unwrap().next_u64() >> 32) as u32)
///     .seed(move |s| *reseed.lock().unwrap() = SplitMix64::new(s))
///     .seed_and_forward(move |s, n| {
///         let mut g = SplitMix64::new(s);
///         g.advance(n);
///         *forward.lock().unwrap() = g;
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.name(), "wrapped-splitmix");
/// let u = engine.next_f64();
/// assert!(u > 0.0 && u < 1.0);
/// ```
pub struct CustomEngine {
    name: String,
    draws: Draws,
    seed: SeedFn,
    jump: Option<JumpFn>,
    seed_and_forward: ForwardFn,
}

impl CustomEngine {
    /// Starts a builder for an engine reported under `name`.
    pub fn builder(name: impl Into<String>) -> CustomEngineBuilder {
        CustomEngineBuilder {
            name: name.into(),
            draw_u32: None,
            draw_f64: None,
            seed: None,
            jump: None,
            seed_and_forward: None,
        }
    }
}

impl fmt::Debug for CustomEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draws = match self.draws {
            Draws::Both(..) => "u32+f64",
            Draws::U32Only(_) => "u32",
            Draws::F64Only(_) => "f64",
        };
        f.debug_struct("CustomEngine")
            .field("name", &self.name)
            .field("draws", &draws)
            .field("jump", &self.jump.is_some())
            .finish()
    }
}

impl UniformEngine for CustomEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_u32(&mut self) -> u32 {
        match &mut self.draws {
            Draws::Both(draw, _) | Draws::U32Only(draw) => draw(),
            Draws::F64Only(draw) => unit_to_u32(draw()),
        }
    }

    fn next_f64(&mut self) -> f64 {
        match &mut self.draws {
            Draws::Both(_, draw) | Draws::F64Only(draw) => draw(),
            Draws::U32Only(draw) => fixed32_to_open_unit(draw()),
        }
    }

    fn seed(&mut self, seed: u64) {
        (self.seed)(seed);
    }

    fn supports_jump(&self) -> bool {
        self.jump.is_some()
    }

    fn jump(&mut self, count: u64) -> Result<()> {
        match self.jump.as_mut() {
            Some(jump) => {
                jump(count);
                Ok(())
            }
            None => Err(RngError::JumpUnsupported {
                engine: self.name.clone(),
            }),
        }
    }

    fn seed_and_forward(&mut self, seed: u64, count: u64) {
        (self.seed_and_forward)(seed, count);
    }
}

/// Builder for [`CustomEngine`].
#[must_use]
pub struct CustomEngineBuilder {
    name: String,
    draw_u32: Option<DrawU32>,
    draw_f64: Option<DrawF64>,
    seed: Option<SeedFn>,
    jump: Option<JumpFn>,
    seed_and_forward: Option<ForwardFn>,
}

impl CustomEngineBuilder {
    /// Sets the 32-bit draw.
    pub fn draw_u32(mut self, f: impl FnMut() -> u32 + Send + 'static) -> Self {
        self.draw_u32 = Some(Box::new(f));
        self
    }

    /// Sets the double draw; must return values in (0, 1).
    pub fn draw_f64(mut self, f: impl FnMut() -> f64 + Send + 'static) -> Self {
        self.draw_f64 = Some(Box::new(f));
        self
    }

    /// Sets the reseeding callback.
    pub fn seed(mut self, f: impl FnMut(u64) + Send + 'static) -> Self {
        self.seed = Some(Box::new(f));
        self
    }

    /// Sets the optional native jump.
    pub fn jump(mut self, f: impl FnMut(u64) + Send + 'static) -> Self {
        self.jump = Some(Box::new(f));
        self
    }

    /// Sets the seed-and-forward callback.
    pub fn seed_and_forward(mut self, f: impl FnMut(u64, u64) + Send + 'static) -> Self {
        self.seed_and_forward = Some(Box::new(f));
        self
    }

    /// Validates the callback set.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidCustomEngine`] if the name is empty, both
    /// draw callbacks are missing, or the seed or seed-and-forward callback
    /// is missing.
    pub fn build(self) -> Result<CustomEngine> {
        if self.name.is_empty() {
            return Err(RngError::InvalidCustomEngine(
                "engine name must not be empty".to_string(),
            ));
        }
        let draws = match (self.draw_u32, self.draw_f64) {
            (Some(u), Some(d)) => Draws::Both(u, d),
            (Some(u), None) => Draws::U32Only(u),
            (None, Some(d)) => Draws::F64Only(d),
            (None, None) => {
                return Err(RngError::InvalidCustomEngine(format!(
                    "'{}' needs at least one of draw_u32 or draw_f64",
                    self.name
                )))
            }
        };
        let seed = self.seed.ok_or_else(|| {
            RngError::InvalidCustomEngine(format!("'{}' is missing a seed callback", self.name))
        })?;
        let seed_and_forward = self.seed_and_forward.ok_or_else(|| {
            RngError::InvalidCustomEngine(format!(
                "'{}' is missing a seed_and_forward callback",
                self.name
            ))
        })?;
        Ok(CustomEngine {
            name: self.name,
            draws,
            seed,
            jump: self.jump,
            seed_and_forward,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Counter engine: each u32 draw returns the counter and increments it.
    fn counter_builder(counter: &Arc<AtomicU64>) -> CustomEngineBuilder {
        let seed = counter.clone();
        let forward = counter.clone();
        CustomEngine::builder("counter")
            .seed(move |s| seed.store(s, Ordering::SeqCst))
            .seed_and_forward(move |s, n| forward.store(s + n, Ordering::SeqCst))
    }

    #[test]
    fn test_double_falls_back_to_u32() {
        let counter = Arc::new(AtomicU64::new(0));
        let draw = counter.clone();
        let mut engine = counter_builder(&counter)
            .draw_u32(move || draw.fetch_add(1, Ordering::SeqCst) as u32)
            .build()
            .unwrap();

        assert_eq!(engine.next_u32(), 0);
        assert_eq!(engine.next_f64(), fixed32_to_open_unit(1));
        engine.seed(100);
        assert_eq!(engine.next_u32(), 100);
        engine.seed_and_forward(100, 5);
        assert_eq!(engine.next_u32(), 105);
    }

    #[test]
    fn test_u32_falls_back_to_double() {
        let counter = Arc::new(AtomicU64::new(0));
        let mut engine = counter_builder(&counter)
            .draw_f64(|| 0.5)
            .build()
            .unwrap();
        assert_eq!(engine.next_u32(), 2_147_483_647);
        assert_eq!(engine.next_f64(), 0.5);
    }

    #[test]
    fn test_jump_capability() {
        let counter = Arc::new(AtomicU64::new(0));
        let mut without = counter_builder(&counter)
            .draw_u32(|| 7)
            .build()
            .unwrap();
        assert!(!without.supports_jump());
        assert_eq!(
            without.jump(1),
            Err(RngError::JumpUnsupported {
                engine: "counter".to_string()
            })
        );

        let jumped = counter.clone();
        let mut with = counter_builder(&counter)
            .draw_u32(|| 7)
            .jump(move |n| {
                jumped.fetch_add(n * 1000, Ordering::SeqCst);
            })
            .build()
            .unwrap();
        assert!(with.supports_jump());
        with.jump(3).unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 3000);
    }

    #[test]
    fn test_build_rejects_incomplete_sets() {
        let counter = Arc::new(AtomicU64::new(0));
        assert!(matches!(
            counter_builder(&counter).build(),
            Err(RngError::InvalidCustomEngine(_))
        ));
        assert!(matches!(
            CustomEngine::builder("x").draw_u32(|| 1).build(),
            Err(RngError::InvalidCustomEngine(_))
        ));
        assert!(matches!(
            CustomEngine::builder("")
                .draw_u32(|| 1)
                .seed(|_| {})
                .seed_and_forward(|_, _| {})
                .build(),
            Err(RngError::InvalidCustomEngine(_))
        ));
    }
}
