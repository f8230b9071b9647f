//! # Zigrand
//!
//! Reproducible pseudo-random number generation for simulation work.
//!
//! This crate provides:
//! - Six uniform engines behind one interface ([`engines`])
//! - Native jump-ahead for xoshiro256+, PCG64-DXSM and MELG19937 ([`jump`])
//! - Seed-and-forward positioning on every engine
//! - An engine registry with stable names ([`registry`])
//! - Ziggurat and polar standard normal samplers ([`normal`])
//! - Fixed-point to open-interval conversions ([`convert`])
//! - [`RandomStream`], an owned context combining all of the above
//!
//! ## Reproducibility
//!
//! A stream is fully determined by its engine name, seed and jump count.
//! Record those three values (see [`GeneratorConfig`]) to rebuild the exact
//! same sequence on any platform.
//!
//! ## Parallel use
//!
//! Streams own their engine; nothing mutable is global. For parallel
//! simulation create one stream per worker with
//! [`RandomStream::substreams`], which positions each stream with a native
//! jump where the engine has one.
//!
//! ## Logging
//!
//! Engine selection, reseeding and jumps emit `tracing` events at debug
//! level. The library never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use zigrand::{EngineKind, RandomStream};
//!
//! let mut stream = RandomStream::new(EngineKind::Xoshiro256Plus, 42);
//! let u = stream.draw_f64();
//! let z = stream.draw_normal();
//! assert!(u > 0.0 && u < 1.0);
//! assert!(z.is_finite());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod convert;
pub mod engines;
pub mod error;
pub mod jump;
pub mod normal;
pub mod registry;
pub mod stream;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use engines::{Engine, UniformEngine};
pub use error::{Result, RngError};
pub use registry::EngineKind;
pub use stream::RandomStream;
