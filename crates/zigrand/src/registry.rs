//! Engine registry: stable names and the factory over built-in engines.
//!
//! Engine names are part of the reproducibility contract. Callers that
//! record `(name, seed, jumps)` can rebuild the exact same stream later, so
//! the names below never change and are matched case-sensitively.

use std::fmt;
use std::str::FromStr;

use crate::engines::{Engine, Lehmer64, Melg19937, Mwc256, Pcg64Dxsm, SplitMix64, Xoshiro256Plus};
use crate::error::{Result, RngError};

/// Identifies one of the built-in engines.
///
/// # Examples
///
/// ```rust
/// use zigrand::EngineKind;
///
/// let kind: EngineKind = "PCG64DXSM".parse().unwrap();
/// assert_eq!(kind, EngineKind::Pcg64Dxsm);
/// assert_eq!(kind.name(), "PCG64DXSM");
/// assert!("pcg64dxsm".parse::<EngineKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// `"MWC256"`, the default engine.
    #[default]
    Mwc256,
    /// `"Lehmer64"`.
    Lehmer64,
    /// `"Xoshiro256+"`.
    Xoshiro256Plus,
    /// `"PCG64DXSM"`.
    Pcg64Dxsm,
    /// `"MELG19937"`.
    Melg19937,
    /// `"Splitmix64"`.
    SplitMix64,
}

impl EngineKind {
    /// Every built-in engine, in registry order.
    pub const ALL: [EngineKind; 6] = [
        EngineKind::Mwc256,
        EngineKind::Lehmer64,
        EngineKind::Xoshiro256Plus,
        EngineKind::Pcg64Dxsm,
        EngineKind::Melg19937,
        EngineKind::SplitMix64,
    ];

    /// Stable external name.
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Mwc256 => Mwc256::NAME,
            EngineKind::Lehmer64 => Lehmer64::NAME,
            EngineKind::Xoshiro256Plus => Xoshiro256Plus::NAME,
            EngineKind::Pcg64Dxsm => Pcg64Dxsm::NAME,
            EngineKind::Melg19937 => Melg19937::NAME,
            EngineKind::SplitMix64 => SplitMix64::NAME,
        }
    }

    /// Alternative names accepted by [`from_name`](Self::from_name).
    ///
    /// `"MWC8222"` is the name Doornik's generator is published under.
    pub const ALIASES: [(&'static str, EngineKind); 1] = [("MWC8222", EngineKind::Mwc256)];

    /// Looks up an engine by its exact name or an alias.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::UnknownEngine`] for any other string.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .or_else(|| {
                Self::ALIASES
                    .into_iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|(_, kind)| kind)
            })
            .ok_or_else(|| RngError::UnknownEngine(name.to_string()))
    }

    /// Whether the engine has a native jump-ahead.
    pub fn supports_jump(self) -> bool {
        matches!(
            self,
            EngineKind::Xoshiro256Plus | EngineKind::Pcg64Dxsm | EngineKind::Melg19937
        )
    }

    /// Creates a freshly seeded, owned engine.
    pub fn create(self, seed: u64) -> Engine {
        match self {
            EngineKind::Mwc256 => Engine::Mwc256(Box::new(Mwc256::new(seed))),
            EngineKind::Lehmer64 => Engine::Lehmer64(Lehmer64::new(seed)),
            EngineKind::Xoshiro256Plus => Engine::Xoshiro256Plus(Xoshiro256Plus::new(seed)),
            EngineKind::Pcg64Dxsm => Engine::Pcg64Dxsm(Pcg64Dxsm::new(seed)),
            EngineKind::Melg19937 => Engine::Melg19937(Box::new(Melg19937::new(seed))),
            EngineKind::SplitMix64 => Engine::SplitMix64(SplitMix64::new(seed)),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Creates an owned engine by name.
///
/// # Errors
///
/// Returns [`RngError::UnknownEngine`] if `name` is not recognised.
///
/// # Examples
///
/// ```rust
/// use zigrand::registry::create_engine;
/// use zigrand::engines::UniformEngine;
///
/// let mut engine = create_engine("Xoshiro256+", 42).unwrap();
/// assert_eq!(engine.next_u64(), 0x15f4_1425_3e36_5229);
/// assert!(create_engine("MT19937", 42).is_err());
/// ```
pub fn create_engine(name: &str, seed: u64) -> Result<Engine> {
    EngineKind::from_name(name).map(|kind| kind.create(seed))
}
