//! Generator configuration.
//!
//! A [`GeneratorConfig`] records everything needed to rebuild a stream
//! exactly: the engine's stable name, the seed and the jump count. It can be
//! assembled with [`GeneratorConfigBuilder`] or, with the `serde` feature,
//! loaded from TOML:
//!
//! ```toml
//! engine = "Xoshiro256+"
//! seed = 42
//! jumps = 3
//! ```

#[cfg(feature = "serde")]
use std::path::Path;

use crate::error::{Result, RngError};
use crate::registry::EngineKind;

/// Maximum jump count accepted for MELG19937, whose jump cost is linear in
/// the count.
pub const MAX_MELG_JUMPS: u64 = 4096;

/// Engine, seed and jump count of a stream.
///
/// Use [`GeneratorConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use zigrand::{EngineKind, GeneratorConfig, RandomStream};
///
/// let config = GeneratorConfig::builder()
///     .engine(EngineKind::Pcg64Dxsm)
///     .seed(42)
///     .jumps(2)
///     .build()
///     .expect("valid configuration");
///
/// let stream = RandomStream::from_config(&config).unwrap();
/// assert_eq!(stream.engine_name(), "PCG64DXSM");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GeneratorConfig {
    /// Engine to run.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_engine"))]
    engine: EngineKind,
    /// Seed value.
    seed: u64,
    /// Seed-and-forward units applied after seeding.
    jumps: u64,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the engine.
    #[inline]
    pub fn engine(&self) -> EngineKind {
        self.engine
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the jump count.
    #[inline]
    pub fn jumps(&self) -> u64 {
        self.jumps
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidConfig`] if the engine is MELG19937 and
    /// `jumps` exceeds [`MAX_MELG_JUMPS`].
    pub fn validate(&self) -> Result<()> {
        if self.engine == EngineKind::Melg19937 && self.jumps > MAX_MELG_JUMPS {
            return Err(RngError::InvalidConfig {
                name: "jumps",
                reason: format!(
                    "{} exceeds the MELG19937 limit of {}",
                    self.jumps, MAX_MELG_JUMPS
                ),
            });
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// Missing keys take their defaults (MWC256, seed 0, no jumps).
    ///
    /// # Errors
    ///
    /// Returns [`RngError::ConfigParse`] for malformed TOML, unknown keys or
    /// an unrecognised engine name, and the validation error otherwise.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)
            .map_err(|e| RngError::ConfigParse(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::ConfigParse`] if the file cannot be read, plus the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RngError::ConfigParse(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(feature = "serde")]
fn deserialize_engine<'de, D>(deserializer: D) -> std::result::Result<EngineKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let name = String::deserialize(deserializer)?;
    EngineKind::from_name(&name).map_err(serde::de::Error::custom)
}

/// Builder for [`GeneratorConfig`].
///
/// # Examples
///
/// ```rust
/// use zigrand::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .engine_name("MELG19937")
///     .seed(5489)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.jumps(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    engine: Option<EngineKind>,
    engine_name: Option<String>,
    seed: u64,
    jumps: u64,
}

impl GeneratorConfigBuilder {
    /// Sets the engine.
    #[inline]
    pub fn engine(mut self, engine: EngineKind) -> Self {
        self.engine = Some(engine);
        self.engine_name = None;
        self
    }

    /// Sets the engine by stable name; checked at [`build`](Self::build).
    #[inline]
    pub fn engine_name(mut self, name: impl Into<String>) -> Self {
        self.engine_name = Some(name.into());
        self.engine = None;
        self
    }

    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the jump count.
    #[inline]
    pub fn jumps(mut self, jumps: u64) -> Self {
        self.jumps = jumps;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::UnknownEngine`] for an unrecognised engine name
    /// and the validation error of [`GeneratorConfig::validate`].
    pub fn build(self) -> Result<GeneratorConfig> {
        let engine = match (self.engine, self.engine_name) {
            (Some(kind), _) => kind,
            (None, Some(name)) => EngineKind::from_name(&name)?,
            (None, None) => EngineKind::default(),
        };
        let config = GeneratorConfig {
            engine,
            seed: self.seed,
            jumps: self.jumps,
        };
        config.validate()?;
        Ok(config)
    }
}
