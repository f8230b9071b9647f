//! Error types for engine selection, jump-ahead and configuration.
//!
//! Every failure is reported at the call that requests the invalid
//! operation. Selecting an unknown engine never falls back to a default, and
//! jumping an engine without a native fast-forward never silently iterates.

use thiserror::Error;

/// Errors raised by the generator core.
///
/// # Examples
///
/// ```rust
/// use zigrand::RngError;
///
/// let err = RngError::UnknownEngine("MT19937".to_string());
/// assert!(err.to_string().contains("MT19937"));
///
/// let err = RngError::JumpUnsupported { engine: "MWC256".to_string() };
/// assert!(err.to_string().contains("seed_and_jump"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// The requested engine name is not one of the recognised names.
    #[error(
        "Unknown engine '{0}'. Must be one of: MWC256, Lehmer64, Xoshiro256+, PCG64DXSM, MELG19937, Splitmix64"
    )]
    UnknownEngine(String),

    /// The active engine has no native jump-ahead.
    #[error("Engine '{engine}' does not support jump-ahead; use seed_and_jump instead")]
    JumpUnsupported {
        /// Stable name of the engine that rejected the jump.
        engine: String,
    },

    /// Array seeding was requested with a zero-length key.
    #[error("Seed key must contain at least one word")]
    EmptySeedKey,

    /// A custom callback set cannot drive the stream.
    #[error("Invalid custom engine: {0}")]
    InvalidCustomEngine(String),

    /// A configuration value failed validation.
    #[error("Invalid configuration parameter '{name}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A configuration document could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RngError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RngError::UnknownEngine("foo".to_string());
        assert!(err.to_string().starts_with("Unknown engine 'foo'"));
        assert!(err.to_string().contains("Xoshiro256+"));

        let err = RngError::JumpUnsupported {
            engine: "Lehmer64".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Engine 'Lehmer64' does not support jump-ahead; use seed_and_jump instead"
        );

        let err = RngError::InvalidConfig {
            name: "jumps",
            reason: "too large".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration parameter 'jumps': too large"
        );
    }
}
