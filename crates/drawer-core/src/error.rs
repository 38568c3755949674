//! Configuration errors.
//!
//! The engine's geometry, classification and prediction functions are total
//! and never fail; the only fallible edge is validating a configuration
//! supplied by the host or loaded from a preset.

use thiserror::Error;

/// A configuration value outside the range the engine accepts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite, non-negative distance (got {value})")]
    NegativeDistance { field: &'static str, value: f32 },

    #[error("`{field}` must be a finite, non-negative speed (got {value})")]
    NegativeSpeed { field: &'static str, value: f32 },

    #[error("`{field}` must lie within [0, 1] (got {value})")]
    AlphaOutOfRange { field: &'static str, value: f32 },
}

impl ConfigError {
    /// Name of the offending configuration field.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::NegativeDistance { field, .. }
            | ConfigError::NegativeSpeed { field, .. }
            | ConfigError::AlphaOutOfRange { field, .. } => field,
        }
    }
}
