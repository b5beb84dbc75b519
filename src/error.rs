/// Error types for the simulation core.
///
/// The simulation itself never fails once running; the only fallible step is
/// building a session from a `GameConfig` that does not describe a playable
/// field.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} interval must be at least 1ms")]
    ZeroInterval { name: &'static str },

    #[error("trail length must be at least 1")]
    EmptyTrail,

    #[error("jump impulse must point upwards (negative), got {0}")]
    JumpImpulse(f64),

    #[error("ground band starts at {ground_top} but the field is only {field_height} tall")]
    GroundOutsideField { ground_top: f64, field_height: f64 },
}
