//! Errors for render and camera configuration.
//!
//! The tracing core itself never fails: misses, total internal reflection
//! and absorbed paths are ordinary outcomes. These errors only guard the
//! caller-side preconditions before a render starts.

use thiserror::Error;

/// Invalid render or camera settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Samples per pixel must be at least 1")]
    NoSamples,

    #[error("Hit interval must satisfy 0 <= t_min < t_max, got ({min}, {max})")]
    InvalidHitInterval { min: f64, max: f64 },

    #[error("Camera look_from and look_at must be distinct points")]
    CoincidentLookAt,

    #[error("Camera up vector is parallel to the view direction")]
    DegenerateUpVector,

    #[error("Vertical field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("Aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f64),

    #[error("Aperture must be non-negative, got {0}")]
    InvalidAperture(f64),

    #[error("Focus distance must be positive, got {0}")]
    InvalidFocusDistance(f64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
