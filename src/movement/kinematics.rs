//! Movement domain: jump arc solver and configuration errors.

use std::fmt;

/// A single invalid tuning value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive {
        field: &'static str,
        value: f32,
    },
    NonFinite {
        field: &'static str,
        value: f32,
    },
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "'{}' must be greater than zero (got {})", field, value)
            }
            ConfigError::NonFinite { field, value } => {
                write!(f, "'{}' must be a finite number (got {})", field, value)
            }
            ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "'{}' must be within [{}, {}] (got {})",
                field, min, max, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Check that a tuning value is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(value)
}

/// Gravity and launch speed derived from designer-facing jump parameters.
///
/// A body launched upward at `launch_velocity` under constant `gravity`
/// peaks at exactly `height` after exactly `time_to_apex` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpKinematics {
    pub height: f32,
    pub time_to_apex: f32,
    /// Signed vertical acceleration (always negative).
    pub gravity: f32,
    pub launch_velocity: f32,
}

impl JumpKinematics {
    /// Solve `gravity = -2h / t²` and `launch_velocity = |gravity| * t`.
    pub fn solve(height: f32, time_to_apex: f32) -> Result<Self, ConfigError> {
        let height = require_positive("jump_height", height)?;
        let time_to_apex = require_positive("jump_time_to_apex", time_to_apex)?;

        let gravity = -(2.0 * height) / (time_to_apex * time_to_apex);
        let launch_velocity = gravity.abs() * time_to_apex;

        Ok(Self {
            height,
            time_to_apex,
            gravity,
            launch_velocity,
        })
    }

    /// Height above the launch point `t` seconds into an unshaped jump.
    pub fn height_at(&self, t: f32) -> f32 {
        self.launch_velocity * t + 0.5 * self.gravity * t * t
    }

    /// Vertical velocity `t` seconds into an unshaped jump.
    pub fn velocity_at(&self, t: f32) -> f32 {
        self.launch_velocity + self.gravity * t
    }

    /// Scale that makes the physics engine's gravity match the derived one.
    pub fn gravity_scale(&self, engine_gravity: f32) -> f32 {
        if engine_gravity <= f32::EPSILON {
            return 0.0;
        }
        self.gravity.abs() / engine_gravity
    }
}
