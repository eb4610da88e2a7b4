//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::kinematics::{ConfigError, require_positive};
use crate::movement::ports::{InputProvider, InputSnapshot};

/// When a running cast is considered finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CastClearPolicy {
    /// Clear once the cast clip reports normalized time >= 1.
    #[default]
    OnClipComplete,
    /// Clear on the same tick the cast trigger is dispatched.
    Immediate,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    /// Shapes the acceleration curve: force = (|diff| * rate)^exponent.
    pub accel_exponent: f32,
    pub body_mass: f32,
    pub jump_height: f32,
    pub jump_time_to_apex: f32,
    pub jump_force_multiplier: f32,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    /// Factor applied to upward velocity each step the jump button is up.
    pub jump_cut_factor: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Probe circle centre, relative to the body origin.
    pub ground_probe_offset_y: f32,
    pub ground_probe_radius: f32,
    pub movement_enabled: bool,
    pub jump_enabled: bool,
    pub cast_enabled: bool,
    pub cast_clear: CastClearPolicy,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 4.0,
            accel: 1.5,
            decel: 2.0,
            accel_exponent: 0.96,
            body_mass: 1.0,
            jump_height: 2.0,
            jump_time_to_apex: 0.4,
            jump_force_multiplier: 1.5,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            jump_cut_factor: 0.5,
            coyote_time: 0.2,
            jump_buffer_time: 0.1,
            ground_probe_offset_y: -0.5,
            ground_probe_radius: 0.2,
            movement_enabled: true,
            jump_enabled: true,
            cast_enabled: true,
            cast_clear: CastClearPolicy::OnClipComplete,
        }
    }
}

impl MovementTuning {
    /// Collect every invalid value. An empty list means the tuning is usable.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("max_speed", self.max_speed),
            ("body_mass", self.body_mass),
            ("jump_height", self.jump_height),
            ("jump_time_to_apex", self.jump_time_to_apex),
            ("jump_force_multiplier", self.jump_force_multiplier),
            ("ground_probe_radius", self.ground_probe_radius),
        ] {
            if let Err(e) = require_positive(field, value) {
                errors.push(e);
            }
        }

        let ranged = [
            ("accel", self.accel, 0.0, f32::MAX),
            ("decel", self.decel, 0.0, f32::MAX),
            ("accel_exponent", self.accel_exponent, f32::MIN_POSITIVE, 2.0),
            ("fall_multiplier", self.fall_multiplier, 1.0, f32::MAX),
            ("low_jump_multiplier", self.low_jump_multiplier, 1.0, f32::MAX),
            ("jump_cut_factor", self.jump_cut_factor, f32::MIN_POSITIVE, 1.0),
            ("coyote_time", self.coyote_time, 0.0, f32::MAX),
            ("jump_buffer_time", self.jump_buffer_time, 0.0, f32::MAX),
        ];
        for (field, value, min, max) in ranged {
            if !value.is_finite() {
                errors.push(ConfigError::NonFinite { field, value });
            } else if value < min || value > max {
                errors.push(ConfigError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }

        if !self.ground_probe_offset_y.is_finite() {
            errors.push(ConfigError::NonFinite {
                field: "ground_probe_offset_y",
                value: self.ground_probe_offset_y,
            });
        }

        errors
    }
}

/// Latest sampled input. `jump_held` and `interact_held` are levels;
/// `jump_pressed` and `cast_requested` stay latched until consumed.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_held: bool,
    pub jump_pressed: bool,
    pub interact_held: bool,
    pub cast_requested: bool,
}

impl InputProvider for MovementInput {
    fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            move_axis: self.axis,
            jump_held: self.jump_held,
            jump_pressed: self.jump_pressed,
            cast_requested: self.cast_requested,
            interact_requested: self.interact_held,
        }
    }

    fn consume_cast(&mut self) {
        self.cast_requested = false;
    }

    fn consume_jump_press(&mut self) {
        self.jump_pressed = false;
    }
}
