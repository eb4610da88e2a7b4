//! Feedback domain: tuning and shared resources.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::movement::ConfigError;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackTuning {
    /// Extra vertical scale at the peak of a jump stretch.
    pub stretch_amount: f32,
    pub stretch_duration: f32,
    /// Share of the stretch spent reaching the peak.
    pub stretch_attack: f32,
    /// Vertical scale lost at the peak of a landing squash.
    pub squash_amount: f32,
    /// Downward visual displacement at the peak of a squash, in world units.
    pub squash_drop: f32,
    pub squash_duration: f32,
    pub squash_attack: f32,
    pub dust_trail_count: u32,
    pub dust_impact_count: u32,
    pub dust_lifetime: f32,
    pub dust_speed: f32,
    pub dust_size: f32,
    pub dust_seed: u64,
}

impl Default for FeedbackTuning {
    fn default() -> Self {
        Self {
            stretch_amount: 0.25,
            stretch_duration: 0.2,
            stretch_attack: 0.35,
            squash_amount: 0.3,
            squash_drop: 0.12,
            squash_duration: 0.25,
            squash_attack: 0.3,
            dust_trail_count: 4,
            dust_impact_count: 8,
            dust_lifetime: 0.45,
            dust_speed: 1.6,
            dust_size: 0.12,
            dust_seed: 0x5eed,
        }
    }
}

impl FeedbackTuning {
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("stretch_duration", self.stretch_duration),
            ("squash_duration", self.squash_duration),
            ("dust_lifetime", self.dust_lifetime),
            ("dust_size", self.dust_size),
        ] {
            if !value.is_finite() {
                errors.push(ConfigError::NonFinite { field, value });
            } else if value <= 0.0 {
                errors.push(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value, min, max) in [
            ("stretch_amount", self.stretch_amount, 0.0, 1.0),
            ("squash_amount", self.squash_amount, 0.0, 0.9),
            ("stretch_attack", self.stretch_attack, 0.0, 1.0),
            ("squash_attack", self.squash_attack, 0.0, 1.0),
            ("squash_drop", self.squash_drop, 0.0, f32::MAX),
            ("dust_speed", self.dust_speed, 0.0, f32::MAX),
        ] {
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

        errors
    }
}

/// Seeded generator for particle spread so effects replay identically.
#[derive(Resource, Debug)]
pub struct DustRng(pub ChaCha8Rng);

impl DustRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
