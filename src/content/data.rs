//! Data definitions for the controller configuration file.
//!
//! Mirrors the structure of assets/data/controller.ron. Every field has a
//! default, so a file only needs to list the values it changes.

use serde::{Deserialize, Serialize};

use crate::feedback::FeedbackTuning;
use crate::movement::MovementTuning;

pub const CONTROLLER_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub feedback: FeedbackTuning,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            schema_version: CONTROLLER_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            feedback: FeedbackTuning::default(),
        }
    }
}
