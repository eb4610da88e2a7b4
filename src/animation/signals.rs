//! Animation parameters written by the motion controller.

use bevy::prelude::*;

use crate::movement::{AnimSignal, AnimationSink};

/// Typed parameter block the clip player reads from.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct AnimationSignals {
    pub speed: f32,
    pub jumping: bool,
    pub falling: bool,
    /// One-shot; cleared by the clip player when it starts the cast clip.
    pub cast_trigger: bool,
    pub cast_groundedness: f32,
}

impl AnimationSignals {
    pub fn take_cast_trigger(&mut self) -> bool {
        std::mem::take(&mut self.cast_trigger)
    }
}

impl AnimationSink for AnimationSignals {
    fn set_float(&mut self, signal: AnimSignal, value: f32) {
        match signal {
            AnimSignal::Speed => self.speed = value,
            AnimSignal::CastGroundedness => self.cast_groundedness = value,
            other => warn!("{:?} is not a float parameter", other),
        }
    }

    fn set_bool(&mut self, signal: AnimSignal, value: bool) {
        match signal {
            AnimSignal::Jumping => self.jumping = value,
            AnimSignal::Falling => self.falling = value,
            other => warn!("{:?} is not a bool parameter", other),
        }
    }

    fn trigger(&mut self, signal: AnimSignal) {
        match signal {
            AnimSignal::CastTrigger => self.cast_trigger = true,
            other => warn!("{:?} is not a trigger", other),
        }
    }
}
