//! Movement domain: transition messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Message fired on the fixed step a jump launches
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub launch_velocity: f32,
}

impl Message for JumpedEvent {}

/// Message fired when an airborne body touches ground again
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
    /// Vertical velocity on the step contact was detected.
    pub impact_velocity: f32,
}

impl Message for LandedEvent {}
