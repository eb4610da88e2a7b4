//! Feedback domain: squash/stretch and dust reacting to jumps and landings.
//!
//! The motion controller never waits on anything here. It drops cues into a
//! [`CueBuffer`] during its fixed step; they are forwarded as
//! [`FeedbackRequested`] messages and played out on the presentation tick.

mod deform;
mod particles;
mod resources;
#[cfg(test)]
mod tests;

pub use deform::{DeformKind, DeformPose, DeformTimeline, Deformation};
pub use particles::DustParticle;
pub use resources::{DustRng, FeedbackTuning};

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::GameState;
use crate::feedback::deform::{advance_deformations, start_deformations};
use crate::feedback::particles::{seed_dust_rng, spawn_dust, update_dust};
use crate::movement::{FeedbackSink, MovementSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    JumpStretch,
    LandSquash,
    DustTrail,
    DustImpact,
}

/// Message asking for a cue to be played on an entity
#[derive(Debug)]
pub struct FeedbackRequested {
    pub entity: Entity,
    pub cue: FeedbackCue,
}

impl Message for FeedbackRequested {}

/// Collects cues raised during a controller step.
#[derive(Debug, Default)]
pub struct CueBuffer {
    cues: Vec<FeedbackCue>,
}

impl CueBuffer {
    pub fn drain(&mut self) -> impl Iterator<Item = FeedbackCue> + '_ {
        self.cues.drain(..)
    }
}

impl FeedbackSink for CueBuffer {
    fn play_jump_stretch(&mut self) {
        self.cues.push(FeedbackCue::JumpStretch);
    }

    fn play_land_squash(&mut self) {
        self.cues.push(FeedbackCue::LandSquash);
    }

    fn play_dust_trail(&mut self) {
        self.cues.push(FeedbackCue::DustTrail);
    }

    fn play_dust_impact(&mut self) {
        self.cues.push(FeedbackCue::DustImpact);
    }
}

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FeedbackTuning>()
            .add_message::<FeedbackRequested>()
            .add_systems(OnEnter(GameState::Run), seed_dust_rng)
            .add_systems(
                Update,
                (
                    (start_deformations, advance_deformations).chain(),
                    (spawn_dust, update_dust).chain(),
                )
                    .after(MovementSet::Present)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
