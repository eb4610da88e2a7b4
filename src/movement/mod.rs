//! Movement domain: locomotion, jumping and casting for the player character.

mod bootstrap;
mod components;
mod controller;
mod events;
mod kinematics;
mod ports;
mod resources;
mod systems;

pub use components::{
    BodyHandle, Facing, GameLayer, Ground, GroundContact, GroundProbe, MotionPhase, Player,
    PlayerVisual,
};
pub use controller::{
    ControllerError, MotionController, MotionState, StepReport, locomotion_force, should_snap,
};
pub use events::{JumpedEvent, LandedEvent};
pub use kinematics::{ConfigError, JumpKinematics};
pub use ports::{
    AnimSignal, AnimationSink, ClipProgress, FeedbackSink, GroundSensor, InputProvider,
    InputSnapshot, PhysicsBody,
};
pub use resources::{CastClearPolicy, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{spawn_player, verify_controller_wiring};
use crate::movement::systems::{
    apply_locomotion, detect_ground, handle_casting, present_locomotion, read_input,
    step_jump_state_machine,
};

/// System sets so other domains can order themselves around the controller.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Presentation tick: input, facing, casting.
    Present,
    /// Fixed tick: ground probe, locomotion force, jump state machine.
    Simulate,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_systems(OnEnter(GameState::Run), spawn_player)
            .add_systems(
                Update,
                (
                    verify_controller_wiring,
                    read_input,
                    present_locomotion,
                    handle_casting,
                )
                    .chain()
                    .in_set(MovementSet::Present)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                FixedUpdate,
                (detect_ground, apply_locomotion, step_jump_state_machine)
                    .chain()
                    .in_set(MovementSet::Simulate)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
