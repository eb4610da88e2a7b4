//! Movement domain: the collaborators a motion controller is driven through.
//!
//! The controller never looks anything up on its own. Every tick it is handed
//! the input, ground sensor, body, animation sink and feedback sink it should
//! read from and write to. Bevy adapters live next to the types they wrap.

use bevy::prelude::*;

/// One tick of player intent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Horizontal and vertical intent, each in [-1, 1].
    pub move_axis: Vec2,
    pub jump_held: bool,
    /// A jump press seen since the last fixed step, even if already released.
    pub jump_pressed: bool,
    pub cast_requested: bool,
    pub interact_requested: bool,
}

pub trait InputProvider {
    fn snapshot(&self) -> InputSnapshot;

    /// Clear a cast request once it has been acted on.
    fn consume_cast(&mut self);

    /// Clear the latched jump press once a fixed step has seen it.
    fn consume_jump_press(&mut self);
}

pub trait GroundSensor {
    /// Whether the character is currently supported.
    fn is_supported(&self) -> bool;
}

impl GroundSensor for bool {
    fn is_supported(&self) -> bool {
        *self
    }
}

pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;

    /// Overwrite the velocity directly (jump launch, cut, gravity shaping).
    fn set_velocity(&mut self, velocity: Vec2);

    /// Accumulate a force for this step.
    fn add_force(&mut self, force: Vec2, dt: f32);
}

/// Typed animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimSignal {
    /// Scalar: absolute horizontal speed.
    Speed,
    Jumping,
    Falling,
    /// One-shot trigger.
    CastTrigger,
    /// Scalar: 0 for the grounded cast pose, 1 for the airborne pose.
    CastGroundedness,
}

pub trait AnimationSink {
    fn set_float(&mut self, signal: AnimSignal, value: f32);
    fn set_bool(&mut self, signal: AnimSignal, value: bool);
    fn trigger(&mut self, signal: AnimSignal);
}

/// Read side of the animation system.
pub trait ClipProgress {
    /// Normalized time of the cast clip, or `None` if it is not playing.
    fn cast_progress(&self) -> Option<f32>;
}

/// Fire-and-forget visual effects.
pub trait FeedbackSink {
    fn play_jump_stretch(&mut self);
    fn play_land_squash(&mut self);
    fn play_dust_trail(&mut self);
    fn play_dust_impact(&mut self);
}
