//! Movement domain: the motion controller.
//!
//! Horizontal locomotion, the jump/fall state machine and casting all live on
//! [`MotionController`]. It owns its tuning, the derived jump kinematics and
//! the transient motion state, and talks to the outside world only through
//! the traits in [`crate::movement::ports`].

use std::fmt;

use bevy::prelude::*;

use crate::movement::components::{Facing, MotionPhase};
use crate::movement::kinematics::{ConfigError, JumpKinematics};
use crate::movement::ports::{
    AnimSignal, AnimationSink, ClipProgress, FeedbackSink, GroundSensor, InputProvider,
    InputSnapshot, PhysicsBody,
};
use crate::movement::resources::{CastClearPolicy, MovementTuning};

/// Below this intent magnitude the stick counts as released.
pub const INTENT_DEAD_ZONE: f32 = 0.01;
/// Below this speed (with released input) horizontal velocity snaps to zero.
pub const SNAP_SPEED: f32 = 0.1;
/// Countdown timers never drop below this.
pub const TIMER_FLOOR: f32 = -1.0;

#[derive(Debug)]
pub enum ControllerError {
    InvalidConfig(Vec<ConfigError>),
    MissingCollaborator {
        entity: Entity,
        collaborator: &'static str,
    },
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::InvalidConfig(errors) => {
                write!(f, "invalid movement tuning:")?;
                for error in errors {
                    write!(f, "\n  - {}", error)?;
                }
                Ok(())
            }
            ControllerError::MissingCollaborator {
                entity,
                collaborator,
            } => write!(
                f,
                "motion controller on {:?} has no {} attached",
                entity, collaborator
            ),
        }
    }
}

impl std::error::Error for ControllerError {}

/// Per-tick state mutated by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pub phase: MotionPhase,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    /// Set while the jump button is up; a press only refills the buffer once.
    pub buffer_armed: bool,
    /// Whether the body has been unsupported since the last launch.
    pub airborne: bool,
    pub is_casting: bool,
    pub facing: Facing,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            phase: MotionPhase::Grounded,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            buffer_armed: true,
            airborne: false,
            is_casting: false,
            facing: Facing::Right,
        }
    }
}

impl MotionState {
    pub fn is_jumping(&self) -> bool {
        self.phase == MotionPhase::Rising
    }

    pub fn is_falling(&self) -> bool {
        self.phase == MotionPhase::Falling
    }
}

/// What happened during one fixed step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub jumped: bool,
    pub landed: bool,
    pub phase: MotionPhase,
    pub velocity: Vec2,
}

/// Horizontal force for the given intent and current velocity.
///
/// `sign(0) == 0`, so a body already at its target speed gets no force.
pub fn locomotion_force(tuning: &MovementTuning, intent_x: f32, velocity_x: f32) -> f32 {
    let target_speed = intent_x * tuning.max_speed;
    let speed_diff = target_speed - velocity_x;
    if speed_diff == 0.0 {
        return 0.0;
    }

    let rate = if target_speed.abs() > INTENT_DEAD_ZONE {
        tuning.accel
    } else {
        tuning.decel
    };

    (speed_diff.abs() * rate).powf(tuning.accel_exponent) * speed_diff.signum()
}

/// Whether residual horizontal drift should be zeroed.
pub fn should_snap(intent_x: f32, velocity_x: f32) -> bool {
    intent_x.abs() < INTENT_DEAD_ZONE && velocity_x.abs() < SNAP_SPEED
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    tuning: MovementTuning,
    kinematics: JumpKinematics,
    state: MotionState,
}

impl MotionController {
    pub fn new(tuning: MovementTuning) -> Result<Self, ControllerError> {
        let errors = tuning.validate();
        if !errors.is_empty() {
            return Err(ControllerError::InvalidConfig(errors));
        }
        let kinematics = JumpKinematics::solve(tuning.jump_height, tuning.jump_time_to_apex)
            .map_err(|e| ControllerError::InvalidConfig(vec![e]))?;

        Ok(Self {
            tuning,
            kinematics,
            state: MotionState::default(),
        })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn kinematics(&self) -> &JumpKinematics {
        &self.kinematics
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Physics half of the movement policy: push the body toward the target
    /// speed, then kill residual drift at rest.
    pub fn apply_locomotion(&self, input: &InputSnapshot, body: &mut dyn PhysicsBody, dt: f32) {
        if !self.tuning.movement_enabled {
            return;
        }

        let intent_x = input.move_axis.x;
        let force = locomotion_force(&self.tuning, intent_x, body.velocity().x);
        body.add_force(Vec2::new(force, 0.0), dt);

        let velocity = body.velocity();
        if should_snap(intent_x, velocity.x) {
            body.set_velocity(Vec2::new(0.0, velocity.y));
        }
    }

    /// Presentation half of the movement policy: facing and the locomotion
    /// speed signal, emitted every tick whether or not it changed.
    pub fn present_locomotion(
        &mut self,
        input: &InputSnapshot,
        velocity: Vec2,
        anim: &mut dyn AnimationSink,
    ) -> Facing {
        if !self.tuning.movement_enabled {
            return self.state.facing;
        }

        anim.set_float(AnimSignal::Speed, velocity.x.abs());

        let intent_x = input.move_axis.x;
        if intent_x != 0.0 {
            self.state.facing = if intent_x < 0.0 {
                Facing::Left
            } else {
                Facing::Right
            };
        }
        self.state.facing
    }

    /// One fixed physics step of the jump/fall state machine.
    ///
    /// Order matters: ground sampling, buffer latching, launch arbitration,
    /// early-release cut, apex detection, then gravity shaping.
    pub fn fixed_step(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        ground: &dyn GroundSensor,
        body: &mut dyn PhysicsBody,
        anim: &mut dyn AnimationSink,
        feedback: &mut dyn FeedbackSink,
    ) -> StepReport {
        let mut report = StepReport::default();
        let supported = ground.is_supported();
        let mut velocity = body.velocity();

        if supported {
            self.state.coyote_timer = self.tuning.coyote_time;
            let touched_down = match self.state.phase {
                MotionPhase::Falling => true,
                // Topped out onto a ledge before the apex
                MotionPhase::Rising => velocity.y <= 0.0 && self.state.airborne,
                MotionPhase::Grounded => false,
            };
            if touched_down {
                self.enter_phase(MotionPhase::Grounded, anim);
                self.state.buffer_armed = true;
                report.landed = true;
                feedback.play_land_squash();
                feedback.play_dust_impact();
            } else if self.state.phase == MotionPhase::Rising && velocity.y <= 0.0 {
                // Launch blocked (low ceiling) before ever leaving the ground.
                self.enter_phase(MotionPhase::Grounded, anim);
            }
        } else {
            self.state.airborne = true;
            self.state.coyote_timer = (self.state.coyote_timer - dt).max(TIMER_FLOOR);
        }

        // A press edge latched between steps counts even if already released.
        if input.jump_pressed || (input.jump_held && self.state.buffer_armed) {
            self.state.jump_buffer_timer = self.tuning.jump_buffer_time;
            self.state.buffer_armed = false;
        } else if !input.jump_held {
            self.state.buffer_armed = true;
            self.state.jump_buffer_timer = (self.state.jump_buffer_timer - dt).max(TIMER_FLOOR);
        }

        if self.state.coyote_timer > 0.0
            && self.state.jump_buffer_timer > 0.0
            && self.tuning.jump_enabled
            && self.state.phase != MotionPhase::Rising
        {
            velocity.y = self.kinematics.launch_velocity * self.tuning.jump_force_multiplier;
            self.state.jump_buffer_timer = 0.0;
            self.state.buffer_armed = false;
            self.state.airborne = false;
            self.enter_phase(MotionPhase::Rising, anim);
            report.jumped = true;
            feedback.play_jump_stretch();
            feedback.play_dust_trail();
        }

        if !input.jump_held && velocity.y > 0.0 {
            velocity.y *= self.tuning.jump_cut_factor;
        }

        if velocity.y < 0.0 && !supported && self.state.phase != MotionPhase::Falling {
            self.enter_phase(MotionPhase::Falling, anim);
        }

        let gravity = self.kinematics.gravity;
        if velocity.y < 0.0 {
            velocity.y += gravity * (self.tuning.fall_multiplier - 1.0) * dt;
        } else if velocity.y > 0.0 && !input.jump_held {
            velocity.y += gravity * (self.tuning.low_jump_multiplier - 1.0) * dt;
        }

        body.set_velocity(velocity);

        report.phase = self.state.phase;
        report.velocity = velocity;
        report
    }

    /// Start, track and finish spell casts. Returns true when a cast started.
    pub fn update_casting(
        &mut self,
        input: &mut dyn InputProvider,
        ground: &dyn GroundSensor,
        anim: &mut dyn AnimationSink,
        clips: &dyn ClipProgress,
    ) -> bool {
        if !self.tuning.cast_enabled {
            return false;
        }

        // A finished clip frees the caster before new requests are looked at.
        if self.state.is_casting
            && self.tuning.cast_clear == CastClearPolicy::OnClipComplete
            && clips.cast_progress().is_some_and(|t| t >= 1.0)
        {
            self.state.is_casting = false;
            debug!("Cast finished");
        }

        let mut started = false;
        if input.snapshot().cast_requested {
            input.consume_cast();
            if !self.state.is_casting {
                self.state.is_casting = true;
                anim.trigger(AnimSignal::CastTrigger);
                started = true;
                debug!("Cast started: phase={:?}", self.state.phase);
            }
        }

        if self.state.is_casting {
            let pose = if ground.is_supported() { 0.0 } else { 1.0 };
            anim.set_float(AnimSignal::CastGroundedness, pose);

            if self.tuning.cast_clear == CastClearPolicy::Immediate {
                self.state.is_casting = false;
                debug!("Cast finished");
            }
        }

        started
    }

    fn enter_phase(&mut self, phase: MotionPhase, anim: &mut dyn AnimationSink) {
        if self.state.phase == phase {
            return;
        }
        debug!("Motion phase: {:?} -> {:?}", self.state.phase, phase);
        self.state.phase = phase;
        anim.set_bool(AnimSignal::Jumping, phase == MotionPhase::Rising);
        anim.set_bool(AnimSignal::Falling, phase == MotionPhase::Falling);
    }
}
