//! Movement domain: systems that drive the motion controller.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimationSignals};
use crate::feedback::{CueBuffer, FeedbackRequested};
use crate::movement::{
    BodyHandle, GroundContact, InputProvider, JumpedEvent, LandedEvent, MotionController,
    MovementInput, Player, PlayerVisual,
};

/// Fixed step: horizontal force toward the target speed.
pub(crate) fn apply_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<(&MotionController, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    let snapshot = input.snapshot();

    for (controller, mut velocity) in &mut query {
        let mass = controller.tuning().body_mass;
        let mut body = BodyHandle::new(&mut velocity.0, mass);
        controller.apply_locomotion(&snapshot, &mut body, dt);
    }
}

/// Fixed step: jump/fall state machine and gravity shaping.
pub(crate) fn step_jump_state_machine(
    time: Res<Time>,
    mut input: ResMut<MovementInput>,
    mut query: Query<
        (
            Entity,
            &mut MotionController,
            &GroundContact,
            &mut LinearVelocity,
            &mut AnimationSignals,
        ),
        With<Player>,
    >,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut landed_events: MessageWriter<LandedEvent>,
    mut feedback_requests: MessageWriter<FeedbackRequested>,
) {
    let dt = time.delta_secs();
    let snapshot = input.snapshot();

    for (entity, mut controller, contact, mut velocity, mut signals) in &mut query {
        let impact_velocity = velocity.y;
        let mass = controller.tuning().body_mass;
        let mut body = BodyHandle::new(&mut velocity.0, mass);
        let mut cues = CueBuffer::default();

        let report = controller.fixed_step(
            dt,
            &snapshot,
            contact,
            &mut body,
            &mut *signals,
            &mut cues,
        );

        if report.landed {
            debug!("Landed: impact_velocity={:.2}", impact_velocity);
            landed_events.write(LandedEvent {
                entity,
                impact_velocity,
            });
        }
        if report.jumped {
            debug!("Jumped: vy={:.2}", report.velocity.y);
            jumped_events.write(JumpedEvent {
                entity,
                launch_velocity: report.velocity.y,
            });
        }

        for cue in cues.drain() {
            feedback_requests.write(FeedbackRequested { entity, cue });
        }
    }

    input.consume_jump_press();
}

/// Presentation tick: facing and locomotion speed signal.
pub(crate) fn present_locomotion(
    input: Res<MovementInput>,
    mut query: Query<
        (
            &mut MotionController,
            &LinearVelocity,
            &mut AnimationSignals,
            &Children,
        ),
        With<Player>,
    >,
    mut visuals: Query<&mut Sprite, With<PlayerVisual>>,
) {
    let snapshot = input.snapshot();

    for (mut controller, velocity, mut signals, children) in &mut query {
        let facing = controller.present_locomotion(&snapshot, velocity.0, &mut *signals);

        for child in children.iter() {
            if let Ok(mut sprite) = visuals.get_mut(child) {
                sprite.flip_x = facing.flip_x();
            }
        }
    }
}

/// Presentation tick: start and finish spell casts.
pub(crate) fn handle_casting(
    mut input: ResMut<MovementInput>,
    mut query: Query<
        (
            &mut MotionController,
            &GroundContact,
            &mut AnimationSignals,
            &AnimationController,
        ),
        With<Player>,
    >,
) {
    for (mut controller, contact, mut signals, clips) in &mut query {
        if controller.update_casting(&mut *input, contact, &mut *signals, clips) {
            info!("Casting spell (airborne={})", !contact.supported);
        }
    }
}
