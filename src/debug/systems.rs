//! Debug domain: hotkeys, probe gizmo and motion readout.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimationFinished};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{
    GroundContact, GroundProbe, JumpedEvent, LandedEvent, MotionController, Player,
};

const PROBE_SUPPORTED: Color = Color::srgb(0.3, 0.9, 0.4);
const PROBE_AIRBORNE: Color = Color::srgb(0.9, 0.3, 0.3);

/// F3 toggles the readout, F4 the probe gizmo
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        let msg = if debug_state.show_info {
            "Motion readout ON"
        } else {
            "Motion readout OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_probe = !debug_state.show_probe;
        let msg = if debug_state.show_probe {
            "Ground probe ON"
        } else {
            "Ground probe OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Remember the latest transition for the readout
pub(crate) fn track_transitions(
    mut debug_state: ResMut<DebugState>,
    mut jumps: MessageReader<JumpedEvent>,
    mut landings: MessageReader<LandedEvent>,
    mut clips: MessageReader<AnimationFinished>,
) {
    for jump in jumps.read() {
        debug_state.last_transition = Some(format!("jumped at {:.2}", jump.launch_velocity));
    }
    for landing in landings.read() {
        debug_state.last_transition =
            Some(format!("landed at {:.2}", landing.impact_velocity));
    }
    for clip in clips.read() {
        debug_state.last_transition = Some(format!("{:?} finished", clip.state));
    }
}

/// Draw the ground probe, green while it finds support
pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    probes: Query<(&Transform, &GroundProbe, &GroundContact), With<Player>>,
) {
    for (transform, probe, contact) in &probes {
        let center = transform.translation.truncate() + probe.offset;
        let color = if contact.supported {
            PROBE_SUPPORTED
        } else {
            PROBE_AIRBORNE
        };
        gizmos.circle_2d(Isometry2d::from_translation(center), probe.radius, color);
    }
}

pub(crate) fn motion_readout(
    controller: &MotionController,
    velocity: Vec2,
    clip: &AnimationController,
    last_transition: Option<&str>,
    status: Option<&str>,
) -> String {
    let state = controller.state();
    let mut readout = format!(
        "Phase: {:?}\nCoyote: {:.2}\nBuffer: {:.2} (armed: {})\nVel: ({:.2}, {:.2})\nFacing: {:?}\nCasting: {}\nClip: {:?} {:.0}%",
        state.phase,
        state.coyote_timer,
        state.jump_buffer_timer,
        state.buffer_armed,
        velocity.x,
        velocity.y,
        state.facing,
        state.is_casting,
        clip.state,
        clip.normalized_time() * 100.0,
    );
    if let Some(transition) = last_transition {
        readout.push_str("\nLast: ");
        readout.push_str(transition);
    }
    if let Some(status) = status {
        readout.push_str("\n> ");
        readout.push_str(status);
    }
    readout
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&MotionController, &LinearVelocity, &AnimationController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((controller, velocity, clip)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let status = debug_state
            .status_message
            .as_ref()
            .map(|(message, _)| message.as_str());
        **text = motion_readout(
            controller,
            velocity.0,
            clip,
            debug_state.last_transition.as_deref(),
            status,
        );
    }
}
