//! Dev-tools overlays for tuning the controller.
//!
//! - F3: motion readout (phase, timers, velocity, cast, clip)
//! - F4: ground probe gizmo

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

pub use state::DebugState;
pub use ui::DebugInfoOverlay;

use crate::core::GameState;
use crate::debug::systems::{
    draw_ground_probe, handle_debug_hotkeys, track_transitions, update_debug_info_overlay,
    update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, update_status_message).chain())
            .add_systems(
                Update,
                (track_transitions, update_debug_info_overlay)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                draw_ground_probe.run_if(|state: Res<DebugState>| state.show_probe),
            );
    }
}
