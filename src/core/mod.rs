//! Core domain: application states, camera and the test stage.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::content::ContentSet;
use crate::core::systems::{setup_camera, spawn_test_stage, transition_to_run};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, (setup_camera, spawn_test_stage))
            .add_systems(Startup, transition_to_run.after(ContentSet::Load));
    }
}
