//! Animation module: parameter block and clip playback for the player.
//!
//! The motion controller writes [`AnimationSignals`]; the clip player picks
//! a clip from them each frame and reports cast progress back through
//! [`ClipProgress`](crate::movement::ClipProgress).

pub mod clips;
pub mod signals;

use bevy::prelude::*;

pub use clips::*;
pub use signals::*;

use crate::core::GameState;
use crate::movement::MovementSet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>()
            .add_systems(
                Update,
                (
                    animation_state_machine,
                    update_animation_frames,
                    tint_player_visual,
                )
                    .chain()
                    .after(MovementSet::Present)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
