//! Debug domain: motion readout panel.

use bevy::prelude::*;

const READOUT_FONT_SIZE: f32 = 13.0;

/// Marker for the motion readout text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Readout panel pinned to the top-left corner, above gameplay sprites.
pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("waiting for player..."),
        TextFont {
            font_size: READOUT_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.95, 0.75)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            min_width: Val::Px(220.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.05, 0.02, 0.1, 0.75)),
        ZIndex(500),
    ));
}
