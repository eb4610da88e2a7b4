//! Core domain: camera, test stage and boot flow.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::state::GameState;
use crate::movement::{GameLayer, Ground};

/// World units visible per screen pixel.
const CAMERA_SCALE: f32 = 1.0 / 48.0;

pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 3.0, 0.0),
    ));
}

/// A floor and a few ledges to exercise jumps, coyote time and landings.
pub(crate) fn spawn_test_stage(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let slabs = [
        // (center, size, color)
        (Vec2::new(0.0, -0.5), Vec2::new(24.0, 1.0), ground_color),
        (Vec2::new(-5.0, 2.0), Vec2::new(3.0, 0.4), platform_color),
        (Vec2::new(0.5, 3.5), Vec2::new(2.5, 0.4), platform_color),
        (Vec2::new(5.5, 2.5), Vec2::new(3.0, 0.4), platform_color),
        (Vec2::new(-12.5, 4.0), Vec2::new(1.0, 10.0), ground_color),
        (Vec2::new(12.5, 4.0), Vec2::new(1.0, 10.0), ground_color),
    ];

    for (center, size, color) in slabs {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Friction::new(0.0),
            ground_layers,
        ));
    }

    info!("Test stage spawned with {} slabs", slabs.len());
}
