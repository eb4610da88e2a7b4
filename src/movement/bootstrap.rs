//! Movement domain: player spawn and controller wiring checks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimationSignals};
use crate::feedback::Deformation;
use crate::movement::{
    ControllerError, GameLayer, GroundContact, GroundProbe, MotionController, MovementTuning,
    Player, PlayerVisual,
};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.0);
pub(crate) const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Spawn the player with a controller built from the loaded tuning.
/// Construction fails loudly if the tuning cannot produce a valid jump arc.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    gravity: Res<Gravity>,
    existing_player: Query<Entity, With<Player>>,
) -> Result {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return Ok(());
    }

    let controller = MotionController::new(tuning.clone())?;
    let kinematics = *controller.kinematics();
    let gravity_scale = kinematics.gravity_scale(gravity.0.length());

    info!(
        "Spawning player: gravity={:.2}, launch_velocity={:.2}, gravity_scale={:.3}",
        kinematics.gravity, kinematics.launch_velocity, gravity_scale
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                controller,
                GroundProbe {
                    offset: Vec2::new(0.0, tuning.ground_probe_offset_y),
                    radius: tuning.ground_probe_radius,
                },
                GroundContact::default(),
            ),
            // Animation
            (AnimationSignals::default(), AnimationController::default()),
            Transform::from_translation(PLAYER_SPAWN),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(gravity_scale),
                Mass(tuning.body_mass),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerVisual,
                Deformation::default(),
                Sprite {
                    color: Color::srgb(0.55, 0.35, 0.75),
                    custom_size: Some(PLAYER_SIZE),
                    ..default()
                },
                Transform::default(),
            ));
        });

    Ok(())
}

/// Every controller needs a body, a ground probe, an animation sink and a
/// visual to deform. A missing one is a setup bug, not something to limp past.
pub(crate) fn verify_controller_wiring(
    controllers: Query<
        (
            Entity,
            Has<LinearVelocity>,
            Has<GroundProbe>,
            Has<GroundContact>,
            Has<AnimationSignals>,
            Has<AnimationController>,
            Option<&Children>,
        ),
        Added<MotionController>,
    >,
    visuals: Query<(), (With<PlayerVisual>, With<Deformation>)>,
) -> Result {
    for (entity, has_body, has_probe, has_contact, has_signals, has_clips, children) in
        &controllers
    {
        let has_visual = children.is_some_and(|c| c.iter().any(|child| visuals.contains(child)));

        let missing = [
            (has_body, "physics body"),
            (has_probe, "ground probe"),
            (has_contact, "ground sensor"),
            (has_signals, "animation sink"),
            (has_clips, "animation clip player"),
            (has_visual, "deformable visual"),
        ]
        .into_iter()
        .find_map(|(present, name)| (!present).then_some(name));

        if let Some(collaborator) = missing {
            error!("Motion controller on {:?} is missing its {}", entity, collaborator);
            return Err(ControllerError::MissingCollaborator {
                entity,
                collaborator,
            }
            .into());
        }

        debug!("Motion controller on {:?} is fully wired", entity);
    }

    Ok(())
}
