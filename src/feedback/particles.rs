//! Dust particles for jump take-off and landing impacts.

use std::collections::HashMap;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use super::resources::{DustRng, FeedbackTuning};
use super::{FeedbackCue, FeedbackRequested};
use crate::movement::{GroundProbe, JumpedEvent, LandedEvent};

const DUST_COLOR: Color = Color::srgba(0.85, 0.8, 0.7, 0.8);
/// Downward pull on dust, in world units per second squared.
const DUST_GRAVITY: f32 = 2.5;
/// Launch or impact speed that produces the configured puff unscaled.
const REFERENCE_SPEED: f32 = 10.0;

/// Puff size relative to the configured one, for a launch or impact speed.
pub fn dust_strength(speed: f32) -> f32 {
    (speed.abs() / REFERENCE_SPEED).clamp(0.5, 1.5)
}

#[derive(Component, Debug)]
pub struct DustParticle {
    pub lifetime: f32,     // Remaining lifetime in seconds
    pub max_lifetime: f32, // Starting lifetime, for the fade
    pub velocity: Vec2,
}

pub(crate) fn seed_dust_rng(mut commands: Commands, tuning: Res<FeedbackTuning>) {
    commands.insert_resource(DustRng::from_seed(tuning.dust_seed));
}

/// Spawn a puff of dust at the feet of whoever requested it
pub(crate) fn spawn_dust(
    mut commands: Commands,
    mut requests: MessageReader<FeedbackRequested>,
    mut jumps: MessageReader<JumpedEvent>,
    mut landings: MessageReader<LandedEvent>,
    tuning: Res<FeedbackTuning>,
    mut rng: ResMut<DustRng>,
    bodies: Query<(&GlobalTransform, &GroundProbe)>,
) {
    let launch_speeds: HashMap<Entity, f32> = jumps
        .read()
        .map(|jump| (jump.entity, jump.launch_velocity))
        .collect();
    let impact_speeds: HashMap<Entity, f32> = landings
        .read()
        .map(|landing| (landing.entity, landing.impact_velocity))
        .collect();

    for request in requests.read() {
        let (count, trail, speed) = match request.cue {
            FeedbackCue::DustTrail => (
                tuning.dust_trail_count,
                true,
                launch_speeds.get(&request.entity),
            ),
            FeedbackCue::DustImpact => (
                tuning.dust_impact_count,
                false,
                impact_speeds.get(&request.entity),
            ),
            FeedbackCue::JumpStretch | FeedbackCue::LandSquash => continue,
        };
        let strength = speed.map_or(1.0, |speed| dust_strength(*speed));
        let count = (count as f32 * strength).round() as u32;

        let Ok((transform, probe)) = bodies.get(request.entity) else {
            continue;
        };
        let feet = transform.translation().truncate() + probe.offset;

        for i in 0..count {
            let velocity = if trail {
                // Kicked up and slightly back
                Vec2::new(
                    rng.0.random_range(-0.3..0.3),
                    rng.0.random_range(0.2..0.6),
                ) * tuning.dust_speed
                    * strength
            } else {
                // Fan out to both sides along the ground
                let side = if i % 2 == 0 { 1.0 } else { -1.0 };
                Vec2::new(
                    side * rng.0.random_range(0.5..1.0),
                    rng.0.random_range(0.1..0.4),
                ) * tuning.dust_speed
                    * strength
            };
            let jitter = Vec2::new(rng.0.random_range(-0.1..0.1), 0.0);
            let size = tuning.dust_size * rng.0.random_range(0.7..1.3);

            commands.spawn((
                DustParticle {
                    lifetime: tuning.dust_lifetime,
                    max_lifetime: tuning.dust_lifetime,
                    velocity,
                },
                Sprite {
                    color: DUST_COLOR,
                    custom_size: Some(Vec2::splat(size)),
                    ..default()
                },
                Transform::from_translation((feet + jitter).extend(0.5)),
            ));
        }

        debug!(
            "Spawned {} dust particles ({:?}, strength {:.2}) at ({:.2}, {:.2})",
            count, request.cue, strength, feet.x, feet.y
        );
    }
}

/// Drift, fade and despawn dust
pub(crate) fn update_dust(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &mut DustParticle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut transform, mut sprite) in &mut particles {
        particle.lifetime -= dt;
        if particle.lifetime <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }

        particle.velocity.y -= DUST_GRAVITY * dt;
        transform.translation += (particle.velocity * dt).extend(0.0);

        let life = particle.lifetime / particle.max_lifetime;
        sprite.color = DUST_COLOR.with_alpha(DUST_COLOR.alpha() * life);
        transform.scale = Vec3::splat(0.5 + 0.5 * life);
    }
}
