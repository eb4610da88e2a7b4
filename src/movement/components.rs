//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::ports::{GroundSensor, PhysicsBody};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Child entity that carries the player's sprite. Deformation and facing are
/// applied here so the physics body is never scaled.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Grounded,
    Rising,
    Falling,
}

/// Circle overlap used to decide whether the body is supported.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundProbe {
    pub offset: Vec2,
    pub radius: f32,
}

/// Result of the last ground probe.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact {
    pub supported: bool,
}

impl GroundSensor for GroundContact {
    fn is_supported(&self) -> bool {
        self.supported
    }
}

/// Wraps a body's linear velocity so forces integrate as `dv = F / m * dt`.
pub struct BodyHandle<'a> {
    velocity: &'a mut Vec2,
    mass: f32,
}

impl<'a> BodyHandle<'a> {
    pub fn new(velocity: &'a mut Vec2, mass: f32) -> Self {
        Self { velocity, mass }
    }
}

impl PhysicsBody for BodyHandle<'_> {
    fn velocity(&self) -> Vec2 {
        *self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        *self.velocity = velocity;
    }

    fn add_force(&mut self, force: Vec2, dt: f32) {
        *self.velocity += force / self.mass * dt;
    }
}
