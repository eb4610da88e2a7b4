//! Squash and stretch timelines for the player's visual.
//!
//! Each effect is a two-segment timeline: ease from neutral to a peak pose,
//! then ease back. Timelines never stack. A new trigger snaps the visual back
//! to its rest pose and starts over, and a finished timeline always leaves
//! the visual at exactly its rest pose.

use bevy::ecs::message::MessageReader;
use bevy::math::curve::{Curve, EaseFunction, EasingCurve};
use bevy::prelude::*;

use super::resources::FeedbackTuning;
use super::{FeedbackCue, FeedbackRequested};
use crate::movement::PlayerVisual;

/// Scale and offset applied on top of the visual's rest transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeformPose {
    pub scale: Vec2,
    pub offset: Vec2,
}

impl DeformPose {
    pub const NEUTRAL: Self = Self {
        scale: Vec2::ONE,
        offset: Vec2::ZERO,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeformKind {
    JumpStretch,
    LandSquash,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeformTimeline {
    pub kind: DeformKind,
    peak: DeformPose,
    attack: f32,
    release: f32,
    elapsed: f32,
    release_ease: EaseFunction,
}

impl DeformTimeline {
    pub fn jump_stretch(tuning: &FeedbackTuning) -> Self {
        let amount = tuning.stretch_amount;
        let attack = tuning.stretch_duration * tuning.stretch_attack;
        Self {
            kind: DeformKind::JumpStretch,
            peak: DeformPose {
                scale: Vec2::new(1.0 - amount * 0.5, 1.0 + amount),
                offset: Vec2::ZERO,
            },
            attack,
            release: tuning.stretch_duration - attack,
            elapsed: 0.0,
            release_ease: EaseFunction::QuadraticInOut,
        }
    }

    pub fn land_squash(tuning: &FeedbackTuning) -> Self {
        let amount = tuning.squash_amount;
        let attack = tuning.squash_duration * tuning.squash_attack;
        Self {
            kind: DeformKind::LandSquash,
            peak: DeformPose {
                scale: Vec2::new(1.0 + amount * 0.5, 1.0 - amount),
                offset: Vec2::new(0.0, -tuning.squash_drop),
            },
            attack,
            release: tuning.squash_duration - attack,
            elapsed: 0.0,
            // Overshoots a little past neutral for the rebound
            release_ease: EaseFunction::BackOut,
        }
    }

    pub fn duration(&self) -> f32 {
        self.attack + self.release
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn peak(&self) -> DeformPose {
        self.peak
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration()
    }

    /// Step the timeline and return the pose to apply.
    pub fn advance(&mut self, dt: f32) -> DeformPose {
        self.elapsed = (self.elapsed + dt).min(self.duration());
        self.sample()
    }

    pub fn sample(&self) -> DeformPose {
        if self.is_finished() {
            return DeformPose::NEUTRAL;
        }

        if self.elapsed < self.attack {
            let t = self.elapsed / self.attack;
            blend(DeformPose::NEUTRAL, self.peak, EaseFunction::QuadraticOut, t)
        } else {
            let t = if self.release > 0.0 {
                (self.elapsed - self.attack) / self.release
            } else {
                1.0
            };
            blend(self.peak, DeformPose::NEUTRAL, self.release_ease, t)
        }
    }
}

fn blend(from: DeformPose, to: DeformPose, ease: EaseFunction, t: f32) -> DeformPose {
    DeformPose {
        scale: EasingCurve::new(from.scale, to.scale, ease).sample_clamped(t),
        offset: EasingCurve::new(from.offset, to.offset, ease).sample_clamped(t),
    }
}

/// Running deformation on a visual entity.
#[derive(Component, Debug, Default)]
pub struct Deformation {
    pub active: Option<DeformTimeline>,
    /// Local translation the visual returns to.
    pub rest_translation: Vec3,
}

impl Deformation {
    /// Replace whatever is running. The visual is reset first so an
    /// interrupted effect cannot leave a permanent distortion.
    pub fn start(&mut self, timeline: DeformTimeline, transform: &mut Transform) {
        self.apply(DeformPose::NEUTRAL, transform);
        self.active = Some(timeline);
    }

    pub fn apply(&self, pose: DeformPose, transform: &mut Transform) {
        transform.scale = pose.scale.extend(1.0);
        transform.translation = self.rest_translation + pose.offset.extend(0.0);
    }
}

pub(crate) fn start_deformations(
    mut requests: MessageReader<FeedbackRequested>,
    tuning: Res<FeedbackTuning>,
    parents: Query<&Children>,
    mut visuals: Query<(&mut Deformation, &mut Transform), With<PlayerVisual>>,
) {
    for request in requests.read() {
        let timeline = match request.cue {
            FeedbackCue::JumpStretch => DeformTimeline::jump_stretch(&tuning),
            FeedbackCue::LandSquash => DeformTimeline::land_squash(&tuning),
            FeedbackCue::DustTrail | FeedbackCue::DustImpact => continue,
        };

        let Ok(children) = parents.get(request.entity) else {
            continue;
        };
        for child in children.iter() {
            if let Ok((mut deformation, mut transform)) = visuals.get_mut(child) {
                if let Some(previous) = &deformation.active {
                    debug!(
                        "{:?} superseded by {:?} at {:.2}s",
                        previous.kind,
                        timeline.kind,
                        previous.elapsed()
                    );
                }
                deformation.start(timeline.clone(), &mut transform);
            }
        }
    }
}

pub(crate) fn advance_deformations(
    time: Res<Time>,
    mut visuals: Query<(&mut Deformation, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (mut deformation, mut transform) in &mut visuals {
        let Some(timeline) = deformation.active.as_mut() else {
            continue;
        };

        let pose = timeline.advance(dt);
        let finished = timeline.is_finished();
        deformation.apply(pose, &mut transform);

        if finished {
            deformation.active = None;
        }
    }
}
