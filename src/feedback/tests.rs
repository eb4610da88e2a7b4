//! Feedback domain: tests for deformation timelines and cue collection.

use bevy::prelude::*;

use super::{CueBuffer, DeformKind, DeformPose, DeformTimeline, Deformation, FeedbackCue};
use super::FeedbackTuning;
use super::particles::dust_strength;
use crate::movement::FeedbackSink;

const STEP: f32 = 1.0 / 60.0;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn test_stretch_starts_neutral_and_peaks_tall() {
    let tuning = FeedbackTuning::default();
    let mut timeline = DeformTimeline::jump_stretch(&tuning);
    assert_eq!(timeline.kind, DeformKind::JumpStretch);
    assert_eq!(timeline.sample(), DeformPose::NEUTRAL);

    let attack = tuning.stretch_duration * tuning.stretch_attack;
    let pose = timeline.advance(attack);
    assert!(approx(pose.scale, timeline.peak().scale));
    assert!(pose.scale.y > 1.0);
    assert!(pose.scale.x < 1.0);
}

#[test]
fn test_squash_drops_visual_at_peak() {
    let tuning = FeedbackTuning::default();
    let mut timeline = DeformTimeline::land_squash(&tuning);

    let attack = tuning.squash_duration * tuning.squash_attack;
    let pose = timeline.advance(attack);
    assert!(pose.scale.y < 1.0);
    assert!((pose.offset.y + tuning.squash_drop).abs() < 1e-4);
}

#[test]
fn test_timeline_ends_exactly_neutral() {
    let tuning = FeedbackTuning::default();
    for mut timeline in [
        DeformTimeline::jump_stretch(&tuning),
        DeformTimeline::land_squash(&tuning),
    ] {
        let mut pose = DeformPose::NEUTRAL;
        for _ in 0..120 {
            pose = timeline.advance(STEP);
        }
        assert!(timeline.is_finished());
        assert_eq!(pose, DeformPose::NEUTRAL);
        assert_eq!(timeline.elapsed(), timeline.duration());
    }
}

#[test]
fn test_retrigger_resets_before_restarting() {
    let tuning = FeedbackTuning::default();
    let mut deformation = Deformation::default();
    let mut transform = Transform::default();

    // Land, and jump again halfway through the squash
    deformation.start(DeformTimeline::land_squash(&tuning), &mut transform);
    for _ in 0..4 {
        let timeline = deformation.active.as_mut().unwrap();
        let pose = timeline.advance(STEP);
        deformation.apply(pose, &mut transform);
    }
    assert_ne!(transform.scale, Vec3::ONE);

    deformation.start(DeformTimeline::jump_stretch(&tuning), &mut transform);
    assert_eq!(transform.scale, Vec3::ONE);
    assert_eq!(transform.translation, Vec3::ZERO);

    let active = deformation.active.as_ref().unwrap();
    assert_eq!(active.kind, DeformKind::JumpStretch);
    assert_eq!(active.elapsed(), 0.0);
}

#[test]
fn test_apply_respects_rest_translation() {
    let deformation = Deformation {
        active: None,
        rest_translation: Vec3::new(0.0, 0.25, 0.0),
    };
    let mut transform = Transform::default();
    deformation.apply(
        DeformPose {
            scale: Vec2::new(1.1, 0.8),
            offset: Vec2::new(0.0, -0.1),
        },
        &mut transform,
    );
    assert_eq!(transform.scale, Vec3::new(1.1, 0.8, 1.0));
    assert!((transform.translation.y - 0.15).abs() < 1e-6);

    deformation.apply(DeformPose::NEUTRAL, &mut transform);
    assert_eq!(transform.translation, Vec3::new(0.0, 0.25, 0.0));
    assert_eq!(transform.scale, Vec3::ONE);
}

#[test]
fn test_cue_buffer_preserves_order() {
    let mut buffer = CueBuffer::default();
    buffer.play_land_squash();
    buffer.play_dust_impact();
    buffer.play_jump_stretch();
    buffer.play_dust_trail();

    let cues: Vec<_> = buffer.drain().collect();
    assert_eq!(
        cues,
        vec![
            FeedbackCue::LandSquash,
            FeedbackCue::DustImpact,
            FeedbackCue::JumpStretch,
            FeedbackCue::DustTrail,
        ]
    );
    assert_eq!(buffer.drain().count(), 0);
}

#[test]
fn test_feedback_validation_flags_bad_values() {
    let mut tuning = FeedbackTuning::default();
    assert!(tuning.validate().is_empty());

    tuning.squash_amount = 1.5;
    tuning.dust_lifetime = 0.0;
    assert_eq!(tuning.validate().len(), 2);
}

#[test]
fn test_dust_scales_with_speed_within_bounds() {
    assert_eq!(dust_strength(10.0), 1.0);
    assert_eq!(dust_strength(-10.0), 1.0);
    assert!(dust_strength(-14.0) > dust_strength(-8.0));
    assert_eq!(dust_strength(0.0), 0.5);
    assert_eq!(dust_strength(-80.0), 1.5);
}
