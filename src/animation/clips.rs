//! Animation state machine and playback.
//!
//! Picks a clip from the controller's animation signals and advances its
//! frames. Cast clips are one-shots; everything else is driven purely by the
//! locomotion signals.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use super::AnimationSignals;
use crate::movement::{ClipProgress, PlayerVisual};

/// Above this horizontal speed the run clip plays.
const RUN_THRESHOLD: f32 = 0.1;

/// Which cast pose to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastPose {
    Grounded,
    Airborne,
}

impl CastPose {
    fn from_groundedness(value: f32) -> Self {
        if value >= 0.5 {
            CastPose::Airborne
        } else {
            CastPose::Grounded
        }
    }
}

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Cast(CastPose),
}

impl AnimationState {
    /// Placeholder tint until real sprite sheets exist.
    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.55, 0.35, 0.75),
            AnimationState::Run => Color::srgb(0.65, 0.45, 0.85),
            AnimationState::Jump => Color::srgb(0.45, 0.55, 0.9),
            AnimationState::Fall => Color::srgb(0.4, 0.3, 0.6),
            AnimationState::Cast(_) => Color::srgb(0.95, 0.75, 0.35),
        }
    }
}

/// Frame-based clip player driven by [`AnimationSignals`].
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: AnimationState,
    pub current_frame: u32,
    pub total_frames: u32,
    /// Seconds into the current frame.
    pub frame_timer: f32,
    pub frame_duration: f32,
    pub looping: bool,
    /// Set once a one-shot clip has shown its last frame.
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Switch clips. Re-selecting the playing clip is a no-op.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.restart(state);
        }
    }

    /// Start `state` from its first frame even if it is already playing.
    pub fn restart(&mut self, state: AnimationState) {
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        self.looping = matches!(
            state,
            AnimationState::Idle | AnimationState::Run | AnimationState::Fall
        );

        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Jump => 2,
            AnimationState::Fall => 2,
            AnimationState::Cast(_) => 5,
        };

        self.frame_duration = match state {
            AnimationState::Run => 0.1,
            AnimationState::Cast(_) => 0.08,
            _ => 0.15,
        };
    }

    /// Swap between the grounded and airborne cast pose without restarting.
    pub fn set_cast_pose(&mut self, pose: CastPose) {
        if let AnimationState::Cast(current) = self.state {
            if current != pose {
                self.state = AnimationState::Cast(pose);
            }
        }
    }

    pub fn is_casting(&self) -> bool {
        matches!(self.state, AnimationState::Cast(_))
    }

    /// Progress through the current clip in [0, 1].
    pub fn normalized_time(&self) -> f32 {
        if self.finished {
            return 1.0;
        }
        let frames = self.current_frame as f32 + self.frame_timer / self.frame_duration;
        (frames / self.total_frames as f32).min(1.0)
    }

    /// Advance playback. Returns true on the frame a one-shot clip finishes.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;

        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.frame_timer = 0.0;
                    self.finished = true;
                    return true;
                }
            }
        }

        false
    }
}

impl ClipProgress for AnimationController {
    fn cast_progress(&self) -> Option<f32> {
        self.is_casting().then(|| self.normalized_time())
    }
}

/// Pick the locomotion clip for the current signals.
pub fn locomotion_state(signals: &AnimationSignals) -> AnimationState {
    if signals.falling {
        AnimationState::Fall
    } else if signals.jumping {
        AnimationState::Jump
    } else if signals.speed > RUN_THRESHOLD {
        AnimationState::Run
    } else {
        AnimationState::Idle
    }
}

/// A one-shot clip showed its last frame.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

/// System that chooses the clip from the controller's signals.
pub fn animation_state_machine(
    mut query: Query<(&mut AnimationSignals, &mut AnimationController)>,
) {
    for (mut signals, mut controller) in &mut query {
        let from = controller.state;
        let pose = CastPose::from_groundedness(signals.cast_groundedness);

        if signals.take_cast_trigger() {
            controller.restart(AnimationState::Cast(pose));
        } else if controller.is_casting() && !controller.finished {
            // One-shot casts play out before locomotion takes over again
            controller.set_cast_pose(pose);
        } else {
            controller.set_state(locomotion_state(&signals));
        }

        if controller.state != from {
            debug!("Clip: {:?} -> {:?}", from, controller.state);
        }
    }
}

/// Advance every clip by the frame delta.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        if controller.tick(time.delta_secs()) {
            finished_events.write(AnimationFinished {
                entity,
                state: controller.state,
            });
        }
    }
}

/// Tint the visual child to show the current clip.
pub fn tint_player_visual(
    query: Query<(&AnimationController, &Children), Changed<AnimationController>>,
    mut visuals: Query<&mut Sprite, With<PlayerVisual>>,
) {
    for (controller, children) in &query {
        for child in children.iter() {
            if let Ok(mut sprite) = visuals.get_mut(child) {
                sprite.color = controller.state.tint();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locomotion_state_priority() {
        let mut signals = AnimationSignals {
            speed: 3.0,
            ..default()
        };
        assert_eq!(locomotion_state(&signals), AnimationState::Run);

        signals.jumping = true;
        assert_eq!(locomotion_state(&signals), AnimationState::Jump);

        signals.jumping = false;
        signals.falling = true;
        assert_eq!(locomotion_state(&signals), AnimationState::Fall);

        let idle = AnimationSignals {
            speed: 0.05,
            ..default()
        };
        assert_eq!(locomotion_state(&idle), AnimationState::Idle);
    }

    #[test]
    fn test_cast_clip_reports_progress_until_done() {
        let mut controller = AnimationController::default();
        assert_eq!(controller.cast_progress(), None);

        controller.restart(AnimationState::Cast(CastPose::Grounded));
        assert_eq!(controller.cast_progress(), Some(0.0));

        // 5 frames at 0.08s
        let mut finished_at = None;
        for step in 0..60 {
            if controller.tick(0.02) {
                finished_at = Some(step);
                break;
            }
            assert!(controller.cast_progress().unwrap() < 1.0);
        }
        assert!(finished_at.is_some());
        assert_eq!(controller.cast_progress(), Some(1.0));
        assert!(!controller.tick(0.02));
    }

    #[test]
    fn test_restart_replays_same_clip() {
        let mut controller = AnimationController::default();
        controller.restart(AnimationState::Cast(CastPose::Airborne));
        while !controller.tick(0.1) {}
        assert!(controller.finished);

        controller.restart(AnimationState::Cast(CastPose::Airborne));
        assert!(!controller.finished);
        assert_eq!(controller.current_frame, 0);
        assert!(controller.cast_progress().unwrap() < 1.0);
    }

    #[test]
    fn test_cast_pose_swap_keeps_frame() {
        let mut controller = AnimationController::default();
        controller.restart(AnimationState::Cast(CastPose::Grounded));
        controller.tick(0.17);
        let frame = controller.current_frame;

        controller.set_cast_pose(CastPose::Airborne);
        assert_eq!(controller.state, AnimationState::Cast(CastPose::Airborne));
        assert_eq!(controller.current_frame, frame);
    }

    #[test]
    fn test_looping_clip_never_finishes() {
        let mut controller = AnimationController::default();
        controller.set_state(AnimationState::Run);
        for _ in 0..100 {
            assert!(!controller.tick(0.05));
        }
        assert!(!controller.finished);
        assert!(controller.current_frame < controller.total_frames);
    }
}
