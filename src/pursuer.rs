//! Pursuer behaviour controller.
//!
//! A per-tick state machine that maps the distance between the pursuing
//! character and its target onto a locomotion state, then produces a
//! steering vector, a facing vector, and an animation intent. Plain glam
//! math with no engine types, so the whole controller unit-tests headless;
//! the ECS wiring lives in [`crate::systems`].
use glam::Vec3;
use serde::Serialize;

use crate::animation::AnimationDirective;
use crate::constants::{ANIM_BLEND_TIME, ATTACK_RADIUS, PURSUIT_RADIUS, PURSUIT_SPEED};
use crate::vector_math::{flatten, normalize_or_zero};

/// Clip played while standing idle.
pub const CLIP_IDLE: &str = "stand";
/// Clip played while walking toward the target.
pub const CLIP_WALK: &str = "Walk";
/// Clip played while attacking.
pub const CLIP_ATTACK: &str = "push";

/// Locomotion state of the pursuer. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BehaviorState {
    /// Target out of range; stand still.
    #[default]
    Idle,
    /// Target in sight; walk toward it.
    Chasing,
    /// Target within reach; stop and attack.
    Attacking,
}

/// Classifies a distance to the target into a behaviour state.
///
/// Thresholds are exclusive: a distance of exactly [`ATTACK_RADIUS`] or
/// [`PURSUIT_RADIUS`] still counts as chasing. The state is re-derived
/// from the raw distance every tick with no hysteresis band, so it can
/// flicker when the distance oscillates around a threshold; the
/// change-gated animation directives absorb most of the visible thrash.
pub fn behavior_for_distance(distance: f32) -> BehaviorState {
    if distance < ATTACK_RADIUS {
        BehaviorState::Attacking
    } else if distance > PURSUIT_RADIUS {
        BehaviorState::Idle
    } else {
        BehaviorState::Chasing
    }
}

/// Behaviour state owned by one pursuing character.
///
/// `walk_direction` is recomputed from scratch every tick;
/// `look_direction` keeps its last value while idle so the character does
/// not snap back to a default facing when the target walks out of range.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Pursuer {
    /// Current locomotion state. Starts idle.
    pub state: BehaviorState,
    /// Desired horizontal displacement for this tick.
    pub walk_direction: Vec3,
    /// Desired facing vector for this tick.
    pub look_direction: Vec3,
}

impl Pursuer {
    /// Creates a controller in the idle state with zeroed outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the controller by one simulation tick.
    ///
    /// Reads the two world positions, re-derives the behaviour state and
    /// the steering/facing vectors, and returns an animation directive
    /// when the state's clip differs from `playing` (the clip the
    /// animation sink reports as current). Total over all finite inputs;
    /// coincident positions resolve to attacking with zero vectors.
    ///
    /// `_dt` is accepted for parity with the host scheduler's callback
    /// but unused; the state machine is rate-independent.
    pub fn tick(
        &mut self,
        _dt: f32,
        self_position: Vec3,
        target_position: Vec3,
        playing: Option<&str>,
    ) -> Option<AnimationDirective> {
        let distance = self_position.distance(target_position);
        self.walk_direction = Vec3::ZERO;
        self.state = behavior_for_distance(distance);

        match self.state {
            BehaviorState::Idle => clip_change(playing, CLIP_IDLE, false),
            BehaviorState::Chasing => {
                let step = normalize_or_zero(target_position - self_position) * PURSUIT_SPEED;
                self.walk_direction = flatten(step);
                self.look_direction = self.walk_direction;
                clip_change(playing, CLIP_WALK, true)
            }
            BehaviorState::Attacking => {
                self.look_direction = target_position - self_position;
                clip_change(playing, CLIP_ATTACK, true)
            }
        }
    }
}

/// Builds a directive for `clip` unless it is already playing.
///
/// Re-issuing the current clip would restart the cross-fade mid-stride, so
/// directives are only emitted on an actual change.
fn clip_change(playing: Option<&str>, clip: &'static str, looped: bool) -> Option<AnimationDirective> {
    if playing == Some(clip) {
        return None;
    }
    Some(AnimationDirective {
        clip,
        looped,
        blend_time: ANIM_BLEND_TIME,
        speed: 1.0,
    })
}
