//! Character motion integration.
//!
//! The motion sink: consumes the walk/look vectors written by input and
//! behaviour code and applies them to transforms. Ground contact, gravity,
//! and terminal velocity live here, not in the controllers.
use bevy::prelude::*;

use crate::components::CharacterMotion;
use crate::constants::{GRAVITY_PULL, MAX_FALL_SPEED, PHYSICS_TICK_RATE};

/// Advances one character by `dt` seconds and returns its new translation.
///
/// Horizontal movement scales the walk vector by the physics tick rate so
/// a walk magnitude of `0.5` covers thirty units per second regardless of
/// the frame clock. The vertical channel integrates gravity, clamps to
/// the terminal fall speed, and snaps back onto the ground plane.
pub fn step_character(translation: Vec3, motion: &mut CharacterMotion, dt: f32) -> Vec3 {
    let mut next = translation + motion.walk * PHYSICS_TICK_RATE * dt;

    if !motion.on_ground() {
        motion.vertical_speed = (motion.vertical_speed - GRAVITY_PULL * dt).max(-MAX_FALL_SPEED);
    }
    next.y += motion.vertical_speed * dt;

    // A rising character is airborne even while still at ground height.
    if next.y <= motion.ground_height && motion.vertical_speed <= 0.0 {
        next.y = motion.ground_height;
        motion.vertical_speed = 0.0;
        motion.set_grounded(true);
    } else {
        motion.set_grounded(false);
    }

    next
}

/// Applies every character's pending motion to its transform.
///
/// Runs after the behaviour and input systems so their vectors for this
/// tick are consumed in the same frame. A non-zero look vector reorients
/// the character; zero leaves the previous facing alone.
pub fn apply_character_motion_system(
    time: Res<Time>,
    mut characters: Query<(&mut Transform, &mut CharacterMotion)>,
) {
    let dt = time.delta_secs();
    for (mut transform, mut motion) in &mut characters {
        transform.translation = step_character(transform.translation, motion.as_mut(), dt);
        if motion.look != Vec3::ZERO && motion.look.is_finite() {
            transform.look_to(motion.look, Vec3::Y);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::JUMP_SPEED;

    #[test]
    fn walking_covers_tick_rate_scaled_distance() {
        let mut motion = CharacterMotion::new(0.0);
        motion.walk = Vec3::new(0.5, 0.0, 0.0);

        let next = step_character(Vec3::ZERO, &mut motion, 1.0 / 60.0);
        assert_relative_eq!(next.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(next.y, 0.0);
    }

    #[test]
    fn grounded_characters_do_not_sink() {
        let mut motion = CharacterMotion::new(5.5);
        let next = step_character(Vec3::new(0.0, 5.5, 0.0), &mut motion, 0.1);
        assert_relative_eq!(next.y, 5.5);
        assert!(motion.on_ground());
    }

    #[test]
    fn jump_rises_then_returns_to_ground() {
        let mut motion = CharacterMotion::new(0.0);
        motion.jump(JUMP_SPEED);
        assert!(!motion.on_ground());

        let mut position = Vec3::ZERO;
        position = step_character(position, &mut motion, 0.1);
        assert!(position.y > 0.0);

        // Integrate until gravity brings the character back down.
        for _ in 0..100 {
            position = step_character(position, &mut motion, 0.1);
        }
        assert_relative_eq!(position.y, 0.0);
        assert!(motion.on_ground());
        assert_relative_eq!(motion.vertical_speed, 0.0);
    }

    #[test]
    fn jumping_midair_is_ignored() {
        let mut motion = CharacterMotion::new(0.0);
        motion.jump(JUMP_SPEED);
        let rising = motion.vertical_speed;
        motion.jump(JUMP_SPEED);
        assert_relative_eq!(motion.vertical_speed, rising);
    }

    #[test]
    fn fall_speed_is_capped() {
        let mut motion = CharacterMotion::new(-1000.0);
        motion.set_grounded(false);

        let mut position = Vec3::ZERO;
        for _ in 0..50 {
            position = step_character(position, &mut motion, 0.1);
        }
        assert!(motion.vertical_speed >= -MAX_FALL_SPEED);
        assert_relative_eq!(motion.vertical_speed, -MAX_FALL_SPEED);
    }
}
