//! Player character control.
//!
//! Keyboard state is sampled into an explicit per-tick [`MovementInput`]
//! snapshot; the movement system turns the snapshot and the camera's view
//! direction into a walk vector for the motion sink. No module-level
//! input flags.
use bevy::prelude::*;
use serde::Serialize;

use crate::components::{CharacterMotion, Player};
use crate::constants::{FORWARD_SPEED, JUMP_SPEED, RUN_MULTIPLIER, STRAFE_SPEED};
use crate::vector_math::{flatten, normalize_or_zero};

/// One tick's worth of player input, sampled from the keyboard.
#[derive(Resource, Debug, Default, Clone, Copy, Serialize)]
pub struct MovementInput {
    /// Strafe left (`A`).
    pub left: bool,
    /// Strafe right (`D`).
    pub right: bool,
    /// Walk forward (`W`).
    pub forward: bool,
    /// Walk backward (`S`).
    pub backward: bool,
    /// Run modifier (`Left Shift`).
    pub run: bool,
    /// Jump, edge-triggered on key press (`Space`).
    pub jump: bool,
    /// Flashlight toggle, edge-triggered on key release (`E`).
    pub flashlight: bool,
}

/// Direction the camera is looking, consumed by player movement.
///
/// Kept as a resource so movement logic stays testable without a camera;
/// the render layer refreshes it from the camera transform each frame.
#[derive(Resource, Debug, Clone, Copy, Serialize)]
pub struct ViewDirection(pub Vec3);

impl Default for ViewDirection {
    fn default() -> Self {
        Self(Vec3::NEG_Z)
    }
}

/// Samples the keyboard into the [`MovementInput`] snapshot.
pub fn sample_input_system(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    *input = MovementInput {
        left: keys.pressed(KeyCode::KeyA),
        right: keys.pressed(KeyCode::KeyD),
        forward: keys.pressed(KeyCode::KeyW),
        backward: keys.pressed(KeyCode::KeyS),
        run: keys.pressed(KeyCode::ShiftLeft),
        jump: keys.just_pressed(KeyCode::Space),
        flashlight: keys.just_released(KeyCode::KeyE),
    };
}

/// Combines the input snapshot and view direction into a walk vector.
///
/// Forward/backward walk along the view direction at [`FORWARD_SPEED`],
/// strafing along the view's left vector at [`STRAFE_SPEED`]; running
/// doubles the result. The vertical component is zeroed so looking up or
/// down never launches the character.
pub fn walk_vector(input: &MovementInput, view: Vec3) -> Vec3 {
    let forward = view * FORWARD_SPEED;
    let left = normalize_or_zero(Vec3::Y.cross(view)) * STRAFE_SPEED;

    let mut walk = Vec3::ZERO;
    if input.left {
        walk += left;
    }
    if input.right {
        walk -= left;
    }
    if input.forward {
        walk += forward;
    }
    if input.backward {
        walk -= forward;
    }
    if input.run {
        walk *= RUN_MULTIPLIER;
    }

    flatten(walk)
}

/// Feeds the input snapshot into the player's motion sink.
///
/// The walk vector is only replaced while the character is grounded, so a
/// jump carries its takeoff momentum instead of granting air control.
pub fn player_movement_system(
    input: Res<MovementInput>,
    view: Res<ViewDirection>,
    mut players: Query<&mut CharacterMotion, With<Player>>,
) {
    for mut motion in &mut players {
        if motion.on_ground() {
            motion.walk = walk_vector(&input, view.0);
        }
        if input.jump {
            motion.jump(JUMP_SPEED);
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    const VIEW: Vec3 = Vec3::NEG_Z;

    #[test]
    fn no_keys_yield_no_movement() {
        let input = MovementInput::default();
        assert_eq!(walk_vector(&input, VIEW), Vec3::ZERO);
    }

    #[test]
    fn forward_walks_along_the_view() {
        let input = MovementInput {
            forward: true,
            ..MovementInput::default()
        };
        let walk = walk_vector(&input, VIEW);
        assert_relative_eq!(walk.z, -FORWARD_SPEED, epsilon = 1e-6);
        assert_relative_eq!(walk.x, 0.0);
        assert_relative_eq!(walk.y, 0.0);
    }

    #[test]
    fn strafing_is_perpendicular_to_the_view() {
        let input = MovementInput {
            left: true,
            ..MovementInput::default()
        };
        let walk = walk_vector(&input, VIEW);
        assert_relative_eq!(walk.x, -STRAFE_SPEED, epsilon = 1e-6);
        assert_relative_eq!(walk.z, 0.0);
    }

    #[rstest]
    #[case(MovementInput { left: true, right: true, ..MovementInput::default() })]
    #[case(MovementInput { forward: true, backward: true, ..MovementInput::default() })]
    fn opposite_keys_cancel(#[case] input: MovementInput) {
        let walk = walk_vector(&input, VIEW);
        assert_relative_eq!(walk.length(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn running_doubles_the_walk_vector() {
        let walking = MovementInput {
            forward: true,
            ..MovementInput::default()
        };
        let running = MovementInput {
            run: true,
            ..walking
        };
        let slow = walk_vector(&walking, VIEW);
        let fast = walk_vector(&running, VIEW);
        assert_relative_eq!(fast.length(), slow.length() * RUN_MULTIPLIER, epsilon = 1e-6);
    }

    #[test]
    fn walk_stays_horizontal_when_looking_down() {
        let input = MovementInput {
            forward: true,
            ..MovementInput::default()
        };
        let view = Vec3::new(0.0, -0.7, -0.7);
        assert_eq!(walk_vector(&input, view).y, 0.0);
    }
}
