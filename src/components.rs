//! ECS component types used by the demo.
//! Character markers, the motion sink, and the pursuer's controller
//! attachment shared between systems.
use bevy::prelude::*;
use serde::Serialize;

use crate::pursuer::Pursuer;

/// Marker for the player-controlled character.
#[derive(Component, Debug, Default, Serialize)]
pub struct Player;

/// Toggleable flashlight carried by the player.
#[derive(Component, Debug, Default, Serialize)]
pub struct Flashlight {
    /// Whether the light is currently switched on.
    pub on: bool,
}

/// Marker for the camera whose view direction steers player movement.
#[derive(Component, Debug, Default)]
pub struct MainCamera;

/// Motion sink for one physics-driven character.
///
/// Behaviour and input code write desired walk/look vectors here each
/// tick; [`crate::motion::apply_character_motion_system`] consumes them,
/// owning ground contact and gravity. Walk vectors are per-physics-tick
/// displacements, matching the original engine's character controller.
#[derive(Component, Debug, Clone, Serialize)]
pub struct CharacterMotion {
    /// Desired horizontal displacement for this tick.
    pub walk: Vec3,
    /// Desired facing vector; ignored while zero.
    pub look: Vec3,
    /// Current vertical speed, positive upward.
    pub vertical_speed: f32,
    /// Height of the ground plane this character rests on.
    pub ground_height: f32,
    grounded: bool,
}

impl CharacterMotion {
    /// Creates a motion sink for a character resting on `ground_height`.
    pub fn new(ground_height: f32) -> Self {
        Self {
            walk: Vec3::ZERO,
            look: Vec3::ZERO,
            vertical_speed: 0.0,
            ground_height,
            grounded: true,
        }
    }

    /// Whether the character is in contact with the ground.
    pub fn on_ground(&self) -> bool {
        self.grounded
    }

    /// Launches the character upward if it is grounded.
    pub fn jump(&mut self, speed: f32) {
        if self.grounded {
            self.vertical_speed = speed;
            self.grounded = false;
        }
    }

    pub(crate) fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }
}

impl Default for CharacterMotion {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Controller attachment for a pursuing character.
///
/// Pairs the behaviour state machine with a non-owning handle to the
/// target entity whose position it reads each tick. The handle is the
/// controller's one construction-time dependency.
#[derive(Component, Debug)]
pub struct PursuerController {
    /// The behaviour state machine.
    pub brain: Pursuer,
    /// Entity whose position the pursuer steers toward.
    pub target: Entity,
}

impl PursuerController {
    /// Creates an idle controller that pursues `target`.
    pub fn new(target: Entity) -> Self {
        Self {
            brain: Pursuer::new(),
            target,
        }
    }
}
