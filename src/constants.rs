//! Gameplay constants used across systems.
//!
//! Values mirror the original demo's tuning and are hardcoded; there is no
//! configuration surface beyond `--verbose`.
use glam::Vec3;

/// Distance below which the pursuer stops walking and attacks.
pub const ATTACK_RADIUS: f32 = 15.0;
/// Distance beyond which the pursuer gives up and stands idle.
pub const PURSUIT_RADIUS: f32 = 100.0;
/// Per-tick displacement magnitude while the pursuer is chasing.
pub const PURSUIT_SPEED: f32 = 0.5;
/// Cross-fade duration handed to the animation sink with every directive.
pub const ANIM_BLEND_TIME: f32 = 0.5;

/// Forward/backward contribution of the view direction to player walking.
pub const FORWARD_SPEED: f32 = 0.6;
/// Sideways contribution of the view's left vector to player walking.
pub const STRAFE_SPEED: f32 = 0.4;
/// Walk vector multiplier while the run key is held.
pub const RUN_MULTIPLIER: f32 = 2.0;
/// Upward speed applied when a grounded character jumps.
pub const JUMP_SPEED: f32 = 20.0;
/// Terminal falling speed.
pub const MAX_FALL_SPEED: f32 = 40.0;
/// Downward acceleration applied to airborne characters.
pub const GRAVITY_PULL: f32 = 30.0;
/// Reference rate at which walk vectors are expressed as displacements.
///
/// The character controller in the original engine consumed its walk
/// direction once per physics tick; motion integration scales by this rate
/// so the same constants produce the same speeds under a variable frame
/// clock.
pub const PHYSICS_TICK_RATE: f32 = 60.0;

/// Reach of the flashlight spot light.
pub const FLASHLIGHT_RANGE: f32 = 100.0;
/// Inner cone angle of the flashlight in radians.
pub const FLASHLIGHT_INNER_ANGLE: f32 = core::f32::consts::FRAC_PI_6;
/// Outer cone angle of the flashlight in radians.
pub const FLASHLIGHT_OUTER_ANGLE: f32 = core::f32::consts::FRAC_PI_3;
/// Edge length of the shadow maps in pixels.
pub const SHADOW_MAP_SIZE: usize = 1024;
/// Uniform scale applied to the town scene model.
pub const SCENE_SCALE: f32 = 2.0;
/// Where the player character starts.
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 5.5, 0.0);
/// Where the pursuer starts.
pub const PURSUER_SPAWN: Vec3 = Vec3::new(-20.0, 5.5, -30.0);
