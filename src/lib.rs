#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the pursuit demo's game logic.
//! Re-exports components and systems for the main application and tests.
pub mod animation;
pub mod components;
pub mod constants;
pub mod flashlight;
pub mod logging;
pub mod motion;
pub mod player;
pub mod plugin;
pub mod pursuer;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod spawn_world;
pub mod systems;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use animation::{AnimationChannel, AnimationDirective};
pub use components::{CharacterMotion, Flashlight, MainCamera, Player, PursuerController};
pub use flashlight::flashlight_toggle_system;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use flashlight::flashlight_sync_system;
pub use logging::init as init_logging;
pub use motion::{apply_character_motion_system, step_character};
pub use player::{
    player_movement_system, sample_input_system, walk_vector, MovementInput, ViewDirection,
};
pub use plugin::{PursuitError, PursuitErrorContext, PursuitPlugin};
pub use pursuer::{behavior_for_distance, BehaviorState, Pursuer};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use spawn_world::{camera_follow_system, spawn_world_system, track_view_direction_system};
pub use systems::pursuer_update_system;
pub use vector_math::{flatten, normalize_or_zero};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use pursuit::prelude::*;
    //! ```

    pub use crate::animation::{AnimationChannel, AnimationDirective};
    pub use crate::components::{CharacterMotion, Player, PursuerController};
    pub use crate::pursuer::{BehaviorState, Pursuer};
    pub use crate::PursuitPlugin;
}
