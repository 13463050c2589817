//! Flashlight toggle and, with rendering enabled, the spot light that
//! follows the player.
use bevy::prelude::*;
use log::debug;

use crate::components::Flashlight;
use crate::player::MovementInput;

#[cfg(feature = "render")]
use crate::components::Player;
#[cfg(feature = "render")]
use crate::player::ViewDirection;

/// Flips the flashlight when the toggle edge fires.
///
/// The toggle reacts to key release, matching the original demo, so
/// holding the key does not strobe the light.
pub fn flashlight_toggle_system(input: Res<MovementInput>, mut lights: Query<&mut Flashlight>) {
    if !input.flashlight {
        return;
    }
    for mut light in &mut lights {
        light.on = !light.on;
        debug!("flashlight switched {}", if light.on { "on" } else { "off" });
    }
}

/// Keeps the spot light glued to the player and pointed along the view.
///
/// The light entity is separate from the player so its cone can be
/// oriented independently of the character mesh; visibility tracks the
/// toggle state.
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub fn flashlight_sync_system(
    view: Res<ViewDirection>,
    players: Query<&Transform, (With<Player>, Without<Flashlight>)>,
    mut lights: Query<(&Flashlight, &mut Transform, &mut Visibility)>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    for (flashlight, mut transform, mut visibility) in &mut lights {
        transform.translation = player.translation;
        if view.0 != Vec3::ZERO {
            transform.look_to(view.0, Vec3::Y);
        }
        *visibility = if flashlight.on {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
