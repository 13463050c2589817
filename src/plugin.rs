//! Bevy plugin wiring the pursuit systems into the schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::error;
use thiserror::Error;

use crate::flashlight::flashlight_toggle_system;
use crate::motion::apply_character_motion_system;
use crate::player::{player_movement_system, sample_input_system, MovementInput, ViewDirection};
use crate::systems::pursuer_update_system;

/// Context carried by [`PursuitError`] events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuitErrorContext {
    /// A pursuer's target entity could not be resolved to a position.
    TargetLookup,
}

/// Event raised when a behaviour system hits an error path.
///
/// Observers log these events using Bevy's Events V2 pipeline so
/// diagnostics remain visible even when `bevy_log` is disabled.
#[derive(Event, Debug, Clone, Error)]
#[error("{context:?}: {detail}")]
pub struct PursuitError {
    /// Where the failure occurred.
    pub context: PursuitErrorContext,
    /// Description of the underlying error.
    pub detail: String,
}

impl PursuitError {
    /// Convenience constructor used by systems to emit error events.
    pub fn new(context: PursuitErrorContext, detail: impl Into<String>) -> Self {
        Self {
            context,
            detail: detail.into(),
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_pursuit_error(event: On<PursuitError>) {
    let PursuitError { context, detail } = event.event();
    error!("pursuit error during {context:?}: {detail}");
}

/// Bevy plugin installing the demo's input, behaviour, and motion systems.
///
/// Runs headless under `MinimalPlugins`; the keyboard resource is
/// initialised here so tests can drive it without the input plugin.
#[derive(Default)]
pub struct PursuitPlugin;

impl Plugin for PursuitPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_pursuit_error);

        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<MovementInput>();
        app.init_resource::<ViewDirection>();

        app.add_systems(
            Update,
            (
                sample_input_system,
                player_movement_system,
                flashlight_toggle_system,
                pursuer_update_system,
                apply_character_motion_system,
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn plugin_initialises_resources() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(PursuitPlugin);
        assert!(app.world().contains_resource::<MovementInput>());
        assert!(app.world().contains_resource::<ViewDirection>());
        assert!(app.world().contains_resource::<ButtonInput<KeyCode>>());
        app.update();
    }
}
