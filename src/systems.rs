//! Systems bridging the pursuer controller with the ECS world.
use bevy::prelude::*;

use crate::animation::AnimationChannel;
use crate::components::{CharacterMotion, PursuerController};
use crate::plugin::{PursuitError, PursuitErrorContext};

/// Ticks every pursuer's behaviour state machine.
///
/// Reads the pursuer's and its target's current translations, advances the
/// state machine, and hands the resulting walk/look vectors to the motion
/// sink and any clip change to the animation channel. A target whose
/// position can no longer be resolved (despawned mid-frame) raises a
/// [`PursuitError`] event and leaves that pursuer untouched for the tick.
pub fn pursuer_update_system(
    time: Res<Time>,
    mut commands: Commands,
    mut pursuers: Query<(
        &Transform,
        &mut PursuerController,
        &mut CharacterMotion,
        &mut AnimationChannel,
    )>,
    positions: Query<&Transform>,
) {
    let dt = time.delta_secs();
    for (transform, mut controller, mut motion, mut channel) in &mut pursuers {
        let target = controller.target;
        let Ok(target_transform) = positions.get(target) else {
            commands.trigger(PursuitError::new(
                PursuitErrorContext::TargetLookup,
                format!("no position for target {target:?}"),
            ));
            continue;
        };

        let directive = controller.brain.tick(
            dt,
            transform.translation,
            target_transform.translation,
            channel.current_clip(),
        );
        motion.walk = controller.brain.walk_direction;
        motion.look = controller.brain.look_direction;
        if let Some(directive) = directive {
            channel.play(directive);
        }
    }
}
