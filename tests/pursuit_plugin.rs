//! Headless plugin tests: the full update chain running under
//! `MinimalPlugins`, with entities standing in for the rendered scene.
use approx::assert_relative_eq;
use bevy::prelude::*;
use pursuit::pursuer::{CLIP_ATTACK, CLIP_WALK};
use pursuit::{
    AnimationChannel, BehaviorState, CharacterMotion, Player, PursuerController, PursuitPlugin,
};

fn demo_app() -> (App, Entity, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(PursuitPlugin);

    let player = app
        .world_mut()
        .spawn((
            Player,
            CharacterMotion::new(0.0),
            Transform::from_translation(Vec3::new(40.0, 0.0, 0.0)),
        ))
        .id();
    let ogre = app
        .world_mut()
        .spawn((
            Transform::from_translation(Vec3::ZERO),
            CharacterMotion::new(0.0),
            AnimationChannel::default(),
            PursuerController::new(player),
        ))
        .id();

    (app, player, ogre)
}

fn pursuer_state(app: &mut App, ogre: Entity) -> BehaviorState {
    app.world()
        .get::<PursuerController>(ogre)
        .map(|controller| controller.brain.state)
        .unwrap_or_default()
}

#[test]
fn pursuer_chases_a_midrange_player() {
    let (mut app, _player, ogre) = demo_app();
    app.update();

    assert_eq!(pursuer_state(&mut app, ogre), BehaviorState::Chasing);

    let Some(motion) = app.world().get::<CharacterMotion>(ogre) else {
        panic!("pursuer lost its motion sink");
    };
    assert_relative_eq!(motion.walk.x, 0.5, epsilon = 1e-6);
    assert_relative_eq!(motion.walk.y, 0.0);

    let Some(channel) = app.world().get::<AnimationChannel>(ogre) else {
        panic!("pursuer lost its animation channel");
    };
    assert_eq!(channel.current_clip(), Some(CLIP_WALK));
    assert_eq!(channel.transitions(), 1);
}

#[test]
fn clip_is_not_reissued_while_chasing() {
    let (mut app, _player, ogre) = demo_app();
    app.update();
    app.update();
    app.update();

    let Some(channel) = app.world().get::<AnimationChannel>(ogre) else {
        panic!("pursuer lost its animation channel");
    };
    assert_eq!(channel.transitions(), 1);
}

#[test]
fn closing_in_switches_to_attacking() {
    let (mut app, player, ogre) = demo_app();
    app.update();

    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
        transform.translation = Vec3::new(5.0, 0.0, 0.0);
    }
    app.update();

    assert_eq!(pursuer_state(&mut app, ogre), BehaviorState::Attacking);

    let Some(motion) = app.world().get::<CharacterMotion>(ogre) else {
        panic!("pursuer lost its motion sink");
    };
    assert_eq!(motion.walk, Vec3::ZERO);
    // The pursuer walked a little before the player teleported, so the raw
    // facing offset is only approximately the spawn separation.
    assert_relative_eq!(motion.look.x, 5.0, epsilon = 0.5);
    assert_relative_eq!(motion.look.y, 0.0);
    assert_relative_eq!(motion.look.z, 0.0);

    let Some(channel) = app.world().get::<AnimationChannel>(ogre) else {
        panic!("pursuer lost its animation channel");
    };
    assert_eq!(channel.current_clip(), Some(CLIP_ATTACK));
}

#[test]
fn fleeing_player_leaves_the_pursuer_idle() {
    let (mut app, player, ogre) = demo_app();
    app.update();

    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
        transform.translation = Vec3::new(500.0, 0.0, 0.0);
    }
    app.update();

    assert_eq!(pursuer_state(&mut app, ogre), BehaviorState::Idle);
}

#[test]
fn despawned_target_is_survivable() {
    let (mut app, player, ogre) = demo_app();
    app.update();
    assert_eq!(pursuer_state(&mut app, ogre), BehaviorState::Chasing);

    app.world_mut().despawn(player);
    // The lookup failure raises a logged event; the pursuer keeps its last
    // state and the app keeps running.
    app.update();
    app.update();
    assert_eq!(pursuer_state(&mut app, ogre), BehaviorState::Chasing);
}
