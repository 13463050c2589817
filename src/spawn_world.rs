//! Spawns the demo world: town scene, lights, player, and pursuer.
//!
//! Everything here needs the render stack; headless builds and tests get
//! their entities from the test code instead.
//!
//! The models are not shipped with the repository. Place glTF exports at
//! `assets/models/town.glb` (the environment, any scene works) and
//! `assets/models/ogre.glb` (the pursuer, which needs animation clips
//! named `stand`, `Walk`, and `push`); the jMonkeyEngine test-data town
//! and Oto models convert cleanly. Missing files log an asset error and
//! leave the scene empty rather than aborting.
use bevy::gltf::GltfAssetLabel;
use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;

use crate::animation::AnimationChannel;
use crate::components::{CharacterMotion, Flashlight, MainCamera, Player, PursuerController};
use crate::constants::{
    FLASHLIGHT_INNER_ANGLE, FLASHLIGHT_OUTER_ANGLE, FLASHLIGHT_RANGE, PLAYER_SPAWN, PURSUER_SPAWN,
    SCENE_SCALE, SHADOW_MAP_SIZE,
};
use crate::player::ViewDirection;

/// Spawns the scene, lighting, player, and pursuer into the Bevy ECS.
pub fn spawn_world_system(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0,
        affects_lightmapped_meshes: false,
    });
    commands.insert_resource(DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    // Town scene, shadow-casting and -receiving.
    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/town.glb"))),
        Transform::from_scale(Vec3::splat(SCENE_SCALE)),
    ));

    // Sun.
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::default().looking_to(Vec3::new(2.8, -2.8, -2.8).normalize(), Vec3::Y),
    ));

    // Player character; positioning is physics-style, rotation comes from
    // the camera.
    let player = commands
        .spawn((
            Player,
            CharacterMotion::new(PLAYER_SPAWN.y),
            Transform::from_translation(PLAYER_SPAWN),
            Visibility::default(),
        ))
        .id();

    // Flashlight spot light, hidden until toggled on.
    commands.spawn((
        Flashlight::default(),
        SpotLight {
            range: FLASHLIGHT_RANGE,
            inner_angle: FLASHLIGHT_INNER_ANGLE,
            outer_angle: FLASHLIGHT_OUTER_ANGLE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        Visibility::Hidden,
    ));

    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Transform::from_translation(PLAYER_SPAWN),
    ));

    // The pursuer, targeting the player from across the town.
    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/ogre.glb"))),
        Transform::from_translation(PURSUER_SPAWN),
        CharacterMotion::new(PURSUER_SPAWN.y),
        AnimationChannel::default(),
        PursuerController::new(player),
    ));
}

/// Refreshes the shared view direction from the camera transform.
pub fn track_view_direction_system(
    mut view: ResMut<ViewDirection>,
    cameras: Query<&Transform, With<MainCamera>>,
) {
    if let Ok(camera) = cameras.single() {
        view.0 = *camera.forward();
    }
}

/// Pins the camera to the player's position each frame.
pub fn camera_follow_system(
    players: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    for mut camera in &mut cameras {
        camera.translation = player.translation;
    }
}
