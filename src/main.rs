use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use pursuit::spawn_world::{camera_follow_system, spawn_world_system, track_view_direction_system};
use pursuit::{flashlight_sync_system, init_logging, PursuitPlugin};

/// A third-person pursuit demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    App::new()
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_plugins(PursuitPlugin)
        .add_systems(Startup, spawn_world_system)
        .add_systems(
            Update,
            (
                track_view_direction_system,
                camera_follow_system,
                flashlight_sync_system,
            ),
        )
        .run();
}
