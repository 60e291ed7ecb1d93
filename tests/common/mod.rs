//! Integration test harness.
//!
//! Apps stay headless: `MinimalPlugins` for the ECS runtime, then
//! `ninja_deflect::game::configure_headless` for the gameplay plugins.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    ninja_deflect::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update()` directly.
    app.finish();
    app.cleanup();
    app
}

/// Run a system once and apply its commands.
pub fn run_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}
