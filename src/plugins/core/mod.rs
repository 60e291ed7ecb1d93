//! Core plugin: tunables and global settings.
//!
//! `Tunables` is only initialised when absent, so a caller (or a test) can
//! insert tuned values before the plugins are registered.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.08)));
}

#[cfg(test)]
mod tests;
