//! Audio cues.
//!
//! Gameplay code only ever *requests* a cue; nothing waits on playback. There
//! are no sound assets in this project, so the consumer records what would
//! have played and logs it.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A blocked or deflected projectile.
    Deflect,
    /// Any collected pickup.
    Pickup,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Deflect => "deflect",
            Cue::Pickup => "pickup",
        }
    }
}

/// Fire-and-forget cue request.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayCue(pub Cue);

/// How many times each cue was played this session.
#[derive(Resource, Debug, Default)]
pub struct CueStats {
    played: HashMap<Cue, u32>,
}

impl CueStats {
    pub fn count(&self, cue: Cue) -> u32 {
        self.played.get(&cue).copied().unwrap_or(0)
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<CueStats>()
        .add_message::<PlayCue>()
        .add_systems(PostUpdate, play_cues);
}

pub fn play_cues(mut reader: MessageReader<PlayCue>, mut stats: ResMut<CueStats>) {
    for PlayCue(cue) in reader.read() {
        debug!("cue: {}", cue.name());
        *stats.played.entry(*cue).or_default() += 1;
    }
}

#[cfg(test)]
mod tests;
