//! Score / rules: the single writer of the player's score.

use bevy::prelude::*;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub total: u64,
}

/// Request to give the player points for a skillful action.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AwardScore {
    pub amount: u32,
    pub source: Entity,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Score>()
        .add_message::<AwardScore>()
        .add_systems(PostUpdate, apply_score_awards);
}

pub fn apply_score_awards(mut reader: MessageReader<AwardScore>, mut score: ResMut<Score>) {
    for award in reader.read() {
        score.total += u64::from(award.amount);
        info!("+{} (from {:?}), score {}", award.amount, award.source, score.total);
    }
}
