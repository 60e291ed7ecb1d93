use super::*;
use crate::common::test_utils::{init_messages, run_system_once};

#[test]
fn play_cues_counts_each_request() {
    let mut world = World::new();
    world.init_resource::<CueStats>();
    init_messages::<PlayCue>(&mut world);

    world.write_message(PlayCue(Cue::Deflect));
    world.write_message(PlayCue(Cue::Deflect));
    world.write_message(PlayCue(Cue::Pickup));

    run_system_once(&mut world, play_cues);

    let stats = world.resource::<CueStats>();
    assert_eq!(stats.count(Cue::Deflect), 2);
    assert_eq!(stats.count(Cue::Pickup), 1);
}

#[test]
fn cue_names_are_stable() {
    assert_eq!(Cue::Deflect.name(), "deflect");
    assert_eq!(Cue::Pickup.name(), "pickup");
}
