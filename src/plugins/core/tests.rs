use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn keeps_pre_inserted_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { deflect_score: 7, ..Tunables::default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().deflect_score, 7);
}
