//! Ninja Deflect: a top-down arena where enemy ninjas throw shuriken and the
//! player blocks them back.
//!
//! Integration tests in `tests/` are compiled as separate crates; this
//! library is the public surface they import.

pub mod common;
pub mod game;
pub mod plugins;
