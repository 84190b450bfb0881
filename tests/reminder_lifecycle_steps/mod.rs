//! Step definitions for reminder lifecycle BDD scenarios.

pub mod world;

mod when;
