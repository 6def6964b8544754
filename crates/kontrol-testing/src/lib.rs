//! Testing infrastructure for kontrol-archive integration tests.
//!
//! - `TestWorld`: isolated OpenClaw data root with agents, session logs and memory notes
//! - `fixtures`: session-log line builders
//! - `assertions`: checks against generated archive JSON

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
