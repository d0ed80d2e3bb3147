//! Core data models for the recommendation engine.

pub mod dates;
mod player;
mod recommendation;
mod report;
mod tournament;

pub use player::*;
pub use recommendation::*;
pub use report::*;
pub use tournament::*;
