//! # Rally Recommender
//!
//! Tournament recommendation and comparison engine for badminton players.
//!
//! ## Architecture
//!
//! - **models**: Player, tournament and report data structures
//! - **calculate**: Individual scorers (similarity, proximity, format, cadence)
//! - **recommend**: Weighted ranking of candidate tournaments
//! - **reports**: Descriptive statistics about a tournament's field
//! - **snapshot**: Loading exported inputs from JSON and JSONL files
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod recommend;
pub mod reports;
pub mod snapshot;

pub use models::*;
pub use recommend::{get_tournaments_for_player, recommend, Recommender};
pub use reports::{compare, diversity};
