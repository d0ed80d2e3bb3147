//! Fit between a player's activity and a tournament's cadence.

use crate::models::{StatLine, TournamentCandidate};

/// Points lost per unit of activity mismatch.
const MISMATCH_PENALTY: f64 = 10.0;

/// `max(0, 100 - |activity - expected| * 10)`, where `expected` comes from
/// the tournament's cadence.
pub fn frequency_compatibility(player: &dyn StatLine, tournament: &TournamentCandidate) -> f64 {
    let expected = tournament.frequency.expected_activity();
    let mismatch = (player.active_streak() - expected).abs();
    (100.0 - mismatch * MISMATCH_PENALTY).max(0.0)
}
