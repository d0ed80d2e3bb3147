//! Tournament recommendations.
//!
//! Combines the scorers in [`crate::calculate`] into one weighted score per
//! tournament and ranks the candidates for a player.

mod filters;

pub use filters::*;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::calculate::{
    calculate_mean, format_familiarity, frequency_compatibility, profile_similarity, proximity,
    round_score,
};
use crate::config::ScoringWeights;
use crate::models::{
    HistoryEntry, PlayerProfile, ScoredTournament, ScoringBreakdown, TournamentCandidate,
    TournamentFilters,
};

/// Participant similarity assumed for a tournament nobody has entered yet.
pub const NEUTRAL_PARTICIPANT_SIMILARITY: f64 = 50.0;

/// Availability score for a tournament with open slots.
const OPEN_SLOTS: f64 = 100.0;

/// Scores and ranks tournaments with a fixed set of weights.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank every tournament the player has not registered for.
    ///
    /// Returns an empty list when the player is missing. Ties keep their
    /// input order.
    pub fn recommend(
        &self,
        player: Option<&PlayerProfile>,
        tournaments: &[TournamentCandidate],
        history: &[HistoryEntry],
    ) -> Vec<ScoredTournament> {
        match player {
            Some(player) => self.rank(player, tournaments.iter(), history),
            None => Vec::new(),
        }
    }

    /// Apply `filters` relative to `today`, then rank what remains.
    pub fn recommend_filtered(
        &self,
        player: Option<&PlayerProfile>,
        tournaments: &[TournamentCandidate],
        filters: &TournamentFilters,
        history: &[HistoryEntry],
        today: NaiveDate,
    ) -> Vec<ScoredTournament> {
        let Some(player) = player else {
            return Vec::new();
        };

        self.rank(player, apply_filters(filters, tournaments, today), history)
    }

    /// Score a single tournament for the player.
    pub fn score(
        &self,
        player: &PlayerProfile,
        tournament: &TournamentCandidate,
        history: &[HistoryEntry],
    ) -> ScoredTournament {
        let w = &self.weights;

        let proximity_score = proximity(&player.city, &tournament.city, &tournament.venue);

        let participant_similarity = calculate_mean(
            tournament
                .participants
                .iter()
                .map(|p| profile_similarity(player, p)),
        )
        .unwrap_or(NEUTRAL_PARTICIPANT_SIMILARITY);

        let format_score = format_familiarity(tournament, history);
        let frequency_score = frequency_compatibility(player, tournament);
        let availability = if tournament.available_slots > 0 {
            OPEN_SLOTS
        } else {
            0.0
        };

        let weighted = [
            proximity_score * w.proximity,
            participant_similarity * w.participant_similarity,
            format_score * w.format_familiarity,
            frequency_score * w.frequency_compatibility,
            availability * w.availability,
        ];

        let scoring_breakdown = ScoringBreakdown {
            proximity: round_score(weighted[0]),
            participant_similarity: round_score(weighted[1]),
            format_familiarity: round_score(weighted[2]),
            frequency_compatibility: round_score(weighted[3]),
            availability: round_score(weighted[4]),
        };

        ScoredTournament {
            tournament: tournament.clone(),
            recommendation_score: round_score(weighted.iter().sum()),
            scoring_breakdown,
        }
    }

    fn rank<'a>(
        &self,
        player: &PlayerProfile,
        tournaments: impl Iterator<Item = &'a TournamentCandidate>,
        history: &[HistoryEntry],
    ) -> Vec<ScoredTournament> {
        let mut registered = 0usize;
        let mut scored: Vec<ScoredTournament> = tournaments
            .filter(|t| {
                if t.is_player_registered {
                    registered += 1;
                    false
                } else {
                    true
                }
            })
            .map(|t| self.score(player, t, history))
            .collect();

        scored.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));

        debug!(
            "Ranked {} tournaments ({} skipped as registered)",
            scored.len(),
            registered
        );

        scored
    }
}

/// Rank tournaments for a player with the default weights.
pub fn recommend(
    player: Option<&PlayerProfile>,
    tournaments: &[TournamentCandidate],
    history: &[HistoryEntry],
) -> Vec<ScoredTournament> {
    Recommender::default().recommend(player, tournaments, history)
}

/// Filter then rank tournaments for a player, using today's local date for
/// the "this week" window.
pub fn get_tournaments_for_player(
    player: Option<&PlayerProfile>,
    tournaments: &[TournamentCandidate],
    filters: &TournamentFilters,
    history: &[HistoryEntry],
) -> Vec<ScoredTournament> {
    get_tournaments_for_player_on(
        player,
        tournaments,
        filters,
        history,
        Local::now().date_naive(),
    )
}

/// [`get_tournaments_for_player`] with an explicit reference date.
pub fn get_tournaments_for_player_on(
    player: Option<&PlayerProfile>,
    tournaments: &[TournamentCandidate],
    filters: &TournamentFilters,
    history: &[HistoryEntry],
    today: NaiveDate,
) -> Vec<ScoredTournament> {
    Recommender::default().recommend_filtered(player, tournaments, filters, history, today)
}
