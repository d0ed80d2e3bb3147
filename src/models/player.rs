//! Player statistics models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates;

/// Read-only access to the statistics every scorer compares.
///
/// Implemented by both the player being recommended for and the
/// participants already entered in a tournament, so the similarity
/// scorer can compare either against the other.
pub trait StatLine {
    fn matches_played(&self) -> u32;

    fn wins(&self) -> u32;

    fn total_tournaments(&self) -> u32;

    /// Months of consecutive engagement.
    fn active_streak(&self) -> f64;

    /// Win rate as a percentage (0.0 to 100.0). Zero when no matches played.
    fn win_rate(&self) -> f64 {
        let played = self.matches_played();
        if played == 0 {
            0.0
        } else {
            self.wins() as f64 / played as f64 * 100.0
        }
    }
}

/// Aggregate statistics for the player receiving recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub id: Option<String>,

    pub name: Option<String>,

    /// Home city, used for proximity scoring
    pub city: String,

    #[serde(alias = "matchesPlayed")]
    pub matches_played: u32,

    /// Wins (never more than `matches_played`)
    pub wins: u32,

    #[serde(alias = "totalTournaments")]
    pub total_tournaments: u32,

    /// Months of consecutive engagement
    #[serde(alias = "activeStreak")]
    pub active_streak: f64,
}

impl PlayerProfile {
    /// Create a profile with the fields the scorers read.
    pub fn new(
        city: impl Into<String>,
        matches_played: u32,
        wins: u32,
        total_tournaments: u32,
        active_streak: f64,
    ) -> Self {
        Self {
            id: None,
            name: None,
            city: city.into(),
            matches_played,
            wins,
            total_tournaments,
            active_streak,
        }
    }

    /// Builder method to set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl StatLine for PlayerProfile {
    fn matches_played(&self) -> u32 {
        self.matches_played
    }

    fn wins(&self) -> u32 {
        self.wins
    }

    fn total_tournaments(&self) -> u32 {
        self.total_tournaments
    }

    fn active_streak(&self) -> f64 {
        self.active_streak
    }
}

/// Statistics for a player already entered in a tournament.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipantStats {
    pub id: Option<String>,

    pub name: Option<String>,

    #[serde(alias = "matchesPlayed")]
    pub matches_played: u32,

    pub wins: u32,

    #[serde(alias = "totalTournaments")]
    pub total_tournaments: u32,

    #[serde(alias = "activeStreak")]
    pub active_streak: f64,

    /// Date of the participant's first tournament; drives experience banding
    #[serde(
        alias = "firstTournamentDate",
        deserialize_with = "dates::lenient_date"
    )]
    pub first_tournament_date: Option<NaiveDate>,
}

impl ParticipantStats {
    pub fn new(matches_played: u32, wins: u32, total_tournaments: u32, active_streak: f64) -> Self {
        Self {
            matches_played,
            wins,
            total_tournaments,
            active_streak,
            ..Default::default()
        }
    }

    /// Builder method to set the first tournament date.
    pub fn with_first_tournament_date(mut self, date: NaiveDate) -> Self {
        self.first_tournament_date = Some(date);
        self
    }
}

impl StatLine for ParticipantStats {
    fn matches_played(&self) -> u32 {
        self.matches_played
    }

    fn wins(&self) -> u32 {
        self.wins
    }

    fn total_tournaments(&self) -> u32 {
        self.total_tournaments
    }

    fn active_streak(&self) -> f64 {
        self.active_streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rate_percentage() {
        let player = PlayerProfile::new("Pune", 10, 5, 2, 2.0);
        assert!((player.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_win_rate_no_matches() {
        let player = PlayerProfile::new("Pune", 0, 0, 0, 0.0);
        assert_eq!(player.win_rate(), 0.0);
    }

    #[test]
    fn test_player_accepts_camel_case() {
        let json = r#"{"city":"Mumbai","matchesPlayed":12,"wins":7,"totalTournaments":3,"activeStreak":4}"#;
        let player: PlayerProfile = serde_json::from_str(json).unwrap();

        assert_eq!(player.city, "Mumbai");
        assert_eq!(player.matches_played, 12);
        assert_eq!(player.total_tournaments, 3);
        assert_eq!(player.active_streak, 4.0);
    }

    #[test]
    fn test_player_accepts_snake_case() {
        let json = r#"{"city":"Mumbai","matches_played":12,"wins":7,"total_tournaments":3,"active_streak":4.5}"#;
        let player: PlayerProfile = serde_json::from_str(json).unwrap();

        assert_eq!(player.matches_played, 12);
        assert_eq!(player.active_streak, 4.5);
    }

    #[test]
    fn test_participant_missing_fields_default() {
        let participant: ParticipantStats = serde_json::from_str("{}").unwrap();

        assert_eq!(participant.matches_played, 0);
        assert!(participant.first_tournament_date.is_none());
    }

    #[test]
    fn test_participant_first_tournament_date() {
        let json = r#"{"matches_played":4,"first_tournament_date":"2025-01-15"}"#;
        let participant: ParticipantStats = serde_json::from_str(json).unwrap();

        assert_eq!(
            participant.first_tournament_date,
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
    }

    #[test]
    fn test_participant_serializes_snake_case() {
        let participant = ParticipantStats::new(3, 1, 1, 1.0);
        let json = serde_json::to_value(&participant).unwrap();

        assert!(json.get("matches_played").is_some());
        assert!(json.get("matchesPlayed").is_none());
    }
}
