//! Descriptive tournament reports.

use serde::Serialize;

/// Experience band of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceBand {
    /// Under three months since first tournament, or unknown
    New,
    /// Three to twelve months
    Active,
    /// Twelve months or more
    Veteran,
}

impl ExperienceBand {
    /// Band for a participant with the given months of experience.
    pub fn from_months(months: Option<f64>) -> Self {
        match months {
            None => ExperienceBand::New,
            Some(m) if m < 3.0 => ExperienceBand::New,
            Some(m) if m < 12.0 => ExperienceBand::Active,
            Some(_) => ExperienceBand::Veteran,
        }
    }
}

impl std::fmt::Display for ExperienceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceBand::New => write!(f, "new"),
            ExperienceBand::Active => write!(f, "active"),
            ExperienceBand::Veteran => write!(f, "veteran"),
        }
    }
}

/// Experience mix of a tournament's participants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiversityReport {
    pub new_players: u32,
    pub active_players: u32,
    pub veteran_players: u32,

    /// 0-100; 100 for an even three-way split
    pub diversity_score: u32,

    pub description: String,
}

/// Match, win and tournament figures for one side of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatSummary {
    pub matches: f64,
    pub wins: f64,
    /// Percentage
    pub win_rate: f64,
    pub tournaments: f64,
}

/// How a player measures up against a tournament's field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub player: StatSummary,

    /// Per-participant averages, rounded to one decimal
    pub average: StatSummary,

    pub participant_count: u32,

    pub above_avg_matches: bool,
    pub above_avg_wins: bool,
    pub above_avg_win_rate: bool,
    pub above_avg_tournaments: bool,

    /// Above average on at least two of matches, win rate and tournaments
    pub overall_above_avg: bool,
}
