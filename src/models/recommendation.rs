//! Recommendation output models.

use serde::Serialize;

use super::TournamentCandidate;

/// Weighted contribution of each scorer to a recommendation score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoringBreakdown {
    pub proximity: u32,
    pub participant_similarity: u32,
    pub format_familiarity: u32,
    pub frequency_compatibility: u32,
    pub availability: u32,
}

impl ScoringBreakdown {
    /// Sum of the rounded contributions.
    pub fn total(&self) -> u32 {
        self.proximity
            + self.participant_similarity
            + self.format_familiarity
            + self.frequency_compatibility
            + self.availability
    }
}

/// A candidate tournament together with its derived score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTournament {
    /// Copy of the candidate as supplied
    #[serde(flatten)]
    pub tournament: TournamentCandidate,

    /// Weighted 0-100 composite
    pub recommendation_score: u32,

    pub scoring_breakdown: ScoringBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_total() {
        let breakdown = ScoringBreakdown {
            proximity: 30,
            participant_similarity: 15,
            format_familiarity: 20,
            frequency_compatibility: 8,
            availability: 10,
        };
        assert_eq!(breakdown.total(), 83);
    }

    #[test]
    fn test_scored_tournament_flattens_candidate() {
        let scored = ScoredTournament {
            tournament: TournamentCandidate::new("Pune", 4).with_name("Pune Open"),
            recommendation_score: 71,
            scoring_breakdown: ScoringBreakdown::default(),
        };

        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["name"], "Pune Open");
        assert_eq!(json["city"], "Pune");
        assert_eq!(json["recommendation_score"], 71);
        assert_eq!(json["scoring_breakdown"]["proximity"], 0);
    }
}
