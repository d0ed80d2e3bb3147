//! Familiarity with a tournament's play format.

use crate::models::{HistoryEntry, TournamentCandidate};

/// Score used when the tournament declares no format.
pub const NEUTRAL_FAMILIARITY: f64 = 50.0;

/// Share (0-100) of the player's past tournaments played in this
/// tournament's format.
///
/// The denominator is the full history length, so entries in other formats,
/// or with no format at all, dilute the score.
pub fn format_familiarity(tournament: &TournamentCandidate, history: &[HistoryEntry]) -> f64 {
    let Some(format) = tournament.declared_format() else {
        return NEUTRAL_FAMILIARITY;
    };

    let matching = history
        .iter()
        .filter(|h| h.format.as_deref() == Some(format))
        .count();

    matching as f64 / history.len().max(1) as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knockout() -> TournamentCandidate {
        TournamentCandidate::new("Pune", 4).with_format("knockout")
    }

    #[test]
    fn test_no_format_is_neutral() {
        let t = TournamentCandidate::new("Pune", 4);
        assert_eq!(format_familiarity(&t, &[HistoryEntry::new("knockout")]), 50.0);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_familiarity(&knockout(), &[]), 0.0);
    }

    #[test]
    fn test_full_match() {
        let history = vec![HistoryEntry::new("knockout")];
        assert_eq!(format_familiarity(&knockout(), &history), 100.0);
    }

    #[test]
    fn test_partial_match() {
        let history = vec![
            HistoryEntry::new("knockout"),
            HistoryEntry::new("league"),
            HistoryEntry::new("knockout"),
            HistoryEntry::new("round-robin"),
        ];
        assert_eq!(format_familiarity(&knockout(), &history), 50.0);
    }

    #[test]
    fn test_unformatted_history_dilutes() {
        let history = vec![
            HistoryEntry::new("knockout"),
            HistoryEntry::default(),
            HistoryEntry::default(),
            HistoryEntry::default(),
        ];
        assert_eq!(format_familiarity(&knockout(), &history), 25.0);
    }

    #[test]
    fn test_format_match_is_exact() {
        let history = vec![HistoryEntry::new("Knockout")];
        assert_eq!(format_familiarity(&knockout(), &history), 0.0);
    }
}
