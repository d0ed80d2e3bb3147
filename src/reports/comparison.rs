//! Player-versus-field comparison.

use crate::calculate::{calculate_mean, round_to_tenth};
use crate::models::{ComparisonReport, PlayerProfile, StatLine, StatSummary, TournamentCandidate};

/// Compare a player with the average participant already entered.
///
/// Returns `None` when nobody has entered yet.
pub fn compare(player: &PlayerProfile, tournament: &TournamentCandidate) -> Option<ComparisonReport> {
    let participants = &tournament.participants;

    let avg_matches = calculate_mean(participants.iter().map(|p| p.matches_played as f64))?;
    let avg_wins = calculate_mean(participants.iter().map(|p| p.wins as f64))?;
    let avg_win_rate = calculate_mean(participants.iter().map(|p| p.win_rate()))?;
    let avg_tournaments = calculate_mean(participants.iter().map(|p| p.total_tournaments as f64))?;

    let player_win_rate = player.win_rate();

    let above_avg_matches = player.matches_played as f64 > avg_matches;
    let above_avg_wins = player.wins as f64 > avg_wins;
    let above_avg_win_rate = player_win_rate > avg_win_rate;
    let above_avg_tournaments = player.total_tournaments as f64 > avg_tournaments;

    // Majority of matches, win rate and tournaments; wins is reported but not voted
    let votes = [above_avg_matches, above_avg_win_rate, above_avg_tournaments]
        .iter()
        .filter(|&&above| above)
        .count();

    Some(ComparisonReport {
        player: StatSummary {
            matches: player.matches_played as f64,
            wins: player.wins as f64,
            win_rate: round_to_tenth(player_win_rate),
            tournaments: player.total_tournaments as f64,
        },
        average: StatSummary {
            matches: round_to_tenth(avg_matches),
            wins: round_to_tenth(avg_wins),
            win_rate: round_to_tenth(avg_win_rate),
            tournaments: round_to_tenth(avg_tournaments),
        },
        participant_count: participants.len() as u32,
        above_avg_matches,
        above_avg_wins,
        above_avg_win_rate,
        above_avg_tournaments,
        overall_above_avg: votes >= 2,
    })
}
