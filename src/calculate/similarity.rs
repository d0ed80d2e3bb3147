//! Player-to-player statistical similarity.

use crate::models::StatLine;

/// Tolerance for match and tournament counts, as a fraction of their mean.
const COUNT_TOLERANCE: f64 = 0.4;

/// Win-rate gap (percentage points) at which the sub-score reaches zero.
const WIN_RATE_TOLERANCE: f64 = 30.0;

/// Tolerance for activity streaks, as a fraction of their mean.
const ACTIVITY_TOLERANCE: f64 = 0.5;

/// Similarity between two optional profiles, 0 when either is missing.
pub fn similarity(a: Option<&dyn StatLine>, b: Option<&dyn StatLine>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => profile_similarity(a, b),
        _ => 0.0,
    }
}

/// Similarity (0-100) between two stat lines.
///
/// Four sub-scores, each worth a quarter of the total:
/// - matches played, skipped when both players have none
/// - win rate, always computed
/// - tournaments entered, skipped when both players have none
/// - activity streak, a full match when both streaks are zero
///
/// Skipped sub-scores are left out of the average rather than counted as
/// zero, so the result stays on a 0-100 scale.
pub fn profile_similarity(a: &dyn StatLine, b: &dyn StatLine) -> f64 {
    let mut ratios: Vec<f64> = Vec::with_capacity(4);

    if let Some(r) = relative_closeness(
        a.matches_played() as f64,
        b.matches_played() as f64,
        COUNT_TOLERANCE,
    ) {
        ratios.push(r);
    }

    let win_rate_gap = (a.win_rate() - b.win_rate()).abs();
    ratios.push((1.0 - win_rate_gap / WIN_RATE_TOLERANCE).max(0.0));

    if let Some(r) = relative_closeness(
        a.total_tournaments() as f64,
        b.total_tournaments() as f64,
        COUNT_TOLERANCE,
    ) {
        ratios.push(r);
    }

    // Streaks are non-negative, so a zero mean means both are zero.
    let activity = relative_closeness(a.active_streak(), b.active_streak(), ACTIVITY_TOLERANCE)
        .unwrap_or(1.0);
    ratios.push(activity);

    ratios.iter().sum::<f64>() / ratios.len() as f64 * 100.0
}

/// `1 - |x - y| / (mean * tolerance)` floored at zero, or `None` when the
/// mean is zero.
fn relative_closeness(x: f64, y: f64, tolerance: f64) -> Option<f64> {
    let mean = (x + y) / 2.0;
    if mean == 0.0 {
        return None;
    }
    Some((1.0 - (x - y).abs() / (mean * tolerance)).max(0.0))
}
