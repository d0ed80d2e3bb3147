//! Scoring engine.
//!
//! Pure scorers that each rate one aspect of a tournament's fit for a
//! player:
//! - Statistical similarity between two players
//! - Proximity of the tournament's city
//! - Familiarity with the tournament's format
//! - Compatibility of the tournament's cadence with the player's activity

mod format;
mod frequency;
mod proximity;
mod similarity;

pub use format::*;
pub use frequency::*;
pub use proximity::*;
pub use similarity::*;

/// Arithmetic mean, or `None` for an empty input.
pub fn calculate_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Round to one decimal place for display.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a non-negative score to a whole number.
pub fn round_score(value: f64) -> u32 {
    value.max(0.0).round() as u32
}
