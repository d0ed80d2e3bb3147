//! Experience mix of a tournament's field.

use chrono::{Local, NaiveDate};

use crate::calculate::round_score;
use crate::models::{DiversityReport, ExperienceBand, ParticipantStats, TournamentCandidate};

const DAYS_PER_MONTH: f64 = 30.0;

/// Months between a participant's first tournament and `today`.
pub fn months_of_experience(participant: &ParticipantStats, today: NaiveDate) -> Option<f64> {
    participant
        .first_tournament_date
        .map(|first| (today - first).num_days() as f64 / DAYS_PER_MONTH)
}

/// Diversity report relative to today's local date.
pub fn diversity(tournament: &TournamentCandidate) -> DiversityReport {
    diversity_on(tournament, Local::now().date_naive())
}

/// Classify participants into experience bands and score how evenly they
/// split.
///
/// Each band counts for at most a third of the field, so a field drawn
/// entirely from one band scores 33 and an even three-way split scores 100.
pub fn diversity_on(tournament: &TournamentCandidate, today: NaiveDate) -> DiversityReport {
    let participants = &tournament.participants;
    if participants.is_empty() {
        return DiversityReport {
            description: describe(0, None),
            ..Default::default()
        };
    }

    let mut report = DiversityReport::default();
    for p in participants {
        match ExperienceBand::from_months(months_of_experience(p, today)) {
            ExperienceBand::New => report.new_players += 1,
            ExperienceBand::Active => report.active_players += 1,
            ExperienceBand::Veteran => report.veteran_players += 1,
        }
    }

    let total = participants.len() as f64;
    let third = total / 3.0;
    let capped: f64 = [
        report.new_players,
        report.active_players,
        report.veteran_players,
    ]
    .iter()
    .map(|&count| (count as f64).min(third))
    .sum();

    report.diversity_score = round_score(capped / total * 100.0);
    report.description = describe(report.diversity_score, Some(dominant_band(&report)));
    report
}

fn dominant_band(report: &DiversityReport) -> ExperienceBand {
    let mut dominant = (ExperienceBand::New, report.new_players);
    for candidate in [
        (ExperienceBand::Active, report.active_players),
        (ExperienceBand::Veteran, report.veteran_players),
    ] {
        if candidate.1 > dominant.1 {
            dominant = candidate;
        }
    }
    dominant.0
}

fn describe(score: u32, dominant: Option<ExperienceBand>) -> String {
    match dominant {
        None => "No participants yet".to_string(),
        Some(_) if score >= 80 => "Balanced mix of experience levels".to_string(),
        Some(_) if score >= 50 => "Moderate mix of experience levels".to_string(),
        Some(band) => format!("Mostly {} players", band),
    }
}
