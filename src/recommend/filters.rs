//! Pre-filters applied before scoring.

use chrono::{Duration, NaiveDate};

use crate::models::{TournamentCandidate, TournamentFilters};

/// Length of the "this week" window, inclusive of both ends.
const WEEK_WINDOW_DAYS: i64 = 7;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Whether a tournament passes every filter that is set.
///
/// Empty strings count as unset. With `this_week_only`, tournaments with no
/// start date are excluded.
pub fn passes_filters(
    filters: &TournamentFilters,
    tournament: &TournamentCandidate,
    today: NaiveDate,
) -> bool {
    if let Some(city) = non_empty(&filters.city) {
        if tournament.city != city {
            return false;
        }
    }

    if let Some(format) = non_empty(&filters.format) {
        if tournament.format.as_deref() != Some(format) {
            return false;
        }
    }

    if let Some(max_fee) = filters.max_entry_fee {
        if tournament.entry_fee > max_fee {
            return false;
        }
    }

    if filters.available_only && tournament.available_slots == 0 {
        return false;
    }

    if filters.this_week_only {
        let week_end = today + Duration::days(WEEK_WINDOW_DAYS);
        match tournament.start_date {
            Some(start) if start >= today && start <= week_end => {}
            _ => return false,
        }
    }

    true
}

/// Tournaments that pass the filters, in input order.
pub fn apply_filters<'a>(
    filters: &'a TournamentFilters,
    tournaments: &'a [TournamentCandidate],
    today: NaiveDate,
) -> impl Iterator<Item = &'a TournamentCandidate> + 'a {
    tournaments
        .iter()
        .filter(move |t| passes_filters(filters, t, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn sample() -> Vec<TournamentCandidate> {
        vec![
            TournamentCandidate::new("Pune", 4)
                .with_name("a")
                .with_format("knockout")
                .with_entry_fee(300.0)
                .with_start_date(NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()),
            TournamentCandidate::new("Mumbai", 0)
                .with_name("b")
                .with_format("league")
                .with_entry_fee(800.0)
                .with_start_date(NaiveDate::from_ymd_opt(2026, 11, 20).unwrap()),
            TournamentCandidate::new("Pune", 2)
                .with_name("c")
                .with_format("league")
                .with_entry_fee(500.0),
        ]
    }

    fn names(filters: &TournamentFilters) -> Vec<String> {
        let tournaments = sample();
        apply_filters(filters, &tournaments, today())
            .filter_map(|t| t.name.clone())
            .collect()
    }

    #[test]
    fn test_no_filters() {
        assert_eq!(names(&TournamentFilters::default()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_city_filter() {
        let filters = TournamentFilters {
            city: Some("Pune".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&filters), vec!["a", "c"]);
    }

    #[test]
    fn test_city_filter_is_exact() {
        let filters = TournamentFilters {
            city: Some("pune".to_string()),
            ..Default::default()
        };
        assert!(names(&filters).is_empty());
    }

    #[test]
    fn test_empty_city_filter_ignored() {
        let filters = TournamentFilters {
            city: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(names(&filters).len(), 3);
    }

    #[test]
    fn test_format_filter() {
        let filters = TournamentFilters {
            format: Some("league".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&filters), vec!["b", "c"]);
    }

    #[test]
    fn test_max_entry_fee_inclusive() {
        let filters = TournamentFilters {
            max_entry_fee: Some(500.0),
            ..Default::default()
        };
        assert_eq!(names(&filters), vec!["a", "c"]);
    }

    #[test]
    fn test_available_only() {
        let filters = TournamentFilters {
            available_only: true,
            ..Default::default()
        };
        assert_eq!(names(&filters), vec!["a", "c"]);
    }

    #[test]
    fn test_this_week_only() {
        let filters = TournamentFilters {
            this_week_only: true,
            ..Default::default()
        };
        assert_eq!(names(&filters), vec!["a"]);
    }

    #[test]
    fn test_this_week_boundaries() {
        let filters = TournamentFilters {
            this_week_only: true,
            ..Default::default()
        };
        let on = |d: NaiveDate| TournamentCandidate::new("Pune", 1).with_start_date(d);

        assert!(passes_filters(&filters, &on(today()), today()));
        assert!(passes_filters(&filters, &on(today() + Duration::days(7)), today()));
        assert!(!passes_filters(&filters, &on(today() + Duration::days(8)), today()));
        assert!(!passes_filters(&filters, &on(today() - Duration::days(1)), today()));
    }

    #[test]
    fn test_combined_filters() {
        let filters = TournamentFilters {
            city: Some("Pune".to_string()),
            format: Some("league".to_string()),
            available_only: true,
            ..Default::default()
        };
        assert_eq!(names(&filters), vec!["c"]);
    }
}
