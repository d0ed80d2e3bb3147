//! Geographic relevance between a player and a tournament.

/// Score for a tournament in the player's own city.
pub const SAME_CITY: f64 = 100.0;

/// Score for a tournament in any other known city.
pub const OTHER_CITY: f64 = 50.0;

/// Proximity score: 0 when either city is empty or blank, 100 for the same
/// city (case-insensitive, surrounding whitespace ignored), otherwise 50.
///
/// The venue is accepted so that venue-level distance can be added later;
/// it does not affect the score today.
pub fn proximity(player_city: &str, tournament_city: &str, _tournament_venue: &str) -> f64 {
    let player_city = player_city.trim();
    let tournament_city = tournament_city.trim();
    if player_city.is_empty() || tournament_city.is_empty() {
        return 0.0;
    }

    if player_city.to_lowercase() == tournament_city.to_lowercase() {
        SAME_CITY
    } else {
        OTHER_CITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_city() {
        assert_eq!(proximity("Pune", "Pune", "Balewadi"), 100.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(proximity("Mumbai", "MUMBAI", "x"), 100.0);
        assert_eq!(proximity("bengaluru", "Bengaluru", "x"), 100.0);
    }

    #[test]
    fn test_other_city() {
        assert_eq!(proximity("Pune", "Mumbai", "x"), 50.0);
    }

    #[test]
    fn test_missing_city() {
        assert_eq!(proximity("", "Mumbai", "x"), 0.0);
        assert_eq!(proximity("Mumbai", "", "x"), 0.0);
        assert_eq!(proximity("", "", ""), 0.0);
        assert_eq!(proximity("   ", "Pune", "x"), 0.0);
        assert_eq!(proximity("Pune", "\t", "x"), 0.0);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(proximity(" Pune ", "pune", "x"), 100.0);
    }

    #[test]
    fn test_venue_ignored() {
        assert_eq!(
            proximity("Pune", "Pune", "Balewadi"),
            proximity("Pune", "Pune", "Deccan Gymkhana")
        );
    }
}
