//! Tournament candidate model.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::{dates, ParticipantStats};

/// How often a tournament series runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    /// Parse a cadence label. Unrecognized labels fall back to monthly.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "weekly" => Frequency::Weekly,
            "biweekly" => Frequency::Biweekly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "annual" => Frequency::Annual,
            _ => Frequency::Monthly,
        }
    }

    /// Activity level a regular entrant of this cadence would show.
    pub fn expected_activity(&self) -> f64 {
        match self {
            Frequency::Weekly => 12.0,
            Frequency::Biweekly => 8.0,
            Frequency::Monthly => 4.0,
            Frequency::Quarterly => 2.0,
            Frequency::Annual => 1.0,
        }
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(Frequency::parse).unwrap_or_default())
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Biweekly => write!(f, "biweekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Quarterly => write!(f, "quarterly"),
            Frequency::Annual => write!(f, "annual"),
        }
    }
}

/// A tournament being evaluated for recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentCandidate {
    pub id: Option<String>,

    pub name: Option<String>,

    /// Host city
    pub city: String,

    pub venue: String,

    /// Play format (e.g. "knockout", "league")
    pub format: Option<String>,

    /// Cadence of the series
    pub frequency: Frequency,

    #[serde(alias = "entryFee")]
    pub entry_fee: f64,

    #[serde(alias = "availableSlots")]
    pub available_slots: u32,

    /// Registered tournaments are never recommended
    #[serde(alias = "isPlayerRegistered")]
    pub is_player_registered: bool,

    #[serde(alias = "startDate", deserialize_with = "dates::lenient_date")]
    pub start_date: Option<NaiveDate>,

    /// Players already entered
    pub participants: Vec<ParticipantStats>,
}

impl TournamentCandidate {
    /// Create a candidate in the given city with open slots and no entrants.
    pub fn new(city: impl Into<String>, available_slots: u32) -> Self {
        Self {
            city: city.into(),
            available_slots,
            ..Default::default()
        }
    }

    /// Builder method to set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set the format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Builder method to set the cadence.
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Builder method to set the entry fee.
    pub fn with_entry_fee(mut self, entry_fee: f64) -> Self {
        self.entry_fee = entry_fee;
        self
    }

    /// Builder method to set the start date.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Builder method to set the participant list.
    pub fn with_participants(mut self, participants: Vec<ParticipantStats>) -> Self {
        self.participants = participants;
        self
    }

    /// Builder method to mark the player as already registered.
    pub fn registered(mut self) -> Self {
        self.is_player_registered = true;
        self
    }

    /// Declared format, if any non-empty one was given.
    pub fn declared_format(&self) -> Option<&str> {
        self.format.as_deref().filter(|f| !f.is_empty())
    }
}

/// One of the player's past tournaments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub format: Option<String>,
}

impl HistoryEntry {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: Some(format.into()),
        }
    }
}

/// Pre-filters applied before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentFilters {
    /// Exact city match
    pub city: Option<String>,

    /// Exact format match
    pub format: Option<String>,

    #[serde(alias = "maxEntryFee")]
    pub max_entry_fee: Option<f64>,

    /// Only tournaments with open slots
    #[serde(alias = "availableOnly")]
    pub available_only: bool,

    /// Only tournaments starting within the next seven days
    #[serde(alias = "thisWeekOnly")]
    pub this_week_only: bool,
}
