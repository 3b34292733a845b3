use serde::{Deserialize, Serialize};

/// Top-level phase of a league year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeasonPhase {
    Preseason,
    #[default]
    RegularSeason,
    Playoffs,
    Offseason,
}

/// Sub-phase while `SeasonPhase::Offseason` is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OffseasonPhase {
    Resigning,
    FreeAgency,
    Draft,
    Training,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub current_year: u16,
    pub current_week: u8,
    pub current_phase: SeasonPhase,
    #[serde(default)]
    pub offseason_phase: Option<OffseasonPhase>,
}

impl Calendar {
    /// Week 1 of the regular season for `year`.
    pub fn season_start(year: u16) -> Self {
        Self {
            current_year: year,
            current_week: 1,
            current_phase: SeasonPhase::RegularSeason,
            offseason_phase: None,
        }
    }

    /// Saturates at `u16::MAX`; transitions refuse calendars that close to it.
    pub fn next_year(&self) -> u16 {
        self.current_year.saturating_add(1)
    }
}
