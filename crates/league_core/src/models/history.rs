use serde::{Deserialize, Serialize};

/// Archived result of one completed season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub year: u16,
    /// Empty when no champion was determined
    pub champion_team_id: String,
    /// Empty when the league had no players
    pub mvp_player_id: String,
    /// Worst record first
    pub draft_order: Vec<String>,
}

/// The user team's result for one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerSeason {
    pub year: u16,
    pub wins: u16,
    pub losses: u16,
    pub made_playoffs: bool,
    pub won_championship: bool,
}

/// Lifetime statistics of the human-controlled franchise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CareerStats {
    pub seasons_completed: u32,
    pub total_wins: u32,
    pub total_losses: u32,
    pub playoff_appearances: u32,
    pub championships: u32,
    #[serde(default)]
    pub history: Vec<CareerSeason>,
}

impl CareerStats {
    pub fn win_percentage(&self) -> f64 {
        let games = self.total_wins + self.total_losses;
        if games == 0 {
            return 0.0;
        }
        self.total_wins as f64 / games as f64
    }
}
