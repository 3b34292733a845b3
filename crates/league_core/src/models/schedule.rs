use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub week: u8,
    pub home_team_id: String,
    pub away_team_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub year: u16,
    pub regular_season: Vec<Game>,
}

impl Schedule {
    /// Every team id that appears in at least one game.
    pub fn teams_covered(&self) -> BTreeSet<&str> {
        self.regular_season
            .iter()
            .flat_map(|g| [g.home_team_id.as_str(), g.away_team_id.as_str()])
            .collect()
    }

    pub fn games_for<'a>(&'a self, team_id: &'a str) -> impl Iterator<Item = &'a Game> + 'a {
        self.regular_season
            .iter()
            .filter(move |g| g.home_team_id == team_id || g.away_team_id == team_id)
    }

    pub fn weeks(&self) -> u8 {
        self.regular_season.iter().map(|g| g.week).max().unwrap_or(0)
    }
}

/// One division's teams ordered best to worst by last season's record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionStanding {
    pub conference: String,
    pub division: String,
    pub team_ids: Vec<String>,
}

/// Previous-year standings handed to the schedule generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PreviousStandings {
    pub divisions: Vec<DivisionStanding>,
}

impl PreviousStandings {
    /// Finishing place (0 = division winner) of `team_id` inside its division.
    pub fn place_of(&self, team_id: &str) -> Option<usize> {
        self.divisions.iter().find_map(|d| d.team_ids.iter().position(|id| id == team_id))
    }

    /// Teams ordered by finishing place, then by division order.
    pub fn teams_by_place(&self) -> Vec<&str> {
        let deepest = self.divisions.iter().map(|d| d.team_ids.len()).max().unwrap_or(0);
        let mut ordered = Vec::new();
        for place in 0..deepest {
            for division in &self.divisions {
                if let Some(id) = division.team_ids.get(place) {
                    ordered.push(id.as_str());
                }
            }
        }
        ordered
    }
}
