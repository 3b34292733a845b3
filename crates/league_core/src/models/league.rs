use super::{Calendar, Schedule, SeasonSummary, TeamRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffMatchup {
    pub home_team_id: String,
    pub away_team_id: String,
    #[serde(default)]
    pub winner_team_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffRound {
    pub name: String,
    pub matchups: Vec<PlayoffMatchup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayoffBracket {
    pub rounds: Vec<PlayoffRound>,
}

impl PlayoffBracket {
    /// Winner of the final round, if it has been played.
    pub fn champion(&self) -> Option<&str> {
        self.rounds
            .last()
            .and_then(|round| round.matchups.iter().find_map(|m| m.winner_team_id.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub team_id: String,
    pub record: TeamRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueEvent {
    pub week: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub calendar: Calendar,
    /// Append-only, oldest first
    #[serde(default)]
    pub season_history: Vec<SeasonSummary>,
    #[serde(default)]
    pub standings: Vec<StandingsEntry>,
    #[serde(default)]
    pub playoff_bracket: Option<PlayoffBracket>,
    #[serde(default)]
    pub schedule: Option<Schedule>,
    pub team_ids: Vec<String>,
    #[serde(default)]
    pub upcoming_events: Vec<LeagueEvent>,
}
