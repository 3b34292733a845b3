use super::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PickKind {
    /// Issued to the team by the league
    #[default]
    Original,
    /// Acquired from another team
    Traded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPick {
    pub id: String,
    pub year: u16,
    pub round: u8,
    /// Current owner
    pub team_id: String,
    pub original_team_id: String,
    #[serde(default)]
    pub kind: PickKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutingReport {
    /// 0..=100
    pub grade: u8,
    pub projected_round: u8,
    pub college: String,
}

/// A generated player eligible for one draft class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    pub player: Player,
    pub scouting: ScoutingReport,
    pub draft_year: u16,
}

impl Prospect {
    pub fn id(&self) -> &str {
        &self.player.id
    }
}
