//! Game state snapshot
//!
//! `GameState` is the complete value the season pipeline consumes and
//! produces. Season-scoped gameplay data lives in a single optional
//! [`SessionState`], so clearing it between seasons is one assignment.

use crate::error::{Result, TransitionError};
use crate::models::{
    CareerStats, Contract, DraftPick, League, OffseasonPhase, Player, Prospect, Team,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};

/// Runtime league snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub league: League,
    pub teams: BTreeMap<String, Team>,
    pub players: BTreeMap<String, Player>,
    pub contracts: BTreeMap<String, Contract>,
    #[serde(default)]
    pub draft_picks: Vec<DraftPick>,
    #[serde(default)]
    pub prospects: BTreeMap<String, Prospect>,
    #[serde(default)]
    pub career_stats: CareerStats,
    /// Human-controlled franchise
    #[serde(default)]
    pub user_team_id: Option<String>,
    /// Season-scoped gameplay data; `None` between seasons
    #[serde(default)]
    pub session: Option<SessionState>,
}

/// Ephemeral gameplay state that only exists while a season is being played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    InSeason(InSeasonState),
    Offseason(OffseasonState),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InSeasonState {
    #[serde(default)]
    pub weekly_game_plan: Option<GamePlan>,
    #[serde(default)]
    pub trade_offers: Vec<TradeOffer>,
    /// player id -> starting
    #[serde(default)]
    pub start_sit_decisions: BTreeMap<String, bool>,
    #[serde(default)]
    pub weekly_awards: Vec<WeeklyAward>,
    #[serde(default)]
    pub waiver_wire: Vec<String>,
    #[serde(default)]
    pub halftime_decisions: Vec<String>,
    #[serde(default)]
    pub season_stats: BTreeMap<String, PlayerSeasonStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffseasonState {
    pub phase: OffseasonPhase,
    #[serde(default)]
    pub completed_phases: Vec<OffseasonPhase>,
    /// Final stats of the season that just ended
    #[serde(default)]
    pub season_stats: BTreeMap<String, PlayerSeasonStats>,
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlan {
    pub offense: String,
    pub defense: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffer {
    pub id: String,
    pub from_team_id: String,
    pub to_team_id: String,
    pub offered_player_ids: Vec<String>,
    pub requested_player_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAward {
    pub week: u8,
    pub award: String,
    pub player_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerSeasonStats {
    pub games: u8,
    pub yards: i32,
    pub touchdowns: u16,
}

impl GameState {
    pub fn current_year(&self) -> u16 {
        self.league.calendar.current_year
    }

    pub fn next_year(&self) -> u16 {
        self.league.calendar.next_year()
    }

    pub fn user_team(&self) -> Option<&Team> {
        self.user_team_id.as_deref().and_then(|id| self.teams.get(id))
    }

    /// Team whose roster, practice squad or injured reserve lists `player_id`.
    pub fn team_of_player(&self, player_id: &str) -> Option<&Team> {
        self.teams.values().find(|t| t.all_player_ids().any(|id| id == player_id))
    }

    /// Check the cross-entity invariants every snapshot must satisfy.
    pub fn validate(&self) -> Result<()> {
        for player in self.players.values() {
            let Some(contract_id) = &player.contract_id else {
                continue;
            };
            let contract = self.contracts.get(contract_id).ok_or_else(|| {
                TransitionError::DanglingContract {
                    player_id: player.id.clone(),
                    contract_id: contract_id.clone(),
                }
            })?;
            if contract.player_id != player.id {
                return Err(TransitionError::ContractOwnerMismatch {
                    contract_id: contract_id.clone(),
                    expected: player.id.clone(),
                    found: contract.player_id.clone(),
                });
            }
        }

        let mut seen = BTreeSet::new();
        for team in self.teams.values() {
            for player_id in team.all_player_ids() {
                if !self.players.contains_key(player_id) {
                    return Err(TransitionError::UnknownRosterPlayer {
                        team_id: team.id.clone(),
                        player_id: player_id.clone(),
                    });
                }
                if !seen.insert(player_id.as_str()) {
                    return Err(TransitionError::PlayerOnMultipleTeams {
                        player_id: player_id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// SHA-256 of the JSON encoding, hex encoded.
    pub fn digest(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        format!("{:x}", Sha256::digest(&bytes))
    }
}
