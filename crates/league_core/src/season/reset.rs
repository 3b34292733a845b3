//! Clear season-scoped data and open the next season

use crate::config::ResetConfig;
use crate::models::{Calendar, InjuryStatus, League, Player, Team, TeamRecord};
use crate::state::GameState;

pub struct TransientResetStep;

impl TransientResetStep {
    /// Roll records into all-time totals, rest and heal players, advance the
    /// calendar to week 1 of next year and drop all in-season gameplay state.
    pub fn apply(state: GameState, config: &ResetConfig) -> GameState {
        let next_year = state.next_year();

        let teams = state.teams.into_iter().map(|(id, team)| (id, Self::reset_team(team))).collect();
        let players = state
            .players
            .into_iter()
            .map(|(id, player)| (id, Self::reset_player(player, config)))
            .collect();

        let league = League {
            calendar: Calendar::season_start(next_year),
            standings: Vec::new(),
            playoff_bracket: None,
            upcoming_events: Vec::new(),
            ..state.league
        };

        GameState { league, teams, players, session: None, ..state }
    }

    fn reset_team(team: Team) -> Team {
        Team {
            all_time_record: team.all_time_record.combined(&team.current_record),
            current_record: TeamRecord::default(),
            playoff_seed: None,
            is_eliminated: false,
            ..team
        }
    }

    fn reset_player(player: Player, config: &ResetConfig) -> Player {
        Player {
            fatigue: 0,
            morale: player.morale.clamp(config.morale_floor, config.morale_ceiling),
            injury: InjuryStatus::healthy(),
            ..player
        }
    }
}
