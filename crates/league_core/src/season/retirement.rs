//! Age-based retirement

use crate::config::RetirementConfig;
use crate::models::Team;
use crate::state::GameState;
use rand::Rng;
use std::collections::BTreeSet;

pub struct RetirementResolver;

impl RetirementResolver {
    /// Draw once per player, in id order, and remove every retiree together
    /// with roster entries and contracts. Returns the retired ids.
    ///
    /// With no retirements the state comes back untouched.
    pub fn apply<R: Rng>(
        state: GameState,
        config: &RetirementConfig,
        rng: &mut R,
    ) -> (GameState, Vec<String>) {
        let retired: BTreeSet<String> = state
            .players
            .values()
            .filter(|player| {
                let draw: f64 = rng.gen();
                draw < config.probability_for(player.age)
            })
            .map(|player| player.id.clone())
            .collect();

        if retired.is_empty() {
            return (state, Vec::new());
        }
        log::debug!("{} players retired", retired.len());

        let players = state.players.into_iter().filter(|(id, _)| !retired.contains(id)).collect();
        let contracts = state
            .contracts
            .into_iter()
            .filter(|(_, contract)| !retired.contains(&contract.player_id))
            .collect();
        let teams = state
            .teams
            .into_iter()
            .map(|(id, team)| (id, Self::without_players(team, &retired)))
            .collect();

        (GameState { players, contracts, teams, ..state }, retired.into_iter().collect())
    }

    fn without_players(team: Team, retired: &BTreeSet<String>) -> Team {
        let keep = |ids: Vec<String>| -> Vec<String> {
            ids.into_iter().filter(|id| !retired.contains(id)).collect()
        };
        Team {
            roster: keep(team.roster),
            practice_squad: keep(team.practice_squad),
            injured_reserve: keep(team.injured_reserve),
            ..team
        }
    }
}
