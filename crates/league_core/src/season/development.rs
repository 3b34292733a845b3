//! Coach-driven player development

use crate::models::Player;
use crate::services::ProgressionModel;
use crate::state::GameState;
use std::collections::BTreeMap;

pub struct DevelopmentStep;

impl DevelopmentStep {
    /// Progress every player attached to a team with a head coach.
    ///
    /// Returns the ids of teams skipped for lacking a head coach; their players
    /// do not develop this year. Unattached players never develop.
    pub fn apply(state: GameState, model: &dyn ProgressionModel) -> (GameState, Vec<String>) {
        let mut developed: BTreeMap<String, Player> = BTreeMap::new();
        let mut skipped = Vec::new();

        for team in state.teams.values() {
            let Some(coach) = team.head_coach() else {
                log::warn!("Team {} has no head coach; skipping development", team.id);
                skipped.push(team.id.clone());
                continue;
            };

            for player_id in team.all_player_ids() {
                let Some(player) = state.players.get(player_id) else {
                    continue;
                };
                let result = model.progress(player, coach);
                if !result.is_empty() {
                    developed.insert(player_id.clone(), model.apply_changes(player, &result));
                }
            }
        }

        log::debug!("Developed {} players", developed.len());

        let players = state
            .players
            .into_iter()
            .map(|(id, player)| match developed.remove(&id) {
                Some(next) => (id, next),
                None => (id, player),
            })
            .collect();

        (GameState { players, ..state }, skipped)
    }
}
