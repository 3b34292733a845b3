//! One year older, one year more experienced

use crate::models::Player;
use crate::state::GameState;

pub struct AgingStep;

impl AgingStep {
    pub fn apply(state: GameState) -> GameState {
        let players = state
            .players
            .into_iter()
            .map(|(id, player)| {
                let aged = Player {
                    age: player.age.saturating_add(1),
                    experience: player.experience.saturating_add(1),
                    ..player
                };
                (id, aged)
            })
            .collect();

        GameState { players, ..state }
    }
}
