//! Contract year advancement

use crate::models::{ContractStatus, Player};
use crate::services::ContractLifecycle;
use crate::state::GameState;
use std::collections::{BTreeMap, BTreeSet};

/// Contracts that stopped binding a player this year
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractChanges {
    /// Kept with `Expired` status
    pub expired: Vec<String>,
    /// Deleted from the collection
    pub removed: Vec<String>,
}

pub struct ContractAdvancer;

impl ContractAdvancer {
    /// Age every contract one year and release the players whose contract
    /// expired or disappeared.
    pub fn apply(state: GameState, lifecycle: &dyn ContractLifecycle) -> (GameState, ContractChanges) {
        let mut changes = ContractChanges::default();
        let mut contracts = BTreeMap::new();

        for (id, contract) in &state.contracts {
            match lifecycle.advance(contract) {
                Some(next) => {
                    if contract.status == ContractStatus::Active && next.status == ContractStatus::Expired {
                        changes.expired.push(id.clone());
                    }
                    contracts.insert(id.clone(), next);
                }
                None => changes.removed.push(id.clone()),
            }
        }

        log::debug!(
            "Advanced {} contracts: {} expired, {} removed",
            state.contracts.len(),
            changes.expired.len(),
            changes.removed.len()
        );

        let released: BTreeSet<&str> =
            changes.expired.iter().chain(changes.removed.iter()).map(String::as_str).collect();
        let players = state
            .players
            .into_iter()
            .map(|(id, player)| {
                let freed = player.contract_id.as_deref().is_some_and(|c| released.contains(c));
                let player = if freed { Player { contract_id: None, ..player } } else { player };
                (id, player)
            })
            .collect();

        (GameState { contracts, players, ..state }, changes)
    }
}
