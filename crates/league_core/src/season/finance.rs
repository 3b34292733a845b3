//! Salary-cap recalculation for the coming year

use crate::config::FinanceConfig;
use crate::models::{Contract, Team, TeamFinances};
use crate::services::CapCalculator;
use crate::state::GameState;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};

pub struct FinanceRecalculator;

impl FinanceRecalculator {
    /// Recompute every team's cap figures for next year from its active
    /// contracts. Teams are independent, so they are processed in parallel.
    pub fn apply(state: GameState, cap: &dyn CapCalculator, config: &FinanceConfig) -> GameState {
        let next_year = state.next_year();
        let salary_cap = config.salary_cap_for(next_year);

        let mut active_by_team: HashMap<&str, Vec<&Contract>> = HashMap::new();
        for contract in state.contracts.values().filter(|c| c.is_active()) {
            active_by_team.entry(contract.team_id.as_str()).or_default().push(contract);
        }

        let teams: BTreeMap<String, Team> = state
            .teams
            .par_iter()
            .map(|(id, team)| {
                let active = active_by_team.get(id.as_str()).map(Vec::as_slice).unwrap_or(&[]);
                let finances = Self::recalculate(&team.finances, active, cap, salary_cap, next_year);
                (id.clone(), Team { finances, ..team.clone() })
            })
            .collect();

        log::debug!("Salary cap for {} set to {}", next_year, salary_cap);
        GameState { teams, ..state }
    }

    fn recalculate(
        finances: &TeamFinances,
        active: &[&Contract],
        cap: &dyn CapCalculator,
        salary_cap: i64,
        year: u16,
    ) -> TeamFinances {
        let advanced = cap.advance_penalties(finances);
        let usage = cap.total_cap_usage(active, year);
        let future = cap.future_commitments(active, year);

        TeamFinances {
            salary_cap,
            current_cap_usage: usage,
            cap_space: salary_cap - usage,
            next_year_commitments: future.next_year,
            two_years_out_commitments: future.two_years_out,
            three_years_out_commitments: future.three_years_out,
            ..advanced
        }
    }
}
