//! Salary-cap formulas

use super::CapCalculator;
use crate::models::{Contract, Money, TeamFinances};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FutureCommitments {
    pub next_year: Money,
    pub two_years_out: Money,
    pub three_years_out: Money,
}

/// Years after the cap year that [`FutureCommitments`] covers.
pub const COMMITMENT_YEARS: u16 = 3;

#[derive(Debug, Default)]
pub struct StandardCapCalculator;

impl StandardCapCalculator {
    /// Nothing is committed to a year the calendar cannot reach.
    fn usage_after(&self, contracts: &[&Contract], year: u16, offset: u16) -> Money {
        year.checked_add(offset).map_or(0, |y| self.total_cap_usage(contracts, y))
    }
}

impl CapCalculator for StandardCapCalculator {
    fn total_cap_usage(&self, contracts: &[&Contract], year: u16) -> Money {
        contracts.iter().map(|c| c.cap_hit_for(year)).sum()
    }

    /// Commitments for the three years after `year`.
    fn future_commitments(&self, contracts: &[&Contract], year: u16) -> FutureCommitments {
        FutureCommitments {
            next_year: self.usage_after(contracts, year, 1),
            two_years_out: self.usage_after(contracts, year, 2),
            three_years_out: self.usage_after(contracts, year, COMMITMENT_YEARS),
        }
    }

    fn advance_penalties(&self, finances: &TeamFinances) -> TeamFinances {
        let cap_penalties = finances
            .cap_penalties
            .iter()
            .filter(|p| p.years_remaining > 1)
            .map(|p| {
                let mut aged = p.clone();
                aged.years_remaining -= 1;
                aged
            })
            .collect();

        TeamFinances { cap_penalties, ..finances.clone() }
    }
}
