//! Yearly contract aging

use super::ContractLifecycle;
use crate::models::{Contract, ContractStatus};

/// - Active contracts lose one year; at zero they become `Expired`.
/// - Expired contracts are kept for one league year of reference, then removed.
/// - A contract whose remaining years are all void years is removed outright.
#[derive(Debug, Default)]
pub struct StandardContractLifecycle;

impl StandardContractLifecycle {
    /// Breakdown entries still to be played, assuming the breakdown is in year order.
    fn remaining_years(contract: &Contract) -> &[crate::models::ContractYear] {
        let len = contract.breakdown.len();
        let remaining = (contract.years_remaining as usize).min(len);
        &contract.breakdown[len - remaining..]
    }
}

impl ContractLifecycle for StandardContractLifecycle {
    fn advance(&self, contract: &Contract) -> Option<Contract> {
        if contract.status == ContractStatus::Expired {
            return None;
        }

        let mut next = contract.clone();
        next.years_remaining = next.years_remaining.saturating_sub(1);

        if next.years_remaining == 0 {
            next.status = ContractStatus::Expired;
            return Some(next);
        }

        let remaining = Self::remaining_years(&next);
        if !remaining.is_empty() && remaining.iter().all(|y| y.is_void) {
            return None;
        }

        Some(next)
    }
}
