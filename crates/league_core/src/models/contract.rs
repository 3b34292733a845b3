use super::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContractStatus {
    #[default]
    Active,
    Expired,
}

/// One league year of a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractYear {
    pub year: u16,
    pub salary: Money,
    pub bonus: Money,
    pub cap_hit: Money,
    /// Void years only exist to spread bonus proration; they are never played.
    #[serde(default)]
    pub is_void: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub player_id: String,
    pub team_id: String,
    pub status: ContractStatus,
    pub years_remaining: u8,
    pub breakdown: Vec<ContractYear>,
}

impl Contract {
    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::Active
    }

    /// Cap hit charged in `year`, zero when the contract has no entry for it.
    pub fn cap_hit_for(&self, year: u16) -> Money {
        self.breakdown.iter().filter(|y| y.year == year).map(|y| y.cap_hit).sum()
    }

    /// Breakdown entries for `year` and later.
    pub fn years_from(&self, year: u16) -> impl Iterator<Item = &ContractYear> {
        self.breakdown.iter().filter(move |y| y.year >= year)
    }

    pub fn total_value(&self) -> Money {
        self.breakdown.iter().map(|y| y.salary + y.bonus).sum()
    }
}
