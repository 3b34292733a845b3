//! Salary cap growth parameters

use crate::models::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceConfig {
    /// Cap in `reference_year`
    pub base_cap: Money,
    pub reference_year: u16,
    /// Linear growth per year after `reference_year` (default: 0.03)
    pub annual_growth: f64,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self { base_cap: 255_400_000, reference_year: 2024, annual_growth: 0.03 }
    }
}

impl FinanceConfig {
    /// `base_cap * (1 + growth * (year - reference_year))`, rounded to whole units.
    pub fn salary_cap_for(&self, year: u16) -> Money {
        let years = year as f64 - self.reference_year as f64;
        (self.base_cap as f64 * (1.0 + self.annual_growth * years)).round() as Money
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_cap <= 0 {
            return Err(format!("base_cap must be positive, got {}", self.base_cap));
        }
        if !self.annual_growth.is_finite() || self.annual_growth < 0.0 {
            return Err(format!("annual_growth must be >= 0, got {}", self.annual_growth));
        }
        Ok(())
    }
}
