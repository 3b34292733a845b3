//! Retirement odds by age

use serde::{Deserialize, Serialize};

/// Probability applied to every player aged `min_age` or older, until the
/// next bracket starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementBracket {
    pub min_age: u8,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementConfig {
    /// Ascending by `min_age`; ages below the first bracket never retire.
    pub brackets: Vec<RetirementBracket>,
}

impl Default for RetirementConfig {
    fn default() -> Self {
        Self {
            brackets: vec![
                RetirementBracket { min_age: 34, probability: 0.10 },
                RetirementBracket { min_age: 36, probability: 0.25 },
                RetirementBracket { min_age: 38, probability: 0.50 },
                RetirementBracket { min_age: 40, probability: 0.90 },
            ],
        }
    }
}

impl RetirementConfig {
    /// Nobody retires.
    pub fn disabled() -> Self {
        Self { brackets: Vec::new() }
    }

    pub fn probability_for(&self, age: u8) -> f64 {
        self.brackets
            .iter()
            .rev()
            .find(|b| age >= b.min_age)
            .map(|b| b.probability)
            .unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<(), String> {
        for pair in self.brackets.windows(2) {
            if pair[0].min_age >= pair[1].min_age {
                return Err(format!(
                    "retirement brackets must be ascending: {} then {}",
                    pair[0].min_age, pair[1].min_age
                ));
            }
        }
        if let Some(b) = self.brackets.iter().find(|b| !(0.0..=1.0).contains(&b.probability)) {
            return Err(format!(
                "retirement probability {} at age {} is outside [0, 1]",
                b.probability, b.min_age
            ));
        }
        Ok(())
    }
}
