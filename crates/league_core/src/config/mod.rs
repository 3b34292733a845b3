//! # League Configuration
//!
//! Every tunable constant of the season transition in one place, with
//! presets and JSON loading.
//!
//! ```rust
//! use league_core::config::LeagueConfig;
//!
//! let config = LeagueConfig::default();
//! assert_eq!(config.draft.rounds, 7);
//! ```

mod finance_config;
mod retirement_config;

pub use finance_config::FinanceConfig;
pub use retirement_config::{RetirementBracket, RetirementConfig};

use serde::{Deserialize, Serialize};
use std::{env, fs};
use thiserror::Error;

/// Names a JSON file with a `LeagueConfig`; unset or empty means defaults.
pub const CONFIG_PATH_ENV: &str = "LEAGUE_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftConfig {
    pub rounds: u8,
    /// Prospects generated per class
    pub class_size: usize,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self { rounds: 7, class_size: 256 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub games_per_team: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { games_per_team: 17 }
    }
}

/// Bounds applied when season-scoped player fields are reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetConfig {
    pub morale_floor: u8,
    pub morale_ceiling: u8,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self { morale_floor: 25, morale_ceiling: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LeagueConfig {
    #[serde(default)]
    pub finance: FinanceConfig,
    #[serde(default)]
    pub retirement: RetirementConfig,
    #[serde(default)]
    pub draft: DraftConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub reset: ResetConfig,
}

impl LeagueConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    /// No retirements, so a transition draws nothing from the retirement stream.
    pub fn deterministic() -> Self {
        Self { retirement: RetirementConfig::disabled(), ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LeagueConfig = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Load from the file named by [`CONFIG_PATH_ENV`], falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_string(), source })?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded league config from {}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.finance.validate()?;
        self.retirement.validate()?;
        if self.draft.rounds == 0 {
            return Err("draft.rounds must be at least 1".to_string());
        }
        if self.schedule.games_per_team == 0 {
            return Err("schedule.games_per_team must be at least 1".to_string());
        }
        if self.reset.morale_floor > self.reset.morale_ceiling {
            return Err(format!(
                "reset.morale_floor {} exceeds morale_ceiling {}",
                self.reset.morale_floor, self.reset.morale_ceiling
            ));
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus the checks that depend on league size.
    ///
    /// With an odd team count one team sits out each round, so a single
    /// round cannot give every team a game.
    pub fn validate_for_teams(&self, team_count: usize) -> Result<(), String> {
        self.validate()?;
        if team_count > 1 && team_count % 2 == 1 && self.schedule.games_per_team < 2 {
            return Err(format!(
                "schedule.games_per_team must be at least 2 for {} teams, got {}",
                team_count, self.schedule.games_per_team
            ));
        }
        Ok(())
    }
}
