//! League-issued draft picks

use super::PickIssuer;
use crate::models::{DraftPick, PickKind};

pub struct StandardPickIssuer {
    rounds: u8,
}

impl StandardPickIssuer {
    pub fn new(rounds: u8) -> Self {
        Self { rounds }
    }
}

impl PickIssuer for StandardPickIssuer {
    fn generate(&mut self, year: u16, team_ids: &[String], kind: PickKind) -> Vec<DraftPick> {
        let mut picks = Vec::with_capacity(self.rounds as usize * team_ids.len());
        for round in 1..=self.rounds {
            for team_id in team_ids {
                picks.push(DraftPick {
                    id: format!("{}-R{}-{}", year, round, team_id),
                    year,
                    round,
                    team_id: team_id.clone(),
                    original_team_id: team_id.clone(),
                    kind,
                });
            }
        }
        picks
    }
}
