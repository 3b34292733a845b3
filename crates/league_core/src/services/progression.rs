//! Off-season skill progression with quadratic decay
//!
//! - Growth rate: `(1.0 - overall/potential)^2`, minimum 10% at or above potential
//! - Age curve: growth through 25, plateau 26-29, decline from 30
//! - Head coach development rating scales growth and softens decline

use super::ProgressionModel;
use crate::models::{Coach, Player, Skill, SKILL_MAX, SKILL_MIN};
use serde::{Deserialize, Serialize};

/// Points a maximal-growth player can gain per skill in one off-season.
const MAX_SEASON_GAIN: f32 = 8.0;
/// Points a physical skill loses per off-season at full decline.
const MAX_SEASON_DECLINE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillChange {
    pub skill: Skill,
    pub delta: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SkillChangeResult {
    pub player_id: String,
    pub changes: Vec<SkillChange>,
}

impl SkillChangeResult {
    pub fn net_change(&self) -> i32 {
        self.changes.iter().map(|c| c.delta as i32).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct GrowthProgressionModel;

impl GrowthProgressionModel {
    /// Quadratic decay toward potential.
    pub fn growth_rate(overall: u8, potential: u8) -> f32 {
        if potential == 0 {
            return 0.0;
        }

        let progress = overall as f32 / potential as f32;
        if progress >= 1.0 {
            0.1
        } else {
            let remaining = 1.0 - progress;
            remaining * remaining
        }
    }

    /// Positive values grow, negative values decline.
    pub fn age_modifier(age: u8) -> f32 {
        match age {
            0..=23 => 1.2,
            24..=25 => 1.0,
            26..=29 => 0.0,
            30..=32 => -0.5,
            _ => -1.0,
        }
    }

    /// 0.75x for the worst developer, 1.25x for the best.
    pub fn coach_modifier(coach: &Coach) -> f32 {
        0.75 + (coach.development.min(100) as f32 / 100.0) * 0.5
    }

    fn skill_delta(player: &Player, skill: Skill, coach: &Coach) -> i8 {
        let age_mod = Self::age_modifier(player.age);
        let coach_mod = Self::coach_modifier(coach);

        let delta = if age_mod >= 0.0 {
            let rate = Self::growth_rate(player.overall(), player.potential);
            MAX_SEASON_GAIN * rate * age_mod * coach_mod
        } else {
            // Mental skills erode at a third of the physical rate.
            let weight = if skill.is_physical() { 1.0 } else { 0.34 };
            MAX_SEASON_DECLINE * age_mod * weight / coach_mod
        };

        delta.round() as i8
    }
}

impl ProgressionModel for GrowthProgressionModel {
    fn progress(&self, player: &Player, coach: &Coach) -> SkillChangeResult {
        let changes = player
            .skills
            .keys()
            .map(|&skill| SkillChange { skill, delta: Self::skill_delta(player, skill, coach) })
            .filter(|c| c.delta != 0)
            .collect();

        SkillChangeResult { player_id: player.id.clone(), changes }
    }

    fn apply_changes(&self, player: &Player, result: &SkillChangeResult) -> Player {
        let mut next = player.clone();
        for change in &result.changes {
            if let Some(value) = next.skills.get_mut(&change.skill) {
                let updated = (*value as i16 + change.delta as i16).clamp(SKILL_MIN as i16, SKILL_MAX as i16);
                *value = updated as u8;
            }
        }
        next
    }
}
