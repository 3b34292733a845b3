//! Seeded player fabrication

use super::PlayerGenerator;
use crate::models::{InjuryStatus, Player, Position, Skill, SKILL_MAX, SKILL_MIN};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Andre", "Brandon", "Caleb", "Cameron", "Darius", "DeShawn", "Elijah", "Ethan",
    "Isaiah", "Jalen", "Jamal", "Jordan", "Justin", "Kyle", "Lamar", "Marcus", "Mason",
    "Micah", "Nathan", "Noah", "Patrick", "Quinn", "Reggie", "Terrell", "Travis", "Tyler",
    "Xavier",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Bailey", "Brooks", "Carter", "Coleman", "Davis", "Edwards", "Fletcher",
    "Griffin", "Harris", "Hayes", "Jackson", "Johnson", "Kelly", "Mitchell", "Moore",
    "Parker", "Reed", "Robinson", "Simmons", "Thompson", "Turner", "Walker", "Washington",
    "Williams", "Young",
];

/// Bounds for a generated player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConstraints {
    /// Random when `None`
    pub position: Option<Position>,
    pub min_age: u8,
    pub max_age: u8,
    pub min_overall: u8,
    pub max_overall: u8,
}

impl PlayerConstraints {
    /// College player entering the draft
    pub fn prospect() -> Self {
        Self { position: None, min_age: 21, max_age: 23, min_overall: 40, max_overall: 72 }
    }

    /// Established professional at `position`
    pub fn veteran(position: Position) -> Self {
        Self { position: Some(position), min_age: 22, max_age: 34, min_overall: 50, max_overall: 88 }
    }
}

impl Default for PlayerConstraints {
    fn default() -> Self {
        Self { position: None, min_age: 22, max_age: 30, min_overall: 45, max_overall: 80 }
    }
}

pub struct RandomPlayerGenerator {
    rng: ChaCha8Rng,
}

impl RandomPlayerGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// UUID built from the generator's own stream, so ids replay with the seed.
    fn next_id(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.gen();
        uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
    }

    fn next_name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("John");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Doe");
        format!("{} {}", first, last)
    }
}

impl PlayerGenerator for RandomPlayerGenerator {
    fn generate(&mut self, constraints: &PlayerConstraints) -> Player {
        let id = self.next_id();
        let name = self.next_name();
        let position = match constraints.position {
            Some(position) => position,
            None => Position::ALL.choose(&mut self.rng).copied().unwrap_or(Position::QB),
        };

        let min_age = constraints.min_age.min(constraints.max_age);
        let age = self.rng.gen_range(min_age..=constraints.max_age);
        let min_overall = constraints.min_overall.min(constraints.max_overall);
        let target = self.rng.gen_range(min_overall..=constraints.max_overall) as i16;

        let mut skills = BTreeMap::new();
        for skill in Skill::ALL {
            let value = target + self.rng.gen_range(-8..=8);
            skills.insert(skill, value.clamp(SKILL_MIN as i16, SKILL_MAX as i16) as u8);
        }

        // Young players carry more headroom.
        let headroom = if age < 26 { self.rng.gen_range(5..=25) } else { self.rng.gen_range(0..=5) };
        let potential = (target + headroom).clamp(SKILL_MIN as i16, SKILL_MAX as i16) as u8;

        Player {
            id,
            name,
            position,
            age,
            experience: age.saturating_sub(22),
            fatigue: 0,
            morale: self.rng.gen_range(50..=80),
            injury: InjuryStatus::healthy(),
            potential,
            skills,
            contract_id: None,
        }
    }
}
