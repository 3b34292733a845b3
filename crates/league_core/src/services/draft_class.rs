//! Draft class generation

use super::{DraftClassGenerator, PlayerConstraints, PlayerGenerator, RandomPlayerGenerator};
use crate::models::{Prospect, ScoutingReport};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const COLLEGES: &[&str] = &[
    "Alabama", "Clemson", "Florida State", "Georgia", "LSU", "Miami", "Michigan",
    "Notre Dame", "Ohio State", "Oklahoma", "Oregon", "Penn State", "Texas", "USC",
    "Washington", "Wisconsin",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftClass {
    pub prospects: Vec<Prospect>,
}

/// Fills a class of `class_size` prospects from a [`RandomPlayerGenerator`].
///
/// Each draft year gets its own stream derived from `(seed, year)`, so a
/// class depends only on the seed and the year it is drafted in.
pub struct StandardDraftClassGenerator {
    seed: u64,
    class_size: usize,
    rounds: u8,
}

impl StandardDraftClassGenerator {
    pub fn new(seed: u64, class_size: usize, rounds: u8) -> Self {
        Self { seed, class_size, rounds: rounds.max(1) }
    }

    fn class_seed(&self, year: u16) -> u64 {
        self.seed ^ u64::from(year).wrapping_mul(0xD1B5_4A32_D192_ED03)
    }

    fn scout(&self, rng: &mut ChaCha8Rng, overall: u8, potential: u8) -> ScoutingReport {
        // Scouts see mostly ceiling, with some noise.
        let noise: i16 = rng.gen_range(-6..=6);
        let grade = ((overall as i16 + potential as i16) / 2 + noise).clamp(0, 100) as u8;
        let projected_round = match grade {
            g if g >= 75 => 1,
            g if g <= 40 => self.rounds,
            g => {
                let span = 75 - 40;
                let from_top = (75 - g as u16) as f32 / span as f32;
                (1.0 + from_top * (self.rounds as f32 - 1.0)).round() as u8
            }
        };
        let college = COLLEGES.choose(rng).copied().unwrap_or("Independent").to_string();
        ScoutingReport { grade, projected_round: projected_round.clamp(1, self.rounds), college }
    }
}

impl DraftClassGenerator for StandardDraftClassGenerator {
    fn generate(&mut self, year: u16) -> DraftClass {
        let constraints = PlayerConstraints::prospect();
        let class_seed = self.class_seed(year);
        let mut players = RandomPlayerGenerator::new(class_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(class_seed.wrapping_add(1));
        let mut prospects = Vec::with_capacity(self.class_size);
        for _ in 0..self.class_size {
            let mut player = players.generate(&constraints);
            player.experience = 0;
            let scouting = self.scout(&mut rng, player.overall(), player.potential);
            prospects.push(Prospect { player, scouting, draft_year: year });
        }
        DraftClass { prospects }
    }
}
