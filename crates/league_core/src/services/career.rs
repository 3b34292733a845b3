//! Career statistics accumulation

use super::CareerStatsUpdater;
use crate::models::{CareerSeason, CareerStats};

#[derive(Debug, Default)]
pub struct StandardCareerStatsUpdater;

impl CareerStatsUpdater for StandardCareerStatsUpdater {
    fn update(&self, stats: &CareerStats, season: &CareerSeason) -> CareerStats {
        let mut history = stats.history.clone();
        history.push(*season);

        CareerStats {
            seasons_completed: stats.seasons_completed + 1,
            total_wins: stats.total_wins + season.wins as u32,
            total_losses: stats.total_losses + season.losses as u32,
            playoff_appearances: stats.playoff_appearances + season.made_playoffs as u32,
            championships: stats.championships + season.won_championship as u32,
            history,
        }
    }
}
