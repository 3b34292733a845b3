//! Fold the user team's season into career statistics

use crate::models::CareerSeason;
use crate::services::CareerStatsUpdater;
use crate::state::GameState;

pub struct CareerStatsAggregator;

impl CareerStatsAggregator {
    /// Must run before the reset step clears `current_record`. A snapshot
    /// without a resolvable user team passes through unchanged.
    pub fn apply(state: GameState, updater: &dyn CareerStatsUpdater) -> GameState {
        let Some(team) = state.user_team() else {
            log::warn!("User team {:?} not found; career stats unchanged", state.user_team_id);
            return state;
        };

        let champion = state.league.season_history.last().map(|s| s.champion_team_id.as_str());
        let season = CareerSeason {
            year: state.current_year(),
            wins: team.current_record.wins,
            losses: team.current_record.losses,
            made_playoffs: team.playoff_seed.is_some(),
            won_championship: champion == Some(team.id.as_str()),
        };

        let career_stats = updater.update(&state.career_stats, &season);
        GameState { career_stats, ..state }
    }
}
