//! Archive the finished season into league history

use super::standings;
use crate::models::{League, SeasonSummary};
use crate::state::GameState;

pub struct HistoryRecorder;

impl HistoryRecorder {
    /// Append one `SeasonSummary` for the calendar's current year.
    pub fn apply(state: GameState) -> GameState {
        let champion_team_id = Self::champion(&state);
        let mvp_player_id = Self::select_mvp(&state, &champion_team_id);
        let draft_order = standings::draft_order(state.teams.values());

        let summary = SeasonSummary {
            year: state.current_year(),
            champion_team_id,
            mvp_player_id,
            draft_order,
        };
        log::debug!(
            "Recorded {} season: champion '{}', mvp '{}'",
            summary.year,
            summary.champion_team_id,
            summary.mvp_player_id
        );

        let mut season_history = state.league.season_history.clone();
        season_history.push(summary);

        GameState { league: League { season_history, ..state.league }, ..state }
    }

    /// Final-round winner of the bracket, empty when none was decided.
    pub fn champion(state: &GameState) -> String {
        state
            .league
            .playoff_bracket
            .as_ref()
            .and_then(|bracket| bracket.champion())
            .unwrap_or_default()
            .to_string()
    }

    /// First rostered player of the champion, else the first player in the
    /// league, else empty.
    pub fn select_mvp(state: &GameState, champion_team_id: &str) -> String {
        state
            .teams
            .get(champion_team_id)
            .and_then(|team| team.roster.first())
            .or_else(|| state.players.keys().next())
            .cloned()
            .unwrap_or_default()
    }
}
