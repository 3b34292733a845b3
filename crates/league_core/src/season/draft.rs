//! Next year's draft class and draft picks

use crate::error::{Result, TransitionError};
use crate::models::{DraftPick, PickKind};
use crate::services::{DraftClassGenerator, PickIssuer};
use crate::state::GameState;
use std::collections::BTreeSet;

pub struct DraftClassStep;

impl DraftClassStep {
    /// Replace the prospect pool wholesale; undrafted leftovers are dropped.
    pub fn apply(state: GameState, generator: &mut dyn DraftClassGenerator) -> GameState {
        let class = generator.generate(state.next_year());
        log::debug!(
            "Generated {} prospects for the {} draft ({} leftovers discarded)",
            class.prospects.len(),
            state.next_year(),
            state.prospects.len()
        );

        let prospects = class.prospects.into_iter().map(|p| (p.id().to_string(), p)).collect();
        GameState { prospects, ..state }
    }
}

/// Pick bookkeeping for the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickChanges {
    pub purged: usize,
    pub issued: usize,
}

pub struct DraftPickIssuer;

impl DraftPickIssuer {
    /// Drop picks for the finished year and earlier, then issue `rounds`
    /// rounds for next year.
    ///
    /// A pick for next year that already exists (acquired in a trade) keeps
    /// its owner; the freshly issued pick for the same slot is discarded.
    pub fn apply(
        state: GameState,
        issuer: &mut dyn PickIssuer,
        rounds: u8,
    ) -> Result<(GameState, PickChanges)> {
        let current_year = state.current_year();
        let next_year = state.next_year();

        let (retained, stale): (Vec<DraftPick>, Vec<DraftPick>) =
            state.draft_picks.iter().cloned().partition(|p| p.year > current_year);

        let issued = issuer.generate(next_year, &state.league.team_ids, PickKind::Original);
        let stray = issued.iter().filter(|p| p.year != next_year).count();
        if stray > 0 {
            return Err(TransitionError::PickYearMismatch { year: next_year, stray });
        }
        let expected = rounds as usize * state.league.team_ids.len();
        if issued.len() != expected {
            return Err(TransitionError::PickCountMismatch { year: next_year, expected, found: issued.len() });
        }

        let taken: BTreeSet<(u16, u8, String)> =
            retained.iter().map(|p| (p.year, p.round, p.original_team_id.clone())).collect();
        let mut draft_picks = retained;
        draft_picks.extend(
            issued
                .into_iter()
                .filter(|p| !taken.contains(&(p.year, p.round, p.original_team_id.clone()))),
        );
        draft_picks.sort_by(|a, b| {
            (a.year, a.round, &a.original_team_id).cmp(&(b.year, b.round, &b.original_team_id))
        });

        let changes = PickChanges { purged: stale.len(), issued: expected };
        log::debug!("Purged {} stale picks, issued {} for {}", changes.purged, changes.issued, next_year);

        Ok((GameState { draft_picks, ..state }, changes))
    }
}
