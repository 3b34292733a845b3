//! # Season transition pipeline
//!
//! Eleven steps turn the snapshot at the close of a season into the snapshot
//! for week 1 of the next one. Order is fixed:
//!
//! 1. [`HistoryRecorder`] archives the finished season
//! 2. [`RetirementResolver`] removes aged-out players
//! 3. [`ContractAdvancer`] ages contracts, freeing players whose deals end
//! 4. [`AgingStep`] adds a year of age and experience
//! 5. [`DevelopmentStep`] applies coach-driven progression
//! 6. [`DraftClassStep`] replaces the prospect pool
//! 7. [`DraftPickIssuer`] purges stale picks, issues next year's
//! 8. [`ScheduleStep`] builds next year's schedule
//! 9. [`CareerStatsAggregator`] folds the user team's season into career stats
//! 10. [`FinanceRecalculator`] recomputes cap figures
//! 11. [`TransientResetStep`] clears season-scoped data, advances the calendar
//!
//! Steps 7 and 8 read the pre-increment calendar year, step 9 reads the
//! pre-reset team records, and step 10 needs contracts already advanced.
//!
//! ```rust,no_run
//! use league_core::bootstrap::LeagueBuilder;
//! use league_core::season::{transition_to_new_season, TransitionContext};
//!
//! let state = LeagueBuilder::new(2024, 32).seed(7).build();
//! let mut ctx = TransitionContext::standard(42);
//! let next = transition_to_new_season(&state, &mut ctx).unwrap();
//! assert_eq!(next.league.calendar.current_year, 2025);
//! ```

pub mod aging;
pub mod career;
pub mod contracts;
pub mod development;
pub mod draft;
pub mod finance;
pub mod history;
pub mod reset;
pub mod retirement;
pub mod schedule;
pub mod standings;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use aging::AgingStep;
pub use career::CareerStatsAggregator;
pub use contracts::{ContractAdvancer, ContractChanges};
pub use development::DevelopmentStep;
pub use draft::{DraftClassStep, DraftPickIssuer, PickChanges};
pub use finance::FinanceRecalculator;
pub use history::HistoryRecorder;
pub use reset::TransientResetStep;
pub use retirement::RetirementResolver;
pub use schedule::ScheduleStep;

use crate::config::LeagueConfig;
use crate::error::{Result, TransitionError};
use crate::services::{
    CapCalculator, CareerStatsUpdater, ContractLifecycle, DraftClassGenerator,
    GrowthProgressionModel, PickIssuer, ProgressionModel, RoundRobinScheduleGenerator,
    ScheduleGenerator, StandardCapCalculator, StandardCareerStatsUpdater,
    StandardContractLifecycle, StandardDraftClassGenerator, StandardPickIssuer, COMMITMENT_YEARS,
};
use crate::state::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

// Stream offsets so each collaborator draws from its own sequence.
const DRAFT_CLASS_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration, randomness and collaborators for one or more transitions
pub struct TransitionContext {
    pub config: LeagueConfig,
    /// Retirement draws
    pub rng: ChaCha8Rng,
    pub draft_classes: Box<dyn DraftClassGenerator>,
    pub pick_issuer: Box<dyn PickIssuer>,
    pub scheduler: Box<dyn ScheduleGenerator>,
    pub progression: Box<dyn ProgressionModel>,
    pub contracts: Box<dyn ContractLifecycle>,
    pub cap: Box<dyn CapCalculator>,
    pub career: Box<dyn CareerStatsUpdater>,
}

impl TransitionContext {
    /// Standard collaborators, default config.
    pub fn standard(seed: u64) -> Self {
        Self::with_config(seed, LeagueConfig::default())
    }

    /// Standard collaborators sized from `config`.
    pub fn with_config(seed: u64, config: LeagueConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            draft_classes: Box::new(StandardDraftClassGenerator::new(
                seed ^ DRAFT_CLASS_STREAM,
                config.draft.class_size,
                config.draft.rounds,
            )),
            pick_issuer: Box::new(StandardPickIssuer::new(config.draft.rounds)),
            scheduler: Box::new(RoundRobinScheduleGenerator::new(config.schedule.games_per_team)),
            progression: Box::new(GrowthProgressionModel),
            contracts: Box::new(StandardContractLifecycle),
            cap: Box::new(StandardCapCalculator),
            career: Box::new(StandardCareerStatsUpdater),
            config,
        }
    }

    pub fn with_draft_classes(mut self, generator: impl DraftClassGenerator + 'static) -> Self {
        self.draft_classes = Box::new(generator);
        self
    }

    pub fn with_pick_issuer(mut self, issuer: impl PickIssuer + 'static) -> Self {
        self.pick_issuer = Box::new(issuer);
        self
    }

    pub fn with_scheduler(mut self, scheduler: impl ScheduleGenerator + 'static) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    pub fn with_progression(mut self, model: impl ProgressionModel + 'static) -> Self {
        self.progression = Box::new(model);
        self
    }

    pub fn with_contract_lifecycle(mut self, lifecycle: impl ContractLifecycle + 'static) -> Self {
        self.contracts = Box::new(lifecycle);
        self
    }

    pub fn with_cap_calculator(mut self, cap: impl CapCalculator + 'static) -> Self {
        self.cap = Box::new(cap);
        self
    }

    pub fn with_career_updater(mut self, updater: impl CareerStatsUpdater + 'static) -> Self {
        self.career = Box::new(updater);
        self
    }
}

/// What one transition did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TransitionReport {
    pub from_year: u16,
    pub to_year: u16,
    pub champion_team_id: String,
    pub retired_player_ids: Vec<String>,
    pub expired_contract_ids: Vec<String>,
    pub removed_contract_ids: Vec<String>,
    /// Teams without a head coach
    pub undeveloped_team_ids: Vec<String>,
    pub purged_picks: usize,
    pub issued_picks: usize,
    pub prospects_generated: usize,
    pub games_scheduled: usize,
}

pub struct SeasonPipeline;

impl SeasonPipeline {
    /// Run all eleven steps on a copy of `input`.
    ///
    /// `input` is never modified; on error no partial result escapes.
    pub fn run(input: &GameState, ctx: &mut TransitionContext) -> Result<(GameState, TransitionReport)> {
        ctx.config.validate_for_teams(input.teams.len()).map_err(TransitionError::InvalidConfig)?;
        input.validate()?;

        // Finances look COMMITMENT_YEARS past the new season.
        let from_year = input.current_year();
        let to_year = from_year
            .checked_add(1)
            .filter(|year| year.checked_add(COMMITMENT_YEARS).is_some())
            .ok_or(TransitionError::YearOutOfRange { year: from_year })?;
        let mut report = TransitionReport { from_year, to_year, ..Default::default() };

        let state = HistoryRecorder::apply(input.clone());
        report.champion_team_id = state
            .league
            .season_history
            .last()
            .map(|s| s.champion_team_id.clone())
            .unwrap_or_default();

        let (state, retired) = RetirementResolver::apply(state, &ctx.config.retirement, &mut ctx.rng);
        report.retired_player_ids = retired;

        let (state, contract_changes) = ContractAdvancer::apply(state, ctx.contracts.as_ref());
        report.expired_contract_ids = contract_changes.expired;
        report.removed_contract_ids = contract_changes.removed;

        let state = AgingStep::apply(state);

        let (state, skipped) = DevelopmentStep::apply(state, ctx.progression.as_ref());
        report.undeveloped_team_ids = skipped;

        let state = DraftClassStep::apply(state, ctx.draft_classes.as_mut());
        report.prospects_generated = state.prospects.len();

        let (state, picks) = DraftPickIssuer::apply(state, ctx.pick_issuer.as_mut(), ctx.config.draft.rounds)?;
        report.purged_picks = picks.purged;
        report.issued_picks = picks.issued;

        let state = ScheduleStep::apply(state, ctx.scheduler.as_mut())?;
        report.games_scheduled = state.league.schedule.as_ref().map_or(0, |s| s.regular_season.len());

        let state = CareerStatsAggregator::apply(state, ctx.career.as_ref());
        let state = FinanceRecalculator::apply(state, ctx.cap.as_ref(), &ctx.config.finance);
        let state = TransientResetStep::apply(state, &ctx.config.reset);

        state.validate()?;

        log::info!(
            "Season {} -> {}: {} retired, {} contracts expired, {} prospects, {} games",
            report.from_year,
            report.to_year,
            report.retired_player_ids.len(),
            report.expired_contract_ids.len(),
            report.prospects_generated,
            report.games_scheduled
        );

        Ok((state, report))
    }
}

/// Advance `state` to week 1 of the next season.
pub fn transition_to_new_season(state: &GameState, ctx: &mut TransitionContext) -> Result<GameState> {
    SeasonPipeline::run(state, ctx).map(|(next, _)| next)
}
