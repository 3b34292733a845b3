//! Collaborators consumed by the season pipeline
//!
//! Each concern the pipeline delegates (player fabrication, scheduling, cap
//! math, progression, ...) is a trait here, with one standard implementation
//! in the matching submodule. Callers swap implementations through
//! [`crate::season::TransitionContext`].

pub mod cap;
pub mod career;
pub mod contract_lifecycle;
pub mod draft_class;
pub mod pick_issuer;
pub mod player_generator;
pub mod progression;
pub mod schedule_generator;

pub use cap::{FutureCommitments, StandardCapCalculator, COMMITMENT_YEARS};
pub use career::StandardCareerStatsUpdater;
pub use contract_lifecycle::StandardContractLifecycle;
pub use draft_class::{DraftClass, StandardDraftClassGenerator};
pub use pick_issuer::StandardPickIssuer;
pub use player_generator::{PlayerConstraints, RandomPlayerGenerator};
pub use progression::{GrowthProgressionModel, SkillChange, SkillChangeResult};
pub use schedule_generator::RoundRobinScheduleGenerator;

use crate::models::{
    CareerSeason, CareerStats, Coach, Contract, DraftPick, Money, PickKind, Player,
    PreviousStandings, Schedule, Team, TeamFinances,
};

/// Fabricates a single player with a fresh unique id.
pub trait PlayerGenerator {
    fn generate(&mut self, constraints: &PlayerConstraints) -> Player;
}

/// Produces the full prospect pool for one draft year.
pub trait DraftClassGenerator {
    fn generate(&mut self, year: u16) -> DraftClass;
}

/// Issues one year's draft picks: `rounds × team_ids.len()` of them.
pub trait PickIssuer {
    fn generate(&mut self, year: u16, team_ids: &[String], kind: PickKind) -> Vec<DraftPick>;
}

/// Builds a regular season covering every team.
pub trait ScheduleGenerator {
    fn generate(&mut self, teams: &[&Team], previous: &PreviousStandings, year: u16) -> Schedule;
}

/// Off-season skill progression under a head coach.
pub trait ProgressionModel {
    fn progress(&self, player: &Player, coach: &Coach) -> SkillChangeResult;
    fn apply_changes(&self, player: &Player, result: &SkillChangeResult) -> Player;
}

/// Ages a contract by one league year; `None` means the contract is gone.
pub trait ContractLifecycle {
    fn advance(&self, contract: &Contract) -> Option<Contract>;
}

/// Salary-cap arithmetic.
pub trait CapCalculator: Send + Sync {
    fn total_cap_usage(&self, contracts: &[&Contract], year: u16) -> Money;
    fn future_commitments(&self, contracts: &[&Contract], year: u16) -> FutureCommitments;
    fn advance_penalties(&self, finances: &TeamFinances) -> TeamFinances;
}

/// Folds one season into the user's lifetime statistics.
pub trait CareerStatsUpdater {
    fn update(&self, stats: &CareerStats, season: &CareerSeason) -> CareerStats;
}
