//! # league_core - Deterministic Season Transition Engine
//!
//! Turns the snapshot of a finished football league season into the
//! snapshot for week 1 of the next one: history, retirements, contracts,
//! aging, development, draft, schedule, career stats, finances and the
//! reset of season-scoped data.
//!
//! ## Features
//! - Same input and seed always produce the same output
//! - Every collaborator (draft class, schedule, progression, cap math) is a
//!   replaceable trait object
//! - JSON API for integration with game front-ends

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod models;
pub mod season;
pub mod services;
pub mod state;

// Re-export main API functions
pub use api::{transition_season_json, TransitionRequest, TransitionResponse};
pub use bootstrap::LeagueBuilder;
pub use config::LeagueConfig;
pub use error::{Result, TransitionError};
pub use season::{transition_to_new_season, SeasonPipeline, TransitionContext, TransitionReport};
pub use state::GameState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
