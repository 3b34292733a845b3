//! League data model
//!
//! Plain value types for every entity the season pipeline touches. All
//! collections keyed by id use ordered maps so iteration order (and therefore
//! every random draw taken while iterating) is reproducible.

pub mod calendar;
pub mod contract;
pub mod draft;
pub mod history;
pub mod league;
pub mod player;
pub mod schedule;
pub mod team;

pub use calendar::*;
pub use contract::*;
pub use draft::*;
pub use history::*;
pub use league::*;
pub use player::*;
pub use schedule::*;
pub use team::*;

/// Whole currency units (dollars).
pub type Money = i64;
