//! League CLI library
//!
//! File-level operations behind the `league` binary: create a league
//! snapshot, advance a snapshot through one or more season transitions.

use anyhow::{Context, Result};
use league_core::{GameState, LeagueBuilder, LeagueConfig, SeasonPipeline, TransitionContext, TransitionReport};
use std::fs;
use std::path::Path;

/// Outcome of `advance_league`
#[derive(Debug, Clone)]
pub struct AdvanceSummary {
    /// One per season, oldest first
    pub reports: Vec<TransitionReport>,
    /// SHA-256 of the final snapshot
    pub digest: String,
}

pub fn load_state(path: &Path) -> Result<GameState> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read league file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse league file: {}", path.display()))
}

pub fn save_state(path: &Path, state: &GameState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(state).context("Failed to serialize league")?;
    fs::write(path, json).with_context(|| format!("Failed to write league file: {}", path.display()))
}

/// Config file when given, else `LEAGUE_CONFIG_PATH`, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<LeagueConfig> {
    let config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            LeagueConfig::from_json(&json)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => LeagueConfig::from_env().context("Failed to load config from environment")?,
    };
    Ok(config)
}

/// Write a fresh league to `out` and return its digest.
pub fn new_league(out: &Path, teams: usize, year: u16, seed: u64, played: bool) -> Result<String> {
    if teams < 2 {
        anyhow::bail!("A league needs at least 2 teams, got {}", teams);
    }
    let state = LeagueBuilder::new(year, teams).seed(seed).played_season(played).build();
    save_state(out, &state)?;
    tracing::info!(teams, year, seed, "created league at {}", out.display());
    Ok(state.digest())
}

/// Run `seasons` transitions on the snapshot at `input` and write the result
/// to `out`. Nothing is written if any transition fails.
pub fn advance_league(
    input: &Path,
    out: &Path,
    seed: u64,
    seasons: u32,
    config: Option<&Path>,
) -> Result<AdvanceSummary> {
    let mut state = load_state(input)?;
    let config = load_config(config)?;
    let mut ctx = TransitionContext::with_config(seed, config);

    let mut reports = Vec::with_capacity(seasons as usize);
    for _ in 0..seasons {
        let (next, report) = SeasonPipeline::run(&state, &mut ctx)
            .with_context(|| format!("Season transition from {} failed", state.current_year()))?;
        tracing::info!(from = report.from_year, to = report.to_year, "season advanced");
        state = next;
        reports.push(report);
    }

    save_state(out, &state)?;
    Ok(AdvanceSummary { reports, digest: state.digest() })
}
