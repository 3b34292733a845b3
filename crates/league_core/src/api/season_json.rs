//! JSON API for season transitions
//!
//! String in, string out, so front-ends can drive the pipeline without
//! linking against the Rust types. Every failure comes back as an
//! `ApiResponse` with `success: false`; nothing here panics on bad input.

use crate::config::LeagueConfig;
use crate::error::TransitionError;
use crate::season::{SeasonPipeline, TransitionContext, TransitionReport};
use crate::state::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with codes and details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

/// Season transition request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub schema_version: Option<String>,
    pub seed: u64,
    pub state: GameState,
    /// Defaults when absent
    pub config: Option<LeagueConfig>,
}

/// Season transition response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionResponse {
    pub state: GameState,
    pub report: TransitionReport,
    /// SHA-256 of the new snapshot
    pub digest: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    pub fn with_details(
        code: &str,
        message: &str,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: Some(details) }
    }

    pub fn from_transition_error(error: TransitionError) -> Self {
        let code = match error {
            TransitionError::DanglingContract { .. } => "DANGLING_CONTRACT",
            TransitionError::ContractOwnerMismatch { .. } => "CONTRACT_OWNER_MISMATCH",
            TransitionError::PlayerOnMultipleTeams { .. } => "PLAYER_ON_MULTIPLE_TEAMS",
            TransitionError::UnknownRosterPlayer { .. } => "UNKNOWN_ROSTER_PLAYER",
            TransitionError::PickCountMismatch { .. } => "PICK_COUNT_MISMATCH",
            TransitionError::ScheduleMissingTeam { .. } => "SCHEDULE_MISSING_TEAM",
            TransitionError::ScheduleYearMismatch { .. } => "SCHEDULE_YEAR_MISMATCH",
            TransitionError::YearOutOfRange { .. } => "YEAR_OUT_OF_RANGE",
            TransitionError::PickYearMismatch { .. } => "PICK_YEAR_MISMATCH",
            TransitionError::InvalidConfig(_) => "INVALID_CONFIG",
        };

        Self::new(code, &error.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl TransitionRequest {
    /// Validate the transition request
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(version) = &self.schema_version {
            if version != API_VERSION {
                let mut details = HashMap::new();
                details.insert("supported".to_string(), serde_json::json!(API_VERSION));
                return Err(ApiError::with_details(
                    "UNSUPPORTED_SCHEMA",
                    &format!("Unsupported schema version: {}", version),
                    details,
                ));
            }
        }

        if let Some(config) = &self.config {
            config.validate().map_err(|msg| ApiError::new("INVALID_CONFIG", &msg))?;
        }

        Ok(())
    }
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

/// Advance the snapshot in `request_json` by one season.
pub fn transition_season_json(request_json: &str) -> String {
    info!("Processing season transition request");

    let request: TransitionRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse TransitionRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return to_json::<TransitionResponse>(&ApiResponse::error(error));
        }
    };

    if let Err(error) = request.validate() {
        warn!("Transition request validation failed: {:?}", error);
        return to_json::<TransitionResponse>(&ApiResponse::error(error));
    }

    let config = request.config.unwrap_or_default();
    let mut ctx = TransitionContext::with_config(request.seed, config);

    match SeasonPipeline::run(&request.state, &mut ctx) {
        Ok((state, report)) => {
            info!("Transitioned season {} -> {}", report.from_year, report.to_year);
            let digest = state.digest();
            to_json(&ApiResponse::success(TransitionResponse { state, report, digest }))
        }
        Err(e) => {
            error!("Season transition failed: {}", e);
            to_json::<TransitionResponse>(&ApiResponse::error(ApiError::from_transition_error(e)))
        }
    }
}
