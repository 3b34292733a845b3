pub mod season_json;

pub use season_json::{
    transition_season_json, ApiError, ApiResponse, TransitionRequest, TransitionResponse,
    API_VERSION,
};
