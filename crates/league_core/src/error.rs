use thiserror::Error;

/// Conditions that abort a season transition.
///
/// Every variant is a programming error: a malformed input snapshot or a
/// collaborator that broke its contract. Legitimately missing data (no
/// champion, no head coach, no user team) never produces one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("player {player_id} references missing contract {contract_id}")]
    DanglingContract { player_id: String, contract_id: String },

    #[error("contract {contract_id} belongs to {found}, but is referenced by {expected}")]
    ContractOwnerMismatch { contract_id: String, expected: String, found: String },

    #[error("player {player_id} is listed on more than one roster")]
    PlayerOnMultipleTeams { player_id: String },

    #[error("team {team_id} lists unknown player {player_id}")]
    UnknownRosterPlayer { team_id: String, player_id: String },

    #[error("pick issuer produced {found} picks for {year}, expected {expected}")]
    PickCountMismatch { year: u16, expected: usize, found: usize },

    #[error("schedule has no games for team {team_id}")]
    ScheduleMissingTeam { team_id: String },

    #[error("schedule generated for {found}, expected {expected}")]
    ScheduleYearMismatch { expected: u16, found: u16 },

    #[error("season {year} is too late to advance")]
    YearOutOfRange { year: u16 },

    #[error("pick issuer produced {stray} picks not dated {year}")]
    PickYearMismatch { year: u16, stray: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TransitionError>;
