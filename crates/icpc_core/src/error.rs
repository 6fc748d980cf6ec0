use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContestError {
    #[error("duplicated team name")]
    DuplicateTeam,

    #[error("competition has started")]
    AlreadyStarted,

    #[error("scoreboard has been frozen")]
    AlreadyFrozen,

    #[error("scoreboard has not been frozen")]
    NotFrozen,

    #[error("cannot find the team: {name}")]
    TeamNotFound { name: String },
}

impl ContestError {
    /// Whether the rejection concerns an unknown identity rather than a
    /// state precondition. Queries report these differently.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContestError::TeamNotFound { .. })
    }
}

pub type ContestResult<T> = std::result::Result<T, ContestError>;
