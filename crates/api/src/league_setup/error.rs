use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("Please choose a division")]
    MissingDivision,

    #[error("Please choose a start date")]
    MissingStartDate,

    #[error("Please select at least one team")]
    NoTeamsSelected,

    #[error("Team {0} is not available in the selected division")]
    TeamNotAvailable(Uuid),

    #[error("This league is already being created")]
    SubmissionInProgress,

    #[error("League setup {0} not found")]
    SessionNotFound(Uuid),

    #[error("Failed to create league. Please try again.")]
    Store(String),
}
