use async_graphql::ErrorExtensions;

use crate::league_setup::SetupError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
///   - `From<sqlx::Error>` logs the DB detail and shows a sanitized message to clients
///   - `GqlError::new("…")` carries a custom one-off message
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

/// Extension trait that converts any `Result<T, E>` where `E: Display`
/// into `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `clubs::create(&state.db, data).await.gql_err("Failed to register club")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}

/// League setup errors keep their user-facing message and carry a `code`
/// extension so clients can tell an incomplete form from a failed write.
pub fn setup_error(err: SetupError) -> async_graphql::Error {
    let code = match &err {
        SetupError::MissingDivision | SetupError::MissingStartDate | SetupError::NoTeamsSelected => {
            "INCOMPLETE_FORM"
        }
        SetupError::TeamNotAvailable(_) => "TEAM_NOT_AVAILABLE",
        SetupError::SubmissionInProgress => "SUBMISSION_IN_PROGRESS",
        SetupError::SessionNotFound(_) => "NOT_FOUND",
        SetupError::Store(_) => "STORE_FAILURE",
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
