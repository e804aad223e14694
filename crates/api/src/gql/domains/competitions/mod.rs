pub mod resolvers;
pub mod types;

pub use resolvers::{CompetitionMutation, CompetitionQuery};

use infra::db::Db;
use infra::models::{CompetitionRecord, TeamRow};
use infra::repos::{competitions, teams};

use crate::state::AppState;

/// Reload the competitions and publish them as the new list snapshot.
pub async fn publish_competitions(state: &AppState) {
    let refreshed = state
        .competitions()
        .refresh(|| competitions::list(&state.db))
        .await;
    match refreshed {
        Ok(count) => {
            tracing::debug!(competitions = count, "Published competitions");
        }
        Err(e) => {
            tracing::error!("Failed to reload competitions: {e}");
        }
    }
}

/// Member teams of a competition, in member order.
///
/// Competitions saved without member ids fall back to every team of their
/// division. Ids of deleted teams are skipped.
pub async fn member_teams(db: &Db, record: &CompetitionRecord) -> sqlx::Result<Vec<TeamRow>> {
    if !record.team_ids.is_empty() {
        return teams::get_by_ids(db, &record.team_ids).await;
    }
    match record.division.as_deref() {
        Some(division) => teams::list_by_division(db, division).await,
        None => Ok(Vec::new()),
    }
}
