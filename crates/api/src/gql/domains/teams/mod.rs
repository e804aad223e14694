pub mod resolvers;
pub mod types;

pub use resolvers::{TeamMutation, TeamQuery};

use crate::state::AppState;

/// Reload the team collection and publish it as the new roster snapshot.
/// Errors are logged but not propagated; the previous snapshot stays current.
pub async fn publish_roster(state: &AppState) {
    let refreshed = state
        .teams()
        .refresh(|| infra::repos::teams::list(&state.db))
        .await;
    match refreshed {
        Ok(count) => {
            tracing::debug!(teams = count, "Published team roster");
        }
        Err(e) => {
            tracing::error!("Failed to reload team roster: {e}");
        }
    }
}
