use async_graphql::{Context, Result, Subscription};
use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};

use crate::feeds::{Snapshot, SnapshotFeed};
use crate::gql::domains::competitions::types::Competition;
use crate::gql::domains::teams::types::Team;
use crate::state::AppState;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// The full team roster, then every replacement snapshot.
    async fn team_roster(&self, ctx: &Context<'_>) -> Result<impl Stream<Item = Vec<Team>>> {
        let state = ctx.data::<AppState>()?;
        Ok(snapshots(state.teams())
            .map(|snapshot| snapshot.iter().cloned().map(Team::from).collect()))
    }

    /// All competitions ordered by name, then every replacement snapshot.
    async fn competitions(
        &self,
        ctx: &Context<'_>,
    ) -> Result<impl Stream<Item = Vec<Competition>>> {
        let state = ctx.data::<AppState>()?;
        Ok(snapshots(state.competitions())
            .map(|snapshot| snapshot.iter().cloned().map(Competition::from).collect()))
    }
}

/// Current snapshot followed by each later one. A lagging subscriber
/// skips straight to the newest snapshot.
fn snapshots<T>(feed: &SnapshotFeed<T>) -> impl Stream<Item = Snapshot<T>>
where
    T: Send + Sync + 'static,
{
    let (initial, receiver) = feed.subscribe();
    let mut updates = BroadcastStream::new(receiver);

    async_stream::stream! {
        yield initial;
        while let Some(update) = updates.next().await {
            match update {
                Ok(snapshot) => {
                    yield snapshot;
                }
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Subscriber lagged; waiting for newest snapshot");
                }
            }
        }
    }
}
