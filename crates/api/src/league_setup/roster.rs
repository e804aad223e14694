use tokio::sync::broadcast::{self, error::TryRecvError};
use uuid::Uuid;

use infra::models::TeamRow;

use crate::feeds::{Snapshot, SnapshotFeed};

pub const FEED_CLOSED: &str = "Roster feed closed";

/// A session's private view of the team collection.
///
/// Holds the most recent snapshot and drains pending replacements on
/// [`RosterStore::sync`]. Dropping the store releases the listener.
pub struct RosterStore {
    snapshot: Snapshot<TeamRow>,
    feed: Option<broadcast::Receiver<Snapshot<TeamRow>>>,
    error: Option<String>,
}

impl RosterStore {
    pub fn subscribe(feed: &SnapshotFeed<TeamRow>) -> Self {
        let (snapshot, receiver) = feed.subscribe();
        Self {
            snapshot,
            feed: Some(receiver),
            error: None,
        }
    }

    /// Apply pending snapshots. Returns true when the snapshot changed.
    ///
    /// Once the feed closes the error is recorded and the store keeps
    /// its last snapshot for good.
    pub fn sync(&mut self) -> bool {
        let Some(receiver) = self.feed.as_mut() else {
            return false;
        };

        let mut changed = false;
        loop {
            match receiver.try_recv() {
                Ok(snapshot) => {
                    self.snapshot = snapshot;
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Roster listener lagged; skipping to newest snapshot");
                }
                Err(TryRecvError::Closed) => {
                    tracing::warn!("{FEED_CLOSED}");
                    self.error = Some(FEED_CLOSED.to_string());
                    self.feed = None;
                    break;
                }
            }
        }
        changed
    }

    pub fn teams(&self) -> &[TeamRow] {
        &self.snapshot
    }

    pub fn find(&self, team_id: Uuid) -> Option<&TeamRow> {
        self.snapshot.iter().find(|team| team.id == team_id)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.feed.is_some()
    }
}
