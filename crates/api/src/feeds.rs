use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{broadcast, Mutex};

pub type Snapshot<T> = Arc<Vec<T>>;

/// Latest full snapshot of a collection plus a channel of replacements.
///
/// Subscribers never see partial updates: each event is a complete,
/// immutable snapshot that supersedes the previous one.
pub struct SnapshotFeed<T> {
    latest: RwLock<Snapshot<T>>,
    sender: broadcast::Sender<Snapshot<T>>,
    reload: Mutex<()>,
}

impl<T> SnapshotFeed<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            latest: RwLock::new(Arc::new(Vec::new())),
            sender: broadcast::channel(capacity).0,
            reload: Mutex::new(()),
        }
    }

    pub fn current(&self) -> Snapshot<T> {
        self.latest.read().clone()
    }

    /// Replace the snapshot and notify every subscriber.
    pub fn publish(&self, items: Vec<T>) {
        let snapshot = Arc::new(items);
        let mut latest = self.latest.write();
        *latest = snapshot.clone();
        // No subscribers is not an error.
        let _ = self.sender.send(snapshot);
    }

    /// Reload the collection with `load` and publish the result.
    ///
    /// Refreshes run one at a time, from load through publish, so a load
    /// that started earlier can never replace a newer snapshot. On error
    /// the current snapshot is kept. Returns the published item count.
    pub async fn refresh<F, Fut, E>(&self, load: F) -> Result<usize, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        let _reload = self.reload.lock().await;
        let items = load().await?;
        let count = items.len();
        self.publish(items);
        Ok(count)
    }

    /// Current snapshot and a receiver for every later one.
    pub fn subscribe(&self) -> (Snapshot<T>, broadcast::Receiver<Snapshot<T>>) {
        let latest = self.latest.read();
        (latest.clone(), self.sender.subscribe())
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T> Default for SnapshotFeed<T> {
    fn default() -> Self {
        Self::new(64)
    }
}
