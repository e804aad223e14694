use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use uuid::Uuid;

use infra::models::{CompetitionRecord, TeamRow};

use super::error::SetupError;
use super::gate::LeagueStore;
use super::roster::RosterStore;
use super::session::LeagueSetup;
use crate::feeds::SnapshotFeed;

/// Open league setup forms, keyed by id.
#[derive(Default)]
pub struct SetupSessions {
    sessions: Mutex<HashMap<Uuid, LeagueSetup>>,
}

impl SetupSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an empty form with its own roster subscription.
    pub fn open(&self, roster: &SnapshotFeed<TeamRow>) -> Uuid {
        let session = LeagueSetup::open(RosterStore::subscribe(roster));
        let id = session.id();
        self.sessions.lock().insert(id, session);
        tracing::debug!(setup_id = %id, "League setup opened");
        id
    }

    /// Run `f` against an open form.
    pub fn with<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut LeagueSetup) -> Result<R, SetupError>,
    ) -> Result<R, SetupError> {
        let mut sessions = self.sessions.lock();
        let session = sessions.get_mut(&id).ok_or(SetupError::SessionNotFound(id))?;
        f(session)
    }

    /// Discard a form and its roster subscription.
    pub fn cancel(&self, id: Uuid) -> bool {
        let removed = self.sessions.lock().remove(&id).is_some();
        if removed {
            tracing::debug!(setup_id = %id, "League setup cancelled");
        }
        removed
    }

    /// Submit a form to `store`.
    ///
    /// The store call runs without holding the lock. On success the form
    /// is closed; on failure it returns to the teams-chosen phase with the
    /// error recorded.
    pub async fn submit<S: LeagueStore>(
        &self,
        id: Uuid,
        store: &S,
    ) -> Result<CompetitionRecord, SetupError> {
        let league = self.with(id, |session| session.begin_submit())?;

        match store.create_league(&league).await {
            Ok(record) => {
                self.sessions.lock().remove(&id);
                tracing::info!(
                    setup_id = %id,
                    competition_id = %record.id,
                    teams = league.team_count(),
                    "League created"
                );
                Ok(record)
            }
            Err(e) => {
                tracing::error!(setup_id = %id, "Error adding league: {e}");
                let error = SetupError::Store(e.to_string());
                // The form may have been cancelled meanwhile.
                let _ = self.with(id, |session| {
                    session.fail_submit(error.to_string());
                    Ok(())
                });
                Err(error)
            }
        }
    }

    /// Drop forms untouched for longer than `max_idle`. Forms waiting on
    /// the store are kept.
    pub fn reap_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, session| {
            session.phase() == super::session::SetupPhase::Submitting
                || session.idle_for() <= max_idle
        });
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
