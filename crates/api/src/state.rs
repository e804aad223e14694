use std::sync::Arc;

use sqlx::PgPool;

use infra::models::{CompetitionRecord, TeamRow};

use crate::config::AppConfig;
use crate::feeds::SnapshotFeed;
use crate::league_setup::SetupSessions;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    config: Arc<AppConfig>,
    teams: Arc<SnapshotFeed<TeamRow>>,
    competitions: Arc<SnapshotFeed<CompetitionRecord>>,
    setups: Arc<SetupSessions>,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
            teams: Arc::new(SnapshotFeed::default()),
            competitions: Arc::new(SnapshotFeed::default()),
            setups: Arc::new(SetupSessions::new()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Live team roster.
    pub fn teams(&self) -> &SnapshotFeed<TeamRow> {
        &self.teams
    }

    /// Live competition list, ordered by name.
    pub fn competitions(&self) -> &SnapshotFeed<CompetitionRecord> {
        &self.competitions
    }

    pub fn setups(&self) -> &SetupSessions {
        &self.setups
    }
}
