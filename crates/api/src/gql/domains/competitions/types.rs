use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID};
use chrono::NaiveDate;
use uuid::Uuid;

use super::member_teams;
use crate::gql::domains::teams::types::Team;
use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::models::CompetitionRecord;
use infra::repos::{CompetitionKind, CompetitionStatus as StoredStatus};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum CompetitionType {
    League,
    Tournament,
}

impl From<CompetitionKind> for CompetitionType {
    fn from(kind: CompetitionKind) -> Self {
        match kind {
            CompetitionKind::League => CompetitionType::League,
            CompetitionKind::Tournament => CompetitionType::Tournament,
        }
    }
}

impl From<CompetitionType> for CompetitionKind {
    fn from(kind: CompetitionType) -> Self {
        match kind {
            CompetitionType::League => CompetitionKind::League,
            CompetitionType::Tournament => CompetitionKind::Tournament,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum CompetitionStatus {
    Upcoming,
    Active,
    Completed,
}

impl From<StoredStatus> for CompetitionStatus {
    fn from(status: StoredStatus) -> Self {
        match status {
            StoredStatus::Upcoming => CompetitionStatus::Upcoming,
            StoredStatus::Active => CompetitionStatus::Active,
            StoredStatus::Completed => CompetitionStatus::Completed,
        }
    }
}

impl From<CompetitionStatus> for StoredStatus {
    fn from(status: CompetitionStatus) -> Self {
        match status {
            CompetitionStatus::Upcoming => StoredStatus::Upcoming,
            CompetitionStatus::Active => StoredStatus::Active,
            CompetitionStatus::Completed => StoredStatus::Completed,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Competition {
    pub id: ID,
    pub name: String,
    #[graphql(name = "type")]
    pub kind: CompetitionType,
    /// Number of member teams.
    pub teams: i32,
    pub team_ids: Vec<ID>,
    pub start_date: Option<NaiveDate>,
    pub status: CompetitionStatus,
    pub division: Option<String>,
    #[graphql(skip)]
    pub record: CompetitionRecord,
}

impl From<CompetitionRecord> for Competition {
    fn from(record: CompetitionRecord) -> Self {
        Self {
            id: record.id.into(),
            name: record.name.clone(),
            kind: record.kind.into(),
            teams: count_field(record.team_count()),
            team_ids: record.team_ids.iter().map(|id| (*id).into()).collect(),
            start_date: record.start_date,
            status: record.status.into(),
            division: record.division.clone(),
            record,
        }
    }
}

/// GraphQL `Int` is 32-bit; larger counts saturate.
fn count_field(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

#[ComplexObject]
impl Competition {
    /// Member teams, resolved like `competitionTeams`.
    async fn members(&self, ctx: &Context<'_>) -> Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        let rows = member_teams(&state.db, &self.record)
            .await
            .gql_err("Database operation failed")?;
        Ok(rows.into_iter().map(Team::from).collect())
    }
}

/// A complete league form, for clients that keep their own form state.
#[derive(InputObject)]
pub struct CreateLeagueInput {
    pub division: String,
    pub start_date: Option<NaiveDate>,
    pub team_ids: Vec<Uuid>,
}

/// Full overwrite of a competition. Members are edited with
/// `addTeamToCompetition` and `removeTeamFromCompetition`.
#[derive(InputObject)]
pub struct UpdateCompetitionInput {
    pub name: String,
    #[graphql(name = "type")]
    pub kind: CompetitionType,
    pub start_date: Option<NaiveDate>,
    pub status: CompetitionStatus,
    pub division: Option<String>,
}
