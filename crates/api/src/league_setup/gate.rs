use std::future::Future;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use infra::db::Db;
use infra::models::CompetitionRecord;
use infra::repos::competitions::{self, CompetitionKind, CompetitionStatus, CreateCompetitionData};

use super::error::SetupError;
use super::selection::SelectionSet;

/// The create request for a new league, as handed to the store.
///
/// Only [`build_league`] constructs one, so `teams` always equals the
/// number of member ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeague {
    name: String,
    #[serde(rename = "type")]
    kind: CompetitionKind,
    teams: usize,
    team_ids: Vec<Uuid>,
    start_date: NaiveDate,
    status: CompetitionStatus,
    division: String,
}

impl NewLeague {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team_ids(&self) -> &[Uuid] {
        &self.team_ids
    }

    pub fn team_count(&self) -> usize {
        self.teams
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn division(&self) -> &str {
        &self.division
    }

    pub fn to_create_data(&self) -> CreateCompetitionData {
        CreateCompetitionData {
            name: self.name.clone(),
            kind: self.kind,
            team_ids: self.team_ids.clone(),
            start_date: self.start_date,
            status: self.status,
            division: Some(self.division.clone()),
        }
    }
}

/// Check that division, start date and at least one team are present.
pub fn validate(
    division: &str,
    start_date: Option<NaiveDate>,
    selection: &SelectionSet,
) -> Result<NaiveDate, SetupError> {
    if division.trim().is_empty() {
        return Err(SetupError::MissingDivision);
    }
    let start_date = start_date.ok_or(SetupError::MissingStartDate)?;
    if selection.is_empty() {
        return Err(SetupError::NoTeamsSelected);
    }
    Ok(start_date)
}

/// Validate the form and shape the create request.
pub fn build_league(
    division: &str,
    start_date: Option<NaiveDate>,
    selection: &SelectionSet,
) -> Result<NewLeague, SetupError> {
    let start_date = validate(division, start_date, selection)?;
    let division = division.trim().to_string();

    Ok(NewLeague {
        name: format!("{division} League"),
        kind: CompetitionKind::League,
        teams: selection.len(),
        team_ids: selection.ids().to_vec(),
        start_date,
        status: CompetitionStatus::Upcoming,
        division,
    })
}

/// Destination of league create requests.
pub trait LeagueStore {
    type Error: std::fmt::Display;

    fn create_league(
        &self,
        league: &NewLeague,
    ) -> impl Future<Output = Result<CompetitionRecord, Self::Error>> + Send;
}

impl LeagueStore for Db {
    type Error = sqlx::Error;

    fn create_league(
        &self,
        league: &NewLeague,
    ) -> impl Future<Output = Result<CompetitionRecord, Self::Error>> + Send {
        let pool = self.clone();
        let data = league.to_create_data();
        async move { competitions::create(&pool, data).await }
    }
}
