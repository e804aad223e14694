use async_graphql::{Context, Error, Object, Result};
use uuid::Uuid;

use super::types::{Competition, CreateLeagueInput, UpdateCompetitionInput};
use super::{member_teams, publish_competitions};
use crate::gql::common::helpers::{optional, required};
use crate::gql::domains::teams::types::Team;
use crate::gql::error::{setup_error, ResultExt};
use crate::league_setup::{build_league, same_division, LeagueStore, SelectionSet, SetupError};
use crate::state::AppState;
use infra::repos::{competitions, teams, UpdateCompetitionData};

#[derive(Default)]
pub struct CompetitionQuery;

#[Object]
impl CompetitionQuery {
    /// All competitions ordered by name.
    async fn competitions(&self, ctx: &Context<'_>) -> Result<Vec<Competition>> {
        let state = ctx.data::<AppState>()?;
        let records = competitions::list(&state.db)
            .await
            .gql_err("Database operation failed")?;
        Ok(records.into_iter().map(Competition::from).collect())
    }

    async fn competition(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Competition>> {
        let state = ctx.data::<AppState>()?;
        let record = competitions::get_by_id(&state.db, id)
            .await
            .gql_err("Database operation failed")?;
        Ok(record.map(Competition::from))
    }

    /// Teams taking part in a competition.
    async fn competition_teams(&self, ctx: &Context<'_>, id: Uuid) -> Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        let record = competitions::get_by_id(&state.db, id)
            .await
            .gql_err("Database operation failed")?
            .ok_or_else(|| Error::new("Competition not found"))?;

        let rows = member_teams(&state.db, &record)
            .await
            .gql_err("Database operation failed")?;
        Ok(rows.into_iter().map(Team::from).collect())
    }
}

#[derive(Default)]
pub struct CompetitionMutation;

#[Object]
impl CompetitionMutation {
    /// Create a league from a complete form in one call.
    ///
    /// Every team must exist and play in the chosen division.
    async fn create_league(
        &self,
        ctx: &Context<'_>,
        input: CreateLeagueInput,
    ) -> Result<Competition> {
        let state = ctx.data::<AppState>()?;
        let selection = SelectionSet::from_ids(input.team_ids);
        let league =
            build_league(&input.division, input.start_date, &selection).map_err(setup_error)?;

        let found = teams::get_by_ids(&state.db, league.team_ids())
            .await
            .gql_err("Database operation failed")?;
        for team_id in league.team_ids() {
            let eligible = found
                .iter()
                .any(|team| team.id == *team_id && same_division(&team.division, league.division()));
            if !eligible {
                return Err(setup_error(SetupError::TeamNotAvailable(*team_id)));
            }
        }

        let record = state.db.create_league(&league).await.map_err(|e| {
            tracing::error!("Error adding league: {e}");
            setup_error(SetupError::Store(e.to_string()))
        })?;
        tracing::info!(competition_id = %record.id, teams = league.team_count(), "League created");

        publish_competitions(state).await;
        Ok(record.into())
    }

    /// Overwrite a competition's details. The member list is kept.
    async fn update_competition(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: UpdateCompetitionInput,
    ) -> Result<Competition> {
        let state = ctx.data::<AppState>()?;
        let data = UpdateCompetitionData {
            name: required("Competition name", &input.name)?,
            kind: input.kind.into(),
            start_date: input.start_date,
            status: input.status.into(),
            division: optional(input.division),
        };

        let record = competitions::update(&state.db, id, data)
            .await
            .gql_err("Failed to update competition")?
            .ok_or_else(|| Error::new("Competition not found"))?;

        publish_competitions(state).await;
        Ok(record.into())
    }

    async fn delete_competition(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let deleted = competitions::delete(&state.db, id)
            .await
            .gql_err("Failed to delete competition")?;

        if deleted {
            publish_competitions(state).await;
        }
        Ok(deleted)
    }

    /// Add a team to a competition. Adding a member twice is a no-op.
    async fn add_team_to_competition(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
        team_id: Uuid,
    ) -> Result<Competition> {
        let state = ctx.data::<AppState>()?;
        teams::get_by_id(&state.db, team_id)
            .await
            .gql_err("Database operation failed")?
            .ok_or_else(|| Error::new("Team not found"))?;

        let record = competitions::add_team(&state.db, competition_id, team_id)
            .await
            .gql_err("Failed to add team")?
            .ok_or_else(|| Error::new("Competition not found"))?;

        publish_competitions(state).await;
        Ok(record.into())
    }

    async fn remove_team_from_competition(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
        team_id: Uuid,
    ) -> Result<Competition> {
        let state = ctx.data::<AppState>()?;
        let record = competitions::remove_team(&state.db, competition_id, team_id)
            .await
            .gql_err("Failed to remove team")?
            .ok_or_else(|| Error::new("Competition not found"))?;

        publish_competitions(state).await;
        Ok(record.into())
    }
}
