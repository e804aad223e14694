use async_graphql::{Context, Error, Object, Result};
use uuid::Uuid;

use super::publish_roster;
use super::types::{Team, TeamInput};
use crate::gql::common::helpers::required;
use crate::gql::error::ResultExt;
use crate::league_setup::{filter_by_division, Division};
use crate::state::AppState;
use infra::repos::{clubs, teams, TeamData};

#[derive(Default)]
pub struct TeamQuery;

#[Object]
impl TeamQuery {
    /// All teams, or the teams of one division (case and whitespace are ignored).
    async fn teams(&self, ctx: &Context<'_>, division: Option<String>) -> Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        let rows = teams::list(&state.db)
            .await
            .gql_err("Database operation failed")?;

        let rows = match division {
            Some(division) => filter_by_division(&rows, &division),
            None => rows,
        };
        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn team(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Team>> {
        let state = ctx.data::<AppState>()?;
        let row = teams::get_by_id(&state.db, id)
            .await
            .gql_err("Database operation failed")?;
        Ok(row.map(Team::from))
    }

    /// The fixed division vocabulary, in display order.
    async fn divisions(&self) -> Vec<String> {
        Division::ALL.iter().map(|d| d.label().to_string()).collect()
    }
}

#[derive(Default)]
pub struct TeamMutation;

#[Object]
impl TeamMutation {
    async fn create_team(&self, ctx: &Context<'_>, input: TeamInput) -> Result<Team> {
        let state = ctx.data::<AppState>()?;
        let data = team_data(state, input).await?;

        let row = teams::create(&state.db, data)
            .await
            .gql_err("Failed to create team")?;
        tracing::info!(team_id = %row.id, division = %row.division, "Team created");

        publish_roster(state).await;
        Ok(row.into())
    }

    /// Overwrite a team's club, name and division.
    async fn update_team(&self, ctx: &Context<'_>, id: Uuid, input: TeamInput) -> Result<Team> {
        let state = ctx.data::<AppState>()?;
        let data = team_data(state, input).await?;

        let row = teams::update(&state.db, id, data)
            .await
            .gql_err("Failed to update team")?
            .ok_or_else(|| Error::new("Team not found"))?;

        publish_roster(state).await;
        Ok(row.into())
    }

    /// Delete a team. Competitions keep its id in their member lists.
    async fn delete_team(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let deleted = teams::delete(&state.db, id)
            .await
            .gql_err("Failed to delete team")?;

        if deleted {
            publish_roster(state).await;
        }
        Ok(deleted)
    }
}

async fn team_data(state: &AppState, input: TeamInput) -> Result<TeamData> {
    let name = required("Team name", &input.name)?;
    let division = Division::parse(&input.division)
        .ok_or_else(|| Error::new(format!("Unknown division: {}", input.division.trim())))?;

    if let Some(club_id) = input.club_id {
        clubs::get_by_id(&state.db, club_id)
            .await
            .gql_err("Database operation failed")?
            .ok_or_else(|| Error::new("Club not found"))?;
    }

    Ok(TeamData {
        club_id: input.club_id,
        name,
        division: division.label().to_string(),
    })
}
