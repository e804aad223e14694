use async_graphql::{Context, Error, Object, Result};
use uuid::Uuid;

use super::types::{Club, ClubInput};
use crate::gql::common::helpers::required;
use crate::gql::domains::teams::publish_roster;
use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use infra::repos::{clubs, ClubData};

#[derive(Default)]
pub struct ClubQuery;

#[Object]
impl ClubQuery {
    /// All clubs, alphabetically.
    async fn clubs(&self, ctx: &Context<'_>) -> Result<Vec<Club>> {
        let state = ctx.data::<AppState>()?;
        let rows = clubs::list(&state.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Club::from).collect())
    }

    async fn club(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Club>> {
        let state = ctx.data::<AppState>()?;
        let row = clubs::get_by_id(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Club::from))
    }
}

#[derive(Default)]
pub struct ClubMutation;

#[Object]
impl ClubMutation {
    /// Register a club. Name, email and code are all required.
    async fn register_club(&self, ctx: &Context<'_>, input: ClubInput) -> Result<Club> {
        let state = ctx.data::<AppState>()?;
        let data = club_data(input)?;

        let row = clubs::create(&state.db, data).await.map_err(club_write_error)?;
        tracing::info!(club_id = %row.id, "Club registered");
        Ok(row.into())
    }

    /// Overwrite a club's name, email and code.
    async fn update_club(&self, ctx: &Context<'_>, id: Uuid, input: ClubInput) -> Result<Club> {
        let state = ctx.data::<AppState>()?;
        let data = club_data(input)?;

        let row = clubs::update(&state.db, id, data)
            .await
            .map_err(club_write_error)?
            .ok_or_else(|| Error::new("Club not found"))?;
        Ok(row.into())
    }

    /// Delete a club. Its teams and players are kept, detached from the club.
    async fn delete_club(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let deleted = clubs::delete(&state.db, id)
            .await
            .gql_err("Failed to delete club")?;

        // Detached teams change the roster
        if deleted {
            publish_roster(state).await;
        }
        Ok(deleted)
    }
}

fn club_data(input: ClubInput) -> Result<ClubData> {
    let name = required("Club name", &input.name)?;
    let email = required("Email", &input.email)?;
    let code = required("Club code", &input.code)?;

    if !email.contains('@') {
        return Err(Error::new("Email must be a valid email address"));
    }

    Ok(ClubData { name, email, code })
}

fn club_write_error(e: sqlx::Error) -> Error {
    if clubs::is_duplicate_code(&e) {
        return Error::new("Club code already in use");
    }
    GqlError::from(e).into()
}
