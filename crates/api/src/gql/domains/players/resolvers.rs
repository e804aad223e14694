use async_graphql::{Context, Error, Object, Result};
use uuid::Uuid;

use super::types::{AddPlayersResult, Player, PlayerFailure, PlayerInput, TeamPlayerInput};
use crate::gql::common::helpers::{optional, required};
use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::{players, teams, PlayerData, PlayerFilter};

#[derive(Default)]
pub struct PlayerQuery;

#[Object]
impl PlayerQuery {
    /// Players, optionally narrowed to a club and/or a team.
    async fn players(
        &self,
        ctx: &Context<'_>,
        club_id: Option<Uuid>,
        team_id: Option<Uuid>,
    ) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        let rows = players::list(&state.db, PlayerFilter { club_id, team_id })
            .await
            .gql_err("Database operation failed")?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn player(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Player>> {
        let state = ctx.data::<AppState>()?;
        let row = players::get_by_id(&state.db, id)
            .await
            .gql_err("Database operation failed")?;
        Ok(row.map(Player::from))
    }
}

#[derive(Default)]
pub struct PlayerMutation;

#[Object]
impl PlayerMutation {
    async fn create_player(&self, ctx: &Context<'_>, input: PlayerInput) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let data = player_data(state, input).await?;

        let row = players::create(&state.db, data)
            .await
            .gql_err("Failed to create player")?;
        Ok(row.into())
    }

    /// Overwrite a player's details. Loan fields are not editable.
    async fn update_player(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        input: PlayerInput,
    ) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let data = player_data(state, input).await?;

        let row = players::update(&state.db, id, data)
            .await
            .gql_err("Failed to update player")?
            .ok_or_else(|| Error::new("Player not found"))?;
        Ok(row.into())
    }

    async fn delete_player(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        players::delete(&state.db, id)
            .await
            .gql_err("Failed to delete player")
    }

    /// Register several players to one team.
    ///
    /// Each player is written on its own; a failed entry is logged and
    /// reported, and the remaining entries are still attempted.
    async fn add_players_to_team(
        &self,
        ctx: &Context<'_>,
        team_id: Uuid,
        #[graphql(name = "players")] entries: Vec<TeamPlayerInput>,
    ) -> Result<AddPlayersResult> {
        let state = ctx.data::<AppState>()?;
        let team = teams::get_by_id(&state.db, team_id)
            .await
            .gql_err("Database operation failed")?
            .ok_or_else(|| Error::new("Team not found"))?;

        let mut created = Vec::new();
        let mut failures = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            let label = format!("{} {}", entry.name.trim(), entry.surname.trim());
            let result = async {
                let data = PlayerData {
                    club_id: team.club_id,
                    team_id: Some(team.id),
                    name: required("Player name", &entry.name)?,
                    surname: required("Surname", &entry.surname)?,
                    phone: optional(entry.phone),
                    league_id: optional(entry.league_id),
                };
                players::create(&state.db, data)
                    .await
                    .gql_err("Failed to create player")
            }
            .await;

            match result {
                Ok(row) => created.push(Player::from(row)),
                Err(e) => {
                    tracing::error!(team_id = %team.id, index, "Error adding player: {}", e.message);
                    failures.push(PlayerFailure {
                        index: index as i32,
                        name: label,
                        message: e.message,
                    });
                }
            }
        }

        Ok(AddPlayersResult { created, failures })
    }
}

async fn player_data(state: &AppState, input: PlayerInput) -> Result<PlayerData> {
    let name = required("Player name", &input.name)?;
    let surname = required("Surname", &input.surname)?;

    let mut club_id = input.club_id;
    if let Some(team_id) = input.team_id {
        let team = teams::get_by_id(&state.db, team_id)
            .await
            .gql_err("Database operation failed")?
            .ok_or_else(|| Error::new("Team not found"))?;
        club_id = club_id.or(team.club_id);
    }

    Ok(PlayerData {
        club_id,
        team_id: input.team_id,
        name,
        surname,
        phone: optional(input.phone),
        league_id: optional(input.league_id),
    })
}
