use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gql::domains::players::types::Player;
use crate::gql::domains::teams::types::Team;
use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::{players, teams, PlayerFilter};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Club {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    #[graphql(skip)]
    pub uuid: Uuid,
}

impl From<infra::models::ClubRow> for Club {
    fn from(row: infra::models::ClubRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            email: row.email,
            code: row.code,
            created_at: row.created_at,
            uuid: row.id,
        }
    }
}

#[ComplexObject]
impl Club {
    /// Teams registered by this club, oldest first.
    async fn teams(&self, ctx: &Context<'_>) -> Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        let rows = teams::list_by_club(&state.db, self.uuid)
            .await
            .gql_err("Database operation failed")?;
        Ok(rows.into_iter().map(Team::from).collect())
    }

    /// Players registered by this club, oldest first.
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        let rows = players::list(
            &state.db,
            PlayerFilter {
                club_id: Some(self.uuid),
                team_id: None,
            },
        )
        .await
        .gql_err("Database operation failed")?;
        Ok(rows.into_iter().map(Player::from).collect())
    }
}

#[derive(InputObject)]
pub struct ClubInput {
    pub name: String,
    pub email: String,
    /// Unique club code.
    pub code: String,
}
