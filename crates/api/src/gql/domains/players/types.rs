use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use uuid::Uuid;

use crate::gql::domains::teams::types::Team;
use crate::gql::loaders::TeamLoader;
use infra::models::PlayerRow;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Player {
    pub id: ID,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub league_id: Option<String>,
    pub club_id: Option<ID>,
    pub team_id: Option<ID>,
    pub is_on_loan: bool,
    pub original_team_id: Option<ID>,
    pub loaned_to_team_id: Option<ID>,
    #[graphql(skip)]
    pub team_uuid: Option<Uuid>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            surname: row.surname,
            phone: row.phone,
            league_id: row.league_id,
            club_id: row.club_id.map(Into::into),
            team_id: row.team_id.map(Into::into),
            is_on_loan: row.is_on_loan,
            original_team_id: row.original_team_id.map(Into::into),
            loaned_to_team_id: row.loaned_to_team_id.map(Into::into),
            team_uuid: row.team_id,
        }
    }
}

#[ComplexObject]
impl Player {
    /// Current team.
    async fn team(&self, ctx: &Context<'_>) -> Result<Option<Team>> {
        let Some(team_id) = self.team_uuid else {
            return Ok(None);
        };
        let loader = ctx.data::<DataLoader<TeamLoader>>()?;
        let row = loader
            .load_one(team_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(row.map(Team::from))
    }
}

#[derive(InputObject, Clone)]
pub struct PlayerInput {
    /// Defaults to the team's club when a team is given.
    pub club_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub league_id: Option<String>,
}

#[derive(InputObject, Clone)]
pub struct TeamPlayerInput {
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub league_id: Option<String>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct PlayerFailure {
    /// Position of the failed entry in the request.
    pub index: i32,
    pub name: String,
    pub message: String,
}

/// Outcome of a bulk registration. Entries before a failure stay written.
#[derive(SimpleObject, Clone, Debug)]
pub struct AddPlayersResult {
    pub created: Vec<Player>,
    pub failures: Vec<PlayerFailure>,
}
