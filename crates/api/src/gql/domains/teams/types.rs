use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use uuid::Uuid;

use crate::gql::domains::clubs::types::Club;
use crate::gql::loaders::ClubLoader;
use infra::models::TeamRow;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Team {
    pub id: ID,
    pub name: String,
    pub division: String,
    pub club_id: Option<ID>,
    #[graphql(skip)]
    pub club_uuid: Option<Uuid>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            division: row.division,
            club_id: row.club_id.map(Into::into),
            club_uuid: row.club_id,
        }
    }
}

#[ComplexObject]
impl Team {
    /// Owning club, if it still exists.
    async fn club(&self, ctx: &Context<'_>) -> Result<Option<Club>> {
        let Some(club_id) = self.club_uuid else {
            return Ok(None);
        };
        let loader = ctx.data::<DataLoader<ClubLoader>>()?;
        let row = loader
            .load_one(club_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(row.map(Club::from))
    }
}

#[derive(InputObject)]
pub struct TeamInput {
    pub club_id: Option<Uuid>,
    pub name: String,
    /// One of the labels returned by `divisions`.
    pub division: String,
}
