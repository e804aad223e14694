use async_graphql::dataloader::Loader;
use infra::{
    db::Db,
    models::{ClubRow, TeamRow},
    repos::{clubs, teams},
};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

#[derive(Clone)]
pub struct ClubLoader {
    pool: Db,
}

impl ClubLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for ClubLoader {
    type Value = ClubRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            let rows = clubs::get_by_ids(&pool, &ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// TeamLoader - batch load teams by ID
#[derive(Clone)]
pub struct TeamLoader {
    pool: Db,
}

impl TeamLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for TeamLoader {
    type Value = TeamRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            let rows = teams::get_by_ids(&pool, &ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}
