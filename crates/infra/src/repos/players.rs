use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PlayerRow;

#[derive(Debug, Clone)]
pub struct PlayerData {
    pub club_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub league_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub club_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: PlayerFilter,
) -> SqlxResult<Vec<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, club_id, team_id, name, surname, phone, league_id,
               is_on_loan, original_team_id, loaned_to_team_id, created_at, updated_at
        FROM players
        WHERE ($1::uuid IS NULL OR club_id = $1)
          AND ($2::uuid IS NULL OR team_id = $2)
        ORDER BY created_at ASC
        "#,
    )
    .bind(filter.club_id)
    .bind(filter.team_id)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, club_id, team_id, name, surname, phone, league_id,
               is_on_loan, original_team_id, loaned_to_team_id, created_at, updated_at
        FROM players
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// New players are never on loan; the loan columns keep their defaults.
pub async fn create<'e>(executor: impl PgExecutor<'e>, data: PlayerData) -> SqlxResult<PlayerRow> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        INSERT INTO players (club_id, team_id, name, surname, phone, league_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, club_id, team_id, name, surname, phone, league_id,
                  is_on_loan, original_team_id, loaned_to_team_id, created_at, updated_at
        "#,
    )
    .bind(data.club_id)
    .bind(data.team_id)
    .bind(data.name)
    .bind(data.surname)
    .bind(data.phone)
    .bind(data.league_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: PlayerData,
) -> SqlxResult<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        UPDATE players
        SET club_id = $2,
            team_id = $3,
            name = $4,
            surname = $5,
            phone = $6,
            league_id = $7,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, club_id, team_id, name, surname, phone, league_id,
                  is_on_loan, original_team_id, loaned_to_team_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.club_id)
    .bind(data.team_id)
    .bind(data.name)
    .bind(data.surname)
    .bind(data.phone)
    .bind(data.league_id)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
