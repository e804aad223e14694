use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TeamRow;

#[derive(Debug, Clone)]
pub struct TeamData {
    pub club_id: Option<Uuid>,
    pub name: String,
    pub division: String,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, club_id, name, division, created_at, updated_at
        FROM teams
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Teams whose division matches ignoring case and surrounding whitespace.
pub async fn list_by_division<'e>(
    executor: impl PgExecutor<'e>,
    division: &str,
) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, club_id, name, division, created_at, updated_at
        FROM teams
        WHERE LOWER(BTRIM(division)) = LOWER(BTRIM($1))
        ORDER BY name ASC
        "#,
    )
    .bind(division)
    .fetch_all(executor)
    .await
}

pub async fn list_by_club<'e>(
    executor: impl PgExecutor<'e>,
    club_id: Uuid,
) -> SqlxResult<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, club_id, name, division, created_at, updated_at
        FROM teams
        WHERE club_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(club_id)
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, club_id, name, division, created_at, updated_at
        FROM teams
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Fetch teams by id, returned in the order of `ids`. Unknown ids are skipped.
pub async fn get_by_ids<'e>(executor: impl PgExecutor<'e>, ids: &[Uuid]) -> SqlxResult<Vec<TeamRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT t.id, t.club_id, t.name, t.division, t.created_at, t.updated_at
        FROM UNNEST($1::uuid[]) WITH ORDINALITY AS wanted(id, ord)
        JOIN teams t ON t.id = wanted.id
        ORDER BY wanted.ord
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: TeamData) -> SqlxResult<TeamRow> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        INSERT INTO teams (club_id, name, division)
        VALUES ($1, $2, $3)
        RETURNING id, club_id, name, division, created_at, updated_at
        "#,
    )
    .bind(data.club_id)
    .bind(data.name)
    .bind(data.division)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: TeamData,
) -> SqlxResult<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        r#"
        UPDATE teams
        SET club_id = $2,
            name = $3,
            division = $4,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, club_id, name, division, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.club_id)
    .bind(data.name)
    .bind(data.division)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
