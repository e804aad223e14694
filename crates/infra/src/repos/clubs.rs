use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ClubRow;

#[derive(Debug, Clone)]
pub struct ClubData {
    pub name: String,
    pub email: String,
    pub code: String,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ClubRow>> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        SELECT id, name, email, code, created_at, updated_at
        FROM clubs
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<ClubRow>> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        SELECT id, name, email, code, created_at, updated_at
        FROM clubs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_ids<'e>(executor: impl PgExecutor<'e>, ids: &[Uuid]) -> SqlxResult<Vec<ClubRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, ClubRow>(
        r#"
        SELECT id, name, email, code, created_at, updated_at
        FROM clubs
        WHERE id = ANY($1::uuid[])
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: ClubData) -> SqlxResult<ClubRow> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        INSERT INTO clubs (name, email, code)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, code, created_at, updated_at
        "#,
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.code)
    .fetch_one(executor)
    .await
}

/// Overwrite every editable field of a club.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: ClubData,
) -> SqlxResult<Option<ClubRow>> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        UPDATE clubs
        SET name = $2,
            email = $3,
            code = $4,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, email, code, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.name)
    .bind(data.email)
    .bind(data.code)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// True when the error is the unique violation on `clubs.code`.
pub fn is_duplicate_code(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint() == Some("clubs_code_key"),
        _ => false,
    }
}
