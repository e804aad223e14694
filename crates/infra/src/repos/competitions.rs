use chrono::NaiveDate;
use sqlx::{PgExecutor, Result as SqlxResult};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::{CompetitionRecord, CompetitionRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionKind {
    League,
    Tournament,
}

impl CompetitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionKind::League => "league",
            CompetitionKind::Tournament => "tournament",
        }
    }
}

impl FromStr for CompetitionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "league" => Ok(CompetitionKind::League),
            "tournament" => Ok(CompetitionKind::Tournament),
            _ => Err(format!("Unknown competition type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CompetitionStatus {
    Upcoming,
    Active,
    Completed,
}

impl CompetitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionStatus::Upcoming => "Upcoming",
            CompetitionStatus::Active => "Active",
            CompetitionStatus::Completed => "Completed",
        }
    }
}

impl FromStr for CompetitionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(CompetitionStatus::Upcoming),
            "active" => Ok(CompetitionStatus::Active),
            "completed" => Ok(CompetitionStatus::Completed),
            _ => Err(format!("Unknown competition status: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompetitionData {
    pub name: String,
    pub kind: CompetitionKind,
    pub team_ids: Vec<Uuid>,
    pub start_date: NaiveDate,
    pub status: CompetitionStatus,
    pub division: Option<String>,
}

/// Fields overwritten by an edit. Membership is managed separately.
#[derive(Debug, Clone)]
pub struct UpdateCompetitionData {
    pub name: String,
    pub kind: CompetitionKind,
    pub start_date: Option<NaiveDate>,
    pub status: CompetitionStatus,
    pub division: Option<String>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<CompetitionRecord>> {
    let rows = sqlx::query_as::<_, CompetitionRow>(
        r#"
        SELECT id, name, kind, team_ids, start_date, status, division, created_at, updated_at
        FROM competitions
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(CompetitionRecord::from).collect())
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<CompetitionRecord>> {
    let row = sqlx::query_as::<_, CompetitionRow>(
        r#"
        SELECT id, name, kind, team_ids, start_date, status, division, created_at, updated_at
        FROM competitions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(CompetitionRecord::from))
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateCompetitionData,
) -> SqlxResult<CompetitionRecord> {
    let row = sqlx::query_as::<_, CompetitionRow>(
        r#"
        INSERT INTO competitions (name, kind, team_ids, start_date, status, division)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, kind, team_ids, start_date, status, division, created_at, updated_at
        "#,
    )
    .bind(data.name)
    .bind(data.kind.as_str())
    .bind(data.team_ids)
    .bind(data.start_date)
    .bind(data.status.as_str())
    .bind(data.division)
    .fetch_one(executor)
    .await?;

    Ok(row.into())
}

/// Overwrite the editable fields. Member ids are left untouched so the
/// team count can never drift from the member list.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateCompetitionData,
) -> SqlxResult<Option<CompetitionRecord>> {
    let row = sqlx::query_as::<_, CompetitionRow>(
        r#"
        UPDATE competitions
        SET name = $2,
            kind = $3,
            start_date = $4,
            status = $5,
            division = $6,
            team_ids = COALESCE(team_ids, '{}'),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, kind, team_ids, start_date, status, division, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(data.name)
    .bind(data.kind.as_str())
    .bind(data.start_date)
    .bind(data.status.as_str())
    .bind(data.division)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(CompetitionRecord::from))
}

/// Append a team to the member list unless it is already present.
pub async fn add_team<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    team_id: Uuid,
) -> SqlxResult<Option<CompetitionRecord>> {
    let row = sqlx::query_as::<_, CompetitionRow>(
        r#"
        UPDATE competitions
        SET team_ids = CASE
                WHEN $2::uuid = ANY(COALESCE(team_ids, '{}')) THEN team_ids
                ELSE array_append(COALESCE(team_ids, '{}'), $2::uuid)
            END,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, kind, team_ids, start_date, status, division, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(team_id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(CompetitionRecord::from))
}

pub async fn remove_team<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    team_id: Uuid,
) -> SqlxResult<Option<CompetitionRecord>> {
    let row = sqlx::query_as::<_, CompetitionRow>(
        r#"
        UPDATE competitions
        SET team_ids = array_remove(COALESCE(team_ids, '{}'), $2::uuid),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, kind, team_ids, start_date, status, division, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(team_id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(CompetitionRecord::from))
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM competitions WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
