use crate::repos::competitions::{CompetitionKind, CompetitionStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ClubRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: Uuid,
    pub club_id: Option<Uuid>,
    pub name: String,
    pub division: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: Uuid,
    pub club_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub league_id: Option<String>,
    pub is_on_loan: bool,
    pub original_team_id: Option<Uuid>,
    pub loaned_to_team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Competition as stored. Rows written by older clients may lack any of the
/// optional columns; use [`CompetitionRecord`] everywhere else.
#[derive(Debug, Clone, FromRow)]
pub struct CompetitionRow {
    pub id: Uuid,
    pub name: String,
    pub kind: Option<String>,
    pub team_ids: Option<Vec<Uuid>>,
    pub start_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub division: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Competition with every default resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRecord {
    pub id: Uuid,
    pub name: String,
    pub kind: CompetitionKind,
    pub team_ids: Vec<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub status: CompetitionStatus,
    pub division: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompetitionRecord {
    /// Number of member teams. Always derived from the member list.
    pub fn team_count(&self) -> usize {
        self.team_ids.len()
    }
}

impl From<CompetitionRow> for CompetitionRecord {
    fn from(row: CompetitionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            kind: row
                .kind
                .and_then(|k| k.parse().ok())
                .unwrap_or(CompetitionKind::League),
            team_ids: row.team_ids.unwrap_or_default(),
            start_date: row.start_date,
            status: row
                .status
                .and_then(|s| s.parse().ok())
                .unwrap_or(CompetitionStatus::Upcoming),
            division: row.division.filter(|d| !d.trim().is_empty()),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerStatsRow {
    pub competition_id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub player_surname: String,
    pub matches_played: i32,
    pub legs_won: i32,
    pub legs_lost: i32,
    pub tons: i32,
    pub ton80s: i32,
    pub darts_used: i32,
    pub points_scored: i32,
    pub updated_at: DateTime<Utc>,
}

impl PlayerStatsRow {
    /// Percentage of legs won, 0 when no legs were played.
    pub fn win_percentage(&self) -> f64 {
        let played = f64::from(self.legs_won) + f64::from(self.legs_lost);
        if played == 0.0 {
            return 0.0;
        }
        f64::from(self.legs_won) * 100.0 / played
    }

    /// Three-dart average.
    pub fn three_dart_average(&self) -> f64 {
        if self.darts_used == 0 {
            return 0.0;
        }
        f64::from(self.points_scored) * 3.0 / f64::from(self.darts_used)
    }
}
