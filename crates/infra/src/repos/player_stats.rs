use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PlayerStatsRow;

#[derive(Debug, Clone, Default)]
pub struct PlayerStatsData {
    pub matches_played: i32,
    pub legs_won: i32,
    pub legs_lost: i32,
    pub tons: i32,
    pub ton80s: i32,
    pub darts_used: i32,
    pub points_scored: i32,
}

/// Stat lines for a competition, best three-dart average first.
pub async fn list_by_competition<'e>(
    executor: impl PgExecutor<'e>,
    competition_id: Uuid,
) -> SqlxResult<Vec<PlayerStatsRow>> {
    sqlx::query_as::<_, PlayerStatsRow>(
        r#"
        SELECT s.competition_id, s.player_id, p.name AS player_name, p.surname AS player_surname,
               s.matches_played, s.legs_won, s.legs_lost, s.tons, s.ton80s,
               s.darts_used, s.points_scored, s.updated_at
        FROM player_competition_stats s
        JOIN players p ON p.id = s.player_id
        WHERE s.competition_id = $1
        ORDER BY (s.points_scored::float8 * 3 / NULLIF(s.darts_used, 0)) DESC NULLS LAST,
                 p.surname ASC
        "#,
    )
    .bind(competition_id)
    .fetch_all(executor)
    .await
}

/// Replace a player's stat line for a competition.
pub async fn upsert<'e>(
    executor: impl PgExecutor<'e>,
    competition_id: Uuid,
    player_id: Uuid,
    data: PlayerStatsData,
) -> SqlxResult<PlayerStatsRow> {
    sqlx::query_as::<_, PlayerStatsRow>(
        r#"
        WITH saved AS (
            INSERT INTO player_competition_stats
                (competition_id, player_id, matches_played, legs_won, legs_lost,
                 tons, ton80s, darts_used, points_scored)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (competition_id, player_id) DO UPDATE
            SET matches_played = EXCLUDED.matches_played,
                legs_won = EXCLUDED.legs_won,
                legs_lost = EXCLUDED.legs_lost,
                tons = EXCLUDED.tons,
                ton80s = EXCLUDED.ton80s,
                darts_used = EXCLUDED.darts_used,
                points_scored = EXCLUDED.points_scored,
                updated_at = NOW()
            RETURNING *
        )
        SELECT s.competition_id, s.player_id, p.name AS player_name, p.surname AS player_surname,
               s.matches_played, s.legs_won, s.legs_lost, s.tons, s.ton80s,
               s.darts_used, s.points_scored, s.updated_at
        FROM saved s
        JOIN players p ON p.id = s.player_id
        "#,
    )
    .bind(competition_id)
    .bind(player_id)
    .bind(data.matches_played)
    .bind(data.legs_won)
    .bind(data.legs_lost)
    .bind(data.tons)
    .bind(data.ton80s)
    .bind(data.darts_used)
    .bind(data.points_scored)
    .fetch_one(executor)
    .await
}
