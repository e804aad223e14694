use async_graphql::{Context, Error, Object, Result};
use uuid::Uuid;

use super::types::{stat_columns, PlayerStatLine, PlayerStatsInput, StatColumn};
use crate::gql::error::ResultExt;
use crate::state::AppState;
use infra::repos::{competitions, player_stats, players, PlayerStatsData};

#[derive(Default)]
pub struct StatsQuery;

#[Object]
impl StatsQuery {
    /// Column layout of the statistics table.
    async fn competition_stat_columns(&self) -> Vec<StatColumn> {
        stat_columns()
    }

    /// Player stat lines of a competition, best average first.
    async fn competition_stats(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
    ) -> Result<Vec<PlayerStatLine>> {
        let state = ctx.data::<AppState>()?;
        let rows = player_stats::list_by_competition(&state.db, competition_id)
            .await
            .gql_err("Database operation failed")?;
        Ok(rows.into_iter().map(PlayerStatLine::from).collect())
    }
}

#[derive(Default)]
pub struct StatsMutation;

#[Object]
impl StatsMutation {
    /// Replace a player's stat line for a competition.
    async fn record_player_stats(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
        player_id: Uuid,
        input: PlayerStatsInput,
    ) -> Result<PlayerStatLine> {
        let state = ctx.data::<AppState>()?;
        let data = stats_data(input)?;

        competitions::get_by_id(&state.db, competition_id)
            .await
            .gql_err("Database operation failed")?
            .ok_or_else(|| Error::new("Competition not found"))?;
        players::get_by_id(&state.db, player_id)
            .await
            .gql_err("Database operation failed")?
            .ok_or_else(|| Error::new("Player not found"))?;

        let row = player_stats::upsert(&state.db, competition_id, player_id, data)
            .await
            .gql_err("Failed to record stats")?;
        Ok(row.into())
    }
}

fn stats_data(input: PlayerStatsInput) -> Result<PlayerStatsData> {
    let counters = [
        ("matchesPlayed", input.matches_played),
        ("legsWon", input.legs_won),
        ("legsLost", input.legs_lost),
        ("tons", input.tons),
        ("ton80s", input.ton80s),
        ("dartsUsed", input.darts_used),
        ("pointsScored", input.points_scored),
    ];
    if let Some((field, _)) = counters.iter().find(|(_, value)| *value < 0) {
        return Err(Error::new(format!("{field} cannot be negative")));
    }

    Ok(PlayerStatsData {
        matches_played: input.matches_played,
        legs_won: input.legs_won,
        legs_lost: input.legs_lost,
        tons: input.tons,
        ton80s: input.ton80s,
        darts_used: input.darts_used,
        points_scored: input.points_scored,
    })
}
