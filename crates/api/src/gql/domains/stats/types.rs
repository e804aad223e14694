use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use infra::models::PlayerStatsRow;

/// One column of the statistics table.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct StatColumn {
    /// Field of `PlayerStatLine` shown in the column.
    pub key: String,
    pub abbreviation: String,
    pub label: String,
}

// (key, abbreviation, label)
const STAT_COLUMNS: [(&str, &str, &str); 9] = [
    ("playerName", "PN", "Player Name"),
    ("matchesPlayed", "MP", "Matches Played"),
    ("legsWon", "LW", "Legs Won"),
    ("legsLost", "LL", "Legs Lost"),
    ("tons", "100+", "100+"),
    ("ton80s", "180", "180s"),
    ("dartsUsed", "DU", "Darts Used"),
    ("winPercentage", "Win%", "Win %"),
    ("average", "Avg", "Average"),
];

/// Columns of the competition statistics table, in display order.
pub fn stat_columns() -> Vec<StatColumn> {
    STAT_COLUMNS
        .iter()
        .map(|(key, abbreviation, label)| StatColumn {
            key: key.to_string(),
            abbreviation: abbreviation.to_string(),
            label: label.to_string(),
        })
        .collect()
}

#[derive(SimpleObject, Clone, Debug)]
pub struct PlayerStatLine {
    pub competition_id: ID,
    pub player_id: ID,
    pub player_name: String,
    pub matches_played: i32,
    pub legs_won: i32,
    pub legs_lost: i32,
    pub tons: i32,
    pub ton80s: i32,
    pub darts_used: i32,
    pub points_scored: i32,
    /// Legs won as a percentage of legs played, one decimal.
    pub win_percentage: f64,
    /// Three-dart average, one decimal.
    pub average: f64,
    pub updated_at: DateTime<Utc>,
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl From<PlayerStatsRow> for PlayerStatLine {
    fn from(row: PlayerStatsRow) -> Self {
        let win_percentage = one_decimal(row.win_percentage());
        let average = one_decimal(row.three_dart_average());
        Self {
            competition_id: row.competition_id.into(),
            player_id: row.player_id.into(),
            player_name: format!("{} {}", row.player_name, row.player_surname),
            matches_played: row.matches_played,
            legs_won: row.legs_won,
            legs_lost: row.legs_lost,
            tons: row.tons,
            ton80s: row.ton80s,
            darts_used: row.darts_used,
            points_scored: row.points_scored,
            win_percentage,
            average,
            updated_at: row.updated_at,
        }
    }
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct PlayerStatsInput {
    pub matches_played: i32,
    pub legs_won: i32,
    pub legs_lost: i32,
    pub tons: i32,
    pub ton80s: i32,
    pub darts_used: i32,
    pub points_scored: i32,
}
