use api::gql::domains::stats::types::PlayerStatLine;
use chrono::Utc;
use infra::models::PlayerStatsRow;
use uuid::Uuid;

fn stat_row(legs_won: i32, legs_lost: i32, darts_used: i32, points_scored: i32) -> PlayerStatsRow {
    PlayerStatsRow {
        competition_id: Uuid::new_v4(),
        player_id: Uuid::new_v4(),
        player_name: "Fallon".to_string(),
        player_surname: "Sherrock".to_string(),
        matches_played: 10,
        legs_won,
        legs_lost,
        tons: 12,
        ton80s: 3,
        darts_used,
        points_scored,
        updated_at: Utc::now(),
    }
}

#[test]
fn test_rates_are_zero_without_legs_or_darts() {
    let row = stat_row(0, 0, 0, 0);

    assert_eq!(row.win_percentage(), 0.0);
    assert_eq!(row.three_dart_average(), 0.0);

    let line = PlayerStatLine::from(row);
    assert_eq!(line.win_percentage, 0.0);
    assert_eq!(line.average, 0.0);
}

#[test]
fn test_rates_from_legs_and_darts() {
    let row = stat_row(25, 15, 450, 9780);

    assert_eq!(row.win_percentage(), 62.5);
    assert!((row.three_dart_average() - 65.2).abs() < 1e-9);
}

#[test]
fn test_stat_line_rounds_to_one_decimal() {
    // 2 of 3 legs, 1001 points in 45 darts
    let line = PlayerStatLine::from(stat_row(2, 1, 45, 1001));

    assert_eq!(line.win_percentage, 66.7);
    assert_eq!(line.average, 66.7);
    assert_eq!(line.player_name, "Fallon Sherrock");
    assert_eq!(line.legs_won, 2);
    assert_eq!(line.darts_used, 45);
}

#[test]
fn test_win_percentage_with_largest_leg_counts() {
    let row = stat_row(i32::MAX, 1, 0, 0);

    let pct = row.win_percentage();
    assert!(pct > 99.99 && pct < 100.0, "unexpected win percentage {pct}");

    let both_max = stat_row(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
    assert_eq!(both_max.win_percentage(), 50.0);
    assert_eq!(both_max.three_dart_average(), 3.0);

    let line = PlayerStatLine::from(stat_row(i32::MAX, 1, 0, 0));
    assert_eq!(line.win_percentage, 100.0);
}
