//! Store-backed tests. Run with a disposable database:
//! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`

mod common;

use async_graphql::Variables;
use common::*;
use infra::repos::{competitions, CompetitionKind, CompetitionStatus, CreateCompetitionData};
use serde_json::{json, Value};

fn data(response: async_graphql::Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "Request should succeed: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_register_and_update_club() {
    let state = setup_test_db().await;
    let schema = test_schema(&state);
    let code = format!("C{}", unique_suffix());

    let registered = data(
        execute_graphql(
            &schema,
            r#"
                mutation Register($input: ClubInput!) {
                    registerClub(input: $input) { id name code }
                }
            "#,
            Some(Variables::from_json(json!({
                "input": { "name": " Red Lion ", "email": "lion@test.com", "code": code }
            }))),
        )
        .await,
    );
    assert_eq!(registered["registerClub"]["name"], "Red Lion");
    let club_id = registered["registerClub"]["id"].as_str().unwrap().to_string();

    // Duplicate code is refused
    let duplicate = execute_graphql(
        &schema,
        r#"
            mutation Register($input: ClubInput!) {
                registerClub(input: $input) { id }
            }
        "#,
        Some(Variables::from_json(json!({
            "input": { "name": "Copy", "email": "copy@test.com", "code": code }
        }))),
    )
    .await;
    assert_eq!(duplicate.errors[0].message, "Club code already in use");

    let updated = data(
        execute_graphql(
            &schema,
            r#"
                mutation Update($id: UUID!, $input: ClubInput!) {
                    updateClub(id: $id, input: $input) { name email }
                }
            "#,
            Some(Variables::from_json(json!({
                "id": club_id,
                "input": { "name": "Red Lion Inn", "email": "inn@test.com", "code": code }
            }))),
        )
        .await,
    );
    assert_eq!(updated["updateClub"]["name"], "Red Lion Inn");
    assert_eq!(updated["updateClub"]["email"], "inn@test.com");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_team_writes_publish_roster() {
    let state = setup_test_db().await;
    let schema = test_schema(&state);
    let club_id = create_test_club(&state, "Roster Club").await;
    let name = format!("Roster Team {}", unique_suffix());

    let created = data(
        execute_graphql(
            &schema,
            r#"
                mutation Create($input: TeamInput!) {
                    createTeam(input: $input) { id division club { id } }
                }
            "#,
            Some(Variables::from_json(json!({
                "input": { "clubId": club_id.to_string(), "name": name, "division": "premier" }
            }))),
        )
        .await,
    );
    // Stored with the canonical label
    assert_eq!(created["createTeam"]["division"], "Premier");
    assert_eq!(created["createTeam"]["club"]["id"], club_id.to_string());

    let team_id = created["createTeam"]["id"].as_str().unwrap();
    assert!(state
        .teams()
        .current()
        .iter()
        .any(|team| team.id.to_string() == team_id));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_bulk_add_players_reports_failures_and_keeps_successes() {
    let state = setup_test_db().await;
    let schema = test_schema(&state);
    let club_id = create_test_club(&state, "Bulk Club").await;
    let team_id = create_test_team(&state, Some(club_id), "Bulk Team", "Premier").await;

    let response = data(
        execute_graphql(
            &schema,
            r#"
                mutation Add($teamId: UUID!, $players: [TeamPlayerInput!]!) {
                    addPlayersToTeam(teamId: $teamId, players: $players) {
                        created { name clubId teamId }
                        failures { index message }
                    }
                }
            "#,
            Some(Variables::from_json(json!({
                "teamId": team_id.to_string(),
                "players": [
                    { "name": "Phil", "surname": "Taylor" },
                    { "name": "  ", "surname": "Nobody" },
                    { "name": "Fallon", "surname": "Sherrock", "phone": "0123" }
                ]
            }))),
        )
        .await,
    );

    let result = &response["addPlayersToTeam"];
    assert_eq!(result["created"].as_array().unwrap().len(), 2);
    assert_eq!(result["created"][0]["clubId"], club_id.to_string());
    assert_eq!(result["created"][1]["teamId"], team_id.to_string());
    assert_eq!(
        result["failures"],
        json!([{ "index": 1, "message": "Player name is required" }])
    );
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_submit_league_setup_creates_competition() {
    let state = setup_test_db().await;
    let schema = test_schema(&state);
    let division = "3rd Division";
    let team_id = create_test_team(&state, None, "Setup Team", division).await;
    api::gql::domains::teams::publish_roster(&state).await;

    let opened = data(execute_graphql(&schema, "mutation { openLeagueSetup { id } }", None).await);
    let id = opened["openLeagueSetup"]["id"].as_str().unwrap().to_string();

    for (query, vars) in [
        (
            "mutation M($id: UUID!, $v: String!) { chooseLeagueDivision(id: $id, division: $v) { phase } }",
            json!({ "id": id, "v": division }),
        ),
        (
            "mutation M($id: UUID!, $v: NaiveDate!) { pickLeagueStartDate(id: $id, startDate: $v) { phase } }",
            json!({ "id": id, "v": "2026-01-10" }),
        ),
        (
            "mutation M($id: UUID!, $v: UUID!) { toggleLeagueTeam(id: $id, teamId: $v) { phase } }",
            json!({ "id": id, "v": team_id.to_string() }),
        ),
    ] {
        data(execute_graphql(&schema, query, Some(Variables::from_json(vars))).await);
    }

    let submitted = data(
        execute_graphql(
            &schema,
            r#"
                mutation Submit($id: UUID!) {
                    submitLeagueSetup(id: $id) {
                        id name type teams teamIds startDate status division
                        members { id }
                    }
                }
            "#,
            Some(Variables::from_json(json!({ "id": id }))),
        )
        .await,
    );

    let league = &submitted["submitLeagueSetup"];
    assert_eq!(league["name"], "3rd Division League");
    assert_eq!(league["type"], "LEAGUE");
    assert_eq!(league["teams"], 1);
    assert_eq!(league["teamIds"], json!([team_id.to_string()]));
    assert_eq!(league["startDate"], "2026-01-10");
    assert_eq!(league["status"], "UPCOMING");
    assert_eq!(league["division"], division);
    assert_eq!(league["members"], json!([{ "id": team_id.to_string() }]));
    assert!(state.setups().is_empty());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_competition_membership_edits() {
    let state = setup_test_db().await;
    let schema = test_schema(&state);
    let first = create_test_team(&state, None, "Member One", "Premier").await;
    let second = create_test_team(&state, None, "Member Two", "Premier").await;

    let record = competitions::create(
        &state.db,
        CreateCompetitionData {
            name: format!("Cup {}", unique_suffix()),
            kind: CompetitionKind::Tournament,
            team_ids: vec![first],
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            status: CompetitionStatus::Active,
            division: None,
        },
    )
    .await
    .expect("Failed to create competition");

    let add = r#"
        mutation Add($id: UUID!, $team: UUID!) {
            addTeamToCompetition(competitionId: $id, teamId: $team) { teams teamIds }
        }
    "#;
    let vars = |team: uuid::Uuid| {
        Variables::from_json(json!({ "id": record.id.to_string(), "team": team.to_string() }))
    };

    let added = data(execute_graphql(&schema, add, Some(vars(second))).await);
    assert_eq!(added["addTeamToCompetition"]["teams"], 2);

    // Adding again is a no-op
    let again = data(execute_graphql(&schema, add, Some(vars(second))).await);
    assert_eq!(
        again["addTeamToCompetition"]["teamIds"],
        json!([first.to_string(), second.to_string()])
    );

    let removed = data(
        execute_graphql(
            &schema,
            r#"
                mutation Remove($id: UUID!, $team: UUID!) {
                    removeTeamFromCompetition(competitionId: $id, teamId: $team) { teams teamIds }
                }
            "#,
            Some(vars(first)),
        )
        .await,
    );
    assert_eq!(removed["removeTeamFromCompetition"]["teams"], 1);
    assert_eq!(
        removed["removeTeamFromCompetition"]["teamIds"],
        json!([second.to_string()])
    );
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_legacy_competition_defaults_and_division_fallback() {
    let state = setup_test_db().await;
    let schema = test_schema(&state);
    let division = format!("Legacy {}", unique_suffix());
    let team_id = create_test_team(&state, None, "Legacy Team", &format!(" {division} ")).await;

    let competition_id = sqlx::query_scalar::<_, uuid::Uuid>(
        "INSERT INTO competitions (name, division) VALUES ($1, $2) RETURNING id",
    )
    .bind("Legacy League")
    .bind(&division)
    .fetch_one(&state.db)
    .await
    .expect("Failed to insert legacy competition");

    let response = data(
        execute_graphql(
            &schema,
            r#"
                query Get($id: UUID!) {
                    competition(id: $id) { type status teams teamIds startDate }
                    competitionTeams(id: $id) { id }
                }
            "#,
            Some(Variables::from_json(json!({ "id": competition_id.to_string() }))),
        )
        .await,
    );

    assert_eq!(
        response["competition"],
        json!({ "type": "LEAGUE", "status": "UPCOMING", "teams": 0, "teamIds": [], "startDate": null })
    );
    assert_eq!(
        response["competitionTeams"],
        json!([{ "id": team_id.to_string() }])
    );
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_record_player_stats_derives_rates() {
    let state = setup_test_db().await;
    let schema = test_schema(&state);
    let team_id = create_test_team(&state, None, "Stats Team", "Premier").await;
    let player_id = sqlx::query_scalar::<_, uuid::Uuid>(
        "INSERT INTO players (team_id, name, surname) VALUES ($1, 'Luke', 'Humphries') RETURNING id",
    )
    .bind(team_id)
    .fetch_one(&state.db)
    .await
    .expect("Failed to insert player");
    let competition = competitions::create(
        &state.db,
        CreateCompetitionData {
            name: format!("Stats League {}", unique_suffix()),
            kind: CompetitionKind::League,
            team_ids: vec![team_id],
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            status: CompetitionStatus::Active,
            division: Some("Premier".to_string()),
        },
    )
    .await
    .expect("Failed to create competition");

    let recorded = data(
        execute_graphql(
            &schema,
            r#"
                mutation Record($c: UUID!, $p: UUID!, $input: PlayerStatsInput!) {
                    recordPlayerStats(competitionId: $c, playerId: $p, input: $input) {
                        playerName winPercentage average
                    }
                }
            "#,
            Some(Variables::from_json(json!({
                "c": competition.id.to_string(),
                "p": player_id.to_string(),
                "input": {
                    "matchesPlayed": 10, "legsWon": 25, "legsLost": 15, "tons": 12,
                    "ton80s": 3, "dartsUsed": 450, "pointsScored": 9780
                }
            }))),
        )
        .await,
    );

    let line = &recorded["recordPlayerStats"];
    assert_eq!(line["playerName"], "Luke Humphries");
    assert_eq!(line["winPercentage"], 62.5);
    assert_eq!(line["average"], 65.2);
}
