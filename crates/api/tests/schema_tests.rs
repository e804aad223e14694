mod common;

use async_graphql::Variables;
use common::*;
use futures_util::StreamExt;
use serde_json::{json, Value};

const OPEN: &str = r#"
    mutation {
        openLeagueSetup { id phase division candidates { id } }
    }
"#;

const CHOOSE: &str = r#"
    mutation Choose($id: UUID!, $division: String!) {
        chooseLeagueDivision(id: $id, division: $division) {
            phase
            division
            candidates { id name }
        }
    }
"#;

const TOGGLE: &str = r#"
    mutation Toggle($id: UUID!, $teamId: UUID!) {
        toggleLeagueTeam(id: $id, teamId: $teamId) {
            phase
            selectedTeamIds
            selectedTeams { name }
            candidates { name }
        }
    }
"#;

const SUBMIT: &str = r#"
    mutation Submit($id: UUID!) {
        submitLeagueSetup(id: $id) { id name teams }
    }
"#;

fn data(response: async_graphql::Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "Request should succeed: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn test_divisions_query_lists_vocabulary() {
    let state = offline_state();
    let schema = test_schema(&state);

    let response = execute_graphql(&schema, "{ divisions }", None).await;

    assert_eq!(
        data(response)["divisions"],
        json!([
            "Upper Division",
            "Lower Division",
            "Premier",
            "1st Division",
            "2nd Division",
            "3rd Division"
        ])
    );
}

#[tokio::test]
async fn test_stat_columns_query() {
    let state = offline_state();
    let schema = test_schema(&state);

    let response = execute_graphql(
        &schema,
        "{ competitionStatColumns { key abbreviation } }",
        None,
    )
    .await;

    let data = data(response);
    let abbreviations: Vec<&str> = data["competitionStatColumns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["abbreviation"].as_str().unwrap())
        .collect();
    assert_eq!(
        abbreviations,
        vec!["PN", "MP", "LW", "LL", "100+", "180", "DU", "Win%", "Avg"]
    );
    assert_eq!(data["competitionStatColumns"][8]["key"], "average");
}

#[tokio::test]
async fn test_league_setup_flow_over_graphql() {
    let state = offline_state();
    let schema = test_schema(&state);
    let arrows = team("Arrows", "Premier");
    let bullseyes = team("Bullseyes", "1st Division");
    state.teams().publish(vec![arrows.clone(), bullseyes.clone()]);

    let opened = data(execute_graphql(&schema, OPEN, None).await);
    assert_eq!(opened["openLeagueSetup"]["phase"], "EMPTY");
    assert_eq!(opened["openLeagueSetup"]["candidates"], json!([]));
    let id = opened["openLeagueSetup"]["id"].as_str().unwrap().to_string();

    let chosen = data(
        execute_graphql(
            &schema,
            CHOOSE,
            Some(Variables::from_json(json!({ "id": id, "division": " premier " }))),
        )
        .await,
    );
    assert_eq!(chosen["chooseLeagueDivision"]["phase"], "DIVISION_CHOSEN");
    assert_eq!(chosen["chooseLeagueDivision"]["division"], "premier");
    assert_eq!(
        chosen["chooseLeagueDivision"]["candidates"],
        json!([{ "id": arrows.id.to_string(), "name": "Arrows" }])
    );

    let toggled = data(
        execute_graphql(
            &schema,
            TOGGLE,
            Some(Variables::from_json(
                json!({ "id": id, "teamId": arrows.id.to_string() }),
            )),
        )
        .await,
    );
    assert_eq!(toggled["toggleLeagueTeam"]["phase"], "TEAMS_CHOSEN");
    assert_eq!(
        toggled["toggleLeagueTeam"]["selectedTeamIds"],
        json!([arrows.id.to_string()])
    );
    assert_eq!(
        toggled["toggleLeagueTeam"]["selectedTeams"],
        json!([{ "name": "Arrows" }])
    );
    assert_eq!(toggled["toggleLeagueTeam"]["candidates"], json!([]));

    // Start date is still missing
    let denied = execute_graphql(
        &schema,
        SUBMIT,
        Some(Variables::from_json(json!({ "id": id }))),
    )
    .await;
    assert_eq!(denied.errors[0].message, "Please choose a start date");
    assert_eq!(error_code(&denied).as_deref(), Some("INCOMPLETE_FORM"));

    let view = data(
        execute_graphql(
            &schema,
            "query View($id: UUID!) { leagueSetup(id: $id) { phase lastError } }",
            Some(Variables::from_json(json!({ "id": id }))),
        )
        .await,
    );
    assert_eq!(view["leagueSetup"]["phase"], "TEAMS_CHOSEN");
    assert_eq!(view["leagueSetup"]["lastError"], Value::Null);

    let cancelled = data(
        execute_graphql(
            &schema,
            "mutation Cancel($id: UUID!) { cancelLeagueSetup(id: $id) }",
            Some(Variables::from_json(json!({ "id": id }))),
        )
        .await,
    );
    assert_eq!(cancelled["cancelLeagueSetup"], true);
    assert!(state.setups().is_empty());
}

#[tokio::test]
async fn test_toggle_team_from_other_division_is_rejected() {
    let state = offline_state();
    let schema = test_schema(&state);
    let bullseyes = team("Bullseyes", "1st Division");
    state.teams().publish(vec![bullseyes.clone()]);

    let opened = data(execute_graphql(&schema, OPEN, None).await);
    let id = opened["openLeagueSetup"]["id"].as_str().unwrap().to_string();
    data(
        execute_graphql(
            &schema,
            CHOOSE,
            Some(Variables::from_json(json!({ "id": id, "division": "Premier" }))),
        )
        .await,
    );

    let response = execute_graphql(
        &schema,
        TOGGLE,
        Some(Variables::from_json(
            json!({ "id": id, "teamId": bullseyes.id.to_string() }),
        )),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("TEAM_NOT_AVAILABLE"));
}

#[tokio::test]
async fn test_unknown_setup_is_not_found() {
    let state = offline_state();
    let schema = test_schema(&state);

    let response = execute_graphql(
        &schema,
        "query View($id: UUID!) { leagueSetup(id: $id) { phase } }",
        Some(Variables::from_json(
            json!({ "id": uuid::Uuid::new_v4().to_string() }),
        )),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_create_league_validates_before_touching_store() {
    let state = offline_state();
    let schema = test_schema(&state);

    let response = execute_graphql(
        &schema,
        r#"
            mutation Create($input: CreateLeagueInput!) {
                createLeague(input: $input) { id }
            }
        "#,
        Some(Variables::from_json(json!({
            "input": { "division": "Premier", "startDate": "2025-09-01", "teamIds": [] }
        }))),
    )
    .await;

    assert_eq!(response.errors[0].message, "Please select at least one team");
    assert_eq!(error_code(&response).as_deref(), Some("INCOMPLETE_FORM"));
}

#[tokio::test]
async fn test_team_roster_subscription_streams_snapshots() {
    let state = offline_state();
    let schema = test_schema(&state);
    state.teams().publish(vec![team("Arrows", "Premier")]);

    let mut stream = Box::pin(schema.execute_stream("subscription { teamRoster { name division } }"));

    let first = stream.next().await.expect("initial snapshot");
    assert_eq!(
        data(first)["teamRoster"],
        json!([{ "name": "Arrows", "division": "Premier" }])
    );

    state
        .teams()
        .publish(vec![team("Arrows", "Premier"), team("Bullseyes", "Premier")]);

    let second = stream.next().await.expect("replacement snapshot");
    let names: Vec<Value> = data(second)["teamRoster"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].clone())
        .collect();
    assert_eq!(names, vec![json!("Arrows"), json!("Bullseyes")]);
}
