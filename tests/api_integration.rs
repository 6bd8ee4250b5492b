//! End-to-end API integration tests
//!
//! These tests drive the complete HTTP router wired to the in-memory
//! store:
//! - Team registration, listing, renaming and deletion
//! - Match recording and its validation rules
//! - Rankings output shape and ordering
//! - Bulk import, clearing and the audit trail

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use championship_api::api::build_router;
use championship_api::infrastructure::audit::MemoryAuditLog;
use championship_api::infrastructure::repositories::InMemoryStore;
use championship_api::services::ChampionshipService;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

/// Setup test application over a fresh in-memory store
fn setup_app() -> Router {
    let store = Arc::new(InMemoryStore::new());
    let audit = Arc::new(MemoryAuditLog::new(100));
    build_router(ChampionshipService::new(store.clone(), store, audit))
}

/// Send a request and return status plus parsed JSON body (Null when empty or not JSON)
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn send_text(app: &Router, uri: &str, text: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "text/plain")
        .body(Body::from(text.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn add_team(app: &Router, name: &str, date: &str, group: i64) -> StatusCode {
    let payload = json!({"name": name, "registration_date": date, "group_number": group});
    send(app, "POST", "/api/teams", Some(payload)).await.0
}

async fn add_match(app: &Router, a: &str, b: &str, goals_a: i64, goals_b: i64) -> (StatusCode, Value) {
    let payload = json!({"team_a": a, "team_b": b, "goals_a": goals_a, "goals_b": goals_b});
    send(app, "POST", "/api/matches", Some(payload)).await
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_create_and_get_team() {
    let app = setup_app();

    let payload = json!({"name": "Lions", "registration_date": "04/07", "group_number": 1});
    let (status, json) = send(&app, "POST", "/api/teams", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        json,
        json!({"name": "Lions", "registration_date": "04/07", "group_number": 1})
    );

    let (status, json) = send(&app, "GET", "/api/teams/Lions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["group_number"], 1);

    let (status, json) = send(&app, "GET", "/api/teams/Nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("Nobody"));
}

#[tokio::test]
async fn test_team_validation_errors() {
    let app = setup_app();

    assert_eq!(add_team(&app, "Lions", "2024-07-04", 1).await, StatusCode::BAD_REQUEST);
    assert_eq!(add_team(&app, "Lions", "04/07", 3).await, StatusCode::BAD_REQUEST);
    assert_eq!(add_team(&app, "", "04/07", 1).await, StatusCode::BAD_REQUEST);

    assert_eq!(add_team(&app, "Lions", "04/07", 1).await, StatusCode::CREATED);
    assert_eq!(add_team(&app, "Lions", "05/07", 2).await, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_group_capacity() {
    let app = setup_app();

    for i in 1..=6 {
        let name = format!("Team{i}");
        assert_eq!(add_team(&app, &name, "01/01", 2).await, StatusCode::CREATED);
    }

    let payload = json!({"name": "Team7", "registration_date": "01/01", "group_number": 2});
    let (status, json) = send(&app, "POST", "/api/teams", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Group 2 already has 6 teams. No more teams can be added."
    );
}

#[tokio::test]
async fn test_list_teams_by_group() {
    let app = setup_app();
    add_team(&app, "A", "01/01", 1).await;
    add_team(&app, "B", "01/01", 2).await;
    add_team(&app, "C", "01/01", 1).await;

    let (status, json) = send(&app, "GET", "/api/teams?group=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["A", "C"]);

    let (_, json) = send(&app, "GET", "/api/teams", None).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    let (status, _) = send(&app, "GET", "/api/teams?group=5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_team_updates_matches() {
    let app = setup_app();
    add_team(&app, "A", "01/01", 1).await;
    add_team(&app, "B", "02/01", 1).await;
    let (_, created) = add_match(&app, "A", "B", 2, 1).await;

    let payload = json!({"name": "Alpha", "registration_date": "01/01", "group_number": 1});
    let (status, json) = send(&app, "PUT", "/api/teams/A", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Alpha");

    let uri = format!("/api/matches/{}", created["id"]);
    let (_, json) = send(&app, "GET", &uri, None).await;
    assert_eq!(json["team_a"], "Alpha");

    let (status, _) = send(&app, "GET", "/api/rankings", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_team_removes_its_matches() {
    let app = setup_app();
    add_team(&app, "A", "01/01", 1).await;
    add_team(&app, "B", "02/01", 1).await;
    add_match(&app, "A", "B", 0, 0).await;

    let (status, json) = send(&app, "DELETE", "/api/teams/A", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Team A deleted successfully");
    assert_eq!(json["matches_removed"], 1);

    let (_, json) = send(&app, "GET", "/api/matches", None).await;
    assert_eq!(json, json!([]));

    let (status, _) = send(&app, "DELETE", "/api/teams/A", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_match_validation_errors() {
    let app = setup_app();
    add_team(&app, "A", "01/01", 1).await;
    add_team(&app, "B", "02/01", 1).await;
    add_team(&app, "X", "03/01", 2).await;

    let (status, json) = add_match(&app, "A", "A", 1, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Team A and Team B must be different.");

    let (status, json) = add_match(&app, "A", "Ghost", 1, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Team 'Ghost' not recognized");

    let (status, _) = add_match(&app, "A", "X", 1, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = add_match(&app, "A", "B", -2, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = add_match(&app, "A", "B", 1, 0).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = add_match(&app, "B", "A", 3, 3).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "A match between B and A already exists.");
}

#[tokio::test]
async fn test_update_and_delete_match() {
    let app = setup_app();
    add_team(&app, "A", "01/01", 1).await;
    add_team(&app, "B", "02/01", 1).await;
    let (_, created) = add_match(&app, "A", "B", 0, 0).await;
    let uri = format!("/api/matches/{}", created["id"]);

    let payload = json!({"team_a": "A", "team_b": "B", "goals_a": 0, "goals_b": 4});
    let (status, json) = send(&app, "PUT", &uri, Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["goals_b"], 4);

    let (status, json) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Match A vs B deleted successfully");

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let payload = json!({"team_a": "A", "team_b": "B", "goals_a": 1, "goals_b": 0});
    let (status, _) = send(&app, "PUT", "/api/matches/999", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rankings_shape_and_order() {
    let app = setup_app();
    add_team(&app, "B", "02/01", 1).await;
    add_team(&app, "A", "01/01", 1).await;
    add_team(&app, "C", "9/1", 1).await;
    add_team(&app, "Solo", "10/02", 2).await;
    add_match(&app, "A", "B", 2, 2).await;

    let (status, json) = send(&app, "GET", "/api/rankings", None).await;
    assert_eq!(status, StatusCode::OK);

    let group_one: Vec<&str> = json["standings_by_group"]["1"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["team_name"].as_str().unwrap())
        .collect();
    assert_eq!(group_one, ["A", "B", "C"]);

    assert_eq!(
        json["standings_by_group"]["1"][0],
        json!({
            "team_name": "A",
            "match_points": 1,
            "goals_scored": 2,
            "alternate_points": 3,
            "registration_date": "01/01",
            "group_number": 1
        })
    );
    assert_eq!(json["combined_standings"].as_array().unwrap().len(), 4);
    assert_eq!(json["combined_standings"][3]["team_name"], "Solo");
    assert_eq!(json["top4"]["1"], json!(["A", "B", "C"]));
    assert_eq!(json["top4"]["2"], json!(["Solo"]));
    assert_eq!(json["matches"][0]["team_a"], "A");
}

#[tokio::test]
async fn test_rankings_when_empty() {
    let app = setup_app();

    let (status, json) = send(&app, "GET", "/api/rankings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "standings_by_group": {"1": [], "2": []},
            "combined_standings": [],
            "matches": [],
            "top4": {"1": [], "2": []}
        })
    );
}

#[tokio::test]
async fn test_bulk_import() {
    let app = setup_app();

    let (status, json) = send_text(&app, "/api/teams/import", "A 01/01 1\nB 02/01 1\nbroken line\n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["added"], 2);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["lines"][2]["line"], 3);
    assert_eq!(json["lines"][2]["ok"], false);

    let (status, json) = send_text(&app, "/api/matches/import", "A B 3 1\nA B 1 1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["added"], 1);
    assert_eq!(json["lines"][1]["message"], "A match between A and B already exists.");
}

#[tokio::test]
async fn test_clear_and_audit_trail() {
    let app = setup_app();
    add_team(&app, "A", "01/01", 1).await;
    add_team(&app, "B", "02/01", 1).await;
    add_match(&app, "A", "B", 1, 0).await;

    let (status, json) = send(&app, "DELETE", "/api/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "All data cleared");
    assert_eq!(json["teams_removed"], 2);
    assert_eq!(json["matches_removed"], 1);

    let (_, json) = send(&app, "GET", "/api/teams", None).await;
    assert_eq!(json, json!([]));

    let (status, json) = send(&app, "GET", "/api/audit?limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["event"]["aggregate"], "match");
    assert_eq!(records[0]["event"]["kind"], "recorded");
    assert_eq!(records[1]["event"]["aggregate"], "cleared");
}
