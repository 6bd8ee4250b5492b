use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::teams::ImportResponse;
use crate::api::errors::ApiError;
use crate::domain::fixture::{Match, MatchId};
use crate::services::ChampionshipService;

/// Request body for recording or replacing a match
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub team_a: String,
    pub team_b: String,
    pub goals_a: i64,
    pub goals_b: i64,
}

/// Match as returned by the API
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: MatchId,
    pub team_a: String,
    pub team_b: String,
    pub goals_a: u32,
    pub goals_b: u32,
}

impl From<&Match> for MatchResponse {
    fn from(played: &Match) -> Self {
        Self {
            id: played.id,
            team_a: played.team_a.clone(),
            team_b: played.team_b.clone(),
            goals_a: played.goals_a,
            goals_b: played.goals_b,
        }
    }
}

/// Record a match result
///
/// POST /api/matches
pub async fn create_match(
    State(service): State<ChampionshipService>,
    Json(req): Json<MatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), ApiError> {
    let played = service
        .record_match(&req.team_a, &req.team_b, req.goals_a, req.goals_b)
        .await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(&played))))
}

/// List all matches
///
/// GET /api/matches
pub async fn list_matches(
    State(service): State<ChampionshipService>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let matches = service.list_matches().await?;
    Ok(Json(matches.iter().map(MatchResponse::from).collect()))
}

/// Get a match by id
///
/// GET /api/matches/:id
pub async fn get_match(
    State(service): State<ChampionshipService>,
    Path(id): Path<MatchId>,
) -> Result<Json<MatchResponse>, ApiError> {
    let played = service.get_match(id).await?;
    Ok(Json(MatchResponse::from(&played)))
}

/// Replace teams and score of a match
///
/// PUT /api/matches/:id
pub async fn update_match(
    State(service): State<ChampionshipService>,
    Path(id): Path<MatchId>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let played = service
        .update_match(id, &req.team_a, &req.team_b, req.goals_a, req.goals_b)
        .await?;

    Ok(Json(MatchResponse::from(&played)))
}

/// Delete a match
///
/// DELETE /api/matches/:id
pub async fn delete_match(
    State(service): State<ChampionshipService>,
    Path(id): Path<MatchId>,
) -> Result<Json<Value>, ApiError> {
    let removed = service.remove_match(id).await?;

    Ok(Json(json!({
        "message": format!("Match {} vs {} deleted successfully", removed.team_a, removed.team_b),
    })))
}

/// Record matches from `<team_a> <team_b> <goals_a> <goals_b>` lines
///
/// POST /api/matches/import
pub async fn import_matches(
    State(service): State<ChampionshipService>,
    body: String,
) -> Json<ImportResponse> {
    Json(service.import_matches(&body).await.into())
}
