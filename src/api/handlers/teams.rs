use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::domain::import::LineReport;
use crate::domain::team::{GroupNumber, Team};
use crate::services::ChampionshipService;

/// Request body for creating or replacing a team
#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    pub registration_date: String,
    pub group_number: i64,
}

/// Team as returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub name: String,
    pub registration_date: String,
    pub group_number: u8,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name().to_string(),
            registration_date: team.registration_date().to_string(),
            group_number: team.group().as_u8(),
        }
    }
}

/// Optional group filter for listing
#[derive(Debug, Deserialize)]
pub struct TeamFilter {
    pub group: Option<i64>,
}

/// Per-line result of a bulk import
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub added: usize,
    pub failed: usize,
    pub lines: Vec<LineReport>,
}

impl From<Vec<LineReport>> for ImportResponse {
    fn from(lines: Vec<LineReport>) -> Self {
        let added = lines.iter().filter(|l| l.ok).count();
        Self {
            added,
            failed: lines.len() - added,
            lines,
        }
    }
}

/// Register a new team
///
/// POST /api/teams
pub async fn create_team(
    State(service): State<ChampionshipService>,
    Json(req): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = service
        .register_team(&req.name, &req.registration_date, req.group_number)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List teams, optionally for one group
///
/// GET /api/teams?group=N
pub async fn list_teams(
    State(service): State<ChampionshipService>,
    Query(filter): Query<TeamFilter>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let group = filter
        .group
        .map(GroupNumber::try_from)
        .transpose()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let teams = service.list_teams(group).await?;
    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by name
///
/// GET /api/teams/:name
pub async fn get_team(
    State(service): State<ChampionshipService>,
    Path(name): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = service.get_team(&name).await?;
    Ok(Json(TeamResponse::from(&team)))
}

/// Replace a team's details, renaming it when `name` changes
///
/// PUT /api/teams/:name
pub async fn update_team(
    State(service): State<ChampionshipService>,
    Path(name): Path<String>,
    Json(req): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = service
        .update_team(&name, &req.name, &req.registration_date, req.group_number)
        .await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team and its matches
///
/// DELETE /api/teams/:name
pub async fn delete_team(
    State(service): State<ChampionshipService>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let matches_removed = service.remove_team(&name).await?;

    Ok(Json(json!({
        "message": format!("Team {} deleted successfully", name),
        "matches_removed": matches_removed,
    })))
}

/// Register teams from `<name> <DD/MM> <group>` lines
///
/// POST /api/teams/import
pub async fn import_teams(
    State(service): State<ChampionshipService>,
    body: String,
) -> Json<ImportResponse> {
    Json(service.import_teams(&body).await.into())
}
