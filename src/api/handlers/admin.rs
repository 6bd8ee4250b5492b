use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::domain::audit::AuditRecord;
use crate::services::ChampionshipService;

const DEFAULT_AUDIT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<usize>,
}

/// Delete every team and match
///
/// DELETE /api/clear
pub async fn clear_data(
    State(service): State<ChampionshipService>,
) -> Result<Json<Value>, ApiError> {
    let (teams_removed, matches_removed) = service.clear().await?;

    Ok(Json(json!({
        "message": "All data cleared",
        "teams_removed": teams_removed,
        "matches_removed": matches_removed,
    })))
}

/// Most recent audit records, oldest first
///
/// GET /api/audit?limit=N
pub async fn audit_log(
    State(service): State<ChampionshipService>,
    Query(query): Query<AuditQuery>,
) -> Json<Vec<AuditRecord>> {
    Json(service.recent_audit(query.limit.unwrap_or(DEFAULT_AUDIT_LIMIT)))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
