use axum::{extract::State, Json};

use crate::api::errors::ApiError;
use crate::domain::ranking::Rankings;
use crate::services::ChampionshipService;

/// Current standings, qualifiers and match list
///
/// GET /api/rankings
pub async fn get_rankings(
    State(service): State<ChampionshipService>,
) -> Result<Json<Rankings>, ApiError> {
    Ok(Json(service.rankings().await?))
}
