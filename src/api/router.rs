use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{admin, matches, rankings, teams};
use crate::services::ChampionshipService;

/// Build the HTTP router over a championship service
pub fn build_router(service: ChampionshipService) -> Router {
    // The scoreboard UI is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(admin::health_check))
        // Team routes
        .route("/api/teams", post(teams::create_team).get(teams::list_teams))
        .route("/api/teams/import", post(teams::import_teams))
        .route(
            "/api/teams/:name",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        // Match routes
        .route(
            "/api/matches",
            post(matches::create_match).get(matches::list_matches),
        )
        .route("/api/matches/import", post(matches::import_matches))
        .route(
            "/api/matches/:id",
            get(matches::get_match)
                .put(matches::update_match)
                .delete(matches::delete_match),
        )
        // Standings
        .route("/api/rankings", get(rankings::get_rankings))
        // Administration
        .route("/api/clear", delete(admin::clear_data))
        .route("/api/audit", get(admin::audit_log))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(service)
}
