use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use championship_api::api::build_router;
use championship_api::config::{AppConfig, StorageBackend};
use championship_api::domain::audit::AuditSink;
use championship_api::domain::repositories::{MatchRepository, TeamRepository};
use championship_api::infrastructure::audit::{FanOutAuditSink, MemoryAuditLog, TracingAuditSink};
use championship_api::infrastructure::repositories::{
    InMemoryStore, PostgresMatchRepository, PostgresTeamRepository,
};
use championship_api::services::ChampionshipService;
use championship_api::telemetry;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    telemetry::init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let (teams, matches): (Arc<dyn TeamRepository>, Arc<dyn MatchRepository>) =
        match config.storage {
            StorageBackend::Postgres => {
                tracing::info!("Connecting to database...");
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(&config.database_url)
                    .await
                    .expect("Failed to connect to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .expect("Failed to run migrations");
                tracing::info!("Database connected successfully");

                (
                    Arc::new(PostgresTeamRepository::new(pool.clone())) as Arc<dyn TeamRepository>,
                    Arc::new(PostgresMatchRepository::new(pool)) as Arc<dyn MatchRepository>,
                )
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                let store = Arc::new(InMemoryStore::new());
                (
                    store.clone() as Arc<dyn TeamRepository>,
                    store as Arc<dyn MatchRepository>,
                )
            }
        };

    let audit: Arc<dyn AuditSink> = Arc::new(FanOutAuditSink::new(vec![
        Arc::new(MemoryAuditLog::new(config.audit_capacity)) as Arc<dyn AuditSink>,
        Arc::new(TracingAuditSink) as Arc<dyn AuditSink>,
    ]));

    let service = ChampionshipService::new(teams, matches, audit);
    let app = build_router(service);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
