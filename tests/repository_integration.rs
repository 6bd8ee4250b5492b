//! Integration tests for the PostgreSQL repositories
//!
//! These tests need a live database and are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgres://... cargo test --test repository_integration -- --ignored
//! ```
//!
//! Every test works on uniquely named teams so runs can share a database.

use championship_api::domain::fixture::NewMatch;
use championship_api::domain::repositories::{MatchRepository, RepositoryError, TeamRepository};
use championship_api::domain::team::{GroupNumber, Team};
use championship_api::infrastructure::repositories::{
    PostgresMatchRepository, PostgresTeamRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Set up test database connection pool with the schema applied
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", &Uuid::new_v4().simple().to_string()[..8])
}

fn team(name: &str, date: &str, group: i64) -> Team {
    Team::new(name, date, group).expect("valid team").0
}

/// Clean up the teams a test created; matches follow via cascade
async fn cleanup(pool: &PgPool, names: &[&str]) {
    for name in names {
        sqlx::query("DELETE FROM teams WHERE name = $1")
            .bind(*name)
            .execute(pool)
            .await
            .expect("Failed to cleanup test team");
    }
}

#[tokio::test]
#[ignore]
async fn test_team_insert_find_and_duplicate() {
    let pool = setup_test_db().await;
    let repo = PostgresTeamRepository::new(pool.clone());
    let name = unique("lions");

    repo.insert(&team(&name, "04/07", 1)).await.expect("insert team");

    let found = repo
        .find_by_name(&name)
        .await
        .expect("find team")
        .expect("team exists");
    assert_eq!(found.registration_date(), "04/07");
    assert_eq!(found.group(), GroupNumber::One);

    let duplicate = repo.insert(&team(&name, "05/07", 2)).await;
    assert!(matches!(duplicate, Err(RepositoryError::Conflict(_))));

    let listed = repo.list(Some(GroupNumber::One)).await.expect("list teams");
    assert!(listed.iter().any(|t| t.name() == name));
    let other = repo.list(Some(GroupNumber::Two)).await.expect("list teams");
    assert!(other.iter().all(|t| t.name() != name));

    cleanup(&pool, &[&name]).await;
}

#[tokio::test]
#[ignore]
async fn test_rename_cascades_to_matches() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let matches = PostgresMatchRepository::new(pool.clone());
    let a = unique("a");
    let b = unique("b");
    let renamed = unique("alpha");

    teams.insert(&team(&a, "01/01", 2)).await.expect("insert a");
    teams.insert(&team(&b, "02/01", 2)).await.expect("insert b");
    let played = matches
        .insert(&NewMatch::new(&a, &b, 2, 1).expect("valid match"))
        .await
        .expect("insert match");

    teams
        .update(&a, &team(&renamed, "01/01", 2))
        .await
        .expect("rename team");

    let stored = matches
        .find_by_id(played.id)
        .await
        .expect("find match")
        .expect("match exists");
    assert_eq!(stored.team_a, renamed);
    assert_eq!(stored.goals_a, 2);
    assert!(teams.find_by_name(&a).await.expect("find").is_none());

    cleanup(&pool, &[&renamed, &b]).await;
}

#[tokio::test]
#[ignore]
async fn test_pairing_is_unique_in_either_order() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let matches = PostgresMatchRepository::new(pool.clone());
    let a = unique("a");
    let b = unique("b");

    teams.insert(&team(&a, "01/01", 1)).await.expect("insert a");
    teams.insert(&team(&b, "02/01", 1)).await.expect("insert b");
    matches
        .insert(&NewMatch::new(&a, &b, 0, 0).expect("valid match"))
        .await
        .expect("insert match");

    let found = matches.find_pairing(&b, &a).await.expect("find pairing");
    assert!(found.is_some());

    let reversed = matches
        .insert(&NewMatch::new(&b, &a, 1, 1).expect("valid match"))
        .await;
    assert!(matches!(reversed, Err(RepositoryError::Conflict(_))));

    assert_eq!(matches.count_for_team(&a).await.expect("count"), 1);

    cleanup(&pool, &[&a, &b]).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_team_reports_removed_matches() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let matches = PostgresMatchRepository::new(pool.clone());
    let a = unique("a");
    let b = unique("b");
    let c = unique("c");

    for (name, day) in [(&a, "01/03"), (&b, "02/03"), (&c, "03/03")] {
        teams.insert(&team(name, day, 1)).await.expect("insert team");
    }
    let kept = matches
        .insert(&NewMatch::new(&b, &c, 1, 0).expect("valid match"))
        .await
        .expect("insert match");
    matches
        .insert(&NewMatch::new(&a, &b, 1, 0).expect("valid match"))
        .await
        .expect("insert match");
    matches
        .insert(&NewMatch::new(&c, &a, 1, 0).expect("valid match"))
        .await
        .expect("insert match");

    let removed = teams.delete(&a).await.expect("delete team");
    assert_eq!(removed, 2);
    assert!(matches.find_by_id(kept.id).await.expect("find").is_some());

    let missing = teams.delete(&a).await;
    assert!(matches!(missing, Err(RepositoryError::NotFound(_))));

    cleanup(&pool, &[&b, &c]).await;
}

#[tokio::test]
#[ignore]
async fn test_match_update_and_delete() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let matches = PostgresMatchRepository::new(pool.clone());
    let a = unique("a");
    let b = unique("b");

    teams.insert(&team(&a, "01/01", 1)).await.expect("insert a");
    teams.insert(&team(&b, "02/01", 1)).await.expect("insert b");
    let mut played = matches
        .insert(&NewMatch::new(&a, &b, 0, 0).expect("valid match"))
        .await
        .expect("insert match");

    played.replace(NewMatch::new(&a, &b, 4, 2).expect("valid match"));
    matches.update(&played).await.expect("update match");

    let deleted = matches.delete(played.id).await.expect("delete match");
    assert_eq!((deleted.goals_a, deleted.goals_b), (4, 2));

    let missing = matches.delete(played.id).await;
    assert!(matches!(missing, Err(RepositoryError::NotFound(_))));

    cleanup(&pool, &[&a, &b]).await;
}
