use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use super::postgres_team_repository::count;
use crate::domain::fixture::{Match, MatchId, NewMatch};
use crate::domain::repositories::{MatchRepository, RepositoryError, RepositoryResult};

#[derive(Debug, sqlx::FromRow)]
struct MatchRow {
    id: i64,
    team_a: String,
    team_b: String,
    goals_a: i64,
    goals_b: i64,
}

impl TryFrom<MatchRow> for Match {
    type Error = RepositoryError;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        let goals = |value: i64| {
            u32::try_from(value).map_err(|_| {
                RepositoryError::Corrupt(format!("match {} has goal count {}", row.id, value))
            })
        };
        Ok(Match {
            id: row.id,
            goals_a: goals(row.goals_a)?,
            goals_b: goals(row.goals_b)?,
            team_a: row.team_a,
            team_b: row.team_b,
        })
    }
}

/// PostgreSQL implementation of MatchRepository
pub struct PostgresMatchRepository {
    pool: PgPool,
}

impl PostgresMatchRepository {
    /// Creates a new PostgresMatchRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn insert(&self, result: &NewMatch) -> RepositoryResult<Match> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            INSERT INTO matches (team_a, team_b, goals_a, goals_b)
            VALUES ($1, $2, $3, $4)
            RETURNING id, team_a, team_b, goals_a, goals_b
            "#,
        )
        .bind(&result.team_a)
        .bind(&result.team_b)
        .bind(i64::from(result.goals_a))
        .bind(i64::from(result.goals_b))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "match", &format!("{} vs {}", result.team_a, result.team_b))
        })?;

        Match::try_from(row)
    }

    async fn find_by_id(&self, id: MatchId) -> RepositoryResult<Option<Match>> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT id, team_a, team_b, goals_a, goals_b
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Match::try_from).transpose()
    }

    async fn find_pairing(&self, team_a: &str, team_b: &str) -> RepositoryResult<Option<Match>> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT id, team_a, team_b, goals_a, goals_b
            FROM matches
            WHERE (team_a = $1 AND team_b = $2) OR (team_a = $2 AND team_b = $1)
            LIMIT 1
            "#,
        )
        .bind(team_a)
        .bind(team_b)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Match::try_from).transpose()
    }

    async fn count_for_team(&self, team: &str) -> RepositoryResult<usize> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM matches WHERE team_a = $1 OR team_b = $1")
                .bind(team)
                .fetch_one(&self.pool)
                .await?;

        count(total)
    }

    async fn list(&self) -> RepositoryResult<Vec<Match>> {
        let rows = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT id, team_a, team_b, goals_a, goals_b
            FROM matches
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Match::try_from).collect()
    }

    async fn update(&self, result: &Match) -> RepositoryResult<()> {
        let outcome = sqlx::query(
            r#"
            UPDATE matches
            SET team_a = $1, team_b = $2, goals_a = $3, goals_b = $4
            WHERE id = $5
            "#,
        )
        .bind(&result.team_a)
        .bind(&result.team_b)
        .bind(i64::from(result.goals_a))
        .bind(i64::from(result.goals_b))
        .bind(result.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "match", &result.id.to_string()))?;

        if outcome.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Match {}", result.id)));
        }

        Ok(())
    }

    async fn delete(&self, id: MatchId) -> RepositoryResult<Match> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            DELETE FROM matches
            WHERE id = $1
            RETURNING id, team_a, team_b, goals_a, goals_b
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound(format!("Match {}", id)))?;

        Match::try_from(row)
    }
}
