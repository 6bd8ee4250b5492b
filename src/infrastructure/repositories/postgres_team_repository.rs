use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::{GroupNumber, Team};

#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    name: String,
    registration_date: String,
    group_number: i16,
}

impl TryFrom<TeamRow> for Team {
    type Error = RepositoryError;

    fn try_from(row: TeamRow) -> Result<Self, Self::Error> {
        let group = GroupNumber::try_from(i64::from(row.group_number))
            .map_err(|e| RepositoryError::Corrupt(format!("team '{}': {}", row.name, e)))?;
        Ok(Team::from_persistence(row.name, row.registration_date, group))
    }
}

pub(super) fn count(value: i64) -> RepositoryResult<usize> {
    usize::try_from(value).map_err(|_| RepositoryError::Corrupt(format!("negative count {value}")))
}

/// PostgreSQL implementation of TeamRepository
///
/// Match references follow renames and deletions through the
/// `ON UPDATE CASCADE` / `ON DELETE CASCADE` foreign keys on `matches`.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn insert(&self, team: &Team) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO teams (name, registration_date, group_number)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(team.name())
        .bind(team.registration_date())
        .bind(i16::from(team.group().as_u8()))
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "team", team.name()))?;

        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT name, registration_date, group_number
            FROM teams
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Team::try_from).transpose()
    }

    async fn list(&self, group: Option<GroupNumber>) -> RepositoryResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT name, registration_date, group_number
            FROM teams
            WHERE $1::SMALLINT IS NULL OR group_number = $1
            ORDER BY id
            "#,
        )
        .bind(group.map(|g| i16::from(g.as_u8())))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Team::try_from).collect()
    }

    async fn count_in_group(&self, group: GroupNumber) -> RepositoryResult<usize> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE group_number = $1")
            .bind(i16::from(group.as_u8()))
            .fetch_one(&self.pool)
            .await?;

        count(total)
    }

    async fn update(&self, current_name: &str, team: &Team) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = $1, registration_date = $2, group_number = $3
            WHERE name = $4
            "#,
        )
        .bind(team.name())
        .bind(team.registration_date())
        .bind(i16::from(team.group().as_u8()))
        .bind(current_name)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "team", team.name()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Team '{}'", current_name)));
        }

        Ok(())
    }

    async fn delete(&self, name: &str) -> RepositoryResult<usize> {
        let mut tx = self.pool.begin().await?;

        let matches = sqlx::query("DELETE FROM matches WHERE team_a = $1 OR team_b = $1")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        let teams = sqlx::query("DELETE FROM teams WHERE name = $1")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        if teams.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(RepositoryError::NotFound(format!("Team '{}'", name)));
        }

        tx.commit().await?;
        Ok(matches.rows_affected() as usize)
    }

    async fn clear(&self) -> RepositoryResult<(usize, usize)> {
        let mut tx = self.pool.begin().await?;

        let matches = sqlx::query("DELETE FROM matches").execute(&mut *tx).await?;
        let teams = sqlx::query("DELETE FROM teams").execute(&mut *tx).await?;

        tx.commit().await?;
        Ok((teams.rows_affected() as usize, matches.rows_affected() as usize))
    }
}
