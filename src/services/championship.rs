use std::sync::Arc;

use tokio::sync::Mutex;

use super::errors::{ChampionshipError, ChampionshipResult};
use crate::domain::audit::{AuditEvent, AuditRecord, AuditSink};
use crate::domain::fixture::{Match, MatchEvent, MatchId, NewMatch};
use crate::domain::import::{parse_match_lines, parse_team_lines, LineReport, Parsed};
use crate::domain::ranking::{compute_rankings, Rankings};
use crate::domain::repositories::{MatchRepository, TeamRepository};
use crate::domain::team::{GroupNumber, Team, TeamEvent, MAX_TEAMS_PER_GROUP};

/// Record store for the championship
///
/// Owns every rule that spans more than one record: name uniqueness,
/// group capacity, match references and pairing uniqueness. Mutations are
/// serialized through a single writer lock so those checks cannot race
/// within one process. Each successful mutation emits one audit record.
#[derive(Clone)]
pub struct ChampionshipService {
    teams: Arc<dyn TeamRepository>,
    matches: Arc<dyn MatchRepository>,
    audit: Arc<dyn AuditSink>,
    writer: Arc<Mutex<()>>,
}

impl ChampionshipService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        matches: Arc<dyn MatchRepository>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            teams,
            matches,
            audit,
            writer: Arc::new(Mutex::new(())),
        }
    }

    // ===== Teams =====

    /// Register a new team
    pub async fn register_team(
        &self,
        name: &str,
        registration_date: &str,
        group_number: i64,
    ) -> ChampionshipResult<Team> {
        let (team, event) = Team::new(name, registration_date, group_number)?;
        let _guard = self.writer.lock().await;

        if self.teams.count_in_group(team.group()).await? >= MAX_TEAMS_PER_GROUP {
            return Err(ChampionshipError::GroupFull(team.group()));
        }
        if self.teams.find_by_name(team.name()).await?.is_some() {
            return Err(ChampionshipError::DuplicateTeam(team.name().to_string()));
        }

        self.teams.insert(&team).await?;
        tracing::info!(team = %team.name(), group = %team.group(), "Team registered");
        self.emit(event);

        Ok(team)
    }

    pub async fn get_team(&self, name: &str) -> ChampionshipResult<Team> {
        self.teams
            .find_by_name(name)
            .await?
            .ok_or_else(|| ChampionshipError::TeamNotFound(name.to_string()))
    }

    pub async fn list_teams(&self, group: Option<GroupNumber>) -> ChampionshipResult<Vec<Team>> {
        Ok(self.teams.list(group).await?)
    }

    /// Replace a team's fields, renaming it if `name` differs
    ///
    /// Matches follow a rename. Moving to the other group needs room there
    /// and is refused once the team has played.
    pub async fn update_team(
        &self,
        current_name: &str,
        name: &str,
        registration_date: &str,
        group_number: i64,
    ) -> ChampionshipResult<Team> {
        let _guard = self.writer.lock().await;

        let mut team = self.get_team(current_name).await?;
        let previous_group = team.group();
        let event = team.update(name, registration_date, group_number)?;

        if team.name() != current_name && self.teams.find_by_name(team.name()).await?.is_some() {
            return Err(ChampionshipError::DuplicateTeam(team.name().to_string()));
        }

        if team.group() != previous_group {
            if self.teams.count_in_group(team.group()).await? >= MAX_TEAMS_PER_GROUP {
                return Err(ChampionshipError::GroupFull(team.group()));
            }
            let played = self.matches.count_for_team(current_name).await?;
            if played > 0 {
                return Err(ChampionshipError::TeamHasMatches {
                    team: current_name.to_string(),
                    matches: played,
                });
            }
        }

        self.teams.update(current_name, &team).await?;
        tracing::info!(
            previous = %current_name,
            team = %team.name(),
            group = %team.group(),
            "Team updated"
        );
        self.emit(event);

        Ok(team)
    }

    /// Remove a team together with every match it played
    ///
    /// Returns the number of matches removed.
    pub async fn remove_team(&self, name: &str) -> ChampionshipResult<usize> {
        let _guard = self.writer.lock().await;

        let team = self.get_team(name).await?;
        let matches_removed = self.teams.delete(team.name()).await?;
        tracing::info!(team = %name, matches_removed, "Team removed");
        self.emit(TeamEvent::Removed {
            name: team.name().to_string(),
            matches_removed,
        });

        Ok(matches_removed)
    }

    // ===== Matches =====

    /// Record a played match
    pub async fn record_match(
        &self,
        team_a: &str,
        team_b: &str,
        goals_a: i64,
        goals_b: i64,
    ) -> ChampionshipResult<Match> {
        let result = NewMatch::new(team_a, team_b, goals_a, goals_b)?;
        let _guard = self.writer.lock().await;

        self.check_pairing(&result, None).await?;
        let stored = self.matches.insert(&result).await?;
        tracing::info!(
            match_id = stored.id,
            team_a = %stored.team_a,
            team_b = %stored.team_b,
            goals_a = stored.goals_a,
            goals_b = stored.goals_b,
            "Match recorded"
        );
        self.emit(MatchEvent::Recorded {
            result: stored.clone(),
        });

        Ok(stored)
    }

    pub async fn get_match(&self, id: MatchId) -> ChampionshipResult<Match> {
        self.matches
            .find_by_id(id)
            .await?
            .ok_or(ChampionshipError::MatchNotFound(id))
    }

    pub async fn list_matches(&self) -> ChampionshipResult<Vec<Match>> {
        Ok(self.matches.list().await?)
    }

    /// Replace teams and score of a match
    ///
    /// The same reference rules as recording apply; the match being edited
    /// does not count as a duplicate of itself.
    pub async fn update_match(
        &self,
        id: MatchId,
        team_a: &str,
        team_b: &str,
        goals_a: i64,
        goals_b: i64,
    ) -> ChampionshipResult<Match> {
        let result = NewMatch::new(team_a, team_b, goals_a, goals_b)?;
        let _guard = self.writer.lock().await;

        let mut stored = self.get_match(id).await?;
        self.check_pairing(&result, Some(id)).await?;

        let event = stored.replace(result);
        self.matches.update(&stored).await?;
        tracing::info!(match_id = id, "Match updated");
        self.emit(event);

        Ok(stored)
    }

    pub async fn remove_match(&self, id: MatchId) -> ChampionshipResult<Match> {
        let _guard = self.writer.lock().await;

        self.get_match(id).await?;
        let removed = self.matches.delete(id).await?;
        tracing::info!(match_id = id, "Match removed");
        self.emit(MatchEvent::Removed {
            result: removed.clone(),
        });

        Ok(removed)
    }

    // ===== Whole championship =====

    /// Delete every team and match
    pub async fn clear(&self) -> ChampionshipResult<(usize, usize)> {
        let _guard = self.writer.lock().await;

        let (teams_removed, matches_removed) = self.teams.clear().await?;
        tracing::warn!(teams_removed, matches_removed, "All championship data cleared");
        self.emit(AuditEvent::Cleared {
            teams_removed,
            matches_removed,
        });

        Ok((teams_removed, matches_removed))
    }

    /// Compute standings over a consistent snapshot
    pub async fn rankings(&self) -> ChampionshipResult<Rankings> {
        let (teams, matches) = {
            let _guard = self.writer.lock().await;
            (self.teams.list(None).await?, self.matches.list().await?)
        };

        compute_rankings(&teams, &matches).map_err(|e| {
            tracing::error!(error = %e, "Stored championship data is inconsistent");
            ChampionshipError::from(e)
        })
    }

    /// Most recent audit records, oldest first
    pub fn recent_audit(&self, limit: usize) -> Vec<AuditRecord> {
        self.audit.recent(limit)
    }

    // ===== Bulk import =====

    /// Register one team per line of `<name> <DD/MM> <group>`
    pub async fn import_teams(&self, text: &str) -> Vec<LineReport> {
        let mut reports = Vec::new();
        for Parsed { line, text, result } in parse_team_lines(text) {
            let outcome = match result {
                Ok(row) => self
                    .register_team(&row.name, &row.registration_date, row.group_number)
                    .await
                    .map(|team| format!("Added Team: {}", team.name()))
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            reports.push(report(line, text, outcome));
        }
        reports
    }

    /// Record one match per line of `<team_a> <team_b> <goals_a> <goals_b>`
    pub async fn import_matches(&self, text: &str) -> Vec<LineReport> {
        let mut reports = Vec::new();
        for Parsed { line, text, result } in parse_match_lines(text) {
            let outcome = match result {
                Ok(row) => self
                    .record_match(&row.team_a, &row.team_b, row.goals_a, row.goals_b)
                    .await
                    .map(|m| format!("Added Match: {} vs {}", m.team_a, m.team_b))
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            reports.push(report(line, text, outcome));
        }
        reports
    }

    // ===== Helpers =====

    async fn check_pairing(
        &self,
        result: &NewMatch,
        editing: Option<MatchId>,
    ) -> ChampionshipResult<()> {
        let team_a = self.require_team(&result.team_a).await?;
        let team_b = self.require_team(&result.team_b).await?;

        if team_a.group() != team_b.group() {
            return Err(ChampionshipError::CrossGroupMatch {
                team_a: result.team_a.clone(),
                team_b: result.team_b.clone(),
            });
        }

        if let Some(existing) = self.matches.find_pairing(&result.team_a, &result.team_b).await? {
            if Some(existing.id) != editing {
                return Err(ChampionshipError::DuplicateMatch {
                    team_a: result.team_a.clone(),
                    team_b: result.team_b.clone(),
                });
            }
        }

        Ok(())
    }

    async fn require_team(&self, name: &str) -> ChampionshipResult<Team> {
        self.teams
            .find_by_name(name)
            .await?
            .ok_or_else(|| ChampionshipError::UnknownTeam(name.to_string()))
    }

    fn emit(&self, event: impl Into<AuditEvent>) {
        self.audit.record(AuditRecord::now(event));
    }
}

fn report(line: usize, input: String, outcome: Result<String, String>) -> LineReport {
    let ok = outcome.is_ok();
    let message = outcome.unwrap_or_else(|e| e);
    LineReport {
        line,
        input,
        ok,
        message,
    }
}
